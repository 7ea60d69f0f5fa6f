use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use super::scroll::open_external;
use crate::catalog::{category_set, filter_projects, CategoryFilter, ProjectRecord};
use crate::gallery::{card_class, card_style, gallery_cards, switch_filter, CardModel};
use crate::reveal::{Generation, RevealTracker, PROJECT_REVEAL};

// Keyed by generation so a new composition remounts every card.
#[derive(Debug, Clone)]
struct MountedCard {
    generation: Generation,
    model: CardModel<'static>,
}

#[component]
pub fn ProjectsSection(catalog: &'static [ProjectRecord]) -> impl IntoView {
    let (selected, set_selected) = signal(CategoryFilter::All);
    let tracker = RwSignal::new(RevealTracker::new());

    let select = move |choice: CategoryFilter| {
        let current = selected.get_untracked();
        if current == choice {
            return;
        }
        let remounted = tracker
            .try_update(|t| switch_filter(t, catalog, current, choice))
            .flatten();
        set_selected(choice);
        if let Some(generation) = remounted {
            log::debug!("showing {} ({generation:?})", choice.label());
        }
    };

    let generation = Memo::new(move |_| tracker.with(|t| t.generation()));
    let cards = move || {
        let generation = generation.get();
        let filtered = filter_projects(catalog, selected.get());
        gallery_cards(&filtered, PROJECT_REVEAL)
            .into_iter()
            .map(|model| MountedCard { generation, model })
            .collect::<Vec<_>>()
    };
    let is_empty = move || filter_projects(catalog, selected.get()).is_empty();

    view! {
        <section id="projects" class="py-20 relative overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-1/4 right-1/4 w-96 h-96 rounded-full bg-gradient-to-r from-neon-purple/10 to-transparent blur-3xl"></div>
                <div class="absolute bottom-1/4 left-1/4 w-72 h-72 rounded-full bg-gradient-to-r from-neon-cyan/10 to-transparent blur-3xl"></div>
            </div>
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16 space-y-4">
                    <h2 class="text-4xl lg:text-6xl font-orbitron font-bold text-gradient">
                        "FEATURED PROJECTS"
                    </h2>
                    <div class="h-1 w-32 bg-gradient-to-r from-primary to-accent rounded-full mx-auto glow-cyan"></div>
                    <p class="text-xl text-muted-foreground font-rajdhani max-w-2xl mx-auto">
                        "Showcasing innovative solutions and technical expertise across various domains"
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {category_set()
                        .map(|choice| {
                            view! {
                                <button
                                    class=move || {
                                        if selected.get() == choice {
                                            "px-3 py-1.5 rounded-md font-rajdhani font-medium transition-all duration-300 bg-primary text-primary-foreground glow-cyan"
                                        } else {
                                            "px-3 py-1.5 rounded-md font-rajdhani font-medium transition-all duration-300 border border-border text-muted-foreground hover:text-primary hover:border-primary"
                                        }
                                    }
                                    on:click=move |_| select(choice)
                                >
                                    {choice.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=cards
                        key=|card| (card.generation, card.model.project.title.clone())
                        let:card
                    >
                        <ProjectCard card tracker />
                    </For>
                </div>
                <Show when=is_empty>
                    <p class="text-center text-muted-foreground font-rajdhani">
                        "No projects in this category yet."
                    </p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(card: MountedCard, tracker: RwSignal<RevealTracker>) -> impl IntoView {
    let MountedCard {
        generation,
        model: CardModel {
            position,
            project,
            delay,
        },
    } = card;
    let card_ref = NodeRef::<html::Div>::new();
    let state = use_reveal(card_ref, tracker, generation, position, PROJECT_REVEAL);

    view! {
        <div
            node_ref=card_ref
            data-project-index=position.to_string()
            class=move || card_class(state.get())
            style=card_style(delay)
        >
            <div class="p-6 pb-4">
                <div class="flex items-start justify-between gap-2 mb-4">
                    <h3 class="font-orbitron font-bold text-xl text-foreground group-hover:text-primary transition-colors">
                        {project.title.clone()}
                    </h3>
                    {project
                        .status
                        .map(|status| {
                            view! {
                                <span class="px-2 py-0.5 text-xs font-rajdhani rounded-full border border-primary text-primary whitespace-nowrap">
                                    {status.label()}
                                </span>
                            }
                        })}
                </div>
                <p class="text-muted-foreground font-rajdhani leading-relaxed mb-6">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-xs font-rajdhani font-medium bg-secondary text-secondary-foreground rounded-full border border-border">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3 mt-6 empty:hidden">
                    {project
                        .demo_link
                        .as_deref()
                        .map(|url| view! { <LinkButton url label="Live Demo" /> })}
                    {project
                        .github_link
                        .as_deref()
                        .map(|url| view! { <LinkButton url label="Source" /> })}
                </div>
            </div>
            <div class="absolute inset-0 bg-gradient-to-t from-primary/10 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none"></div>
        </div>
    }
}

#[component]
fn LinkButton(url: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="px-3 py-1.5 text-sm rounded-md font-rajdhani border border-primary text-primary hover:bg-primary hover:text-primary-foreground transition-colors"
            on:click=move |_| open_external(url)
        >
            {label}
        </button>
    }
}
