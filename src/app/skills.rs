use std::time::Duration;

use leptos::{html, prelude::*};

use super::icon::Icon;
use super::reveal::use_reveal;
use crate::portfolio::SkillGroup;
use crate::reveal::{
    delay_ms, stagger_delay, Generation, RevealTracker, SKILL_LINE_STAGGER, SKILL_REVEAL,
};

const PULSE_DOTS: usize = 5;
const PULSE_STEP: Duration = Duration::from_millis(200);

#[component]
pub fn SkillsSection(skills: &'static [SkillGroup]) -> impl IntoView {
    let tracker = RwSignal::new(RevealTracker::new());
    let generation = tracker.with_untracked(|t| t.generation());
    let total = skills.len();

    view! {
        <section id="skills" class="py-20 relative overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-0 left-1/3 w-72 h-72 rounded-full bg-gradient-to-r from-neon-purple/10 to-transparent blur-3xl"></div>
                <div class="absolute bottom-0 right-1/3 w-96 h-96 rounded-full bg-gradient-to-r from-neon-cyan/10 to-transparent blur-3xl"></div>
            </div>
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16 space-y-4">
                    <h2 class="text-4xl lg:text-6xl font-orbitron font-bold text-gradient">
                        "TECHNICAL SKILLS"
                    </h2>
                    <div class="h-1 w-32 bg-gradient-to-r from-primary to-accent rounded-full mx-auto glow-cyan"></div>
                    <p class="text-xl text-muted-foreground font-rajdhani max-w-2xl mx-auto">
                        "Technologies and tools I use to build exceptional digital experiences"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {skills
                        .iter()
                        .enumerate()
                        .map(|(position, group)| {
                            view! {
                                <SkillCard
                                    group
                                    position
                                    delay=stagger_delay(position, total, SKILL_REVEAL.stagger)
                                    tracker
                                    generation
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-16">
                    <p class="text-lg text-muted-foreground font-rajdhani mb-6">
                        "Always learning and adapting to new technologies"
                    </p>
                    <div class="flex justify-center space-x-2">
                        {(0..PULSE_DOTS)
                            .map(|i| {
                                view! {
                                    <div
                                        class="w-2 h-2 rounded-full bg-primary glow-cyan animate-pulse"
                                        style=format!("animation-delay: {}", delay_ms(PULSE_STEP * i as u32))
                                    ></div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    group: &'static SkillGroup,
    position: usize,
    delay: Duration,
    tracker: RwSignal<RevealTracker>,
    generation: Generation,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let state = use_reveal(card_ref, tracker, generation, position, SKILL_REVEAL);

    view! {
        <div
            node_ref=card_ref
            data-index=position.to_string()
            class=move || {
                format!(
                    "glass-card p-6 rounded-2xl hover-lift transition-all duration-500 {}",
                    state.get().card_class(),
                )
            }
            style=format!("animation-delay: {}", delay_ms(delay))
        >
            <div class="flex items-center space-x-4 mb-6">
                <div class=format!("p-3 rounded-xl bg-gradient-to-r {} glow-cyan", group.color)>
                    <Icon glyph=group.icon class="w-6 h-6 text-background" />
                </div>
                <h3 class="font-orbitron font-semibold text-lg text-foreground">
                    {group.category.clone()}
                </h3>
            </div>
            <div class="space-y-3">
                {group
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(line, skill)| {
                        let line_delay = delay + SKILL_LINE_STAGGER * line as u32;
                        view! {
                            <div
                                class=move || {
                                    format!(
                                        "flex items-center space-x-3 transition-all duration-300 {}",
                                        state.get().line_class(),
                                    )
                                }
                                style=format!("transition-delay: {}", delay_ms(line_delay))
                            >
                                <div class="w-2 h-2 rounded-full bg-gradient-to-r from-primary to-accent glow-cyan"></div>
                                <span class="text-muted-foreground font-rajdhani font-medium hover:text-primary transition-colors">
                                    {skill.clone()}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class=format!(
                "mt-6 h-1 rounded-full bg-gradient-to-r {} opacity-50",
                group.color,
            )></div>
        </div>
    }
}
