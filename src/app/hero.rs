use leptos::prelude::*;

use super::icon::Icon;
use super::scroll::{scroll_to_section, Section};
use crate::glyph::Glyph;
use crate::portfolio::Hero;

#[component]
pub fn HeroSection(hero: &'static Hero) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    // effects only run once hydrated, so the server render stays hidden
    Effect::new(move |_| set_visible(true));
    let fade = move |extra: &str| {
        if visible.get() {
            format!("animate-fade-in {extra}")
        } else {
            "opacity-0".to_string()
        }
    };

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 rounded-full bg-gradient-to-r from-neon-cyan/20 to-transparent blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 rounded-full bg-gradient-to-r from-neon-purple/20 to-transparent blur-3xl animate-pulse delay-1000"></div>
            </div>
            <div class="max-w-7xl mx-auto px-6 py-20 grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                <div class=move || format!("space-y-8 {}", fade(""))>
                    <div class="space-y-4">
                        <h1 class="text-5xl lg:text-7xl font-orbitron font-bold leading-tight">
                            <span class="text-gradient">{hero.headline_accent.clone()}</span>
                            <br />
                            <span class="text-foreground">{hero.headline.clone()}</span>
                        </h1>
                        <div class="h-1 w-24 bg-gradient-to-r from-primary to-accent rounded-full glow-cyan"></div>
                    </div>
                    <div class="space-y-6 text-lg font-rajdhani">
                        {hero
                            .paragraphs
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-muted-foreground leading-relaxed">{p.clone()}</p>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <button
                            class="px-8 py-3 rounded-md bg-primary hover:bg-primary/90 text-primary-foreground font-rajdhani font-semibold tracking-wide glow-cyan hover-lift"
                            on:click=move |_| {
                                scroll_to_section(Section::Projects);
                            }
                        >
                            "View My Work"
                        </button>
                        <button
                            class="px-8 py-3 rounded-md border border-primary text-primary hover:bg-primary hover:text-primary-foreground font-rajdhani font-semibold tracking-wide transition-all duration-300"
                            on:click=move |_| {
                                scroll_to_section(Section::Contact);
                            }
                        >
                            "Get In Touch"
                        </button>
                    </div>
                </div>
                <div class=move || format!("relative {}", fade("delay-300"))>
                    <div class="relative w-full max-w-lg mx-auto">
                        <div class="absolute inset-0 bg-gradient-to-r from-primary/30 to-accent/30 rounded-full blur-2xl scale-105"></div>
                        <div class="relative glass-card rounded-full overflow-hidden hover-lift w-96 h-96 mx-auto">
                            <img
                                src=hero.image.clone()
                                alt=hero.image_alt.clone()
                                class="w-full h-full object-cover"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-background/20 via-transparent to-transparent rounded-full"></div>
                        </div>
                        <div class="absolute -top-6 -right-6 w-10 h-10 bg-primary rounded-full glow-cyan animate-pulse"></div>
                        <div class="absolute -bottom-6 -left-6 w-8 h-8 bg-accent rounded-full glow-purple animate-pulse delay-500"></div>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <button
                    class="text-muted-foreground hover:text-primary transition-colors text-2xl"
                    aria-label="Scroll to skills"
                    on:click=move |_| {
                        scroll_to_section(Section::Skills);
                    }
                >
                    <Icon glyph=Glyph::ChevronDown class="w-6 h-6" />
                </button>
            </div>
        </section>
    }
}
