use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::icon::Icon;
use super::scroll::{open_external, scroll_to_section, Section};
use crate::glyph::Glyph;
use crate::portfolio::ContactInfo;

const SCROLLED_PAST: f64 = 50.0;

#[component]
pub fn Navigation(brand: String, contact: &'static ContactInfo) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = move || scroll_y.get() > SCROLLED_PAST;
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |section: Section| {
        if scroll_to_section(section) {
            set_menu_open(false);
        }
    };
    let mailto = contact.mailto();

    view! {
        <nav class=move || {
            if is_scrolled() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 glass-card backdrop-blur-xl"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-2xl font-orbitron font-bold text-gradient">{brand}</div>
                    <div class="hidden md:flex items-center space-x-8">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="text-foreground hover:text-primary transition-colors font-rajdhani font-medium"
                                        on:click=move |_| go_to(section)
                                    >
                                        {section.nav_label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="hidden md:flex items-center space-x-4">
                        <SocialButtons mailto=mailto.clone() linkedin=contact.linkedin.as_str() with_labels=false />
                    </div>
                    <button
                        class="md:hidden text-foreground hover:text-primary text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <Icon
                            glyph=Signal::derive(move || {
                                if menu_open.get() { Glyph::Close } else { Glyph::Menu }
                            })
                            class="w-6 h-6"
                        />
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 glass-card rounded-lg p-6 animate-fade-in">
                        <div class="flex flex-col space-y-4">
                            {Section::NAV
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            class="text-left text-foreground hover:text-primary transition-colors font-rajdhani font-medium"
                                            on:click=move |_| go_to(section)
                                        >
                                            {section.nav_label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <div class="flex items-center space-x-4 pt-4 border-t border-border">
                                <SocialButtons
                                    mailto=mailto.clone()
                                    linkedin=contact.linkedin.as_str()
                                    with_labels=true
                                />
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn SocialButtons(mailto: String, linkedin: &'static str, with_labels: bool) -> impl IntoView {
    view! {
        <button
            class="flex items-center text-foreground hover:text-primary hover:glow-cyan"
            aria-label="Email"
            on:click=move |_| open_external(&mailto)
        >
            <Icon glyph=Glyph::Mail class="w-5 h-5" />
            {with_labels.then(|| view! { <span class="ml-2">"Email"</span> })}
        </button>
        <button
            class="flex items-center text-foreground hover:text-primary hover:glow-cyan"
            aria-label="LinkedIn"
            on:click=move |_| open_external(linkedin)
        >
            <Icon glyph=Glyph::Linkedin class="w-5 h-5" />
            {with_labels.then(|| view! { <span class="ml-2">"LinkedIn"</span> })}
        </button>
    }
}
