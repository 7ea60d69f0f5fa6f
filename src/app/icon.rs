use leptos::prelude::*;

use crate::glyph::Glyph;

#[component]
pub fn Icon(#[prop(into)] glyph: Signal<Glyph>, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=format!("inline-block shrink-0 {class}")
        >
            {move || {
                glyph
                    .get()
                    .paths()
                    .iter()
                    .map(|d| view! { <path d=*d /> })
                    .collect_view()
            }}
        </svg>
    }
}
