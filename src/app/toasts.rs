use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::notice::{Notice, NoticeKind, Notices, NOTICE_LIFETIME};

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = expect_context::<RwSignal<Notices>>();
    view! {
        <div class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm">
            <For
                each=move || notices.with(|n| n.iter().cloned().collect::<Vec<_>>())
                key=|notice| notice.id
                let:notice
            >
                <Toast notice notices />
            </For>
        </div>
    }
}

#[component]
fn Toast(notice: Notice, notices: RwSignal<Notices>) -> impl IntoView {
    let id = notice.id;
    let dismiss = move || {
        notices.maybe_update(|n| n.dismiss(id));
    };
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| dismiss(), NOTICE_LIFETIME.as_millis() as f64);
    start(());

    let class = match notice.kind {
        NoticeKind::Success => "glass-card border border-primary/40 rounded-lg p-4 text-left",
        NoticeKind::Failure => {
            "glass-card border border-destructive bg-destructive/20 rounded-lg p-4 text-left"
        }
    };
    view! {
        <button class=class role="status" on:click=move |_| dismiss()>
            <div class="font-orbitron font-semibold text-foreground">{notice.title}</div>
            <div class="text-sm text-muted-foreground font-rajdhani">{notice.description}</div>
        </button>
    }
}
