use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{Generation, RevealConfig, RevealEvent, RevealState, RevealTracker};

// The observer is dropped with the calling component.
pub fn use_reveal(
    target: NodeRef<html::Div>,
    tracker: RwSignal<RevealTracker>,
    generation: Generation,
    position: usize,
    config: RevealConfig,
) -> Memo<RevealState> {
    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if !entries
                .iter()
                .any(|e| config.admits(e.is_intersecting(), e.intersection_ratio()))
            {
                return;
            }
            let event = RevealEvent::Entered {
                generation,
                position,
            };
            tracker.maybe_update(|t| t.apply(event));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![config.threshold]),
    );

    Memo::new(move |_| tracker.with(|t| RevealState::of(t, position)))
}
