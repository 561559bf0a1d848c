use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::RevealState;

/// Watches `target` until it first crosses `threshold`, then stops watching.
///
/// Without IntersectionObserver support the section is simply shown.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let state = RwSignal::new(RevealState::default());

    let UseIntersectionObserverReturn { is_supported, .. } =
        use_intersection_observer_with_options(
            target,
            move |entries, observer| {
                let hit = entries.iter().any(|entry| entry.is_intersecting());
                if state.try_update(|s| s.observe(hit)).unwrap_or(false) {
                    observer.disconnect();
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
        );

    Effect::new(move |_| {
        if !is_supported.get() {
            state.set(RevealState::revealed());
        }
    });

    Signal::derive(move || state.get().is_revealed())
}
