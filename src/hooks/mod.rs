//! Component hooks over the shared scroll feed, reveal coordinator and
//! section registry.
//!
//! Every hook registers once on first render and releases what it
//! registered when the component is dropped.

use dioxus::prelude::*;

use crate::bridge::{SectionRegistry, SharedFeed, SharedReveal};
use crate::motion::{RevealOptions, SectionId, ViewportEvent};

/// Render-side mirror of the coordinator's visibility flag for `region`.
pub fn use_reveal(region: &'static str, options: RevealOptions) -> Signal<bool> {
    let shared = use_context::<SharedReveal>();
    let mut visible = use_signal(|| false);

    let subscriber = shared.clone();
    use_hook(move || {
        subscriber
            .0
            .borrow_mut()
            .subscribe(region, options, move |flag| visible.set(flag.is_visible()));
    });

    use_drop(move || shared.0.borrow_mut().unsubscribe(region));

    visible
}

/// Run `on_event` for every scroll/resize published on the page.
pub fn use_viewport_events(on_event: impl FnMut(ViewportEvent) + 'static) {
    let feed = use_context::<SharedFeed>();

    let subscriber = feed.clone();
    let handle = use_hook(move || subscriber.0.borrow_mut().subscribe(on_event));

    use_drop(move || {
        feed.0.borrow_mut().unsubscribe(handle);
    });
}

/// Registry handle for a section root; the entry is removed on drop.
pub fn use_section_anchor(section: SectionId) -> SectionRegistry {
    let registry = use_context::<SectionRegistry>();
    let on_drop = registry.clone();
    use_drop(move || on_drop.detach(section));
    registry
}
