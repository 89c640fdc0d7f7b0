//! Platform-free interaction state
//!
//! Everything in here is plain state plus small traits for the pieces the
//! browser provides, so it runs under `cargo test` without a webview:
//! - **scroll_feed**: one publisher for the document scroll offset
//! - **reveal**: one-shot viewport reveal flags per section
//! - **parallax**: hero scroll progress and layer styles
//! - **nav**: navbar scrolled/dropdown/mobile menu state and anchor navigation
//! - **form**: contact form submission state machine

pub mod form;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod scroll_feed;

pub use form::{ContactForm, ContactMessage, FormPhase, PracticeArea, SimulatedBackend, SubmitError};
pub use nav::{AnchorResolver, NavController, NavState, SectionId};
pub use parallax::{ParallaxController, ParallaxFrame};
pub use reveal::{IntersectionEntry, IntersectionSource, RevealCoordinator, RevealFlag, RevealOptions};
pub use scroll_feed::{FeedSubscription, ScrollFeed, ViewportEvent};

#[cfg(test)]
mod tests {
    use super::{NavController, NavState};

    #[test]
    fn test_nav_state_is_reachable_from_motion_root() {
        let mut nav = NavController::new(50.0);
        nav.on_scroll(120.0);
        let published: NavState = nav.state().clone();
        assert!(published.scrolled);
        assert_ne!(published, NavState::default());
    }
}
