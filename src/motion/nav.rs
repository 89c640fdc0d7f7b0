//! Navigation bar state: scrolled styling, debounced dropdown, mobile menu,
//! and in-page anchor navigation.

use std::fmt;
use tracing::debug;

/// Stable anchors exposed by the page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    PracticeAreas,
    Team,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::PracticeAreas,
        SectionId::Team,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::PracticeAreas => "practice-areas",
            SectionId::Team => "team",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Accepts `#about` or `about`.
    pub fn parse(target: &str) -> Option<Self> {
        let id = target.trim().trim_start_matches('#');
        Self::ALL.into_iter().find(|section| section.anchor() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Locates section elements and scrolls them into view.
pub trait AnchorResolver {
    /// Smooth-scroll to `section`. Returns false if no element is attached.
    fn scroll_into_view(&mut self, section: SectionId) -> bool;
}

/// Token for one scheduled dropdown close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub dropdown_open: bool,
    pub mobile_menu_open: bool,
    pub pending_close: Option<TimerHandle>,
}

#[derive(Debug, Clone)]
pub struct NavController {
    state: NavState,
    scroll_threshold: f64,
    next_timer: u64,
}

impl NavController {
    pub fn new(scroll_threshold: f64) -> Self {
        Self {
            state: NavState::default(),
            scroll_threshold,
            next_timer: 0,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.state.scrolled = offset > self.scroll_threshold;
    }

    /// Open immediately, cancelling any pending close. Returns the cancelled
    /// handle so the caller can drop the matching timer.
    pub fn pointer_enter(&mut self) -> Option<TimerHandle> {
        let cancelled = self.state.pending_close.take();
        self.state.dropdown_open = true;
        cancelled
    }

    /// Schedule a close. The caller reports expiry via [`Self::close_elapsed`].
    pub fn pointer_leave(&mut self) -> TimerHandle {
        let handle = TimerHandle(self.next_timer);
        self.next_timer += 1;
        self.state.pending_close = Some(handle);
        handle
    }

    /// Close the dropdown if `handle` is still the pending close.
    pub fn close_elapsed(&mut self, handle: TimerHandle) -> bool {
        if self.state.pending_close != Some(handle) {
            return false;
        }
        self.state.pending_close = None;
        self.state.dropdown_open = false;
        true
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.state.mobile_menu_open = false;
    }

    /// Navigate to `target` and close every open menu. Unknown or detached
    /// targets are a no-op for scrolling.
    pub fn scroll_to_section(&mut self, target: &str, resolver: &mut impl AnchorResolver) -> bool {
        let resolved = match SectionId::parse(target) {
            Some(section) => resolver.scroll_into_view(section),
            None => false,
        };
        if !resolved {
            debug!(anchor = target, "navigation target did not resolve");
        }
        self.state.mobile_menu_open = false;
        self.state.dropdown_open = false;
        self.state.pending_close = None;
        resolved
    }

    /// Teardown: forget any pending close.
    pub fn teardown(&mut self) -> Option<TimerHandle> {
        self.state.pending_close.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeResolver {
        attached: Vec<SectionId>,
        scrolled_to: Vec<SectionId>,
    }

    impl AnchorResolver for FakeResolver {
        fn scroll_into_view(&mut self, section: SectionId) -> bool {
            if self.attached.contains(&section) {
                self.scrolled_to.push(section);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_scrolled_follows_threshold_both_ways() {
        let mut nav = NavController::new(50.0);
        nav.on_scroll(50.0);
        assert!(!nav.state().scrolled);
        nav.on_scroll(51.0);
        assert!(nav.state().scrolled);
        nav.on_scroll(10.0);
        assert!(!nav.state().scrolled);
    }

    #[test]
    fn test_reentry_before_delay_keeps_dropdown_open() {
        let mut nav = NavController::new(50.0);
        nav.pointer_enter();
        let pending = nav.pointer_leave();
        assert_eq!(nav.pointer_enter(), Some(pending));

        assert!(!nav.close_elapsed(pending));
        assert!(nav.state().dropdown_open);
        assert!(nav.state().pending_close.is_none());
    }

    #[test]
    fn test_uninterrupted_delay_closes_dropdown() {
        let mut nav = NavController::new(50.0);
        nav.pointer_enter();
        let pending = nav.pointer_leave();
        assert!(nav.state().dropdown_open);
        assert!(nav.close_elapsed(pending));
        assert!(!nav.state().dropdown_open);
    }

    #[test]
    fn test_stale_handle_does_not_close_newer_schedule() {
        let mut nav = NavController::new(50.0);
        nav.pointer_enter();
        let first = nav.pointer_leave();
        nav.pointer_enter();
        let second = nav.pointer_leave();
        assert_ne!(first, second);
        assert!(!nav.close_elapsed(first));
        assert!(nav.state().dropdown_open);
        assert!(nav.close_elapsed(second));
    }

    #[test]
    fn test_unknown_target_is_noop_and_closes_menus() {
        let mut nav = NavController::new(50.0);
        let mut resolver = FakeResolver::default();
        nav.toggle_mobile_menu();
        nav.pointer_enter();

        assert!(!nav.scroll_to_section("#pricing", &mut resolver));
        assert!(!nav.state().mobile_menu_open);
        assert!(!nav.state().dropdown_open);
        assert!(resolver.scrolled_to.is_empty());
    }

    #[test]
    fn test_detached_section_is_noop() {
        let mut nav = NavController::new(50.0);
        let mut resolver = FakeResolver::default();
        assert!(!nav.scroll_to_section("#team", &mut resolver));
        assert!(resolver.scrolled_to.is_empty());
    }

    #[test]
    fn test_known_target_scrolls_and_closes_menus() {
        let mut nav = NavController::new(50.0);
        let mut resolver = FakeResolver {
            attached: vec![SectionId::Contact],
            ..Default::default()
        };
        nav.toggle_mobile_menu();
        nav.pointer_enter();
        nav.pointer_leave();

        assert!(nav.scroll_to_section("#contact", &mut resolver));
        assert_eq!(resolver.scrolled_to, vec![SectionId::Contact]);
        assert_eq!(
            *nav.state(),
            NavState { scrolled: false, dropdown_open: false, mobile_menu_open: false, pending_close: None }
        );
    }

    #[test]
    fn test_section_parse_accepts_fragment_and_bare_id() {
        assert_eq!(SectionId::parse("#practice-areas"), Some(SectionId::PracticeAreas));
        assert_eq!(SectionId::parse("about"), Some(SectionId::About));
        assert_eq!(SectionId::parse("#"), None);
        assert_eq!(SectionId::Testimonials.href(), "#testimonials");
    }

    #[test]
    fn test_mobile_menu_toggles() {
        let mut nav = NavController::new(50.0);
        nav.toggle_mobile_menu();
        assert!(nav.state().mobile_menu_open);
        nav.toggle_mobile_menu();
        assert!(!nav.state().mobile_menu_open);
        nav.toggle_mobile_menu();
        nav.close_mobile_menu();
        assert!(!nav.state().mobile_menu_open);
    }
}
