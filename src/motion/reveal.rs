//! One-shot viewport reveal coordination.
//!
//! Each section subscribes its root element once. The first time the element
//! is sufficiently inside the viewport the section's flag flips to visible and
//! the observation is released; the flag never reverts.
//!
//! The platform's intersection capability is injected through
//! [`IntersectionSource`] so the coordinator can be driven by synthetic
//! entries in tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Browsers report crossing ratios with some rounding.
const RATIO_EPSILON: f64 = 1e-3;

/// Observation settings for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    root_margin_px: Option<f64>,
}

impl RevealOptions {
    /// Threshold is clamped into `(0, 1]`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f64::EPSILON, 1.0)
        } else {
            1.0
        };
        Self {
            threshold,
            root_margin_px: None,
        }
    }

    pub fn with_root_margin(mut self, px: f64) -> Self {
        self.root_margin_px = Some(px);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin_px(&self) -> Option<f64> {
        self.root_margin_px
    }

    /// Margin in the platform's string form, e.g. `"50px"`.
    pub fn root_margin_css(&self) -> String {
        match self.root_margin_px {
            Some(px) => format!("{px}px"),
            None => "0px".to_string(),
        }
    }

    /// Whether an entry satisfies these options.
    pub fn qualifies(&self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && entry.ratio + RATIO_EPSILON >= self.threshold
    }
}

/// One intersection report for an observed region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Fraction of the region inside the (margin-expanded) viewport.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn visible(ratio: f64) -> Self {
        Self { is_intersecting: true, ratio }
    }

    pub fn hidden() -> Self {
        Self { is_intersecting: false, ratio: 0.0 }
    }
}

/// Platform capability that watches regions and later reports entries back
/// through [`RevealCoordinator::deliver`].
pub trait IntersectionSource {
    fn observe(&mut self, region: &str, options: &RevealOptions);
    fn release(&mut self, region: &str);
}

/// Read side of a section's visibility flag.
#[derive(Debug, Clone, Default)]
pub struct RevealFlag(Rc<Cell<bool>>);

impl RevealFlag {
    pub fn is_visible(&self) -> bool {
        self.0.get()
    }

    fn raise(&self) {
        self.0.set(true);
    }
}

struct Watch {
    options: RevealOptions,
    flag: RevealFlag,
    on_reveal: Box<dyn FnMut(&RevealFlag)>,
}

pub struct RevealCoordinator<S: IntersectionSource> {
    source: S,
    watches: HashMap<String, Watch>,
}

impl<S: IntersectionSource> RevealCoordinator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            watches: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    pub fn is_watching(&self, region: &str) -> bool {
        self.watches.contains_key(region)
    }

    /// Start watching `region`. Re-subscribing a watched region replaces the
    /// previous watch.
    ///
    /// `on_reveal` runs once, after the flag is raised, and receives the flag
    /// so observers mirror it instead of keeping their own state.
    pub fn subscribe(
        &mut self,
        region: &str,
        options: RevealOptions,
        on_reveal: impl FnMut(&RevealFlag) + 'static,
    ) -> RevealFlag {
        if self.watches.remove(region).is_some() {
            self.source.release(region);
        }
        let flag = RevealFlag::default();
        self.source.observe(region, &options);
        self.watches.insert(
            region.to_string(),
            Watch {
                options,
                flag: flag.clone(),
                on_reveal: Box::new(on_reveal),
            },
        );
        debug!(region, threshold = options.threshold(), "reveal observation registered");
        flag
    }

    /// Feed one platform entry. Returns true when this entry revealed the
    /// region.
    pub fn deliver(&mut self, region: &str, entry: IntersectionEntry) -> bool {
        let Some(watch) = self.watches.get(region) else {
            return false;
        };
        if watch.flag.is_visible() || !watch.options.qualifies(&entry) {
            return false;
        }
        let Some(mut watch) = self.watches.remove(region) else {
            return false;
        };
        watch.flag.raise();
        self.source.release(region);
        (watch.on_reveal)(&watch.flag);
        debug!(region, ratio = entry.ratio, "region revealed");
        true
    }

    /// Teardown: release the observation whether or not it ever fired.
    pub fn unsubscribe(&mut self, region: &str) {
        if self.watches.remove(region).is_some() {
            self.source.release(region);
            debug!(region, "reveal observation released before firing");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records observe/release calls in order.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub observed: Vec<(String, RevealOptions)>,
        pub released: Vec<String>,
    }

    impl FakeSource {
        pub fn active(&self) -> usize {
            self.observed.len() - self.released.len()
        }
    }

    impl IntersectionSource for FakeSource {
        fn observe(&mut self, region: &str, options: &RevealOptions) {
            self.observed.push((region.to_string(), *options));
        }

        fn release(&mut self, region: &str) {
            self.released.push(region.to_string());
        }
    }

    #[test]
    fn test_flag_flips_once_and_never_reverts() {
        let mut coordinator = RevealCoordinator::new(FakeSource::default());
        let calls = Rc::new(RefCell::new(0));
        let c = calls.clone();
        let flag = coordinator.subscribe("about", RevealOptions::new(0.2), move |_| *c.borrow_mut() += 1);

        assert!(!flag.is_visible());
        assert!(!coordinator.deliver("about", IntersectionEntry::visible(0.1)));
        assert!(!flag.is_visible());

        assert!(coordinator.deliver("about", IntersectionEntry::visible(0.25)));
        assert!(flag.is_visible());

        assert!(!coordinator.deliver("about", IntersectionEntry::hidden()));
        assert!(!coordinator.deliver("about", IntersectionEntry::visible(1.0)));
        assert!(flag.is_visible());
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_region_already_in_view_reveals_on_first_callback() {
        let mut coordinator = RevealCoordinator::new(FakeSource::default());
        let flag = coordinator.subscribe("team", RevealOptions::new(0.15), |_| {});
        assert!(coordinator.deliver("team", IntersectionEntry::visible(1.0)));
        assert!(flag.is_visible());
    }

    #[test]
    fn test_observation_released_immediately_after_reveal() {
        let mut coordinator = RevealCoordinator::new(FakeSource::default());
        coordinator.subscribe("contact", RevealOptions::new(0.15).with_root_margin(50.0), |_| {});
        assert_eq!(coordinator.source().active(), 1);

        coordinator.deliver("contact", IntersectionEntry::visible(0.5));
        assert_eq!(coordinator.source().released, vec!["contact".to_string()]);
        assert!(!coordinator.is_watching("contact"));

        // A later unmount must not release twice.
        coordinator.unsubscribe("contact");
        assert_eq!(coordinator.source().released.len(), 1);
    }

    #[test]
    fn test_unsubscribe_releases_unfired_observation() {
        let mut coordinator = RevealCoordinator::new(FakeSource::default());
        let flag = coordinator.subscribe("footer", RevealOptions::new(0.2), |_| {});
        coordinator.unsubscribe("footer");

        assert_eq!(coordinator.source().active(), 0);
        assert!(!coordinator.deliver("footer", IntersectionEntry::visible(1.0)));
        assert!(!flag.is_visible());
    }

    #[test]
    fn test_resubscribe_replaces_previous_watch() {
        let mut coordinator = RevealCoordinator::new(FakeSource::default());
        coordinator.subscribe("hero", RevealOptions::new(0.1), |_| {});
        coordinator.subscribe("hero", RevealOptions::new(0.1), |_| {});
        assert_eq!(coordinator.source().observed.len(), 2);
        assert_eq!(coordinator.source().active(), 1);
    }

    #[test]
    fn test_reveal_callback_sees_the_raised_flag() {
        let mut coordinator = RevealCoordinator::new(FakeSource::default());
        let mirrored = Rc::new(Cell::new(false));
        let m = mirrored.clone();
        let flag = coordinator.subscribe("practice-areas", RevealOptions::new(0.15), move |flag| {
            m.set(flag.is_visible())
        });

        coordinator.deliver("practice-areas", IntersectionEntry::visible(0.05));
        assert!(!mirrored.get());

        coordinator.deliver("practice-areas", IntersectionEntry::visible(0.4));
        assert!(mirrored.get());
        assert_eq!(mirrored.get(), flag.is_visible());
    }

    #[test]
    fn test_non_intersecting_entry_never_qualifies() {
        let options = RevealOptions::new(0.1);
        let entry = IntersectionEntry { is_intersecting: false, ratio: 0.9 };
        assert!(!options.qualifies(&entry));
    }

    #[test]
    fn test_options_clamp_threshold_and_render_margin() {
        assert_eq!(RevealOptions::new(3.0).threshold(), 1.0);
        assert!(RevealOptions::new(0.0).threshold() > 0.0);
        assert_eq!(RevealOptions::new(0.2).with_root_margin(50.0).root_margin_css(), "50px");
        assert_eq!(RevealOptions::new(0.2).root_margin_css(), "0px");
    }
}
