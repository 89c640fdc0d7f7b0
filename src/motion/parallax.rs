//! Hero parallax: scroll progress and the derived layer styles.

/// Vertical drift of the background layer per scrolled pixel.
pub const BACKGROUND_DRIFT: f64 = 0.3;
/// Extra background zoom at full progress.
pub const BACKGROUND_ZOOM: f64 = 0.02;
/// Background opacity lost at full progress.
pub const BACKGROUND_FADE: f64 = 0.5;

/// `offset / reference_height` clamped to `[0, 1]`.
///
/// Never panics: negative offsets give 0, overshoot gives 1, and a
/// zero-height reference yields 0 at the top of the page and 1 otherwise.
pub fn scroll_progress(offset: f64, reference_height: f64) -> f64 {
    let ratio = offset / reference_height;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Styles for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    pub progress: f64,
    pub background_offset_y: f64,
    pub background_scale: f64,
    pub background_opacity: f64,
    pub content_opacity: f64,
}

impl ParallaxFrame {
    pub fn at(offset: f64, reference_height: f64) -> Self {
        let progress = scroll_progress(offset, reference_height);
        let offset = if offset.is_finite() { offset } else { 0.0 };
        Self {
            progress,
            background_offset_y: offset * BACKGROUND_DRIFT,
            background_scale: 1.0 + progress * BACKGROUND_ZOOM,
            background_opacity: 1.0 - progress * BACKGROUND_FADE,
            content_opacity: 1.0 - progress,
        }
    }

    /// Resting frame before any scroll.
    pub fn rest() -> Self {
        Self::at(0.0, 1.0)
    }

    pub fn background_style(&self) -> String {
        format!(
            "transform: translateY({:.2}px) scale({:.4}); opacity: {:.3};",
            self.background_offset_y, self.background_scale, self.background_opacity
        )
    }

    pub fn content_style(&self) -> String {
        format!("opacity: {:.3};", self.content_opacity)
    }
}

/// Holds the hero's reference height and the latest scroll offset.
#[derive(Debug, Clone, Default)]
pub struct ParallaxController {
    reference_height: Option<f64>,
    offset: f64,
}

impl ParallaxController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest scroll offset and return its frame.
    pub fn on_scroll(&mut self, offset: f64) -> Option<ParallaxFrame> {
        if offset.is_finite() {
            self.offset = offset;
        }
        self.frame()
    }

    /// Record the hero's rendered height. Called on mount and on resize.
    ///
    /// Returns the frame for the most recent offset, which may have moved
    /// while the measurement was in flight.
    pub fn capture_reference(&mut self, height: f64) -> Option<ParallaxFrame> {
        if height.is_finite() && height >= 0.0 {
            self.reference_height = Some(height);
        }
        self.frame()
    }

    pub fn detach(&mut self) {
        self.reference_height = None;
    }

    pub fn reference_height(&self) -> Option<f64> {
        self.reference_height
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Frame for the latest offset, or `None` while the hero is not attached.
    pub fn frame(&self) -> Option<ParallaxFrame> {
        self.reference_height
            .map(|height| ParallaxFrame::at(self.offset, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_stays_in_unit_range() {
        for offset in [-500.0, -1.0, 0.0, 1.0, 400.0, 800.0, 801.0, 10_000.0] {
            let p = scroll_progress(offset, 800.0);
            assert!((0.0..=1.0).contains(&p), "offset {offset} gave {p}");
        }
        assert_eq!(scroll_progress(400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-20.0, 800.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 800.0), 1.0);
    }

    #[test]
    fn test_zero_reference_height_does_not_panic() {
        assert_eq!(scroll_progress(0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(10.0, 0.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 0.0), 0.0);
    }

    #[test]
    fn test_frame_values_at_half_progress() {
        let frame = ParallaxFrame::at(400.0, 800.0);
        assert!((frame.background_offset_y - 120.0).abs() < 1e-9);
        assert!((frame.background_scale - 1.01).abs() < 1e-9);
        assert!((frame.background_opacity - 0.75).abs() < 1e-9);
        assert!((frame.content_opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rest_frame_is_identity() {
        let frame = ParallaxFrame::rest();
        assert_eq!(frame.background_scale, 1.0);
        assert_eq!(frame.content_opacity, 1.0);
        assert_eq!(frame.content_style(), "opacity: 1.000;");
        assert_eq!(
            frame.background_style(),
            "transform: translateY(0.00px) scale(1.0000); opacity: 1.000;"
        );
    }

    #[test]
    fn test_detached_controller_is_a_no_op() {
        let mut controller = ParallaxController::new();
        assert!(controller.on_scroll(100.0).is_none());

        assert!(controller.capture_reference(900.0).is_some());
        assert!(controller.frame().is_some());

        controller.capture_reference(f64::NAN);
        assert_eq!(controller.reference_height(), Some(900.0));

        controller.detach();
        assert!(controller.on_scroll(100.0).is_none());
    }

    #[test]
    fn test_remeasure_uses_offset_that_arrived_during_measurement() {
        let mut controller = ParallaxController::new();
        controller.capture_reference(800.0);
        controller.on_scroll(100.0);

        // Resize starts a measurement at y=100, then the user scrolls on.
        controller.on_scroll(600.0);
        let frame = controller.capture_reference(800.0).expect("attached");

        assert_eq!(controller.offset(), 600.0);
        assert!((frame.progress - 0.75).abs() < 1e-9);
        assert_eq!(frame, ParallaxFrame::at(600.0, 800.0));
    }

    #[test]
    fn test_non_finite_offset_keeps_previous() {
        let mut controller = ParallaxController::new();
        controller.capture_reference(800.0);
        controller.on_scroll(400.0);
        let frame = controller.on_scroll(f64::INFINITY).expect("attached");
        assert_eq!(frame, ParallaxFrame::at(400.0, 800.0));
    }
}
