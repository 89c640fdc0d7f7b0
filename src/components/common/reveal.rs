//! Class and style helpers for one-shot reveal transitions.
//!
//! The transitions themselves live in the global stylesheet; a section only
//! toggles `is-visible` once its flag flips.

use dioxus::prelude::*;

use crate::motion::RevealOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    Up,
    Left,
    Right,
    Fade,
}

impl RevealDirection {
    fn class(self) -> &'static str {
        match self {
            RevealDirection::Up => "reveal-up",
            RevealDirection::Left => "reveal-left",
            RevealDirection::Right => "reveal-right",
            RevealDirection::Fade => "reveal-fade",
        }
    }
}

/// Options from a `(threshold, root margin px)` tuning pair.
pub fn reveal_options((threshold, root_margin_px): (f64, Option<f64>)) -> RevealOptions {
    let options = RevealOptions::new(threshold);
    match root_margin_px {
        Some(px) => options.with_root_margin(px),
        None => options,
    }
}

pub fn reveal_class(direction: RevealDirection, visible: bool) -> String {
    if visible {
        format!("reveal {} is-visible", direction.class())
    } else {
        format!("reveal {}", direction.class())
    }
}

pub fn transition_delay_style(delay_ms: u64) -> String {
    if delay_ms == 0 {
        String::new()
    } else {
        format!("transition-delay: {delay_ms}ms;")
    }
}

/// Wraps children in a block that slides in from `direction` once `visible`.
#[component]
pub fn Reveal(
    visible: bool,
    direction: RevealDirection,
    #[props(default)] delay_ms: u64,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let class = reveal_class(direction, visible);
    let delay = transition_delay_style(delay_ms);

    rsx! {
        div {
            class: "{class}",
            style: "{delay} {style}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_block_has_no_visible_class() {
        assert_eq!(reveal_class(RevealDirection::Left, false), "reveal reveal-left");
    }

    #[test]
    fn test_visible_block_keeps_direction_class() {
        assert_eq!(reveal_class(RevealDirection::Up, true), "reveal reveal-up is-visible");
    }

    #[test]
    fn test_tuning_pairs_map_to_options() {
        let about = reveal_options((0.2, Some(50.0)));
        assert_eq!(about.threshold(), 0.2);
        assert_eq!(about.root_margin_css(), "50px");
        assert_eq!(reveal_options((0.2, None)).root_margin_px(), None);
    }

    #[test]
    fn test_zero_delay_emits_no_style() {
        assert!(transition_delay_style(0).is_empty());
        assert_eq!(transition_delay_style(350), "transition-delay: 350ms;");
    }
}
