use dioxus::prelude::*;
use crate::constants::*;

/// Centered label, two-tone title and lead paragraph used atop most sections.
#[component]
pub fn SectionHeading(
    label: &'static str,
    title: &'static str,
    highlight: &'static str,
    lead: &'static str,
    #[props(default)] on_dark: bool,
) -> Element {
    let title_color = if on_dark { WHITE } else { NAVY_900 };
    let lead_color = if on_dark { "rgba(255, 255, 255, 0.7)" } else { TEXT_GRAY };

    rsx! {
        div {
            style: "text-align: center; max-width: 42rem; margin: 0 auto 5rem;",
            div {
                style: "display: flex; align-items: center; justify-content: center; gap: 1rem; margin-bottom: 1.5rem;",
                div { class: "gold-rule", style: "width: 2.5rem;" }
                span { class: "section-label", "{label}" }
                div { class: "gold-rule", style: "width: 2.5rem;" }
            }
            h2 {
                style: "color: {title_color}; font-size: 2.75rem; line-height: 1.2; margin-bottom: 1.5rem;",
                "{title} "
                span { style: "color: {GOLD_500};", "{highlight}" }
            }
            p { style: "color: {lead_color}; font-size: 1.125rem; line-height: 1.7; margin: 0;", "{lead}" }
        }
    }
}
