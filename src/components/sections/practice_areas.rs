use dioxus::prelude::*;

use crate::components::common::{reveal_class, reveal_options, transition_delay_style, Reveal, RevealDirection, SectionHeading};
use crate::config::SiteConfig;
use crate::constants::*;
use crate::content::{stagger_ms, PRACTICE_AREAS};
use crate::hooks::{use_reveal, use_section_anchor};
use crate::motion::SectionId;

#[component]
pub fn PracticeAreas() -> Element {
    let config = use_context::<SiteConfig>();
    let registry = use_section_anchor(SectionId::PracticeAreas);
    let visible = use_reveal(
        SectionId::PracticeAreas.anchor(),
        reveal_options(REVEAL_PRACTICE_AREAS),
    );

    let shown = visible();
    let whatsapp = config.contact.whatsapp_url();

    rsx! {
        section {
            id: "{SectionId::PracticeAreas.anchor()}",
            style: "position: relative; padding: {SECTION_PADDING}; background-color: {NAVY_900}; overflow: hidden;",
            onmounted: move |e| registry.attach(SectionId::PracticeAreas, e.data()),

            div { style: "position: absolute; top: 0; left: 0; width: 100%; height: 1px; background: rgba(255, 255, 255, 0.1);" }

            div {
                style: "position: relative; max-width: {SECTION_MAX_WIDTH}; margin: 0 auto;",
                Reveal {
                    visible: shown,
                    direction: RevealDirection::Up,
                    SectionHeading {
                        label: "Áreas de Atuação",
                        title: "Especialização que",
                        highlight: "Faz a Diferença",
                        lead: "Nosso foco exclusivo nas áreas Cível, Trabalhista e Criminal nos permite oferecer conhecimento aprofundado e estratégias eficientes para cada caso.",
                        on_dark: true,
                    }
                }

                div {
                    class: "stack-on-narrow",
                    style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem;",
                    for (index, area) in PRACTICE_AREAS.into_iter().enumerate() {
                        div {
                            key: "{area.number}",
                            class: "{reveal_class(RevealDirection::Up, shown)} lift-card",
                            style: "position: relative; padding: 2.5rem; background-color: {NAVY_800}; border: 1px solid rgba(255, 255, 255, 0.05); {transition_delay_style(stagger_ms(200, 150, index))}",
                            div {
                                style: "position: absolute; top: 2rem; right: 2rem; font-family: {FONT_SERIF}; font-size: 3rem; color: rgba(255, 255, 255, 0.05);",
                                "{area.number}"
                            }
                            div {
                                style: "width: 3.5rem; height: 3.5rem; margin-bottom: 2rem; border: 1px solid {GOLD_500}; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; color: {GOLD_500};",
                                "{area.icon}"
                            }
                            h3 { style: "font-size: 1.5rem; color: {GOLD_500}; margin-bottom: 1rem;", "{area.title}" }
                            p { style: "color: rgba(255, 255, 255, 0.7); line-height: 1.7; margin: 0 0 2rem;", "{area.description}" }
                            ul {
                                style: "list-style: none; padding: 0; margin: 0 0 2.5rem; display: flex; flex-direction: column; gap: 0.75rem;",
                                for service in area.services.iter() {
                                    li {
                                        key: "{service}",
                                        style: "display: flex; align-items: center; gap: 0.75rem; color: rgba(255, 255, 255, 0.7);",
                                        span { style: "color: {GOLD_500};", "✓" }
                                        "{service}"
                                    }
                                }
                            }
                            a {
                                class: "gold-hover",
                                href: "{whatsapp}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                style: "display: inline-flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; font-weight: 500; letter-spacing: 0.2em; text-transform: uppercase; color: {WHITE};",
                                "Falar com Especialista →"
                            }
                        }
                    }
                }

                Reveal {
                    visible: shown,
                    direction: RevealDirection::Up,
                    delay_ms: 700,
                    style: "text-align: center; margin-top: 4rem;",
                    a {
                        class: "btn-outline-white",
                        href: "{whatsapp}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Agendar Consulta →"
                    }
                }
            }
        }
    }
}
