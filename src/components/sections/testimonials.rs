use dioxus::prelude::*;

use crate::components::common::{reveal_class, reveal_options, transition_delay_style, Reveal, RevealDirection, SectionHeading};
use crate::constants::*;
use crate::content::{stagger_ms, TESTIMONIAL_VIDEOS};
use crate::hooks::{use_reveal, use_section_anchor};
use crate::motion::SectionId;

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn Testimonials() -> Element {
    let registry = use_section_anchor(SectionId::Testimonials);
    let visible = use_reveal(
        SectionId::Testimonials.anchor(),
        reveal_options(REVEAL_TESTIMONIALS),
    );

    let shown = visible();

    rsx! {
        section {
            id: "{SectionId::Testimonials.anchor()}",
            style: "position: relative; padding: {SECTION_PADDING}; background-color: {NAVY_900}; overflow: hidden;",
            onmounted: move |e| registry.attach(SectionId::Testimonials, e.data()),

            div {
                style: "position: relative; max-width: {SECTION_MAX_WIDTH}; margin: 0 auto;",
                Reveal {
                    visible: shown,
                    direction: RevealDirection::Up,
                    SectionHeading {
                        label: "Depoimentos",
                        title: "O que dizem nossos",
                        highlight: "clientes",
                        lead: "A satisfação e os resultados de nossos clientes são a base do nosso escritório. Confira alguns relatos sobre nossa atuação.",
                        on_dark: true,
                    }
                }

                div {
                    class: "stack-on-narrow",
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 3rem 2rem;",
                    for (index, video) in TESTIMONIAL_VIDEOS.into_iter().enumerate() {
                        div {
                            key: "{video.id}",
                            class: "{reveal_class(RevealDirection::Up, shown)}",
                            style: "position: relative; {transition_delay_style(stagger_ms(0, 150, index))}",
                            div {
                                style: "position: relative; aspect-ratio: 16 / 9; overflow: hidden; background-color: {NAVY_800}; border: 1px solid rgba(255, 255, 255, 0.05); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);",
                                iframe {
                                    src: "{video.embed_url()}",
                                    title: "{video.title}",
                                    allow: IFRAME_ALLOW,
                                    allowfullscreen: true,
                                    style: "width: 100%; height: 100%; border: 0;",
                                }
                            }
                            div {
                                style: "margin-top: 1rem; display: flex; align-items: center; gap: 0.75rem;",
                                span { style: "width: 6px; height: 6px; border-radius: 50%; background-color: {GOLD_500};" }
                                span { style: "font-size: 0.75rem; font-weight: 500; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255, 255, 255, 0.4);", "{video.title}" }
                            }
                        }
                    }
                }

                Reveal {
                    visible: shown,
                    direction: RevealDirection::Up,
                    delay_ms: 500,
                    style: "margin-top: 5rem; text-align: center;",
                    div {
                        style: "display: inline-block; padding: 0.25rem; border: 1px solid rgba(201, 176, 55, 0.2);",
                        div {
                            style: "padding: 1rem 2rem; background-color: {NAVY_800}; border: 1px solid rgba(201, 176, 55, 0.3);",
                            p {
                                style: "margin: 0; font-family: {FONT_SERIF}; font-style: italic; font-size: 1.5rem; color: {TEXT_ON_DARK};",
                                "\"Comprometimento com a verdade e justiça em cada caso.\""
                            }
                        }
                    }
                }
            }
        }
    }
}
