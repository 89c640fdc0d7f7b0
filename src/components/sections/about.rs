use dioxus::prelude::*;

use crate::components::common::{reveal_class, reveal_options, transition_delay_style, Reveal, RevealDirection};
use crate::config::SiteConfig;
use crate::constants::*;
use crate::content::{stagger_ms, ABOUT_DIFFERENTIALS, FIRM_NAME, FOUNDED_YEAR};
use crate::hooks::{use_reveal, use_section_anchor};
use crate::motion::SectionId;

#[component]
pub fn About() -> Element {
    let config = use_context::<SiteConfig>();
    let registry = use_section_anchor(SectionId::About);
    let visible = use_reveal(SectionId::About.anchor(), reveal_options(REVEAL_ABOUT));

    let shown = visible();
    let image = config.asset_url("about-image.jpg");
    let whatsapp = config.contact.whatsapp_url();

    rsx! {
        section {
            id: "{SectionId::About.anchor()}",
            style: "position: relative; padding: {SECTION_PADDING}; background-color: {WHITE}; overflow: hidden;",
            onmounted: move |e| registry.attach(SectionId::About, e.data()),

            div {
                class: "stack-on-narrow",
                style: "max-width: {SECTION_MAX_WIDTH}; margin: 0 auto; display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center;",

                Reveal {
                    visible: shown,
                    direction: RevealDirection::Left,
                    style: "position: relative;",
                    div { style: "position: absolute; top: -1rem; left: -1rem; width: 100%; height: 100%; border: 1px solid rgba(201, 176, 55, 0.4);" }
                    img {
                        src: "{image}",
                        alt: "Advogado trabalhando",
                        style: "position: relative; width: 100%; height: 550px; object-fit: cover; display: block;",
                    }
                    div {
                        style: "position: absolute; bottom: -1.5rem; right: -1.5rem; padding: 2rem; background-color: {NAVY_900}; color: {WHITE};",
                        div { style: "font-family: {FONT_SERIF}; font-size: 3rem; color: {GOLD_400};", "{FOUNDED_YEAR}" }
                        div { style: "font-size: 0.875rem; letter-spacing: 0.2em; text-transform: uppercase; margin-top: 0.5rem; color: {TEXT_ON_DARK_MUTED};", "Desde" }
                    }
                }

                Reveal {
                    visible: shown,
                    direction: RevealDirection::Right,
                    delay_ms: 200,
                    div {
                        style: "display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem;",
                        div { class: "gold-rule", style: "width: 2.5rem;" }
                        span { class: "section-label", "O Escritório" }
                    }
                    h2 {
                        style: "color: {NAVY_900}; font-size: 2.75rem; line-height: 1.2; margin-bottom: 2rem;",
                        "Especialistas em"
                        br {}
                        span { style: "color: {GOLD_500};", "Resolver seu Problema Jurídico" }
                    }
                    div {
                        style: "color: {TEXT_BODY}; line-height: 1.7; margin-bottom: 2.5rem;",
                        p {
                            "A "
                            strong { style: "color: {NAVY_900};", "{FIRM_NAME}" }
                            " é um escritório com foco exclusivo nas áreas "
                            span { style: "color: {GOLD_500}; font-weight: 500;", "Cível, Trabalhista e Criminal" }
                            ". Nossa equipe se destaca pelo conhecimento aprofundado dessas áreas do direito, garantindo estratégias eficientes e resultados comprovados."
                        }
                        p {
                            "Fundado em "
                            span { style: "color: {GOLD_500}; font-weight: 500;", "{FOUNDED_YEAR}" }
                            ", o escritório é liderado pelo Dr. Carlos Eduardo P. de Brito, construindo uma reputação sólida baseada em compromisso, ética e dedicação total a cada causa."
                        }
                        p {
                            "Atuamos em conjunto com parceiros altamente qualificados para entregar soluções jurídicas que funcionam na prática, seja no âmbito Cível, Trabalhista ou Criminal."
                        }
                    }

                    div {
                        style: "display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2.5rem;",
                        for (index, item) in ABOUT_DIFFERENTIALS.into_iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "{reveal_class(RevealDirection::Right, shown)}",
                                style: "display: flex; align-items: center; gap: 1rem; {transition_delay_style(stagger_ms(400, 100, index))}",
                                div {
                                    style: "width: 1.5rem; height: 1.5rem; flex-shrink: 0; border: 1px solid {GOLD_500}; color: {GOLD_500}; display: flex; align-items: center; justify-content: center; font-size: 0.8rem;",
                                    "✓"
                                }
                                span { style: "color: {TEXT_BODY};", "{item}" }
                            }
                        }
                    }

                    a {
                        class: "btn-primary",
                        href: "{whatsapp}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Falar com Especialista"
                    }
                }
            }
        }
    }
}
