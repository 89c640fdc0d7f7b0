use dioxus::prelude::*;

use crate::components::common::{reveal_options, Reveal, RevealDirection, SectionHeading};
use crate::config::SiteConfig;
use crate::constants::*;
use crate::content::{TEAM, TEAM_CREDENTIALS};
use crate::hooks::{use_reveal, use_section_anchor};
use crate::motion::SectionId;

const SUBHEADING_STYLE: &str = "font-size: 0.75rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(13, 27, 42, 0.4); margin: 0 0 1rem;";

#[component]
pub fn Team() -> Element {
    let config = use_context::<SiteConfig>();
    let registry = use_section_anchor(SectionId::Team);
    let visible = use_reveal(SectionId::Team.anchor(), reveal_options(REVEAL_TEAM));

    let shown = visible();
    let mailto = config.contact.mailto_url();

    rsx! {
        section {
            id: "{SectionId::Team.anchor()}",
            style: "position: relative; padding: {SECTION_PADDING}; background-color: {CREAM}; overflow: hidden;",
            onmounted: move |e| registry.attach(SectionId::Team, e.data()),

            div {
                style: "position: relative; max-width: {SECTION_MAX_WIDTH}; margin: 0 auto;",
                Reveal {
                    visible: shown,
                    direction: RevealDirection::Up,
                    SectionHeading {
                        label: "Liderança",
                        title: "Nosso",
                        highlight: "Fundador",
                        lead: "Conheça o profissional à frente do escritório, com dedicação exclusiva e excelência na defesa de seus direitos.",
                    }
                }

                for member in TEAM {
                    Reveal {
                        key: "{member.name}",
                        visible: shown,
                        direction: RevealDirection::Up,
                        div {
                            class: "stack-on-narrow",
                            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center;",

                            div {
                                style: "position: relative;",
                                div { style: "position: absolute; top: -1.5rem; left: -1.5rem; width: 100%; height: 100%; border: 1px solid rgba(201, 176, 55, 0.3);" }
                                div {
                                    style: "position: relative; overflow: hidden; aspect-ratio: 4 / 5; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);",
                                    img {
                                        src: "{member.image}",
                                        alt: "{member.name}",
                                        style: "width: 100%; height: 100%; object-fit: cover; object-position: top;",
                                    }
                                }
                                div {
                                    style: "position: absolute; bottom: -1rem; right: -1rem; padding: 1rem 1.5rem; background-color: {NAVY_900}; color: {WHITE};",
                                    span { style: "display: block; margin-bottom: 0.25rem; font-size: 0.75rem; font-weight: 500; letter-spacing: 0.2em; text-transform: uppercase; color: {GOLD_400};", "Registro Profissional" }
                                    span { style: "font-size: 0.875rem;", "{member.registration}" }
                                }
                            }

                            div {
                                style: "display: flex; flex-direction: column; gap: 2rem;",
                                div {
                                    h3 { style: "font-size: 2.75rem; color: {NAVY_900}; margin-bottom: 0.5rem;", "{member.name}" }
                                    p { style: "margin: 0; font-size: 1.125rem; font-weight: 500; letter-spacing: 0.2em; text-transform: uppercase; color: {GOLD_500};", "{member.role}" }
                                }
                                div { class: "gold-rule", style: "width: 5rem;" }
                                p {
                                    style: "margin: 0; font-family: {FONT_SERIF}; font-style: italic; font-size: 1.25rem; line-height: 1.7; color: {TEXT_BODY};",
                                    "\"{member.description}\""
                                }
                                div {
                                    p { style: "{SUBHEADING_STYLE}", "Formação e Qualificações" }
                                    ul {
                                        style: "list-style: none; padding: 0; margin: 0 0 1.5rem; display: flex; flex-direction: column; gap: 0.5rem;",
                                        for qualification in member.qualifications.iter() {
                                            li {
                                                key: "{qualification}",
                                                style: "display: flex; align-items: center; gap: 0.75rem; color: rgba(13, 27, 42, 0.7);",
                                                span { style: "width: 6px; height: 6px; border-radius: 50%; background-color: {GOLD_400};" }
                                                "{qualification}"
                                            }
                                        }
                                    }
                                    p { style: "{SUBHEADING_STYLE}", "Especialidades em Destaque" }
                                    div {
                                        style: "display: flex; flex-wrap: wrap; gap: 0.75rem;",
                                        for specialty in member.specialties.iter() {
                                            span {
                                                key: "{specialty}",
                                                style: "padding: 0.5rem 1rem; font-size: 0.75rem; letter-spacing: 0.1em; text-transform: uppercase; background-color: {WHITE}; border: 1px solid {LIGHT}; color: {NAVY_900};",
                                                "{specialty}"
                                            }
                                        }
                                    }
                                }
                                div {
                                    style: "display: flex; gap: 1rem; padding-top: 1.5rem;",
                                    a {
                                        href: "{mailto}",
                                        aria_label: "Email",
                                        style: "width: 3rem; height: 3rem; display: flex; align-items: center; justify-content: center; border: 1px solid rgba(13, 27, 42, 0.1); color: {NAVY_900};",
                                        "✉"
                                    }
                                }
                            }
                        }
                    }
                }

                Reveal {
                    visible: shown,
                    direction: RevealDirection::Up,
                    delay_ms: 500,
                    style: "margin-top: 6rem;",
                    div {
                        class: "stack-on-narrow",
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 2rem;",
                        for credential in TEAM_CREDENTIALS {
                            div {
                                key: "{credential.title}",
                                style: "display: flex; align-items: center; gap: 1.5rem; padding: 2.5rem; background-color: {WHITE}; border: 1px solid rgba(13, 27, 42, 0.05);",
                                div {
                                    style: "width: 3.5rem; height: 3.5rem; flex-shrink: 0; display: flex; align-items: center; justify-content: center; border: 1px solid {GOLD_500}; font-size: 1.5rem;",
                                    "{credential.icon}"
                                }
                                div {
                                    h4 { style: "font-size: 1.5rem; color: {NAVY_900}; margin-bottom: 0.25rem;", "{credential.title}" }
                                    p { style: "margin: 0; color: rgba(13, 27, 42, 0.5);", "{credential.text}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
