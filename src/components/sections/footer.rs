use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::bridge::SectionRegistry;
use crate::components::common::{reveal_class, reveal_options, transition_delay_style, Reveal, RevealDirection};
use crate::config::SiteConfig;
use crate::constants::*;
use crate::content::{footer_links, FIRM_NAME};
use crate::hooks::use_reveal;
use crate::motion::AnchorResolver;

/// Region id the footer is observed under.
const FOOTER_REGION: &str = "footer";

const MUTED_LINK: &str = "display: flex; align-items: center; gap: 0.75rem; color: rgba(255, 255, 255, 0.5);";

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let registry = use_context::<SectionRegistry>();
    let visible = use_reveal(FOOTER_REGION, reveal_options(REVEAL_FOOTER));

    let shown = visible();
    let year = Local::now().year();
    let channels = config.contact.clone();
    let whatsapp = channels.whatsapp_url();
    let telegram = channels.telegram_url();
    let divider_scale = if shown { "1" } else { "0" };

    rsx! {
        footer {
            id: "{FOOTER_REGION}",
            style: "position: relative; background-color: {NAVY_900}; color: {WHITE}; overflow: hidden;",
            div { style: "position: absolute; top: 0; left: 0; width: 100%; height: 1px; background: rgba(201, 176, 55, 0.4);" }

            div {
                style: "position: relative; max-width: {SECTION_MAX_WIDTH}; margin: 0 auto; padding: 4rem 2rem;",
                div {
                    class: "stack-on-narrow",
                    style: "display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 3rem; margin-bottom: 3rem;",

                    Reveal {
                        visible: shown,
                        direction: RevealDirection::Up,
                        div {
                            style: "margin-bottom: 1.5rem;",
                            div {
                                style: "font-family: {FONT_SERIF}; font-size: 1.5rem; letter-spacing: 0.05em;",
                                span { "P" }
                                span { style: "margin: 0 0.25rem; color: {GOLD_500};", "&" }
                                span { style: "font-weight: 500;", "B" }
                            }
                            div { style: "margin-top: 0.25rem; font-size: 0.875rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255, 255, 255, 0.4);", "Advogados Associados" }
                        }
                        p {
                            style: "max-width: 28rem; margin: 0 0 1.5rem; line-height: 1.7; color: rgba(255, 255, 255, 0.5);",
                            "Especialistas em "
                            span { style: "color: {GOLD_400};", "Direito Cível, Trabalhista e Criminal" }
                            ". Comprometimento, ética e resultados comprovados há mais de 12 anos."
                        }
                        div {
                            style: "display: flex; gap: 0.5rem;",
                            a {
                                href: "{whatsapp}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "WhatsApp",
                                style: "width: 2.5rem; height: 2.5rem; display: flex; align-items: center; justify-content: center; border: 1px solid rgba(255, 255, 255, 0.2); color: {WHATSAPP_GREEN};",
                                "💬"
                            }
                            a {
                                href: "{telegram}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "Telegram",
                                style: "width: 2.5rem; height: 2.5rem; display: flex; align-items: center; justify-content: center; border: 1px solid rgba(255, 255, 255, 0.2); color: {TELEGRAM_BLUE};",
                                "➤"
                            }
                        }
                    }

                    Reveal {
                        visible: shown,
                        direction: RevealDirection::Up,
                        delay_ms: 200,
                        h4 { style: "font-size: 1.125rem; margin-bottom: 1.25rem; color: {GOLD_500};", "Navegação" }
                        ul {
                            style: "list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.75rem;",
                            for link in footer_links() {
                                li {
                                    key: "{link.section}",
                                    a {
                                        class: "gold-hover",
                                        href: "{link.section.href()}",
                                        style: "color: rgba(255, 255, 255, 0.5);",
                                        onclick: {
                                            let registry = registry.clone();
                                            move |e: MouseEvent| {
                                                e.prevent_default();
                                                let mut resolver = registry.clone();
                                                resolver.scroll_into_view(link.section);
                                            }
                                        },
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }

                    Reveal {
                        visible: shown,
                        direction: RevealDirection::Up,
                        delay_ms: 300,
                        h4 { style: "font-size: 1.125rem; margin-bottom: 1.25rem; color: {GOLD_500};", "Contato" }
                        ul {
                            style: "list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1rem;",
                            li {
                                a { class: "gold-hover", href: "{channels.tel_url()}", style: "{MUTED_LINK}", "☎ {channels.phone_display}" }
                            }
                            li {
                                a { href: "{whatsapp}", target: "_blank", rel: "noopener noreferrer", style: "{MUTED_LINK}", "💬 WhatsApp" }
                            }
                            li {
                                a { class: "gold-hover", href: "{channels.mailto_url()}", style: "{MUTED_LINK}", "✉ {channels.email}" }
                            }
                            li {
                                span { style: "{MUTED_LINK}", "⌖ Brasília, DF" }
                            }
                        }
                    }
                }

                div {
                    class: "{reveal_class(RevealDirection::Fade, shown)}",
                    style: "height: 1px; margin-bottom: 1.5rem; background: rgba(255, 255, 255, 0.1); transform: scaleX({divider_scale}); {transition_delay_style(500)}",
                }

                div {
                    class: "{reveal_class(RevealDirection::Up, shown)}",
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1rem; {transition_delay_style(600)}",
                    p {
                        style: "margin: 0; font-size: 0.875rem; letter-spacing: 0.05em; color: rgba(255, 255, 255, 0.3);",
                        "© {year} {FIRM_NAME}. Todos os direitos reservados."
                    }
                    div {
                        style: "display: flex; gap: 2rem; font-size: 0.875rem;",
                        a { class: "gold-hover", href: "#", style: "color: rgba(255, 255, 255, 0.3);", "Termos de Uso" }
                        a { class: "gold-hover", href: "#", style: "color: rgba(255, 255, 255, 0.3);", "Política de Privacidade" }
                    }
                }
            }
        }
    }
}
