//! Contact channels, business hours and the simulated contact form.

use dioxus::prelude::*;
use tracing::debug;

use crate::components::common::{
    reveal_class, reveal_options, transition_delay_style, Reveal, RevealDirection, SectionHeading,
    SelectField, TextAreaField, TextField,
};
use crate::config::SiteConfig;
use crate::constants::*;
use crate::content::{contact_cards, stagger_ms, BUSINESS_HOURS};
use crate::hooks::{use_reveal, use_section_anchor};
use crate::motion::form::run_submission;
use crate::motion::{ContactForm, ContactMessage, FormPhase, PracticeArea, SectionId, SimulatedBackend};

#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let registry = use_section_anchor(SectionId::Contact);
    let visible = use_reveal(SectionId::Contact.anchor(), reveal_options(REVEAL_CONTACT));

    let mut form = use_signal(ContactForm::new);
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let phone = use_signal(String::new);
    let subject = use_signal(String::new);
    let body = use_signal(String::new);
    let mut validation = use_signal(|| None::<String>);

    let submit_delay = config.submit_delay();
    let confirmation_delay = config.confirmation_delay();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let message = match ContactMessage::from_fields(
            &name.read(),
            &email.read(),
            &phone.read(),
            &subject.read(),
            &body.read(),
        ) {
            Ok(message) => message,
            Err(err) => {
                debug!("contact form rejected: {err}");
                validation.set(Some(err.user_message()));
                return;
            }
        };
        validation.set(None);

        let Some(ticket) = form.write().begin_submit() else {
            return;
        };
        spawn(async move {
            let backend = SimulatedBackend::new(submit_delay);
            run_submission(&backend, message, ticket, confirmation_delay, move |event| {
                let applied = form.write().apply(event);
                if applied && *form.peek().phase() == FormPhase::Submitted {
                    for mut field in [name, email, phone, subject, body] {
                        field.set(String::new());
                    }
                }
            })
            .await;
        });
    };

    let shown = visible();
    let cards = contact_cards(&config.contact);
    let whatsapp = config.contact.whatsapp_url();
    let phone_display = config.contact.phone_display.clone();
    let phase = form.read().phase().clone();
    let submitting = phase == FormPhase::Submitting;
    let area_options: Vec<(&'static str, &'static str)> = PracticeArea::ALL
        .iter()
        .map(|area| (area.value(), area.label()))
        .collect();

    rsx! {
        section {
            id: "{SectionId::Contact.anchor()}",
            style: "position: relative; padding: {SECTION_PADDING}; background-color: {WHITE}; overflow: hidden;",
            onmounted: move |e| registry.attach(SectionId::Contact, e.data()),

            div { style: "position: absolute; top: 0; left: 0; width: 100%; height: 1px; background-color: {LIGHT};" }

            div {
                style: "position: relative; max-width: {SECTION_MAX_WIDTH}; margin: 0 auto;",
                Reveal {
                    visible: shown,
                    direction: RevealDirection::Up,
                    SectionHeading {
                        label: "Contato",
                        title: "Fale com um",
                        highlight: "Especialista",
                        lead: "Entre em contato agora mesmo. Nossa equipe está pronta para analisar seu caso e oferecer a melhor solução jurídica para você.",
                    }
                }

                Reveal {
                    visible: shown,
                    direction: RevealDirection::Up,
                    delay_ms: 100,
                    style: "margin-bottom: 3rem;",
                    a {
                        href: "{whatsapp}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "display: flex; align-items: center; justify-content: space-between; padding: 2rem; background-color: {WHATSAPP_GREEN}; color: {WHITE};",
                        div {
                            style: "display: flex; align-items: center; gap: 1.5rem;",
                            div {
                                style: "width: 4rem; height: 4rem; display: flex; align-items: center; justify-content: center; background: rgba(255, 255, 255, 0.2); font-size: 1.75rem;",
                                "💬"
                            }
                            div {
                                p { style: "margin: 0 0 0.25rem; font-size: 0.875rem; color: {TEXT_ON_DARK};", "Atendimento rápido via" }
                                p { style: "margin: 0; font-family: {FONT_SERIF}; font-size: 1.5rem;", "WhatsApp" }
                                p { style: "margin: 0; color: {TEXT_ON_DARK};", "{phone_display}" }
                            }
                        }
                        div {
                            class: "nav-desktop",
                            style: "align-items: center; gap: 0.75rem; font-size: 0.875rem; font-weight: 500; letter-spacing: 0.2em; text-transform: uppercase;",
                            "Iniciar Conversa ➤"
                        }
                    }
                }

                div {
                    class: "stack-on-narrow",
                    style: "display: grid; grid-template-columns: 2fr 3fr; gap: 3rem;",

                    Reveal {
                        visible: shown,
                        direction: RevealDirection::Left,
                        delay_ms: 200,
                        div {
                            style: "display: flex; flex-direction: column; gap: 1rem;",
                            for (index, card) in cards.into_iter().enumerate() {
                                a {
                                    key: "{card.label}",
                                    class: "{reveal_class(RevealDirection::Left, shown)}",
                                    href: "{card.href}",
                                    target: if card.is_external() { "_blank" },
                                    rel: if card.is_external() { "noopener noreferrer" },
                                    style: "display: flex; align-items: center; gap: 1.25rem; padding: 1.5rem; background-color: {CREAM}; border: 1px solid transparent; {transition_delay_style(stagger_ms(300, 100, index))}",
                                    div {
                                        style: "width: 3rem; height: 3rem; flex-shrink: 0; display: flex; align-items: center; justify-content: center; border: 1px solid {GOLD_500}; color: {GOLD_500}; font-size: 1.25rem;",
                                        "{card.kind.icon()}"
                                    }
                                    div {
                                        div { style: "margin-bottom: 0.25rem; font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase; color: #9ca3af;", "{card.label}" }
                                        div { class: "gold-hover", style: "font-family: {FONT_SERIF}; font-size: 1.125rem; color: {NAVY_900}; word-break: break-all;", "{card.value}" }
                                    }
                                }
                            }

                            div {
                                class: "{reveal_class(RevealDirection::Up, shown)}",
                                style: "padding: 1.5rem; background-color: {NAVY_900}; {transition_delay_style(700)}",
                                div {
                                    style: "display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.25rem;",
                                    span { style: "color: {GOLD_500};", "🕘" }
                                    h4 { style: "font-size: 1.125rem; color: {WHITE};", "Horário de Atendimento" }
                                }
                                div {
                                    style: "display: flex; flex-direction: column; gap: 0.75rem;",
                                    for slot in BUSINESS_HOURS {
                                        div {
                                            key: "{slot.days}",
                                            style: "display: flex; justify-content: space-between;",
                                            span { style: "color: {TEXT_ON_DARK_MUTED};", "{slot.days}" }
                                            span { style: "color: {GOLD_400}; font-weight: 500;", "{slot.hours}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Reveal {
                        visible: shown,
                        direction: RevealDirection::Right,
                        delay_ms: 400,
                        div {
                            style: "padding: 2.5rem; background-color: {CREAM}; border: 1px solid {LIGHT};",
                            h3 { style: "font-size: 1.5rem; color: {NAVY_900}; margin-bottom: 0.5rem;", "Envie uma Mensagem" }
                            p { style: "margin: 0 0 2rem; color: {TEXT_GRAY};", "Preencha o formulário abaixo e retornaremos em breve." }

                            if phase == FormPhase::Submitted {
                                div {
                                    style: "text-align: center; padding: 3.5rem 0;",
                                    div {
                                        style: "width: 4rem; height: 4rem; margin: 0 auto 1.5rem; display: flex; align-items: center; justify-content: center; border: 2px solid {GOLD_500}; color: {GOLD_500}; font-size: 1.75rem;",
                                        "✓"
                                    }
                                    h4 { style: "font-size: 1.5rem; color: {NAVY_900}; margin-bottom: 0.75rem;", "Mensagem Enviada" }
                                    p { style: "margin: 0; color: {TEXT_GRAY};", "Entraremos em contato em breve." }
                                }
                            } else {
                                form {
                                    style: "display: flex; flex-direction: column; gap: 1.5rem;",
                                    onsubmit: on_submit,

                                    if let FormPhase::Failed { reason } = &phase {
                                        div {
                                            role: "alert",
                                            style: "padding: 1rem; border: 1px solid #b91c1c; color: #b91c1c; background-color: {WHITE};",
                                            "{reason}"
                                        }
                                    }
                                    if let Some(problem) = validation() {
                                        div {
                                            role: "alert",
                                            style: "padding: 1rem; border: 1px solid {GOLD_500}; color: {NAVY_900}; background-color: {WHITE};",
                                            "{problem}"
                                        }
                                    }

                                    div {
                                        class: "stack-on-narrow",
                                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem;",
                                        TextField { id: "name", label: "Nome completo", input_type: "text", placeholder: "Seu nome", required: true, value: name }
                                        TextField { id: "email", label: "E-mail", input_type: "email", placeholder: "seu@email.com", required: true, value: email }
                                    }
                                    div {
                                        class: "stack-on-narrow",
                                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem;",
                                        TextField { id: "phone", label: "Telefone", input_type: "tel", placeholder: "(61) 99999-9999", required: false, value: phone }
                                        SelectField { id: "subject", label: "Área de Interesse", options: area_options, value: subject }
                                    }
                                    TextAreaField { id: "message", label: "Mensagem", placeholder: "Descreva seu caso...", rows: 5, value: body }

                                    button {
                                        r#type: "submit",
                                        disabled: submitting,
                                        style: "width: 100%; height: 3.5rem; display: flex; align-items: center; justify-content: center; gap: 0.75rem; border: none; cursor: pointer; background-color: {NAVY_900}; color: {WHITE}; font-size: 0.875rem; font-weight: 500; letter-spacing: 0.2em; text-transform: uppercase;",
                                        if submitting {
                                            span { class: "spinner" }
                                            "Enviando..."
                                        } else {
                                            "➤ Enviar Mensagem"
                                        }
                                    }

                                    p {
                                        style: "margin: 0; font-size: 0.875rem; text-align: center; color: #9ca3af;",
                                        "Ao enviar, você concorda com nossa "
                                        a { href: "#", style: "color: {GOLD_500};", "Política de Privacidade" }
                                        "."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
