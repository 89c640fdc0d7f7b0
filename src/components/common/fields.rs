use dioxus::prelude::*;
use crate::constants::*;

const LABEL_STYLE: &str = "font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; color: #9ca3af;";

fn input_style(multiline: bool) -> String {
    let height = if multiline { "auto" } else { "3.5rem" };
    let resize = if multiline { "resize: none;" } else { "" };
    format!(
        "width: 100%; min-width: 0; height: {height}; padding: 0 1rem; font-size: 1rem; \
         font-family: {FONT_SANS}; background-color: {WHITE}; color: {NAVY_900}; \
         border: 1px solid {LIGHT}; border-radius: 0; outline: none; {resize}"
    )
}

/// Single-line input bound to `value`.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    required: bool,
    value: Signal<String>,
) -> Element {
    let mut value = value;
    let style = input_style(false);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.5rem; min-width: 0;",
            label { r#for: "{id}", style: "{LABEL_STYLE}", "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                required,
                value: "{value}",
                style: "{style}",
                oninput: move |e| value.set(e.value()),
            }
        }
    }
}

/// Select with a blank "Selecione..." entry followed by `options` as
/// `(value, label)` pairs.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    value: Signal<String>,
) -> Element {
    let mut value = value;
    let style = input_style(false);
    let current = value();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.5rem; min-width: 0;",
            label { r#for: "{id}", style: "{LABEL_STYLE}", "{label}" }
            select {
                id: "{id}",
                name: "{id}",
                required: true,
                style: "{style} color: {TEXT_GRAY};",
                onchange: move |e| value.set(e.value()),
                option { value: "", selected: current.is_empty(), "Selecione..." }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: current == option_value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    rows: u32,
    value: Signal<String>,
) -> Element {
    let mut value = value;
    let style = input_style(true);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.5rem; min-width: 0;",
            label { r#for: "{id}", style: "{LABEL_STYLE}", "{label}" }
            textarea {
                id: "{id}",
                name: "{id}",
                rows: "{rows}",
                placeholder: "{placeholder}",
                required: true,
                value: "{value}",
                style: "{style} padding: 1rem; line-height: 1.5;",
                oninput: move |e| value.set(e.value()),
            }
        }
    }
}
