//! Input Field Components
//!
//! Labelled text inputs for the setup form and the secret-code gate.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

static NEXT_FIELD_ID: AtomicU32 = AtomicU32::new(0);

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    /// Fired when Enter is pressed inside the field
    #[props(default)]
    pub onenter: Option<EventHandler<()>>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Shown after the label, e.g. "optional"
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, password, url)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Render the field in its error state
    #[props(default = false)]
    pub invalid: bool,
    #[props(default = false)]
    pub readonly: bool,
    #[props(default = false)]
    pub autofocus: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut recipient = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: recipient(),
///         oninput: move |s| recipient.set(s),
///         label: "Their name".to_string(),
///         placeholder: "Alex".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = use_hook(|| field_id("input"));
    let mut class = String::from("input-field");
    if props.invalid {
        class.push_str(" invalid");
    }
    if let Some(extra) = props.class.as_deref().filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                readonly: props.readonly,
                autofocus: props.autofocus,
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        if let Some(handler) = &props.onenter {
                            handler.call(());
                        }
                    }
                },
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 3)]
    pub rows: u32,
}

/// Multi-line input, used for the question itself
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = use_hook(|| field_id("textarea"));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Unique DOM id for label association.
fn field_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
}
