//! Button Components
//!
//! - Primary: dark, used for form actions ("Create the Experience")
//! - Rose: the big accept button, scaled up on every refusal
//! - Shy: the decline button that runs away
//! - Ghost: quiet text-only actions ("Edit My Message", "Skip Intro")

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Rose,
    Shy,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Rose => "btn-rose",
            ButtonVariant::Shy => "btn-shy",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Fired when the pointer enters the button
    #[props(default)]
    pub onhover: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Inline style, used for scale transforms and absolute placement
    #[props(default)]
    pub style: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Rose,
///         style: format!("transform: scale({});", scale),
///         onclick: move |_| accept(),
///         "YES"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = join_classes(props.variant.class(), props.class.as_deref());
    let style = props.style.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            style: "{style}",
            disabled: props.disabled,
            onmouseenter: move |_| {
                if let Some(handler) = &props.onhover {
                    handler.call(());
                }
            },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
