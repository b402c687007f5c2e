//! Setup page: the sender writes the question and gets a shareable link.

use std::time::Duration;

use dioxus::prelude::*;
use heartseal_core::link::share_url;
use heartseal_core::{FlowEvent, ProposalDetails};
use heartseal_ui::{Button, ButtonVariant, HeartIcon, Input, TextArea};

use crate::context::{use_experience, use_flow};

/// How long the copy feedback stays on screen
const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Outcome of the last copy attempt, shown briefly under the link.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CopyNotice {
    Copied,
    Failed,
}

#[component]
pub fn Setup() -> Element {
    let flow = use_flow();
    let experience = use_experience();

    let mut question = use_signal(|| experience.default_question.clone());
    let mut recipient = use_signal(|| experience.default_recipient.clone());
    let mut sender = use_signal(|| experience.default_sender.clone());
    let mut password = use_signal(String::new);
    let mut link: Signal<Option<String>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut notice: Signal<Option<CopyNotice>> = use_signal(|| None);

    let details = move || {
        ProposalDetails::new(question(), recipient(), sender()).with_password(password())
    };

    let base_url = experience.base_url.clone();
    let create = move |_: ()| match share_url(&base_url, &details()) {
        Ok(url) => {
            tracing::info!(gated = !password().is_empty(), "Proposal link created");
            error.set(None);
            link.set(Some(url));
        }
        Err(e) => {
            tracing::debug!("Setup form rejected: {}", e);
            error.set(Some(e.to_string()));
        }
    };

    let copy = move |_: ()| {
        let Some(text) = link() else { return };
        spawn(async move {
            let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
            match result {
                Ok(()) => notice.set(Some(CopyNotice::Copied)),
                Err(e) => {
                    tracing::warn!("Clipboard not available: {}", e);
                    notice.set(Some(CopyNotice::Failed));
                }
            }
            tokio::time::sleep(NOTICE_DURATION).await;
            notice.set(None);
        });
    };

    if let Some(url) = link() {
        let name = recipient();
        return rsx! {
            div { class: "page setup-page",
                div { class: "card",
                    HeartIcon { size: 48, class: "accent".to_string() }
                    h2 { class: "card-title", "Your Letter is Ready" }
                    p { class: "card-subtitle", "Share this special link with {name} whenever you're ready." }

                    div { class: "link-row",
                        Input {
                            value: url.clone(),
                            oninput: move |_| {},
                            readonly: true,
                            class: "link-field".to_string(),
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: copy,
                            "Copy"
                        }
                    }
                    {match notice() {
                        Some(CopyNotice::Copied) => rsx! { p { class: "notice", "Copied!" } },
                        Some(CopyNotice::Failed) => rsx! { p { class: "notice warn", "Copy the link manually" } },
                        None => rsx! {},
                    }}

                    Button {
                        onclick: move |_| flow.dispatch(FlowEvent::Submit(details())),
                        "Preview the Journey"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| link.set(None),
                        "Edit My Message"
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "page setup-page",
            div { class: "card",
                div { class: "card-header",
                    h1 { class: "card-title", "Our Story" }
                    p { class: "eyebrow", "Create your personal proposal" }
                }

                TextArea {
                    value: question(),
                    oninput: move |s| question.set(s),
                    label: "My Question".to_string(),
                }
                Input {
                    value: recipient(),
                    oninput: move |s| recipient.set(s),
                    label: "Their Name".to_string(),
                    placeholder: "Who is this for?".to_string(),
                }
                Input {
                    value: sender(),
                    oninput: move |s| sender.set(s),
                    label: "Your Name".to_string(),
                    placeholder: "Who is asking?".to_string(),
                }
                Input {
                    value: password(),
                    oninput: move |s| password.set(s),
                    label: "Secret Code".to_string(),
                    hint: "optional".to_string(),
                    placeholder: "Keep it private...".to_string(),
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                Button {
                    variant: ButtonVariant::Rose,
                    onclick: create,
                    class: "wide".to_string(),
                    "Create the Experience"
                }
            }
        }
    }
}
