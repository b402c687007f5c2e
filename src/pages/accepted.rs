//! Accepted page: the "Decree of Union" certificate.

use dioxus::prelude::*;
use heartseal_core::blessing::source_from_config;
use heartseal_core::certificate::{
    AUTHENTICATION, BELOVED_LABEL, DEVOTED_LABEL, HEADING, PROCLAMATION, TESTAMENT, TITLE,
};
use heartseal_core::{fetch_blessing, Certificate, ProposalDetails, FALLBACK_BLESSING};
use heartseal_ui::{Button, WaxSeal};

use crate::context::{use_experience, use_flow};

/// Opens the webview's native print dialog.
const PRINT_SCRIPT: &str = "window.print();\nreturn true;";

#[component]
pub fn Accepted(details: ProposalDetails) -> Element {
    let flow = use_flow();
    let experience = use_experience();
    let certificate = use_hook(|| Certificate::for_details(&details));
    let mut blessing = use_signal(|| FALLBACK_BLESSING.to_string());

    // Decoration only: the page is already complete with the fallback text.
    use_hook(|| {
        let config = experience.blessing.clone();
        let sender = details.sender.clone();
        let recipient = details.recipient.clone();
        spawn(async move {
            let source = source_from_config(&config);
            let text = fetch_blessing(source.as_ref(), &sender, &recipient, config.timeout()).await;
            blessing.set(text);
        })
    });

    let print = move |_| {
        tracing::info!("Opening print dialog");
        spawn(async move {
            report_print(document::eval(PRINT_SCRIPT).await);
        });
    };

    let link = flow.current_link();
    let Certificate {
        recipient,
        sender,
        seal_year,
    } = certificate;

    rsx! {
        div { class: "page accepted-page",
            div { id: "certificate", class: "certificate",
                span { class: "corner top-left", "\u{2727}" }
                span { class: "corner top-right", "\u{2727}" }
                span { class: "corner bottom-left", "\u{2727}" }
                span { class: "corner bottom-right", "\u{2727}" }

                header { class: "certificate-header",
                    p { class: "certificate-heading", "{HEADING}" }
                    div { class: "gold-rule" }
                    h1 { class: "certificate-title", "{TITLE}" }
                }

                section { class: "certificate-body",
                    p { class: "proclamation", "{PROCLAMATION}" }
                    p { class: "couple-name", "{recipient}" }
                    p { class: "couple-and", "and" }
                    p { class: "couple-name", "{sender}" }
                    p { class: "testament", "{TESTAMENT}" }
                }

                div { class: "certificate-footer",
                    div { class: "signatures",
                        div { class: "signature",
                            span { class: "signature-label", "{BELOVED_LABEL}" }
                            span { class: "signature-name", "{recipient}" }
                        }
                        div { class: "signature",
                            span { class: "signature-label", "{DEVOTED_LABEL}" }
                            span { class: "signature-name", "{sender}" }
                        }
                        p { class: "authentication", "{AUTHENTICATION}" }
                    }
                    WaxSeal { year: seal_year }
                }
            }

            div { class: "certificate-actions no-print",
                p { class: "blessing", "{blessing}" }
                Button { onclick: print, "Archive This Decree" }
                p { class: "keep-link", "This link now opens straight to your decree:" }
                code { class: "keep-link-url", "{link}" }
            }
        }
    }
}

/// Logs a print dialog that could not be opened. The certificate stays on
/// screen either way.
fn report_print<T>(result: Result<T, document::EvalError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Print dialog not available: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_failure_is_reported_not_raised() {
        assert!(!report_print::<()>(Err(document::EvalError::Unsupported)));
        assert!(!report_print::<()>(Err(document::EvalError::Finished)));
        assert!(report_print(Ok(())));
    }
}
