//! The wax seal stamped on the certificate.

use dioxus::prelude::*;
use heartseal_core::certificate::{SEAL_CENTER, SEAL_TOP};

use super::HeartIcon;

#[derive(Clone, PartialEq, Props)]
pub struct WaxSealProps {
    /// Year in Roman numerals
    pub year: String,
}

#[component]
pub fn WaxSeal(props: WaxSealProps) -> Element {
    rsx! {
        div { class: "wax-seal stamp-in",
            div { class: "wax-seal-body",
                div { class: "wax-seal-inner",
                    span { class: "wax-seal-top", "{SEAL_TOP}" }
                    div { class: "wax-seal-center",
                        HeartIcon { size: 56, class: "wax-seal-heart".to_string() }
                        span { class: "wax-seal-word", "{SEAL_CENTER}" }
                    }
                    span { class: "wax-seal-year", "{props.year}" }
                }
            }
        }
    }
}
