use dioxus::prelude::*;
use heartseal_core::{MemoryLocation, Navigator, Screen};

use crate::context::FlowHandle;
use crate::pages::{Accepted, MemoryLane, Proposal, Setup};
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles and the flow context, then renders the page for
/// the current screen. Switching screens unmounts the previous page, which
/// drops any timeline it was running.
#[component]
pub fn App() -> Element {
    let launch = crate::launch();
    let flow_config = launch.config.flow_config();
    let link = launch.link.clone();

    let navigator = use_signal(move || Navigator::new(MemoryLocation::new(&link), flow_config));
    let flow = use_context_provider(|| FlowHandle::new(navigator));
    use_context_provider(|| launch.config.clone());
    let palette = use_hook(palette_css);

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        div { class: "app",
            {match (flow.screen(), flow.details()) {
                (Screen::MemoryLane, _) => rsx! { MemoryLane {} },
                (Screen::Proposal, Some(details)) => rsx! { Proposal { details } },
                (Screen::Accepted, Some(details)) => rsx! { Accepted { details } },
                _ => rsx! { Setup {} },
            }}
        }
    }
}
