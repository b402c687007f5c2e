//! Flow context for Heartseal.
//!
//! The [`Navigator`] lives in a signal at the root of the app. Pages read
//! the current screen and details through [`use_flow`] and send events
//! back with [`FlowHandle::dispatch`].
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| FlowHandle::new(navigator));
//!
//! // In a page
//! let flow = use_flow();
//! flow.dispatch(FlowEvent::Accept);
//! ```

use dioxus::prelude::*;
use heartseal_core::{
    ExperienceConfig, FlowEvent, LocationBar, MemoryLocation, Navigator, ProposalDetails, Screen,
};

/// The app's navigator: the desktop app has no address bar, so the
/// current link is held in memory.
pub type AppNavigator = Navigator<MemoryLocation>;

/// Copyable handle to the navigator signal.
#[derive(Clone, Copy, PartialEq)]
pub struct FlowHandle {
    navigator: Signal<AppNavigator>,
}

impl FlowHandle {
    pub fn new(navigator: Signal<AppNavigator>) -> Self {
        Self { navigator }
    }

    /// Screen to render. Subscribes the caller to flow changes.
    pub fn screen(&self) -> Screen {
        self.navigator.read().screen()
    }

    /// Details of the current proposal, if any.
    pub fn details(&self) -> Option<ProposalDetails> {
        self.navigator.read().flow().details().cloned()
    }

    /// The link as it currently stands, including `a=true` once accepted.
    pub fn current_link(&self) -> String {
        self.navigator.peek().location().current()
    }

    pub fn dispatch(&self, event: FlowEvent) {
        let mut navigator = self.navigator;
        navigator.write().dispatch(event);
    }
}

/// Hook to access the flow from context.
pub fn use_flow() -> FlowHandle {
    use_context::<FlowHandle>()
}

/// Hook to access the resolved configuration.
pub fn use_experience() -> ExperienceConfig {
    use_context::<ExperienceConfig>()
}
