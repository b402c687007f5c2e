//! Hosts the flow state machine and performs its effects.
//!
//! The [`LocationBar`] trait stands in for the address bar / history API:
//! the only durable state of a proposal lives in the current link.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{ProposalError, ProposalResult};
use crate::flow::{Effect, Flow, FlowConfig, FlowEvent};
use crate::link::query_of;
use crate::types::Screen;

/// Where the current link lives.
pub trait LocationBar: Send + Sync {
    /// The full current location (URL or bare query string).
    fn current(&self) -> String;

    /// Replace the current entry's query without adding a history entry.
    fn replace_query(&self, query: &str) -> ProposalResult<()>;
}

/// In-process location bar.
///
/// Used by the desktop app (which has no address bar of its own) and by
/// tests. Every replacement is kept so callers can inspect the history.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    inner: Arc<RwLock<MemoryLocationInner>>,
}

#[derive(Debug, Default)]
struct MemoryLocationInner {
    base: String,
    query: String,
    replaced: Vec<String>,
    read_only: bool,
}

impl MemoryLocation {
    /// Start at `link`, which may be a full URL or a bare query string.
    pub fn new(link: impl AsRef<str>) -> Self {
        let link = link.as_ref();
        let query = query_of(link);
        let base = link
            .split_once('?')
            .map(|(base, _)| base)
            .unwrap_or(if query == link { "" } else { link })
            .to_string();

        Self {
            inner: Arc::new(RwLock::new(MemoryLocationInner {
                base,
                query,
                ..Default::default()
            })),
        }
    }

    /// A location that rejects every replacement.
    pub fn read_only(link: impl AsRef<str>) -> Self {
        let location = Self::new(link);
        location.inner.write().read_only = true;
        location
    }

    /// The current query string without a leading `?`.
    pub fn query(&self) -> String {
        self.inner.read().query.clone()
    }

    /// Queries written through [`LocationBar::replace_query`], oldest first.
    pub fn replaced(&self) -> Vec<String> {
        self.inner.read().replaced.clone()
    }
}

impl LocationBar for MemoryLocation {
    fn current(&self) -> String {
        let inner = self.inner.read();
        if inner.query.is_empty() {
            inner.base.clone()
        } else {
            format!("{}?{}", inner.base, inner.query)
        }
    }

    fn replace_query(&self, query: &str) -> ProposalResult<()> {
        let mut inner = self.inner.write();
        if inner.read_only {
            return Err(ProposalError::Location("history is read-only".into()));
        }
        inner.query = query.to_string();
        inner.replaced.push(query.to_string());
        Ok(())
    }
}

/// Owns the flow and applies transitions against a location bar.
pub struct Navigator<L: LocationBar> {
    flow: Flow,
    config: FlowConfig,
    location: L,
}

impl<L: LocationBar> Navigator<L> {
    /// Start from whatever the location currently encodes.
    pub fn new(location: L, config: FlowConfig) -> Self {
        let flow = Flow::initial(&query_of(&location.current()));
        tracing::info!(screen = %flow.screen(), "Starting proposal flow");
        Self {
            flow,
            config,
            location,
        }
    }

    /// Current flow state.
    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    /// Screen to render right now.
    pub fn screen(&self) -> Screen {
        self.flow.screen_to_render()
    }

    /// The location bar this navigator writes to.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Apply `event` and run its effects.
    ///
    /// A failing location update is logged and otherwise ignored: the
    /// transition has already happened.
    pub fn dispatch(&mut self, event: FlowEvent) -> Screen {
        let from = self.flow.screen();
        let transition = std::mem::take(&mut self.flow).apply(event, &self.config);
        self.flow = transition.flow;

        for effect in transition.effects {
            match effect {
                Effect::ReplaceLocation { query } => {
                    if let Err(e) = self.location.replace_query(&query) {
                        tracing::warn!("Could not persist accepted link: {}", e);
                    }
                }
            }
        }

        let to = self.flow.screen();
        if from != to {
            tracing::info!(%from, %to, "Flow transition");
        }
        self.screen()
    }
}
