//! Heartseal Core Library
//!
//! Everything behind a personalised proposal link, without any UI.
//!
//! ## Overview
//!
//! A sender fills in a question, two names and an optional secret code.
//! Heartseal turns that into a shareable link; opening the link walks the
//! recipient through an optional slideshow, a scripted intro, a proposal
//! with a "No" button that runs away, and finally a printable certificate.
//!
//! The only durable state is the link itself. Saying yes rewrites the
//! current link with `a=true`, so reloading it lands on the certificate.
//!
//! ## Modules
//!
//! - [`link`]: encode and decode proposal links
//! - [`flow`] / [`navigator`]: the forward-only screen state machine
//! - [`gate`]: the cosmetic password check
//! - [`evasive`]: the dodging decline control
//! - [`timeline`], [`intro`], [`memory_lane`]: cancellable timed sequences
//! - [`certificate`], [`blessing`]: what the accepted screen shows
//!
//! ## Quick Start
//!
//! ```
//! use heartseal_core::{link, Flow, FlowConfig, FlowEvent, ProposalDetails, Screen};
//!
//! let details = ProposalDetails::new("Will you be mine forever?", "Alex", "Jamie");
//! let url = link::share_url("https://heartseal.local/", &details).unwrap();
//!
//! let flow = Flow::initial(&link::query_of(&url));
//! assert_eq!(flow.screen(), Screen::Proposal);
//!
//! let next = flow.apply(FlowEvent::Accept, &FlowConfig::default());
//! assert_eq!(next.flow.screen(), Screen::Accepted);
//! ```

pub mod blessing;
pub mod certificate;
pub mod config;
pub mod error;
pub mod evasive;
pub mod flow;
pub mod gate;
pub mod intro;
pub mod link;
pub mod logging;
pub mod memory_lane;
pub mod navigator;
pub mod timeline;
pub mod types;

// Re-exports
pub use blessing::{fetch_blessing, BlessingSource, StaticBlessing, FALLBACK_BLESSING};
pub use certificate::Certificate;
pub use config::{BlessingConfig, ExperienceConfig};
pub use error::{ProposalError, ProposalResult};
pub use evasive::{EvasiveConfig, EvasiveState};
pub use flow::{Effect, Flow, FlowConfig, FlowEvent, IntroMode, Transition};
pub use gate::{verify, Access, AccessGate};
pub use intro::{intro_timeline, IntroStage, IntroTiming};
pub use link::DecodedLink;
pub use memory_lane::{memory_lane_timeline, LanePhase};
pub use navigator::{LocationBar, MemoryLocation, Navigator};
pub use timeline::{Timeline, TimelineEvent, TimelineHandle, Unlocker};
pub use types::{ProposalDetails, Screen};
