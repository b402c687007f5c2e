//! Proposal flow state machine.
//!
//! The flow is strictly forward-only:
//!
//! ```text
//! setup ──submit──▶ memory-lane ──finish/skip──▶ proposal ──accept──▶ accepted
//!   └──────submit (intro skipped)──────────────────▲
//! ```
//!
//! Transitions are pure: [`Flow::apply`] returns the next flow plus the
//! side effects the host has to perform. Nothing here touches a UI or a
//! location bar, so the whole machine is testable without rendering.

use serde::{Deserialize, Serialize};

use crate::link::{decode_query, encode_query};
use crate::types::{ProposalDetails, Screen};

/// Whether a freshly submitted proposal plays the memory-lane slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntroMode {
    /// Go straight from setup to the proposal
    Skip,
    /// Play the slideshow first
    #[default]
    MemoryLane,
}

/// Static knobs for the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowConfig {
    pub intro: IntroMode,
}

/// User actions that drive the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Setup form submitted with freshly built details
    Submit(ProposalDetails),
    /// Memory-lane slideshow played to the end
    IntroFinished,
    /// User pressed "Skip Intro"
    IntroSkipped,
    /// Recipient said yes
    Accept,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the current history entry's query (no new entry)
    ReplaceLocation { query: String },
}

/// The application state: a screen plus the details it is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    screen: Screen,
    details: Option<ProposalDetails>,
}

/// Output of [`Flow::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub flow: Flow,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn stay(flow: Flow) -> Self {
        Self {
            flow,
            effects: Vec::new(),
        }
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self::setup()
    }
}

impl Flow {
    /// The empty setup screen.
    pub fn setup() -> Self {
        Self {
            screen: Screen::Setup,
            details: None,
        }
    }

    /// Compute the starting flow from the query string of the current location.
    ///
    /// A shared link always lands on the proposal (never the slideshow);
    /// an accepted link lands directly on the certificate.
    pub fn initial(query: &str) -> Self {
        match decode_query(query) {
            Some(link) if link.accepted => Self {
                screen: Screen::Accepted,
                details: Some(link.details),
            },
            Some(link) => Self {
                screen: Screen::Proposal,
                details: Some(link.details),
            },
            None => Self::setup(),
        }
    }

    /// Screen the machine is in.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Details carried by the machine, if any.
    pub fn details(&self) -> Option<&ProposalDetails> {
        self.details.as_ref()
    }

    /// The screen a host should actually render.
    ///
    /// Any non-setup screen without details falls back to setup.
    pub fn screen_to_render(&self) -> Screen {
        match (&self.screen, &self.details) {
            (_, None) => Screen::Setup,
            (screen, Some(_)) => *screen,
        }
    }

    /// Whether the flow reached its terminal screen.
    pub fn is_terminal(&self) -> bool {
        self.screen == Screen::Accepted
    }

    /// Apply an event and return the next flow with its effects.
    pub fn apply(self, event: FlowEvent, config: &FlowConfig) -> Transition {
        match (self.screen, event) {
            (Screen::Setup, FlowEvent::Submit(details)) => {
                let screen = match config.intro {
                    IntroMode::MemoryLane => Screen::MemoryLane,
                    IntroMode::Skip => Screen::Proposal,
                };
                Transition::stay(Flow {
                    screen,
                    details: Some(details),
                })
            }

            (Screen::MemoryLane, FlowEvent::IntroFinished | FlowEvent::IntroSkipped) => {
                Transition::stay(Flow {
                    screen: Screen::Proposal,
                    ..self
                })
            }

            (Screen::Proposal, FlowEvent::Accept) => match self.details {
                Some(details) => {
                    let query = encode_query(&details, true);
                    Transition {
                        flow: Flow {
                            screen: Screen::Accepted,
                            details: Some(details),
                        },
                        effects: vec![Effect::ReplaceLocation { query }],
                    }
                }
                None => Transition::stay(Flow::setup()),
            },

            (screen, event) => {
                tracing::debug!(%screen, ?event, "Ignoring event that does not apply");
                Transition::stay(self)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ProposalDetails {
        ProposalDetails::new("Will you be mine forever?", "Alex", "Jamie")
    }

    fn memory_lane() -> FlowConfig {
        FlowConfig {
            intro: IntroMode::MemoryLane,
        }
    }

    fn skip() -> FlowConfig {
        FlowConfig {
            intro: IntroMode::Skip,
        }
    }

    #[test]
    fn test_initial_without_params_is_setup() {
        let flow = Flow::initial("");
        assert_eq!(flow.screen(), Screen::Setup);
        assert!(flow.details().is_none());
    }

    #[test]
    fn test_initial_incomplete_is_setup() {
        assert_eq!(Flow::initial("q=Q&r=R").screen(), Screen::Setup);
    }

    #[test]
    fn test_initial_complete_is_proposal() {
        let flow = Flow::initial("q=Q&r=R&s=S");
        assert_eq!(flow.screen(), Screen::Proposal);
        assert_eq!(flow.details().unwrap().sender, "S");
    }

    #[test]
    fn test_initial_accepted_is_accepted() {
        assert_eq!(Flow::initial("q=Q&r=R&s=S&a=true").screen(), Screen::Accepted);
    }

    #[test]
    fn test_submit_goes_through_memory_lane() {
        let t = Flow::setup().apply(FlowEvent::Submit(details()), &memory_lane());
        assert_eq!(t.flow.screen(), Screen::MemoryLane);
        assert!(t.effects.is_empty());

        let t = t.flow.apply(FlowEvent::IntroFinished, &memory_lane());
        assert_eq!(t.flow.screen(), Screen::Proposal);
        assert_eq!(t.flow.details(), Some(&details()));
    }

    #[test]
    fn test_skip_intro_reaches_proposal() {
        let t = Flow::setup().apply(FlowEvent::Submit(details()), &memory_lane());
        let t = t.flow.apply(FlowEvent::IntroSkipped, &memory_lane());
        assert_eq!(t.flow.screen(), Screen::Proposal);
    }

    #[test]
    fn test_submit_without_intro() {
        let t = Flow::setup().apply(FlowEvent::Submit(details()), &skip());
        assert_eq!(t.flow.screen(), Screen::Proposal);
    }

    #[test]
    fn test_accept_requests_location_replace() {
        let flow = Flow::initial(&encode_query(&details(), false));
        let t = flow.apply(FlowEvent::Accept, &skip());
        assert_eq!(t.flow.screen(), Screen::Accepted);
        assert!(t.flow.is_terminal());
        assert_eq!(
            t.effects,
            vec![Effect::ReplaceLocation {
                query: encode_query(&details(), true)
            }]
        );
    }

    #[test]
    fn test_accepted_is_terminal() {
        let flow = Flow::initial("q=Q&r=R&s=S&a=true");
        let t = flow.clone().apply(FlowEvent::Accept, &skip());
        assert_eq!(t.flow, flow);
        assert!(t.effects.is_empty());

        let t = flow.clone().apply(FlowEvent::Submit(details()), &skip());
        assert_eq!(t.flow, flow);
    }

    #[test]
    fn test_no_back_transitions() {
        let flow = Flow::initial("q=Q&r=R&s=S");
        let t = flow.clone().apply(FlowEvent::Submit(details()), &skip());
        assert_eq!(t.flow, flow);
        let t = flow.clone().apply(FlowEvent::IntroFinished, &skip());
        assert_eq!(t.flow, flow);
    }

    #[test]
    fn test_accept_ignored_outside_proposal() {
        let t = Flow::setup().apply(FlowEvent::Accept, &skip());
        assert_eq!(t.flow.screen(), Screen::Setup);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_screen_to_render_falls_back_without_details() {
        let broken = Flow {
            screen: Screen::Proposal,
            details: None,
        };
        assert_eq!(broken.screen_to_render(), Screen::Setup);
        let t = broken.apply(FlowEvent::Accept, &skip());
        assert_eq!(t.flow.screen(), Screen::Setup);
    }
}
