//! Core types for Heartseal

use serde::{Deserialize, Serialize};

use crate::error::{ProposalError, ProposalResult};

/// Everything a shareable proposal link carries.
///
/// Details are created once (by the setup form or by decoding a link) and
/// never edited in place. A new proposal replaces the old value wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalDetails {
    /// The question shown on the proposal screen
    pub question: String,
    /// Who the proposal is addressed to
    pub recipient: String,
    /// Who is asking
    pub sender: String,
    /// Optional secret code guarding the proposal screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProposalDetails {
    /// Create details without a password.
    pub fn new(
        question: impl Into<String>,
        recipient: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            recipient: recipient.into(),
            sender: sender.into(),
            password: None,
        }
    }

    /// Attach a password. An empty string means "no gate".
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        let password = password.into();
        self.password = if password.is_empty() {
            None
        } else {
            Some(password)
        };
        self
    }

    /// Whether opening these details requires the access gate.
    pub fn is_gated(&self) -> bool {
        self.password.is_some()
    }

    /// Check that the three required fields are non-empty.
    pub fn validate(&self) -> ProposalResult<()> {
        if self.question.is_empty() {
            return Err(ProposalError::MissingField("question"));
        }
        if self.recipient.is_empty() {
            return Err(ProposalError::MissingField("recipient"));
        }
        if self.sender.is_empty() {
            return Err(ProposalError::MissingField("sender"));
        }
        Ok(())
    }
}

/// The screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Link generation form
    Setup,
    /// Optional slideshow played before the proposal
    MemoryLane,
    /// The question with its yes/no controls
    Proposal,
    /// Terminal screen with the certificate
    Accepted,
}

impl Screen {
    /// Stable lowercase name, as used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Setup => "setup",
            Screen::MemoryLane => "memory-lane",
            Screen::Proposal => "proposal",
            Screen::Accepted => "accepted",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
