//! The cosmetic password gate in front of a proposal.
//!
//! This is casual deterrence, not access control: the password sits in
//! plaintext in the same link it guards. Comparison is a plain string
//! equality with no lockout and no attempt limit.

/// Outcome of checking an entered password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }
}

/// Check `actual` against the expected password.
///
/// No expected password always grants. Otherwise the match is exact:
/// case-sensitive, whitespace significant.
pub fn verify(expected: Option<&str>, actual: &str) -> Access {
    match expected {
        None => Access::Granted,
        Some(expected) if expected == actual => Access::Granted,
        Some(_) => Access::Denied,
    }
}

/// Gate state as the proposal screen sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessGate {
    expected: Option<String>,
    error: bool,
    attempts: u32,
    granted: bool,
}

impl AccessGate {
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected,
            ..Default::default()
        }
    }

    /// Whether the gate needs to be shown at all.
    pub fn is_required(&self) -> bool {
        self.expected.is_some()
    }

    /// Whether the proposal behind the gate may be shown.
    pub fn is_open(&self) -> bool {
        self.granted || !self.is_required()
    }

    /// Try a password. A denial raises the error flag and leaves the gate open for retry.
    pub fn submit(&mut self, input: &str) -> Access {
        self.attempts = self.attempts.saturating_add(1);
        let access = verify(self.expected.as_deref(), input);
        match access {
            Access::Granted => {
                self.granted = true;
                self.error = false;
            }
            Access::Denied => {
                tracing::debug!(attempts = self.attempts, "Access gate denied");
                self.error = true;
            }
        }
        access
    }

    /// Whether the last attempt was wrong.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Clear the error flag (the user started typing again).
    pub fn clear_error(&mut self) {
        self.error = false;
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
