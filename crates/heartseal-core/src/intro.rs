//! Scripted intro played on the proposal screen before the question shows.

use std::time::Duration;

use crate::timeline::Timeline;

/// Stages of the intro, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntroStage {
    /// Waiting on the access gate
    Verify,
    Syncing,
    Decrypting,
    /// Seconds left before the reveal
    Countdown(u8),
}

impl IntroStage {
    /// Caption shown while the stage runs.
    pub fn caption(&self) -> String {
        match self {
            IntroStage::Verify => "For Your Eyes Only".to_string(),
            IntroStage::Syncing => "Syncing two hearts...".to_string(),
            IntroStage::Decrypting => "Unsealing your letter...".to_string(),
            IntroStage::Countdown(0) => "Now.".to_string(),
            IntroStage::Countdown(n) => n.to_string(),
        }
    }
}

/// Durations of the timed intro stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroTiming {
    pub syncing: Duration,
    pub decrypting: Duration,
    pub countdown_from: u8,
    pub tick: Duration,
    /// Hold on the final `Countdown(0)` before the reveal
    pub reveal: Duration,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            syncing: Duration::from_millis(2500),
            decrypting: Duration::from_millis(1500),
            countdown_from: 3,
            tick: Duration::from_secs(1),
            reveal: Duration::from_millis(800),
        }
    }
}

/// Build the intro script. `gated` adds the leading verify stage.
pub fn intro_timeline(gated: bool, timing: &IntroTiming) -> Timeline<IntroStage> {
    let mut timeline = Timeline::new();
    if gated {
        timeline = timeline.until_unlocked(IntroStage::Verify);
    }
    timeline = timeline
        .after(IntroStage::Syncing, timing.syncing)
        .after(IntroStage::Decrypting, timing.decrypting);

    for n in (1..=timing.countdown_from).rev() {
        timeline = timeline.after(IntroStage::Countdown(n), timing.tick);
    }
    timeline.after(IntroStage::Countdown(0), timing.reveal)
}
