//! The dodging "No" button and its growing "Yes" counterpart.
//!
//! Split in two halves:
//!
//! - [`EvasiveState`] is deterministic: after `n` declines the scales and
//!   the message depend only on `n` and the config.
//! - [`relocate`] is the only place randomness enters, and it only picks
//!   where the decline control goes.

use std::time::Duration;

use rand::Rng;

/// Messages the decline control cycles through.
pub const DECLINE_RESPONSES: &[&str] = &[
    "No",
    "Are you sure?",
    "Wait...",
    "Not this one!",
    "Try the other button!",
    "Almost!",
    "Oops!",
    "I'll wait \u{2764}\u{fe0f}",
    "Denied!",
    "Think again!",
];

/// Tuning for the interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct EvasiveConfig {
    pub accept_initial: f64,
    pub accept_step: f64,
    pub accept_max: f64,
    pub decline_initial: f64,
    pub decline_step: f64,
    pub decline_min: f64,
    /// The reconsider interstitial opens once the session counter exceeds this.
    pub reconsider_after: u32,
    /// Presentational pause between "yes" and the accepted screen.
    pub accept_delay: Duration,
    /// Minimum gap kept between a relocated control and the container edge.
    pub edge_margin: f64,
}

impl Default for EvasiveConfig {
    fn default() -> Self {
        Self {
            accept_initial: 1.0,
            accept_step: 0.35,
            accept_max: 8.0,
            decline_initial: 1.0,
            decline_step: 0.05,
            decline_min: 0.3,
            reconsider_after: 4,
            accept_delay: Duration::from_millis(1800),
            edge_margin: 16.0,
        }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Top-left corner relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// What the screen needs after a decline.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclineOutcome {
    pub message: &'static str,
    pub accept_scale: f64,
    pub decline_scale: f64,
    pub reconsider: bool,
}

/// Counters behind the interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvasiveState {
    declines: u32,
    session_declines: u32,
    position: Option<Position>,
    accepting: bool,
}

impl EvasiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hover or click on the decline control.
    ///
    /// Ignored once the recipient has said yes.
    pub fn decline(&mut self, config: &EvasiveConfig) -> DeclineOutcome {
        if !self.accepting {
            self.declines = self.declines.saturating_add(1);
            self.session_declines = self.session_declines.saturating_add(1);
        }
        DeclineOutcome {
            message: self.message(),
            accept_scale: self.accept_scale(config),
            decline_scale: self.decline_scale(config),
            reconsider: self.needs_reconsider(config),
        }
    }

    /// Total declines so far.
    pub fn declines(&self) -> u32 {
        self.declines
    }

    /// Declines since the last dismissed interstitial.
    pub fn session_declines(&self) -> u32 {
        self.session_declines
    }

    /// Index into [`DECLINE_RESPONSES`] of the label to show.
    pub fn message_index(&self) -> usize {
        self.declines as usize % DECLINE_RESPONSES.len()
    }

    pub fn message(&self) -> &'static str {
        DECLINE_RESPONSES[self.message_index()]
    }

    pub fn accept_scale(&self, config: &EvasiveConfig) -> f64 {
        (config.accept_initial + f64::from(self.declines) * config.accept_step)
            .min(config.accept_max)
    }

    pub fn decline_scale(&self, config: &EvasiveConfig) -> f64 {
        (config.decline_initial - f64::from(self.declines) * config.decline_step)
            .max(config.decline_min)
    }

    /// Heartbeat animation period; it quickens as the accept control grows.
    pub fn heartbeat_period(&self, config: &EvasiveConfig) -> Duration {
        Duration::from_secs_f64(3.0 / self.accept_scale(config))
    }

    pub fn needs_reconsider(&self, config: &EvasiveConfig) -> bool {
        !self.accepting && self.session_declines > config.reconsider_after
    }

    /// Close the interstitial. Scales and position are kept.
    pub fn dismiss_reconsider(&mut self) {
        self.session_declines = 0;
    }

    /// Current decline control position; `None` until it first moves.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Move the decline control to a random spot inside `container`.
    pub fn relocate<R: Rng>(
        &mut self,
        config: &EvasiveConfig,
        container: Size,
        control: Size,
        rng: &mut R,
    ) -> Position {
        let footprint = control.scaled(self.decline_scale(config));
        let position = relocate(container, footprint, config.edge_margin, rng);
        self.position = Some(position);
        position
    }

    /// Like [`EvasiveState::relocate`], but `rendered` is the control's
    /// measured on-screen box with label, padding and scale already applied.
    pub fn place<R: Rng>(
        &mut self,
        config: &EvasiveConfig,
        container: Size,
        rendered: Size,
        rng: &mut R,
    ) -> Position {
        let position = relocate(container, rendered, config.edge_margin, rng);
        self.position = Some(position);
        position
    }

    /// Start the accept animation and return how long to wait before
    /// the flow should move to the accepted screen.
    pub fn begin_accept(&mut self, config: &EvasiveConfig) -> Duration {
        self.accepting = true;
        config.accept_delay
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}

/// Pick a random top-left position so that a `control` sized box stays
/// fully inside `container`, keeping `margin` from the edges when there
/// is room for it. A control larger than the container pins to the origin.
pub fn relocate<R: Rng>(
    container: Size,
    control: Size,
    margin: f64,
    rng: &mut R,
) -> Position {
    Position {
        x: pick_axis(container.width, control.width, margin, rng),
        y: pick_axis(container.height, control.height, margin, rng),
    }
}

fn pick_axis<R: Rng>(extent: f64, size: f64, margin: f64, rng: &mut R) -> f64 {
    let slack = extent - size;
    if !slack.is_finite() || slack <= 0.0 {
        return 0.0;
    }
    let margin = margin.max(0.0).min(slack / 2.0);
    let lo = margin;
    let hi = slack - margin;
    if hi <= lo {
        return lo;
    }
    rng.random_range(lo..=hi).clamp(0.0, slack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_first_decline() {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        assert_eq!(state.message(), "No");

        let outcome = state.decline(&config);
        assert_eq!(outcome.message, "Are you sure?");
        assert!((outcome.accept_scale - 1.35).abs() < 1e-9);
        assert!((outcome.decline_scale - 0.95).abs() < 1e-9);
        assert!(!outcome.reconsider);
    }

    #[test]
    fn test_scales_cap_and_floor() {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        for _ in 0..100 {
            state.decline(&config);
        }
        assert_eq!(state.accept_scale(&config), 8.0);
        assert_eq!(state.decline_scale(&config), 0.3);
    }

    #[test]
    fn test_messages_wrap() {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        for _ in 0..DECLINE_RESPONSES.len() {
            state.decline(&config);
        }
        assert_eq!(state.message(), "No");
        state.decline(&config);
        assert_eq!(state.message(), "Are you sure?");
    }

    #[test]
    fn test_reconsider_resets_only_session_counter() {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        for _ in 0..4 {
            assert!(!state.decline(&config).reconsider);
        }
        assert!(state.decline(&config).reconsider);

        let mut rng = StdRng::seed_from_u64(7);
        let pos = state.relocate(&config, Size::new(800.0, 600.0), Size::new(120.0, 48.0), &mut rng);
        let accept_scale = state.accept_scale(&config);

        state.dismiss_reconsider();
        assert!(!state.needs_reconsider(&config));
        assert_eq!(state.session_declines(), 0);
        assert_eq!(state.declines(), 5);
        assert_eq!(state.accept_scale(&config), accept_scale);
        assert_eq!(state.position(), Some(pos));
    }

    #[test]
    fn test_relocate_stays_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        let container = Size::new(400.0, 300.0);
        let control = Size::new(120.0, 40.0);
        for _ in 0..1000 {
            let p = relocate(container, control, 16.0, &mut rng);
            assert!(p.x >= 0.0 && p.x + control.width <= container.width);
            assert!(p.y >= 0.0 && p.y + control.height <= container.height);
        }
    }

    #[test]
    fn test_relocate_oversized_control_pins_to_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = relocate(Size::new(100.0, 100.0), Size::new(200.0, 50.0), 16.0, &mut rng);
        assert_eq!(p.x, 0.0);
        assert!(p.y >= 0.0 && p.y <= 50.0);
    }

    #[test]
    fn test_relocate_tight_container_ignores_margin() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = relocate(Size::new(110.0, 50.0), Size::new(100.0, 50.0), 16.0, &mut rng);
        assert!(p.x >= 0.0 && p.x <= 10.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_place_fits_widest_label() {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        for _ in 0..4 {
            state.decline(&config);
        }
        assert_eq!(state.message(), "Try the other button!");

        // Roughly how wide that label lays out with the button padding.
        let scale = state.decline_scale(&config);
        let rendered = Size::new(253.0, 52.0).scaled(scale);
        let stage = Size::new(800.0, 400.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let p = state.place(&config, stage, rendered, &mut rng);
            assert!(p.x >= 0.0 && p.x + rendered.width <= stage.width);
            assert!(p.y >= 0.0 && p.y + rendered.height <= stage.height);
        }
        assert!(state.position().is_some());
    }

    #[test]
    fn test_place_follows_resized_stage() {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        state.decline(&config);
        let rendered = Size::new(160.0, 48.0);
        let mut rng = StdRng::seed_from_u64(5);

        state.place(&config, Size::new(1200.0, 600.0), rendered, &mut rng);
        let narrow = Size::new(320.0, 200.0);
        for _ in 0..500 {
            let p = state.place(&config, narrow, rendered, &mut rng);
            assert!(p.x + rendered.width <= narrow.width);
            assert!(p.y + rendered.height <= narrow.height);
        }
    }

    #[test]
    fn test_accepting_freezes_declines() {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        state.decline(&config);
        assert_eq!(state.begin_accept(&config), Duration::from_millis(1800));
        state.decline(&config);
        assert_eq!(state.declines(), 1);
        assert!(state.is_accepting());
    }

    #[test]
    fn test_heartbeat_quickens() {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        let before = state.heartbeat_period(&config);
        state.decline(&config);
        assert!(state.heartbeat_period(&config) < before);
    }
}
