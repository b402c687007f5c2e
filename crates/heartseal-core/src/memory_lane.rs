//! The memory-lane slideshow played after a proposal is created.

use std::time::Duration;

use crate::timeline::Timeline;

/// One line of the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub text: &'static str,
    pub duration: Duration,
}

pub const SLIDES: [Slide; 5] = [
    Slide {
        text: "They say that life is measured in moments...",
        duration: Duration::from_millis(3500),
    },
    Slide {
        text: "And since I met you, every single one has mattered.",
        duration: Duration::from_millis(4000),
    },
    Slide {
        text: "From the quiet nights to the big adventures...",
        duration: Duration::from_millis(4000),
    },
    Slide {
        text: "I've known you were the one I wanted by my side.",
        duration: Duration::from_millis(4500),
    },
    Slide {
        text: "So, I have something very important to ask you.",
        duration: Duration::from_millis(3500),
    },
];

/// Fade-out between slides.
pub const SLIDE_FADE: Duration = Duration::from_millis(800);

/// What the slideshow is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePhase {
    /// Slide `n` fully visible, its story bar filling
    Showing(usize),
    /// Slide `n` fading out
    Fading(usize),
}

impl LanePhase {
    pub fn slide_index(&self) -> usize {
        match self {
            LanePhase::Showing(i) | LanePhase::Fading(i) => *i,
        }
    }
}

/// Each slide is shown for its duration, then faded out.
pub fn memory_lane_timeline() -> Timeline<LanePhase> {
    SLIDES
        .iter()
        .enumerate()
        .fold(Timeline::new(), |timeline, (i, slide)| {
            timeline
                .after(LanePhase::Showing(i), slide.duration)
                .after(LanePhase::Fading(i), SLIDE_FADE)
        })
}

/// Percentage (0-100) of a slide that has elapsed.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 100.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64() * 100.0).min(100.0)
}

/// Fill percentage of story bar `bar` while slide `current` is at `current_progress`.
pub fn bar_fill(bar: usize, current: usize, current_progress: f64) -> f64 {
    use std::cmp::Ordering;
    match bar.cmp(&current) {
        Ordering::Less => 100.0,
        Ordering::Equal => current_progress.clamp(0.0, 100.0),
        Ordering::Greater => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_alternates_show_and_fade() {
        let timeline = memory_lane_timeline();
        assert_eq!(timeline.steps().len(), SLIDES.len() * 2);
        assert_eq!(timeline.steps()[0].stage, LanePhase::Showing(0));
        assert_eq!(timeline.steps()[1].stage, LanePhase::Fading(0));
        assert_eq!(timeline.steps()[9].stage, LanePhase::Fading(4));
    }

    #[test]
    fn test_total_duration() {
        // 19.5s of slides plus five fades
        assert_eq!(
            memory_lane_timeline().timed_duration(),
            Duration::from_millis(19_500 + 5 * 800)
        );
    }

    #[test]
    fn test_progress_clamps() {
        let d = Duration::from_millis(4000);
        assert_eq!(progress(Duration::ZERO, d), 0.0);
        assert_eq!(progress(Duration::from_millis(2000), d), 50.0);
        assert_eq!(progress(Duration::from_millis(9000), d), 100.0);
        assert_eq!(progress(Duration::from_millis(1), Duration::ZERO), 100.0);
    }

    #[test]
    fn test_bar_fill() {
        assert_eq!(bar_fill(0, 2, 40.0), 100.0);
        assert_eq!(bar_fill(2, 2, 40.0), 40.0);
        assert_eq!(bar_fill(3, 2, 40.0), 0.0);
    }
}
