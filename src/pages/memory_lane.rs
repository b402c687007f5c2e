//! Memory lane: the slideshow between setup and the proposal.

use std::time::Duration;

use dioxus::prelude::*;
use heartseal_core::memory_lane::{progress, SLIDES};
use heartseal_core::{memory_lane_timeline, FlowEvent, LanePhase, TimelineEvent};
use heartseal_ui::{Button, ButtonVariant, FloatingHearts, StoryProgress};

use crate::context::use_flow;

/// How often the story bar is redrawn
const PROGRESS_TICK: Duration = Duration::from_millis(50);

#[component]
pub fn MemoryLane() -> Element {
    let flow = use_flow();
    let mut phase = use_signal(|| LanePhase::Showing(0));
    let mut bar = use_signal(|| 0.0_f64);

    // Owned by this scope: unmounting drops the task and with it the timeline.
    let slideshow = use_hook(move || {
        spawn(async move {
            let mut handle = memory_lane_timeline().spawn();
            let mut ticker = tokio::time::interval(PROGRESS_TICK);
            let mut shown_at = tokio::time::Instant::now();

            loop {
                tokio::select! {
                    event = handle.next() => match event {
                        Some(TimelineEvent::Entered(next)) => {
                            match next {
                                LanePhase::Showing(_) => {
                                    shown_at = tokio::time::Instant::now();
                                    bar.set(0.0);
                                }
                                LanePhase::Fading(_) => bar.set(100.0),
                            }
                            phase.set(next);
                        }
                        Some(TimelineEvent::Finished) => {
                            tracing::debug!("Memory lane finished");
                            flow.dispatch(FlowEvent::IntroFinished);
                            break;
                        }
                        None => break,
                    },
                    _ = ticker.tick() => {
                        if let LanePhase::Showing(i) = *phase.peek() {
                            bar.set(progress(shown_at.elapsed(), SLIDES[i].duration));
                        }
                    }
                }
            }
        })
    });

    let current = phase();
    let index = current.slide_index().min(SLIDES.len() - 1);
    let text = SLIDES[index].text;
    let slide_class = match current {
        LanePhase::Showing(_) => "slide",
        LanePhase::Fading(_) => "slide fading",
    };

    rsx! {
        div { class: "page memory-lane",
            FloatingHearts {}
            StoryProgress { count: SLIDES.len(), current: index, progress: bar() }

            div { class: "{slide_class}",
                p { class: "slide-text", "{text}" }
            }

            p { class: "lane-footer", "A Journey Shared" }

            Button {
                variant: ButtonVariant::Ghost,
                class: "skip-intro".to_string(),
                onclick: move |_| {
                    slideshow.cancel();
                    flow.dispatch(FlowEvent::IntroSkipped);
                },
                "Skip Intro"
            }
        }
    }
}
