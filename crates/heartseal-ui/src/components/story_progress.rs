//! Story-style progress bars across the top of the slideshow.

use dioxus::prelude::*;
use heartseal_core::memory_lane::bar_fill;

/// Properties for the StoryProgress component
#[derive(Clone, PartialEq, Props)]
pub struct StoryProgressProps {
    /// Number of bars
    pub count: usize,
    /// Index of the slide currently showing
    pub current: usize,
    /// Progress (0-100) of the current slide
    pub progress: f64,
}

/// One bar per slide: earlier bars full, the current one filling, later ones empty.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StoryProgress { count: SLIDES.len(), current: index(), progress: progress() }
/// }
/// ```
#[component]
pub fn StoryProgress(props: StoryProgressProps) -> Element {
    let fills: Vec<f64> = (0..props.count)
        .map(|bar| bar_fill(bar, props.current, props.progress))
        .collect();

    rsx! {
        div { class: "story-progress",
            for (bar, fill) in fills.into_iter().enumerate() {
                div { key: "{bar}", class: "story-bar",
                    div {
                        class: "story-bar-fill",
                        style: "width: {fill:.1}%;",
                    }
                }
            }
        }
    }
}
