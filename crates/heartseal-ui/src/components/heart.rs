//! Heart graphics: the icon, the floating keepsakes behind the slideshow,
//! and the heartbeat line on the proposal screen.

use dioxus::prelude::*;

const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

const EKG_PATH: &str = "M0,50 L100,50 L110,30 L120,70 L130,50 L200,50 L210,10 L220,90 L230,50 L300,50 L310,40 L320,60 L330,50 L400,50 L410,20 L420,80 L430,50 L500,50 L510,45 L520,55 L530,50 L600,50 L610,0 L620,100 L630,50 L700,50 L710,35 L720,65 L730,50 L800,50 L810,15 L820,85 L830,50 L900,50 L910,40 L920,60 L930,50 L1000,50";

#[derive(Clone, PartialEq, Props)]
pub struct HeartIconProps {
    /// Edge length in pixels
    #[props(default = 24)]
    pub size: u32,
    #[props(default = "currentColor".to_string())]
    pub color: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn HeartIcon(props: HeartIconProps) -> Element {
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "heart-icon {class}",
            view_box: "0 0 24 24",
            width: "{props.size}",
            height: "{props.size}",
            fill: "{props.color}",
            "aria-hidden": "true",
            path { d: HEART_PATH }
        }
    }
}

/// Where one floating keepsake heart sits and how it pulses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keepsake {
    /// Percent from the top
    pub top: f64,
    /// Percent from the left
    pub left: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

/// Spread `count` hearts over the page.
///
/// Positions come from a fixed low-discrepancy sequence so the layout is
/// stable across re-renders.
pub fn keepsakes(count: usize) -> Vec<Keepsake> {
    const GOLDEN: f64 = 0.618_033_988_749_895;
    (0..count)
        .map(|i| {
            let n = i as f64 + 1.0;
            let a = (n * GOLDEN).fract();
            let b = (n * GOLDEN * GOLDEN).fract();
            Keepsake {
                top: a * 100.0,
                left: b * 100.0,
                delay_secs: (a * 5.0 * 10.0).round() / 10.0,
                duration_secs: 3.0 + (b * 4.0 * 10.0).round() / 10.0,
            }
        })
        .collect()
}

/// Faint pulsing hearts scattered behind the content
#[component]
pub fn FloatingHearts(#[props(default = 15)] count: usize) -> Element {
    let styles = use_hook(|| {
        keepsakes(count)
            .into_iter()
            .map(|h| {
                format!(
                    "top: {:.1}%; left: {:.1}%; animation-delay: {}s; animation-duration: {}s;",
                    h.top, h.left, h.delay_secs, h.duration_secs
                )
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "floating-hearts", "aria-hidden": "true",
            for (i, style) in styles.iter().enumerate() {
                div { key: "{i}", class: "floating-heart", style: "{style}",
                    HeartIcon { size: 16 }
                }
            }
        }
    }
}

/// EKG trace whose sweep speeds up as `period_secs` shrinks
#[component]
pub fn HeartbeatLine(period_secs: f64) -> Element {
    rsx! {
        div { class: "heartbeat-line", "aria-hidden": "true",
            svg {
                view_box: "0 0 1000 100",
                preserve_aspect_ratio: "none",
                path {
                    class: "ekg-path",
                    d: EKG_PATH,
                    stroke: "currentColor",
                    stroke_width: "2",
                    fill: "none",
                    style: "animation-duration: {period_secs:.3}s;",
                }
            }
        }
    }
}
