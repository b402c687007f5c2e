//! Property-based tests for the link codec and the evasive control
//!
//! Uses proptest to check the laws the proposal flow relies on.

use heartseal_core::evasive::{relocate, Size, DECLINE_RESPONSES};
use heartseal_core::link::{decode_query, encode_query, PARAM_QUESTION, PARAM_RECIPIENT, PARAM_SENDER};
use heartseal_core::{EvasiveConfig, EvasiveState, Flow, ProposalDetails, Screen};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Non-empty free text, including characters that need escaping
fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{1,60}")
        .expect("valid regex")
        .prop_filter("non-empty", |s| !s.is_empty())
}

fn details_strategy() -> impl Strategy<Value = ProposalDetails> {
    (
        field_strategy(),
        field_strategy(),
        field_strategy(),
        prop::option::of(field_strategy()),
    )
        .prop_map(|(question, recipient, sender, password)| {
            let details = ProposalDetails::new(question, recipient, sender);
            match password {
                Some(p) => details.with_password(p),
                None => details,
            }
        })
}

fn required_param() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(PARAM_QUESTION),
        Just(PARAM_RECIPIENT),
        Just(PARAM_SENDER),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// decode(encode(d)) reproduces every field, including an absent password
    #[test]
    fn link_roundtrip(details in details_strategy(), accepted in any::<bool>()) {
        let decoded = decode_query(&encode_query(&details, accepted)).expect("complete link");
        prop_assert_eq!(&decoded.details, &details);
        prop_assert_eq!(decoded.accepted, accepted);
        if details.password.is_none() {
            prop_assert!(decoded.details.password.is_none());
        }
    }

    /// An absent password never shows up as a `p` parameter
    #[test]
    fn no_password_no_param(details in details_strategy()) {
        let details = ProposalDetails { password: None, ..details };
        let query = encode_query(&details, false);
        prop_assert!(!query.split('&').any(|pair| pair.starts_with("p=")));
    }

    /// Dropping any required parameter yields no details and the setup screen
    #[test]
    fn incomplete_links_fall_back_to_setup(details in details_strategy(), missing in required_param()) {
        let query = encode_query(&details, true);
        let prefix = format!("{}=", missing);
        let incomplete: Vec<&str> = query
            .split('&')
            .filter(|pair| !pair.starts_with(&prefix))
            .collect();
        let incomplete = incomplete.join("&");

        prop_assert!(decode_query(&incomplete).is_none());
        prop_assert_eq!(Flow::initial(&incomplete).screen(), Screen::Setup);
    }

    /// A complete link with a=true always starts on the accepted screen
    #[test]
    fn accepted_links_start_accepted(details in details_strategy()) {
        let flow = Flow::initial(&encode_query(&details, true));
        prop_assert_eq!(flow.screen(), Screen::Accepted);
        prop_assert_eq!(flow.details(), Some(&details));
    }

    /// After n declines the scales and message follow the closed formulas
    #[test]
    fn evasive_scales_follow_formula(n in 0u32..200) {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        for _ in 0..n {
            state.decline(&config);
        }

        let expected_accept = (1.0 + f64::from(n) * 0.35).min(8.0);
        let expected_decline = (1.0 - f64::from(n) * 0.05).max(0.3);
        prop_assert!((state.accept_scale(&config) - expected_accept).abs() < 1e-9);
        prop_assert!((state.decline_scale(&config) - expected_decline).abs() < 1e-9);
        prop_assert_eq!(state.message(), DECLINE_RESPONSES[n as usize % DECLINE_RESPONSES.len()]);
    }

    /// Dismissing the interstitial never touches the scales
    #[test]
    fn dismiss_keeps_scales(n in 5u32..50) {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        for _ in 0..n {
            state.decline(&config);
        }
        prop_assert!(state.needs_reconsider(&config));

        let before = (state.accept_scale(&config), state.decline_scale(&config), state.message());
        state.dismiss_reconsider();
        let after = (state.accept_scale(&config), state.decline_scale(&config), state.message());
        prop_assert_eq!(before, after);
        prop_assert!(!state.needs_reconsider(&config));
    }

    /// Relocated controls always render fully inside their container
    #[test]
    fn relocate_stays_in_bounds(
        width in 0.0f64..2000.0,
        height in 0.0f64..2000.0,
        control_w in 1.0f64..400.0,
        control_h in 1.0f64..200.0,
        margin in 0.0f64..64.0,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let container = Size::new(width, height);
        let control = Size::new(control_w, control_h);
        let p = relocate(container, control, margin, &mut rng);

        prop_assert!(p.x >= 0.0 && p.y >= 0.0);
        if control_w <= width {
            prop_assert!(p.x + control_w <= width + 1e-9);
        } else {
            prop_assert_eq!(p.x, 0.0);
        }
        if control_h <= height {
            prop_assert!(p.y + control_h <= height + 1e-9);
        } else {
            prop_assert_eq!(p.y, 0.0);
        }
    }

    /// Whatever the label and scale, a measured decline control that fits
    /// its stage is placed without overflowing it
    #[test]
    fn placed_decline_control_stays_in_bounds(
        declines in 0u32..40,
        label_w in 40.0f64..320.0,
        label_h in 30.0f64..70.0,
        width in 320.0f64..1600.0,
        height in 200.0f64..900.0,
        seed in any::<u64>(),
    ) {
        let config = EvasiveConfig::default();
        let mut state = EvasiveState::new();
        for _ in 0..declines {
            state.decline(&config);
        }
        let rendered = Size::new(label_w, label_h).scaled(state.decline_scale(&config));
        let stage = Size::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);

        let p = state.place(&config, stage, rendered, &mut rng);
        prop_assert!(p.x >= 0.0 && p.y >= 0.0);
        prop_assert!(p.x + rendered.width <= width + 1e-9);
        prop_assert!(p.y + rendered.height <= height + 1e-9);
        prop_assert_eq!(state.position(), Some(p));
    }
}
