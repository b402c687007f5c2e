//! Proposal page: secret-code gate, scripted intro, then the question with
//! a "No" button that will not hold still.

use std::rc::Rc;

use dioxus::prelude::*;
use heartseal_core::evasive::Size;
use heartseal_core::{
    intro_timeline, AccessGate, EvasiveConfig, EvasiveState, FlowEvent, IntroStage, IntroTiming,
    ProposalDetails, TimelineEvent, Unlocker,
};
use heartseal_ui::{Button, ButtonVariant, HeartIcon, HeartbeatLine, Input};

use crate::context::use_flow;

#[component]
pub fn Proposal(details: ProposalDetails) -> Element {
    let flow = use_flow();
    let config = use_hook(EvasiveConfig::default);
    let gated = details.is_gated();

    let mut gate = use_signal(|| AccessGate::new(details.password.clone()));
    let mut attempt = use_signal(String::new);
    let mut stage: Signal<Option<IntroStage>> = use_signal(|| None);
    let mut revealed = use_signal(|| false);
    let mut unlocker: Signal<Option<Unlocker>> = use_signal(|| None);
    let mut evasive = use_signal(EvasiveState::new);
    let mut answer_stage: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut decline_slot: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    // Set by a decline; the control stays hidden until it has been re-placed.
    let mut settling = use_signal(|| false);

    // Owned by this scope: unmounting drops the task and with it the timeline.
    use_hook(move || {
        spawn(async move {
            let mut handle = intro_timeline(gated, &IntroTiming::default()).spawn();
            unlocker.set(Some(handle.unlocker()));

            while let Some(event) = handle.next().await {
                match event {
                    TimelineEvent::Entered(next) => {
                        // The code may have been entered before the timeline got here.
                        if next == IntroStage::Verify && gate.peek().is_open() {
                            handle.unlock();
                        }
                        stage.set(Some(next));
                    }
                    TimelineEvent::Finished => {
                        revealed.set(true);
                        break;
                    }
                }
            }
        })
    });

    let try_password = move |_: ()| {
        let access = gate.write().submit(&attempt.peek());
        if access.is_granted() {
            tracing::info!(attempts = gate.peek().attempts(), "Access granted");
            if let Some(unlocker) = unlocker.peek().as_ref() {
                unlocker.unlock();
            }
        }
    };

    let decline = {
        let config = config.clone();
        use_callback(move |_: ()| {
            if *settling.peek() {
                return;
            }
            let outcome = evasive.write().decline(&config);
            tracing::debug!(declines = evasive.peek().declines(), message = outcome.message, "Declined");
            settling.set(true);
        })
    };

    // Runs after the new label and scale are laid out, so both boxes are
    // measured as they render now.
    {
        let config = config.clone();
        use_effect(move || {
            if !settling() {
                return;
            }
            let config = config.clone();
            spawn(async move {
                match (measure(answer_stage).await, measure(decline_slot).await) {
                    (Some(stage), Some(control)) => {
                        let p = evasive.write().place(&config, stage, control, &mut rand::rng());
                        tracing::debug!(x = p.x, y = p.y, "Decline control moved");
                    }
                    _ => tracing::warn!("Answer stage not measured, decline control stays put"),
                }
                settling.set(false);
            });
        });
    }

    let accept = {
        let config = config.clone();
        use_callback(move |_: ()| {
            if evasive.peek().is_accepting() {
                return;
            }
            let delay = evasive.write().begin_accept(&config);
            tracing::info!(declines = evasive.peek().declines(), "Proposal accepted");
            spawn(async move {
                tokio::time::sleep(delay).await;
                flow.dispatch(FlowEvent::Accept);
            });
        })
    };

    if gated && !gate.read().is_open() {
        let invalid = gate.read().has_error();
        return rsx! {
            div { class: "page proposal-page",
                div { class: "card gate-card",
                    HeartIcon { size: 48, class: "accent".to_string() }
                    h2 { class: "card-title", "For Your Eyes Only" }
                    Input {
                        value: attempt(),
                        oninput: move |s| {
                            attempt.set(s);
                            gate.write().clear_error();
                        },
                        onenter: try_password,
                        input_type: "password".to_string(),
                        placeholder: "Enter Password".to_string(),
                        invalid: invalid,
                        autofocus: true,
                    }
                    Button { onclick: try_password, class: "wide".to_string(), "Open Heart" }
                }
            }
        };
    }

    if !revealed() {
        let caption = stage().map(|s| s.caption()).unwrap_or_default();
        let countdown = matches!(stage(), Some(IntroStage::Countdown(_)));
        return rsx! {
            div { class: "page proposal-page intro",
                HeartIcon { size: 64, class: "accent pulse".to_string() }
                p { class: if countdown { "intro-caption countdown" } else { "intro-caption" }, "{caption}" }
            }
        };
    }

    let state = evasive.read().clone();

    if state.is_accepting() {
        return rsx! {
            div { class: "page proposal-page accepting",
                HeartIcon { size: 96, class: "accent ping".to_string() }
                h2 { class: "yes-forever", "Yes Forever." }
            }
        };
    }

    let accept_style = format!("transform: scale({:.2});", state.accept_scale(&config));
    let decline_scale = state.decline_scale(&config);
    let decline_style = match state.position() {
        Some(p) => format!(
            "position: absolute; left: {:.0}px; top: {:.0}px; transform: scale({:.2}); transform-origin: top left;",
            p.x, p.y, decline_scale
        ),
        None => format!("transform: scale({:.2});", decline_scale),
    };
    let decline_style = if settling() {
        format!("{} visibility: hidden;", decline_style)
    } else {
        decline_style
    };
    let heartbeat = state.heartbeat_period(&config).as_secs_f64();
    let message = state.message();
    let recipient = details.recipient.clone();
    let question = details.question.clone();

    rsx! {
        div { class: "page proposal-page",
            HeartbeatLine { period_secs: heartbeat }

            div { class: "proposal",
                p { class: "eyebrow pulse", "Dearest {recipient}" }
                h1 { class: "question", "{question}" }

                div {
                    class: "answer-stage",
                    onmounted: move |e: MountedEvent| answer_stage.set(Some(e.data())),
                    Button {
                        variant: ButtonVariant::Rose,
                        style: accept_style,
                        onclick: accept,
                        "YES"
                    }
                    div {
                        class: "decline-slot",
                        style: "{decline_style}",
                        onmounted: move |e: MountedEvent| decline_slot.set(Some(e.data())),
                        Button {
                            variant: ButtonVariant::Shy,
                            onhover: decline,
                            onclick: decline,
                            "{message}"
                        }
                    }
                }
            }

            p { class: "proposal-footer", "Listen to your heart" }

            if state.needs_reconsider(&config) {
                div { class: "overlay",
                    div { class: "card reconsider",
                        h2 { class: "card-title", "Are you really sure?" }
                        p { class: "card-subtitle", "Take a breath. Look at that big button one more time." }
                        Button {
                            variant: ButtonVariant::Rose,
                            onclick: accept,
                            "YES"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| evasive.write().dismiss_reconsider(),
                            "Let me think again"
                        }
                    }
                }
            }
        }
    }
}

/// On-screen size of a mounted element, transforms included.
async fn measure(element: Signal<Option<Rc<MountedData>>>) -> Option<Size> {
    let element = (*element.peek()).clone()?;
    match element.get_client_rect().await {
        Ok(rect) => Some(Size::new(rect.width(), rect.height())),
        Err(e) => {
            tracing::debug!("Could not measure element: {:?}", e);
            None
        }
    }
}
