//! Heartseal UI Components
//!
//! Dioxus building blocks for the proposal screens. The look is a warm
//! romantic one:
//! - **Rose (#e11d48)**: the accept button, hearts, highlights
//! - **Blush (#fff1f2)**: page backgrounds
//! - **Gold (#b8860b)**: certificate borders and the wax seal
//! - **Ink (#1f2937)**: body text
//!
//! Components only render. All state lives in `heartseal-core` and the
//! pages of the desktop app.

pub mod components;

pub use components::*;
