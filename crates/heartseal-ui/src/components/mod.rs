//! Reusable UI components for the proposal screens.

mod button;
mod heart;
mod input;
mod story_progress;
mod wax_seal;

pub use button::*;
pub use heart::*;
pub use input::*;
pub use story_progress::*;
pub use wax_seal::*;
