//! One page per screen of the proposal flow.

mod accepted;
mod memory_lane;
mod proposal;
mod setup;

pub use accepted::Accepted;
pub use memory_lane::MemoryLane;
pub use proposal::Proposal;
pub use setup::Setup;
