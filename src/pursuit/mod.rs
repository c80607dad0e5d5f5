//! Leader/follower pursuit: a head steering toward a target and a body replaying its path.

pub mod history;
pub mod leader;
pub mod pursuer;

pub use history::{follower_positions, PositionHistory};
pub use leader::Leader;
pub use pursuer::{CatchState, Pursuer, PursuitSettings};
