//! Floating element placement
//!
//! Positions a floating element next to an anchor rectangle and, when the
//! requested placement would leave the viewport, rotates through alternative
//! placements until one fits or the attempt budget runs out.

pub mod compute;
pub mod config;
pub mod engine;
pub mod overflow;
pub mod rotation;
pub mod types;

pub use compute::compute_position;
pub use config::{PlacementConfig, DEFAULT_GAP};
pub use engine::{
    find_position, find_position_str, find_position_with_config, resolve, Attempt, Resolution,
    MAX_ATTEMPTS,
};
pub use overflow::check_overflow;
pub use rotation::{default_successor, next_placement, ROTATION_TABLE};
pub use types::*;
