//! The Entity-Component-System (ECS) side of Candy Run.
//!
//! This module contains the components, resources and systems that make up one tick of the maze chase.

pub mod components;
pub mod item;
pub mod player;
pub mod worm;

pub use self::components::*;
pub use self::item::candy_collection_system;
pub use self::player::player_movement_system;
pub use self::worm::{catch_system, safe_tiles, worm_movement_system, worm_segment_system};
