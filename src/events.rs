use bevy_ecs::{entity::Entity, event::Event};
use glam::Vec2;

use crate::systems::components::CandyKind;

/// Gameplay notifications produced by a Candy Run tick, for whatever sits at the presentation boundary.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    CandyCollected {
        candy: Entity,
        kind: CandyKind,
        score: u32,
    },
    /// The worm caught the player. `relocated_to` is `None` when no safe tile was available.
    PlayerCaught { at: Vec2, relocated_to: Option<Vec2> },
    AllCandiesCollected,
}
