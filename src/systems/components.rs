use std::time::Duration;

use bevy_ecs::{bundle::Bundle, component::Component, entity::Entity, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;
use strum_macros::EnumIter;

use crate::constants::WORM_HISTORY_CAPACITY;
use crate::maze::Grid;
use crate::pursuit::Pursuer;

/// World-space centre of an entity, in pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// A tag-like component for the player, carrying its presentation-facing movement state.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub speed: f32,
    pub velocity: Vec2,
    pub facing_right: bool,
    pub moving: bool,
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            velocity: Vec2::ZERO,
            facing_right: true,
            moving: false,
        }
    }
}

/// An axis-aligned collision box, centred on the entity's position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub half_extent: f32,
}

/// The pursuing worm. The entity's own `Position` is the head.
#[derive(Component, Debug, Clone)]
pub struct Worm(pub Pursuer<WORM_HISTORY_CAPACITY>);

/// A trailing piece of a worm. The last index is the tail.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WormSegment {
    pub worm: Entity,
    pub index: usize,
}

/// The five candy flavours, handed out in order as candies are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CandyKind {
    Cherry,
    Orange,
    Lemon,
    Mint,
    Grape,
}

/// A collectible candy.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candy {
    pub kind: CandyKind,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub position: Position,
    pub collider: Collider,
}

#[derive(Bundle)]
pub struct CandyBundle {
    pub candy: Candy,
    pub position: Position,
    pub collider: Collider,
}

#[derive(Bundle)]
pub struct WormSegmentBundle {
    pub segment: WormSegment,
    pub position: Position,
}

/// The maze the session is played in.
#[derive(Resource, Debug, Clone)]
pub struct Maze {
    pub grid: Grid,
    pub tile_size: f32,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DeltaTime {
    pub seconds: f32,
}

/// Monotonic simulation time, advanced once per tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimClock(pub Duration);

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(pub u32);

/// The session's random source.
#[derive(Resource, Debug)]
pub struct GameRng(pub SmallRng);

/// Tracks one-shot session milestones.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SessionProgress {
    pub all_collected: bool,
}
