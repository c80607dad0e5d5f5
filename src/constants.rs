//! This module contains all the constants used by both games.

use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The fixed simulation step used by the pursuit model, in seconds.
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// The size of each maze tile, in pixels.
pub const TILE_SIZE: f32 = 64.0;
/// The default maze size, in cells. Both are odd already.
pub const MAZE_COLS: u32 = 21;
pub const MAZE_ROWS: u32 = 21;
/// Chance that an interior wall with two or more passage neighbours is opened.
pub const WIDEN_PROBABILITY: f64 = 0.30;

/// Player speed along each axis, in pixels per second.
pub const PLAYER_SPEED: f32 = 180.0;
/// Per-axis scale applied when moving diagonally.
pub const DIAGONAL_FACTOR: f32 = 0.7071;
/// Half of the player's collision box, as a fraction of the tile size (0.75 sprite × 0.7 body / 2).
pub const PLAYER_HALF_EXTENT_FACTOR: f32 = 0.2625;
/// Half of a candy pickup box, as a fraction of the tile size.
pub const CANDY_HALF_EXTENT_FACTOR: f32 = 0.225;
/// One in every this many passage tiles holds a candy.
pub const CANDY_DENSITY: usize = 4;
/// Minimum distance from the worm head, in tiles, for a post-catch teleport.
pub const SAFE_DISTANCE_TILES: f32 = 5.0;

/// Worm head speed, in pixels per second.
pub const WORM_SPEED: f32 = 90.0;
/// Distance below which the worm head stops steering, in pixels.
pub const ARRIVAL_EPSILON: f32 = 4.0;
/// Catch radius, as a fraction of the tile size.
pub const CATCH_RADIUS_FACTOR: f32 = 0.55;
/// Number of frames between consecutive worm segments.
pub const SEGMENT_GAP: usize = 12;
/// Body segments between the head and the tail.
pub const WORM_BODY_SEGMENTS: usize = 4;
/// Followers trailing the head: every body segment plus the tail.
pub const WORM_FOLLOWERS: usize = WORM_BODY_SEGMENTS + 1;
/// History samples kept for the worm.
pub const WORM_HISTORY_CAPACITY: usize = (WORM_BODY_SEGMENTS + 1) * SEGMENT_GAP;
/// How long the worm ignores the player after a catch.
pub const INVINCIBILITY_DURATION: Duration = Duration::from_secs(2);

/// The size of the delivery road canvas, in pixels.
pub const ROAD_SIZE: Vec2 = Vec2::new(800.0, 600.0);
pub const ROAD_LEFT_LIMIT: f32 = 120.0;
pub const ROAD_RIGHT_LIMIT: f32 = ROAD_SIZE.x - 120.0;
/// Lateral acceleration per tick while a direction is held.
pub const BIKE_ACCELERATION: f32 = 0.8;
/// Lateral velocity multiplier applied every tick.
pub const BIKE_FRICTION: f32 = 0.92;
/// Lateral speed cap, in pixels per tick.
pub const BIKE_MAX_SPEED: f32 = 12.0;
/// Vertical position the bike is drawn at.
pub const BIKE_Y: f32 = ROAD_SIZE.y - 100.0;
/// Side length of the bike and obstacle hitboxes.
pub const HITBOX_SIZE: f32 = 60.0;
/// Road scroll speed, in pixels per tick.
pub const ROAD_SPEED: f32 = 10.0;
pub const DELIVERY_DISTANCE: f32 = 1000.0;
pub const DELIVERY_TIME_LIMIT: Duration = Duration::from_secs(60);
pub const SOBA_STACK_SIZE: usize = 5;
pub const OBSTACLE_SPAWN_INTERVAL: Duration = Duration::from_millis(1000);
/// Spawn height of new obstacles, above the visible road.
pub const OBSTACLE_SPAWN_Y: f32 = -50.0;
/// After a full recovery, obstacles at or below this line are cleared.
pub const RECOVERY_CLEAR_LINE: f32 = ROAD_SIZE.y - 300.0;
/// Pointer dead zone around the bike, in pixels.
pub const POINTER_DEAD_ZONE: f32 = 20.0;
