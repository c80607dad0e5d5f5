use std::collections::HashMap;

use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use crate::{
    constants::SAFE_DISTANCE_TILES,
    error::{EntityError, GameError},
    events::GameEvent,
    maze::Grid,
    systems::components::{GameRng, Maze, Player, Position, SimClock, Worm, WormSegment},
};

/// Steers every worm head one fixed step toward the player.
pub fn worm_movement_system(
    clock: Res<SimClock>,
    players: Query<&Position, With<Player>>,
    mut worms: Query<(&mut Worm, &mut Position), Without<Player>>,
    mut errors: EventWriter<GameError>,
) {
    let Ok(target) = players.single() else {
        errors.write(EntityError::Missing("player").into());
        return;
    };

    for (mut worm, mut position) in worms.iter_mut() {
        worm.0.update(target.0, clock.0);
        position.0 = worm.0.head();
    }
}

/// Places each segment on its worm's recorded path.
pub fn worm_segment_system(
    worms: Query<(Entity, &Worm)>,
    mut segments: Query<(&WormSegment, &mut Position)>,
    mut errors: EventWriter<GameError>,
) {
    let paths: HashMap<Entity, Vec<Vec2>> = worms.iter().map(|(entity, worm)| (entity, worm.0.followers())).collect();

    for (segment, mut position) in segments.iter_mut() {
        let Some(followers) = paths.get(&segment.worm) else {
            errors.write(GameError::InvalidState(format!(
                "Segment {} refers to a worm that no longer exists: {:?}",
                segment.index, segment.worm
            )));
            continue;
        };

        if let Some(follower) = followers.get(segment.index) {
            position.0 = *follower;
        }
    }
}

/// Passage tiles a caught player may be moved to: inside the border and far enough from the worm head.
pub fn safe_tiles(grid: &Grid, tile_size: f32, head: Vec2) -> Vec<Vec2> {
    let min_distance = SAFE_DISTANCE_TILES * tile_size;
    grid.passages()
        .filter(|cell| grid.is_interior(*cell))
        .map(|cell| Grid::tile_center(cell, tile_size))
        .filter(|center| center.distance(head) > min_distance)
        .collect()
}

/// Detects catches, starts the worm's cooldown and moves the player somewhere safe.
pub fn catch_system(
    clock: Res<SimClock>,
    maze: Res<Maze>,
    mut rng: ResMut<GameRng>,
    mut players: Query<&mut Position, With<Player>>,
    mut worms: Query<(&mut Worm, &Position), Without<Player>>,
    mut events: EventWriter<GameEvent>,
    mut errors: EventWriter<GameError>,
) {
    let Ok(mut player) = players.single_mut() else {
        errors.write(EntityError::Missing("player").into());
        return;
    };

    for (mut worm, head) in worms.iter_mut() {
        if !worm.0.is_catching(player.0) {
            continue;
        }

        worm.0.on_catch(clock.0);
        let at = player.0;
        let relocated_to = safe_tiles(&maze.grid, maze.tile_size, head.0).choose(&mut rng.0).copied();

        match relocated_to {
            Some(tile) => {
                debug!(from = ?at, to = ?tile, "Player caught, relocating");
                player.0 = tile;
            }
            None => warn!(at = ?at, "Player caught, but no tile is far enough from the worm"),
        }

        events.write(GameEvent::PlayerCaught { at, relocated_to });
    }
}
