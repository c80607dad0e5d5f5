use bevy_ecs::{
    event::EventWriter,
    system::{Query, Res},
};
use glam::Vec2;

use crate::{
    collision::slide_against_walls,
    error::{EntityError, GameError},
    input::InputFrame,
    systems::components::{Collider, DeltaTime, Maze, Player, Position},
};

/// Moves the player from held directions, sliding along walls and staying inside the maze.
pub fn player_movement_system(
    maze: Res<Maze>,
    delta_time: Res<DeltaTime>,
    input: Res<InputFrame>,
    mut players: Query<(&mut Player, &mut Position, &Collider)>,
    mut errors: EventWriter<GameError>,
) {
    let (mut player, mut position, collider) = match players.single_mut() {
        Ok(tuple) => tuple,
        Err(_) => {
            errors.write(EntityError::Missing("player").into());
            return;
        }
    };

    let axis = input.movement_axis();
    player.velocity = axis * player.speed;
    player.moving = axis != Vec2::ZERO;
    if axis.x != 0.0 {
        player.facing_right = axis.x > 0.0;
    }

    if !player.moving {
        return;
    }

    let delta = player.velocity * delta_time.seconds;
    let moved = slide_against_walls(&maze.grid, maze.tile_size, position.0, delta, collider.half_extent);
    let bounds = maze.grid.world_size(maze.tile_size);
    position.0 = moved.clamp(Vec2::splat(collider.half_extent), bounds - collider.half_extent);
}
