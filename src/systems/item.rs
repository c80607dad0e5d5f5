use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::With,
    system::{Commands, Query, ResMut},
};
use tracing::{info, trace};

use crate::{
    collision::boxes_overlap,
    error::{EntityError, GameError},
    events::GameEvent,
    systems::components::{Candy, Collider, Player, Position, Score, SessionProgress},
};

/// Collects candies the player's box overlaps, and announces when the last one is gone.
pub fn candy_collection_system(
    mut commands: Commands,
    mut score: ResMut<Score>,
    mut progress: ResMut<SessionProgress>,
    players: Query<(&Position, &Collider), With<Player>>,
    candies: Query<(Entity, &Candy, &Position, &Collider)>,
    mut events: EventWriter<GameEvent>,
    mut errors: EventWriter<GameError>,
) {
    let Ok((player, player_collider)) = players.single() else {
        errors.write(EntityError::Missing("player").into());
        return;
    };

    let mut remaining = 0usize;
    for (entity, candy, position, collider) in candies.iter() {
        if !boxes_overlap(player.0, player_collider.half_extent, position.0, collider.half_extent) {
            remaining += 1;
            continue;
        }

        score.0 += 1;
        trace!(candy = ?entity, kind = ?candy.kind, score = score.0, "Candy collected");
        commands.entity(entity).despawn();
        events.write(GameEvent::CandyCollected {
            candy: entity,
            kind: candy.kind,
            score: score.0,
        });
    }

    if remaining == 0 && !progress.all_collected {
        progress.all_collected = true;
        info!(score = score.0, "All candies collected");
        events.write(GameEvent::AllCandiesCollected);
    }
}
