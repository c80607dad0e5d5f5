//! Candy Run: the maze chase session, driven one schedule run per tick.

use std::time::Duration;

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use tracing::{debug, error, info};

use crate::config::CandyConfig;
use crate::constants::{CANDY_DENSITY, CANDY_HALF_EXTENT_FACTOR, PLAYER_HALF_EXTENT_FACTOR};
use crate::error::{EntityError, GameError, GameResult};
use crate::events::GameEvent;
use crate::input::InputFrame;
use crate::maze::{Grid, MazeGenerator};
use crate::pursuit::{CatchState, Pursuer, PursuitSettings};
use crate::systems::{
    candy_collection_system, catch_system, player_movement_system, worm_movement_system, worm_segment_system, Candy,
    CandyBundle, CandyKind, Collider, DeltaTime, GameRng, Maze, Player, PlayerBundle, Position, Score,
    SessionProgress, SimClock, Worm, WormSegment, WormSegmentBundle,
};

/// A Candy Run session.
///
/// Owns the ECS world (maze, player, worm, candies) and the schedule that advances it.
pub struct CandyRun {
    pub world: World,
    pub schedule: Schedule,
}

impl CandyRun {
    /// Generates a maze from the configuration and populates it.
    pub fn new(config: &CandyConfig, seed: u64) -> GameResult<CandyRun> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = MazeGenerator::new(config.cols, config.rows)?
            .with_widen_probability(config.widen_probability)
            .generate_with(&mut rng);
        Self::with_grid(grid, config, rng)
    }

    /// Populates an existing maze. The maze dimensions in `config` are ignored.
    pub fn with_grid(grid: Grid, config: &CandyConfig, mut rng: SmallRng) -> GameResult<CandyRun> {
        let tile_size = config.tile_size;
        let start = grid.start_position(tile_size);
        let mut tiles = grid.passage_tiles(tile_size);
        if tiles.is_empty() {
            return Err(GameError::InvalidState("Maze has no passages".into()));
        }

        // Farthest passage from the player, first wins on ties
        let worm_spawn = tiles
            .iter()
            .copied()
            .fold(start, |best, tile| {
                if tile.distance_squared(start) > best.distance_squared(start) {
                    tile
                } else {
                    best
                }
            });

        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameError>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);

        world.spawn(PlayerBundle {
            player: Player::new(config.player_speed),
            position: Position(start),
            collider: Collider {
                half_extent: tile_size * PLAYER_HALF_EXTENT_FACTOR,
            },
        });

        tiles.shuffle(&mut rng);
        let candy_count = tiles.len() / CANDY_DENSITY;
        let candy_collider = Collider {
            half_extent: tile_size * CANDY_HALF_EXTENT_FACTOR,
        };
        let candies: Vec<CandyBundle> = tiles
            .iter()
            .take(candy_count)
            .zip(CandyKind::iter().cycle())
            .map(|(tile, kind)| CandyBundle {
                candy: Candy { kind },
                position: Position(*tile),
                collider: candy_collider,
            })
            .collect();
        world.spawn_batch(candies);

        let settings = PursuitSettings {
            speed: config.worm_speed,
            ..PursuitSettings::for_tile(tile_size)
        };
        let worm = world.spawn((Worm(Pursuer::new(worm_spawn, settings)), Position(worm_spawn))).id();
        world.spawn_batch((0..settings.followers).map(move |index| WormSegmentBundle {
            segment: WormSegment { worm, index },
            position: Position(worm_spawn),
        }));

        debug!(?start, ?worm_spawn, candy_count, "Candy Run populated");

        world.insert_resource(Maze { grid, tile_size });
        world.insert_resource(DeltaTime::default());
        world.insert_resource(SimClock::default());
        world.insert_resource(Score::default());
        world.insert_resource(SessionProgress::default());
        world.insert_resource(InputFrame::default());
        world.insert_resource(GameRng(rng));

        schedule.add_systems(
            (
                player_movement_system,
                worm_movement_system,
                worm_segment_system,
                catch_system,
                candy_collection_system,
            )
                .chain(),
        );

        Ok(CandyRun { world, schedule })
    }

    /// Advances the session by `dt` seconds with the given input, returning the events it produced.
    pub fn tick(&mut self, dt: f32, input: InputFrame) -> Vec<GameEvent> {
        let step = Duration::try_from_secs_f32(dt).unwrap_or_default();
        self.world.resource_mut::<SimClock>().0 += step;
        self.world.insert_resource(DeltaTime { seconds: dt.max(0.0) });
        self.world.insert_resource(input);

        self.schedule.run(&mut self.world);

        for error in self.world.resource_mut::<Events<GameError>>().drain() {
            error!(%error, "Candy Run tick reported an error");
        }

        let events: Vec<GameEvent> = self.world.resource_mut::<Events<GameEvent>>().drain().collect();
        if events.contains(&GameEvent::AllCandiesCollected) {
            info!(score = self.score(), clock = ?self.clock(), "Candy Run cleared");
        }
        events
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<Score>().0
    }

    pub fn clock(&self) -> Duration {
        self.world.resource::<SimClock>().0
    }

    pub fn grid(&self) -> &Grid {
        &self.world.resource::<Maze>().grid
    }

    pub fn tile_size(&self) -> f32 {
        self.world.resource::<Maze>().tile_size
    }

    pub fn is_cleared(&self) -> bool {
        self.world.resource::<SessionProgress>().all_collected
    }

    pub fn player_position(&mut self) -> GameResult<Vec2> {
        let mut query = self.world.query_filtered::<&Position, With<Player>>();
        query
            .single(&self.world)
            .map(|position| position.0)
            .map_err(|_| EntityError::Missing("player").into())
    }

    /// Moves the player directly, bypassing wall collision.
    pub fn place_player(&mut self, position: Vec2) -> GameResult<()> {
        if !position.is_finite() {
            return Err(EntityError::NonFinitePosition {
                x: position.x,
                y: position.y,
            }
            .into());
        }
        let mut query = self.world.query_filtered::<&mut Position, With<Player>>();
        let mut current = query
            .single_mut(&mut self.world)
            .map_err(|_| GameError::from(EntityError::Missing("player")))?;
        current.0 = position;
        Ok(())
    }

    pub fn player(&mut self) -> GameResult<Player> {
        let mut query = self.world.query::<&Player>();
        query
            .single(&self.world)
            .copied()
            .map_err(|_| EntityError::Missing("player").into())
    }

    pub fn worm_head(&mut self) -> GameResult<Vec2> {
        let mut query = self.world.query::<&Worm>();
        query
            .single(&self.world)
            .map(|worm| worm.0.head())
            .map_err(|_| EntityError::Missing("worm").into())
    }

    pub fn worm_state(&mut self) -> GameResult<CatchState> {
        let mut query = self.world.query::<&Worm>();
        query
            .single(&self.world)
            .map(|worm| worm.0.state())
            .map_err(|_| EntityError::Missing("worm").into())
    }

    /// Segment positions ordered from the head to the tail.
    pub fn worm_segments(&mut self) -> Vec<Vec2> {
        let mut query = self.world.query::<(&WormSegment, &Position)>();
        let mut segments: Vec<(usize, Vec2)> = query
            .iter(&self.world)
            .map(|(segment, position)| (segment.index, position.0))
            .collect();
        segments.sort_by_key(|(index, _)| *index);
        segments.into_iter().map(|(_, position)| position).collect()
    }

    pub fn candy_positions(&mut self) -> Vec<Vec2> {
        let mut query = self.world.query_filtered::<&Position, With<Candy>>();
        query.iter(&self.world).map(|position| position.0).collect()
    }

    pub fn candies_remaining(&mut self) -> usize {
        let mut query = self.world.query::<&Candy>();
        query.iter(&self.world).count()
    }
}
