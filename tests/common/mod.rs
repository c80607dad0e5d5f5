#![allow(dead_code)]

use arcade::{
    config::CandyConfig,
    error::GameError,
    events::GameEvent,
    input::InputFrame,
    maze::{Cell, Grid},
    pursuit::{Pursuer, PursuitSettings},
    systems::{
        Candy, CandyBundle, CandyKind, Collider, DeltaTime, GameRng, Maze, Player, PlayerBundle, Position, Score,
        SessionProgress, SimClock, Worm,
    },
};
use bevy_ecs::{
    entity::Entity,
    event::{EventRegistry, Events},
    world::World,
};
use glam::{IVec2, Vec2};
use rand::{rngs::SmallRng, SeedableRng};

pub const TILE: f32 = 64.0;

/// Builds a grid from rows of `#` (wall) and `.` (passage).
pub fn grid_from(rows: &[&str]) -> Grid {
    let mut grid = Grid::filled(rows[0].len() as u32, rows.len() as u32, Cell::Wall);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '.' {
                grid.set(IVec2::new(x as i32, y as i32), Cell::Passage);
            }
        }
    }
    grid
}

/// A 15x3 maze: one straight corridor along row 1.
pub fn corridor() -> Grid {
    grid_from(&["###############", "#.............#", "###############"])
}

pub fn candy_config() -> CandyConfig {
    CandyConfig::default()
}

pub fn center(x: i32, y: i32) -> Vec2 {
    Grid::tile_center(IVec2::new(x, y), TILE)
}

/// A bare world with the resources Candy Run systems read, and no entities.
pub fn create_test_world(grid: Grid) -> World {
    let mut world = World::new();
    EventRegistry::register_event::<GameError>(&mut world);
    EventRegistry::register_event::<GameEvent>(&mut world);

    world.insert_resource(Maze { grid, tile_size: TILE });
    world.insert_resource(DeltaTime { seconds: 1.0 / 60.0 });
    world.insert_resource(SimClock::default());
    world.insert_resource(Score::default());
    world.insert_resource(SessionProgress::default());
    world.insert_resource(InputFrame::default());
    world.insert_resource(GameRng(SmallRng::seed_from_u64(1)));
    world
}

pub fn spawn_test_player(world: &mut World, position: Vec2) -> Entity {
    world
        .spawn(PlayerBundle {
            player: Player::new(180.0),
            position: Position(position),
            collider: Collider {
                half_extent: TILE * 0.2625,
            },
        })
        .id()
}

pub fn spawn_test_candy(world: &mut World, position: Vec2, kind: CandyKind) -> Entity {
    world
        .spawn(CandyBundle {
            candy: Candy { kind },
            position: Position(position),
            collider: Collider {
                half_extent: TILE * 0.225,
            },
        })
        .id()
}

pub fn spawn_test_worm(world: &mut World, position: Vec2) -> Entity {
    let worm = Pursuer::new(position, PursuitSettings::for_tile(TILE));
    world.spawn((Worm(worm), Position(position))).id()
}

pub fn drain_events(world: &mut World) -> Vec<GameEvent> {
    world.resource_mut::<Events<GameEvent>>().drain().collect()
}

pub fn drain_errors(world: &mut World) -> Vec<GameError> {
    world.resource_mut::<Events<GameError>>().drain().collect()
}
