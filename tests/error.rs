use arcade::error::{Axis, ConfigError, EntityError, GameError, GameResult, MazeError, PlatformError};
use speculoos::prelude::*;

#[test]
fn test_game_error_from_maze_error() {
    let maze_error = MazeError::InvalidDimension {
        axis: Axis::Rows,
        value: 0,
    };
    let game_error: GameError = maze_error.into();
    assert!(matches!(game_error, GameError::Maze(_)));
}

#[test]
fn test_game_error_from_config_error() {
    let config_error = ConfigError::Invalid {
        field: "candy.cols",
        reason: "too small".to_string(),
    };
    let game_error: GameError = config_error.into();
    assert!(matches!(game_error, GameError::Config(_)));
}

#[test]
fn test_game_error_from_entity_error() {
    let game_error: GameError = EntityError::Missing("worm").into();
    assert!(matches!(game_error, GameError::Entity(_)));
}

#[test]
fn test_game_error_from_platform_error() {
    let game_error: GameError = PlatformError::ConsoleInit("already set".to_string()).into();
    assert!(matches!(game_error, GameError::Platform(_)));
}

#[test]
fn test_error_messages() {
    let maze_error = GameError::from(MazeError::InvalidDimension {
        axis: Axis::Columns,
        value: 1,
    });
    assert_that(&maze_error.to_string())
        .is_equal_to("Maze error: Invalid maze dimension: columns = 1 (must be at least 2)".to_string());

    let entity_error = GameError::from(EntityError::Missing("player"));
    assert_that(&entity_error.to_string()).is_equal_to("Entity error: Expected exactly one player entity".to_string());

    let invalid = ConfigError::Invalid {
        field: "delivery.distance",
        reason: "-1 must be a positive number".to_string(),
    };
    assert_that(&invalid.to_string())
        .is_equal_to("Invalid value for `delivery.distance`: -1 must be a positive number".to_string());

    let state = GameError::InvalidState("worm segment without a worm".to_string());
    assert_that(&state.to_string()).is_equal_to("Invalid state: worm segment without a worm".to_string());
}

#[test]
fn test_game_result_propagates_with_question_mark() {
    fn inner() -> Result<(), MazeError> {
        Err(MazeError::InvalidDimension {
            axis: Axis::Columns,
            value: 0,
        })
    }

    fn outer() -> GameResult<()> {
        inner()?;
        Ok(())
    }

    assert!(matches!(outer(), Err(GameError::Maze(_))));
}
