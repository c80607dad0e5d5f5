//! Centralized error types for the arcade simulations.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use bevy_ecs::event::Event;
use strum_macros::Display;

/// Main error type for the arcade simulations.
///
/// This is the primary error type that should be used in public APIs.
/// ECS systems also write it as an event when they observe inconsistent state.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Which side of the maze a dimension error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Columns,
    Rows,
}

/// Errors raised while constructing a maze.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimension: {axis} = {value} (must be at least 2)")]
    InvalidDimension { axis: Axis, value: u32 },
}

/// Errors raised while loading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors related to entity lookups in the ECS world.
#[derive(thiserror::Error, Debug)]
pub enum EntityError {
    #[error("Expected exactly one {0} entity")]
    Missing(&'static str),

    #[error("Position is not finite: ({x}, {y})")]
    NonFinitePosition { x: f32, y: f32 },
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Console initialization failed: {0}")]
    ConsoleInit(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
