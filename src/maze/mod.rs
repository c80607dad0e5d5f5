//! Maze generation and the grid it produces.

pub mod direction;
pub mod generator;
pub mod grid;

pub use direction::Direction;
pub use generator::{generate, MazeGenerator};
pub use grid::{Cell, Grid};
