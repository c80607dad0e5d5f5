//! Headless simulation core for two small arcade games: Candy Run and Soba Delivery.

pub mod app;
pub mod collision;
pub mod config;
pub mod constants;
pub mod delivery;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod maze;
pub mod platform;
pub mod pursuit;
pub mod systems;
