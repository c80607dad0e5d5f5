//! Runtime configuration, layered from built-in defaults and `ARCADE_`-prefixed environment variables.
//!
//! Nested fields are separated by a double underscore, e.g. `ARCADE_CANDY__COLS=31` or
//! `ARCADE_DELIVERY__RECOVERY=instant`.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DELIVERY_DISTANCE, DELIVERY_TIME_LIMIT, MAZE_COLS, MAZE_ROWS, PLAYER_SPEED, TILE_SIZE, WIDEN_PROBABILITY, WORM_SPEED,
};
use crate::delivery::RecoveryPolicy;
use crate::error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for every random source in a session. A fresh one is drawn when unset.
    pub seed: Option<u64>,
    pub candy: CandyConfig,
    pub delivery: DeliveryConfig,
}

/// Candy Run tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandyConfig {
    pub cols: u32,
    pub rows: u32,
    pub tile_size: f32,
    pub widen_probability: f64,
    /// Player speed per axis, in pixels per second
    pub player_speed: f32,
    /// Worm head speed, in pixels per second
    pub worm_speed: f32,
}

impl Default for CandyConfig {
    fn default() -> Self {
        Self {
            cols: MAZE_COLS,
            rows: MAZE_ROWS,
            tile_size: TILE_SIZE,
            widen_probability: WIDEN_PROBABILITY,
            player_speed: PLAYER_SPEED,
            worm_speed: WORM_SPEED,
        }
    }
}

/// Soba Delivery tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Distance to the customer, in road pixels
    pub distance: f32,
    /// Time allowed for a run, in seconds
    pub time_limit_seconds: f32,
    pub recovery: RecoveryPolicy,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            distance: DELIVERY_DISTANCE,
            time_limit_seconds: DELIVERY_TIME_LIMIT.as_secs_f32(),
            recovery: RecoveryPolicy::default(),
        }
    }
}

impl Config {
    /// Loads configuration from defaults and the environment, then validates it.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// The provider stack used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("ARCADE_").split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values no session can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let candy = &self.candy;
        if candy.cols < 2 {
            return Err(invalid("candy.cols", format!("{} is too small, need at least 2", candy.cols)));
        }
        if candy.rows < 2 {
            return Err(invalid("candy.rows", format!("{} is too small, need at least 2", candy.rows)));
        }
        positive("candy.tile_size", candy.tile_size)?;
        positive("candy.player_speed", candy.player_speed)?;
        positive("candy.worm_speed", candy.worm_speed)?;
        if !(0.0..=1.0).contains(&candy.widen_probability) {
            return Err(invalid(
                "candy.widen_probability",
                format!("{} is not a probability", candy.widen_probability),
            ));
        }

        let delivery = &self.delivery;
        positive("delivery.distance", delivery.distance)?;
        positive("delivery.time_limit_seconds", delivery.time_limit_seconds)?;
        if let RecoveryPolicy::Mash { per_press: 0 } = delivery.recovery {
            return Err(invalid("delivery.recovery", "mashing must restore at least one bowl".into()));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be a positive number")))
    }
}
