use arcade::config::{CandyConfig, Config, DeliveryConfig};
use arcade::delivery::RecoveryPolicy;
use arcade::error::ConfigError;
use figment::Jail;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn load() -> figment::error::Result<Config> {
    Config::load().map_err(|e| figment::Error::from(e.to_string()))
}

#[test]
fn test_defaults_without_environment() {
    Jail::expect_with(|_jail| {
        let config = load()?;
        assert_eq!(config, Config::default());
        assert_eq!(config.candy.cols, 21);
        assert_eq!(config.candy.tile_size, 64.0);
        assert_eq!(config.delivery.recovery, RecoveryPolicy::Mash { per_press: 1 });
        assert_eq!(config.seed, None);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("ARCADE_SEED", "42");
        jail.set_env("ARCADE_CANDY__COLS", "31");
        jail.set_env("ARCADE_CANDY__WIDEN_PROBABILITY", "0.5");
        jail.set_env("ARCADE_DELIVERY__TIME_LIMIT_SECONDS", "90");

        let config = load()?;
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.candy.cols, 31);
        assert_eq!(config.candy.rows, 21);
        assert_eq!(config.candy.widen_probability, 0.5);
        assert_eq!(config.delivery.time_limit_seconds, 90.0);
        Ok(())
    });
}

#[test]
fn test_recovery_policy_from_environment() {
    Jail::expect_with(|jail| {
        jail.set_env("ARCADE_DELIVERY__RECOVERY", "instant");
        assert_eq!(load()?.delivery.recovery, RecoveryPolicy::Instant);
        Ok(())
    });

    Jail::expect_with(|jail| {
        jail.set_env("ARCADE_DELIVERY__RECOVERY__MASH__PER_PRESS", "2");
        assert_eq!(load()?.delivery.recovery, RecoveryPolicy::Mash { per_press: 2 });
        Ok(())
    });
}

#[test]
fn test_invalid_values_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ARCADE_CANDY__WIDEN_PROBABILITY", "1.5");
        let error = Config::load().unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "candy.widen_probability",
                ..
            }
        ));
        Ok(())
    });
}

#[test]
fn test_malformed_values_fail_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("ARCADE_CANDY__COLS", "lots");
        let error = Config::load().unwrap_err();
        assert!(matches!(error, ConfigError::Extract(_)));
        assert_that(&error.to_string()).starts_with("Failed to extract configuration");
        Ok(())
    });
}

#[test]
fn test_validate() {
    let mut config = Config::default();
    assert_that(&config.validate().is_ok()).is_true();

    config.candy = CandyConfig {
        rows: 1,
        ..CandyConfig::default()
    };
    assert_that(&config.validate().unwrap_err().to_string()).contains("candy.rows");

    config.candy = CandyConfig {
        tile_size: 0.0,
        ..CandyConfig::default()
    };
    assert_that(&config.validate().unwrap_err().to_string()).contains("candy.tile_size");

    config.candy = CandyConfig::default();
    config.delivery = DeliveryConfig {
        recovery: RecoveryPolicy::Mash { per_press: 0 },
        ..DeliveryConfig::default()
    };
    assert_that(&config.validate().unwrap_err().to_string()).contains("delivery.recovery");

    config.delivery = DeliveryConfig {
        distance: f32::NAN,
        ..DeliveryConfig::default()
    };
    assert!(config.validate().is_err());
}
