use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/economy.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawEconomyConfig {
    base_rate: f64,
    reward_factor: f64,
    reward_seconds: f64,
    botch_rate: f64,
    botch_seconds: f64,
    focus_drain_rate: f64,
}

impl Default for RawEconomyConfig {
    fn default() -> Self {
        Self {
            base_rate: 1.0,
            reward_factor: 5.0,
            reward_seconds: 5.0,
            botch_rate: 2.0,
            botch_seconds: 3.0,
            focus_drain_rate: 0.5,
        }
    }
}

/// Tunable money parameters derived from `config/economy.toml`.
#[derive(Resource, Debug, Clone)]
pub struct EconomyConfig {
    /// Passive accrual rate per second while a shift runs.
    pub base_rate: f64,
    /// Multiplicative boost applied when a task completes successfully.
    pub reward_factor: f64,
    pub reward_seconds: f64,
    /// Additive drain applied when a task is botched.
    pub botch_rate: f64,
    pub botch_seconds: f64,
    /// Drain applied while a focus task is waiting to be resolved.
    pub focus_drain_rate: f64,
}

impl EconomyConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawEconomyConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawEconomyConfig::default().into()
                }
            },
            Err(_) => RawEconomyConfig::default().into(),
        }
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        RawEconomyConfig::default().into()
    }
}

impl From<RawEconomyConfig> for EconomyConfig {
    fn from(value: RawEconomyConfig) -> Self {
        Self {
            base_rate: value.base_rate.max(0.0),
            reward_factor: value.reward_factor.max(1.0),
            reward_seconds: value.reward_seconds.max(0.0),
            botch_rate: value.botch_rate.max(0.0),
            botch_seconds: value.botch_seconds.max(0.0),
            focus_drain_rate: value.focus_drain_rate.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = EconomyConfig::default();
        assert!(config.base_rate > 0.0);
        assert!(config.reward_factor >= 1.0);
        assert!(config.focus_drain_rate >= 0.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let raw: RawEconomyConfig = toml::from_str(
            r#"
            base_rate = -3.0
            reward_factor = 0.2
            "#,
        )
        .expect("toml should parse");
        let config = EconomyConfig::from(raw);

        assert_eq!(config.base_rate, 0.0);
        assert_eq!(config.reward_factor, 1.0);
    }
}
