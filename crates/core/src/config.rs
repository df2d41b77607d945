//! Session tuning loaded from TOML. Every key is optional; missing keys fall
//! back to the stock game values.

use serde::Deserialize;

use crate::error::ConfigError;

pub const MINIMUM_MAP_SIDE: usize = 12;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub seed: u64,
    pub map: MapConfig,
    pub player: PlayerConfig,
    pub enemy: CreatureTuning,
    pub boss: CreatureTuning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
    pub tile_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub move_delay_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatureTuning {
    pub move_delay_ms: f64,
    pub aggro_range: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            map: MapConfig::default(),
            player: PlayerConfig::default(),
            enemy: CreatureTuning::ENEMY,
            boss: CreatureTuning::BOSS,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { width: 50, height: 40, tile_size: 32 }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { max_health: 100, attack: 10, defense: 2, move_delay_ms: 150.0 }
    }
}

impl CreatureTuning {
    pub const ENEMY: Self = Self { move_delay_ms: 300.0, aggro_range: 8 };
    pub const BOSS: Self = Self { move_delay_ms: 250.0, aggro_range: 15 };
}

impl Default for CreatureTuning {
    fn default() -> Self {
        Self::ENEMY
    }
}

impl SessionConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.width < MINIMUM_MAP_SIDE || self.map.height < MINIMUM_MAP_SIDE {
            return Err(ConfigError::MapTooSmall {
                width: self.map.width,
                height: self.map.height,
                minimum: MINIMUM_MAP_SIDE,
            });
        }
        if self.map.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.player.max_health <= 0 {
            return Err(ConfigError::NonPositiveMaxHealth(self.player.max_health));
        }
        for (who, value) in [
            ("player", self.player.move_delay_ms),
            ("enemy", self.enemy.move_delay_ms),
            ("boss", self.boss.move_delay_ms),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositiveMoveDelay { who, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_stock_tuning() {
        let config = SessionConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.map, MapConfig { width: 50, height: 40, tile_size: 32 });
        assert_eq!(config.enemy, CreatureTuning::ENEMY);
        assert_eq!(config.boss, CreatureTuning::BOSS);
    }

    #[test]
    fn partial_tables_keep_defaults_for_missing_keys() {
        let config = SessionConfig::from_toml_str(concat!(
            "seed = 9\n[map]\nwidth = 30\n[player]\nattack = 14\n",
            "[boss]\nmove_delay_ms = 200.0\naggro_range = 20\n",
        ))
        .expect("partial config is valid");
        assert_eq!(config.seed, 9);
        assert_eq!(config.map.width, 30);
        assert_eq!(config.map.height, 40);
        assert_eq!(config.player.attack, 14);
        assert_eq!(config.player.max_health, 100);
        assert_eq!(config.boss.aggro_range, 20);
    }

    #[test]
    fn undersized_maps_are_rejected() {
        let error = SessionConfig::from_toml_str("[map]\nwidth = 8\nheight = 8\n")
            .expect_err("8x8 map cannot host a room");
        assert!(matches!(error, ConfigError::MapTooSmall { width: 8, height: 8, .. }));
    }

    #[test]
    fn non_positive_move_delays_are_rejected() {
        let error = SessionConfig::from_toml_str("[enemy]\nmove_delay_ms = 0.0\naggro_range = 4\n")
            .expect_err("zero delay is invalid");
        assert!(matches!(error, ConfigError::NonPositiveMoveDelay { who: "enemy", .. }));
    }

    #[test]
    fn malformed_toml_reports_a_parse_error() {
        let error = SessionConfig::from_toml_str("seed = [").expect_err("broken document");
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = SessionConfig::from_toml_str("sede = 3\n").expect_err("typo must not pass");
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
