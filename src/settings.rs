//! Game tuning
//!
//! Every number that shapes difficulty lives here. Defaults reproduce the
//! classic arcade balance; a JSON document can override any subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the run RNG (enemy variants, sprite rows, grid growth)
    pub seed: u64,

    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Timing ===
    /// Sprite animation / laser damage cadence
    pub sprite_interval_ms: f32,

    // === Projectiles ===
    pub projectile_count: usize,

    // === Enemies ===
    pub enemy_size: f32,
    pub initial_columns: u32,
    pub initial_rows: u32,

    // === Bosses ===
    pub boss_lives: u32,
    pub boss_lives_step: u32,

    // === Player ===
    pub player_lives: u32,
    pub player_max_lives: u32,
    pub player_energy: f32,
    pub player_max_energy: f32,
    pub energy_regen: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            sprite_interval_ms: SPRITE_INTERVAL_MS,

            projectile_count: PROJECTILE_COUNT,

            enemy_size: ENEMY_SIZE,
            initial_columns: INITIAL_COLUMNS,
            initial_rows: INITIAL_ROWS,

            boss_lives: BOSS_LIVES,
            boss_lives_step: BOSS_LIVES_STEP,

            player_lives: PLAYER_LIVES,
            player_max_lives: PLAYER_MAX_LIVES,
            player_energy: PLAYER_ENERGY,
            player_max_energy: PLAYER_MAX_ENERGY,
            energy_regen: ENERGY_REGEN,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject tunings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if !(self.field_width > 0.0) {
            return invalid("field_width", "must be positive");
        }
        if !(self.field_height > 0.0) {
            return invalid("field_height", "must be positive");
        }
        if !(self.sprite_interval_ms > 0.0) {
            return invalid("sprite_interval_ms", "must be positive");
        }
        if self.projectile_count == 0 {
            return invalid("projectile_count", "pool needs at least one slot");
        }
        if !(self.enemy_size > 0.0) {
            return invalid("enemy_size", "must be positive");
        }
        if self.initial_columns == 0 || self.initial_rows == 0 {
            return invalid("initial_columns", "grid must be at least 1x1");
        }
        if self.boss_lives == 0 {
            return invalid("boss_lives", "must be at least 1");
        }
        if self.player_lives == 0 {
            return invalid("player_lives", "must be at least 1");
        }
        if self.player_lives > self.player_max_lives {
            return invalid("player_lives", "exceeds player_max_lives");
        }
        if !(self.player_max_energy > 0.0) {
            return invalid("player_max_energy", "must be positive");
        }
        if self.player_energy < 0.0 || self.player_energy > self.player_max_energy {
            return invalid("player_energy", "must be within 0..=player_max_energy");
        }
        if self.energy_regen < 0.0 {
            return invalid("energy_regen", "must not be negative");
        }
        Ok(())
    }
}
