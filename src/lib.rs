//! Invader Swarm - a wave-based arcade shoot-'em-up
//!
//! Core modules:
//! - `sim`: Deterministic frame simulation (entities, pool, collisions, waves, bosses)
//! - `renderer`: Draw-call interface, render pass and HUD
//! - `platform`: Host input state and frame clock
//! - `settings`: Data-driven game tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Default play field dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Sprite animation cadence (milliseconds)
    pub const SPRITE_INTERVAL_MS: f32 = 150.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 140.0;
    pub const PLAYER_HEIGHT: f32 = 120.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_LIVES: u32 = 3;
    pub const PLAYER_MAX_LIVES: u32 = 10;
    pub const PLAYER_ENERGY: f32 = 50.0;
    pub const PLAYER_MAX_ENERGY: f32 = 100.0;
    /// Energy regained per frame
    pub const ENERGY_REGEN: f32 = 0.05;
    /// Cooldown ends once energy climbs above this fraction of max
    pub const COOLDOWN_RECOVERY: f32 = 0.2;

    /// Projectiles
    pub const PROJECTILE_COUNT: usize = 15;
    pub const PROJECTILE_WIDTH: f32 = 3.0;
    pub const PROJECTILE_HEIGHT: f32 = 40.0;
    pub const PROJECTILE_SPEED: f32 = 20.0;
    pub const PROJECTILE_DAMAGE: f32 = 1.0;

    /// Beam stops this far above the bottom of the field
    pub const LASER_BOTTOM_GAP: f32 = 50.0;

    /// Enemy grid cell size
    pub const ENEMY_SIZE: f32 = 80.0;
    pub const WAVE_DESCENT_SPEED: f32 = 5.0;
    pub const INITIAL_COLUMNS: u32 = 2;
    pub const INITIAL_ROWS: u32 = 2;
    /// Grid growth caps (fraction of field width/height)
    pub const MAX_GRID_WIDTH_FRACTION: f32 = 0.8;
    pub const MAX_GRID_HEIGHT_FRACTION: f32 = 0.6;

    /// Boss defaults
    pub const BOSS_SIZE: f32 = 200.0;
    pub const BOSS_DESCENT_SPEED: f32 = 4.0;
    pub const BOSS_LIVES: u32 = 10;
    /// Extra HP for each boss after a boss kill
    pub const BOSS_LIVES_STEP: u32 = 5;
    pub const BOSS_MAX_FRAME: u32 = 11;

    /// Sprite sheets have this many alternate rows per enemy type
    pub const SHEET_ROWS: u32 = 4;
}
