//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-driven updates only (host time feeds the sprite timer)
//! - Seeded RNG only
//! - Stable iteration order (insertion order of waves, enemies, bosses)
//! - No rendering or platform dependencies

pub mod boss;
pub mod collision;
pub mod enemy;
pub mod laser;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use boss::Boss;
pub use collision::{Entity, Rect, collides};
pub use enemy::{Enemy, EnemyKind, Wave};
pub use laser::{Laser, LaserKind};
pub use player::{Jets, Player};
pub use projectile::{Projectile, ProjectilePool};
pub use state::{GameEvent, GameOverCause, GameState};
pub use tick::{FrameContext, TickInput, tick};
