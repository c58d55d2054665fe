//! The player's ship
//!
//! Horizontal movement, energy with a hysteresis cooldown, and weapon
//! selection. Projectile firing is edge-triggered upstream in `platform::input`.

use glam::Vec2;

use super::collision::{Entity, Rect};
use super::laser::{Laser, LaserKind};
use super::tick::TickInput;
use crate::consts::*;
use crate::settings::GameConfig;

/// Engine exhaust animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Jets {
    Left,
    #[default]
    Idle,
    Right,
}

impl Jets {
    pub fn frame(&self) -> u32 {
        match self {
            Jets::Left => 0,
            Jets::Idle => 1,
            Jets::Right => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub lives: u32,
    pub max_lives: u32,
    pub energy: f32,
    pub max_energy: f32,
    pub energy_regen: f32,
    /// Lasers locked out until energy recovers
    pub cooldown: bool,
    /// Ship sprite frame (0 idle, 1 shooting, 2/3 lasers)
    pub frame_x: u32,
    pub jets: Jets,
    /// Beam fired this frame, if any
    pub laser: Option<Laser>,
    start_lives: u32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Self::spawn_pos(config, size),
            size,
            speed: PLAYER_SPEED,
            lives: config.player_lives,
            max_lives: config.player_max_lives,
            energy: config.player_energy,
            max_energy: config.player_max_energy,
            energy_regen: config.energy_regen,
            cooldown: false,
            frame_x: 0,
            jets: Jets::Idle,
            laser: None,
            start_lives: config.player_lives,
        }
    }

    fn spawn_pos(config: &GameConfig, size: Vec2) -> Vec2 {
        Vec2::new(
            config.field_width * 0.5 - size.x * 0.5,
            config.field_height - size.y,
        )
    }

    /// Recentre at the bottom of the field with starting lives
    pub fn restart(&mut self, config: &GameConfig) {
        self.pos = Self::spawn_pos(config, self.size);
        self.lives = self.start_lives;
        self.laser = None;
    }

    /// Where projectiles leave the ship (top centre)
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * 0.5, self.pos.y)
    }

    #[inline]
    pub fn laser_ready(&self) -> bool {
        self.energy > 1.0 && !self.cooldown
    }

    /// Pick the ship frame for this frame and the laser to fire, if any.
    /// Holding shoot wins over both lasers, small wins over large.
    pub fn select_weapon(&mut self, input: &TickInput) -> Option<LaserKind> {
        self.laser = None;
        if input.shoot_held {
            self.frame_x = 1;
            None
        } else if input.small_laser {
            Some(LaserKind::Small)
        } else if input.large_laser {
            Some(LaserKind::Large)
        } else {
            self.frame_x = 0;
            None
        }
    }

    /// Fire a beam if the energy gate is open. Drains energy every call.
    /// A closed gate leaves the ship frame as it was.
    pub fn fire_laser(&mut self, kind: LaserKind, field_height: f32) -> Option<Laser> {
        if !self.laser_ready() {
            return None;
        }
        let beam = Laser::at(kind, self.pos.x + self.size.x * 0.5, field_height);
        self.energy -= beam.damage();
        self.frame_x = kind.player_frame();
        self.laser = Some(beam);
        Some(beam)
    }

    /// Per-frame energy regeneration and movement
    pub fn update(&mut self, input: &TickInput, field_width: f32) {
        self.regenerate();
        self.refresh_cooldown();

        if input.left {
            self.pos.x -= self.speed;
            self.jets = Jets::Left;
        } else if input.right {
            self.pos.x += self.speed;
            self.jets = Jets::Right;
        } else {
            self.jets = Jets::Idle;
        }

        // Up to half the ship may leave the field on either side
        let half = self.size.x * 0.5;
        self.pos.x = self.pos.x.clamp(-half, field_width - half);
    }

    pub fn regenerate(&mut self) {
        if self.energy < self.max_energy {
            self.energy = (self.energy + self.energy_regen).min(self.max_energy);
        }
    }

    /// Enter cooldown below 1 energy, leave it above 20% of max
    pub fn refresh_cooldown(&mut self) {
        if self.energy < 1.0 {
            self.cooldown = true;
        } else if self.energy > self.max_energy * COOLDOWN_RECOVERY {
            self.cooldown = false;
        }
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// One extra life, capped at max
    pub fn gain_life(&mut self) {
        if self.lives < self.max_lives {
            self.lives += 1;
        }
    }

    #[inline]
    pub fn is_out_of_lives(&self) -> bool {
        self.lives < 1
    }
}

impl Entity for Player {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
