//! Boss entity
//!
//! A single large target with its own descend-then-sweep movement. Each boss
//! kill raises the HP of the next one.

use glam::Vec2;
use rand::Rng;

use super::collision::{Entity, Rect, collides};
use super::projectile::ProjectilePool;
use super::state::{GameEvent, GameOverCause};
use super::tick::FrameContext;
use crate::consts::{BOSS_DESCENT_SPEED, BOSS_MAX_FRAME, BOSS_SIZE, SHEET_ROWS};

/// Idle frame shown on sprite ticks while alive
const IDLE_FRAME: u32 = 0;
/// Frame shown right after a hit
const HIT_FRAME: u32 = 1;

/// Fresh bosses always start moving left
const SPAWN_SPEED_X: f32 = -1.0;

#[derive(Debug, Clone)]
pub struct Boss {
    pub rect: Rect,
    pub lives: f32,
    pub max_lives: u32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub frame_x: u32,
    pub frame_y: u32,
    pub max_frame: u32,
    pub marked_for_deletion: bool,
}

impl Boss {
    /// Spawn centred horizontally, fully above the field
    pub fn new(lives: u32, field_width: f32, rng: &mut impl Rng) -> Self {
        Self {
            rect: Rect::new(
                field_width * 0.5 - BOSS_SIZE * 0.5,
                -BOSS_SIZE,
                BOSS_SIZE,
                BOSS_SIZE,
            ),
            lives: lives as f32,
            max_lives: lives,
            speed_x: SPAWN_SPEED_X,
            speed_y: 0.0,
            frame_x: HIT_FRAME,
            frame_y: rng.random_range(0..SHEET_ROWS),
            max_frame: BOSS_MAX_FRAME,
            marked_for_deletion: false,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lives >= 1.0
    }

    /// Fully descended into the field and hittable
    #[inline]
    pub fn on_screen(&self) -> bool {
        self.rect.top() >= 0.0
    }

    /// HP shown over the sprite
    pub fn display_lives(&self) -> i64 {
        self.lives.floor() as i64
    }

    pub fn hit(&mut self, damage: f32) {
        self.lives -= damage;
        if self.lives > 1.0 {
            self.frame_x = HIT_FRAME;
        }
    }

    pub fn update(
        &mut self,
        ctx: &FrameContext,
        pool: &mut ProjectilePool,
        events: &mut Vec<GameEvent>,
    ) {
        self.speed_y = 0.0;
        if ctx.sprite_update && self.is_alive() {
            self.frame_x = IDLE_FRAME;
        }
        if self.rect.top() < 0.0 {
            self.rect.pos.y += BOSS_DESCENT_SPEED;
        }
        let past_right = self.rect.pos.x > ctx.field.x - self.rect.size.x;
        if self.rect.left() < 0.0 || (past_right && self.is_alive()) {
            self.speed_x = -self.speed_x;
            self.speed_y = self.rect.size.y * 0.5;
        }
        self.rect.pos += Vec2::new(self.speed_x, self.speed_y);

        while self.is_alive() && self.on_screen() {
            match pool.take_hit(&self.rect) {
                Some(damage) => self.hit(damage),
                None => break,
            }
        }

        // Ramming the player is a loss, not a kill
        if self.lives > 0.0 && collides(self, &ctx.player) {
            self.lives = 0.0;
            events.push(GameEvent::GameOver {
                cause: GameOverCause::BossCollision,
            });
        }

        if !self.is_alive() && ctx.sprite_update && !self.marked_for_deletion {
            self.frame_x += 1;
            if self.frame_x > self.max_frame {
                self.marked_for_deletion = true;
                events.push(GameEvent::BossDefeated {
                    points: self.max_lives,
                });
            }
        }

        if self.rect.bottom() > ctx.field.y {
            events.push(GameEvent::GameOver {
                cause: GameOverCause::BossBreach,
            });
        }
    }
}

impl Entity for Boss {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
