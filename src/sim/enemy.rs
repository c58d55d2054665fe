//! Grid enemies and the waves that carry them
//!
//! A `Wave` owns its enemies exclusively. Each enemy keeps an immutable
//! offset inside the formation and is repositioned from the wave origin
//! every frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Entity, Rect, collides};
use super::projectile::ProjectilePool;
use super::state::{GameEvent, GameOverCause};
use super::tick::FrameContext;
use crate::consts::{SHEET_ROWS, WAVE_DESCENT_SPEED};

/// Enemy variants; they differ only in constants and hit reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    BeetleMorph,
    RhinoMorph,
}

impl EnemyKind {
    pub fn max_lives(&self) -> u32 {
        match self {
            EnemyKind::BeetleMorph => 1,
            EnemyKind::RhinoMorph => 4,
        }
    }

    /// Last animation frame; passing it completes the death animation
    pub fn max_frame(&self) -> u32 {
        match self {
            EnemyKind::BeetleMorph => 2,
            EnemyKind::RhinoMorph => 5,
        }
    }

    /// Rhinos show remaining armour through the frame index
    fn frame_after_hit(&self, lives: f32, current: u32) -> u32 {
        match self {
            EnemyKind::BeetleMorph => current,
            EnemyKind::RhinoMorph => (self.max_lives() as f32 - lives.floor()).max(0.0) as u32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub rect: Rect,
    /// Position inside the wave formation
    pub offset: Vec2,
    pub lives: f32,
    pub max_lives: u32,
    pub frame_x: u32,
    /// Sheet row, picked once at spawn
    pub frame_y: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    pub fn new(kind: EnemyKind, offset: Vec2, size: f32, frame_y: u32) -> Self {
        Self {
            kind,
            rect: Rect::new(0.0, 0.0, size, size),
            offset,
            lives: kind.max_lives() as f32,
            max_lives: kind.max_lives(),
            frame_x: 0,
            frame_y,
            marked_for_deletion: false,
        }
    }

    /// Still able to collide
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lives > 0.0
    }

    /// Playing the death animation
    #[inline]
    pub fn is_dying(&self) -> bool {
        self.lives < 1.0
    }

    pub fn hit(&mut self, damage: f32) {
        self.lives -= damage;
        self.frame_x = self.kind.frame_after_hit(self.lives, self.frame_x);
    }

    /// One frame: follow the formation, take hits, animate, touch the player
    pub fn update(
        &mut self,
        origin: Vec2,
        ctx: &FrameContext,
        pool: &mut ProjectilePool,
        events: &mut Vec<GameEvent>,
    ) {
        self.rect.pos = origin + self.offset;

        while self.is_alive() {
            match pool.take_hit(&self.rect) {
                Some(damage) => self.hit(damage),
                None => break,
            }
        }

        if self.is_dying() {
            if ctx.sprite_update {
                self.frame_x += 1;
            }
            if self.frame_x > self.kind.max_frame() && !self.marked_for_deletion {
                self.marked_for_deletion = true;
                events.push(GameEvent::EnemyDestroyed {
                    kind: self.kind,
                    points: self.max_lives,
                });
            }
        }

        if self.is_alive() && collides(self, &ctx.player) {
            self.lives = 0.0;
            events.push(GameEvent::PlayerHit);
        }

        if self.rect.bottom() > ctx.field.y {
            events.push(GameEvent::GameOver {
                cause: GameOverCause::EnemyBreach,
            });
        }
    }
}

impl Entity for Enemy {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A formation of enemies moving as one unit
#[derive(Debug, Clone)]
pub struct Wave {
    pub rect: Rect,
    pub enemies: Vec<Enemy>,
    pub speed_x: f32,
    pub speed_y: f32,
    /// Set once the cleared wave has asked for its successor
    pub next_wave_triggered: bool,
    pub marked_for_deletion: bool,
}

impl Wave {
    /// Spawn a `columns` x `rows` formation centred above the field
    pub fn new(columns: u32, rows: u32, cell: f32, field_width: f32, rng: &mut impl Rng) -> Self {
        let width = columns as f32 * cell;
        let height = rows as f32 * cell;
        let speed_x = if rng.random_bool(0.5) { -1.0 } else { 1.0 };

        let mut wave = Self {
            rect: Rect::new(field_width * 0.5 - width * 0.5, -height, width, height),
            enemies: Vec::with_capacity((columns * rows) as usize),
            speed_x,
            speed_y: 0.0,
            next_wave_triggered: false,
            marked_for_deletion: false,
        };
        wave.create(columns, rows, cell, rng);
        wave
    }

    /// Fill the grid, each cell an even coin flip between variants
    fn create(&mut self, columns: u32, rows: u32, cell: f32, rng: &mut impl Rng) {
        for y in 0..rows {
            for x in 0..columns {
                let offset = Vec2::new(x as f32 * cell, y as f32 * cell);
                let kind = if rng.random_bool(0.5) {
                    EnemyKind::RhinoMorph
                } else {
                    EnemyKind::BeetleMorph
                };
                let frame_y = rng.random_range(0..SHEET_ROWS);
                self.enemies.push(Enemy::new(kind, offset, cell, frame_y));
            }
        }
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Move the formation and run every enemy for one frame
    pub fn update(
        &mut self,
        cell: f32,
        ctx: &FrameContext,
        pool: &mut ProjectilePool,
        events: &mut Vec<GameEvent>,
    ) {
        if self.rect.pos.y < 0.0 {
            self.rect.pos.y += WAVE_DESCENT_SPEED;
        }

        // The formation steps twice per frame with a bounce check in between
        self.speed_y = 0.0;
        self.rect.pos.x += self.speed_x;
        if self.rect.left() < 0.0 || self.rect.pos.x > ctx.field.x - self.rect.size.x {
            self.speed_x = -self.speed_x;
            self.speed_y = cell;
        }
        self.rect.pos.x += self.speed_x;
        self.rect.pos.y += self.speed_y;

        let origin = self.rect.pos;
        for enemy in &mut self.enemies {
            enemy.update(origin, ctx, pool, events);
        }

        self.enemies.retain(|e| !e.marked_for_deletion);
        if self.is_cleared() {
            self.marked_for_deletion = true;
        }
    }
}

impl Entity for Wave {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
