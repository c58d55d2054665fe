//! Projectile object pool
//!
//! Projectiles are allocated once at startup and recycled. Acquiring from an
//! exhausted pool yields `None` and the shot is dropped.

use glam::Vec2;

use super::collision::{Entity, Rect};
use crate::consts::*;

/// A single pooled projectile travelling upward
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub damage: f32,
    pub free: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: PROJECTILE_SPEED,
            damage: PROJECTILE_DAMAGE,
            free: true,
        }
    }
}

impl Projectile {
    /// Put the projectile in flight, centred on `x` with its top at `y`
    pub fn start(&mut self, x: f32, y: f32) {
        self.free = false;
        self.pos = Vec2::new(x - self.size.x * 0.5, y);
    }

    pub fn reset(&mut self) {
        self.free = true;
    }

    /// Advance one frame; frees itself once fully above the field
    pub fn update(&mut self) {
        if self.free {
            return;
        }
        self.pos.y -= self.speed;
        if self.pos.y < -self.size.y {
            self.reset();
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.free
    }
}

impl Entity for Projectile {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Fixed-capacity pool of projectiles
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Projectile::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First free projectile, if any
    pub fn acquire(&mut self) -> Option<&mut Projectile> {
        self.slots.iter_mut().find(|p| p.free)
    }

    /// Return a slot to the pool. Releasing a free slot is a no-op.
    pub fn release(&mut self, index: usize) {
        if let Some(p) = self.slots.get_mut(index) {
            p.reset();
        }
    }

    /// Free every slot (used on restart)
    pub fn release_all(&mut self) {
        for p in &mut self.slots {
            p.reset();
        }
    }

    /// Update all slots; free ones do nothing
    pub fn update(&mut self) {
        for p in &mut self.slots {
            p.update();
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.is_active()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.slots.iter_mut()
    }

    /// Release the first active projectile overlapping `target` and return its damage
    pub fn take_hit(&mut self, target: &Rect) -> Option<f32> {
        let hit = self
            .slots
            .iter_mut()
            .find(|p| p.is_active() && p.bounds().overlaps(target))?;
        hit.reset();
        Some(hit.damage)
    }
}
