//! Axis-aligned collision detection
//!
//! Every hit test in the game is a brute-force box overlap: projectiles,
//! lasers, enemies, bosses and the player all expose a bounding box and are
//! tested pairwise each frame. No broad phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w.max(0.0), h.max(0.0)),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal centre line
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x * 0.5
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything with a bounding box that takes part in hit tests
pub trait Entity {
    fn bounds(&self) -> Rect;
}

impl Entity for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Check whether two entities' boxes intersect
#[inline]
pub fn collides(a: &impl Entity, b: &impl Entity) -> bool {
    a.bounds().overlaps(&b.bounds())
}
