//! Energy beam weapons
//!
//! Both lasers share one routine; `LaserKind` only selects width and damage.

use serde::{Deserialize, Serialize};

use super::collision::{Entity, Rect};
use crate::consts::LASER_BOTTOM_GAP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaserKind {
    /// Narrow, cheap beam
    Small,
    /// Wide, expensive beam
    Large,
}

impl LaserKind {
    pub fn width(&self) -> f32 {
        match self {
            LaserKind::Small => 5.0,
            LaserKind::Large => 25.0,
        }
    }

    /// Damage per sprite tick, also the energy drained per frame
    pub fn damage(&self) -> f32 {
        match self {
            LaserKind::Small => 0.3,
            LaserKind::Large => 0.7,
        }
    }

    /// Player sprite frame while firing
    pub fn player_frame(&self) -> u32 {
        match self {
            LaserKind::Small => 2,
            LaserKind::Large => 3,
        }
    }
}

/// A beam fired this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laser {
    pub kind: LaserKind,
    pub rect: Rect,
}

impl Laser {
    /// Beam centred on `center_x`, from the top of the field down to just above the bottom
    pub fn at(kind: LaserKind, center_x: f32, field_height: f32) -> Self {
        let w = kind.width();
        Self {
            kind,
            rect: Rect::new(center_x - w * 0.5, 0.0, w, field_height - LASER_BOTTOM_GAP),
        }
    }

    #[inline]
    pub fn damage(&self) -> f32 {
        self.kind.damage()
    }
}

impl Entity for Laser {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
