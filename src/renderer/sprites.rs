//! Sprite sheet metadata
//!
//! Hosts own the actual image data. The catalog only records how each
//! sheet is sliced into frames so the render pass can compute source rects.

use serde::{Deserialize, Serialize};

use crate::settings::ConfigError;
use crate::sim::Rect;
use crate::sim::enemy::EnemyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetId {
    Player,
    PlayerJets,
    BeetleMorph,
    RhinoMorph,
    Boss,
}

impl From<EnemyKind> for SheetId {
    fn from(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::BeetleMorph => SheetId::BeetleMorph,
            EnemyKind::RhinoMorph => SheetId::RhinoMorph,
        }
    }
}

/// One image laid out as a grid of equally sized frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    /// Host-side asset name
    pub image: String,
    pub frame_width: f32,
    pub frame_height: f32,
    /// Frames per row
    pub frames: u32,
    pub rows: u32,
}

impl SpriteSheet {
    pub fn new(image: &str, frame_width: f32, frame_height: f32, frames: u32, rows: u32) -> Self {
        Self {
            image: image.to_string(),
            frame_width,
            frame_height,
            frames,
            rows,
        }
    }

    /// Source rect for a frame. Out-of-range indices clamp to the last frame/row.
    pub fn frame(&self, frame_x: u32, frame_y: u32) -> Rect {
        let col = frame_x.min(self.frames.saturating_sub(1));
        let row = frame_y.min(self.rows.saturating_sub(1));
        Rect::new(
            col as f32 * self.frame_width,
            row as f32 * self.frame_height,
            self.frame_width,
            self.frame_height,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteCatalog {
    pub player: SpriteSheet,
    pub player_jets: SpriteSheet,
    pub beetle_morph: SpriteSheet,
    pub rhino_morph: SpriteSheet,
    pub boss: SpriteSheet,
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self {
            player: SpriteSheet::new("player", 140.0, 120.0, 4, 1),
            player_jets: SpriteSheet::new("player_jets", 140.0, 120.0, 3, 1),
            beetle_morph: SpriteSheet::new("beetlemorph", 80.0, 80.0, 3, 4),
            rhino_morph: SpriteSheet::new("rhinomorph", 80.0, 80.0, 6, 4),
            boss: SpriteSheet::new("boss", 200.0, 200.0, 12, 4),
        }
    }
}

impl SpriteCatalog {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, id: SheetId) -> &SpriteSheet {
        match id {
            SheetId::Player => &self.player,
            SheetId::PlayerJets => &self.player_jets,
            SheetId::BeetleMorph => &self.beetle_morph,
            SheetId::RhinoMorph => &self.rhino_morph,
            SheetId::Boss => &self.boss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BOSS_MAX_FRAME;

    #[test]
    fn test_frame_source_rect() {
        let sheets = SpriteCatalog::default();
        let src = sheets.get(SheetId::RhinoMorph).frame(2, 3);
        assert_eq!(src, Rect::new(160.0, 240.0, 80.0, 80.0));
    }

    #[test]
    fn test_frame_clamps() {
        let sheets = SpriteCatalog::default();
        let boss = sheets.get(SheetId::Boss);
        assert_eq!(boss.frames, BOSS_MAX_FRAME + 1);
        assert_eq!(boss.frame(40, 9), boss.frame(BOSS_MAX_FRAME, 3));
    }

    #[test]
    fn test_enemy_sheets_cover_animation() {
        for kind in [EnemyKind::BeetleMorph, EnemyKind::RhinoMorph] {
            let sheet = SpriteCatalog::default().get(kind.into()).clone();
            assert_eq!(sheet.frames, kind.max_frame() + 1);
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "boss": { "image": "big", "frame_width": 256, "frame_height": 256, "frames": 12, "rows": 2 } }"#;
        let sheets = SpriteCatalog::from_json(json).unwrap();
        assert_eq!(sheets.boss.image, "big");
        assert_eq!(sheets.boss.rows, 2);
        assert_eq!(sheets.player, SpriteCatalog::default().player);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            SpriteCatalog::from_json("{ \"player\": 4 }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
