//! Rendering module
//!
//! The sim never draws. `render` walks a finished `GameState` and issues
//! canvas-style calls against any `Renderer`; hosts wrap their 2D context,
//! tests and the headless binary use `CommandBuffer`.
//!
//! Draw order: HUD, projectiles, laser beam, player, bosses, enemies.

pub mod commands;
pub mod hud;
pub mod sprites;

use glam::Vec2;
use serde::Serialize;

pub use commands::{CommandBuffer, DrawCommand};
pub use sprites::{SheetId, SpriteCatalog, SpriteSheet};

use crate::sim::{Boss, Enemy, Entity, GameState, Laser, Player, Rect};

/// Colors for game elements
pub mod colors {
    pub const GOLD: [f32; 4] = [1.0, 0.84, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Default font size for status text
pub const BASE_FONT: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Canvas-style drawing surface. `save`/`restore` bracket style changes
/// (fill, font, alignment, shadow) the same way a 2D canvas context does.
/// Fresh surfaces start with white fill and stroke and a `BASE_FONT` font.
pub trait Renderer {
    fn clear(&mut self, size: Vec2);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_fill(&mut self, color: [f32; 4]);
    fn set_font(&mut self, px: f32);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_shadow(&mut self, offset: Vec2, color: [f32; 4]);
    fn draw_image(&mut self, sheet: SheetId, src: Rect, dest: Rect);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    fn fill_text(&mut self, text: &str, pos: Vec2);
}

/// Issue one full frame
pub fn render(state: &GameState, sprites: &SpriteCatalog, out: &mut impl Renderer) {
    out.clear(state.field());
    hud::draw_status(state, out);

    out.save();
    out.set_fill(colors::GOLD);
    for projectile in state.projectiles.iter().filter(|p| p.is_active()) {
        out.fill_rect(projectile.bounds());
    }
    out.restore();

    if let Some(beam) = &state.player.laser {
        draw_laser(beam, out);
    }
    draw_player(&state.player, sprites, out);

    for boss in &state.bosses {
        draw_boss(boss, sprites, out);
    }
    for enemy in state.waves.iter().flat_map(|w| w.enemies.iter()) {
        draw_enemy(enemy, sprites, out);
    }
}

fn draw_laser(beam: &Laser, out: &mut impl Renderer) {
    let rect = beam.rect;
    out.save();
    out.set_fill(colors::GOLD);
    out.fill_rect(rect);
    // White core over the middle 60%
    out.set_fill(colors::WHITE);
    out.fill_rect(Rect::new(
        rect.left() + rect.size.x * 0.2,
        rect.top(),
        rect.size.x * 0.6,
        rect.size.y,
    ));
    out.restore();
}

fn draw_player(player: &Player, sprites: &SpriteCatalog, out: &mut impl Renderer) {
    let dest = player.bounds();
    let jets = sprites.get(SheetId::PlayerJets).frame(player.jets.frame(), 0);
    out.draw_image(SheetId::PlayerJets, jets, dest);
    let ship = sprites.get(SheetId::Player).frame(player.frame_x, 0);
    out.draw_image(SheetId::Player, ship, dest);
}

fn draw_boss(boss: &Boss, sprites: &SpriteCatalog, out: &mut impl Renderer) {
    let src = sprites.get(SheetId::Boss).frame(boss.frame_x, boss.frame_y);
    out.draw_image(SheetId::Boss, src, boss.rect);

    if boss.is_alive() {
        out.save();
        out.set_text_align(TextAlign::Center);
        out.fill_text(
            &boss.display_lives().to_string(),
            Vec2::new(boss.rect.center_x(), boss.rect.top() + 50.0),
        );
        out.restore();
    }
}

fn draw_enemy(enemy: &Enemy, sprites: &SpriteCatalog, out: &mut impl Renderer) {
    let sheet = SheetId::from(enemy.kind);
    let src = sprites.get(sheet).frame(enemy.frame_x, enemy.frame_y);
    out.draw_image(sheet, src, enemy.rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::laser::LaserKind;
    use crate::sim::{TickInput, tick};

    fn frame(state: &GameState) -> CommandBuffer {
        let mut out = CommandBuffer::new();
        render(state, &SpriteCatalog::default(), &mut out);
        out
    }

    fn fills(out: &CommandBuffer) -> Vec<Rect> {
        out.commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_status_text() {
        let mut s = GameState::new(GameConfig::default());
        s.score = 12;
        let out = frame(&s);
        let texts: Vec<_> = out.texts().collect();
        assert_eq!(texts[0], "Score 12");
        assert_eq!(texts[1], "Wave 1");
        assert!(!texts.contains(&"GAME OVER"));
        assert_eq!(out.commands()[0], DrawCommand::Clear { size: s.field() });
    }

    #[test]
    fn test_lives_and_energy_bars() {
        let mut s = GameState::new(GameConfig::default());
        s.player.energy = 4.5;
        let out = frame(&s);

        let strokes = out
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
            .count();
        assert_eq!(strokes, s.player.max_lives as usize);

        let rects = fills(&out);
        let lives = rects.iter().filter(|r| r.top() == 100.0).count();
        let bars: Vec<_> = rects.iter().filter(|r| r.top() == 130.0).collect();
        assert_eq!(lives, 3);
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[4].left(), 28.0);
    }

    #[test]
    fn test_energy_bar_red_in_cooldown() {
        let mut s = GameState::new(GameConfig::default());
        s.player.cooldown = true;
        let out = frame(&s);
        assert!(
            out.commands()
                .contains(&DrawCommand::SetFill { color: colors::RED })
        );
    }

    #[test]
    fn test_game_over_overlay() {
        let mut s = GameState::new(GameConfig::default());
        s.game_over = true;
        let out = frame(&s);
        let texts: Vec<_> = out.texts().collect();
        let at = texts.iter().position(|t| *t == "GAME OVER").unwrap();
        assert_eq!(texts[at + 1], "Press r To Restart");
        assert!(out.commands().contains(&DrawCommand::FillText {
            text: "GAME OVER".to_string(),
            pos: Vec2::new(300.0, 400.0),
        }));
    }

    #[test]
    fn test_projectiles_only_when_active() {
        let mut s = GameState::new(GameConfig::default());
        if let Some(p) = s.projectiles.acquire() {
            p.start(100.0, 500.0);
        }
        let shots: Vec<_> = fills(&frame(&s))
            .into_iter()
            .filter(|r| r.size == Vec2::new(3.0, 40.0))
            .collect();
        assert_eq!(shots, vec![Rect::new(98.5, 500.0, 3.0, 40.0)]);
    }

    #[test]
    fn test_laser_beam_and_core() {
        let mut s = GameState::new(GameConfig::default());
        let field_height = s.field().y;
        s.player.fire_laser(LaserKind::Large, field_height);
        let rects = fills(&frame(&s));
        assert!(rects.contains(&Rect::new(287.5, 0.0, 25.0, 750.0)));
        assert!(rects.contains(&Rect::new(292.5, 0.0, 15.0, 750.0)));
    }

    #[test]
    fn test_player_and_boss_sprites() {
        let mut s = GameState::new(GameConfig::default());
        s.bosses[0].frame_x = 0;
        let out = frame(&s);

        let player: Vec<_> = out.images(SheetId::Player).collect();
        assert_eq!(player.len(), 1);
        assert_eq!(player[0].1, s.player.bounds());
        // Idle jets frame
        let jets: Vec<_> = out.images(SheetId::PlayerJets).collect();
        assert_eq!(jets[0].0.left(), 140.0);

        let boss: Vec<_> = out.images(SheetId::Boss).collect();
        assert_eq!(boss[0].0.top(), s.bosses[0].frame_y as f32 * 200.0);
        assert!(out.texts().any(|t| t == "10"));
    }

    #[test]
    fn test_dead_boss_hides_hp() {
        let mut s = GameState::new(GameConfig::default());
        s.bosses[0].lives = 0.5;
        assert!(!frame(&s).texts().any(|t| t == "0"));
    }

    #[test]
    fn test_enemies_drawn_after_tick() {
        let mut s = GameState::new(GameConfig::default());
        s.bosses.clear();
        s.wave_count = 2;
        s.new_wave();
        tick(&mut s, &TickInput::default(), 16.0);

        let out = frame(&s);
        let drawn = out.images(SheetId::BeetleMorph).count() + out.images(SheetId::RhinoMorph).count();
        assert_eq!(drawn, s.enemy_count());
        assert!(drawn > 0);
    }
}
