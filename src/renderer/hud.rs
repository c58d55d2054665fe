//! Status text, lives, energy bar and the game-over overlay

use glam::Vec2;

use super::{BASE_FONT, Renderer, TextAlign, colors};
use crate::sim::{GameState, Rect};

const HUD_X: f32 = 20.0;
const LIFE_SPACING: f32 = 20.0;
const ENERGY_SPACING: f32 = 2.0;
const TITLE_FONT: f32 = 100.0;
const HINT_FONT: f32 = 20.0;

const HINTS: [&str; 4] = [
    "Press r To Restart",
    "Press s To Shoot Bullets",
    "Press a To Shoot Low Energy Laser",
    "Press d To Shoot High Energy Laser",
];

pub fn draw_status(state: &GameState, out: &mut impl Renderer) {
    out.save();
    out.set_font(BASE_FONT);
    out.set_shadow(Vec2::new(2.0, 2.0), colors::BLACK);
    out.fill_text(&format!("Score {}", state.score), Vec2::new(HUD_X, 40.0));
    out.fill_text(&format!("Wave {}", state.wave_count), Vec2::new(HUD_X, 80.0));

    let player = &state.player;
    for i in 0..player.max_lives {
        out.stroke_rect(life_box(i));
    }
    for i in 0..player.lives {
        out.fill_rect(life_box(i));
    }

    out.save();
    out.set_fill(if player.cooldown { colors::RED } else { colors::GOLD });
    // One bar per started unit of energy
    let bars = player.energy.max(0.0).ceil() as u32;
    for i in 0..bars {
        out.fill_rect(Rect::new(HUD_X + ENERGY_SPACING * i as f32, 130.0, 2.0, 15.0));
    }
    out.restore();

    if state.game_over {
        draw_game_over(state.field(), out);
    }
    out.restore();
}

fn life_box(i: u32) -> Rect {
    Rect::new(HUD_X + LIFE_SPACING * i as f32, 100.0, 10.0, 15.0)
}

fn draw_game_over(field: Vec2, out: &mut impl Renderer) {
    let center = field * 0.5;
    out.set_text_align(TextAlign::Center);
    out.set_font(TITLE_FONT);
    out.fill_text("GAME OVER", center);
    out.set_font(HINT_FONT);
    for (i, hint) in HINTS.iter().enumerate() {
        out.fill_text(hint, center + Vec2::new(0.0, 50.0 * (i + 1) as f32));
    }
}
