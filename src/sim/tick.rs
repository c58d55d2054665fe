//! Per-frame simulation tick
//!
//! One call advances the game by one rendered frame. Order is fixed:
//! restart, fire request, sprite timer, projectiles, player (laser then
//! movement), bosses, waves, progression, compaction.

use glam::Vec2;

use super::collision::{Entity, Rect, collides};
use super::laser::Laser;
use super::state::GameState;

/// Input for a single tick, snapshotted from `platform::InputState`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Shoot key is down (selects the shooting frame)
    pub shoot_held: bool,
    pub small_laser: bool,
    pub large_laser: bool,
    /// Fresh shoot press since the last tick
    pub fire: bool,
    /// Restart requested since the last tick
    pub restart: bool,
}

/// Read-only view of the frame handed to entity updates
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub sprite_update: bool,
    pub field: Vec2,
    pub player: Rect,
}

/// Advance the game by one frame. `dt_ms` is host time since the previous frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if input.restart && state.game_over {
        state.restart();
    }
    state.frame += 1;

    if input.fire {
        fire_projectile(state);
    }

    state.advance_sprite_timer(dt_ms);
    state.projectiles.update();

    let field = state.field();
    if let Some(kind) = state.player.select_weapon(input)
        && let Some(beam) = state.player.fire_laser(kind, field.y)
        && state.sprite_update
    {
        apply_laser(state, &beam);
    }
    state.player.update(input, field.x);

    let ctx = FrameContext {
        sprite_update: state.sprite_update,
        field,
        player: state.player.bounds(),
    };

    let mut raised = Vec::new();
    for boss in &mut state.bosses {
        boss.update(&ctx, &mut state.projectiles, &mut raised);
    }
    state.apply_events(raised);
    state.bosses.retain(|b| !b.marked_for_deletion);

    let cell = state.enemy_size;
    let mut pending_waves = 0;
    for i in 0..state.waves.len() {
        let mut raised = Vec::new();
        state.waves[i].update(cell, &ctx, &mut state.projectiles, &mut raised);
        state.apply_events(raised);

        let wave = &mut state.waves[i];
        if wave.is_cleared() && !wave.next_wave_triggered && !state.game_over {
            wave.next_wave_triggered = true;
            pending_waves += 1;
        }
    }
    for _ in 0..pending_waves {
        state.new_wave();
    }

    state.compact();
}

/// Start a projectile from the ship's nose; silently dropped when the pool is empty
fn fire_projectile(state: &mut GameState) {
    let muzzle = state.player.muzzle();
    match state.projectiles.acquire() {
        Some(projectile) => projectile.start(muzzle.x, muzzle.y),
        None => log::trace!("Projectile pool exhausted, shot dropped"),
    }
}

/// Beam damage against every enemy and on-screen boss it overlaps, dying ones included
fn apply_laser(state: &mut GameState, beam: &Laser) {
    let damage = beam.damage();
    for enemy in state.waves.iter_mut().flat_map(|w| w.enemies.iter_mut()) {
        if collides(enemy, beam) {
            enemy.hit(damage);
        }
    }
    for boss in &mut state.bosses {
        if boss.on_screen() && collides(boss, beam) {
            boss.hit(damage);
        }
    }
}
