//! Game state and wave progression
//!
//! `GameState` owns every entity. Entities never reach back into it; they
//! report what happened as `GameEvent`s and the state applies them in order.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::enemy::{EnemyKind, Wave};
use super::player::Player;
use super::projectile::ProjectilePool;
use crate::consts::*;
use crate::settings::GameConfig;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// An enemy reached the bottom of the field
    EnemyBreach,
    /// A boss reached the bottom of the field
    BossBreach,
    /// A boss rammed the player
    BossCollision,
    /// Player ran out of lives
    NoLives,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Death animation finished; `points` is what was actually awarded
    EnemyDestroyed { kind: EnemyKind, points: u32 },
    BossDefeated { points: u32 },
    /// An enemy crashed into the player ship
    PlayerHit,
    WaveSpawned { wave: u32, columns: u32, rows: u32 },
    BossSpawned { wave: u32, lives: u32 },
    GameOver { cause: GameOverCause },
    Restarted,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub projectiles: ProjectilePool,
    /// Active waves (at most one in normal play)
    pub waves: Vec<Wave>,
    /// Active bosses (at most one in normal play)
    pub bosses: Vec<Boss>,
    pub score: u64,
    pub wave_count: u32,
    pub game_over: bool,
    /// Current enemy grid
    pub columns: u32,
    pub rows: u32,
    pub enemy_size: f32,
    /// HP of the next boss
    pub boss_lives: u32,
    /// True for exactly one frame each sprite interval
    pub sprite_update: bool,
    pub sprite_timer: f32,
    pub sprite_interval: f32,
    /// Simulation frame counter
    pub frame: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run: one boss incoming, 2x2 grid queued up
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self {
            player: Player::new(&config),
            projectiles: ProjectilePool::new(config.projectile_count),
            waves: Vec::new(),
            bosses: Vec::new(),
            score: 0,
            wave_count: 1,
            game_over: false,
            columns: 1,
            rows: 1,
            enemy_size: config.enemy_size,
            boss_lives: config.boss_lives,
            sprite_update: false,
            sprite_timer: 0.0,
            sprite_interval: config.sprite_interval_ms,
            frame: 0,
            rng: Pcg32::seed_from_u64(config.seed),
            events: Vec::new(),
            config,
        };
        state.restart();
        state.events.clear();
        state
    }

    #[inline]
    pub fn field(&self) -> Vec2 {
        Vec2::new(self.config.field_width, self.config.field_height)
    }

    /// Reset to the opening position of a run
    pub fn restart(&mut self) {
        self.player.restart(&self.config);
        self.projectiles.release_all();
        self.columns = self.config.initial_columns;
        self.rows = self.config.initial_rows;
        self.waves.clear();
        self.bosses.clear();
        self.boss_lives = self.config.boss_lives;
        self.wave_count = 1;
        self.spawn_boss();
        self.score = 0;
        self.game_over = false;
        self.events.push(GameEvent::Restarted);
        log::info!("Run restarted (boss with {} HP incoming)", self.boss_lives);
    }

    /// Advance to the next wave: bosses on even counts, bigger grids on odd
    pub fn new_wave(&mut self) {
        self.wave_count += 1;
        self.player.gain_life();

        if self.wave_count.is_multiple_of(2) {
            self.spawn_boss();
        } else {
            self.grow_grid();
            let wave = Wave::new(
                self.columns,
                self.rows,
                self.enemy_size,
                self.config.field_width,
                &mut self.rng,
            );
            log::info!(
                "Wave {} spawned ({}x{} grid)",
                self.wave_count,
                self.columns,
                self.rows
            );
            self.events.push(GameEvent::WaveSpawned {
                wave: self.wave_count,
                columns: self.columns,
                rows: self.rows,
            });
            self.waves.push(wave);
        }

        self.waves.retain(|w| !w.marked_for_deletion);
    }

    /// Columns are preferred at random; each axis is capped by the field
    fn grow_grid(&mut self) {
        let grid_width = self.columns as f32 * self.enemy_size;
        let grid_height = self.rows as f32 * self.enemy_size;
        let max_width = self.config.field_width * MAX_GRID_WIDTH_FRACTION;
        let max_height = self.config.field_height * MAX_GRID_HEIGHT_FRACTION;

        if self.rng.random_bool(0.5) && grid_width < max_width {
            self.columns += 1;
        } else if grid_height < max_height {
            self.rows += 1;
        }
    }

    fn spawn_boss(&mut self) {
        let boss = Boss::new(self.boss_lives, self.config.field_width, &mut self.rng);
        log::info!(
            "Boss spawned for wave {} with {} HP",
            self.wave_count,
            self.boss_lives
        );
        self.events.push(GameEvent::BossSpawned {
            wave: self.wave_count,
            lives: self.boss_lives,
        });
        self.bosses.push(boss);
    }

    /// Points are only awarded while the run is live
    fn award(&mut self, points: u32) -> u32 {
        if self.game_over {
            return 0;
        }
        self.score += u64::from(points);
        points
    }

    /// Game over is sticky; only the first cause is recorded
    pub fn end_game(&mut self, cause: GameOverCause) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        log::info!(
            "Game over ({:?}) at wave {} with score {}",
            cause,
            self.wave_count,
            self.score
        );
        self.events.push(GameEvent::GameOver { cause });
    }

    /// Apply entity reports in the order they were raised
    pub fn apply_events(&mut self, raised: Vec<GameEvent>) {
        for event in raised {
            match event {
                GameEvent::EnemyDestroyed { kind, points } => {
                    let points = self.award(points);
                    log::debug!("{:?} destroyed (+{})", kind, points);
                    self.events.push(GameEvent::EnemyDestroyed { kind, points });
                }
                GameEvent::BossDefeated { points } => {
                    let points = self.award(points);
                    self.boss_lives += self.config.boss_lives_step;
                    log::debug!("Boss defeated (+{}), next boss has {} HP", points, self.boss_lives);
                    self.events.push(GameEvent::BossDefeated { points });
                    if !self.game_over {
                        self.new_wave();
                    }
                }
                GameEvent::PlayerHit => {
                    self.player.lose_life();
                    log::debug!("Player hit, {} lives left", self.player.lives);
                    self.events.push(GameEvent::PlayerHit);
                }
                GameEvent::GameOver { cause } => self.end_game(cause),
                other => self.events.push(other),
            }
            if self.player.is_out_of_lives() {
                self.end_game(GameOverCause::NoLives);
            }
        }
    }

    /// Drop every entity flagged during this tick
    pub fn compact(&mut self) {
        self.bosses.retain(|b| !b.marked_for_deletion);
        self.waves.retain(|w| !w.marked_for_deletion);
    }

    /// Roll the sprite timer; the flag is up for one frame per interval
    pub fn advance_sprite_timer(&mut self, dt_ms: f32) {
        if self.sprite_timer > self.sprite_interval {
            self.sprite_update = true;
            self.sprite_timer = 0.0;
        } else {
            self.sprite_update = false;
            self.sprite_timer += dt_ms;
        }
    }

    /// Events recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Enemies still on the field across all waves
    pub fn enemy_count(&self) -> usize {
        self.waves.iter().map(|w| w.enemies.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(GameConfig::default())
    }

    #[test]
    fn test_new_run_has_one_boss() {
        let s = state();
        assert_eq!(s.bosses.len(), 1);
        assert_eq!(s.bosses[0].max_lives, BOSS_LIVES);
        assert!(s.waves.is_empty());
        assert_eq!(s.wave_count, 1);
        assert_eq!((s.columns, s.rows), (2, 2));
        assert!(s.events().is_empty());
    }

    #[test]
    fn test_new_wave_parity() {
        let mut s = state();
        s.bosses.clear();

        // 1 -> 2: boss
        s.new_wave();
        assert_eq!(s.wave_count, 2);
        assert_eq!(s.bosses.len(), 1);
        assert!(s.waves.is_empty());

        // 2 -> 3: grid grows by exactly one cell on one axis
        s.new_wave();
        assert_eq!(s.wave_count, 3);
        assert_eq!(s.waves.len(), 1);
        assert_eq!(s.columns + s.rows, 5);
        assert_eq!(s.waves[0].enemies.len(), (s.columns * s.rows) as usize);
    }

    #[test]
    fn test_new_wave_restores_one_life() {
        let mut s = state();
        s.player.lives = 1;
        s.new_wave();
        assert_eq!(s.player.lives, 2);

        s.player.lives = PLAYER_MAX_LIVES;
        s.new_wave();
        assert_eq!(s.player.lives, PLAYER_MAX_LIVES);
    }

    #[test]
    fn test_grid_growth_is_capped() {
        let mut s = state();
        for _ in 0..200 {
            s.grow_grid();
        }
        // 6 * 80 = 480 is no longer below either cap (600 * 0.8, 800 * 0.6)
        assert_eq!(s.columns, 6);
        assert_eq!(s.rows, 6);
    }

    #[test]
    fn test_score_frozen_after_game_over() {
        let mut s = state();
        s.apply_events(vec![GameEvent::EnemyDestroyed {
            kind: EnemyKind::RhinoMorph,
            points: 4,
        }]);
        assert_eq!(s.score, 4);

        s.apply_events(vec![
            GameEvent::GameOver {
                cause: GameOverCause::EnemyBreach,
            },
            GameEvent::EnemyDestroyed {
                kind: EnemyKind::BeetleMorph,
                points: 1,
            },
        ]);
        assert!(s.game_over);
        assert_eq!(s.score, 4);
        assert!(s.events().contains(&GameEvent::EnemyDestroyed {
            kind: EnemyKind::BeetleMorph,
            points: 0
        }));
    }

    #[test]
    fn test_boss_defeat_raises_next_boss_and_advances() {
        let mut s = state();
        s.bosses.clear();
        s.apply_events(vec![GameEvent::BossDefeated { points: 10 }]);
        assert_eq!(s.score, 10);
        assert_eq!(s.boss_lives, BOSS_LIVES + BOSS_LIVES_STEP);
        assert_eq!(s.wave_count, 2);
        assert_eq!(s.bosses[0].max_lives, 15);
    }

    #[test]
    fn test_boss_defeat_after_game_over_does_not_advance() {
        let mut s = state();
        s.end_game(GameOverCause::BossCollision);
        s.apply_events(vec![GameEvent::BossDefeated { points: 10 }]);
        assert_eq!(s.score, 0);
        assert_eq!(s.wave_count, 1);
    }

    #[test]
    fn test_last_life_lost_ends_game() {
        let mut s = state();
        s.player.lives = 1;
        s.apply_events(vec![GameEvent::PlayerHit]);
        assert!(s.game_over);
        assert_eq!(
            s.events().last(),
            Some(&GameEvent::GameOver {
                cause: GameOverCause::NoLives
            })
        );
    }

    #[test]
    fn test_game_over_recorded_once() {
        let mut s = state();
        for _ in 0..5 {
            s.apply_events(vec![GameEvent::GameOver {
                cause: GameOverCause::EnemyBreach,
            }]);
        }
        let count = s
            .take_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_sprite_timer_flags_single_frames() {
        let mut s = state();
        let mut flagged = Vec::new();
        for _ in 0..24 {
            s.advance_sprite_timer(16.0);
            flagged.push(s.sprite_update);
        }
        // 10 frames accumulate 160ms > 150ms, the 11th frame fires
        let hits: Vec<usize> = flagged
            .iter()
            .enumerate()
            .filter(|(_, f)| **f)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hits, vec![10, 21]);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut s = state();
        s.score = 120;
        s.wave_count = 7;
        s.columns = 5;
        s.rows = 4;
        s.boss_lives = 30;
        s.player.lives = 0;
        s.game_over = true;
        s.new_wave();

        s.restart();
        assert!(!s.game_over);
        assert_eq!(s.player.lives, PLAYER_LIVES);
        assert_eq!(s.score, 0);
        assert_eq!(s.wave_count, 1);
        assert_eq!((s.columns, s.rows), (2, 2));
        assert!(s.waves.is_empty());
        assert_eq!(s.bosses.len(), 1);
        assert_eq!(s.bosses[0].lives, 10.0);
    }

    #[test]
    fn test_restart_reports_first_wave_boss() {
        let mut s = state();
        s.wave_count = 6;
        s.game_over = true;
        s.restart();
        assert!(s.events().contains(&GameEvent::BossSpawned { wave: 1, lives: 10 }));
    }
}
