//! Invader Swarm entry point
//!
//! Headless runner: plays the game with a seeded autopilot, renders every
//! frame into a command buffer, and logs the event stream. Hosts with a real
//! canvas drive `Game` the same way from their animation-frame callback.
//!
//! Usage: `invader-swarm [config.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use invader_swarm::GameConfig;
    use invader_swarm::platform::{FrameClock, InputState, Key};
    use invader_swarm::renderer::{CommandBuffer, SpriteCatalog, render};
    use invader_swarm::sim::{GameEvent, GameState, tick};

    /// 60 Hz host frames
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const DEFAULT_FRAMES: u64 = 60 * 60 * 5;

    struct Game {
        state: GameState,
        input: InputState,
        clock: FrameClock,
        sprites: SpriteCatalog,
        frame_buffer: CommandBuffer,
        events_seen: u64,
        restarts: u32,
        best_score: u64,
    }

    impl Game {
        fn new(config: GameConfig) -> Self {
            Self {
                state: GameState::new(config),
                input: InputState::default(),
                clock: FrameClock::new(),
                sprites: SpriteCatalog::default(),
                frame_buffer: CommandBuffer::new(),
                events_seen: 0,
                restarts: 0,
                best_score: 0,
            }
        }

        /// One animation frame
        fn frame(&mut self, timestamp_ms: f64) {
            let dt = self.clock.advance(timestamp_ms);
            let input = self.input.take_tick_input();
            tick(&mut self.state, &input, dt);

            for event in self.state.take_events() {
                self.events_seen += 1;
                self.log_event(event);
            }
            self.best_score = self.best_score.max(self.state.score);

            self.frame_buffer.reset();
            render(&self.state, &self.sprites, &mut self.frame_buffer);
        }

        /// Spawns, kills and game over are already logged by the sim
        fn log_event(&mut self, event: GameEvent) {
            log::debug!("frame {}: {:?}", self.state.frame, event);
            if event == GameEvent::Restarted {
                self.restarts += 1;
            }
        }
    }

    /// Chases the nearest target, taps shoot, and burns energy on lasers
    struct Autopilot {
        rng: Pcg32,
    }

    impl Autopilot {
        fn new(seed: u64) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed),
            }
        }

        fn drive(&mut self, state: &GameState, input: &mut InputState) {
            if state.game_over {
                input.press(Key::Restart);
                input.release(Key::Restart);
                return;
            }

            let ship_x = state.player.muzzle().x;
            let target = state
                .bosses
                .iter()
                .map(|b| b.rect.center_x())
                .chain(
                    state
                        .waves
                        .iter()
                        .flat_map(|w| w.enemies.iter())
                        .filter(|e| e.is_alive())
                        .map(|e| e.rect.center_x()),
                )
                .min_by(|a, b| (a - ship_x).abs().total_cmp(&(b - ship_x).abs()));

            input.release(Key::Left);
            input.release(Key::Right);
            if let Some(x) = target {
                if x < ship_x - 10.0 {
                    input.press(Key::Left);
                } else if x > ship_x + 10.0 {
                    input.press(Key::Right);
                }
            }

            if input.is_held(Key::Shoot) {
                input.release(Key::Shoot);
            } else if self.rng.random_bool(0.3) {
                input.press(Key::Shoot);
            }

            let beam = state.player.energy > state.player.max_energy * 0.6;
            input.release(Key::SmallLaser);
            input.release(Key::LargeLaser);
            if beam {
                let key = if self.rng.random_bool(0.5) {
                    Key::SmallLaser
                } else {
                    Key::LargeLaser
                };
                input.press(key);
            }
        }
    }

    fn load_config(path: Option<&str>) -> GameConfig {
        let Some(path) = path else {
            return GameConfig::default();
        };
        let loaded = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::error!("Failed to load config {path}: {e}; using defaults");
                GameConfig::default()
            }
        }
    }

    pub fn run() {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let config = load_config(args.first().map(String::as_str));
        let frames = match args.get(1).map(|s| s.parse::<u64>()) {
            Some(Ok(n)) => n,
            Some(Err(e)) => {
                log::warn!("Bad frame count ({e}), running {DEFAULT_FRAMES}");
                DEFAULT_FRAMES
            }
            None => DEFAULT_FRAMES,
        };

        let seed = config.seed;
        log::info!("Invader Swarm (headless) starting, seed {seed}, {frames} frames");

        let mut game = Game::new(config);
        let mut pilot = Autopilot::new(seed ^ 0xA5A5);
        for i in 0..frames {
            pilot.drive(&game.state, &mut game.input);
            game.frame(i as f64 * FRAME_MS);
        }

        log::debug!("Last frame issued {} draw calls", game.frame_buffer.len());
        println!(
            "frames={} score={} best={} wave={} restarts={} events={} enemies={} bosses={}",
            game.state.frame,
            game.state.score,
            game.best_score,
            game.state.wave_count,
            game.restarts,
            game.events_seen,
            game.state.enemy_count(),
            game.state.bosses.len(),
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts link the library directly
}
