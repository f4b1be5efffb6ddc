use color_eyre::Result;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::entities::MapId;
use crate::game::World;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};

/// The host loop: owns the simulation state, the clock, and the
/// presentation collaborators, and advances everything one frame at a time.
pub struct App {
    running: bool,
    world: World,
    /// Simulation randomness; seeded once so the whole run flows from it
    rng: Pcg32,
    /// Start of the monotonic frame clock
    clock_start: Instant,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        let mut rng = Pcg32::from_rng(&mut rand::rng());
        let world = World::new(MapId::Meadow, &mut rng);

        Self {
            running: true,
            world,
            rng,
            clock_start: Instant::now(),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager: AudioManager::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // The loop is the frame scheduler: each iteration produces one
            // monotonic timestamp that also drives the spawn gate.
            let now_ms = self.clock_start.elapsed().as_millis() as u64;

            terminal.draw(|frame| {
                let view = RenderView {
                    game_state: self.world.state,
                    player: &self.world.player,
                    enemies: &self.world.enemies,
                    projectiles: &self.world.projectiles,
                    obstacles: &self.world.obstacles,
                    map: self.world.map,
                    score: self.world.score,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events, then route one-shot actions
            self.input_manager.poll_events(self.world.state)?;
            self.process_actions();

            // One simulation tick; a paused or finished world ignores it
            let input = self.input_manager.tick_input();
            let events = self.world.tick(&input, now_ms, &mut self.rng);

            if events.player_fired {
                self.audio_manager.play_fire_sound();
            }
            if events.enemy_fired {
                self.audio_manager.play_enemy_fire_sound();
            }
            if events.enemies_destroyed > 0 {
                self.audio_manager.play_explosion_sound();
            }

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }

    fn process_actions(&mut self) {
        let actions: Vec<InputAction> = self.input_manager.actions().to_vec();
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Pause | InputAction::Resume => {
                    self.world.toggle_pause();
                }
                InputAction::Restart => {
                    let map = self.world.map;
                    self.world = World::new(map, &mut self.rng);
                }
                InputAction::SelectMap(map) => {
                    self.world.set_map(map, &mut self.rng);
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
