//! The simulation core: all game state lives in [`World`], and one call to
//! [`World::tick`] advances it by exactly one frame.

mod combat;
mod movement;
mod projectiles;
mod spawner;

use log::info;
use rand::Rng;

use crate::entities::{MapId, Obstacle, Projectile, Tank, generate_obstacles};
use spawner::Spawner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    /// Terminal: once reached, ticks stop mutating state for good.
    GameOver,
}

/// Held input sampled once at the start of a tick. Axes are independent;
/// holding two of them moves diagonally.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// What happened during a tick, for the presentation side (sound cues).
/// Carries no simulation state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    pub player_fired: bool,
    pub enemy_fired: bool,
    pub enemies_destroyed: u32,
}

/// The complete game state, owned by the host loop and handed to each
/// simulation phase explicitly.
pub struct World {
    pub state: GameState,
    pub map: MapId,
    pub player: Tank,
    pub enemies: Vec<Tank>,
    pub projectiles: Vec<Projectile>,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    spawner: Spawner,
}

impl World {
    pub fn new(map: MapId, rng: &mut impl Rng) -> Self {
        Self {
            state: GameState::Playing,
            map,
            player: Tank::player(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            obstacles: generate_obstacles(map, rng),
            score: 0,
            spawner: Spawner::new(),
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// `now_ms` is the host scheduler's monotonic timestamp; the spawn gate
    /// runs off it, so spawn timing follows frame cadence. Paused and
    /// GameOver states suspend everything, including cooldowns.
    pub fn tick(&mut self, input: &TickInput, now_ms: u64, rng: &mut impl Rng) -> TickEvents {
        let mut events = TickEvents::default();
        if self.state != GameState::Playing {
            return events;
        }

        movement::step_player(&mut self.player, input, &self.obstacles);
        movement::steer_enemies(&mut self.enemies, &self.obstacles, rng);

        events.player_fired =
            projectiles::fire_player(&mut self.player, &mut self.projectiles, input.fire);
        events.enemy_fired =
            projectiles::fire_enemies(&mut self.enemies, &mut self.projectiles, rng);
        projectiles::advance_and_cull(&mut self.projectiles, &self.obstacles);

        events.enemies_destroyed = combat::resolve(self);

        // A tick that ended the game does not get to spawn reinforcements.
        if self.state == GameState::Playing {
            self.spawner.maybe_spawn(&mut self.enemies, now_ms, rng);
        }

        events
    }

    /// Switch the active map and roll a fresh obstacle layout.
    ///
    /// Enemies and shots in flight belong to the old layout and are
    /// discarded with it; the player keeps position, hit points, and score.
    pub fn set_map(&mut self, map: MapId, rng: &mut impl Rng) {
        info!("switching map to {}", map.name());
        self.map = map;
        self.obstacles = generate_obstacles(map, rng);
        // The generator's safety zone only guards the spawn point; the
        // player may be anywhere when the map switches.
        let player_rect = self.player.rect();
        self.obstacles.retain(|o| !o.rect().intersects(&player_rect));
        self.enemies.clear();
        self.projectiles.clear();
    }

    /// Toggle Playing <-> Paused. A finished game stays finished.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            GameState::GameOver => GameState::GameOver,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pause_toggles_between_playing_and_paused() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut world = World::new(MapId::Meadow, &mut rng);

        world.toggle_pause();
        assert_eq!(world.state, GameState::Paused);
        world.toggle_pause();
        assert_eq!(world.state, GameState::Playing);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut world = World::new(MapId::Meadow, &mut rng);
        world.state = GameState::GameOver;

        world.toggle_pause();
        assert_eq!(world.state, GameState::GameOver);

        let before = world.player.clone();
        world.tick(&TickInput { fire: true, ..Default::default() }, 5000, &mut rng);
        assert_eq!(world.player.x, before.x);
        assert_eq!(world.player.cooldown, before.cooldown);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_set_map_discards_old_field_state() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut world = World::new(MapId::Meadow, &mut rng);
        world.enemies.push(Tank::enemy(50.0, crate::entities::Direction::Down, 0));
        world.score = 3;

        world.set_map(MapId::City, &mut rng);
        assert_eq!(world.map, MapId::City);
        assert!(world.enemies.is_empty());
        assert!(world.projectiles.is_empty());
        assert_eq!(world.score, 3);
    }
}
