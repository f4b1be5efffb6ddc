//! Time-gated enemy spawning.

use log::debug;
use rand::Rng;

use crate::consts::*;
use crate::entities::Tank;
use super::movement::random_steer;

/// Spawns at most one enemy per interval, up to the population cap.
#[derive(Debug)]
pub(super) struct Spawner {
    last_spawn_ms: u64,
}

impl Spawner {
    pub(super) fn new() -> Self {
        Self { last_spawn_ms: 0 }
    }

    /// Runs once per tick with the host clock's timestamp.
    ///
    /// The gate advances whenever a full interval has elapsed, whether or
    /// not an enemy actually appears: an at-cap attempt is a silent no-op
    /// that still resets the timer.
    pub(super) fn maybe_spawn(
        &mut self,
        enemies: &mut Vec<Tank>,
        now_ms: u64,
        rng: &mut impl Rng,
    ) {
        if now_ms.saturating_sub(self.last_spawn_ms) < ENEMY_SPAWN_INTERVAL_MS {
            return;
        }
        self.last_spawn_ms = now_ms;

        if enemies.len() >= MAX_ENEMIES {
            return;
        }

        let x = rng.random_range(0.0..FIELD_WIDTH - TANK_SIZE);
        let facing = random_steer(rng);
        let first_shot_delay = rng.random_range(ENEMY_FIRST_SHOT_MIN..ENEMY_FIRST_SHOT_MAX);
        debug!("enemy spawned at x={x:.1}");
        enemies.push(Tank::enemy(x, facing, first_shot_delay));
    }
}
