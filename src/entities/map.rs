use rand::Rng;

use crate::consts::*;
use crate::entities::{Obstacle, ObstacleKind};
use crate::geometry::Rect;

/// The active battlefield. Selects a background treatment and the obstacle
/// kinds the layout generator may place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapId {
    Meadow,
    Desert,
    City,
}

impl MapId {
    pub fn name(self) -> &'static str {
        match self {
            MapId::Meadow => "Meadow",
            MapId::Desert => "Desert",
            MapId::City => "City",
        }
    }

    /// Obstacle kinds this map draws from.
    pub fn palette(self) -> &'static [ObstacleKind] {
        match self {
            MapId::Meadow => &[ObstacleKind::Brick, ObstacleKind::Tree, ObstacleKind::Water],
            MapId::Desert => &[ObstacleKind::Rock, ObstacleKind::Cactus],
            MapId::City => &[ObstacleKind::Brick, ObstacleKind::Steel],
        }
    }
}

/// Obstacles never land here, so the player can always leave the spawn.
fn spawn_safety_zone() -> Rect {
    Rect::new(
        PLAYER_SPAWN_X - TANK_SIZE,
        PLAYER_SPAWN_Y - TANK_SIZE,
        TANK_SIZE * 3.0,
        TANK_SIZE * 3.0,
    )
}

/// Rolls a fresh obstacle layout for `map`.
///
/// Candidate positions are uniform over the field and resampled when they
/// fall in the top margin (the enemy spawn row) or the player's spawn safety
/// zone. A candidate that exhausts its attempt budget is dropped rather than
/// retried forever.
pub fn generate_obstacles(map: MapId, rng: &mut impl Rng) -> Vec<Obstacle> {
    const MAX_ATTEMPTS: usize = 40;

    let palette = map.palette();
    let count = rng.random_range(OBSTACLE_COUNT_MIN..OBSTACLE_COUNT_MAX);
    let safety = spawn_safety_zone();

    let mut obstacles = Vec::with_capacity(count);
    for _ in 0..count {
        for _ in 0..MAX_ATTEMPTS {
            let x = rng.random_range(0.0..FIELD_WIDTH - OBSTACLE_SIZE);
            let y = rng.random_range(0.0..FIELD_HEIGHT - OBSTACLE_SIZE);
            let candidate = Rect::new(x, y, OBSTACLE_SIZE, OBSTACLE_SIZE);

            if y < OBSTACLE_TOP_MARGIN || candidate.intersects(&safety) {
                continue;
            }

            let kind = palette[rng.random_range(0..palette.len())];
            obstacles.push(Obstacle::new(x, y, kind));
            break;
        }
    }

    obstacles
}
