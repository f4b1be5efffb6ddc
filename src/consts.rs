//! Tuning constants for the simulation.

/// Field dimensions, in world units.
pub const FIELD_WIDTH: f32 = 768.0;
pub const FIELD_HEIGHT: f32 = 480.0;

/// Tanks are fixed-size squares, player and enemy alike.
pub const TANK_SIZE: f32 = 32.0;

/// Bullets collide as a square of side `2 * BULLET_RADIUS` centered on the
/// bullet position.
pub const BULLET_RADIUS: f32 = 6.0;

/// Per-tick speeds.
pub const PLAYER_SPEED: f32 = 3.0;
pub const ENEMY_SPEED: f32 = 1.2;
pub const PLAYER_BULLET_SPEED: f32 = 6.0;
pub const ENEMY_BULLET_SPEED: f32 = 4.0;

pub const PLAYER_MAX_HP: u8 = 3;
pub const ENEMY_MAX_HP: u8 = 2;

/// Ticks between player shots.
pub const PLAYER_FIRE_COOLDOWN: i32 = 18;

/// Enemy cooldown draws, in ticks: the first shot after spawning and every
/// reload after that.
pub const ENEMY_FIRST_SHOT_MIN: i32 = 30;
pub const ENEMY_FIRST_SHOT_MAX: i32 = 90;
pub const ENEMY_RELOAD_MIN: i32 = 60;
pub const ENEMY_RELOAD_MAX: i32 = 120;

/// Spawn gate: one enemy at most every interval, capped population.
pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 2000;
pub const MAX_ENEMIES: usize = 5;
pub const ENEMY_SPAWN_Y: f32 = 10.0;

/// Chance per tick that an enemy redraws its direction.
pub const ENEMY_TURN_CHANCE: f64 = 0.01;

/// Player start position (field center x, just above the bottom edge).
pub const PLAYER_SPAWN_X: f32 = FIELD_WIDTH / 2.0;
pub const PLAYER_SPAWN_Y: f32 = FIELD_HEIGHT - TANK_SIZE - 10.0;

/// Obstacle layout generation.
pub const OBSTACLE_SIZE: f32 = 32.0;
pub const OBSTACLE_COUNT_MIN: usize = 8;
pub const OBSTACLE_COUNT_MAX: usize = 13;
/// No obstacles above this line; keeps the enemy spawn row open.
pub const OBSTACLE_TOP_MARGIN: f32 = 60.0;
