use crate::consts::*;
use crate::geometry::Rect;

/// Facing of a tank; also the travel direction of the shot it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction, y growing downward.
    pub fn delta(self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// A tank, player or enemy. Which side it fights for is decided by where it
/// lives: the player is the `World`'s singleton, enemies are its `Vec`.
#[derive(Debug, Clone)]
pub struct Tank {
    /// Top-left corner of the tank square.
    pub x: f32,
    pub y: f32,
    pub facing: Direction,
    pub hp: u8,
    /// Ticks until the next shot is accepted; firing allowed at <= 0.
    pub cooldown: i32,
}

impl Tank {
    /// The player singleton, parked bottom-center and aiming up.
    pub fn player() -> Self {
        Self {
            x: PLAYER_SPAWN_X,
            y: PLAYER_SPAWN_Y,
            facing: Direction::Up,
            hp: PLAYER_MAX_HP,
            cooldown: 0,
        }
    }

    /// A freshly spawned enemy on the top row. `first_shot_delay`
    /// desynchronizes enemy fire so a batch doesn't volley in lockstep.
    pub fn enemy(x: f32, facing: Direction, first_shot_delay: i32) -> Self {
        Self {
            x,
            y: ENEMY_SPAWN_Y,
            facing,
            hp: ENEMY_MAX_HP,
            cooldown: first_shot_delay,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, TANK_SIZE, TANK_SIZE)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + TANK_SIZE / 2.0, self.y + TANK_SIZE / 2.0)
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown <= 0
    }

    pub fn arm_cooldown(&mut self, ticks: i32) {
        self.cooldown = ticks;
    }

    /// One tick of reload progress; parked at zero once expired.
    pub fn tick_cooldown(&mut self) {
        if self.cooldown > 0 {
            self.cooldown -= 1;
        }
    }

    pub fn take_hit(&mut self) {
        self.hp = self.hp.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
