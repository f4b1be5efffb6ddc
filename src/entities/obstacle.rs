use crate::consts::OBSTACLE_SIZE;
use crate::geometry::Rect;

/// What an obstacle is made of. Purely cosmetic: every kind blocks tanks and
/// stops shells the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Brick,
    Steel,
    Tree,
    Water,
    Rock,
    Cactus,
}

/// A static map fixture. Lives exactly as long as the map that placed it.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, kind: ObstacleKind) -> Self {
        Self { x, y, kind }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, OBSTACLE_SIZE, OBSTACLE_SIZE)
    }
}
