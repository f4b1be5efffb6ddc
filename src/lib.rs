// Library exports for testing
pub use entities::{
    Direction, MapId, Obstacle, ObstacleKind, Projectile, ProjectileOwner, Tank,
    generate_obstacles,
};
pub use game::{GameState, TickEvents, TickInput, World};
pub use geometry::Rect;

pub mod app;
pub mod audio;
pub mod consts;
pub mod entities;
pub mod game;
pub mod geometry;
pub mod input;
pub mod renderer;
