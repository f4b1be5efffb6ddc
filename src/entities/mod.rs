mod map;
mod obstacle;
mod projectile;
mod tank;

// Re-export all public types
pub use map::{MapId, generate_obstacles};
pub use obstacle::{Obstacle, ObstacleKind};
pub use projectile::{Projectile, ProjectileOwner};
pub use tank::{Direction, Tank};
