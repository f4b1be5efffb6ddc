//! Firing, advancement, and culling of projectiles.

use rand::Rng;

use crate::consts::*;
use crate::entities::{Obstacle, Projectile, ProjectileOwner, Tank};

/// Fire the player's gun if the trigger is held and the cooldown has
/// expired, then run one tick of reload progress. Returns whether a shot
/// left the barrel.
pub(super) fn fire_player(
    player: &mut Tank,
    projectiles: &mut Vec<Projectile>,
    trigger_held: bool,
) -> bool {
    let mut fired = false;
    if trigger_held && player.can_fire() {
        let (cx, cy) = player.center();
        projectiles.push(Projectile::new(cx, cy, player.facing, ProjectileOwner::Player));
        player.arm_cooldown(PLAYER_FIRE_COOLDOWN);
        fired = true;
    }
    player.tick_cooldown();
    fired
}

/// Enemies fire the moment their cooldown expires, no trigger involved;
/// each shot redraws the next reload at random. Returns whether any enemy
/// fired.
pub(super) fn fire_enemies(
    enemies: &mut [Tank],
    projectiles: &mut Vec<Projectile>,
    rng: &mut impl Rng,
) -> bool {
    let mut fired = false;
    for enemy in enemies {
        if enemy.can_fire() {
            let (cx, cy) = enemy.center();
            projectiles.push(Projectile::new(cx, cy, enemy.facing, ProjectileOwner::Enemy));
            enemy.arm_cooldown(rng.random_range(ENEMY_RELOAD_MIN..ENEMY_RELOAD_MAX));
            fired = true;
        }
        enemy.tick_cooldown();
    }
    fired
}

/// Advance every projectile one step, then drop the ones that left the
/// field or struck an obstacle. This runs before combat resolution, so a
/// shot overlapping both an obstacle and a tank dies on the obstacle.
pub(super) fn advance_and_cull(projectiles: &mut Vec<Projectile>, obstacles: &[Obstacle]) {
    for projectile in projectiles.iter_mut() {
        projectile.advance();
    }
    projectiles.retain(|p| {
        !p.is_out_of_bounds() && !obstacles.iter().any(|o| o.rect().intersects(&p.rect()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Direction, ObstacleKind};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_player_fire_spawns_from_center_along_facing() {
        let mut player = Tank::player();
        player.facing = Direction::Right;
        let mut projectiles = Vec::new();

        assert!(fire_player(&mut player, &mut projectiles, true));
        assert_eq!(projectiles.len(), 1);

        let shot = &projectiles[0];
        let (cx, cy) = player.center();
        assert_eq!((shot.x, shot.y), (cx, cy));
        assert_eq!((shot.dx, shot.dy), (1.0, 0.0));
        assert_eq!(shot.owner, ProjectileOwner::Player);
    }

    #[test]
    fn test_player_fire_blocked_by_cooldown() {
        let mut player = Tank::player();
        let mut projectiles = Vec::new();

        assert!(fire_player(&mut player, &mut projectiles, true));
        assert!(!fire_player(&mut player, &mut projectiles, true));
        assert_eq!(projectiles.len(), 1);

        // Holding fire through the whole reload yields the next shot the
        // tick the cooldown runs out.
        let mut waited = 0;
        while !fire_player(&mut player, &mut projectiles, true) {
            waited += 1;
        }
        assert_eq!(projectiles.len(), 2);
        assert_eq!(waited, PLAYER_FIRE_COOLDOWN - 1);
    }

    #[test]
    fn test_player_trigger_released_is_a_no_op() {
        let mut player = Tank::player();
        let mut projectiles = Vec::new();
        assert!(!fire_player(&mut player, &mut projectiles, false));
        assert!(projectiles.is_empty());
        assert_eq!(player.cooldown, 0);
    }

    #[test]
    fn test_enemy_fires_when_cooldown_expires_and_redraws() {
        let mut enemies = vec![Tank::enemy(100.0, Direction::Down, 2)];
        let mut projectiles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(8);

        assert!(!fire_enemies(&mut enemies, &mut projectiles, &mut rng));
        assert!(!fire_enemies(&mut enemies, &mut projectiles, &mut rng));
        assert!(fire_enemies(&mut enemies, &mut projectiles, &mut rng));

        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].owner, ProjectileOwner::Enemy);
        let reload = enemies[0].cooldown;
        assert!(reload >= ENEMY_RELOAD_MIN - 1 && reload < ENEMY_RELOAD_MAX);
    }

    #[test]
    fn test_cull_on_obstacle_impact() {
        let mut projectiles = vec![Projectile::new(
            100.0,
            100.0,
            Direction::Down,
            ProjectileOwner::Player,
        )];
        let obstacle = Obstacle::new(90.0, 100.0, ObstacleKind::Brick);

        advance_and_cull(&mut projectiles, std::slice::from_ref(&obstacle));
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_cull_on_bounds_exit() {
        let mut projectiles = vec![Projectile::new(
            FIELD_WIDTH - 2.0,
            100.0,
            Direction::Right,
            ProjectileOwner::Player,
        )];
        advance_and_cull(&mut projectiles, &[]);
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_in_flight_shot_survives_cull() {
        let mut projectiles = vec![Projectile::new(
            100.0,
            100.0,
            Direction::Down,
            ProjectileOwner::Enemy,
        )];
        advance_and_cull(&mut projectiles, &[]);
        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].y, 100.0 + ENEMY_BULLET_SPEED);
    }
}
