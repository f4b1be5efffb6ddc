//! Player movement and enemy steering.

use rand::Rng;

use crate::consts::*;
use crate::entities::{Direction, Obstacle, Tank};
use super::TickInput;

/// Move the player by the held axes, clamp into the field, then roll the
/// whole move back if the new rectangle clips any obstacle.
///
/// Axes apply in the fixed order up, down, left, right; each applied axis
/// also sets the facing, so the last one in that order wins the turret.
pub(super) fn step_player(player: &mut Tank, input: &TickInput, obstacles: &[Obstacle]) {
    let (prev_x, prev_y) = (player.x, player.y);

    if input.up {
        player.y -= PLAYER_SPEED;
        player.facing = Direction::Up;
    }
    if input.down {
        player.y += PLAYER_SPEED;
        player.facing = Direction::Down;
    }
    if input.left {
        player.x -= PLAYER_SPEED;
        player.facing = Direction::Left;
    }
    if input.right {
        player.x += PLAYER_SPEED;
        player.facing = Direction::Right;
    }

    player.x = player.x.clamp(0.0, FIELD_WIDTH - TANK_SIZE);
    player.y = player.y.clamp(0.0, FIELD_HEIGHT - TANK_SIZE);

    // All-or-nothing: a blocked move reverts both axes, no wall sliding.
    if hits_obstacle(player, obstacles) {
        player.x = prev_x;
        player.y = prev_y;
    }
}

/// Advance every enemy along its facing, with random turns, edge
/// reflection, and rollback-plus-redirect on obstacle contact.
pub(super) fn steer_enemies(enemies: &mut [Tank], obstacles: &[Obstacle], rng: &mut impl Rng) {
    for enemy in enemies {
        let (prev_x, prev_y) = (enemy.x, enemy.y);
        let (dx, dy) = enemy.facing.delta();
        enemy.x += dx * ENEMY_SPEED;
        enemy.y += dy * ENEMY_SPEED;

        // Restlessness, independent of whatever the move ran into.
        if rng.random_bool(ENEMY_TURN_CHANCE) {
            enemy.facing = random_steer(rng);
        }

        if enemy.x < 0.0 {
            enemy.x = 0.0;
            enemy.facing = Direction::Right;
        }
        if enemy.x > FIELD_WIDTH - TANK_SIZE {
            enemy.x = FIELD_WIDTH - TANK_SIZE;
            enemy.facing = Direction::Left;
        }
        if enemy.y > FIELD_HEIGHT - TANK_SIZE {
            enemy.y = FIELD_HEIGHT - TANK_SIZE;
            enemy.facing = Direction::Down;
        }

        // The forced redraw keeps a blocked enemy from grinding against the
        // same obstacle forever.
        if hits_obstacle(enemy, obstacles) {
            enemy.x = prev_x;
            enemy.y = prev_y;
            enemy.facing = random_steer(rng);
        }
    }
}

/// Enemies only advance toward the player's side or sideways, never up.
pub(super) fn random_steer(rng: &mut impl Rng) -> Direction {
    match rng.random_range(0..3) {
        0 => Direction::Down,
        1 => Direction::Left,
        _ => Direction::Right,
    }
}

fn hits_obstacle(tank: &Tank, obstacles: &[Obstacle]) -> bool {
    let rect = tank.rect();
    obstacles.iter().any(|o| o.rect().intersects(&rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ObstacleKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput { up, down, left, right, fire: false }
    }

    #[test]
    fn test_player_moves_by_fixed_step() {
        let mut player = Tank::player();
        step_player(&mut player, &held(true, false, false, false), &[]);
        assert_eq!(player.y, PLAYER_SPAWN_Y - PLAYER_SPEED);
        assert_eq!(player.facing, Direction::Up);
    }

    #[test]
    fn test_diagonal_is_the_sum_of_both_axes() {
        let mut player = Tank::player();
        step_player(&mut player, &held(true, false, true, false), &[]);
        assert_eq!(player.x, PLAYER_SPAWN_X - PLAYER_SPEED);
        assert_eq!(player.y, PLAYER_SPAWN_Y - PLAYER_SPEED);
        // Left is applied after up, so it decides the facing.
        assert_eq!(player.facing, Direction::Left);
    }

    #[test]
    fn test_opposed_axes_cancel() {
        let mut player = Tank::player();
        step_player(&mut player, &held(true, true, false, false), &[]);
        assert_eq!(player.y, PLAYER_SPAWN_Y);
        assert_eq!(player.facing, Direction::Down);
    }

    #[test]
    fn test_player_clamped_to_field() {
        let mut player = Tank::player();
        player.x = 0.5;
        step_player(&mut player, &held(false, false, true, false), &[]);
        assert_eq!(player.x, 0.0);

        player.x = FIELD_WIDTH - TANK_SIZE - 0.5;
        step_player(&mut player, &held(false, false, false, true), &[]);
        assert_eq!(player.x, FIELD_WIDTH - TANK_SIZE);
    }

    #[test]
    fn test_blocked_move_rolls_back_both_axes() {
        let mut player = Tank::player();
        player.x = 100.0;
        player.y = 100.0;
        // Dead ahead, one step up clips it.
        let wall = Obstacle::new(100.0, 100.0 - TANK_SIZE - 1.0, ObstacleKind::Brick);

        step_player(&mut player, &held(true, false, true, false), &[wall]);
        assert_eq!((player.x, player.y), (100.0, 100.0));
    }

    #[test]
    fn test_enemy_advances_along_facing() {
        let mut enemies = vec![Tank::enemy(100.0, Direction::Down, 0)];
        let mut rng = Pcg32::seed_from_u64(3);
        let y0 = enemies[0].y;
        steer_enemies(&mut enemies, &[], &mut rng);
        assert!(enemies[0].y > y0);
    }

    #[test]
    fn test_enemy_reflects_off_left_edge() {
        let mut enemies = vec![Tank::enemy(0.5, Direction::Left, 0)];
        let mut rng = Pcg32::seed_from_u64(4);
        steer_enemies(&mut enemies, &[], &mut rng);
        assert_eq!(enemies[0].x, 0.0);
        assert_eq!(enemies[0].facing, Direction::Right);
    }

    #[test]
    fn test_enemy_blocked_by_obstacle_redirects() {
        let mut enemies = vec![Tank::enemy(100.0, Direction::Down, 0)];
        let start_y = enemies[0].y;
        let wall = Obstacle::new(100.0, start_y + TANK_SIZE + 1.0, ObstacleKind::Steel);
        let mut rng = Pcg32::seed_from_u64(5);
        steer_enemies(&mut enemies, std::slice::from_ref(&wall), &mut rng);
        assert_eq!(enemies[0].y, start_y);
        assert_ne!(enemies[0].facing, Direction::Up);
    }

    #[test]
    fn test_random_steer_never_points_up() {
        let mut rng = Pcg32::seed_from_u64(6);
        for _ in 0..200 {
            assert_ne!(random_steer(&mut rng), Direction::Up);
        }
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_player_stays_in_bounds(
                moves in prop::collection::vec((prop::bool::ANY, prop::bool::ANY, prop::bool::ANY, prop::bool::ANY), 0..300)
            ) {
                let mut player = Tank::player();
                for (up, down, left, right) in moves {
                    step_player(&mut player, &held(up, down, left, right), &[]);
                    prop_assert!(player.x >= 0.0 && player.x <= FIELD_WIDTH - TANK_SIZE);
                    prop_assert!(player.y >= 0.0 && player.y <= FIELD_HEIGHT - TANK_SIZE);
                }
            }

            #[test]
            fn test_enemies_stay_in_bounds(seed in 0u64..64, ticks in 1usize..400) {
                let mut rng = Pcg32::seed_from_u64(seed);
                let mut enemies = vec![
                    Tank::enemy(10.0, Direction::Left, 0),
                    Tank::enemy(700.0, Direction::Right, 0),
                    Tank::enemy(350.0, Direction::Down, 0),
                ];
                for _ in 0..ticks {
                    steer_enemies(&mut enemies, &[], &mut rng);
                }
                for enemy in &enemies {
                    prop_assert!(enemy.x >= 0.0 && enemy.x <= FIELD_WIDTH - TANK_SIZE);
                    prop_assert!(enemy.y >= 0.0 && enemy.y <= FIELD_HEIGHT - TANK_SIZE);
                }
            }
        }
    }
}
