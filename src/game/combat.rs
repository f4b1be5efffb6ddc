//! Hit resolution: projectiles against tanks, tanks against the player.

use log::{debug, info};

use crate::entities::ProjectileOwner;
use super::{GameState, World};

/// Resolve all hits for this tick, in fixed order: player shots against
/// enemies, enemy shots against the player, then direct contact. Returns
/// the number of enemies destroyed.
///
/// Hits mark their victims and spent shots; everything marked is compacted
/// out afterwards by reverse-index removal, so no list is edited while it
/// is being scanned.
pub(super) fn resolve(world: &mut World) -> u32 {
    let mut spent_shots = Vec::new();
    let mut dead_enemies = Vec::new();
    let mut kills = 0;

    // Pass 1: player shots vs enemies. Each shot damages at most one enemy
    // per tick.
    for (shot_idx, shot) in world.projectiles.iter().enumerate() {
        if shot.owner != ProjectileOwner::Player {
            continue;
        }
        let shot_rect = shot.rect();
        for (enemy_idx, enemy) in world.enemies.iter_mut().enumerate() {
            // Dropped earlier this tick, waiting for compaction.
            if !enemy.is_alive() {
                continue;
            }
            if shot_rect.intersects(&enemy.rect()) {
                enemy.take_hit();
                spent_shots.push(shot_idx);
                if !enemy.is_alive() {
                    dead_enemies.push(enemy_idx);
                    world.score += 1;
                    kills += 1;
                    debug!("enemy destroyed, score={}", world.score);
                }
                break;
            }
        }
    }

    // Pass 2: enemy shots vs the player.
    let player_rect = world.player.rect();
    for (shot_idx, shot) in world.projectiles.iter().enumerate() {
        if shot.owner != ProjectileOwner::Enemy {
            continue;
        }
        if shot.rect().intersects(&player_rect) {
            world.player.take_hit();
            spent_shots.push(shot_idx);
            if !world.player.is_alive() {
                world.state = GameState::GameOver;
            }
        }
    }

    // Pass 3: ramming the player ends the game outright, whatever hit
    // points were left.
    for enemy in &world.enemies {
        if enemy.rect().intersects(&player_rect) {
            world.player.hp = 0;
            world.state = GameState::GameOver;
        }
    }

    if world.state == GameState::GameOver {
        info!("game over, final score={}", world.score);
    }

    // Remove in reverse order to avoid index issues
    spent_shots.sort_unstable();
    spent_shots.dedup();
    for idx in spent_shots.into_iter().rev() {
        world.projectiles.remove(idx);
    }

    dead_enemies.sort_unstable();
    dead_enemies.dedup();
    for idx in dead_enemies.into_iter().rev() {
        world.enemies.remove(idx);
    }

    kills
}
