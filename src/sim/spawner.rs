//! Enemy spawning
//!
//! One enemy at a time, on a frame cadence that slows down once the arena is
//! occupied. Kinds follow `ENEMY_ORDER`; placement depends on the kind.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{ENEMY_ORDER, ENEMY_PALETTE, Enemy, EnemyKind};
use crate::tuning::Tuning;

/// Whether an enemy should spawn on `frame` given `count` enemies alive
pub fn should_spawn(frame: u64, count: usize, tuning: &Tuning) -> bool {
    if count >= tuning.max_enemies {
        return false;
    }
    let slowdown = if count > 0 { tuning.spawn_slowdown.max(1) } else { 1 };
    frame % (tuning.spawn_base_rate.max(1) * slowdown) == 0
}

/// Kind of the enemy that would spawn next with `count` enemies alive
#[inline]
pub fn next_kind(count: usize) -> EnemyKind {
    ENEMY_ORDER[count % ENEMY_ORDER.len()]
}

/// Build the enemy that spawns when `count` enemies are alive
pub fn spawn_enemy(count: usize, tuning: &Tuning, rng: &mut impl RandomSource) -> Enemy {
    let kind = next_kind(count);
    let width = tuning.screen_width as i32;
    let height = tuning.screen_height as i32;
    let margin = tuning.spawn_edge_margin;

    let pos = if count == 0 {
        // First enemy always shows up near the top center
        let x = width / 2 + rng.range(-100, 100);
        let y = 100 + rng.range(-25, 25);
        Vec2::new(x as f32, y as f32)
    } else {
        match kind {
            EnemyKind::Shooter | EnemyKind::Dasher => {
                let left = rng.range(0, 1) == 1;
                let x = if left { margin } else { width - margin };
                let y = rng.range(margin, height - margin);
                Vec2::new(x as f32, y as f32)
            }
            EnemyKind::Homing => {
                let x = rng.range(margin, width - margin);
                let y = rng.range(margin, height - margin);
                Vec2::new(x as f32, y as f32)
            }
        }
    };

    let color = ENEMY_PALETTE[rng.range(0, ENEMY_PALETTE.len() as i32 - 1) as usize];

    log::debug!("Spawning {:?} #{} at ({}, {})", kind, count + 1, pos.x, pos.y);
    Enemy::new(kind, pos, color, tuning)
}
