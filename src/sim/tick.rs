//! Per-frame world update
//!
//! Order within a running frame: input, collisions (bullet-player,
//! enemy-player, death check, enemy-enemy), spawn, enemy advance, cleanup.
//! Spawn cadence, fire cadence and the fire-rate ramp count frames; reload
//! timers count real seconds.

use glam::Vec2;

use super::collision::{self, Rect};
use super::rng::RandomSource;
use super::spawner;
use super::state::{ActorState, Bullet, Color, Enemy, EnemyKind, GameEvent, World, WorldStatus};
use crate::homing_velocity;
use crate::tuning::{BulletHitPolicy, Tuning};

/// Input polled for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tap position: teleports the player, or restarts after game over
    pub tap: Option<Vec2>,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the world by one frame, `dt` seconds after the previous one
pub fn tick(
    world: &mut World,
    input: &TickInput,
    dt: f32,
    tuning: &Tuning,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Handle pause toggle
    if input.pause {
        match world.status {
            WorldStatus::Running => {
                world.status = WorldStatus::Paused;
                log::info!("Paused at frame {}", world.frame);
                events.push(GameEvent::Paused);
                return events;
            }
            WorldStatus::Paused => {
                world.status = WorldStatus::Running;
                log::info!("Resumed at frame {}", world.frame);
                events.push(GameEvent::Resumed);
            }
            WorldStatus::GameOver => {}
        }
    }

    match world.status {
        WorldStatus::Paused => return events,
        WorldStatus::GameOver => {
            if input.tap.is_some() {
                *world = World::new(tuning);
                log::info!("World reset");
                events.push(GameEvent::WorldReset);
            }
            return events;
        }
        WorldStatus::Running => {}
    }

    let frame = world.frame;
    world.frame += 1;
    world.score += tuning.score_per_frame;

    // Tapping anywhere teleports the player there
    if let Some(to) = input.tap {
        if world.player.is_alive() {
            world.player.pos = to;
            events.push(GameEvent::Teleported { to });
        }
    }

    resolve_collisions(world, tuning, &mut events);

    if world.is_running() {
        let count = world.live_enemy_count();
        if spawner::should_spawn(frame, count, tuning) {
            let enemy = spawner::spawn_enemy(count, tuning, rng);
            events.push(GameEvent::EnemySpawned {
                kind: enemy.kind,
                pos: enemy.pos,
            });
            world.enemies.push(enemy);
        }

        advance_enemies(world, frame, dt, tuning, &mut events);
    }

    cleanup(world, tuning);

    events
}

/// Run the three collision passes and the death check
fn resolve_collisions(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let player_pos = world.player.pos;

    // Bullets
    let hits = collision::bullet_player_hits(
        player_pos,
        tuning.player_radius,
        &world.bullets,
        tuning.bullet_radius,
    );
    if hits > 0 {
        match tuning.bullet_hit {
            BulletHitPolicy::Shield => world.player.shield -= hits as i32,
            BulletHitPolicy::Lethal => world.player.shield = world.player.shield.min(-1),
        }
        events.push(GameEvent::PlayerHit {
            shield: world.player.shield,
        });
    }

    // Enemies touching the player: reloading ones die, the rest cost a shield
    let touching = collision::enemy_player_hits(
        player_pos,
        tuning.player_radius,
        &world.enemies,
        tuning.enemy_size,
    );
    for idx in touching {
        let enemy = &mut world.enemies[idx];
        if enemy.state == ActorState::Reloading {
            enemy.state = ActorState::Dead;
            let pos = enemy.pos;
            world.score += tuning.kill_bonus;
            events.push(GameEvent::EnemyKilled { pos });
        } else {
            world.player.shield -= 1;
            events.push(GameEvent::PlayerHit {
                shield: world.player.shield,
            });
        }
    }

    // Checked once, after every shield-affecting pass
    if world.player.shield < 0 && world.player.is_alive() {
        world.player.state = ActorState::Dead;
        world.status = WorldStatus::GameOver;
        log::info!(
            "Game over at frame {} with score {:.0}",
            world.frame,
            world.score
        );
        events.push(GameEvent::PlayerDied);
    }

    // Enemies crashing into each other: both die, one bonus per pair
    for (i, j) in collision::enemy_enemy_pairs(&world.enemies, tuning.enemy_size) {
        world.enemies[i].state = ActorState::Dead;
        world.enemies[j].state = ActorState::Dead;
        world.score += tuning.self_kill_bonus;
        events.push(GameEvent::EnemiesCollided {
            a: world.enemies[i].pos,
            b: world.enemies[j].pos,
        });
    }
}

/// Reload countdowns, then kind-specific behaviour for every active enemy
fn advance_enemies(
    world: &mut World,
    frame: u64,
    dt: f32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let player_pos = world.player.pos;
    let dasher_bounds = tuning.dasher_bounds();

    for enemy in world.enemies.iter_mut() {
        if enemy.is_dead() {
            continue;
        }

        if enemy.state == ActorState::Reloading {
            enemy.reload_timer -= dt;
            if enemy.reload_timer > 0.0 {
                continue;
            }
            enemy.state = ActorState::Live;
            log::debug!("{:?} finished reloading at frame {}", enemy.kind, frame);
        }

        match enemy.kind {
            EnemyKind::Shooter => {
                advance_shooter(enemy, frame, player_pos, &mut world.bullets, tuning, events)
            }
            EnemyKind::Dasher => advance_dasher(enemy, player_pos, &dasher_bounds, tuning, events),
            EnemyKind::Homing => advance_homing(enemy, player_pos, tuning),
        }
    }
}

/// Fire on cadence, reload after a full round, ramp up the fire rate
fn advance_shooter(
    enemy: &mut Enemy,
    frame: u64,
    player_pos: Vec2,
    bullets: &mut Vec<Bullet>,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let fire_rate = u64::from(enemy.fire_rate.max(1));
    if frame % fire_rate == 0 {
        // A full bullet list drops the shot
        if bullets.len() < tuning.max_bullets {
            enemy.shots_fired += 1;
            bullets.push(Bullet {
                pos: enemy.pos,
                vel: homing_velocity(player_pos, enemy.pos, tuning.bullet_velocity),
                color: Color::BLACK,
            });
            events.push(GameEvent::BulletFired { from: enemy.pos });
        }

        if enemy.shots_fired >= enemy.shots_per_round {
            enemy.shots_fired = 0;
            enemy.start_reload(tuning.reload_time);
            log::debug!("Shooter reloading at frame {}", frame);
            events.push(GameEvent::ReloadStarted {
                kind: EnemyKind::Shooter,
            });
        }
    }

    // Ramp only once a full interval has passed
    let ramp_interval = tuning.fire_rate_rampup_interval.max(1);
    if frame > 0 && frame % ramp_interval == 0 {
        enemy.fire_rate = enemy
            .fire_rate
            .saturating_sub(1)
            .max(tuning.fire_rate_floor);
    }
}

/// Lock a heading once, dash until the square leaves the inner bounds
fn advance_dasher(
    enemy: &mut Enemy,
    player_pos: Vec2,
    bounds: &Rect,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    if enemy.vel == Vec2::ZERO {
        enemy.vel = homing_velocity(player_pos, enemy.pos, tuning.dasher_velocity);
    } else if !enemy.rect(tuning.enemy_size).intersects(bounds) {
        enemy.vel = Vec2::ZERO;
        enemy.start_reload(tuning.reload_time);
        log::debug!("Dasher left bounds at ({}, {})", enemy.pos.x, enemy.pos.y);
        events.push(GameEvent::ReloadStarted {
            kind: EnemyKind::Dasher,
        });
    }

    if enemy.vel != Vec2::ZERO {
        enemy.pos += enemy.vel;
        enemy.record_trail(tuning.enemy_trail_length);
    }
}

/// Re-aim at the player every frame and step toward it
fn advance_homing(enemy: &mut Enemy, player_pos: Vec2, tuning: &Tuning) {
    enemy.vel = homing_velocity(player_pos, enemy.pos, tuning.homing_velocity);
    enemy.pos += enemy.vel;
    enemy.record_trail(tuning.enemy_trail_length);
}

/// Drop dead enemies, then drop out-of-bounds bullets and move the rest
fn cleanup(world: &mut World, tuning: &Tuning) {
    world.enemies.retain(|e| !e.is_dead());

    let bounds = tuning.bullet_bounds();
    world.bullets.retain_mut(|bullet| {
        if !bounds.contains_point(bullet.pos) {
            return false;
        }
        bullet.pos += bullet.vel;
        true
    });
}
