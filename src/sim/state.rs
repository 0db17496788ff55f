//! World state and core simulation types
//!
//! Everything a renderer needs to draw a frame, and everything that must be
//! captured to replay a run, lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// RGBA color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const DARK_GREEN: Color = Color::rgb(0, 117, 44);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const VIOLET: Color = Color::rgb(135, 60, 190);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
}

/// Colors a freshly spawned enemy can take
pub const ENEMY_PALETTE: [Color; 3] = [Color::DARK_GREEN, Color::BLUE, Color::VIOLET];

/// Current status of the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldStatus {
    /// Active gameplay
    Running,
    /// Frozen until the pause toggle is pressed again
    Paused,
    /// Player died; a tap starts a new world
    GameOver,
}

/// Life state shared by the player and enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorState {
    Live,
    /// Cooling down; cannot fire or dash, and dies if the player touches it
    Reloading,
    Dead,
}

/// Enemy behaviours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Stationary, fires bullets at the player in rounds
    Shooter,
    /// Locks a heading toward the player and dashes until it leaves the inner bounds
    Dasher,
    /// Slowly follows the player, re-aiming every frame
    Homing,
}

/// Cyclic spawn order, indexed by the live enemy count
pub const ENEMY_ORDER: [EnemyKind; 4] = [
    EnemyKind::Shooter,
    EnemyKind::Dasher,
    EnemyKind::Homing,
    EnemyKind::Dasher,
];

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub color: Color,
    pub state: ActorState,
    /// Authoritative shield count; dropping below zero kills the player
    pub shield: i32,
}

impl Player {
    pub fn new(pos: Vec2, shield: i32) -> Self {
        Self {
            pos,
            color: Color::RED,
            state: ActorState::Live,
            shield,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state != ActorState::Dead
    }

    /// Shield count as shown on the HUD (never negative)
    #[inline]
    pub fn display_shield(&self) -> i32 {
        self.shield.max(0)
    }
}

/// An enemy entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner of the enemy's square
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub kind: EnemyKind,
    pub state: ActorState,
    /// Frames between shots
    pub fire_rate: u32,
    pub shots_fired: u32,
    pub shots_per_round: u32,
    /// Seconds left in the reloading state
    pub reload_timer: f32,
    /// Recent positions for rendering (newest first)
    #[serde(default)]
    pub trail: Vec<Vec2>,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2, color: Color, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            color,
            kind,
            state: ActorState::Live,
            fire_rate: tuning.fire_rate_initial,
            shots_fired: 0,
            shots_per_round: tuning.shots_per_round,
            reload_timer: 0.0,
            trail: Vec::with_capacity(tuning.enemy_trail_length),
        }
    }

    /// Bounding square used for every enemy collision test
    #[inline]
    pub fn rect(&self, size: f32) -> Rect {
        Rect::new(self.pos.x, self.pos.y, size, size)
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state == ActorState::Dead
    }

    /// Enter the reloading state for `duration` seconds
    pub fn start_reload(&mut self, duration: f32) {
        self.state = ActorState::Reloading;
        self.reload_timer = duration;
    }

    /// Record current position to trail (call each frame the enemy moves)
    pub fn record_trail(&mut self, max_len: usize) {
        if max_len == 0 {
            return;
        }
        self.trail.insert(0, self.pos);
        self.trail.truncate(max_len);
    }
}

/// A bullet in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
}

/// Something noteworthy that happened during a tick, for audio and UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Teleported { to: Vec2 },
    EnemySpawned { kind: EnemyKind, pos: Vec2 },
    BulletFired { from: Vec2 },
    ReloadStarted { kind: EnemyKind },
    PlayerHit { shield: i32 },
    /// Player touched a reloading enemy
    EnemyKilled { pos: Vec2 },
    /// Two enemies crashed into each other
    EnemiesCollided { a: Vec2, b: Vec2 },
    PlayerDied,
    WorldReset,
    Paused,
    Resumed,
}

/// Complete world state (serializable snapshot)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub player: Player,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub status: WorldStatus,
    /// Frames simulated while running
    pub frame: u64,
    pub score: f32,
}

impl World {
    /// Create a fresh world: player at the start position with full shields,
    /// nothing else on screen
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player: Player::new(tuning.player_start(), tuning.initial_shields),
            enemies: Vec::with_capacity(tuning.max_enemies),
            bullets: Vec::new(),
            status: WorldStatus::Running,
            frame: 0,
            score: 0.0,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == WorldStatus::Running
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status == WorldStatus::GameOver
    }

    /// Enemies that have not been killed this frame
    pub fn live_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| !e.is_dead()).count()
    }
}
