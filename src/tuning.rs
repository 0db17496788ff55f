//! Game balance and tuning
//!
//! Every gameplay constant the simulation reads lives here so a run can be
//! re-balanced from a JSON file without recompiling.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::collision::Rect;

/// What happens when a bullet touches the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BulletHitPolicy {
    /// Each bullet hit costs one shield
    #[default]
    Shield,
    /// Any bullet hit ends the run
    Lethal,
}

impl BulletHitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulletHitPolicy::Shield => "Shield",
            BulletHitPolicy::Lethal => "Lethal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shield" | "shields" => Some(BulletHitPolicy::Shield),
            "lethal" => Some(BulletHitPolicy::Lethal),
            _ => None,
        }
    }
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    pub player_radius: f32,
    pub initial_shields: i32,
    pub player_start_offset_y: f32,

    // === Score ===
    pub score_per_frame: f32,
    pub kill_bonus: f32,
    pub self_kill_bonus: f32,

    // === Bullets ===
    pub bullet_radius: f32,
    pub bullet_velocity: f32,
    pub max_bullets: usize,
    pub bullet_bounds_margin: f32,
    pub bullet_hit: BulletHitPolicy,

    // === Shooter weapon ===
    pub fire_rate_initial: u32,
    pub fire_rate_floor: u32,
    pub fire_rate_rampup_interval: u64,
    pub shots_per_round: u32,

    // === Enemies ===
    pub max_enemies: usize,
    pub enemy_size: f32,
    pub enemy_trail_length: usize,
    pub dasher_velocity: f32,
    pub homing_velocity: f32,
    /// Seconds spent in the reloading state
    pub reload_time: f32,
    pub dasher_bounds_inset: f32,

    // === Spawner ===
    pub spawn_base_rate: u64,
    pub spawn_slowdown: u64,
    pub spawn_edge_margin: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_radius: PLAYER_RADIUS,
            initial_shields: INITIAL_PLAYER_SHIELDS,
            player_start_offset_y: PLAYER_START_OFFSET_Y,

            score_per_frame: SCORE_PER_FRAME,
            kill_bonus: ENEMY_KILL_BONUS,
            self_kill_bonus: ENEMY_SELF_KILL_BONUS,

            bullet_radius: BULLET_RADIUS,
            bullet_velocity: BULLET_VELOCITY,
            max_bullets: MAX_BULLETS,
            bullet_bounds_margin: BULLET_BOUNDS_MARGIN,
            bullet_hit: BulletHitPolicy::Shield,

            fire_rate_initial: FIRE_RATE_INITIAL,
            fire_rate_floor: FIRE_RATE_FLOOR,
            fire_rate_rampup_interval: FIRE_RATE_RAMPUP_INTERVAL,
            shots_per_round: RIFLE_SHOTS_PER_ROUND,

            max_enemies: MAX_ENEMIES,
            enemy_size: ENEMY_SIZE,
            enemy_trail_length: MAX_ENEMY_TRAIL,
            dasher_velocity: DASHER_VELOCITY,
            homing_velocity: HOMING_VELOCITY,
            reload_time: ENEMY_RELOAD_TIME,
            dasher_bounds_inset: DASHER_BOUNDS_INSET,

            spawn_base_rate: SPAWN_BASE_RATE,
            spawn_slowdown: SPAWN_SLOWDOWN,
            spawn_edge_margin: SPAWN_EDGE_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Serialize to pretty JSON (for writing a starter tuning file)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values the simulation divides by or indexes with
    pub fn sanitized(mut self) -> Self {
        self.fire_rate_floor = self.fire_rate_floor.max(1);
        self.fire_rate_initial = self.fire_rate_initial.max(self.fire_rate_floor);
        self.fire_rate_rampup_interval = self.fire_rate_rampup_interval.max(1);
        self.shots_per_round = self.shots_per_round.max(1);
        self.spawn_base_rate = self.spawn_base_rate.max(1);
        self.spawn_slowdown = self.spawn_slowdown.max(1);
        self.initial_shields = self.initial_shields.max(0);
        self.reload_time = self.reload_time.max(0.0);
        self.screen_width = self.screen_width.max(1.0);
        self.screen_height = self.screen_height.max(1.0);
        self
    }

    /// Where a fresh player appears
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            self.screen_width / 2.0,
            self.screen_height - self.player_start_offset_y,
        )
    }

    /// Region a dashing enemy must stay inside to keep moving
    pub fn dasher_bounds(&self) -> Rect {
        let inset = self.dasher_bounds_inset;
        Rect::new(
            inset,
            inset,
            self.screen_width - 2.0 * inset,
            self.screen_height - 2.0 * inset,
        )
    }

    /// Region outside of which bullets are discarded
    pub fn bullet_bounds(&self) -> Rect {
        let margin = self.bullet_bounds_margin;
        Rect::new(
            -margin,
            -margin,
            self.screen_width + 2.0 * margin,
            self.screen_height + 2.0 * margin,
        )
    }
}
