//! Dodge Machina - an arcade dodging game
//!
//! Core modules:
//! - `sim`: Deterministic world simulation (spawning, weapons, collisions, score)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::{BulletHitPolicy, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the simulation is tuned for
    pub const FRAME_RATE: u32 = 60;
    /// Fixed frame duration in seconds
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

    /// Logical canvas dimensions
    pub const SCREEN_WIDTH: f32 = 540.0;
    pub const SCREEN_HEIGHT: f32 = 960.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const INITIAL_PLAYER_SHIELDS: i32 = 3;
    /// Player starts this far above the bottom edge
    pub const PLAYER_START_OFFSET_Y: f32 = 200.0;

    /// Score
    pub const SCORE_PER_FRAME: f32 = 0.20;
    /// Awarded for touching a reloading enemy
    pub const ENEMY_KILL_BONUS: f32 = 50.0;
    /// Awarded per pair of enemies that crash into each other
    pub const ENEMY_SELF_KILL_BONUS: f32 = 100.0;

    /// Bullets
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_VELOCITY: f32 = 5.0;
    pub const MAX_BULLETS: usize = 100;
    /// Frames between shots for a fresh shooter
    pub const FIRE_RATE_INITIAL: u32 = 20;
    /// Fastest a shooter can ever fire
    pub const FIRE_RATE_FLOOR: u32 = 10;
    /// Fire rate drops by one frame every this many frames
    pub const FIRE_RATE_RAMPUP_INTERVAL: u64 = 300;
    pub const RIFLE_SHOTS_PER_ROUND: u32 = 25;

    /// Enemies
    pub const MAX_ENEMIES: usize = 4;
    pub const MAX_ENEMY_TRAIL: usize = 10;
    pub const ENEMY_SIZE: f32 = 20.0;
    pub const DASHER_VELOCITY: f32 = 8.0;
    pub const HOMING_VELOCITY: f32 = 2.0;
    /// Seconds an enemy spends reloading
    pub const ENEMY_RELOAD_TIME: f32 = 1.5;

    /// Spawn cadence in frames while the arena is empty
    pub const SPAWN_BASE_RATE: u64 = FRAME_RATE as u64;
    /// Cadence multiplier once at least one enemy is alive
    pub const SPAWN_SLOWDOWN: u64 = 5;

    /// Dashers stop once they leave the canvas shrunk by this inset
    pub const DASHER_BOUNDS_INSET: f32 = 50.0;
    /// Bullets are dropped once they leave the canvas grown by this margin
    pub const BULLET_BOUNDS_MARGIN: f32 = 50.0;
    /// Edge distance used when placing spawned enemies
    pub const SPAWN_EDGE_MARGIN: i32 = 50;
}

/// Angle (radians) of the vector pointing from `source` to `target`
#[inline]
pub fn coordinate_angle(target: Vec2, source: Vec2) -> f32 {
    (target.y - source.y).atan2(target.x - source.x)
}

/// Velocity of magnitude `speed` heading from `source` toward `target`
#[inline]
pub fn homing_velocity(target: Vec2, source: Vec2, speed: f32) -> Vec2 {
    let angle = coordinate_angle(target, source);
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homing_velocity_points_at_target() {
        let vel = homing_velocity(Vec2::new(100.0, 0.0), Vec2::ZERO, 5.0);
        assert!((vel.x - 5.0).abs() < 1e-5);
        assert!(vel.y.abs() < 1e-5);

        let vel = homing_velocity(Vec2::new(0.0, 0.0), Vec2::new(0.0, 50.0), 2.0);
        assert!(vel.x.abs() < 1e-5);
        assert!((vel.y + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_homing_velocity_magnitude() {
        let vel = homing_velocity(Vec2::new(270.0, 760.0), Vec2::new(50.0, 123.0), 8.0);
        assert!((vel.length() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_homing_velocity_coincident_points() {
        // atan2(0, 0) is 0, so the vector points along +x
        let vel = homing_velocity(Vec2::splat(10.0), Vec2::splat(10.0), 3.0);
        assert!((vel.x - 3.0).abs() < 1e-5);
        assert!(vel.y.abs() < 1e-5);
    }
}
