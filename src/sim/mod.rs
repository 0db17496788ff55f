//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per frame, nothing runs between ticks
//! - Injected, seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap, circles_overlap};
pub use rng::{RandomSource, seeded};
pub use session::Session;
pub use state::{
    ActorState, Bullet, Color, ENEMY_ORDER, ENEMY_PALETTE, Enemy, EnemyKind, GameEvent, Player,
    World, WorldStatus,
};
pub use tick::{TickInput, tick};
