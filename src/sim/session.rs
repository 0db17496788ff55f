//! A playable run: world, tuning and the seeded RNG that drives spawning
//!
//! Serializing a session captures the RNG stream too, so a restored session
//! replays exactly what the uninterrupted session would have done.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rng::seeded;
use super::state::{GameEvent, World};
use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub world: World,
    rng: Pcg32,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("New session with seed {}", seed);
        let tuning = tuning.sanitized();
        Self {
            seed,
            world: World::new(&tuning),
            tuning,
            rng: seeded(seed),
        }
    }

    /// Advance one frame
    pub fn step(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        tick(&mut self.world, input, dt, &self.tuning, &mut self.rng)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore a snapshot. Tuning is sanitized the same way a tuning file is.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut session: Session = serde_json::from_str(json)?;
        session.tuning = session.tuning.sanitized();
        Ok(session)
    }
}
