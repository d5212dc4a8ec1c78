//! Owned RNG for all gameplay randomness.
//!
//! Both random draws in the core (enemy-type roulette and event trials) go
//! through this resource, so seeding it makes a run deterministic given a
//! fixed dt sequence.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Game-wide random number generator.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl GameRng {
    /// A seeded generator for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}
