//! Deterministic RNG for effect allocation.
//!
//! Wraps `ChaCha8Rng` so that identical seeds scatter particles and clouds
//! identically on every platform.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::effects_config::{EffectsConfig, DEFAULT_SEED};

/// Systems that need randomness take `ResMut<SimRng>` and use `rng.0`.
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl SimRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Startup: reseed from the active config so a custom `seed` takes effect.
pub fn seed_sim_rng(config: Res<EffectsConfig>, mut rng: ResMut<SimRng>) {
    *rng = SimRng::from_seed_u64(config.seed);
}
