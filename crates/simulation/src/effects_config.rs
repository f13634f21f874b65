//! Runtime-tunable effect parameters.
//!
//! Extracts particle counts, velocity ranges, point styles, and the cloud
//! population into a single [`EffectsConfig`] resource. Insert a custom value
//! before adding `SimulationPlugin` to override the defaults, or point the
//! `SKYCAST_CONFIG` environment variable at a JSON file.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::particles::{MotionRule, PointStyle};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKYCAST_CONFIG";

/// Default RNG seed for effect allocation.
pub const DEFAULT_SEED: u64 = 42;

/// Allocation parameters for one particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleFieldParams {
    pub count: usize,
    /// Per-update speed drawn uniformly from `[min, max)`.
    pub velocity: (f32, f32),
    pub style: PointStyle,
}

impl ParticleFieldParams {
    fn validate(&self, motion: MotionRule) -> Result<(), String> {
        let name = motion.name();
        let (lo, hi) = self.velocity;
        // Wrapping only handles motion in the rule's direction, so speeds
        // must be non-negative and the range non-empty.
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo < hi) {
            return Err(format!("{name}: invalid velocity range [{lo}, {hi})"));
        }
        if !(self.style.size > 0.0 && self.style.size.is_finite()) {
            return Err(format!("{name}: point size must be positive"));
        }
        if let Some((min, max)) = self.style.size_range {
            if !(min > 0.0 && min <= max && max.is_finite()) {
                return Err(format!("{name}: invalid size range [{min}, {max})"));
            }
        }
        if !(0.0..=1.0).contains(&self.style.opacity) {
            return Err(format!(
                "{name}: opacity {} outside [0, 1]",
                self.style.opacity
            ));
        }
        Ok(())
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub seed: u64,
    pub rain: ParticleFieldParams,
    pub snow: ParticleFieldParams,
    pub dust: ParticleFieldParams,
    pub cloud_count: usize,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rain: ParticleFieldParams {
                count: 15_000,
                velocity: (0.1, 0.4),
                style: PointStyle {
                    color: 0xAAAAAA,
                    size: 0.1,
                    opacity: 0.6,
                    size_range: None,
                },
            },
            snow: ParticleFieldParams {
                count: 10_000,
                velocity: (0.02, 0.12),
                style: PointStyle {
                    color: 0xFFFFFF,
                    size: 0.2,
                    opacity: 0.8,
                    size_range: None,
                },
            },
            dust: ParticleFieldParams {
                count: 15_000,
                velocity: (0.1, 0.3),
                style: PointStyle {
                    color: 0xD2B48C,
                    size: 0.2,
                    opacity: 0.6,
                    size_range: Some((0.1, 0.3)),
                },
            },
            cloud_count: 30,
        }
    }
}

impl EffectsConfig {
    /// Same styles and ranges as the default, with small populations.
    /// Used by headless tests and benches.
    pub fn small() -> Self {
        let mut config = Self::default();
        config.rain.count = 300;
        config.snow.count = 200;
        config.dust.count = 300;
        config.cloud_count = 5;
        config
    }

    pub fn params(&self, motion: MotionRule) -> &ParticleFieldParams {
        match motion {
            MotionRule::Rain => &self.rain,
            MotionRule::Snow => &self.snow,
            MotionRule::Dust => &self.dust,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for motion in [MotionRule::Rain, MotionRule::Snow, MotionRule::Dust] {
            self.params(motion).validate(motion)?;
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("JSON decode error: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by `SKYCAST_CONFIG`, falling back to the
    /// defaults (with a warning) when the file is missing or invalid.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load_from_path(Path::new(&path)) {
            Ok(config) => {
                info!("Loaded effects config from {}", path);
                config
            }
            Err(e) => {
                warn!("Effects config rejected, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
