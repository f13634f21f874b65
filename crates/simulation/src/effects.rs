//! Pre-allocated weather effects and the common update contract.

use bevy::prelude::*;
use rand::Rng;

use crate::clouds::CloudField;
use crate::effects_config::EffectsConfig;
use crate::particles::{FieldBounds, MotionRule, ParticleField};

/// Anything the transition system can show, hide, and advance.
pub trait Updatable {
    /// Advance one step. `elapsed_secs` is the time since startup.
    fn update(&mut self, elapsed_secs: f32);
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EffectKind {
    Rain,
    Snow,
    Clouds,
    Dust,
}

impl EffectKind {
    pub const ALL: [EffectKind; 4] = [
        EffectKind::Rain,
        EffectKind::Snow,
        EffectKind::Clouds,
        EffectKind::Dust,
    ];
}

/// Every effect object, allocated once at startup and toggled afterwards.
#[derive(Resource, Debug, Clone)]
pub struct WeatherEffects {
    pub rain: ParticleField,
    pub snow: ParticleField,
    pub dust: ParticleField,
    pub clouds: CloudField,
}

impl WeatherEffects {
    pub fn from_config(config: &EffectsConfig, rng: &mut impl Rng) -> Self {
        let mut field = |motion: MotionRule| {
            let params = config.params(motion);
            ParticleField::create(
                motion,
                params.count,
                FieldBounds::for_motion(motion),
                params.velocity,
                params.style,
                rng,
            )
        };
        let rain = field(MotionRule::Rain);
        let snow = field(MotionRule::Snow);
        let dust = field(MotionRule::Dust);
        let clouds = CloudField::create(config.cloud_count, rng);

        Self {
            rain,
            snow,
            dust,
            clouds,
        }
    }

    pub fn effect(&self, kind: EffectKind) -> &dyn Updatable {
        match kind {
            EffectKind::Rain => &self.rain,
            EffectKind::Snow => &self.snow,
            EffectKind::Clouds => &self.clouds,
            EffectKind::Dust => &self.dust,
        }
    }

    pub fn effect_mut(&mut self, kind: EffectKind) -> &mut dyn Updatable {
        match kind {
            EffectKind::Rain => &mut self.rain,
            EffectKind::Snow => &mut self.snow,
            EffectKind::Clouds => &mut self.clouds,
            EffectKind::Dust => &mut self.dust,
        }
    }

    /// Particle field for a particle effect; `None` for clouds.
    pub fn particle_field(&self, kind: EffectKind) -> Option<&ParticleField> {
        match kind {
            EffectKind::Rain => Some(&self.rain),
            EffectKind::Snow => Some(&self.snow),
            EffectKind::Dust => Some(&self.dust),
            EffectKind::Clouds => None,
        }
    }

    pub fn hide_all(&mut self) {
        for kind in EffectKind::ALL {
            self.effect_mut(kind).set_visible(false);
        }
    }

    pub fn visible_kinds(&self) -> Vec<EffectKind> {
        EffectKind::ALL
            .into_iter()
            .filter(|kind| self.effect(*kind).is_visible())
            .collect()
    }

    /// Advance every visible effect by one step.
    pub fn update_visible(&mut self, elapsed_secs: f32) {
        for kind in EffectKind::ALL {
            let effect = self.effect_mut(kind);
            if effect.is_visible() {
                effect.update(elapsed_secs);
            }
        }
    }
}
