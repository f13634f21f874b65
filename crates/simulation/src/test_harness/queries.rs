//! Read-only queries for `TestSky`.

use crate::effects::{EffectKind, WeatherEffects};
use crate::effects_config::EffectsConfig;
use crate::environment::{EnvironmentState, SceneEnvironment};
use crate::selection::WeatherSelection;

use super::TestSky;

impl TestSky {
    pub fn selection(&self) -> WeatherSelection {
        *self.world().resource::<WeatherSelection>()
    }

    pub fn environment(&self) -> EnvironmentState {
        self.world().resource::<SceneEnvironment>().0
    }

    pub fn effects(&self) -> &WeatherEffects {
        self.world().resource::<WeatherEffects>()
    }

    pub fn config(&self) -> &EffectsConfig {
        self.world().resource::<EffectsConfig>()
    }

    pub fn visible_effects(&self) -> Vec<EffectKind> {
        self.effects().visible_kinds()
    }
}
