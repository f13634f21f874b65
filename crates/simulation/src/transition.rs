//! Effect visibility state machine.
//!
//! Every transition runs the same three steps regardless of which axis
//! changed, so re-selecting the current value is harmless:
//!
//! ```text
//! hide all + clear fog  →  lighting pass  →  show weather effects + override
//! ```

use crate::effects::{EffectKind, WeatherEffects};
use crate::environment::{derive_environment, weather_override, EnvironmentState};
use crate::selection::{WeatherKind, WeatherSelection};

/// Effects shown for each weather. Foggy has no particle field; its look is
/// entirely scene fog.
pub fn visible_effects(weather: WeatherKind) -> &'static [EffectKind] {
    match weather {
        WeatherKind::Sunny => &[],
        WeatherKind::Cloudy => &[EffectKind::Clouds],
        WeatherKind::Rainy => &[EffectKind::Clouds, EffectKind::Rain],
        WeatherKind::Snowy => &[EffectKind::Snow],
        WeatherKind::Dusty => &[EffectKind::Dust],
        WeatherKind::Foggy => &[],
    }
}

/// Apply `selection` to the effects and return the environment to render.
pub fn apply_transition(
    selection: WeatherSelection,
    effects: &mut WeatherEffects,
    elapsed_secs: f32,
) -> EnvironmentState {
    effects.hide_all();

    let env = derive_environment(selection.time_of_day, selection.weather);

    for kind in visible_effects(selection.weather) {
        let effect = effects.effect_mut(*kind);
        effect.set_visible(true);
        effect.update(elapsed_secs);
    }

    env.with_override(weather_override(selection.weather))
}
