//! ECS systems driving the weather effects.

use bevy::prelude::*;

use crate::effects::{EffectKind, WeatherEffects};
use crate::effects_config::EffectsConfig;
use crate::environment::SceneEnvironment;
use crate::selection::{SelectionRequest, WeatherSelection};
use crate::sim_rng::SimRng;
use crate::transition::apply_transition;

/// Startup: allocate every effect once and apply the initial selection.
///
/// An invalid config is rejected here, before anything is allocated, and
/// replaced by the defaults.
pub fn allocate_weather_effects(
    mut commands: Commands,
    config: Res<EffectsConfig>,
    mut rng: ResMut<SimRng>,
    selection: Res<WeatherSelection>,
    time: Res<Time>,
) {
    let config = match config.validate() {
        Ok(()) => (*config).clone(),
        Err(e) => {
            warn!("Effects config rejected, using defaults: {}", e);
            let fallback = EffectsConfig::default();
            // seed_sim_rng already used the rejected seed.
            *rng = SimRng::from_seed_u64(fallback.seed);
            commands.insert_resource(fallback.clone());
            fallback
        }
    };

    let mut effects = WeatherEffects::from_config(&config, &mut rng.0);
    info!(
        "Allocated weather effects: rain={} snow={} dust={} clouds={}",
        effects.rain.len(),
        effects.snow.len(),
        effects.dust.len(),
        effects.clouds.instances().len()
    );

    let env = apply_transition(*selection, &mut effects, time.elapsed_secs());
    commands.insert_resource(effects);
    commands.insert_resource(SceneEnvironment(env));
}

/// Apply queued selection requests, running the full transition for each.
pub fn apply_selection_requests(
    mut requests: EventReader<SelectionRequest>,
    mut selection: ResMut<WeatherSelection>,
    mut effects: ResMut<WeatherEffects>,
    mut scene: ResMut<SceneEnvironment>,
    time: Res<Time>,
) {
    for request in requests.read() {
        selection.apply(*request);
        let env = apply_transition(*selection, &mut effects, time.elapsed_secs());
        debug!(
            "Transition to {:?}/{:?}: visible={:?} fog={:?}",
            selection.time_of_day,
            selection.weather,
            effects.visible_kinds(),
            env.fog
        );
        scene.set_if_neq(SceneEnvironment(env));
    }
}

/// Advance every visible effect once per frame.
pub fn animate_visible_effects(time: Res<Time>, mut effects: ResMut<WeatherEffects>) {
    if !EffectKind::ALL
        .iter()
        .any(|kind| effects.effect(*kind).is_visible())
    {
        return;
    }
    effects.update_visible(time.elapsed_secs());
}
