use bevy::prelude::*;

pub mod clouds;
pub mod config;
pub mod effects;
pub mod effects_config;
pub mod environment;
pub mod particles;
pub mod selection;
pub mod sim_rng;
pub mod simulation_sets;
pub mod systems;
pub mod transition;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::WeatherSet;

use effects_config::EffectsConfig;
use environment::SceneEnvironment;
use selection::{SelectionRequest, WeatherSelection};
use sim_rng::SimRng;

/// Headless weather core: selection state, effect allocation, transitions,
/// and per-frame animation. Needs `Time` (from `MinimalPlugins` or
/// `DefaultPlugins`) but no renderer.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        simulation_sets::configure_sets(app);

        app.init_resource::<EffectsConfig>()
            .init_resource::<SimRng>()
            .init_resource::<WeatherSelection>()
            .init_resource::<SceneEnvironment>()
            .add_event::<SelectionRequest>()
            .add_systems(
                Startup,
                (sim_rng::seed_sim_rng, systems::allocate_weather_effects).chain(),
            )
            .add_systems(
                Update,
                (
                    systems::apply_selection_requests.in_set(WeatherSet::Input),
                    systems::animate_visible_effects.in_set(WeatherSet::Animate),
                ),
            );
    }
}
