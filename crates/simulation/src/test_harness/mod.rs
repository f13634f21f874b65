//! # TestSky: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so transitions and animation
//! can be driven without a window or renderer.

mod assertions;
mod queries;

use bevy::app::App;
use bevy::prelude::*;

use crate::effects_config::EffectsConfig;
use crate::selection::{SelectionRequest, TimeOfDay, WeatherKind};
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestSky {
    app: App,
}

impl TestSky {
    /// Small particle populations, default styles and ranges.
    pub fn new() -> Self {
        Self::with_config(EffectsConfig::small())
    }

    pub fn with_config(config: EffectsConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Insert BEFORE SimulationPlugin so init_resource keeps it.
        app.insert_resource(config);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems allocate the effects.
        app.update();

        Self { app }
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Send a request and run one frame so it is applied.
    pub fn request(&mut self, request: SelectionRequest) -> &mut Self {
        self.app.world_mut().send_event(request);
        self.app.update();
        self
    }

    pub fn select_weather(&mut self, weather: WeatherKind) -> &mut Self {
        self.request(SelectionRequest::Weather(weather))
    }

    pub fn select_time(&mut self, time_of_day: TimeOfDay) -> &mut Self {
        self.request(SelectionRequest::TimeOfDay(time_of_day))
    }

    /// Run N frames.
    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }
}

impl Default for TestSky {
    fn default() -> Self {
        Self::new()
    }
}
