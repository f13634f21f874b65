//! Lighting, clear color, and scene fog derived from the current selection.
//!
//! Lighting depends only on the time of day, except that a sunny day is
//! brighter than any other daytime weather. Dusty and Foggy weather then
//! override the clear color and add scene fog on top of the lighting pass.

use bevy::prelude::*;

use crate::config::{DUST_TAN, FOG_GRAY, NIGHT_NAVY, SKY_BLUE};
use crate::selection::{TimeOfDay, WeatherKind};

/// Linear distance fog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogConfig {
    /// RGB hex.
    pub color: u32,
    /// Distance at which fog starts to blend in.
    pub near: f32,
    /// Distance at which geometry is fully fogged.
    pub far: f32,
}

/// Everything the renderer needs to light and clear the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentState {
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    /// RGB hex.
    pub clear_color: u32,
    pub fog: Option<FogConfig>,
}

/// Weather-specific replacement for the clear color plus the fog to enable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherOverride {
    pub clear_color: u32,
    pub fog: FogConfig,
}

/// Lighting pass: intensities and clear color from the selection, no fog.
///
/// Night ignores the weather entirely.
pub fn derive_environment(time_of_day: TimeOfDay, weather: WeatherKind) -> EnvironmentState {
    let (ambient_intensity, directional_intensity, clear_color) = match (time_of_day, weather) {
        (TimeOfDay::Night, _) => (0.3, 0.5, NIGHT_NAVY),
        (TimeOfDay::Day, WeatherKind::Sunny) => (1.0, 2.0, SKY_BLUE),
        (TimeOfDay::Day, _) => (0.7, 1.5, SKY_BLUE),
    };

    EnvironmentState {
        ambient_intensity,
        directional_intensity,
        clear_color,
        fog: None,
    }
}

/// Clear color and fog forced by the weather, if any.
pub fn weather_override(weather: WeatherKind) -> Option<WeatherOverride> {
    match weather {
        WeatherKind::Dusty => Some(WeatherOverride {
            clear_color: DUST_TAN,
            fog: FogConfig {
                color: DUST_TAN,
                near: 1.0,
                far: 30.0,
            },
        }),
        WeatherKind::Foggy => Some(WeatherOverride {
            clear_color: FOG_GRAY,
            fog: FogConfig {
                color: FOG_GRAY,
                near: 0.1,
                far: 20.0,
            },
        }),
        WeatherKind::Sunny | WeatherKind::Cloudy | WeatherKind::Rainy | WeatherKind::Snowy => {
            None
        }
    }
}

impl EnvironmentState {
    /// Replaces the clear color and enables the override's fog.
    pub fn with_override(mut self, weather_override: Option<WeatherOverride>) -> Self {
        if let Some(o) = weather_override {
            self.clear_color = o.clear_color;
            self.fog = Some(o.fog);
        }
        self
    }
}

/// The environment produced by the most recent transition.
///
/// The rendering layer mirrors this into lights, `ClearColor`, and camera fog.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deref)]
pub struct SceneEnvironment(pub EnvironmentState);

impl Default for SceneEnvironment {
    fn default() -> Self {
        Self(derive_environment(TimeOfDay::Day, WeatherKind::Sunny))
    }
}

/// Splits a `0xRRGGBB` value into 8-bit channels.
pub fn hex_to_rgb8(hex: u32) -> [u8; 3] {
    [
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    ]
}
