//! The two independent selection axes: time of day and weather.
//!
//! Exactly one [`TimeOfDay`] and one [`WeatherKind`] are active at any time.
//! The UI never writes [`WeatherSelection`] directly; it sends a
//! [`SelectionRequest`] and the transition system applies it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 2] = [TimeOfDay::Day, TimeOfDay::Night];

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Day => "Day",
            TimeOfDay::Night => "Night",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TimeOfDay::Day => "☀",
            TimeOfDay::Night => "🌙",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherKind {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Dusty,
    Foggy,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 6] = [
        WeatherKind::Sunny,
        WeatherKind::Cloudy,
        WeatherKind::Rainy,
        WeatherKind::Snowy,
        WeatherKind::Dusty,
        WeatherKind::Foggy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeatherKind::Sunny => "Sunny",
            WeatherKind::Cloudy => "Cloudy",
            WeatherKind::Rainy => "Rainy",
            WeatherKind::Snowy => "Snowy",
            WeatherKind::Dusty => "Dusty",
            WeatherKind::Foggy => "Foggy",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WeatherKind::Sunny => "☀",
            WeatherKind::Cloudy => "☁",
            WeatherKind::Rainy => "🌧",
            WeatherKind::Snowy => "❄",
            WeatherKind::Dusty => "💨",
            WeatherKind::Foggy => "🌫",
        }
    }
}

/// The active time of day and weather.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSelection {
    pub time_of_day: TimeOfDay,
    pub weather: WeatherKind,
}

impl WeatherSelection {
    pub fn new(time_of_day: TimeOfDay, weather: WeatherKind) -> Self {
        Self {
            time_of_day,
            weather,
        }
    }

    /// Applies a request to the matching axis and leaves the other untouched.
    pub fn apply(&mut self, request: SelectionRequest) {
        match request {
            SelectionRequest::TimeOfDay(time_of_day) => self.time_of_day = time_of_day,
            SelectionRequest::Weather(weather) => self.weather = weather,
        }
    }
}

/// Sent by the selection panel (or tests) when a button is clicked.
///
/// Re-selecting the already active value is valid and re-runs the transition.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRequest {
    TimeOfDay(TimeOfDay),
    Weather(WeatherKind),
}
