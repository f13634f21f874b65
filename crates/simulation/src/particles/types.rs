use serde::{Deserialize, Serialize};

use crate::config::{
    DUST_CEILING, FIELD_HALF_EXTENT, PRECIPITATION_FLOOR, PRECIPITATION_TOP,
};

/// Per-field motion model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionRule {
    /// Straight fall; respawn at the top once below the floor.
    Rain,
    /// Fall with a time-driven lateral sway.
    Snow,
    /// Horizontal drift with vertical and depth churn; the whole field spins.
    Dust,
}

impl MotionRule {
    pub fn name(self) -> &'static str {
        match self {
            MotionRule::Rain => "rain",
            MotionRule::Snow => "snow",
            MotionRule::Dust => "dust",
        }
    }
}

/// Axis-aligned spawn volume. Each axis is `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub x: (f32, f32),
    pub y: (f32, f32),
    pub z: (f32, f32),
    /// Falling points below this height respawn at `y.1`.
    pub floor: f32,
}

impl FieldBounds {
    /// Default volume for a motion rule: 100 x 50 x 100 for precipitation,
    /// a 20-unit-high layer for dust.
    pub fn for_motion(motion: MotionRule) -> Self {
        let top = match motion {
            MotionRule::Rain | MotionRule::Snow => PRECIPITATION_TOP,
            MotionRule::Dust => DUST_CEILING,
        };
        Self {
            x: (-FIELD_HALF_EXTENT, FIELD_HALF_EXTENT),
            y: (0.0, top),
            z: (-FIELD_HALF_EXTENT, FIELD_HALF_EXTENT),
            floor: PRECIPITATION_FLOOR,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.x.0 < self.x.1 && self.y.0 < self.y.1 && self.z.0 < self.z.1 && self.floor < self.y.1
    }
}

/// How the points of a field are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    /// RGB hex.
    pub color: u32,
    pub size: f32,
    pub opacity: f32,
    /// When set, each point gets its own size drawn from `[min, max)`
    /// instead of `size`.
    #[serde(default)]
    pub size_range: Option<(f32, f32)>,
}
