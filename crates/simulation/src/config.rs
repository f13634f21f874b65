//! Fixed constants for the effect volume, motion rules, and scene lighting.
//!
//! Anything a player or tester might want to tune (particle counts, velocity
//! ranges, point styles, cloud population) lives in
//! [`EffectsConfig`](crate::effects_config::EffectsConfig) instead.

/// Half-extent of the effect volume on the X and Z axes. Fields span
/// `[-FIELD_HALF_EXTENT, FIELD_HALF_EXTENT]`.
pub const FIELD_HALF_EXTENT: f32 = 50.0;

/// Top of the rain and snow spawn volume; falling points respawn here.
pub const PRECIPITATION_TOP: f32 = 50.0;

/// Falling points below this height are moved back to `PRECIPITATION_TOP`.
pub const PRECIPITATION_FLOOR: f32 = -2.0;

/// Dust hovers between the ground and this height.
pub const DUST_CEILING: f32 = 20.0;

/// Amplitude of the lateral snow sway per update.
pub const SNOW_SWAY_AMPLITUDE: f32 = 0.01;

/// Amplitude of the vertical and depth dust churn per update.
pub const DUST_CHURN_AMPLITUDE: f32 = 0.02;

/// Yaw added to the dust field and to every cloud instance per update (radians).
pub const SPIN_PER_UPDATE: f32 = 0.001;

// ---------------------------------------------------------------------------
// Clouds
// ---------------------------------------------------------------------------

/// Cloud instances drift along +X by this much per update.
pub const CLOUD_DRIFT_PER_UPDATE: f32 = 0.02;

/// Radii of the puffs that make up one cloud, largest first.
pub const CLOUD_PUFF_RADII: [f32; 4] = [1.0, 0.8, 0.7, 0.6];

/// Cloud altitude band `[min, max)`.
pub const CLOUD_ALTITUDE: (f32, f32) = (15.0, 20.0);

/// Horizontal cloud scale band `[min, max)`.
pub const CLOUD_SCALE: (f32, f32) = (2.0, 5.0);

/// Vertical scale as a fraction of the horizontal scale (flattened look).
pub const CLOUD_VERTICAL_SQUASH: f32 = 0.6;

/// Puff color (RGB hex).
pub const CLOUD_COLOR: u32 = 0xEEEEEE;

/// Puff opacity.
pub const CLOUD_OPACITY: f32 = 0.8;

// ---------------------------------------------------------------------------
// Sky and lighting
// ---------------------------------------------------------------------------

pub const SKY_BLUE: u32 = 0x87CEEB;
pub const NIGHT_NAVY: u32 = 0x000022;
pub const DUST_TAN: u32 = 0xD2B48C;
pub const FOG_GRAY: u32 = 0xCCCCCC;

/// Ambient brightness per unit of ambient intensity.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 300.0;

/// Directional illuminance (lux) per unit of directional intensity.
pub const SUN_ILLUMINANCE_PER_UNIT: f32 = 5000.0;
