//! Looping point-cloud fields for rain, snow, and dust.
//!
//! A field is allocated once with a fixed number of points scattered through
//! its bounding volume. Every update moves each point by the field's
//! [`MotionRule`] and wraps points that leave the volume back to a spawn
//! boundary, so the population never changes.

pub mod field;
pub mod types;

pub use field::ParticleField;
pub use types::{FieldBounds, MotionRule, PointStyle};
