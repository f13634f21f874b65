use bevy::prelude::*;
use rand::Rng;

use crate::config::{DUST_CHURN_AMPLITUDE, SNOW_SWAY_AMPLITUDE, SPIN_PER_UPDATE};
use crate::effects::Updatable;

use super::types::{FieldBounds, MotionRule, PointStyle};

/// Fixed-population point cloud. Points are never added or removed after
/// [`ParticleField::create`].
#[derive(Debug, Clone)]
pub struct ParticleField {
    motion: MotionRule,
    bounds: FieldBounds,
    style: PointStyle,
    positions: Vec<Vec3>,
    velocities: Vec<f32>,
    sizes: Vec<f32>,
    /// Yaw of the whole field around the vertical axis (radians).
    rotation_y: f32,
    visible: bool,
}

/// Uniform sample from `[min, max)`, collapsing to `min` for empty ranges.
pub(crate) fn sample_range(rng: &mut impl Rng, (min, max): (f32, f32)) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

impl ParticleField {
    /// Scatter `count` points uniformly through `bounds` with velocities drawn
    /// from `velocity_range`. The field starts hidden.
    pub fn create(
        motion: MotionRule,
        count: usize,
        bounds: FieldBounds,
        velocity_range: (f32, f32),
        style: PointStyle,
        rng: &mut impl Rng,
    ) -> Self {
        debug_assert!(bounds.is_valid(), "degenerate bounds: {bounds:?}");

        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                sample_range(rng, bounds.x),
                sample_range(rng, bounds.y),
                sample_range(rng, bounds.z),
            ));
            velocities.push(sample_range(rng, velocity_range));
        }

        let sizes = match style.size_range {
            Some(range) => (0..count).map(|_| sample_range(rng, range)).collect(),
            None => vec![style.size; count],
        };

        Self {
            motion,
            bounds,
            style,
            positions,
            velocities,
            sizes,
            rotation_y: 0.0,
            visible: false,
        }
    }

    pub fn motion(&self) -> MotionRule {
        self.motion
    }

    pub fn bounds(&self) -> &FieldBounds {
        &self.bounds
    }

    pub fn style(&self) -> &PointStyle {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Point positions in field-local space (before `rotation_y`).
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Advance every point by one step.
    ///
    /// `elapsed_secs` drives the snow sway and dust churn; each point's phase
    /// is offset by its index so neighbours don't move in lockstep.
    pub fn step(&mut self, elapsed_secs: f32) {
        let bounds = self.bounds;
        match self.motion {
            MotionRule::Rain => {
                for (pos, &vel) in self.positions.iter_mut().zip(&self.velocities) {
                    pos.y -= vel;
                    if pos.y < bounds.floor {
                        pos.y = bounds.y.1;
                    }
                }
            }
            MotionRule::Snow => {
                for (i, (pos, &vel)) in self
                    .positions
                    .iter_mut()
                    .zip(&self.velocities)
                    .enumerate()
                {
                    pos.x += (elapsed_secs + i as f32).sin() * SNOW_SWAY_AMPLITUDE;
                    pos.y -= vel;
                    if pos.y < bounds.floor {
                        pos.y = bounds.y.1;
                    }
                }
            }
            MotionRule::Dust => {
                for (i, (pos, &vel)) in self
                    .positions
                    .iter_mut()
                    .zip(&self.velocities)
                    .enumerate()
                {
                    let phase = elapsed_secs + i as f32;
                    pos.x += vel;
                    pos.y += phase.sin() * DUST_CHURN_AMPLITUDE;
                    pos.z += phase.cos() * DUST_CHURN_AMPLITUDE;

                    if pos.x > bounds.x.1 {
                        pos.x = bounds.x.0;
                    }
                    if pos.y > bounds.y.1 {
                        pos.y = bounds.y.0;
                    }
                    if pos.z > bounds.z.1 {
                        pos.z = bounds.z.0;
                    }
                }
                self.rotation_y += SPIN_PER_UPDATE;
            }
        }
    }
}

impl Updatable for ParticleField {
    fn update(&mut self, elapsed_secs: f32) {
        self.step(elapsed_secs);
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
