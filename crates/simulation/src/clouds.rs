//! Drifting cloud layer.
//!
//! Each cloud is four overlapping puffs of decreasing radius, offset from one
//! another so the silhouette isn't a sphere, and squashed vertically.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    CLOUD_ALTITUDE, CLOUD_DRIFT_PER_UPDATE, CLOUD_SCALE, CLOUD_VERTICAL_SQUASH,
    FIELD_HALF_EXTENT, SPIN_PER_UPDATE,
};
use crate::effects::Updatable;
use crate::particles::field::sample_range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudInstance {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: Vec3,
}

impl CloudInstance {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position)
            .with_rotation(Quat::from_rotation_y(self.rotation_y))
            .with_scale(self.scale)
    }
}

/// Local offset of puff `index` inside a cloud.
pub fn puff_offset(index: usize) -> Vec3 {
    let i = index as f32;
    Vec3::new(i * 0.5, i.sin() * 0.2, i * 0.3)
}

#[derive(Debug, Clone)]
pub struct CloudField {
    instances: Vec<CloudInstance>,
    visible: bool,
}

impl CloudField {
    pub fn create(instance_count: usize, rng: &mut impl Rng) -> Self {
        let instances = (0..instance_count)
            .map(|_| {
                let x = sample_range(rng, (-FIELD_HALF_EXTENT, FIELD_HALF_EXTENT));
                let y = sample_range(rng, CLOUD_ALTITUDE);
                let z = sample_range(rng, (-FIELD_HALF_EXTENT, FIELD_HALF_EXTENT));
                let s = sample_range(rng, CLOUD_SCALE);
                CloudInstance {
                    position: Vec3::new(x, y, z),
                    rotation_y: 0.0,
                    scale: Vec3::new(s, s * CLOUD_VERTICAL_SQUASH, s),
                }
            })
            .collect();

        Self {
            instances,
            visible: false,
        }
    }

    pub fn instances(&self) -> &[CloudInstance] {
        &self.instances
    }
}

impl Updatable for CloudField {
    /// Drift along +X (wrapping at the volume edge) and spin slowly.
    fn update(&mut self, _elapsed_secs: f32) {
        for cloud in &mut self.instances {
            cloud.position.x += CLOUD_DRIFT_PER_UPDATE;
            cloud.rotation_y += SPIN_PER_UPDATE;
            if cloud.position.x > FIELD_HALF_EXTENT {
                cloud.position.x = -FIELD_HALF_EXTENT;
            }
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn clouds(n: usize) -> CloudField {
        CloudField::create(n, &mut ChaCha8Rng::seed_from_u64(3))
    }

    #[test]
    fn test_instances_placed_in_band() {
        let field = clouds(200);
        assert_eq!(field.instances().len(), 200);
        for c in field.instances() {
            assert!((-50.0..50.0).contains(&c.position.x));
            assert!((15.0..20.0).contains(&c.position.y));
            assert!((-50.0..50.0).contains(&c.position.z));
            assert!((2.0..5.0).contains(&c.scale.x));
            assert_eq!(c.scale.x, c.scale.z);
            assert!((c.scale.y - c.scale.x * 0.6).abs() < 1e-6);
        }
    }

    #[test]
    fn test_puff_offsets() {
        assert_eq!(puff_offset(0), Vec3::ZERO);
        let third = puff_offset(2);
        assert!((third.x - 1.0).abs() < 1e-6);
        assert!((third.y - 2.0_f32.sin() * 0.2).abs() < 1e-6);
        assert!((third.z - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_update_drifts_and_spins() {
        let mut field = clouds(10);
        let before = field.instances().to_vec();
        field.update(0.0);
        for (old, new) in before.iter().zip(field.instances()) {
            if old.position.x + 0.02 > 50.0 {
                assert_eq!(new.position.x, -50.0);
            } else {
                assert!((new.position.x - old.position.x - 0.02).abs() < 1e-5);
            }
            assert_eq!(new.position.y, old.position.y);
            assert!((new.rotation_y - 0.001).abs() < 1e-7);
        }
    }

    #[test]
    fn test_population_fixed_and_wrapped() {
        let mut field = clouds(30);
        // 100 units of drift: every cloud wraps at least once.
        for _ in 0..5_000 {
            field.update(0.0);
        }
        assert_eq!(field.instances().len(), 30);
        assert!(field.instances().iter().all(|c| c.position.x <= 50.0));
    }

    #[test]
    fn test_transform_carries_scale_and_yaw() {
        let cloud = CloudInstance {
            position: Vec3::new(1.0, 16.0, -3.0),
            rotation_y: 0.5,
            scale: Vec3::new(3.0, 1.8, 3.0),
        };
        let t = cloud.transform();
        assert_eq!(t.translation, cloud.position);
        assert_eq!(t.scale, cloud.scale);
        let (yaw, _, _) = t.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - 0.5).abs() < 1e-5);
    }
}
