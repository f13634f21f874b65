//! Cloud layer: one parent entity per cloud instance, four flat-shaded puff
//! spheres under each.

use bevy::prelude::*;

use simulation::clouds::puff_offset;
use simulation::config::{CLOUD_COLOR, CLOUD_OPACITY, CLOUD_PUFF_RADII};
use simulation::effects::{Updatable, WeatherEffects};

use crate::environment_render::hex_color;
use crate::particle_render::visibility_for;

const PUFF_SEGMENTS: u32 = 16;

/// Root of the cloud layer; its visibility hides or shows every cloud.
#[derive(Component)]
pub struct CloudLayer;

/// A cloud instance entity, indexing into `CloudField::instances`.
#[derive(Component, Debug, Clone, Copy)]
pub struct CloudMesh {
    pub index: usize,
}

/// Faceted sphere for one puff.
pub fn puff_mesh(radius: f32) -> Mesh {
    let mut mesh = Sphere::new(radius).mesh().uv(PUFF_SEGMENTS, PUFF_SEGMENTS);
    mesh.duplicate_vertices();
    mesh.compute_flat_normals();
    mesh
}

pub fn spawn_clouds(
    mut commands: Commands,
    effects: Res<WeatherEffects>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let puffs: Vec<Handle<Mesh>> = CLOUD_PUFF_RADII
        .iter()
        .map(|r| meshes.add(puff_mesh(*r)))
        .collect();
    let material = materials.add(StandardMaterial {
        base_color: hex_color(CLOUD_COLOR).with_alpha(CLOUD_OPACITY),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 1.0,
        ..default()
    });

    let clouds = &effects.clouds;
    commands
        .spawn((
            Transform::default(),
            visibility_for(clouds.is_visible()),
            CloudLayer,
        ))
        .with_children(|layer| {
            for (index, cloud) in clouds.instances().iter().enumerate() {
                layer
                    .spawn((cloud.transform(), Visibility::Inherited, CloudMesh { index }))
                    .with_children(|c| {
                        for (k, mesh) in puffs.iter().enumerate() {
                            c.spawn((
                                Mesh3d(mesh.clone()),
                                MeshMaterial3d(material.clone()),
                                Transform::from_translation(puff_offset(k)),
                            ));
                        }
                    });
            }
        });
}

/// Mirror layer visibility and per-cloud transforms.
pub fn sync_clouds(
    effects: Res<WeatherEffects>,
    mut layers: Query<&mut Visibility, With<CloudLayer>>,
    mut clouds: Query<(&CloudMesh, &mut Transform)>,
) {
    if !effects.is_changed() {
        return;
    }
    let field = &effects.clouds;
    if let Ok(mut visibility) = layers.get_single_mut() {
        visibility.set_if_neq(visibility_for(field.is_visible()));
    }
    if !field.is_visible() {
        return;
    }

    let instances = field.instances();
    for (cloud, mut transform) in &mut clouds {
        if let Some(instance) = instances.get(cloud.index) {
            *transform = instance.transform();
        }
    }
}
