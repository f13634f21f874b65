//! One mesh per particle field.
//!
//! Each point is drawn as two crossed quads (8 vertices, 4 triangles) sized by
//! the point's size, so points keep their size at any camera distance without a
//! custom shader. Only the position attribute is rewritten per frame, and only
//! for visible fields.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;

use simulation::effects::{EffectKind, Updatable, WeatherEffects};
use simulation::particles::ParticleField;

use crate::environment_render::hex_color;

const VERTICES_PER_POINT: usize = 8;
const INDICES_PER_POINT: usize = 12;

/// Links a mesh entity to the particle field it draws.
#[derive(Component, Debug, Clone, Copy)]
pub struct ParticleFieldMesh {
    pub kind: EffectKind,
}

pub(crate) fn visibility_for(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Crossed-quad corners for every point, written into `out`.
pub fn write_point_quads(positions: &[Vec3], sizes: &[f32], out: &mut Vec<[f32; 3]>) {
    out.clear();
    out.reserve(positions.len() * VERTICES_PER_POINT);
    for (p, size) in positions.iter().zip(sizes) {
        let h = size * 0.5;
        // XY quad
        out.push([p.x - h, p.y - h, p.z]);
        out.push([p.x + h, p.y - h, p.z]);
        out.push([p.x + h, p.y + h, p.z]);
        out.push([p.x - h, p.y + h, p.z]);
        // ZY quad
        out.push([p.x, p.y - h, p.z - h]);
        out.push([p.x, p.y - h, p.z + h]);
        out.push([p.x, p.y + h, p.z + h]);
        out.push([p.x, p.y + h, p.z - h]);
    }
}

pub fn point_quad_indices(point_count: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(point_count * INDICES_PER_POINT);
    for i in 0..point_count as u32 {
        let b = i * VERTICES_PER_POINT as u32;
        indices.extend_from_slice(&[b, b + 1, b + 2, b, b + 2, b + 3]);
        indices.extend_from_slice(&[b + 4, b + 5, b + 6, b + 4, b + 6, b + 7]);
    }
    indices
}

fn point_quad_normals(point_count: usize) -> Vec<[f32; 3]> {
    let mut normals = Vec::with_capacity(point_count * VERTICES_PER_POINT);
    for _ in 0..point_count {
        normals.extend_from_slice(&[[0.0, 0.0, 1.0]; 4]);
        normals.extend_from_slice(&[[1.0, 0.0, 0.0]; 4]);
    }
    normals
}

pub fn build_particle_mesh(field: &ParticleField) -> Mesh {
    let mut positions = Vec::new();
    write_point_quads(field.positions(), field.sizes(), &mut positions);

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, point_quad_normals(field.len()))
    .with_inserted_indices(Indices::U32(point_quad_indices(field.len())))
}

pub fn spawn_particle_fields(
    mut commands: Commands,
    effects: Res<WeatherEffects>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for kind in EffectKind::ALL {
        let Some(field) = effects.particle_field(kind) else {
            continue;
        };
        let style = field.style();
        let material = StandardMaterial {
            base_color: hex_color(style.color).with_alpha(style.opacity),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        };

        commands.spawn((
            Mesh3d(meshes.add(build_particle_mesh(field))),
            MeshMaterial3d(materials.add(material)),
            Transform::from_rotation(Quat::from_rotation_y(field.rotation_y())),
            visibility_for(field.is_visible()),
            NoFrustumCulling,
            ParticleFieldMesh { kind },
        ));
    }
}

/// Mirror visibility, field yaw, and point positions into the meshes.
pub fn sync_particle_fields(
    effects: Res<WeatherEffects>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut fields: Query<(&ParticleFieldMesh, &Mesh3d, &mut Visibility, &mut Transform)>,
) {
    if !effects.is_changed() {
        return;
    }
    for (tag, mesh3d, mut visibility, mut transform) in &mut fields {
        let Some(field) = effects.particle_field(tag.kind) else {
            continue;
        };
        visibility.set_if_neq(visibility_for(field.is_visible()));
        if !field.is_visible() {
            continue;
        }

        transform.rotation = Quat::from_rotation_y(field.rotation_y());
        let Some(mesh) = meshes.get_mut(&mesh3d.0) else {
            continue;
        };
        refresh_positions(mesh, field);
    }
}

/// Rewrite the position attribute of a mesh built by [`build_particle_mesh`]
/// in place, reusing its buffer.
pub fn refresh_positions(mesh: &mut Mesh, field: &ParticleField) {
    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        write_point_quads(field.positions(), field.sizes(), positions);
        return;
    }
    let mut positions = Vec::new();
    write_point_quads(field.positions(), field.sizes(), &mut positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
}
