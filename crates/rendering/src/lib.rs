use bevy::prelude::*;

use simulation::config::FIELD_HALF_EXTENT;
use simulation::WeatherSet;

pub mod camera;
pub mod cloud_render;
pub mod egui_input_guard;
pub mod environment_render;
pub mod particle_render;

use camera::CameraOrbitDrag;

/// Scene mirror of the headless weather core: camera, lights, ground,
/// effect meshes, and fog.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraOrbitDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    environment_render::setup_lighting,
                    spawn_ground,
                    particle_render::spawn_particle_fields,
                    cloud_render::spawn_clouds,
                )
                    .chain()
                    .after(simulation::systems::allocate_weather_effects),
            )
            .add_systems(
                Update,
                (
                    camera::camera_keyboard,
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    environment_render::sync_lighting,
                    environment_render::sync_scene_fog,
                    particle_render::sync_particle_fields,
                    cloud_render::sync_clouds,
                )
                    .in_set(WeatherSet::Sync),
            );
    }
}

/// Ground plane under the effect volume so fog and sky color have something
/// to fall on.
fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let size = FIELD_HALF_EXTENT * 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.36, 0.42, 0.30),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::default(),
    ));
}
