//! Mirrors [`SceneEnvironment`] into the lights, the clear color, and
//! camera fog.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use simulation::config::{AMBIENT_BRIGHTNESS_PER_UNIT, SUN_ILLUMINANCE_PER_UNIT};
use simulation::environment::{hex_to_rgb8, EnvironmentState, FogConfig, SceneEnvironment};

/// Marker for the directional light driven by the directional intensity.
#[derive(Component)]
pub struct SunLight;

pub fn hex_color(hex: u32) -> Color {
    let [r, g, b] = hex_to_rgb8(hex);
    Color::srgb_u8(r, g, b)
}

pub fn ambient_brightness(env: &EnvironmentState) -> f32 {
    env.ambient_intensity * AMBIENT_BRIGHTNESS_PER_UNIT
}

pub fn sun_illuminance(env: &EnvironmentState) -> f32 {
    env.directional_intensity * SUN_ILLUMINANCE_PER_UNIT
}

/// Linear camera fog that starts at `near` and is opaque by `far`.
pub fn distance_fog(fog: &FogConfig) -> DistanceFog {
    DistanceFog {
        color: hex_color(fog.color),
        falloff: FogFalloff::Linear {
            start: fog.near,
            end: fog.far,
        },
        ..default()
    }
}

pub fn setup_lighting(mut commands: Commands, scene: Res<SceneEnvironment>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: ambient_brightness(&scene),
    });

    commands.spawn((
        DirectionalLight {
            illuminance: sun_illuminance(&scene),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
        SunLight,
    ));
}

/// Push lighting and the clear color whenever the environment changes.
pub fn sync_lighting(
    scene: Res<SceneEnvironment>,
    mut ambient: ResMut<AmbientLight>,
    mut clear_color: ResMut<ClearColor>,
    mut suns: Query<&mut DirectionalLight, With<SunLight>>,
) {
    if !scene.is_changed() {
        return;
    }
    ambient.brightness = ambient_brightness(&scene);
    clear_color.0 = hex_color(scene.clear_color);

    let Ok(mut sun) = suns.get_single_mut() else {
        return;
    };
    sun.illuminance = sun_illuminance(&scene);
}

/// Adds, updates, or removes `DistanceFog` on the camera.
pub fn sync_scene_fog(
    scene: Res<SceneEnvironment>,
    mut commands: Commands,
    cameras: Query<(Entity, Has<DistanceFog>), With<Camera3d>>,
    new_cameras: Query<(), Added<Camera3d>>,
) {
    if !scene.is_changed() && new_cameras.is_empty() {
        return;
    }
    for (entity, has_fog) in &cameras {
        match &scene.fog {
            Some(fog) => {
                commands.entity(entity).insert(distance_fog(fog));
            }
            None if has_fog => {
                commands.entity(entity).remove::<DistanceFog>();
            }
            None => {}
        }
    }
}
