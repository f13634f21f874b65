use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::effects_config::EffectsConfig;

mod gallery;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Skycast".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    // After DefaultPlugins so the load is logged, before SimulationPlugin so
    // its init_resource keeps this value.
    app.insert_resource(EffectsConfig::from_env())
        .add_plugins((
            simulation::SimulationPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ));

    // Gallery mode: screenshots every weather at day and night, then exits
    if std::env::var(gallery::GALLERY_ENV_VAR).is_ok() {
        app.insert_resource(gallery::GalleryQueue::all_selections())
            .add_systems(
                Update,
                gallery::drive_gallery.before(simulation::WeatherSet::Input),
            );
    }

    app.run();
}
