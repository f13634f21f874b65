use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::WeatherSet;

pub mod selection_panel;
pub mod theme;

/// egui front end for the weather selection. Clicks become
/// `SelectionRequest` events; nothing here touches effect state directly.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<selection_panel::SelectionPanelVisible>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (
                    selection_panel::panel_keybind,
                    selection_panel::selection_panel_ui,
                )
                    .chain()
                    .before(WeatherSet::Input),
            );
    }
}
