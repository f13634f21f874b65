//! Weather selection panel.
//!
//! Two button groups, time of day and weather. The selected button in each
//! group is highlighted; clicking any button (including the selected one)
//! sends a [`SelectionRequest`]. F2 hides or shows the panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::selection::{SelectionRequest, TimeOfDay, WeatherKind, WeatherSelection};

/// Whether the selection panel is visible.
#[derive(Resource)]
pub struct SelectionPanelVisible(pub bool);

impl Default for SelectionPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

/// One button as drawn: caption, highlight, and the request a click sends.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionButton {
    pub caption: String,
    pub selected: bool,
    pub request: SelectionRequest,
}

fn caption(icon: &str, label: &str) -> String {
    format!("{icon} {label}")
}

pub fn time_of_day_buttons(selection: &WeatherSelection) -> Vec<SelectionButton> {
    TimeOfDay::ALL
        .into_iter()
        .map(|time| SelectionButton {
            caption: caption(time.icon(), time.label()),
            selected: selection.time_of_day == time,
            request: SelectionRequest::TimeOfDay(time),
        })
        .collect()
}

pub fn weather_buttons(selection: &WeatherSelection) -> Vec<SelectionButton> {
    WeatherKind::ALL
        .into_iter()
        .map(|weather| SelectionButton {
            caption: caption(weather.icon(), weather.label()),
            selected: selection.weather == weather,
            request: SelectionRequest::Weather(weather),
        })
        .collect()
}

/// Draws a row of buttons and returns the request of the one clicked, if any.
fn button_row(ui: &mut egui::Ui, buttons: &[SelectionButton]) -> Option<SelectionRequest> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for button in buttons {
            if ui
                .selectable_label(button.selected, &button.caption)
                .clicked()
            {
                clicked = Some(button.request);
            }
        }
    });
    clicked
}

pub fn selection_panel_ui(
    mut contexts: EguiContexts,
    visible: Res<SelectionPanelVisible>,
    selection: Res<WeatherSelection>,
    mut requests: EventWriter<SelectionRequest>,
) {
    if !visible.0 {
        return;
    }

    let times = time_of_day_buttons(&selection);
    let weathers = weather_buttons(&selection);

    egui::Window::new("Weather")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .resizable(false)
        .collapsible(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.label("Time of day");
            if let Some(request) = button_row(ui, &times) {
                requests.send(request);
            }

            ui.separator();

            ui.label("Weather");
            if let Some(request) = button_row(ui, &weathers) {
                requests.send(request);
            }
        });
}

/// F2 toggles the panel unless egui has keyboard focus.
pub fn panel_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut visible: ResMut<SelectionPanelVisible>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::F2) {
        visible.0 = !visible.0;
    }
}
