use bevy_egui::{egui, EguiContexts};

/// Dark, slightly translucent panels so the sky stays readable behind the
/// selection window.
pub fn apply_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(28, 32, 44, 230);
    let inactive = egui::Color32::from_rgb(48, 54, 68);
    let hover = egui::Color32::from_rgb(68, 82, 104);
    let active = egui::Color32::from_rgb(90, 150, 215);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;
    style.visuals.window_fill = panel;

    // Selected button in each group
    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    let rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = egui::CornerRadius::same(10);
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    ctx.set_style(style);
}
