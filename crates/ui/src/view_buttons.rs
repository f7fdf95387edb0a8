//! View preset buttons.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::camera::ViewPose;

/// Two preset buttons in the top-right corner: the overhead lock and the
/// default 45° perspective. Each press re-runs the camera re-aim even when
/// the view is already in that preset.
pub fn view_buttons_ui(mut contexts: EguiContexts, mut pose: ResMut<ViewPose>) {
    egui::Area::new(egui::Id::new("view_buttons"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                if ui.button("Top View").clicked() {
                    pose.set_top_view();
                }
                if ui.button("45° View").clicked() {
                    pose.set_angled_view();
                }
            });
        });
}
