//! Floating building labels.
//!
//! Each volume gets a screen-space label anchored to its center: the text is
//! projected to viewport coordinates every frame, so it always faces the
//! viewer, and its size scales with camera distance for legibility. Labels
//! are non-interactable so they neither block picking nor count as UI.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use warehouse::buildings::Building;

/// Distance at which a label renders at [`BASE_FONT_SIZE`].
const LABEL_DISTANCE_FACTOR: f32 = 5.0;
const BASE_FONT_SIZE: f32 = 14.0;
const MIN_FONT_SIZE: f32 = 6.0;
const MAX_FONT_SIZE: f32 = 28.0;

/// Font size for a label at `distance` from the camera.
pub fn label_font_size(distance: f32) -> f32 {
    if distance <= f32::EPSILON {
        return MAX_FONT_SIZE;
    }
    (BASE_FONT_SIZE * LABEL_DISTANCE_FACTOR / distance).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Draws every building label centered on its volume's projected position.
/// Volumes behind the camera project with an error and are skipped.
pub fn building_labels_ui(
    mut contexts: EguiContexts,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    volumes: Query<(&Building, &GlobalTransform)>,
) {
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    let ctx = contexts.ctx_mut();

    for (building, transform) in &volumes {
        let center = transform.translation();
        let Ok(screen) = camera.world_to_viewport(cam_transform, center) else {
            continue;
        };
        let size = label_font_size(cam_transform.translation().distance(center));

        egui::Area::new(egui::Id::new(("building_label", building.id)))
            .fixed_pos(egui::pos2(screen.x, screen.y))
            .pivot(egui::Align2::CENTER_CENTER)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(building.name)
                        .size(size)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
            });
    }
}
