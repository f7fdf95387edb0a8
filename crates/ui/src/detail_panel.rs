//! Building detail overlay.
//!
//! Purely derived from [`SelectedBuilding`]: the panel appears while a
//! building is selected and draws nothing otherwise. The close button is one
//! of the three sanctioned ways the selection changes.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use warehouse::buildings::BuildingRegistry;
use warehouse::selection::SelectedBuilding;

/// Placeholder descriptive copy shown until real building data exists.
fn detail_text(id: &str) -> String {
    format!("Some data related to {id}")
}

/// Shows the selected building's details in a panel anchored top-left.
pub fn detail_panel_ui(
    mut contexts: EguiContexts,
    registry: Res<BuildingRegistry>,
    mut selected: ResMut<SelectedBuilding>,
) {
    let Some(id) = selected.0 else {
        return;
    };
    let Some(spec) = registry.get(id) else {
        return;
    };

    let mut close = false;
    egui::Window::new(spec.name)
        .id(egui::Id::new("building_detail_panel"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
        .resizable(false)
        .collapsible(false)
        .default_width(280.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(detail_text(spec.id));
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });

    if close {
        selected.clear();
    }
}
