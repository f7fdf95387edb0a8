//! Selection and hover state for building volumes.
//!
//! At most one building is selected at a time. The selection changes in
//! exactly three ways: a click on a building sets it, a click on empty space
//! clears it, and the detail panel's close button clears it. Hover is a
//! separate transient highlight and never touches the selection.

use bevy::prelude::*;

use crate::buildings::BuildingRegistry;

/// The single selected building, if any. Drives the detail overlay.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedBuilding(pub Option<&'static str>);

impl SelectedBuilding {
    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.0.is_some_and(|selected| selected == id)
    }
}

/// The building volume currently under the pointer, if any.
/// Only the nearest hit volume counts as hovered.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoveredBuilding(pub Option<&'static str>);

impl HoveredBuilding {
    /// The pointer moved onto a building volume.
    pub fn enter(&mut self, id: &'static str) {
        self.0 = Some(id);
    }

    /// The pointer left a building volume. Only clears the state when that
    /// building is still the hovered one, so an `enter` for the next volume
    /// is not undone by a stale `exit` for the previous one.
    pub fn exit(&mut self, id: &str) {
        if self.is_hovered(id) {
            self.0 = None;
        }
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.0.is_some_and(|hovered| hovered == id)
    }
}

/// A pointer click that hit a building volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingClicked(pub &'static str);

/// A pointer click that hit nothing interactive.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct BackgroundClicked;

/// Applies click events to the selection.
///
/// A building click always wins over a background miss delivered in the same
/// frame, so hitting a volume cannot be undone by a miss dispatched for the
/// same gesture. Ids not present in the registry are ignored.
pub fn apply_selection_events(
    mut building_clicks: EventReader<BuildingClicked>,
    mut misses: EventReader<BackgroundClicked>,
    registry: Res<BuildingRegistry>,
    mut selected: ResMut<SelectedBuilding>,
) {
    let clicked = building_clicks.read().last().copied();
    let missed = !misses.is_empty();
    misses.clear();

    match clicked {
        Some(BuildingClicked(id)) => {
            if registry.contains(id) {
                selected.0 = Some(id);
            }
        }
        None if missed => selected.clear(),
        None => {}
    }
}
