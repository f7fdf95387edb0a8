use bevy::prelude::*;

pub mod buildings;
pub mod selection;

use selection::{BackgroundClicked, BuildingClicked, HoveredBuilding, SelectedBuilding};

pub struct WarehousePlugin;

impl Plugin for WarehousePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<buildings::BuildingRegistry>()
            .init_resource::<SelectedBuilding>()
            .init_resource::<HoveredBuilding>()
            .add_event::<BuildingClicked>()
            .add_event::<BackgroundClicked>()
            .add_systems(Update, selection::apply_selection_events);
    }
}
