use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod detail_panel;
pub mod theme;
pub mod view_buttons;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (view_buttons::view_buttons_ui, detail_panel::detail_panel_ui),
            );
    }
}
