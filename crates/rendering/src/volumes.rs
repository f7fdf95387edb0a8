//! Building volume rendering.
//!
//! Each catalog building becomes a semi-transparent box. Hover swaps the
//! volume to a highlight color; selection deliberately does not change the
//! material and shows up only in the detail overlay.

use bevy::prelude::*;

use warehouse::buildings::{Building, BuildingRegistry};
use warehouse::selection::HoveredBuilding;

/// Neutral volume color.
const VOLUME_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.5);
/// Hover highlight, same opacity as the neutral state.
const HOVER_COLOR: Color = Color::srgba(1.0, 0.55, 0.0, 0.5);

fn volume_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Spawns one mesh per catalog building. Each volume gets its own material
/// instance so hover recoloring affects only that building.
pub fn spawn_building_volumes(
    registry: Res<BuildingRegistry>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for spec in registry.iter() {
        commands.spawn((
            Building {
                id: spec.id,
                name: spec.name,
                size: spec.size,
            },
            Mesh3d(meshes.add(Cuboid::new(spec.size.x, spec.size.y, spec.size.z))),
            MeshMaterial3d(materials.add(volume_material(VOLUME_COLOR))),
            Transform::from_translation(spec.position),
        ));
    }
    info!("spawned {} building volumes", registry.len());
}

/// Recolors volumes when the hovered building changes.
pub fn apply_hover_highlight(
    hovered: Res<HoveredBuilding>,
    volumes: Query<(&Building, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !hovered.is_changed() {
        return;
    }
    for (building, material) in &volumes {
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };
        let target = if hovered.is_hovered(building.id) {
            HOVER_COLOR
        } else {
            VOLUME_COLOR
        };
        if material.base_color != target {
            material.base_color = target;
        }
    }
}
