//! Pointer hit-testing against building volumes.
//!
//! A ray through the cursor is intersected with each building's axis-aligned
//! box; the nearest hit drives hover feedback, and releasing an un-dragged
//! left click dispatches either a building click or a background miss.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use warehouse::buildings::Building;
use warehouse::selection::{BackgroundClicked, BuildingClicked, HoveredBuilding};

use crate::camera::OrbitDrag;
use crate::egui_input_guard::pointer_over_ui;

/// Intersects a ray with an axis-aligned box (slab test).
///
/// Returns the distance along the ray to the nearest intersection in front
/// of the origin, or the exit distance when the origin is inside the box.
pub fn ray_box_intersection(ray: &Ray3d, center: Vec3, size: Vec3) -> Option<f32> {
    let half = size * 0.5;
    let min = center - half;
    let max = center + half;

    let inv = ray.direction.recip();
    let t1 = (min - ray.origin) * inv;
    let t2 = (max - ray.origin) * inv;
    let t_enter = t1.min(t2).max_element();
    let t_exit = t1.max(t2).min_element();

    if t_enter > t_exit || t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

fn cursor_ray(window: &Window, camera: &Camera, cam_transform: &GlobalTransform) -> Option<Ray3d> {
    let screen_pos = window.cursor_position()?;
    camera.viewport_to_world(cam_transform, screen_pos).ok()
}

/// The id of the nearest building volume hit by the ray.
fn nearest_hit<'a>(
    ray: &Ray3d,
    volumes: impl Iterator<Item = (&'a Building, &'a GlobalTransform)>,
) -> Option<&'static str> {
    let mut best: Option<(f32, &'static str)> = None;
    for (building, transform) in volumes {
        let Some(t) = ray_box_intersection(ray, transform.translation(), building.size) else {
            continue;
        };
        if best.map_or(true, |(best_t, _)| t < best_t) {
            best = Some((t, building.id));
        }
    }
    best.map(|(_, id)| id)
}

/// Updates hover feedback with the building currently under the cursor.
/// Nothing counts as hovered while the pointer is over egui UI.
pub fn update_hover(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    volumes: Query<(&Building, &GlobalTransform)>,
    mut contexts: EguiContexts,
    mut hovered: ResMut<HoveredBuilding>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    let hit = if pointer_over_ui(&mut contexts) {
        None
    } else {
        cursor_ray(window, camera, cam_transform).and_then(|ray| nearest_hit(&ray, volumes.iter()))
    };

    match hit {
        Some(id) => {
            if !hovered.is_hovered(id) {
                hovered.enter(id);
            }
        }
        None => {
            if let Some(prev) = hovered.0 {
                hovered.exit(prev);
            }
        }
    }
}

/// Dispatches click events on left-button release.
///
/// A press that travelled beyond the drag threshold is a camera gesture and
/// selects nothing, and presses that began on or over the UI are ignored.
/// Must run before the orbit drag system resets its state on release.
pub fn dispatch_pointer_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    volumes: Query<(&Building, &GlobalTransform)>,
    drag: Res<OrbitDrag>,
    mut contexts: EguiContexts,
    mut building_clicks: EventWriter<BuildingClicked>,
    mut misses: EventWriter<BackgroundClicked>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    if drag.is_dragging || !drag.pressed {
        return;
    }
    if pointer_over_ui(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    let Some(ray) = cursor_ray(window, camera, cam_transform) else {
        return;
    };

    match nearest_hit(&ray, volumes.iter()) {
        Some(id) => {
            building_clicks.send(BuildingClicked(id));
        }
        None => {
            misses.send(BackgroundClicked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_ray(origin: Vec3) -> Ray3d {
        Ray3d::new(origin, Dir3::NEG_Y)
    }

    #[test]
    fn test_ray_hits_box() {
        let ray = down_ray(Vec3::new(0.0, 5.0, 0.0));
        let t = ray_box_intersection(&ray, Vec3::ZERO, Vec3::ONE).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_ray_misses_box() {
        let ray = down_ray(Vec3::new(3.0, 5.0, 0.0));
        assert!(ray_box_intersection(&ray, Vec3::ZERO, Vec3::ONE).is_none());
    }

    #[test]
    fn test_ray_behind_origin_is_rejected() {
        let ray = Ray3d::new(Vec3::new(0.0, 5.0, 0.0), Dir3::Y);
        assert!(ray_box_intersection(&ray, Vec3::ZERO, Vec3::ONE).is_none());
    }

    #[test]
    fn test_ray_from_inside_box() {
        let ray = down_ray(Vec3::ZERO);
        let t = ray_box_intersection(&ray, Vec3::ZERO, Vec3::ONE).unwrap();
        assert!((t - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_ray_hits_elongated_box() {
        // "Building 3" footprint: 1 x 1 x 7 centered at (2, 0, 0).
        let ray = down_ray(Vec3::new(2.0, 5.0, 3.0));
        assert!(
            ray_box_intersection(&ray, Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 7.0))
                .is_some()
        );
        let ray = down_ray(Vec3::new(2.0, 5.0, 4.0));
        assert!(
            ray_box_intersection(&ray, Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 7.0))
                .is_none()
        );
    }

    #[test]
    fn test_nearest_of_two_hits() {
        let near = Building {
            id: "near",
            name: "near",
            size: Vec3::ONE,
        };
        let far = Building {
            id: "far",
            name: "far",
            size: Vec3::ONE,
        };
        let near_tf = GlobalTransform::from_translation(Vec3::new(0.0, 2.0, 0.0));
        let far_tf = GlobalTransform::from_translation(Vec3::ZERO);

        let ray = down_ray(Vec3::new(0.0, 5.0, 0.0));
        let hit = nearest_hit(&ray, [(&far, &far_tf), (&near, &near_tf)].into_iter());
        assert_eq!(hit, Some("near"));
    }

    #[test]
    fn test_no_volumes_no_hit() {
        let ray = down_ray(Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(nearest_hit(&ray, std::iter::empty()), None);
    }
}
