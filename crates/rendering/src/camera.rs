//! Camera control: two view presets plus free orbit around the origin.
//!
//! [`ViewPose`] is the preset state machine (angled perspective or locked
//! top-down). [`OrbitCamera`] holds the spherical angles driven by manual
//! orbit and zoom. Preset commands bump a generation counter so the apply
//! system re-aims the camera even when the requested pose equals the current
//! one: pressing "Top View" twice still re-frames the scene.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::egui_input_guard::pointer_over_ui;

/// Default perspective vantage point.
pub const ANGLED_VIEW_POS: Vec3 = Vec3::new(5.0, 5.0, 5.0);
/// Overhead vantage point, directly above the origin and high enough to
/// frame every building.
pub const TOP_VIEW_POS: Vec3 = Vec3::new(0.0, 10.0, 0.0);

const ORBIT_SENSITIVITY: f32 = 0.005;
const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 50.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0; // 5 degrees
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0; // 85 degrees
/// Elevation while the top view lock is active: straight down.
const TOP_DOWN_PITCH: f32 = std::f32::consts::FRAC_PI_2;
/// Roll applied in top view so the overhead frame always has the same
/// screen-space "up".
const TOP_VIEW_ROLL: f32 = std::f32::consts::FRAC_PI_2;

/// Pixels of travel before a left press counts as an orbit drag rather than
/// a click.
pub const DRAG_THRESHOLD: f32 = 5.0;

/// How far the orbit target may be panned from the origin on the floor plane.
const PAN_EXTENT: f32 = 10.0;

/// Camera preset state: a fixed vantage point plus the top-view flag.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewPose {
    pub position: Vec3,
    pub top_view: bool,
    /// Bumped by every preset command; the apply system keys off this
    /// rather than value equality.
    pub generation: u64,
}

impl Default for ViewPose {
    fn default() -> Self {
        Self {
            position: ANGLED_VIEW_POS,
            top_view: false,
            generation: 0,
        }
    }
}

impl ViewPose {
    /// Jump to the fixed overhead vantage point and lock the tilt straight
    /// down.
    pub fn set_top_view(&mut self) {
        self.position = TOP_VIEW_POS;
        self.top_view = true;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Return to the default perspective vantage point with free orbit
    /// restored.
    pub fn set_angled_view(&mut self) {
        self.position = ANGLED_VIEW_POS;
        self.top_view = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Manual orbit takes over: drop the top-view lock without moving the
    /// camera. The vantage point and generation are deliberately left
    /// untouched so the camera does not jump.
    pub fn release_top_view(&mut self) {
        self.top_view = false;
    }
}

/// Orbital camera model: the camera orbits a target point on the floor.
///
/// Preset commands always reset the target to the scene origin; right-mouse
/// panning moves it within [`PAN_EXTENT`].
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub target: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians
    pub pitch: f32,
    /// Distance from the target
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(ANGLED_VIEW_POS)
    }
}

impl OrbitCamera {
    /// Derives orbit state from a camera position aimed at the origin.
    pub fn from_position(position: Vec3) -> Self {
        let distance = position.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let pitch = (position.y / distance).clamp(-1.0, 1.0).asin();
        let yaw = position.x.atan2(position.z);
        Self {
            target: Vec3::ZERO,
            yaw,
            pitch,
            distance,
        }
    }

    /// Spherical to cartesian position around the target.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }
}

fn clamp_target(target: &mut Vec3) {
    target.x = target.x.clamp(-PAN_EXTENT, PAN_EXTENT);
    target.z = target.z.clamp(-PAN_EXTENT, PAN_EXTENT);
}

/// Free-orbit interaction config, derived from the current [`ViewPose`].
///
/// While the top view lock is active the interaction is disabled and both
/// tilt bounds collapse to the same straight-down angle, so the camera
/// cannot be tilted away from overhead.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub enabled: bool,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl OrbitControls {
    pub fn for_pose(pose: &ViewPose) -> Self {
        if pose.top_view {
            Self {
                enabled: false,
                min_pitch: TOP_DOWN_PITCH,
                max_pitch: TOP_DOWN_PITCH,
            }
        } else {
            Self {
                enabled: true,
                min_pitch: MIN_PITCH,
                max_pitch: MAX_PITCH,
            }
        }
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::for_pose(&ViewPose::default())
    }
}

/// Tracks left-button drag state: differentiates a click from an orbit drag.
/// Once the pointer moves beyond [`DRAG_THRESHOLD`] pixels from the initial
/// press, the gesture is a camera orbit and click dispatch is suppressed.
#[derive(Resource, Debug, Default)]
pub struct OrbitDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    pub is_dragging: bool,
}

/// Tracks right-button drag state for panning the orbit target.
#[derive(Resource, Debug, Default)]
pub struct PanDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Builds the camera transform for a preset pose: at the vantage point,
/// aimed at the scene origin, with a fixed roll in top view.
pub fn pose_transform(pose: &ViewPose) -> Transform {
    let mut transform = Transform::from_translation(pose.position).looking_at(Vec3::ZERO, Vec3::Y);
    if pose.top_view {
        transform.rotate_local_z(TOP_VIEW_ROLL);
    }
    transform
}

pub fn setup_camera(pose: Res<ViewPose>, mut commands: Commands) {
    commands.spawn((Camera3d::default(), pose_transform(&pose)));
}

/// Re-aims the camera whenever a preset command fired.
///
/// Keyed off the pose generation, not value equality, so repeating the same
/// command still repositions and re-aims. Also resynchronizes the orbit
/// angles with the new vantage point.
pub fn apply_view_pose(
    pose: Res<ViewPose>,
    mut orbit: ResMut<OrbitCamera>,
    mut applied: Local<Option<u64>>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if *applied == Some(pose.generation) {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *applied = Some(pose.generation);
    *transform = pose_transform(&pose);
    *orbit = OrbitCamera::from_position(pose.position);
    debug!(
        "view pose applied: top_view={} generation={}",
        pose.top_view, pose.generation
    );
}

/// Keeps the free-orbit config in sync with the current pose.
pub fn sync_orbit_controls(pose: Res<ViewPose>, mut controls: ResMut<OrbitControls>) {
    if !pose.is_changed() {
        return;
    }
    let next = OrbitControls::for_pose(&pose);
    if *controls != next {
        *controls = next;
    }
}

/// Left-mouse drag: orbit around the origin (horizontal = yaw, vertical =
/// pitch, clamped to the tilt bounds).
///
/// Drag state is tracked even while orbit interaction is disabled so a
/// drag-release never counts as a click; moving the camera and releasing
/// the top-view lock both require the interaction to be enabled.
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    controls: Res<OrbitControls>,
    mut drag: ResMut<OrbitDrag>,
    mut pose: ResMut<ViewPose>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !pointer_over_ui(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.pressed = true;
            drag.start_pos = pos;
            drag.last_pos = pos;
            drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.pressed = false;
        drag.is_dragging = false;
        return;
    }

    if !drag.pressed {
        return;
    }

    if let Some(pos) = window.cursor_position() {
        if !drag.is_dragging && (pos - drag.start_pos).length() > DRAG_THRESHOLD {
            drag.is_dragging = true;
            drag.last_pos = pos;
            if controls.enabled {
                // Manual orbit takes over from the programmatic top view.
                pose.release_top_view();
            }
        }

        if drag.is_dragging && controls.enabled {
            let delta = pos - drag.last_pos;
            orbit.yaw += delta.x * ORBIT_SENSITIVITY;
            orbit.pitch = (orbit.pitch - delta.y * ORBIT_SENSITIVITY)
                .clamp(controls.min_pitch, controls.max_pitch);
            drag.last_pos = pos;
        }
    }
}

/// Right-mouse drag: pan the orbit target along the floor plane (direction
/// relative to the current yaw). Inert while orbit interaction is disabled.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    controls: Res<OrbitControls>,
    mut drag: ResMut<PanDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) && !pointer_over_ui(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if !drag.dragging || !controls.enabled {
        return;
    }

    if let Some(pos) = window.cursor_position() {
        let delta = pos - drag.last_pos;
        let scale = orbit.distance / 1000.0;
        // Rotate pan direction by current yaw
        let cos_yaw = orbit.yaw.cos();
        let sin_yaw = orbit.yaw.sin();
        let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
        let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
        orbit.target.x += world_x * scale;
        orbit.target.z += world_z * scale;
        clamp_target(&mut orbit.target);
        drag.last_pos = pos;
    }
}

/// Scroll wheel: zoom by changing orbit distance. Inert while orbit
/// interaction is disabled or the pointer is over UI.
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    controls: Res<OrbitControls>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if !controls.enabled || pointer_over_ui(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Applies manual orbit state to the camera transform.
///
/// Preset pose application owns the transform while orbit interaction is
/// disabled, which also preserves the top-view roll.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    controls: Res<OrbitControls>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() || !controls.enabled {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(orbit.position()).looking_at(orbit.target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pose_is_angled() {
        let pose = ViewPose::default();
        assert_eq!(pose.position, ANGLED_VIEW_POS);
        assert!(!pose.top_view);
        assert_eq!(pose.generation, 0);
    }

    #[test]
    fn test_set_top_view() {
        let mut pose = ViewPose::default();
        pose.set_top_view();
        assert_eq!(pose.position, TOP_VIEW_POS);
        assert!(pose.top_view);
        assert_eq!(pose.generation, 1);
    }

    #[test]
    fn test_repeated_command_bumps_generation_each_time() {
        let mut pose = ViewPose::default();
        pose.set_top_view();
        let first = pose.generation;
        pose.set_top_view();
        // Position and flag are unchanged but the re-aim must run again.
        assert_eq!(pose.position, TOP_VIEW_POS);
        assert!(pose.top_view);
        assert_ne!(pose.generation, first);
    }

    #[test]
    fn test_flag_tracks_last_command() {
        let mut pose = ViewPose::default();
        pose.set_top_view();
        pose.set_angled_view();
        pose.set_top_view();
        assert!(pose.top_view);

        pose.set_top_view();
        pose.set_angled_view();
        assert!(!pose.top_view);
        assert_eq!(pose.position, ANGLED_VIEW_POS);
    }

    #[test]
    fn test_release_top_view_keeps_position_and_generation() {
        let mut pose = ViewPose::default();
        pose.set_top_view();
        let generation = pose.generation;
        pose.release_top_view();
        assert!(!pose.top_view);
        assert_eq!(pose.position, TOP_VIEW_POS);
        assert_eq!(pose.generation, generation);
    }

    #[test]
    fn test_orbit_controls_locked_in_top_view() {
        let mut pose = ViewPose::default();
        pose.set_top_view();
        let controls = OrbitControls::for_pose(&pose);
        assert!(!controls.enabled);
        assert_eq!(controls.min_pitch, controls.max_pitch);
    }

    #[test]
    fn test_orbit_controls_full_range_in_angled_view() {
        let controls = OrbitControls::for_pose(&ViewPose::default());
        assert!(controls.enabled);
        assert!(controls.min_pitch < controls.max_pitch);
    }

    #[test]
    fn test_orbit_camera_position_roundtrip() {
        let orbit = OrbitCamera::from_position(ANGLED_VIEW_POS);
        let position = orbit.position();
        assert!(
            position.distance(ANGLED_VIEW_POS) < 1e-4,
            "got {position:?}"
        );
    }

    #[test]
    fn test_orbit_camera_from_overhead_position() {
        let orbit = OrbitCamera::from_position(TOP_VIEW_POS);
        assert!((orbit.pitch - TOP_DOWN_PITCH).abs() < 1e-5);
        assert!((orbit.distance - 10.0).abs() < 1e-5);
        assert_eq!(orbit.target, Vec3::ZERO);
    }

    #[test]
    fn test_panned_target_moves_position_with_it() {
        let mut orbit = OrbitCamera::from_position(ANGLED_VIEW_POS);
        let before = orbit.position();
        orbit.target += Vec3::new(1.0, 0.0, -2.0);
        let after = orbit.position();
        assert!((after - before).distance(Vec3::new(1.0, 0.0, -2.0)) < 1e-5);
    }

    #[test]
    fn test_clamp_target_bounds_floor_plane() {
        let mut target = Vec3::new(100.0, 0.0, -100.0);
        clamp_target(&mut target);
        assert_eq!(target, Vec3::new(PAN_EXTENT, 0.0, -PAN_EXTENT));

        let mut inside = Vec3::new(1.0, 0.0, 1.0);
        clamp_target(&mut inside);
        assert_eq!(inside, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_angled_pose_transform_aims_at_origin() {
        let pose = ViewPose::default();
        let transform = pose_transform(&pose);
        let expected = (Vec3::ZERO - pose.position).normalize();
        assert!(transform.forward().distance(expected) < 1e-5);
    }

    #[test]
    fn test_top_pose_transform_looks_straight_down() {
        let mut pose = ViewPose::default();
        pose.set_top_view();
        let transform = pose_transform(&pose);
        assert!(transform.forward().distance(Vec3::NEG_Y) < 1e-5);

        // The roll pins the overhead frame's "up" away from the unrolled
        // fallback orientation.
        let unrolled = Transform::from_translation(pose.position).looking_at(Vec3::ZERO, Vec3::Y);
        assert!(transform.up().distance(*unrolled.up()) > 0.5);
    }
}
