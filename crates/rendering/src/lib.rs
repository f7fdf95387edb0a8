use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod labels;
pub mod picking;
pub mod volumes;

/// Length of the world-axes gizmo at the origin.
const AXES_LENGTH: f32 = 5.0;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<camera::ViewPose>()
            .init_resource::<camera::OrbitCamera>()
            .init_resource::<camera::OrbitControls>()
            .init_resource::<camera::OrbitDrag>()
            .init_resource::<camera::PanDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    volumes::spawn_building_volumes,
                ),
            )
            .add_systems(
                Update,
                (
                    // Click dispatch reads the drag state before the orbit
                    // system resets it on release.
                    picking::dispatch_pointer_click,
                    camera::camera_orbit_drag,
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera::sync_orbit_controls,
                    camera::apply_view_pose,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (picking::update_hover, volumes::apply_hover_highlight).chain(),
            )
            .add_systems(Update, (labels::building_labels_ui, draw_axes));
    }
}

fn setup_lighting(mut commands: Commands) {
    // Baseline illumination so the translucent volumes stay readable.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    // Key spot light above the scene, aimed at the origin.
    commands.spawn((
        SpotLight {
            intensity: 5_000_000.0,
            range: 60.0,
            inner_angle: 0.0,
            outer_angle: 0.15,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Fill light from the opposite corner.
    commands.spawn((
        PointLight {
            intensity: 1_000_000.0,
            range: 60.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -10.0),
    ));
}

/// World axes at the scene origin, the reference frame the camera re-aims to.
fn draw_axes(mut gizmos: Gizmos) {
    gizmos.axes(Transform::IDENTITY, AXES_LENGTH);
}
