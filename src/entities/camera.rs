//! The bevy camera and scene lighting

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::{
    app::{App, Plugin, Startup},
    core_pipeline::{clear_color::ClearColor, core_3d::Camera3dBundle},
    ecs::{
        component::Component,
        entity::Entity,
        system::Commands,
    },
    math::Vec3,
    pbr::AmbientLight,
    render::{
        camera::{PerspectiveProjection, Projection},
        color::Color,
    },
    transform::components::Transform,
};

use crate::config::hex_color;

/// Used to help identify our main camera
#[derive(Component)]
pub struct MainCamera;

/// Where the camera looks at the system from, high above and a little back
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 20.0, 20.0);

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// The plugin for the camera and lights
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    /// Build the camera plugin
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .insert_resource(AmbientLight {
                color: hex_color(0x404040),
                brightness: 0.5,
            })
            .add_systems(Startup, Self::setup_system);
    }
}

/// Startup functions
impl CameraPlugin {
    /// The perspective used by the main camera
    pub fn projection() -> Projection {
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..Default::default()
        })
    }

    /// Setup the main camera, looking down at the sun
    pub fn setup_main_camera(commands: &mut Commands) -> Entity {
        commands
            .spawn((
                Camera3dBundle {
                    projection: Self::projection(),
                    transform: Transform::from_translation(CAMERA_POSITION)
                        .looking_at(Vec3::ZERO, Vec3::Y),
                    ..Default::default()
                },
                MainCamera,
            ))
            .id()
    }

    /// Bevy system wrapper around [`CameraPlugin::setup_main_camera`]
    fn setup_system(mut commands: Commands) {
        Self::setup_main_camera(&mut commands);
    }
}
