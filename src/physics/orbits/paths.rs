//! Paths are the visible rings each body travels along.
//! They are precomputed once at startup and redrawn as gizmos every frame.

use bevy::{
    app::{App, Plugin, Update},
    ecs::{component::Component, system::Query},
    gizmos::gizmos::Gizmos,
    math::Vec3,
    render::color::Color,
};

use super::components::OrbitalRadius;

/// Number of straight segments used to approximate a ring
pub const NB_SEGMENTS: usize = 64;

/// The default ring color, a neutral grey
pub const DEFAULT_PATH_COLOR: Color = Color::rgb(0.533, 0.533, 0.533);

/// A closed polyline in the XZ plane that traces an orbit.
#[derive(Component, Debug, Clone)]
pub struct OrbitPath {
    points: Vec<Vec3>,
    color: Color,
}

impl OrbitPath {
    /// Builds the ring for an orbit of the given radius.
    /// The first point is repeated at the end so the strip closes.
    pub fn new(radius: OrbitalRadius, color: Color) -> Self {
        let mut points: Vec<Vec3> = Vec::with_capacity(NB_SEGMENTS + 1);
        for i in 0..=NB_SEGMENTS {
            let angle = 2.0 * std::f32::consts::PI * (i as f32) / (NB_SEGMENTS as f32);
            let radius = radius.0 as f32;
            points.push(Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()));
        }
        Self { points, color }
    }

    pub fn get_points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn get_color(&self) -> Color {
        self.color
    }
}

/// Draws every [`OrbitPath`]
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, Self::draw_orbit_paths_system);
    }
}

/// Bevy Systems
impl OrbitPathPlugin {
    pub fn draw_orbit_paths_system(paths: Query<&OrbitPath>, mut gizmos: Gizmos) {
        for path in paths.iter() {
            gizmos.linestrip(path.get_points().iter().copied(), path.get_color());
        }
    }
}
