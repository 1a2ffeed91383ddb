use bevy::{
    asset::Assets,
    core::Name,
    ecs::{
        component::Component,
        entity::Entity,
        system::{Commands, ResMut},
    },
    hierarchy::BuildChildren,
    log::info,
    pbr::{PbrBundle, PointLight, PointLightBundle, StandardMaterial},
    render::{
        color::Color,
        mesh::{shape, Mesh},
    },
    transform::components::Transform,
};

use crate::config::{hex_color, SunDescriptor};

use super::celestial::{CelestialIdx, SPHERE_RESOLUTION};

/// Marks the central star
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Sun;

pub struct SunBuilder {
    color: Color,
    radius: f32,
    light_intensity: f32,
    light_range: f32,
}

impl Default for SunBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&SunDescriptor> for SunBuilder {
    fn from(descriptor: &SunDescriptor) -> Self {
        Self::new()
            .color(hex_color(descriptor.color))
            .radius(descriptor.size)
            .light_intensity(descriptor.light_intensity)
            .light_range(descriptor.light_range)
    }
}

impl SunBuilder {
    pub fn new() -> Self {
        Self {
            color: Color::YELLOW,
            radius: 1.0,
            light_intensity: 1500.0,
            light_range: 100.0,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn light_intensity(mut self, light_intensity: f32) -> Self {
        self.light_intensity = light_intensity;
        self
    }

    pub fn light_range(mut self, light_range: f32) -> Self {
        self.light_range = light_range;
        self
    }

    /// The point light that sits inside the sun
    pub fn light(&self) -> PointLight {
        PointLight {
            color: Color::WHITE,
            intensity: self.light_intensity,
            range: self.light_range,
            shadows_enabled: false,
            ..Default::default()
        }
    }

    /// Spawns the sun at the origin with its light as a child
    pub fn spawn(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
    ) -> Entity {
        let mesh = meshes.add(Mesh::from(shape::UVSphere {
            radius: self.radius,
            sectors: SPHERE_RESOLUTION,
            stacks: SPHERE_RESOLUTION,
        }));
        // The sun is its own light source, so it ignores scene lighting
        let material = materials.add(StandardMaterial {
            base_color: self.color,
            unlit: true,
            ..Default::default()
        });
        let light = self.light();
        let sun_id = commands
            .spawn((
                PbrBundle {
                    mesh,
                    material,
                    transform: Transform::from_xyz(0.0, 0.0, 0.0),
                    ..Default::default()
                },
                Sun,
                Name::new("Sun"),
                CelestialIdx(0),
            ))
            .with_children(|parent| {
                parent.spawn(PointLightBundle {
                    point_light: light,
                    ..Default::default()
                });
            })
            .id();
        info!("Spawned the sun with radius {}", self.radius);
        sun_id
    }
}
