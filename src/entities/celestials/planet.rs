use bevy::{
    asset::Assets,
    core::Name,
    ecs::{
        bundle::Bundle,
        component::Component,
        entity::Entity,
        system::{Commands, ResMut},
    },
    pbr::{PbrBundle, StandardMaterial},
    render::{
        color::Color,
        mesh::{shape, Mesh},
    },
    transform::components::Transform,
};

use crate::{
    config::{hex_color, BodyDescriptor},
    physics::orbits::{
        components::CircularOrbit,
        paths::{OrbitPath, DEFAULT_PATH_COLOR},
    },
};

use super::celestial::{CelestialIdx, SPHERE_RESOLUTION};

/// Marks a body that orbits the sun
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Planet;

/// Everything about a planet except its render bundle
#[derive(Bundle)]
pub struct PlanetBundle {
    pub planet: Planet,
    pub name: Name,
    pub orbit: CircularOrbit,
    pub path: OrbitPath,
    pub idx: CelestialIdx,
}

pub struct PlanetBuilder {
    name: String,
    orbit: CircularOrbit,
    color: Color,
    radius: f32,
}

impl PlanetBuilder {
    /// Every planet needs an orbit, which has already been validated
    pub fn new(orbit: CircularOrbit) -> Self {
        Self {
            name: String::from("Planet"),
            orbit,
            color: Color::WHITE,
            radius: 0.5,
        }
    }

    pub fn from_descriptor(descriptor: &BodyDescriptor, orbit: CircularOrbit) -> Self {
        Self::new(orbit)
            .name(&descriptor.name)
            .color(hex_color(descriptor.color))
            .radius(descriptor.size)
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Where the planet sits before the first frame is animated
    pub fn initial_transform(&self) -> Transform {
        Transform::from_xyz(self.orbit.radius().0 as f32, 0.0, 0.0)
    }

    pub fn build(&self, idx: usize) -> PlanetBundle {
        PlanetBundle {
            planet: Planet,
            name: Name::new(self.name.clone()),
            orbit: self.orbit,
            path: OrbitPath::new(self.orbit.radius(), DEFAULT_PATH_COLOR),
            idx: CelestialIdx(idx),
        }
    }

    /// Spawns the planet with its mesh and orbit ring
    pub fn spawn(
        &self,
        idx: usize,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
    ) -> Entity {
        let mesh = meshes.add(Mesh::from(shape::UVSphere {
            radius: self.radius,
            sectors: SPHERE_RESOLUTION,
            stacks: SPHERE_RESOLUTION,
        }));
        let material = materials.add(StandardMaterial {
            base_color: self.color,
            perceptual_roughness: 0.8,
            ..Default::default()
        });
        commands
            .spawn((
                PbrBundle {
                    mesh,
                    material,
                    transform: self.initial_transform(),
                    ..Default::default()
                },
                self.build(idx),
            ))
            .id()
    }
}
