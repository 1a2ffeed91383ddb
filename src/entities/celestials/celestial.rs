use bevy::app::{App, Plugin, Startup};
use bevy::asset::Assets;
use bevy::ecs::component::Component;
use bevy::ecs::system::{Commands, Res, ResMut, Resource};
use bevy::log::info;
use bevy::pbr::StandardMaterial;
use bevy::render::mesh::Mesh;

use crate::config::{BodyDescriptor, SolarSystemConfig, SunDescriptor};
use crate::error::OrreryError;
use crate::physics::orbits::components::CircularOrbit;

use super::planet::PlanetBuilder;
use super::sun::SunBuilder;

/// Sectors and stacks of every body's sphere mesh
pub const SPHERE_RESOLUTION: usize = 32;

/// A component that allows us to enumerate over all the celestials.
/// The sun is always 0, planets follow in configuration order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CelestialIdx(pub usize);

/// The validated contents of the scene.
/// Holding one of these means every orbit is safe to animate.
#[derive(Resource, Debug, Clone)]
pub struct SolarSystem {
    sun: SunDescriptor,
    bodies: Vec<(BodyDescriptor, CircularOrbit)>,
}

impl SolarSystem {
    /// Validates the configuration, failing on the first bad body
    pub fn new(config: &SolarSystemConfig) -> Result<Self, OrreryError> {
        let orbits = config.validate()?;
        Ok(Self {
            sun: config.sun.clone(),
            bodies: config.bodies.iter().cloned().zip(orbits).collect(),
        })
    }

    pub fn get_sun(&self) -> &SunDescriptor {
        &self.sun
    }

    pub fn get_bodies(&self) -> &[(BodyDescriptor, CircularOrbit)] {
        &self.bodies
    }
}

/// A plugin that builds the sun and planets at startup
pub struct CelestialPlugin;

impl Plugin for CelestialPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup_system);
    }
}

/// Bevy Systems
impl CelestialPlugin {
    /// Spawns the sun and one entity per configured body
    pub fn setup_system(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        solar_system: Res<SolarSystem>,
    ) {
        SunBuilder::from(solar_system.get_sun()).spawn(
            &mut commands,
            &mut meshes,
            &mut materials,
        );
        for (i, (descriptor, orbit)) in solar_system.get_bodies().iter().enumerate() {
            PlanetBuilder::from_descriptor(descriptor, *orbit).spawn(
                i + 1,
                &mut commands,
                &mut meshes,
                &mut materials,
            );
        }
        info!(
            "Scene built with {} orbiting bodies",
            solar_system.get_bodies().len()
        );
    }
}
