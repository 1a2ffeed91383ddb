//! This module contains all the physics related code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * The orbit math should stay usable without a running app.
//!   Bevy systems are thin wrappers around plain functions.
//! * Physics should be highly unit tested.

use bevy::app::{PluginGroup, PluginGroupBuilder};

use self::orbits::{
    animator::{OrbitAnimator, OrbitPlugin},
    paths::OrbitPathPlugin,
};
use self::util::clock::AnimationClock;

pub mod orbits;
pub mod util;

/// Orbit animation and orbit rings
#[derive(Default)]
pub struct PhysicsPluginGroup {
    pub animator: OrbitAnimator,
    pub clock: AnimationClock,
}

impl PluginGroup for PhysicsPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(OrbitPlugin {
                animator: self.animator,
                clock: self.clock,
            })
            .add(OrbitPathPlugin)
    }
}
