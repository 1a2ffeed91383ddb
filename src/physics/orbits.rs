//! Circular orbits around the central body.

pub mod animator;
pub mod components;
pub mod paths;
