//! A sun with orbiting planets, animated in real time.
//!
//! Bodies follow circular orbits whose angle is derived from the current time
//! every frame. A single speed multiplier, set from an egui slider, controls
//! how fast time passes.

pub mod config;
pub mod entities;
pub mod error;
pub mod gui;
pub mod physics;
