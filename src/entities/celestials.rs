//! Celestials are the bodies in the scene
//! The sun sits still at the origin, planets orbit it

pub mod celestial;
pub mod planet;
pub mod sun;
