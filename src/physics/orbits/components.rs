#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::ecs::component::Component;
use derive_more::{Display, From, Into};

use crate::error::OrreryError;

/// The distance from the central body to the orbital path, in world units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
pub struct OrbitalRadius(pub f64);

/// The time for one full revolution, in the animator's time unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
pub struct OrbitalPeriod(pub f64);

/// The shortest period accepted. Anything smaller lets the angle overflow
/// to infinity at epoch-sized times.
pub const MIN_ORBITAL_PERIOD: f64 = 1e-6;

/// A circular orbit in the XZ plane around the origin.
///
/// Can only be built through [`CircularOrbit::new`], which guarantees that
/// both the radius and the period are finite and strictly positive.
/// Both are kept in `f64` so the phase at large times matches the data exactly.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    /// Distance from the origin
    radius: OrbitalRadius,
    /// Time for one revolution
    period: OrbitalPeriod,
}

impl CircularOrbit {
    /// Creates a new orbit, rejecting radii and periods that would produce
    /// a degenerate or undefined position.
    pub fn new(
        name: &str,
        radius: OrbitalRadius,
        period: OrbitalPeriod,
    ) -> Result<Self, OrreryError> {
        if !radius.0.is_finite() || radius.0 <= 0.0 {
            return Err(OrreryError::invalid_body(
                name,
                format!("orbital radius must be positive, got {}", radius),
            ));
        }
        if !period.0.is_finite() || period.0 <= 0.0 {
            return Err(OrreryError::invalid_body(
                name,
                format!("orbital period must be positive, got {}", period),
            ));
        }
        if period.0 < MIN_ORBITAL_PERIOD {
            return Err(OrreryError::invalid_body(
                name,
                format!(
                    "orbital period must be at least {}, got {}",
                    MIN_ORBITAL_PERIOD, period
                ),
            ));
        }
        Ok(Self { radius, period })
    }

    /// Returns the orbital radius
    pub fn radius(&self) -> OrbitalRadius {
        self.radius
    }

    /// Returns the orbital period
    pub fn period(&self) -> OrbitalPeriod {
        self.period
    }
}
