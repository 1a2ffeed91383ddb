//! Static configuration for the solar system.
//!
//! The defaults describe the eight planets. A RON file can override any part
//! of it; missing fields keep their defaults.

use std::path::Path;

use bevy::{ecs::system::Resource, log::info, render::color::Color};
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;
use crate::physics::orbits::components::{CircularOrbit, OrbitalPeriod, OrbitalRadius};
use crate::physics::util::clock::{AnimationClock, TimeOrigin, MAX_TIME_SPEED};

/// Where the config is looked up when the app starts
pub const DEFAULT_CONFIG_PATH: &str = "assets/solar_system.ron";

/// Errors that can occur when loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),
}

/// Converts a `0xRRGGBB` color to a bevy color
pub fn hex_color(rgb: u32) -> Color {
    Color::rgb_u8(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
    )
}

/// One orbiting body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyDescriptor {
    pub name: String,
    /// `0xRRGGBB`
    pub color: u32,
    /// Sphere radius
    pub size: f32,
    /// Orbital radius
    pub distance: f64,
    /// Orbital period, in Earth years
    pub period: f64,
}

impl BodyDescriptor {
    pub fn new(name: &str, color: u32, size: f32, distance: f64, period: f64) -> Self {
        Self {
            name: name.to_owned(),
            color,
            size,
            distance,
            period,
        }
    }

    /// Checks the orbit and builds it
    pub fn orbit(&self) -> Result<CircularOrbit, OrreryError> {
        CircularOrbit::new(
            &self.name,
            OrbitalRadius(self.distance),
            OrbitalPeriod(self.period),
        )
    }
}

/// The central star.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SunDescriptor {
    /// `0xRRGGBB`
    pub color: u32,
    pub size: f32,
    /// Point light intensity in lumens
    pub light_intensity: f32,
    /// Point light range in world units
    pub light_range: f32,
}

impl Default for SunDescriptor {
    fn default() -> Self {
        Self {
            color: 0xffff00,
            size: 1.0,
            light_intensity: 1500.0,
            light_range: 100.0,
        }
    }
}

/// Range and starting value of the time speed slider.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimeSpeedConfig {
    pub min: f64,
    pub default: f64,
    pub max: f64,
}

impl Default for TimeSpeedConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            default: 1.0,
            max: 10.0,
        }
    }
}

impl TimeSpeedConfig {
    pub fn validate(&self) -> Result<(), OrreryError> {
        if !(self.min.is_finite() && self.default.is_finite() && self.max.is_finite()) {
            return Err(OrreryError::InvalidTimeSpeedRange(format!(
                "bounds must be finite, got {:?}",
                self
            )));
        }
        if self.min < 0.0 {
            return Err(OrreryError::InvalidTimeSpeedRange(format!(
                "minimum must not be negative, got {}",
                self.min
            )));
        }
        if self.max > MAX_TIME_SPEED {
            return Err(OrreryError::InvalidTimeSpeedRange(format!(
                "maximum must be at most {}, got {}",
                MAX_TIME_SPEED, self.max
            )));
        }
        if !(self.min <= self.default && self.default <= self.max) {
            return Err(OrreryError::InvalidTimeSpeedRange(format!(
                "expected {} <= {} <= {}",
                self.min, self.default, self.max
            )));
        }
        Ok(())
    }
}

/// Top-level solar system configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolarSystemConfig {
    pub sun: SunDescriptor,
    /// Ordered from the innermost orbit outwards
    pub bodies: Vec<BodyDescriptor>,
    pub time_speed: TimeSpeedConfig,
    pub time_origin: TimeOrigin,
}

impl Default for SolarSystemConfig {
    fn default() -> Self {
        Self {
            sun: SunDescriptor::default(),
            bodies: vec![
                BodyDescriptor::new("Mercury", 0xaaaaaa, 0.2, 2.0, 0.24),
                BodyDescriptor::new("Venus", 0xffa500, 0.4, 3.5, 0.62),
                BodyDescriptor::new("Earth", 0x0000ff, 0.4, 5.0, 1.0),
                BodyDescriptor::new("Mars", 0xff0000, 0.3, 7.0, 1.88),
                BodyDescriptor::new("Jupiter", 0xffa07a, 0.7, 9.0, 11.86),
                BodyDescriptor::new("Saturn", 0xffd700, 0.6, 11.0, 29.46),
                BodyDescriptor::new("Uranus", 0x87cefa, 0.5, 13.0, 84.01),
                BodyDescriptor::new("Neptune", 0x4682b4, 0.5, 15.0, 164.79),
            ],
            time_speed: TimeSpeedConfig::default(),
            time_origin: TimeOrigin::default(),
        }
    }
}

impl SolarSystemConfig {
    /// Load the config from `path`, or fall back to the defaults if there is
    /// no file there.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
            let config = Self::from_ron(&contents)?;
            info!("Loaded solar system config from {}", path.display());
            Ok(config)
        } else {
            info!(
                "No config at {}, using the built-in solar system",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(ConfigError::ParseError)
    }

    /// Checks every body and the slider range, returning the orbits in order.
    /// The first invalid entry aborts the whole thing.
    pub fn validate(&self) -> Result<Vec<CircularOrbit>, OrreryError> {
        self.time_speed.validate()?;
        self.bodies.iter().map(BodyDescriptor::orbit).collect()
    }

    /// The clock the animation starts with
    pub fn animation_clock(&self) -> Result<AnimationClock, OrreryError> {
        AnimationClock::new(self.time_speed.default, self.time_origin)
    }
}
