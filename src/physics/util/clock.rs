use std::{
    fmt::Debug,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use bevy::{
    ecs::system::Resource,
    log::debug,
    time::Time,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::error::OrreryError;

/// Anything that can say what time it is.
/// Each call should return a value no smaller than the previous one.
pub trait TickSource {
    fn now(&self) -> Duration;
}

impl TickSource for Time {
    /// Time elapsed since the app started
    fn now(&self) -> Duration {
        self.elapsed()
    }
}

/// Reads the system clock, measured from the UNIX epoch.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl TickSource for WallClock {
    fn now(&self) -> Duration {
        // A system clock set before 1970 is treated as the epoch itself
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// A clock that only moves when told to.
/// Mostly used for testing
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    time: Duration,
    frame: u32,
}

impl ManualClock {
    pub fn new(time: Duration) -> Self {
        Self { time, frame: 0 }
    }
    pub fn get_current_frame(&self) -> u32 {
        self.frame
    }
    pub fn update(&mut self, delta: Duration) {
        self.time += delta;
        self.frame += 1;
    }
}

impl TickSource for ManualClock {
    fn now(&self) -> Duration {
        self.time
    }
}

/// The fastest speed multiplier accepted. Together with the shortest
/// orbital period this keeps every angle finite, even at epoch times.
pub const MAX_TIME_SPEED: f64 = 1e6;

/// Where the animation measures time from
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TimeOrigin {
    /// Elapsed time since the app started
    #[default]
    Startup,
    /// Wall clock time since 1970, so the phase of every orbit depends on
    /// the moment the app was launched
    #[strum(serialize = "Unix Epoch")]
    UnixEpoch,
}

/// The shared clock state read by the animator every frame.
///
/// The speed multiplier is only ever written by the control event handler
/// and only ever read by the animator, both on the main schedule.
#[derive(Resource, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    speed: f64,
    origin: TimeOrigin,
}

impl Debug for AnimationClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationClock")
            .field("speed", &self.speed)
            .field("origin", &self.origin.to_string())
            .finish()
    }
}

impl Default for AnimationClock {
    /// Real time speed, measured from startup
    fn default() -> Self {
        Self {
            speed: 1.0,
            origin: TimeOrigin::Startup,
        }
    }
}

impl AnimationClock {
    pub fn new(speed: f64, origin: TimeOrigin) -> Result<Self, OrreryError> {
        let mut clock = Self {
            origin,
            ..Default::default()
        };
        clock.set_speed(speed)?;
        Ok(clock)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Sets the speed multiplier.
    /// Negative, non-finite and runaway values are refused and the old value is kept.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), OrreryError> {
        if !speed.is_finite() || !(0.0..=MAX_TIME_SPEED).contains(&speed) {
            return Err(OrreryError::InvalidTimeSpeed(speed));
        }
        debug!("Time speed {} -> {}", self.speed, speed);
        self.speed = speed;
        Ok(())
    }

    pub fn origin(&self) -> TimeOrigin {
        self.origin
    }

    pub fn set_origin(&mut self, origin: TimeOrigin) {
        debug!("Time origin {} -> {}", self.origin, origin);
        self.origin = origin;
    }

    /// Reads the current time from the source matching the configured origin
    pub fn read(&self, since_startup: &impl TickSource) -> Duration {
        match self.origin {
            TimeOrigin::Startup => since_startup.now(),
            TimeOrigin::UnixEpoch => WallClock.now(),
        }
    }
}
