//! Error types for the orrery.
//!
//! Everything here is raised during startup. The per-frame loop has no
//! failure modes once the configuration has been validated.

use crate::config::ConfigError;

/// Errors that stop the orrery from starting, or that a control refuses.
#[derive(Debug, thiserror::Error)]
pub enum OrreryError {
    /// A body with a non-positive or non-finite radius or period.
    #[error("invalid body config for {name}: {reason}")]
    InvalidBodyConfig {
        /// The name of the offending body.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A time speed multiplier that is negative or not a number.
    #[error("invalid time speed multiplier: {0}")]
    InvalidTimeSpeed(f64),

    /// The slider range in the configuration is not usable.
    #[error("invalid time speed range: {0}")]
    InvalidTimeSpeedRange(String),

    /// The rendering or UI environment is not available.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl OrreryError {
    /// Shorthand for [`OrreryError::InvalidBodyConfig`]
    pub fn invalid_body(name: impl Into<String>, reason: impl Into<String>) -> Self {
        OrreryError::InvalidBodyConfig {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
