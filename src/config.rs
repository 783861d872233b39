//! Controller configuration.
//!
//! Both thresholds are required: the core assumes no defaults. Validation
//! uses Stillwater's `Validation` so every problem is reported at once.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems with a [`ControllerConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Invalid configuration document: {0}")]
    Parse(String),
}

/// Thresholds governing authoring and guidance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Distance within which a waypoint counts as reached.
    pub waypoint_radius: f64,
    /// Minimum distance between consecutive waypoints while authoring.
    pub waypoint_separation: f64,
}

impl ControllerConfig {
    pub fn new(waypoint_radius: f64, waypoint_separation: f64) -> Self {
        Self {
            waypoint_radius,
            waypoint_separation,
        }
    }

    /// Parse a JSON document such as
    /// `{"waypoint_radius": 10.0, "waypoint_separation": 25.0}`.
    ///
    /// The parsed values are not validated; call [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every field, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks = vec![
            positive_finite("waypoint_radius", self.waypoint_radius),
            positive_finite("waypoint_separation", self.waypoint_separation),
        ];
        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) flattened into a `Result`.
    pub fn check(&self) -> Result<(), Vec<ConfigError>> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

fn positive_finite(field: &'static str, value: f64) -> Validation<(), NonEmptyVec<ConfigError>> {
    if !value.is_finite() {
        Validation::fail(ConfigError::NotFinite { field, value })
    } else if value <= 0.0 {
        Validation::fail(ConfigError::NotPositive { field, value })
    } else {
        Validation::success(())
    }
}
