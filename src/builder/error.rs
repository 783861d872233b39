//! Build errors for the controller builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Waypoint radius not specified. Call .waypoint_radius(r) before .build()")]
    MissingWaypointRadius,

    #[error("Waypoint separation not specified. Call .waypoint_separation(d) before .build()")]
    MissingWaypointSeparation,

    #[error("Invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
