//! Builder for constructing controllers.

use crate::builder::error::BuildError;
use crate::config::ControllerConfig;
use crate::controller::Controller;

/// Builder for a [`Controller`] with a fluent API.
///
/// Both thresholds are required; `build` validates them together and
/// reports every problem it finds.
#[derive(Clone, Debug, Default)]
pub struct ControllerBuilder {
    waypoint_radius: Option<f64>,
    waypoint_separation: Option<f64>,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the arrival radius (required).
    pub fn waypoint_radius(mut self, radius: f64) -> Self {
        self.waypoint_radius = Some(radius);
        self
    }

    /// Set the minimum waypoint separation (required).
    pub fn waypoint_separation(mut self, separation: f64) -> Self {
        self.waypoint_separation = Some(separation);
        self
    }

    /// Take both thresholds from an existing config.
    pub fn config(self, config: ControllerConfig) -> Self {
        self.waypoint_radius(config.waypoint_radius)
            .waypoint_separation(config.waypoint_separation)
    }

    /// Build the controller.
    /// Returns an error if a threshold is missing or invalid.
    pub fn build(self) -> Result<Controller, BuildError> {
        let radius = self
            .waypoint_radius
            .ok_or(BuildError::MissingWaypointRadius)?;
        let separation = self
            .waypoint_separation
            .ok_or(BuildError::MissingWaypointSeparation)?;

        let config = ControllerConfig::new(radius, separation);
        config.check().map_err(BuildError::InvalidConfig)?;

        Ok(Controller::new(config))
    }
}
