//! Planar displacement between two locations.

use crate::tour::Location;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Vector from an origin to a target, split into east and north components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub east: f64,
    pub north: f64,
}

impl Displacement {
    pub fn new(east: f64, north: f64) -> Self {
        trace!(east, north, "displacement");
        Self { east, north }
    }

    /// Displacement of `target` as seen from `origin` (target minus origin).
    pub fn between(origin: Location, target: Location) -> Self {
        Self::new(
            target.easting - origin.easting,
            target.northing - origin.northing,
        )
    }

    /// Straight-line length of the vector.
    pub fn distance(&self) -> f64 {
        self.east.hypot(self.north)
    }

    /// Compass bearing in degrees clockwise from north, in `[0, 360)`.
    ///
    /// The zero vector has no direction and reports 0.
    pub fn bearing(&self) -> f64 {
        if self.east == 0.0 && self.north == 0.0 {
            return 0.0;
        }
        let degrees = self.east.atan2(self.north).to_degrees();
        if degrees < 0.0 {
            // tiny negative angles round up to exactly 360.0
            (degrees + 360.0) % 360.0
        } else {
            degrees
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.01;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn north_bearing() {
        assert_close(Displacement::new(0.0, 1.0).bearing(), 0.0);
    }

    #[test]
    fn east_bearing() {
        assert_close(Displacement::new(1.0, 0.0).bearing(), 90.0);
    }

    #[test]
    fn south_and_west_bearings() {
        assert_close(Displacement::new(0.0, -1.0).bearing(), 180.0);
        assert_close(Displacement::new(-1.0, 0.0).bearing(), 270.0);
    }

    #[test]
    fn distance_of_diagonal() {
        assert_close(Displacement::new(2.0, 2.0).distance(), 8.0_f64.sqrt());
    }

    #[test]
    fn negative_east_wraps_into_range() {
        assert_close(Displacement::new(-50.0, 54.465).bearing(), 317.447_839_35);
    }

    #[test]
    fn negative_north_points_south_east() {
        assert_close(Displacement::new(23.21, -35.75).bearing(), 147.007_126_587_838_7);
    }

    #[test]
    fn origin_has_zero_bearing_and_distance() {
        let d = Displacement::new(0.0, 0.0);
        assert_eq!(d.bearing(), 0.0);
        assert_eq!(d.distance(), 0.0);
    }

    #[test]
    fn between_subtracts_origin_from_target() {
        let d = Displacement::between(Location::new(1000.0, -1000.0), Location::new(700.0, -900.0));
        assert_eq!(d, Displacement::new(-300.0, 100.0));
        assert_eq!(d.bearing().round(), 288.0);
        assert_eq!(d.distance().round(), 316.0);
    }
}
