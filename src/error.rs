//! Errors reported by controller operations.

use crate::core::{Mode, Operation};
use thiserror::Error;

/// Why a controller operation was rejected.
///
/// A rejected operation never leaves the session partially modified, so
/// every variant is recoverable by retrying with corrected input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TourError {
    #[error("Invalid operation: {operation} is not available in {mode} mode")]
    WrongMode { operation: Operation, mode: Mode },

    #[error("Cannot add a leg right after another leg")]
    WaypointMissing,

    #[error("Waypoint is {distance:.1} from the previous one, minimum separation is {separation}")]
    WaypointTooClose { distance: f64, separation: f64 },

    #[error("Current location is unknown, set a location first")]
    LocationUnknown,

    #[error("A tour should have at least one waypoint")]
    NoWaypoints,

    #[error("Cannot finish creating a tour without a final waypoint")]
    NoFinalWaypoint,

    #[error("A tour with id '{id}' already exists")]
    DuplicateId { id: String },

    #[error("A tour with id '{id}' has not been found")]
    NotFound { id: String },
}

/// Broad class of a [`TourError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operation invoked outside the mode it needs
    Mode,
    /// Legs and waypoints added or finished in the wrong order
    Ordering,
    /// New waypoint too close to the previous one
    Geometric,
    /// Tour id already taken
    Identity,
    /// Tour id not in the library
    Lookup,
    /// No location has been set yet
    Position,
}

impl TourError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WrongMode { .. } => ErrorKind::Mode,
            Self::WaypointMissing | Self::NoWaypoints | Self::NoFinalWaypoint => {
                ErrorKind::Ordering
            }
            Self::WaypointTooClose { .. } => ErrorKind::Geometric,
            Self::DuplicateId { .. } => ErrorKind::Identity,
            Self::NotFound { .. } => ErrorKind::Lookup,
            Self::LocationUnknown => ErrorKind::Position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let wrong_mode = TourError::WrongMode {
            operation: Operation::AddWaypoint,
            mode: Mode::BrowseOverview,
        };
        assert_eq!(wrong_mode.kind(), ErrorKind::Mode);
        assert_eq!(TourError::WaypointMissing.kind(), ErrorKind::Ordering);
        assert_eq!(TourError::NoFinalWaypoint.kind(), ErrorKind::Ordering);
        assert_eq!(
            TourError::WaypointTooClose {
                distance: 3.0,
                separation: 25.0
            }
            .kind(),
            ErrorKind::Geometric
        );
        assert_eq!(
            TourError::DuplicateId { id: "T1".into() }.kind(),
            ErrorKind::Identity
        );
        assert_eq!(
            TourError::NotFound { id: "T9".into() }.kind(),
            ErrorKind::Lookup
        );
        assert_eq!(TourError::LocationUnknown.kind(), ErrorKind::Position);
    }

    #[test]
    fn messages_name_the_offending_values() {
        let err = TourError::WrongMode {
            operation: Operation::AddLeg,
            mode: Mode::Follow,
        };
        assert_eq!(
            err.to_string(),
            "Invalid operation: addLeg is not available in Follow mode"
        );
        assert_eq!(
            TourError::DuplicateId { id: "T2".into() }.to_string(),
            "A tour with id 'T2' already exists"
        );
    }
}
