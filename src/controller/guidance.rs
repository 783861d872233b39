//! Live guidance while following a tour.
//!
//! These functions are pure: given the tour, the progress so far and a
//! position fix they compute the next stage and the chunks to show. The
//! controller applies the result.

use crate::geometry::Displacement;
use crate::output::Chunk;
use crate::tour::{Location, Tour};

/// What a position fix meant for progress along the tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrival {
    /// Waypoint at this index was reached for the first time.
    Reached(usize),
    /// User is back within radius of the already reached waypoint at this index.
    Revisited(usize),
    /// Still walking toward the current target.
    EnRoute,
    /// Every waypoint had already been reached.
    Complete,
}

/// Result of evaluating one position fix.
#[derive(Clone, Debug, PartialEq)]
pub struct Guidance {
    pub stage: usize,
    pub arrival: Arrival,
    pub chunks: Vec<Chunk>,
}

/// Chunks shown when following begins: header, first leg and, when the
/// location is known, the bearing to the first waypoint.
pub fn start(tour: &Tour, location: Option<Location>) -> Vec<Chunk> {
    let mut chunks = vec![header(tour, 0)];
    if let Some(leg) = tour.legs().first() {
        chunks.push(Chunk::FollowLeg {
            annotation: leg.annotation.clone(),
        });
    }
    if let (Some(location), Some(target)) = (location, tour.waypoints().first()) {
        chunks.push(bearing(location, target.location));
    }
    chunks
}

/// Re-evaluate progress after the user moved to `location`.
///
/// `stage` is the index of the next waypoint to reach. A waypoint counts as
/// reached when the distance to it is at most `radius`.
pub fn evaluate(tour: &Tour, stage: usize, location: Location, radius: f64) -> Guidance {
    let waypoints = tour.waypoints();
    let total = waypoints.len();

    if stage >= total {
        let mut chunks = vec![header(tour, total)];
        if let Some(last) = waypoints.last() {
            chunks.push(Chunk::FollowWaypoint {
                annotation: last.annotation.clone(),
            });
        }
        return Guidance {
            stage: total,
            arrival: Arrival::Complete,
            chunks,
        };
    }

    let within = |index: usize| {
        Displacement::between(location, waypoints[index].location).distance() <= radius
    };

    let (stage, arrival) = if within(stage) {
        (stage + 1, Arrival::Reached(stage))
    } else if stage > 0 && within(stage - 1) {
        (stage, Arrival::Revisited(stage - 1))
    } else {
        (stage, Arrival::EnRoute)
    };

    let mut chunks = vec![header(tour, stage)];
    if let Arrival::Reached(index) | Arrival::Revisited(index) = arrival {
        chunks.push(Chunk::FollowWaypoint {
            annotation: waypoints[index].annotation.clone(),
        });
    }
    if stage < total {
        if let Some(leg) = tour.legs().get(stage) {
            chunks.push(Chunk::FollowLeg {
                annotation: leg.annotation.clone(),
            });
        }
        chunks.push(bearing(location, waypoints[stage].location));
    }

    Guidance {
        stage,
        arrival,
        chunks,
    }
}

fn header(tour: &Tour, stage: usize) -> Chunk {
    Chunk::FollowHeader {
        title: tour.title().to_string(),
        stage,
        waypoint_count: tour.waypoints().len(),
    }
}

fn bearing(from: Location, to: Location) -> Chunk {
    let displacement = Displacement::between(from, to);
    Chunk::FollowBearing {
        bearing: displacement.bearing(),
        distance: displacement.distance(),
    }
}
