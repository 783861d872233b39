//! Tour domain entities.
//!
//! These are passive values. Only the controller mutates a [`Tour`], and
//! only while that tour is being authored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Planar coordinate. Units are whatever the position source uses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub easting: f64,
    pub northing: f64,
}

impl Location {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }
}

/// Free text attached to a tour, leg or waypoint.
///
/// The default annotation is empty text; it is what an implicitly inserted
/// leg carries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation(String);

impl Annotation {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Annotation {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Annotation {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_end())
    }
}

/// A point of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub annotation: Annotation,
    pub location: Location,
}

/// The stretch walked before reaching a waypoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub annotation: Annotation,
}

/// An ordered sequence of legs and waypoints.
///
/// Leg `i` leads to waypoint `i`. While authoring, at most one leg may be
/// pending (added without its waypoint yet); a complete tour has exactly as
/// many legs as waypoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    id: String,
    title: String,
    annotation: Annotation,
    waypoints: Vec<Waypoint>,
    legs: Vec<Leg>,
}

impl Tour {
    /// Create an empty tour.
    pub fn new(id: impl Into<String>, title: impl Into<String>, annotation: Annotation) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            annotation,
            waypoints: Vec::new(),
            legs: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// True when a leg has been added that no waypoint follows yet.
    pub fn pending_leg(&self) -> bool {
        self.legs.len() > self.waypoints.len()
    }

    /// True when the last thing added was a waypoint (or nothing was added).
    pub fn ends_on_waypoint(&self) -> bool {
        self.legs.len() == self.waypoints.len()
    }

    pub fn last_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    pub(crate) fn push_leg(&mut self, leg: Leg) {
        debug_assert!(self.ends_on_waypoint(), "leg added while another pends");
        self.legs.push(leg);
    }

    pub(crate) fn push_waypoint(&mut self, waypoint: Waypoint) {
        debug_assert!(self.pending_leg(), "waypoint added without a leg");
        self.waypoints.push(waypoint);
    }
}
