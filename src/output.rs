//! Renderable results produced by controller operations.
//!
//! Every operation that produces output replaces the whole buffer, so an
//! [`Output`] is always the complete result of one call.

use crate::library::OverviewEntry;
use crate::tour::Annotation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// One unit of renderable output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chunk {
    /// Progress while authoring a tour.
    CreateHeader {
        title: String,
        leg_count: usize,
        waypoint_count: usize,
    },
    /// Every committed tour, ascending by id.
    BrowseOverview { entries: Vec<OverviewEntry> },
    /// One committed tour.
    BrowseDetails {
        id: String,
        title: String,
        annotation: Annotation,
    },
    /// Progress while following a tour; `stage` counts waypoints reached.
    FollowHeader {
        title: String,
        stage: usize,
        waypoint_count: usize,
    },
    FollowLeg { annotation: Annotation },
    FollowWaypoint { annotation: Annotation },
    /// Direction and distance from the current location to the next waypoint.
    FollowBearing { bearing: f64, distance: f64 },
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateHeader {
                title,
                leg_count,
                waypoint_count,
            } => write!(
                f,
                "Creating '{title}': {leg_count} legs, {waypoint_count} waypoints"
            ),
            Self::BrowseOverview { entries } if entries.is_empty() => {
                write!(f, "No tours available")
            }
            Self::BrowseOverview { entries } => {
                write!(f, "Tours:")?;
                for entry in entries {
                    write!(f, "\n  {:<8} {}", entry.id, entry.title)?;
                }
                Ok(())
            }
            Self::BrowseDetails {
                id,
                title,
                annotation,
            } => write!(f, "[{id}] {title}\n  {annotation}"),
            Self::FollowHeader {
                title,
                stage,
                waypoint_count,
            } => write!(f, "Following '{title}': {stage}/{waypoint_count} waypoints"),
            Self::FollowLeg { annotation } => write!(f, "Leg: {annotation}"),
            Self::FollowWaypoint { annotation } => write!(f, "Waypoint: {annotation}"),
            Self::FollowBearing { bearing, distance } => {
                write!(f, "Head {bearing:.0}\u{b0} for {distance:.0}")
            }
        }
    }
}

/// Snapshot of the chunks produced by one operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Output(Vec<Chunk>);

impl Output {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self(chunks)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.0
    }

    pub fn into_chunks(self) -> Vec<Chunk> {
        self.0
    }
}

impl Deref for Output {
    type Target = [Chunk];

    fn deref(&self) -> &[Chunk] {
        &self.0
    }
}

impl From<Vec<Chunk>> for Output {
    fn from(chunks: Vec<Chunk>) -> Self {
        Self(chunks)
    }
}

impl IntoIterator for Output {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Output {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{chunk}")?;
        }
        Ok(())
    }
}
