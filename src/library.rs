//! Committed tours, kept unique and ordered by id.

use crate::error::TourError;
use crate::tour::Tour;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// One row of the browse overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewEntry {
    pub id: String,
    pub title: String,
}

impl OverviewEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// All tours committed during the session.
///
/// Ids are stored and compared exactly; iteration is always in ascending
/// ordinal id order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    tours: BTreeMap<String, Tour>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tour, rejecting it if its id is already taken.
    ///
    /// On rejection the library is left untouched.
    pub fn insert(&mut self, tour: Tour) -> Result<(), TourError> {
        if self.tours.contains_key(tour.id()) {
            warn!(id = tour.id(), "tour id already in library");
            return Err(TourError::DuplicateId {
                id: tour.id().to_string(),
            });
        }
        debug!(id = tour.id(), total = self.tours.len() + 1, "tour added to library");
        self.tours.insert(tour.id().to_string(), tour);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tours.contains_key(id)
    }

    /// Exact id lookup.
    pub fn get(&self, id: &str) -> Option<&Tour> {
        self.tours.get(id)
    }

    /// Case-insensitive id lookup.
    ///
    /// An exact match wins; otherwise the first tour in id order whose id
    /// matches ignoring case.
    pub fn find(&self, id: &str) -> Option<&Tour> {
        if let Some(tour) = self.get(id) {
            return Some(tour);
        }
        let wanted = id.to_lowercase();
        self.tours
            .values()
            .find(|tour| tour.id().to_lowercase() == wanted)
    }

    /// Id and title of every tour, ascending by id.
    pub fn overview(&self) -> Vec<OverviewEntry> {
        self.tours
            .values()
            .map(|tour| OverviewEntry::new(tour.id(), tour.title()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tour> {
        self.tours.values()
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}
