//! Mode-scoped session state.

use crate::core::Mode;
use crate::tour::Tour;

/// What the controller is doing, with the data that only exists in that mode.
///
/// The tour being authored or followed is owned by the session; a followed
/// tour is a snapshot of the library copy.
#[derive(Clone, Debug, PartialEq)]
pub enum Session {
    BrowseOverview,
    BrowseDetails { id: String },
    Create { tour: Tour },
    Follow { tour: Tour, stage: usize },
}

impl Session {
    pub fn mode(&self) -> Mode {
        match self {
            Self::BrowseOverview => Mode::BrowseOverview,
            Self::BrowseDetails { .. } => Mode::BrowseDetails,
            Self::Create { .. } => Mode::Create,
            Self::Follow { .. } => Mode::Follow,
        }
    }

    /// Tour being authored or followed, if any.
    pub fn active_tour(&self) -> Option<&Tour> {
        match self {
            Self::Create { tour } | Self::Follow { tour, .. } => Some(tour),
            Self::BrowseOverview | Self::BrowseDetails { .. } => None,
        }
    }

    /// Index of the next waypoint to reach; only meaningful while following.
    pub fn stage(&self) -> Option<usize> {
        match self {
            Self::Follow { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::BrowseOverview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::Annotation;

    #[test]
    fn mode_matches_variant() {
        let tour = Tour::new("T1", "Walk", Annotation::default());
        assert_eq!(Session::BrowseOverview.mode(), Mode::BrowseOverview);
        assert_eq!(
            Session::BrowseDetails { id: "T1".into() }.mode(),
            Mode::BrowseDetails
        );
        assert_eq!(Session::Create { tour: tour.clone() }.mode(), Mode::Create);
        assert_eq!(Session::Follow { tour, stage: 0 }.mode(), Mode::Follow);
    }

    #[test]
    fn only_create_and_follow_hold_a_tour() {
        let tour = Tour::new("T1", "Walk", Annotation::default());
        assert!(Session::BrowseOverview.active_tour().is_none());
        assert!(Session::BrowseDetails { id: "T1".into() }
            .active_tour()
            .is_none());
        assert_eq!(
            Session::Create { tour: tour.clone() }
                .active_tour()
                .map(Tour::id),
            Some("T1")
        );
        assert_eq!(Session::Follow { tour, stage: 2 }.stage(), Some(2));
    }
}
