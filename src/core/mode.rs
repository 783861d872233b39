//! Session modes and the operation table.
//!
//! [`Mode`] is the discriminant of the controller's session state.
//! [`Operation`] names every public controller operation, and
//! [`Operation::permitted_in`] is the single table deciding which of them a
//! mode accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

crate::state_enum! {
    /// Which phase of the session the controller is in.
    ///
    /// The session starts in `BrowseOverview` and has no terminal mode.
    pub enum Mode {
        /// Listing every committed tour.
        BrowseOverview,
        /// Showing the details of one committed tour.
        BrowseDetails,
        /// Authoring a new tour.
        Create,
        /// Being guided along a committed tour.
        Follow,
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::BrowseOverview
    }
}

/// A public controller operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    StartNewTour,
    AddLeg,
    AddWaypoint,
    EndNewTour,
    ShowToursOverview,
    ShowTourDetails,
    FollowTour,
    SetLocation,
    EndSelectedTour,
    GetOutput,
}

impl Operation {
    /// Every operation, in the order they are documented.
    pub const ALL: &'static [Operation] = &[
        Operation::StartNewTour,
        Operation::AddLeg,
        Operation::AddWaypoint,
        Operation::EndNewTour,
        Operation::ShowToursOverview,
        Operation::ShowTourDetails,
        Operation::FollowTour,
        Operation::SetLocation,
        Operation::EndSelectedTour,
        Operation::GetOutput,
    ];

    /// Whether the operation may be invoked while the session is in `mode`.
    pub fn permitted_in(self, mode: Mode) -> bool {
        use Mode::*;
        match self {
            Self::StartNewTour => matches!(mode, BrowseOverview),
            Self::AddLeg | Self::AddWaypoint | Self::EndNewTour => matches!(mode, Create),
            Self::ShowToursOverview => matches!(mode, BrowseOverview | BrowseDetails),
            Self::ShowTourDetails => matches!(mode, BrowseOverview),
            Self::FollowTour => matches!(mode, BrowseOverview | BrowseDetails),
            Self::EndSelectedTour => matches!(mode, Follow),
            Self::SetLocation | Self::GetOutput => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::StartNewTour => "startNewTour",
            Self::AddLeg => "addLeg",
            Self::AddWaypoint => "addWaypoint",
            Self::EndNewTour => "endNewTour",
            Self::ShowToursOverview => "showToursOverview",
            Self::ShowTourDetails => "showTourDetails",
            Self::FollowTour => "followTour",
            Self::SetLocation => "setLocation",
            Self::EndSelectedTour => "endSelectedTour",
            Self::GetOutput => "getOutput",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
