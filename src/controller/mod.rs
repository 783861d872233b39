//! The tour-session controller.
//!
//! [`Controller`] is the only mutator of the session, the tour being
//! authored or followed, and the library. Every operation checks the
//! operation table first, validates its input, and only then mutates. The
//! chunks an operation produces are returned with its [`Status`] and also
//! kept as the controller's current [`Output`].
//!
//! # Example
//!
//! ```rust
//! use tourguide::{Annotation, Chunk, Controller, Mode};
//!
//! let mut controller = Controller::builder()
//!     .waypoint_radius(10.0)
//!     .waypoint_separation(25.0)
//!     .build()
//!     .unwrap();
//!
//! controller
//!     .start_new_tour("T1", "Informatics at UoE", Annotation::from("Forum"))
//!     .unwrap();
//! controller.set_location(300.0, -500.0);
//! let output = controller
//!     .add_waypoint(Annotation::from("Informatics Forum"))
//!     .unwrap();
//! assert_eq!(
//!     output[0],
//!     Chunk::CreateHeader {
//!         title: "Informatics at UoE".into(),
//!         leg_count: 1,
//!         waypoint_count: 1,
//!     }
//! );
//!
//! controller.end_new_tour().unwrap();
//! assert_eq!(controller.mode(), Mode::BrowseOverview);
//! assert_eq!(controller.library().len(), 1);
//! ```

pub mod guidance;
mod session;

pub use guidance::{Arrival, Guidance};
pub use session::Session;

use crate::builder::ControllerBuilder;
use crate::config::ControllerConfig;
use crate::core::{Mode, ModeTransition, Operation, SessionHistory};
use crate::error::TourError;
use crate::geometry::Displacement;
use crate::library::Library;
use crate::output::{Chunk, Output};
use crate::tour::{Annotation, Leg, Location, Tour, Waypoint};
use chrono::Utc;
use tracing::{debug, info, trace, warn};

/// Result of a controller operation: the chunks it produced, or why it was
/// rejected.
pub type Status = Result<Output, TourError>;

/// State machine governing tour authoring, browsing and following.
#[derive(Clone, Debug)]
pub struct Controller {
    config: ControllerConfig,
    session: Session,
    library: Library,
    current_location: Option<Location>,
    output: Output,
    history: SessionHistory,
}

impl Controller {
    /// Start configuring a controller.
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    /// Create a controller in `BrowseOverview` with an empty library.
    ///
    /// The config is taken as given; use [`builder`](Self::builder) to have
    /// it validated.
    pub fn new(config: ControllerConfig) -> Self {
        let mut controller = Self {
            config,
            session: Session::BrowseOverview,
            library: Library::new(),
            current_location: None,
            output: Output::empty(),
            history: SessionHistory::new(),
        };
        controller.output = Output::new(vec![controller.overview_chunk()]);
        controller
    }

    // ------------------------------------------------------------------
    // Authoring
    // ------------------------------------------------------------------

    /// Begin authoring an empty tour.
    pub fn start_new_tour(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        annotation: Annotation,
    ) -> Status {
        let op = Operation::StartNewTour;
        let result = self.ensure(op).map(|()| {
            let tour = Tour::new(id, title, annotation);
            debug!(id = tour.id(), title = tour.title(), "starting new tour");
            let chunk = create_header(&tour);
            self.transition(op, Session::Create { tour });
            vec![chunk]
        });
        self.finish(op, result)
    }

    /// Append a leg. `None` gives the leg the default annotation.
    pub fn add_leg(&mut self, annotation: Option<Annotation>) -> Status {
        let op = Operation::AddLeg;
        let result = self.ensure(op).and_then(|()| {
            let tour = self.authoring_tour_mut(op)?;
            if tour.pending_leg() {
                return Err(TourError::WaypointMissing);
            }
            tour.push_leg(Leg {
                annotation: annotation.unwrap_or_default(),
            });
            debug!(legs = tour.legs().len(), "leg added");
            Ok(vec![create_header(tour)])
        });
        self.finish(op, result)
    }

    /// Append a waypoint at the current location.
    ///
    /// A default-annotated leg is inserted first when none is pending. Any
    /// waypoint after the first must be at least the configured separation
    /// away from the previous one.
    pub fn add_waypoint(&mut self, annotation: Annotation) -> Status {
        let op = Operation::AddWaypoint;
        let separation = self.config.waypoint_separation;
        let location = self.current_location;
        let result = self.ensure(op).and_then(|()| {
            let tour = self.authoring_tour_mut(op)?;
            let location = location.ok_or(TourError::LocationUnknown)?;

            if let Some(previous) = tour.last_waypoint() {
                let distance = Displacement::between(previous.location, location).distance();
                if distance < separation {
                    return Err(TourError::WaypointTooClose {
                        distance,
                        separation,
                    });
                }
            }

            if tour.ends_on_waypoint() {
                trace!("inserting default leg before waypoint");
                tour.push_leg(Leg::default());
            }
            tour.push_waypoint(Waypoint {
                annotation,
                location,
            });
            debug!(
                waypoints = tour.waypoints().len(),
                easting = location.easting,
                northing = location.northing,
                "waypoint added"
            );
            Ok(vec![create_header(tour)])
        });
        self.finish(op, result)
    }

    /// Commit the tour being authored to the library.
    pub fn end_new_tour(&mut self) -> Status {
        let op = Operation::EndNewTour;
        let result = self.ensure(op).and_then(|()| {
            let tour = self.authoring_tour(op)?;
            if tour.waypoints().is_empty() {
                return Err(TourError::NoWaypoints);
            }
            if !tour.ends_on_waypoint() {
                return Err(TourError::NoFinalWaypoint);
            }
            if self.library.contains(tour.id()) {
                return Err(TourError::DuplicateId {
                    id: tour.id().to_string(),
                });
            }

            if let Session::Create { tour } = self.transition(op, Session::BrowseOverview) {
                info!(
                    id = tour.id(),
                    waypoints = tour.waypoints().len(),
                    "tour committed"
                );
                self.library.insert(tour)?;
            }
            Ok(vec![self.overview_chunk()])
        });
        self.finish(op, result)
    }

    // ------------------------------------------------------------------
    // Browsing
    // ------------------------------------------------------------------

    /// List every committed tour, ascending by id.
    pub fn show_tours_overview(&mut self) -> Status {
        let op = Operation::ShowToursOverview;
        let result = self.ensure(op).map(|()| {
            self.transition(op, Session::BrowseOverview);
            vec![self.overview_chunk()]
        });
        self.finish(op, result)
    }

    /// Show one tour, matching its id case-insensitively.
    pub fn show_tour_details(&mut self, id: &str) -> Status {
        let op = Operation::ShowTourDetails;
        let result = self.ensure(op).and_then(|()| {
            let tour = self.lookup(id)?;
            let found = tour.id().to_string();
            let chunk = Chunk::BrowseDetails {
                id: found.clone(),
                title: tour.title().to_string(),
                annotation: tour.annotation().clone(),
            };
            self.transition(op, Session::BrowseDetails { id: found });
            Ok(vec![chunk])
        });
        self.finish(op, result)
    }

    // ------------------------------------------------------------------
    // Following
    // ------------------------------------------------------------------

    /// Begin following a tour, matching its id case-insensitively.
    pub fn follow_tour(&mut self, id: &str) -> Status {
        let op = Operation::FollowTour;
        let result = self.ensure(op).and_then(|()| {
            let tour = self.lookup(id)?.clone();
            let chunks = guidance::start(&tour, self.current_location);
            info!(id = tour.id(), waypoints = tour.waypoints().len(), "following tour");
            self.transition(op, Session::Follow { tour, stage: 0 });
            Ok(chunks)
        });
        self.finish(op, result)
    }

    /// Update the user's position.
    ///
    /// While following, this re-evaluates progress and returns the new
    /// guidance, which also replaces the current output. In every other
    /// mode the output is left alone and `None` is returned.
    pub fn set_location(&mut self, easting: f64, northing: f64) -> Option<Output> {
        let location = Location::new(easting, northing);
        self.current_location = Some(location);
        debug!(easting, northing, mode = %self.mode(), "location updated");

        let radius = self.config.waypoint_radius;
        let Session::Follow { tour, stage } = &mut self.session else {
            return None;
        };

        let guidance = guidance::evaluate(tour, *stage, location, radius);
        match guidance.arrival {
            Arrival::Reached(index) => info!(
                id = tour.id(),
                waypoint = index,
                stage = guidance.stage,
                "waypoint reached"
            ),
            Arrival::Revisited(index) => debug!(waypoint = index, "previous waypoint revisited"),
            Arrival::EnRoute | Arrival::Complete => {}
        }
        *stage = guidance.stage;

        self.output = Output::new(guidance.chunks);
        Some(self.output.clone())
    }

    /// Stop following and return to the overview.
    pub fn end_selected_tour(&mut self) -> Status {
        let op = Operation::EndSelectedTour;
        let result = self.ensure(op).map(|()| {
            if let Session::Follow { tour, stage } = self.transition(op, Session::BrowseOverview) {
                info!(id = tour.id(), stage, "stopped following tour");
            }
            vec![self.overview_chunk()]
        });
        self.finish(op, result)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Chunks produced by the most recent operation.
    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether `operation` is accepted in the current mode.
    pub fn permits(&self, operation: Operation) -> bool {
        operation.permitted_in(self.mode())
    }

    /// Index of the next waypoint to reach, while following.
    pub fn stage(&self) -> Option<usize> {
        self.session.stage()
    }

    pub fn active_tour(&self) -> Option<&Tour> {
        self.session.active_tour()
    }

    pub fn current_location(&self) -> Option<Location> {
        self.current_location
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn ensure(&self, operation: Operation) -> Result<(), TourError> {
        if self.permits(operation) {
            Ok(())
        } else {
            Err(self.wrong_mode(operation))
        }
    }

    fn wrong_mode(&self, operation: Operation) -> TourError {
        TourError::WrongMode {
            operation,
            mode: self.mode(),
        }
    }

    fn authoring_tour(&self, operation: Operation) -> Result<&Tour, TourError> {
        match &self.session {
            Session::Create { tour } => Ok(tour),
            _ => Err(self.wrong_mode(operation)),
        }
    }

    fn authoring_tour_mut(&mut self, operation: Operation) -> Result<&mut Tour, TourError> {
        let err = self.wrong_mode(operation);
        match &mut self.session {
            Session::Create { tour } => Ok(tour),
            _ => Err(err),
        }
    }

    fn lookup(&self, id: &str) -> Result<&Tour, TourError> {
        self.library
            .find(id)
            .ok_or_else(|| TourError::NotFound { id: id.to_string() })
    }

    /// Replace the session, recording the change when the mode differs.
    /// Returns the previous session.
    fn transition(&mut self, operation: Operation, next: Session) -> Session {
        let previous = std::mem::replace(&mut self.session, next);
        let (from, to) = (previous.mode(), self.session.mode());
        if from != to {
            info!(%operation, %from, %to, "mode changed");
            self.history.record(ModeTransition {
                from,
                to,
                operation,
                timestamp: Utc::now(),
            });
        }
        previous
    }

    fn finish(&mut self, operation: Operation, result: Result<Vec<Chunk>, TourError>) -> Status {
        match result {
            Ok(chunks) => {
                self.output = Output::new(chunks);
                Ok(self.output.clone())
            }
            Err(err) => {
                warn!(%operation, mode = %self.mode(), error = %err, "operation rejected");
                self.output = Output::empty();
                Err(err)
            }
        }
    }

    fn overview_chunk(&self) -> Chunk {
        Chunk::BrowseOverview {
            entries: self.library.overview(),
        }
    }
}

fn create_header(tour: &Tour) -> Chunk {
    Chunk::CreateHeader {
        title: tour.title().to_string(),
        leg_count: tour.legs().len(),
        waypoint_count: tour.waypoints().len(),
    }
}
