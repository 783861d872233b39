//! Tourguide: a tour-session state machine
//!
//! Tourguide lets a caller author geo-referenced walking tours (ordered
//! waypoints linked by narrative legs), browse the tours authored so far,
//! and be guided along one of them by live position updates.
//!
//! The crate is a pure core: it consumes planar coordinates and produces an
//! abstract sequence of [`Chunk`]s. Position sources and rendering are left
//! to the caller.
//!
//! # Core Concepts
//!
//! - **Modes**: the session is always in one [`Mode`]; the [`Operation`]
//!   table decides which calls each mode accepts
//! - **Status**: every operation returns the chunks it produced or a
//!   [`TourError`]; a rejected call changes nothing
//! - **Geometry**: [`Displacement`] gives distance and compass bearing
//!   between two locations
//! - **Library**: committed tours, unique and ordered by id
//!
//! # Example
//!
//! ```rust
//! use tourguide::{Annotation, Chunk, Controller};
//!
//! let mut controller = Controller::builder()
//!     .waypoint_radius(10.0)
//!     .waypoint_separation(25.0)
//!     .build()
//!     .unwrap();
//!
//! controller
//!     .start_new_tour("T1", "Old Town", Annotation::from("Castle to palace"))
//!     .unwrap();
//! controller.set_location(-500.0, 0.0);
//! controller.add_waypoint(Annotation::from("Edinburgh Castle")).unwrap();
//! controller.add_leg(Some(Annotation::from("Royal Mile"))).unwrap();
//! controller.set_location(1000.0, 300.0);
//! controller.add_waypoint(Annotation::from("Holyrood Palace")).unwrap();
//! controller.end_new_tour().unwrap();
//!
//! controller.set_location(-480.0, 0.0);
//! controller.follow_tour("t1").unwrap();
//! let guidance = controller.set_location(-495.0, 5.0).unwrap();
//! assert_eq!(
//!     guidance[1],
//!     Chunk::FollowWaypoint {
//!         annotation: Annotation::from("Edinburgh Castle")
//!     }
//! );
//! assert_eq!(controller.stage(), Some(1));
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod geometry;
pub mod library;
pub mod output;
pub mod tour;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder};
pub use config::{ConfigError, ControllerConfig};
pub use controller::{Controller, Status};
pub use crate::core::{Mode, Operation, State};
pub use error::{ErrorKind, TourError};
pub use geometry::Displacement;
pub use library::{Library, OverviewEntry};
pub use output::{Chunk, Output};
pub use tour::{Annotation, Leg, Location, Tour, Waypoint};
