//! Builder API for ergonomic controller construction.
//!
//! This module provides the fluent [`ControllerBuilder`] and the
//! [`state_enum!`](crate::state_enum) macro used to declare session modes.

pub mod controller;
pub mod error;
pub mod macros;

pub use controller::ControllerBuilder;
pub use error::BuildError;
