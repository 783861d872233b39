//! Core session state types.
//!
//! This module contains the pure core of the tour-session state machine:
//! - The `State` trait every session mode implements
//! - The `Mode` enum and the `Operation` permission table
//! - Mode transition history
//!
//! Nothing in this module performs I/O or touches the tour library.

mod history;
mod mode;
mod state;

pub use history::{ModeTransition, SessionHistory};
pub use mode::{Mode, Operation};
pub use state::State;
