//! Core State trait for session modes.
//!
//! Every mode the tour-session controller can be in implements this trait,
//! which provides pure methods for inspecting the mode without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for session modes.
///
/// All methods are pure. A mode is a plain value describing which
/// operations the controller currently accepts.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: modes are recorded in the session history
///   and compared when validating operations
/// - `Debug`: modes appear in diagnostics and log fields
/// - `Serialize` + `Deserialize`: modes travel inside serialized history
///
/// # Example
///
/// ```rust
/// use tourguide::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum KioskMode {
///     Idle,
///     Guiding,
/// }
///
/// impl State for KioskMode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Guiding => "Guiding",
///         }
///     }
/// }
///
/// assert_eq!(KioskMode::Guiding.name(), "Guiding");
/// assert!(!KioskMode::Idle.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the mode for display and logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal mode.
    ///
    /// A long-lived tour session has no terminal mode, so the default
    /// implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
