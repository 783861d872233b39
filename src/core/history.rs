//! Mode transition history.
//!
//! Records every change of session mode together with the operation that
//! caused it, so a caller can audit how a session moved between authoring,
//! browsing and following.

use super::mode::{Mode, Operation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single mode change.
///
/// # Example
///
/// ```rust
/// use tourguide::core::{Mode, ModeTransition, Operation};
/// use chrono::Utc;
///
/// let transition = ModeTransition {
///     from: Mode::BrowseOverview,
///     to: Mode::Create,
///     operation: Operation::StartNewTour,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changes_mode());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeTransition {
    /// The mode being left
    pub from: Mode,
    /// The mode being entered
    pub to: Mode,
    /// The operation that caused the change
    pub operation: Operation,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl ModeTransition {
    pub fn changes_mode(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of mode transitions for one session.
///
/// # Example
///
/// ```rust
/// use tourguide::core::{Mode, ModeTransition, Operation, SessionHistory};
/// use chrono::Utc;
///
/// let mut history = SessionHistory::new();
/// history.record(ModeTransition {
///     from: Mode::BrowseOverview,
///     to: Mode::Follow,
///     operation: Operation::FollowTour,
///     timestamp: Utc::now(),
/// });
/// history.record(ModeTransition {
///     from: Mode::Follow,
///     to: Mode::BrowseOverview,
///     operation: Operation::EndSelectedTour,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(
///     history.path(),
///     vec![Mode::BrowseOverview, Mode::Follow, Mode::BrowseOverview]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    transitions: Vec<ModeTransition>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: ModeTransition) {
        self.transitions.push(transition);
    }

    /// Modes visited in order: the first transition's source, then the
    /// target of every transition. Empty when nothing was recorded.
    pub fn path(&self) -> Vec<Mode> {
        self.transitions
            .first()
            .map(|first| first.from)
            .into_iter()
            .chain(self.transitions.iter().map(|t| t.to))
            .collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of times the given operation changed the mode.
    pub fn count(&self, operation: Operation) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.operation == operation)
            .count()
    }

    pub fn transitions(&self) -> &[ModeTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: Mode, to: Mode, operation: Operation) -> ModeTransition {
        ModeTransition {
            from,
            to,
            operation,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn path_returns_mode_sequence() {
        let mut history = SessionHistory::new();
        history.record(transition(
            Mode::BrowseOverview,
            Mode::Create,
            Operation::StartNewTour,
        ));
        history.record(transition(
            Mode::Create,
            Mode::BrowseOverview,
            Operation::EndNewTour,
        ));
        history.record(transition(
            Mode::BrowseOverview,
            Mode::BrowseDetails,
            Operation::ShowTourDetails,
        ));

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.path(),
            vec![
                Mode::BrowseOverview,
                Mode::Create,
                Mode::BrowseOverview,
                Mode::BrowseDetails,
            ]
        );
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = SessionHistory::new();
        history.record(transition(
            Mode::BrowseOverview,
            Mode::Follow,
            Operation::FollowTour,
        ));

        std::thread::sleep(Duration::from_millis(10));

        history.record(transition(
            Mode::Follow,
            Mode::BrowseOverview,
            Operation::EndSelectedTour,
        ));

        let duration = history.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut history = SessionHistory::new();
        history.record(transition(
            Mode::BrowseOverview,
            Mode::Create,
            Operation::StartNewTour,
        ));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn count_filters_by_operation() {
        let mut history = SessionHistory::new();
        history.record(transition(
            Mode::BrowseOverview,
            Mode::Create,
            Operation::StartNewTour,
        ));
        history.record(transition(
            Mode::Create,
            Mode::BrowseOverview,
            Operation::EndNewTour,
        ));
        history.record(transition(
            Mode::BrowseOverview,
            Mode::Create,
            Operation::StartNewTour,
        ));

        assert_eq!(history.count(Operation::StartNewTour), 2);
        assert_eq!(history.count(Operation::FollowTour), 0);
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = SessionHistory::new();
        history.record(transition(
            Mode::BrowseOverview,
            Mode::Create,
            Operation::StartNewTour,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: SessionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
