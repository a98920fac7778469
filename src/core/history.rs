//! Phase transition log.
//!
//! Immutable record of how a session moved through its phases, usable as a
//! session trace by analytics observers. `record` returns a new log rather
//! than mutating in place.

use super::phase::{PhaseTrigger, SessionPhase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One phase change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseChange {
    /// The phase being left.
    pub from: SessionPhase,
    /// The phase being entered.
    pub to: SessionPhase,
    /// When the change happened.
    pub at: DateTime<Utc>,
    /// What caused it.
    pub trigger: PhaseTrigger,
}

/// Ordered log of phase changes for one process lifetime.
///
/// # Example
///
/// ```rust
/// use brushup::core::{PhaseChange, PhaseLog, PhaseTrigger, SessionPhase};
/// use chrono::Utc;
///
/// let log = PhaseLog::new().record(PhaseChange {
///     from: SessionPhase::SplashShown,
///     to: SessionPhase::AwaitingPlacement,
///     at: Utc::now(),
///     trigger: PhaseTrigger::SessionStarted,
/// });
///
/// assert_eq!(log.path(), vec![
///     &SessionPhase::SplashShown,
///     &SessionPhase::AwaitingPlacement,
/// ]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhaseLog {
    changes: Vec<PhaseChange>,
}

impl PhaseLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a change, returning the extended log. The original is left
    /// untouched.
    pub fn record(&self, change: PhaseChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// The phases traversed, in order: the first change's `from`, then every
    /// `to`.
    pub fn path(&self) -> Vec<&SessionPhase> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Wall-clock span from the first change to the last, if any changes
    /// were recorded.
    pub fn duration(&self) -> Option<Duration> {
        match (self.changes.first(), self.changes.last()) {
            (Some(first), Some(last)) => last.at.signed_duration_since(first.at).to_std().ok(),
            _ => None,
        }
    }

    /// All recorded changes.
    pub fn changes(&self) -> &[PhaseChange] {
        &self.changes
    }
}
