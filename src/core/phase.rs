//! Session lifecycle phases.

use serde::{Deserialize, Serialize};

/// Where the session currently is in its lifecycle.
///
/// ```text
/// SplashShown --start--> AwaitingPlacement --placed--> Active
/// Active --(both metrics depleted)--> Ruined --reset--> AwaitingPlacement
/// AwaitingPlacement | Active | Ruined --session ended--> SplashShown
/// ```
///
/// `Ruined` is terminal: only an explicit reset (or the session ending out
/// from under us) leaves it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SessionPhase {
    /// The start screen is up; no AR session exists.
    SplashShown,
    /// AR is running but the tooth model has not been anchored yet.
    AwaitingPlacement,
    /// Model placed; actions are available.
    Active,
    /// Both metrics hit zero. Controls stay down until reset.
    Ruined,
}

impl SessionPhase {
    /// Display/logging name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SplashShown => "SplashShown",
            Self::AwaitingPlacement => "AwaitingPlacement",
            Self::Active => "Active",
            Self::Ruined => "Ruined",
        }
    }

    /// Terminal until an explicit reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ruined)
    }

    /// An AR session exists (anything past the splash).
    pub fn in_ar(&self) -> bool {
        !matches!(self, Self::SplashShown)
    }

    /// A model is anchored and interactive.
    pub fn model_placed(&self) -> bool {
        matches!(self, Self::Active | Self::Ruined)
    }
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::SplashShown
    }
}

/// What caused a phase change. Recorded alongside each transition in the
/// session trace.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PhaseTrigger {
    /// `session-started` arrived from the AR subsystem.
    SessionStarted,
    /// `model-placed` arrived from the AR subsystem.
    ModelPlaced,
    /// `session-ended` arrived from the AR subsystem.
    SessionEnded,
    /// Both metrics bottomed out simultaneously.
    MetricsDepleted,
    /// The user pressed reset.
    ResetRequested,
    /// The user asked to leave AR.
    ExitRequested,
}
