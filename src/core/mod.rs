//! Pure simulation and session state types.
//!
//! Everything in this module is side-effect free: bounded metrics, streak
//! counters, the session phase enum, the derived tooth condition, and an
//! immutable phase-transition log. Clocks and I/O live in the shell; the one
//! timestamp here ([`PhaseChange::at`]) is captured by the caller at the
//! recording seam.

mod condition;
mod history;
mod metric;
mod phase;
mod streak;

pub use condition::ToothCondition;
pub use history::{PhaseChange, PhaseLog};
pub use metric::{Metric, FULL};
pub use phase::{PhaseTrigger, SessionPhase};
pub use streak::StreakCounter;
