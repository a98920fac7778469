//! Tunable timing constants.

use std::time::Duration;

/// UX timing knobs.
///
/// The re-enable delay after a non-ok action outcome exists so the external
/// animation layer has a moment to settle before the buttons light up again.
/// It is a smoothing constant, not a correctness requirement, so it lives in
/// configuration rather than in the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Wait before re-enabling controls after a skipped or failed animation.
    pub reenable_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reenable_delay: Duration::from_millis(300),
        }
    }
}
