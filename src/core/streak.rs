//! Consecutive-action counters.
//!
//! Repeated sweet or healthy choices only hit the health metric once a streak
//! reaches its threshold; the counter then starts over.

use serde::{Deserialize, Serialize};

/// Counts consecutive occurrences of one action and fires at a threshold.
///
/// `bump` returns `true` exactly when the threshold is reached, at which
/// point the counter resets itself. Between calls the count is always in
/// `0..threshold`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StreakCounter {
    count: u32,
    threshold: u32,
}

impl StreakCounter {
    /// Create a counter that fires every `threshold` consecutive bumps.
    pub fn new(threshold: u32) -> Self {
        StreakCounter {
            count: 0,
            threshold,
        }
    }

    /// Record one occurrence. Returns `true` if the streak just completed
    /// (and the counter reset).
    pub fn bump(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Drop the streak back to zero without firing.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Current streak length.
    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_fires_at_threshold() {
        let mut streak = StreakCounter::new(2);
        assert!(!streak.bump());
        assert!(streak.bump());
    }

    #[test]
    fn firing_resets_the_count() {
        let mut streak = StreakCounter::new(2);
        streak.bump();
        streak.bump();
        assert_eq!(streak.count(), 0);
        assert!(!streak.bump());
    }

    #[test]
    fn reset_interrupts_a_streak() {
        let mut streak = StreakCounter::new(2);
        streak.bump();
        streak.reset();
        assert_eq!(streak.count(), 0);
        assert!(!streak.bump());
        assert!(streak.bump());
    }

    #[test]
    fn count_stays_below_threshold() {
        let mut streak = StreakCounter::new(3);
        for _ in 0..10 {
            streak.bump();
            assert!(streak.count() < 3);
        }
    }
}
