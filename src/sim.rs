//! The tooth simulation.
//!
//! Two bounded metrics plus two streak counters, mutated only through
//! [`Simulation::apply`]. The simulation is pure state: it never touches the
//! surface or the event bus, it just reports what happened so the app layer
//! can render and broadcast.

use crate::core::{Metric, StreakCounter};
use crate::events::ActionKind;
use crate::text;

/// Consecutive sweet/healthy choices needed before health moves.
const STREAK_THRESHOLD: u32 = 2;

/// Report of one applied action.
#[derive(Clone, Debug, PartialEq)]
pub struct Applied {
    /// Cleanliness after the mutation.
    pub cleanliness: f64,
    /// Health after the mutation.
    pub health: f64,
    /// User-facing feedback for this particular effect.
    pub feedback: &'static str,
    /// Both metrics are now depleted.
    pub ruined: bool,
}

/// Simulation state machine over the cleanliness and health metrics.
#[derive(Clone, Debug)]
pub struct Simulation {
    cleanliness: Metric,
    health: Metric,
    sweet_streak: StreakCounter,
    healthy_streak: StreakCounter,
}

impl Simulation {
    /// Fresh simulation: both metrics full, no streaks.
    pub fn new() -> Self {
        Self {
            cleanliness: Metric::full(),
            health: Metric::full(),
            sweet_streak: StreakCounter::new(STREAK_THRESHOLD),
            healthy_streak: StreakCounter::new(STREAK_THRESHOLD),
        }
    }

    /// Current cleanliness value.
    pub fn cleanliness(&self) -> f64 {
        self.cleanliness.value()
    }

    /// Current health value.
    pub fn health(&self) -> f64 {
        self.health.value()
    }

    /// Current sweet streak length.
    pub fn sweet_streak(&self) -> u32 {
        self.sweet_streak.count()
    }

    /// Current healthy streak length.
    pub fn healthy_streak(&self) -> u32 {
        self.healthy_streak.count()
    }

    /// Both metrics depleted simultaneously.
    pub fn is_ruined(&self) -> bool {
        self.cleanliness.is_depleted() && self.health.is_depleted()
    }

    /// Apply one action that the interactor confirmed with an `ok` outcome.
    ///
    /// - `brush`: +25 to both metrics, both streaks drop.
    /// - `sweet`: −12.5 cleanliness; every second consecutive sweet also
    ///   takes −25 health.
    /// - `healthy`: +12.5 cleanliness; every second consecutive healthy also
    ///   gives +25 health.
    pub fn apply(&mut self, action: ActionKind) -> Applied {
        let feedback = match action {
            ActionKind::Brush => {
                self.cleanliness.adjust(25.0);
                self.health.adjust(25.0);
                self.sweet_streak.reset();
                self.healthy_streak.reset();
                text::BRUSH_APPLIED
            }
            ActionKind::Sweet => {
                self.cleanliness.adjust(-12.5);
                if self.sweet_streak.bump() {
                    self.health.adjust(-25.0);
                    text::SWEET_PENALTY
                } else {
                    text::SWEET_MINOR
                }
            }
            ActionKind::Healthy => {
                self.cleanliness.adjust(12.5);
                if self.healthy_streak.bump() {
                    self.health.adjust(25.0);
                    text::HEALTHY_BONUS
                } else {
                    text::HEALTHY_MINOR
                }
            }
        };

        Applied {
            cleanliness: self.cleanliness(),
            health: self.health(),
            feedback,
            ruined: self.is_ruined(),
        }
    }

    /// Back to defaults: both metrics full, both streaks zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim_at(cleanliness: f64, health: f64) -> Simulation {
        Simulation {
            cleanliness: Metric::new(cleanliness),
            health: Metric::new(health),
            sweet_streak: StreakCounter::new(STREAK_THRESHOLD),
            healthy_streak: StreakCounter::new(STREAK_THRESHOLD),
        }
    }

    #[test]
    fn fresh_simulation_is_full() {
        let sim = Simulation::new();
        assert_eq!(sim.cleanliness(), 100.0);
        assert_eq!(sim.health(), 100.0);
        assert!(!sim.is_ruined());
    }

    #[test]
    fn brush_raises_both_metrics_clamped() {
        let mut sim = sim_at(50.0, 50.0);
        let applied = sim.apply(ActionKind::Brush);

        assert_eq!(applied.cleanliness, 75.0);
        assert_eq!(applied.health, 75.0);
        assert_eq!(applied.feedback, text::BRUSH_APPLIED);

        sim.apply(ActionKind::Brush);
        let applied = sim.apply(ActionKind::Brush);
        assert_eq!(applied.cleanliness, 100.0);
        assert_eq!(applied.health, 100.0);
    }

    #[test]
    fn brush_interrupts_both_streaks() {
        let mut sim = Simulation::new();
        sim.apply(ActionKind::Sweet);
        sim.apply(ActionKind::Healthy);
        assert_eq!(sim.sweet_streak(), 1);
        assert_eq!(sim.healthy_streak(), 1);

        sim.apply(ActionKind::Brush);
        assert_eq!(sim.sweet_streak(), 0);
        assert_eq!(sim.healthy_streak(), 0);
    }

    #[test]
    fn single_sweet_never_touches_health() {
        let mut sim = sim_at(50.0, 50.0);
        let applied = sim.apply(ActionKind::Sweet);

        assert_eq!(applied.cleanliness, 37.5);
        assert_eq!(applied.health, 50.0);
        assert_eq!(applied.feedback, text::SWEET_MINOR);
        assert_eq!(sim.sweet_streak(), 1);
    }

    #[test]
    fn second_sweet_costs_exactly_25_health() {
        let mut sim = sim_at(50.0, 50.0);
        sim.apply(ActionKind::Sweet);
        let applied = sim.apply(ActionKind::Sweet);

        assert_eq!(applied.cleanliness, 25.0);
        assert_eq!(applied.health, 25.0);
        assert_eq!(applied.feedback, text::SWEET_PENALTY);
        assert_eq!(sim.sweet_streak(), 0);
    }

    #[test]
    fn second_healthy_restores_exactly_25_health() {
        let mut sim = sim_at(50.0, 50.0);
        sim.apply(ActionKind::Healthy);
        let applied = sim.apply(ActionKind::Healthy);

        assert_eq!(applied.cleanliness, 75.0);
        assert_eq!(applied.health, 75.0);
        assert_eq!(applied.feedback, text::HEALTHY_BONUS);
        assert_eq!(sim.healthy_streak(), 0);
    }

    #[test]
    fn sweet_and_healthy_streaks_are_independent() {
        let mut sim = Simulation::new();
        sim.apply(ActionKind::Sweet);
        sim.apply(ActionKind::Healthy);
        // Neither interrupted the other.
        assert_eq!(sim.sweet_streak(), 1);
        assert_eq!(sim.healthy_streak(), 1);

        let applied = sim.apply(ActionKind::Sweet);
        assert_eq!(applied.feedback, text::SWEET_PENALTY);
    }

    #[test]
    fn ruin_requires_both_metrics_at_zero() {
        let mut sim = sim_at(0.0, 50.0);
        assert!(!sim.is_ruined());

        let mut sim = sim_at(0.0, 12.5);
        sim.apply(ActionKind::Sweet);
        let applied = sim.apply(ActionKind::Sweet);
        assert_eq!(applied.health, 0.0);
        assert!(applied.ruined);
        assert!(sim.is_ruined());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut sim = sim_at(0.0, 0.0);
        sim.apply(ActionKind::Sweet);
        sim.reset();

        assert_eq!(sim.cleanliness(), 100.0);
        assert_eq!(sim.health(), 100.0);
        assert_eq!(sim.sweet_streak(), 0);
        assert_eq!(sim.healthy_streak(), 0);
        assert!(!sim.is_ruined());
    }
}
