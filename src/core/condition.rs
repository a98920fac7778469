//! Derived tooth condition.
//!
//! The condition is never stored on its own; it is recomputed from the
//! health metric (plus whether a model is placed at all) whenever the
//! indicator needs refreshing.

use serde::{Deserialize, Serialize};

/// Discrete condition bucket shown by the odontogram indicator.
///
/// Derived from health by threshold lookup: the metric is first snapped down
/// to the nearest 25-point band, then bands 100 and 75 read as healthy,
/// 50 and 25 as tartar buildup, and 0 as decay. With no model placed the
/// indicator shows the absent default.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ToothCondition {
    /// No model in the scene.
    Absent,
    /// Health band 100 or 75.
    Healthy,
    /// Health band 50 or 25.
    Tartar,
    /// Health band 0.
    Decayed,
}

impl ToothCondition {
    /// Derive the bucket for a placed model from the current health value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brushup::core::ToothCondition;
    ///
    /// assert_eq!(ToothCondition::from_health(100.0), ToothCondition::Healthy);
    /// assert_eq!(ToothCondition::from_health(75.0), ToothCondition::Healthy);
    /// assert_eq!(ToothCondition::from_health(74.99), ToothCondition::Tartar);
    /// assert_eq!(ToothCondition::from_health(25.0), ToothCondition::Tartar);
    /// assert_eq!(ToothCondition::from_health(0.0), ToothCondition::Decayed);
    /// ```
    pub fn from_health(health: f64) -> Self {
        match health_band(health) {
            100 | 75 => Self::Healthy,
            50 | 25 => Self::Tartar,
            _ => Self::Decayed,
        }
    }

    /// Icon asset shown by the indicator and mirrored into the detail view.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Absent => "odontogram/missing.png",
            Self::Healthy => "odontogram/healthy.png",
            Self::Tartar => "odontogram/tartar.png",
            Self::Decayed => "odontogram/decayed.png",
        }
    }

    /// Label shown next to the icon.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Absent => "No tooth present",
            Self::Healthy => "Odontogram: healthy tooth",
            Self::Tartar => "Odontogram: tartar buildup",
            Self::Decayed => "Odontogram: tooth decay",
        }
    }
}

impl Default for ToothCondition {
    fn default() -> Self {
        Self::Absent
    }
}

/// Snap a health value down to its 25-point band.
fn health_band(health: f64) -> u8 {
    if health >= 100.0 {
        100
    } else if health >= 75.0 {
        75
    } else if health >= 50.0 {
        50
    } else if health >= 25.0 {
        25
    } else {
        0
    }
}
