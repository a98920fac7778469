//! The event vocabulary shared with the AR/3D subsystem.
//!
//! This is the crate's only wire format. The AR side dispatches and consumes
//! these events as tagged JSON, so the names and payload shapes here must not
//! drift: `type` carries the kebab-case event name, payload fields sit next
//! to it.
//!
//! ```rust
//! use brushup::events::{ActionKind, OutboundEvent};
//!
//! let event = OutboundEvent::ActionRequest { action: ActionKind::Brush };
//! assert_eq!(
//!     event.to_json().unwrap(),
//!     r#"{"type":"action-request","action":"brush"}"#
//! );
//! ```

use serde::{Deserialize, Serialize};

/// A user action the external interactor can animate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Brush the tooth.
    Brush,
    /// Eat something sweet.
    Sweet,
    /// Eat something healthy.
    Healthy,
}

impl ActionKind {
    /// Wire name of the action.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brush => "brush",
            Self::Sweet => "sweet",
            Self::Healthy => "healthy",
        }
    }
}

/// Result of an action animation, reported back by the interactor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Animation ran; the action's effect should be applied.
    Ok,
    /// Animation was not run; no effect.
    Skipped,
    /// Animation failed; no effect.
    Error,
}

/// Direction of a model resize request, carried on the wire as `1` / `-1`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum ScaleDirection {
    Up,
    Down,
}

impl From<ScaleDirection> for i8 {
    fn from(direction: ScaleDirection) -> i8 {
        match direction {
            ScaleDirection::Up => 1,
            ScaleDirection::Down => -1,
        }
    }
}

impl TryFrom<i8> for ScaleDirection {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, String> {
        match value {
            1 => Ok(ScaleDirection::Up),
            -1 => Ok(ScaleDirection::Down),
            other => Err(format!("scale direction must be 1 or -1, got {other}")),
        }
    }
}

/// Events this crate emits for the AR/3D subsystem (and any other observer)
/// to consume.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutboundEvent {
    /// Ask the external subsystem to enter AR.
    SessionStartRequest,
    /// Ask the interactor to animate the named action.
    ActionRequest {
        action: ActionKind,
    },
    /// Ask for a model resize.
    ScaleRequest {
        direction: ScaleDirection,
    },
    /// Ask the scene to reset (re-place the model).
    ResetRequest,
    /// Ask to leave AR.
    ExitArRequest,
    /// Announces which action just took effect, immediately before its
    /// metrics are applied.
    UiLastAction {
        action: ActionKind,
    },
    /// Broadcast after every successful metric mutation.
    MetricsChanged {
        health: f64,
        cleanliness: f64,
    },
}

impl OutboundEvent {
    /// Serialize to the tagged JSON the host dispatches.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Events the AR/3D subsystem delivers to this crate.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundEvent {
    /// AR session is active; no model placed yet.
    SessionStarted,
    /// AR session terminated (user- or system-initiated).
    SessionEnded,
    /// The 3D model has been anchored in the scene.
    ModelPlaced,
    /// Result of a previously requested action animation.
    ActionOutcome {
        action: ActionKind,
        status: Outcome,
    },
}

impl InboundEvent {
    /// Parse from the tagged JSON the host dispatches.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// User inputs arriving from the HUD controls. Not a wire type; the host maps
/// its widgets onto these before calling into the app.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserInput {
    /// One of the three action buttons.
    Action(ActionKind),
    /// A scale button.
    Scale(ScaleDirection),
    /// The reset button.
    Reset,
    /// The exit-AR button.
    ExitAr,
}
