//! User-facing strings.
//!
//! One hard-coded language, centralized so tests can assert on exact
//! messages.

/// Shown when the AR session starts, before the model is placed.
pub const PLACE_INSTRUCTION: &str =
    "Point the camera at the floor until a green circle appears, then tap it to place the tooth.";

/// Shown when the model has been anchored.
pub const MODEL_READY: &str = "Tooth model ready! Pick an action below.";

/// Advisory when an action is attempted with no model placed.
pub const MODEL_NOT_READY: &str =
    "Model not ready yet. Point the camera and wait for the tooth to appear.";

/// Shown while an action animation is in flight.
pub const PLAYING_ANIMATION: &str = "Playing animation...";

/// Feedback for a brush that took effect.
pub const BRUSH_APPLIED: &str = "Brushing: cleanliness +25%, health +25%";

/// Feedback for a single sweet snack.
pub const SWEET_MINOR: &str = "Sugar sticks to the tooth; cleanliness drops a little.";

/// Feedback when the sweet streak completes.
pub const SWEET_PENALTY: &str = "Too many sweets in a row! Health drops 25%.";

/// Feedback for a single healthy snack.
pub const HEALTHY_MINOR: &str = "Healthy food adds a little cleanliness.";

/// Feedback when the healthy streak completes.
pub const HEALTHY_BONUS: &str = "Healthy eating pays off: health up 25%!";

/// Persistent message for the terminal state.
pub const RUINED: &str = "The tooth is badly decayed and infected. See a dentist right away! \
     Press RESET to start over.";

/// Advisory when the interactor reports a skipped animation.
pub const ANIMATION_SKIPPED: &str = "The animation was not played.";

/// Advisory when the interactor reports an animation error.
pub const ANIMATION_ERROR: &str = "An animation error occurred.";

/// Shown while leaving AR.
pub const EXITING: &str = "Leaving AR...";

/// Advisory for reset/exit attempts outside AR.
pub const AR_ONLY: &str = "This feature is only available in AR.";

/// Advisory for scale attempts before the model is placed.
pub const SCALE_NOT_PLACED: &str = "Place the model first to resize it.";

/// Error message when the AR session request fails.
pub fn start_failed(reason: &str) -> String {
    format!("Could not start AR: {reason}")
}
