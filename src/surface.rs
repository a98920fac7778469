//! The presentation port.
//!
//! The HUD itself lives in the host application; this crate only knows the
//! abstract [`PresentationSurface`] it drives. Methods are framed as whole-UI
//! updates: in particular [`PresentationSurface::set_controls_enabled`]
//! covers the entire control set in one call, so a surface implementation
//! can never leave half the buttons interactive.

use crate::core::ToothCondition;

/// Which control should hold keyboard focus.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusTarget {
    /// The condition indicator icon (also the detail-view trigger).
    Indicator,
    /// The detail overlay's close control.
    DetailClose,
}

/// Abstract HUD driven by the session controller, simulation, and indicator.
///
/// Implementations mutate local UI only; everything here is synchronous and
/// runs on the single event-handling thread.
pub trait PresentationSurface {
    /// Show or hide the splash/start overlay.
    fn set_splash_visible(&mut self, visible: bool);

    /// Show or hide the AR-only chrome (metric bars, condition indicator,
    /// action buttons, info line) as one group.
    fn set_chrome_visible(&mut self, visible: bool);

    /// Toggle interactivity of the action and scale control set in one
    /// atomic update (visual affordance, input acceptance, focusability
    /// together). Reset and exit stay physically pressable and are gated by
    /// phase advisories instead; a terminal state must remain escapable.
    fn set_controls_enabled(&mut self, enabled: bool);

    /// Replace the info line with a new message.
    fn show_info(&mut self, text: &str);

    /// Redraw the two metric bars.
    fn render_metrics(&mut self, cleanliness: f64, health: f64);

    /// Update the condition indicator's icon and label.
    fn show_condition(&mut self, condition: ToothCondition);

    /// Fill and show the detail overlay.
    fn show_detail(&mut self, icon: &str, label: &str);

    /// Hide the detail overlay.
    fn hide_detail(&mut self);

    /// Move keyboard focus.
    fn set_focus(&mut self, target: FocusTarget);
}

/// Surface double that records what it was told. Used by tests and demos to
/// assert on UI effects without a real HUD.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Current splash visibility.
    pub splash_visible: bool,
    /// Current chrome visibility.
    pub chrome_visible: bool,
    /// Current control enablement.
    pub controls_enabled: bool,
    /// Last info message shown.
    pub info: String,
    /// Last rendered (cleanliness, health) pair.
    pub metrics: Option<(f64, f64)>,
    /// Last condition pushed to the indicator.
    pub condition: ToothCondition,
    /// Detail overlay content while open.
    pub detail: Option<(String, String)>,
    /// Last focus move.
    pub focus: Option<FocusTarget>,
    /// Every `set_controls_enabled` call, in order.
    pub enablement_calls: Vec<bool>,
}

impl RecordingSurface {
    /// Fresh surface in the pre-session state (splash up, nothing enabled).
    pub fn new() -> Self {
        Self {
            splash_visible: true,
            ..Self::default()
        }
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_splash_visible(&mut self, visible: bool) {
        self.splash_visible = visible;
    }

    fn set_chrome_visible(&mut self, visible: bool) {
        self.chrome_visible = visible;
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
        self.enablement_calls.push(enabled);
    }

    fn show_info(&mut self, text: &str) {
        self.info = text.to_string();
    }

    fn render_metrics(&mut self, cleanliness: f64, health: f64) {
        self.metrics = Some((cleanliness, health));
    }

    fn show_condition(&mut self, condition: ToothCondition) {
        self.condition = condition;
    }

    fn show_detail(&mut self, icon: &str, label: &str) {
        self.detail = Some((icon.to_string(), label.to_string()));
    }

    fn hide_detail(&mut self) {
        self.detail = None;
    }

    fn set_focus(&mut self, target: FocusTarget) {
        self.focus = Some(target);
    }
}
