//! Condition indicator and its detail overlay.
//!
//! A small piece of derived-state presentation: the indicator shows the
//! icon/label pair for the current [`ToothCondition`], and the detail overlay
//! mirrors whatever the indicator shows, including updates that land while
//! the overlay is open, so it can never display a stale snapshot.

use crate::core::ToothCondition;
use crate::surface::{FocusTarget, PresentationSurface};

/// Tooth condition indicator plus detail-view state.
#[derive(Debug, Default)]
pub struct ConditionIndicator {
    condition: ToothCondition,
    detail_open: bool,
}

impl ConditionIndicator {
    /// Indicator in the absent state, overlay closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bucket currently displayed.
    pub fn condition(&self) -> ToothCondition {
        self.condition
    }

    /// Whether the detail overlay is open.
    pub fn detail_open(&self) -> bool {
        self.detail_open
    }

    /// Push a new condition to the indicator, and to the overlay if it is
    /// open.
    pub fn update<S: PresentationSurface>(&mut self, condition: ToothCondition, surface: &mut S) {
        self.condition = condition;
        surface.show_condition(condition);
        if self.detail_open {
            surface.show_detail(condition.icon(), condition.label());
        }
    }

    /// Open the detail overlay with a verbatim copy of the indicator's
    /// current icon and label; focus moves to the overlay's close control.
    pub fn open_detail<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.detail_open = true;
        surface.show_detail(self.condition.icon(), self.condition.label());
        surface.set_focus(FocusTarget::DetailClose);
    }

    /// Close the overlay and hand focus back to the triggering control.
    pub fn close_detail<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.detail_open = false;
        surface.hide_detail();
        surface.set_focus(FocusTarget::Indicator);
    }
}
