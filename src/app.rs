//! Top-level wiring.
//!
//! [`App`] owns the three components and is the single place where user
//! input is gated, inbound signals are dispatched, and cross-component
//! effects are coordinated (a session ending resets the simulation, a ruined
//! simulation locks the session, and so on). Components never call each
//! other directly.
//!
//! The app layer is synchronous and clock-free. Where the UX wants a pause
//! (re-enabling controls a beat after a failed animation), the handler
//! returns a [`Followup`] directive and the embedding shell performs the
//! wait.

use crate::bus::EventSink;
use crate::config::Timings;
use crate::core::{SessionPhase, ToothCondition};
use crate::events::{InboundEvent, Outcome, OutboundEvent, UserInput};
use crate::indicator::ConditionIndicator;
use crate::session::{ArRuntime, SessionController, StartError};
use crate::sim::Simulation;
use crate::surface::PresentationSurface;
use crate::text;
use std::time::Duration;

/// Deferred work a handler asks the shell to perform.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Followup {
    /// Wait this long, then call [`App::reenable`].
    ReenableAfter(Duration),
}

/// The assembled interaction layer.
///
/// The embedding shell feeds it [`UserInput`] from the HUD controls and
/// [`InboundEvent`]s from the AR subsystem, hands it the presentation
/// surface and event sink by reference, and executes any returned
/// [`Followup`].
#[derive(Debug, Default)]
pub struct App {
    session: SessionController,
    sim: Simulation,
    indicator: ConditionIndicator,
    timings: Timings,
}

impl App {
    /// App with default timings, in the pre-session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// App with custom timings.
    pub fn with_timings(timings: Timings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// The session/visibility controller.
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// The simulation state machine.
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// The condition indicator.
    pub fn indicator(&self) -> &ConditionIndicator {
        &self.indicator
    }

    /// Press of the start button: hide the splash and request an AR session.
    /// On failure the splash is restored and the reason surfaced; the error
    /// is also returned.
    pub async fn request_start<S, Env>(
        &mut self,
        surface: &mut S,
        ar: &Env,
    ) -> Result<(), StartError>
    where
        S: PresentationSurface,
        Env: ArRuntime + Clone + Send + Sync + 'static,
    {
        self.session.request_start(surface, ar).await
    }

    /// Handle one HUD input.
    pub fn handle_input<S, E>(
        &mut self,
        input: UserInput,
        surface: &mut S,
        events: &mut E,
    ) -> Option<Followup>
    where
        S: PresentationSurface,
        E: EventSink,
    {
        match input {
            UserInput::Action(action) => {
                if !self.session.accepts_actions() {
                    surface.show_info(text::MODEL_NOT_READY);
                    return None;
                }
                self.session.set_enablement(false, surface);
                surface.show_info(text::PLAYING_ANIMATION);
                events.emit(OutboundEvent::ActionRequest { action });
                None
            }
            UserInput::Scale(direction) => {
                if !self.session.phase().model_placed() {
                    surface.show_info(text::SCALE_NOT_PLACED);
                    return None;
                }
                events.emit(OutboundEvent::ScaleRequest { direction });
                None
            }
            UserInput::Reset => {
                if !self.session.phase().in_ar() {
                    surface.show_info(text::AR_ONLY);
                    return None;
                }
                events.emit(OutboundEvent::ResetRequest);
                self.reset_to_defaults(surface);
                None
            }
            UserInput::ExitAr => {
                if !self.session.phase().in_ar() {
                    surface.show_info(text::AR_ONLY);
                    return None;
                }
                events.emit(OutboundEvent::ExitArRequest);
                self.session.on_exit_requested(surface);
                self.sim.reset();
                surface.render_metrics(self.sim.cleanliness(), self.sim.health());
                self.indicator.update(ToothCondition::Absent, surface);
                None
            }
        }
    }

    /// Handle one signal from the AR subsystem.
    pub fn handle_signal<S, E>(
        &mut self,
        signal: InboundEvent,
        surface: &mut S,
        events: &mut E,
    ) -> Option<Followup>
    where
        S: PresentationSurface,
        E: EventSink,
    {
        match signal {
            InboundEvent::SessionStarted => {
                self.session.on_session_started(surface);
                None
            }
            InboundEvent::ModelPlaced => {
                self.session.on_model_placed(surface);
                surface.render_metrics(self.sim.cleanliness(), self.sim.health());
                self.indicator
                    .update(ToothCondition::from_health(self.sim.health()), surface);
                None
            }
            InboundEvent::SessionEnded => {
                self.session.on_session_ended(surface);
                self.sim.reset();
                surface.render_metrics(self.sim.cleanliness(), self.sim.health());
                self.indicator.update(ToothCondition::Absent, surface);
                None
            }
            InboundEvent::ActionOutcome { action, status } => {
                // Outcomes only mean something while the session is live and
                // un-ruined; anything arriving later is stale.
                if self.session.phase() != SessionPhase::Active {
                    return None;
                }
                match status {
                    Outcome::Ok => {
                        events.emit(OutboundEvent::UiLastAction { action });
                        let applied = self.sim.apply(action);
                        surface.render_metrics(applied.cleanliness, applied.health);
                        events.emit(OutboundEvent::MetricsChanged {
                            health: applied.health,
                            cleanliness: applied.cleanliness,
                        });
                        self.indicator
                            .update(ToothCondition::from_health(applied.health), surface);
                        if applied.ruined {
                            self.session.enter_ruined(surface);
                            surface.show_info(text::RUINED);
                        } else {
                            surface.show_info(applied.feedback);
                            self.session.set_enablement(true, surface);
                        }
                        None
                    }
                    Outcome::Skipped | Outcome::Error => {
                        surface.show_info(match status {
                            Outcome::Skipped => text::ANIMATION_SKIPPED,
                            _ => text::ANIMATION_ERROR,
                        });
                        Some(Followup::ReenableAfter(self.timings.reenable_delay))
                    }
                }
            }
        }
    }

    /// Execute the deferred half of [`Followup::ReenableAfter`]. A session
    /// end or ruin that happened during the wait wins: controls come back
    /// only while still `Active`.
    pub fn reenable<S: PresentationSurface>(&mut self, surface: &mut S) {
        if self.session.phase() == SessionPhase::Active {
            self.session.set_enablement(true, surface);
        }
    }

    /// Open the condition detail overlay.
    pub fn open_detail<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.indicator.open_detail(surface);
    }

    /// Close the condition detail overlay.
    pub fn close_detail<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.indicator.close_detail(surface);
    }

    fn reset_to_defaults<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.sim.reset();
        self.session.on_reset(surface);
        surface.render_metrics(self.sim.cleanliness(), self.sim.health());
        self.indicator.update(ToothCondition::Absent, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::RecordingSink;
    use crate::events::{ActionKind, ScaleDirection};
    use crate::surface::RecordingSurface;

    fn placed_app() -> (App, RecordingSurface, RecordingSink) {
        let mut app = App::new();
        let mut surface = RecordingSurface::new();
        let mut events = RecordingSink::new();
        app.handle_signal(InboundEvent::SessionStarted, &mut surface, &mut events);
        app.handle_signal(InboundEvent::ModelPlaced, &mut surface, &mut events);
        (app, surface, events)
    }

    fn ok(action: ActionKind) -> InboundEvent {
        InboundEvent::ActionOutcome {
            action,
            status: Outcome::Ok,
        }
    }

    #[test]
    fn action_before_placement_is_advisory_only() {
        let mut app = App::new();
        let mut surface = RecordingSurface::new();
        let mut events = RecordingSink::new();

        app.handle_signal(InboundEvent::SessionStarted, &mut surface, &mut events);
        app.handle_input(
            UserInput::Action(ActionKind::Brush),
            &mut surface,
            &mut events,
        );

        assert_eq!(surface.info, text::MODEL_NOT_READY);
        assert!(events.events.is_empty());
        assert_eq!(app.simulation().cleanliness(), 100.0);
    }

    #[test]
    fn accepted_action_disables_controls_and_emits_request() {
        let (mut app, mut surface, mut events) = placed_app();

        app.handle_input(
            UserInput::Action(ActionKind::Sweet),
            &mut surface,
            &mut events,
        );

        assert!(!surface.controls_enabled);
        assert_eq!(surface.info, text::PLAYING_ANIMATION);
        assert_eq!(
            events.last(),
            Some(&OutboundEvent::ActionRequest {
                action: ActionKind::Sweet
            })
        );
    }

    #[test]
    fn ok_outcome_applies_effect_and_broadcasts() {
        let (mut app, mut surface, mut events) = placed_app();

        app.handle_input(
            UserInput::Action(ActionKind::Sweet),
            &mut surface,
            &mut events,
        );
        app.handle_signal(ok(ActionKind::Sweet), &mut surface, &mut events);

        assert_eq!(surface.metrics, Some((87.5, 100.0)));
        assert!(surface.controls_enabled);
        assert!(events.events.contains(&OutboundEvent::UiLastAction {
            action: ActionKind::Sweet
        }));
        assert!(events.events.contains(&OutboundEvent::MetricsChanged {
            health: 100.0,
            cleanliness: 87.5
        }));
    }

    #[test]
    fn non_ok_outcome_defers_reenable_without_mutation() {
        let (mut app, mut surface, mut events) = placed_app();

        app.handle_input(
            UserInput::Action(ActionKind::Brush),
            &mut surface,
            &mut events,
        );
        let followup = app.handle_signal(
            InboundEvent::ActionOutcome {
                action: ActionKind::Brush,
                status: Outcome::Skipped,
            },
            &mut surface,
            &mut events,
        );

        assert_eq!(
            followup,
            Some(Followup::ReenableAfter(Timings::default().reenable_delay))
        );
        assert_eq!(surface.info, text::ANIMATION_SKIPPED);
        assert!(!surface.controls_enabled);
        assert_eq!(app.simulation().cleanliness(), 100.0);

        app.reenable(&mut surface);
        assert!(surface.controls_enabled);
    }

    #[test]
    fn reenable_is_refused_once_the_session_ended() {
        let (mut app, mut surface, mut events) = placed_app();

        app.handle_input(
            UserInput::Action(ActionKind::Brush),
            &mut surface,
            &mut events,
        );
        app.handle_signal(
            InboundEvent::ActionOutcome {
                action: ActionKind::Brush,
                status: Outcome::Error,
            },
            &mut surface,
            &mut events,
        );
        app.handle_signal(InboundEvent::SessionEnded, &mut surface, &mut events);
        app.reenable(&mut surface);

        assert!(!surface.controls_enabled);
    }

    #[test]
    fn scale_requires_a_placed_model() {
        let mut app = App::new();
        let mut surface = RecordingSurface::new();
        let mut events = RecordingSink::new();

        app.handle_signal(InboundEvent::SessionStarted, &mut surface, &mut events);
        app.handle_input(
            UserInput::Scale(ScaleDirection::Up),
            &mut surface,
            &mut events,
        );
        assert_eq!(surface.info, text::SCALE_NOT_PLACED);
        assert!(events.events.is_empty());

        app.handle_signal(InboundEvent::ModelPlaced, &mut surface, &mut events);
        app.handle_input(
            UserInput::Scale(ScaleDirection::Down),
            &mut surface,
            &mut events,
        );
        assert_eq!(
            events.last(),
            Some(&OutboundEvent::ScaleRequest {
                direction: ScaleDirection::Down
            })
        );
    }

    #[test]
    fn reset_outside_ar_is_advisory_only() {
        let mut app = App::new();
        let mut surface = RecordingSurface::new();
        let mut events = RecordingSink::new();

        app.handle_input(UserInput::Reset, &mut surface, &mut events);

        assert_eq!(surface.info, text::AR_ONLY);
        assert!(events.events.is_empty());
    }

    #[test]
    fn reset_in_ar_restores_defaults_and_awaits_placement() {
        let (mut app, mut surface, mut events) = placed_app();

        // Degrade the state first.
        app.handle_signal(ok(ActionKind::Sweet), &mut surface, &mut events);
        app.handle_input(UserInput::Reset, &mut surface, &mut events);

        assert!(events.events.contains(&OutboundEvent::ResetRequest));
        assert_eq!(app.session().phase(), SessionPhase::AwaitingPlacement);
        assert_eq!(app.simulation().cleanliness(), 100.0);
        assert_eq!(surface.metrics, Some((100.0, 100.0)));
        assert_eq!(surface.condition, ToothCondition::Absent);
        assert!(!surface.controls_enabled);
    }

    #[test]
    fn exit_emits_request_and_restores_splash_state() {
        let (mut app, mut surface, mut events) = placed_app();

        app.handle_input(UserInput::ExitAr, &mut surface, &mut events);

        assert!(events.events.contains(&OutboundEvent::ExitArRequest));
        assert_eq!(app.session().phase(), SessionPhase::SplashShown);
        assert!(surface.splash_visible);
        assert_eq!(app.simulation().health(), 100.0);
    }

    #[test]
    fn ruin_locks_controls_and_shows_persistent_message() {
        let (mut app, mut surface, mut events) = placed_app();

        // Eight sweets drain cleanliness to zero; every second one takes 25
        // health, so the eighth empties both metrics at once.
        for _ in 0..8 {
            app.handle_signal(ok(ActionKind::Sweet), &mut surface, &mut events);
        }

        assert!(app.simulation().is_ruined());
        assert_eq!(app.session().phase(), SessionPhase::Ruined);
        assert!(!surface.controls_enabled);
        assert_eq!(surface.info, text::RUINED);
        assert_eq!(surface.condition, ToothCondition::Decayed);
    }

    #[test]
    fn stale_outcomes_in_ruined_state_are_ignored() {
        let (mut app, mut surface, mut events) = placed_app();

        for _ in 0..8 {
            app.handle_signal(ok(ActionKind::Sweet), &mut surface, &mut events);
        }
        let emitted = events.events.len();

        let followup = app.handle_signal(ok(ActionKind::Brush), &mut surface, &mut events);

        assert_eq!(followup, None);
        assert_eq!(app.session().phase(), SessionPhase::Ruined);
        assert!(!surface.controls_enabled);
        assert_eq!(app.simulation().cleanliness(), 0.0);
        assert_eq!(events.events.len(), emitted);
    }
}
