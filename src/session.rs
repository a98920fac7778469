//! Session and visibility control.
//!
//! Owns the session phase, the phase log, and every visibility/enablement
//! decision. Reacts to lifecycle signals from the external AR subsystem and
//! mutates only the presentation surface; simulation state belongs to
//! [`crate::sim::Simulation`] and is reset by the app layer.
//!
//! The one failable external call, the AR session request, is expressed as a
//! `stillwater` effect over an [`ArRuntime`] environment: the pure
//! description is separate from the run, and the failure path fully restores
//! the pre-request UI.

use crate::core::{PhaseChange, PhaseLog, PhaseTrigger, SessionPhase};
use crate::surface::PresentationSurface;
use crate::text;
use chrono::Utc;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;
use thiserror::Error;

/// Why an AR session request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    /// The platform has no AR capability at all.
    #[error("AR is not supported on this device")]
    Unsupported,

    /// The subsystem refused or aborted the request.
    #[error("{reason}")]
    Refused {
        /// Human-readable reason, surfaced to the user verbatim.
        reason: String,
    },
}

/// The external subsystem's session-request capability.
pub trait ArRuntime {
    /// Ask the platform to enter AR. A successful return only means the
    /// request was accepted; the session itself is announced later via
    /// `session-started`.
    fn request_session(&self) -> Result<(), StartError>;
}

/// Effect that performs the AR session round trip against an [`ArRuntime`]
/// environment.
pub fn session_request<Env>() -> BoxedEffect<(), StartError, Env>
where
    Env: ArRuntime + Clone + Send + Sync + 'static,
{
    from_fn(|env: &Env| env.request_session()).boxed()
}

/// Session/visibility controller.
///
/// Tracks the [`SessionPhase`], records every change into a [`PhaseLog`],
/// and drives splash/chrome/enablement on the presentation surface.
#[derive(Debug, Default)]
pub struct SessionController {
    phase: SessionPhase,
    log: PhaseLog,
    controls_enabled: bool,
}

impl SessionController {
    /// Controller in the pre-session state: splash phase, controls disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the control set is currently interactive.
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// Whether action requests are accepted right now.
    pub fn accepts_actions(&self) -> bool {
        self.phase == SessionPhase::Active && self.controls_enabled
    }

    /// The recorded phase trace for this process lifetime.
    pub fn log(&self) -> &PhaseLog {
        &self.log
    }

    /// Toggle interactivity of the whole control set. Idempotent; the
    /// surface receives the full set in one call.
    pub fn set_enablement<S: PresentationSurface>(&mut self, enabled: bool, surface: &mut S) {
        self.controls_enabled = enabled;
        surface.set_controls_enabled(enabled);
    }

    /// Hide the splash and run the session request against the AR runtime.
    /// On failure the splash comes back and the reason is surfaced; the
    /// error is also returned to the caller.
    pub async fn request_start<S, Env>(
        &mut self,
        surface: &mut S,
        ar: &Env,
    ) -> Result<(), StartError>
    where
        S: PresentationSurface,
        Env: ArRuntime + Clone + Send + Sync + 'static,
    {
        self.on_start_requested(surface);
        match session_request::<Env>().run(ar).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.on_start_failed(surface, &error);
                Err(error)
            }
        }
    }

    /// The start button was pressed: take the splash down while the request
    /// is in flight. The phase does not advance until `session-started`
    /// arrives.
    pub fn on_start_requested<S: PresentationSurface>(&mut self, surface: &mut S) {
        surface.set_splash_visible(false);
    }

    /// The session request failed: restore the pre-request UI and tell the
    /// user why.
    pub fn on_start_failed<S: PresentationSurface>(&mut self, surface: &mut S, error: &StartError) {
        surface.set_splash_visible(true);
        surface.show_info(&text::start_failed(&error.to_string()));
    }

    /// `session-started` arrived: reveal the AR chrome and ask the user to
    /// place the model.
    pub fn on_session_started<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.shift(SessionPhase::AwaitingPlacement, PhaseTrigger::SessionStarted);
        surface.set_chrome_visible(true);
        surface.show_info(text::PLACE_INSTRUCTION);
    }

    /// `model-placed` arrived: the session is fully interactive.
    pub fn on_model_placed<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.shift(SessionPhase::Active, PhaseTrigger::ModelPlaced);
        self.set_enablement(true, surface);
        surface.show_info(text::MODEL_READY);
    }

    /// `session-ended` arrived: abrupt external termination always wins.
    /// Everything AR-related comes down and the splash returns.
    pub fn on_session_ended<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.shift(SessionPhase::SplashShown, PhaseTrigger::SessionEnded);
        self.set_enablement(false, surface);
        surface.set_chrome_visible(false);
        surface.set_splash_visible(true);
    }

    /// The user asked to leave AR. The splash returns immediately; the later
    /// `session-ended` signal is handled idempotently.
    pub fn on_exit_requested<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.shift(SessionPhase::SplashShown, PhaseTrigger::ExitRequested);
        self.set_enablement(false, surface);
        surface.show_info(text::EXITING);
        surface.set_splash_visible(true);
    }

    /// Reset while a session is live: back to the pre-placement phase, with
    /// controls down until the model is re-anchored.
    pub fn on_reset<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.shift(SessionPhase::AwaitingPlacement, PhaseTrigger::ResetRequested);
        self.set_enablement(false, surface);
    }

    /// Both metrics bottomed out: lock the controls until an explicit reset.
    pub fn enter_ruined<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.shift(SessionPhase::Ruined, PhaseTrigger::MetricsDepleted);
        self.set_enablement(false, surface);
    }

    fn shift(&mut self, to: SessionPhase, trigger: PhaseTrigger) {
        if self.phase == to {
            return;
        }
        self.log = self.log.record(PhaseChange {
            from: self.phase,
            to,
            at: Utc::now(),
            trigger,
        });
        self.phase = to;
    }
}
