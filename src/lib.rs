//! Brushup: the interaction core of an AR dental-hygiene education demo.
//!
//! The crate follows a "pure core, imperative shell" split. The simulation
//! arithmetic, phase machine, and derived tooth condition are pure values in
//! [`core`]; everything that touches the outside world goes through three
//! ports handed in by reference:
//!
//! - [`PresentationSurface`]: the HUD (splash, AR chrome, metric bars,
//!   condition indicator, detail overlay, focus).
//! - [`EventSink`]: outward events for the AR/3D subsystem and any other
//!   observer, in a fixed JSON vocabulary ([`events`]).
//! - [`ArRuntime`]: the external session-request capability, driven through
//!   a `stillwater` effect so the one failable round trip is explicit.
//!
//! # Core Concepts
//!
//! - **Session phases**: `SplashShown → AwaitingPlacement → Active`, with a
//!   terminal `Ruined` once both metrics bottom out, traced in a
//!   [`core::PhaseLog`].
//! - **Metrics**: cleanliness and health, bounded to `[0, 100]` and rounded
//!   to two decimals on every mutation.
//! - **Streaks**: repeated sweet or healthy choices only move health every
//!   second consecutive time.
//!
//! # Example
//!
//! ```rust
//! use brushup::events::{ActionKind, InboundEvent, Outcome, UserInput};
//! use brushup::{App, RecordingSink, RecordingSurface};
//!
//! let mut app = App::new();
//! let mut surface = RecordingSurface::new();
//! let mut events = RecordingSink::new();
//!
//! app.handle_signal(InboundEvent::SessionStarted, &mut surface, &mut events);
//! app.handle_signal(InboundEvent::ModelPlaced, &mut surface, &mut events);
//!
//! app.handle_input(UserInput::Action(ActionKind::Sweet), &mut surface, &mut events);
//! app.handle_signal(
//!     InboundEvent::ActionOutcome { action: ActionKind::Sweet, status: Outcome::Ok },
//!     &mut surface,
//!     &mut events,
//! );
//!
//! assert_eq!(app.simulation().cleanliness(), 87.5);
//! assert_eq!(app.simulation().health(), 100.0);
//! ```

pub mod app;
pub mod bus;
pub mod config;
pub mod core;
pub mod events;
pub mod indicator;
pub mod session;
pub mod sim;
pub mod surface;
pub mod text;

// Re-export commonly used types
pub use app::{App, Followup};
pub use bus::{Envelope, EventBus, EventSink, RecordingSink};
pub use config::Timings;
pub use indicator::ConditionIndicator;
pub use session::{ArRuntime, SessionController, StartError};
pub use sim::{Applied, Simulation};
pub use surface::{FocusTarget, PresentationSurface, RecordingSurface};
