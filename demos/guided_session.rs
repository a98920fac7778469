//! Guided Session
//!
//! Walks the interaction layer through a full AR session from a console:
//! start request, placement, a few actions, a ruined tooth, and recovery.
//!
//! Key concepts:
//! - Ports as plain trait implementations (console surface, scripted runtime)
//! - The event bus fanning envelopes out to an observer
//! - The phase log as a session trace
//!
//! Run with: cargo run --example guided_session

use brushup::core::ToothCondition;
use brushup::events::{ActionKind, InboundEvent, Outcome, UserInput};
use brushup::session::{ArRuntime, StartError};
use brushup::surface::{FocusTarget, PresentationSurface};
use brushup::{App, EventBus, Followup};

/// Surface that narrates every UI mutation to stdout.
struct ConsoleSurface;

impl PresentationSurface for ConsoleSurface {
    fn set_splash_visible(&mut self, visible: bool) {
        println!("  [ui] splash {}", if visible { "shown" } else { "hidden" });
    }

    fn set_chrome_visible(&mut self, visible: bool) {
        println!("  [ui] AR chrome {}", if visible { "shown" } else { "hidden" });
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        println!(
            "  [ui] controls {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    fn show_info(&mut self, text: &str) {
        println!("  [info] {text}");
    }

    fn render_metrics(&mut self, cleanliness: f64, health: f64) {
        println!("  [bars] cleanliness {cleanliness:.2}% | health {health:.2}%");
    }

    fn show_condition(&mut self, condition: ToothCondition) {
        println!("  [indicator] {}", condition.label());
    }

    fn show_detail(&mut self, _icon: &str, label: &str) {
        println!("  [detail] {label}");
    }

    fn hide_detail(&mut self) {
        println!("  [detail] closed");
    }

    fn set_focus(&mut self, target: FocusTarget) {
        println!("  [focus] {target:?}");
    }
}

/// AR runtime that always grants the session.
#[derive(Clone)]
struct GrantingRuntime;

impl ArRuntime for GrantingRuntime {
    fn request_session(&self) -> Result<(), StartError> {
        Ok(())
    }
}

async fn settle(app: &mut App, surface: &mut ConsoleSurface, followup: Option<Followup>) {
    if let Some(Followup::ReenableAfter(delay)) = followup {
        tokio::time::sleep(delay).await;
        app.reenable(surface);
    }
}

#[tokio::main]
async fn main() {
    println!("=== Guided Session ===\n");

    let mut app = App::new();
    let mut surface = ConsoleSurface;
    let mut bus = EventBus::new();
    bus.subscribe(|envelope| {
        println!("  [bus] {}", envelope.event.to_json().expect("event is serializable"));
    });

    println!("Starting AR:");
    app.request_start(&mut surface, &GrantingRuntime)
        .await
        .expect("scripted runtime always grants");
    app.handle_signal(InboundEvent::SessionStarted, &mut surface, &mut bus);
    app.handle_signal(InboundEvent::ModelPlaced, &mut surface, &mut bus);

    println!("\nBrushing once:");
    app.handle_input(UserInput::Action(ActionKind::Brush), &mut surface, &mut bus);
    let followup = app.handle_signal(
        InboundEvent::ActionOutcome {
            action: ActionKind::Brush,
            status: Outcome::Ok,
        },
        &mut surface,
        &mut bus,
    );
    settle(&mut app, &mut surface, followup).await;

    println!("\nA skipped animation defers the re-enable:");
    app.handle_input(UserInput::Action(ActionKind::Sweet), &mut surface, &mut bus);
    let followup = app.handle_signal(
        InboundEvent::ActionOutcome {
            action: ActionKind::Sweet,
            status: Outcome::Skipped,
        },
        &mut surface,
        &mut bus,
    );
    settle(&mut app, &mut surface, followup).await;

    println!("\nEight sweets ruin the tooth:");
    for _ in 0..8 {
        app.handle_input(UserInput::Action(ActionKind::Sweet), &mut surface, &mut bus);
        let followup = app.handle_signal(
            InboundEvent::ActionOutcome {
                action: ActionKind::Sweet,
                status: Outcome::Ok,
            },
            &mut surface,
            &mut bus,
        );
        settle(&mut app, &mut surface, followup).await;
    }

    println!("\nChecking the odontogram detail:");
    app.open_detail(&mut surface);
    app.close_detail(&mut surface);

    println!("\nOnly reset leaves the ruined state:");
    app.handle_input(UserInput::Reset, &mut surface, &mut bus);
    app.handle_signal(InboundEvent::ModelPlaced, &mut surface, &mut bus);

    println!("\nSession trace:");
    for change in app.session().log().changes() {
        println!(
            "  {} -> {} ({:?})",
            change.from.name(),
            change.to.name(),
            change.trigger
        );
    }

    println!("\n=== Session Complete ===");
}
