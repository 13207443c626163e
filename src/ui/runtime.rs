use crate::config::Config;
use crate::remote::VendorStore;
use crate::ui::app::{App, UiCommand};
use crate::ui::bridge::spawn_bridge;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(120);
const COMMAND_QUEUE: usize = 64;

/// Run the TUI until the user quits. Remote calls execute on `runtime`.
pub fn run<S: VendorStore>(config: &Config, store: S, runtime: &Runtime) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config);
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel::<UiCommand>(COMMAND_QUEUE);
    app.set_command_sender(command_tx);
    let bridge = spawn_bridge(
        runtime.handle(),
        Arc::new(store),
        command_rx,
        events.sender(),
    );
    tracing::info!(endpoint = %app.endpoint(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel and stops the bridge
    drop(app);
    bridge.abort();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

/// Apply one event to the app.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => handle_paste(app, text),
        AppEvent::Tick => app.on_tick(),
        // ratatui re-measures the frame on every draw
        AppEvent::Resize(cols, rows) => tracing::trace!(cols, rows, "resize"),
        AppEvent::VendorsLoaded(result) => app.on_vendors_loaded(result),
        AppEvent::VendorSaved {
            ticket,
            mode,
            result,
        } => app.on_vendor_saved(ticket, mode, result),
        AppEvent::VendorDeleted { id, result } => app.on_vendor_deleted(id, result),
    }
}
