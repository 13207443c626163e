use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::remote::TransportError;
use crate::ui::form::{FormMode, SaveTicket};
use crate::vendor::{Vendor, VendorId};

/// Everything the UI loop reacts to: terminal input, timer ticks and the
/// outcome of remote calls.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    VendorsLoaded(Result<Vec<Vendor>, TransportError>),
    VendorSaved {
        ticket: SaveTicket,
        mode: FormMode,
        result: Result<Vendor, TransportError>,
    },
    VendorDeleted {
        id: VendorId,
        result: Result<(), TransportError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the terminal input thread. It stops once the handler (and
    /// every sender clone) is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate));
        if let Err(err) = spawned {
            tracing::error!("Failed to spawn input thread: {}", err);
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(event_tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        // Short poll timeout so a closed receiver is noticed quickly
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    event_tx.send(AppEvent::Key(key))
                }
                Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!("Terminal read failed: {}", err);
                    break;
                }
            },
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::error!("Terminal poll failed: {}", err);
                break;
            }
        };
        if forwarded.is_err() {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
