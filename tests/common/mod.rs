//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_store;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;
use vendor_desk::config::Config;
use vendor_desk::remote::VendorStore;
use vendor_desk::ui::app::{App, UiCommand};
use vendor_desk::ui::bridge::execute;
use vendor_desk::ui::render::draw;
use vendor_desk::ui::runtime::handle_event;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(&Config::default())
}

/// App whose remote commands queue up in the returned receiver instead of
/// going to a background worker.
pub fn make_wired_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = make_app();
    let (tx, rx) = mpsc::channel(16);
    app.set_command_sender(tx);
    (app, rx)
}

/// Run every queued command against `store` and feed the results back,
/// one at a time, until the queue is empty. Returns how many ran.
pub async fn pump<S: VendorStore>(
    app: &mut App,
    commands: &mut mpsc::Receiver<UiCommand>,
    store: &S,
) -> usize {
    let mut executed = 0;
    while let Ok(command) = commands.try_recv() {
        let event = execute(store, command).await;
        handle_event(app, event);
        executed += 1;
    }
    executed
}

/// Render one frame and return it as plain text, one line per row.
pub fn render_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
