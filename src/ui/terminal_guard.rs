//! Raw mode and alternate screen for the lifetime of the UI loop.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set while the terminal is in UI mode. Drop and the panic hook share it;
/// whichever clears it first restores the terminal.
#[derive(Clone)]
struct Armed(Arc<AtomicBool>);

impl Armed {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    fn disarm(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    armed: Armed,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed.disarm() {
            restore_terminal();
        }
    }
}

// Each step on its own so one failure does not skip the rest.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableBracketedPaste);
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = execute!(stdout, Show);
}

fn install_panic_hook(armed: Armed) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if armed.disarm() {
            restore_terminal();
        }
        default_hook(info);
    }));
}

/// Enter UI mode. The guard is armed before the first terminal change, so
/// a failure partway through still leaves the shell usable.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let guard = TerminalGuard {
        armed: Armed::new(),
    };
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        Clear(ClearType::All),
        Hide
    )?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    install_panic_hook(guard.armed.clone());
    Ok((terminal, guard))
}
