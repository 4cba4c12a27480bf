pub mod app;
pub mod app_state;
pub mod services;
pub mod ui;

use std::io;

pub use app::App;

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        is_raw_mode_enabled,
    },
};
use eyre::Result;
use ratatui::{Terminal, prelude::CrosstermBackend};

type ChatTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode and the alternate screen, with mouse scrolling and bracketed
/// paste turned on.
fn setup_terminal() -> Result<ChatTerminal> {
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

/// Hand the terminal back to the shell, on exit and before a panic report.
/// Does nothing unless the chat screen is up.
pub fn restore_terminal() {
    if !is_raw_mode_enabled().unwrap_or(false) {
        return;
    }
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    );
}
