//! Terminal state guard that restores the screen on drop.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// RAII guard for raw mode, the alternate screen, and mouse capture.
///
/// Restoration runs on drop, so early `?` returns and panics (via the hook
/// below) still leave the terminal usable.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }

    /// Restore the terminal; also called directly by the panic hook.
    pub fn restore() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
        let _ = io::stdout().flush();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Self::restore();
    }
}

/// Install a panic hook that restores the terminal before the panic
/// message prints, so it stays readable.
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        TerminalGuard::restore();
        original(info);
    }));
}
