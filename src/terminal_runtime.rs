use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode, alternate screen, mouse capture) for
/// one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    mouse_capture: bool,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    ///
    /// With `mouse_capture`, mouse drags are reported so they can act as swipes.
    pub fn enter(mouse_capture: bool) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        if mouse_capture {
            if let Err(error) = execute!(stdout, EnableMouseCapture) {
                let _ = cleanup_terminal_best_effort(false);
                return Err(error);
            }
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                mouse_capture,
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort(mouse_capture);
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort(self.mouse_capture);
    }
}

/// Restores the terminal; also called from the panic hook.
pub fn cleanup_terminal_best_effort(mouse_capture: bool) -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse_capture {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    execute!(stdout, Show, LeaveAlternateScreen)
}
