use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};

use std::io::{self, Stderr};
use std::panic;

use crate::app::App;

/// Owns the terminal, and sets it up / tears it down.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl Tui {
    pub fn new(terminal: Terminal<CrosstermBackend<Stderr>>) -> Self {
        Self { terminal }
    }

    /// Initialize the terminal interface.
    pub fn init(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stderr(), EnterAlternateScreen, EnableMouseCapture)?;

        // Reset the terminal before printing panics, so they're readable.
        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            if let Err(e) = reset() {
                eprintln!("failed to reset the terminal: {}", e);
            }
            panic_hook(panic);
        }));

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn draw(&mut self, app: &mut App) -> Result<()> {
        self.terminal.draw(|frame| app.draw(frame))?;

        Ok(())
    }

    /// Exits the terminal interface.
    pub fn exit(&mut self) -> Result<()> {
        reset()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Resets the terminal interface.
pub fn reset() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
