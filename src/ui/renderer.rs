//! Terminal surface using crossterm
//!
//! Draws the CV terminal on the console the process runs in.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    event::{DisableFocusChange, EnableFocusChange},
    execute, queue,
    style::{Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

use crate::config::TerminalConfig;
use super::surface::Surface;

/// Console-backed rendering surface
pub struct CrosstermSurface {
    options: TerminalConfig,
    /// Output queued since the last flush
    pending: String,
    /// Whether the terminal has been initialized
    initialized: bool,
    /// Last fitted size (cols, rows)
    size: (u16, u16),
}

impl CrosstermSurface {
    pub fn new(options: TerminalConfig) -> Self {
        Self {
            options,
            pending: String::new(),
            initialized: false,
            size: (0, 0),
        }
    }

    fn cursor_style(&self) -> SetCursorStyle {
        if self.options.cursor_blink {
            SetCursorStyle::BlinkingBlock
        } else {
            SetCursorStyle::SteadyBlock
        }
    }

    /// Cleanup the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        let mut stdout = io::stdout();

        // Reset cursor color (OSC 112)
        write!(stdout, "\x1b]112\x07")?;

        let _ = execute!(
            stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            SetCursorStyle::DefaultUserShape,
            Show,
            DisableFocusChange,
            LeaveAlternateScreen
        );
        let _ = stdout.flush();

        // Disable raw mode - this is the most important part
        terminal::disable_raw_mode()?;

        Ok(())
    }
}

impl Surface for CrosstermSurface {
    fn open(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.initialized = true;

        let theme = &self.options.theme;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableFocusChange,
            SetForegroundColor(theme.foreground.to_crossterm()),
            SetBackgroundColor(theme.background.to_crossterm()),
            Clear(ClearType::All),
            MoveTo(0, 0),
            self.cursor_style()
        )?;

        // Cursor color (OSC 12)
        let c = theme.cursor;
        write!(stdout, "\x1b]12;#{:02x}{:02x}{:02x}\x07", c.r, c.g, c.b)?;
        stdout.flush()?;

        debug!("Surface opened");
        Ok(())
    }

    fn focus(&mut self) {
        let mut stdout = io::stdout();
        let _ = queue!(stdout, Show, self.cursor_style());
    }

    fn blur(&mut self) {
        let mut stdout = io::stdout();
        let _ = queue!(stdout, Hide);
    }

    fn write(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn fit(&mut self) -> io::Result<()> {
        let size = terminal::size()?;
        if size != self.size {
            debug!("Fit: {}x{}", size.0, size.1);
            self.size = size;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if !self.pending.is_empty() {
            stdout.write_all(self.pending.as_bytes())?;
            self.pending.clear();
        }
        stdout.flush()
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        let _ = self.flush();
        let _ = self.cleanup();
    }
}
