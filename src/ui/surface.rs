//! Rendering surface abstraction
//!
//! The CV terminal never draws characters itself. It talks to a `Surface`
//! that owns the display buffer, in the same way a browser widget would talk
//! to a terminal emulator component.

use std::io;

/// Line terminator used by `writeln` (carriage return + line feed)
pub const LINE_END: &str = "\r\n";

/// A terminal-like display the CV terminal writes to
pub trait Surface {
    /// Attach the surface to its device
    fn open(&mut self) -> io::Result<()>;

    /// Give the surface input focus
    fn focus(&mut self);

    /// Remove input focus from the surface
    fn blur(&mut self);

    /// Queue raw text for display
    fn write(&mut self, text: &str);

    /// Queue text followed by a line terminator
    fn writeln(&mut self, text: &str) {
        self.write(text);
        self.write(LINE_END);
    }

    /// Resize the surface to its container
    fn fit(&mut self) -> io::Result<()>;

    /// Push queued output to the device
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory surface that records everything written to it
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    /// Full transcript of written text
    pub output: String,
    /// Whether `open` has been called
    pub opened: bool,
    /// Current focus state
    pub focused: bool,
    /// Number of `fit` calls
    pub fit_count: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the transcript, returning everything written since the last call
    #[allow(dead_code)]
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Transcript with terminal control characters stripped, for display
    pub fn plain_text(&self) -> String {
        self.output.chars().filter(|&c| c != '\r').collect()
    }
}

impl Surface for MemorySurface {
    fn open(&mut self) -> io::Result<()> {
        self.opened = true;
        Ok(())
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn fit(&mut self) -> io::Result<()> {
        self.fit_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writeln_appends_crlf() {
        let mut surface = MemorySurface::new();
        surface.writeln("hello");
        surface.writeln("");
        assert_eq!(surface.output, "hello\r\n\r\n");
    }

    #[test]
    fn test_take_output_drains() {
        let mut surface = MemorySurface::new();
        surface.write("abc");
        assert_eq!(surface.take_output(), "abc");
        assert!(surface.output.is_empty());
    }

    #[test]
    fn test_plain_text_strips_carriage_returns() {
        let mut surface = MemorySurface::new();
        surface.write("a\r\nb\n\rc");
        assert_eq!(surface.plain_text(), "a\nb\nc");
    }
}
