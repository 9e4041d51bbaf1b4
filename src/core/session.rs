//! Session state
//!
//! Mutable context shared by the input dispatcher, the command
//! interpreter and the typing animator.

/// Per-page terminal session
#[derive(Debug, Clone)]
pub struct Session {
    /// Text typed since the last prompt
    pub input_buffer: String,
    /// Cursor column, counted in characters from the start of the line
    pub cursor_column: usize,
    /// Prompt shown before user input
    pub prompt: String,
    /// Prompt length in characters
    pub prompt_length: usize,
    /// Cancellation requested for the live animation
    pub interrupted: bool,
    /// Walking through every section
    pub full_cv: bool,
    /// Next section to show in full CV mode
    pub section_cursor: usize,
}

impl Session {
    pub fn new(prompt: &str) -> Self {
        let prompt_length = prompt.chars().count();
        Self {
            input_buffer: String::new(),
            cursor_column: prompt_length,
            prompt: prompt.to_string(),
            prompt_length,
            interrupted: false,
            full_cv: false,
            section_cursor: 0,
        }
    }

    /// Append a typed character
    pub fn push_char(&mut self, ch: char) {
        self.input_buffer.push(ch);
        self.cursor_column += 1;
    }

    /// Remove the last typed character. Never moves the cursor into the prompt.
    pub fn pop_char(&mut self) -> Option<char> {
        if self.cursor_column <= self.prompt_length {
            return None;
        }
        let ch = self.input_buffer.pop()?;
        self.cursor_column -= 1;
        Some(ch)
    }

    /// Take the submitted line and reset the input state
    pub fn take_line(&mut self) -> String {
        self.cursor_column = self.prompt_length;
        std::mem::take(&mut self.input_buffer)
    }

    /// Leave full CV mode
    pub fn reset_full_cv(&mut self) {
        self.section_cursor = 0;
        self.full_cv = false;
    }
}
