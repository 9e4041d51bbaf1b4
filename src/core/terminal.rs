//! Interactive CV terminal
//!
//! `CvTerminal` ties the session state, the command vocabulary and the
//! typing animator to a rendering surface. The host owns the event loop
//! and calls in through four hooks:
//!
//! - `on_key` for every key press
//! - `tick` once per animation frame
//! - `on_resize` when the container changes size
//! - `on_focus_change` when the terminal gains or loses focus
//!
//! # State machine
//!
//! ```text
//! Idle ──submit──> Animating(help) ────────────────complete──> Idle
//!  │                                                          ▲
//!  └──submit──> Animating(section i) ──complete, full CV──┐    │
//!                     ▲                                   │    │
//!                     └───────── i + 1 < sections ────────┘    │
//!                                 i + 1 == sections ───────────┘
//! ```
//!
//! Ctrl+C while animating cancels the task from any `Animating` state and
//! returns to `Idle` with the prompt redrawn. All other keys are dropped
//! while an animation is live.

use std::io;

use tracing::{debug, info, trace, warn};
use unicode_width::UnicodeWidthChar;

use super::animator::{Animator, Continuation, Frame};
use super::command::{Command, CommandVocabulary};
use super::session::Session;
use crate::config::{AddonsConfig, CvConfig};
use crate::ui::{KeyInput, NamedKey, Surface};

/// Message printed when an animation is cancelled
const INTERRUPTED_MESSAGE: &str = "\r\n\nInterrupted\r\n\n";

/// Terminal-styled CV
pub struct CvTerminal<'a, S: Surface> {
    surface: S,
    cv: &'a CvConfig,
    addons: AddonsConfig,
    session: Session,
    vocabulary: CommandVocabulary,
    animator: Animator,
}

impl<'a, S: Surface> CvTerminal<'a, S> {
    /// Install extensions, open and fit the surface, then print the
    /// welcome banner and the first prompt.
    pub fn new(cv: &'a CvConfig, addons: &AddonsConfig, surface: S) -> io::Result<Self> {
        let mut terminal = Self {
            surface,
            cv,
            addons: addons.clone(),
            session: Session::new(&cv.prompt),
            vocabulary: CommandVocabulary::new(cv.commands.iter().cloned(), &cv.full_cv_command),
            animator: Animator::new(),
        };

        terminal.install_addons()?;
        terminal.surface.open()?;
        terminal.surface.focus();
        terminal.fit_terminal()?;
        terminal.write_welcome_message();

        info!(
            "CV terminal ready: {} commands, {} sections",
            terminal.vocabulary.len(),
            cv.sections.len()
        );
        Ok(terminal)
    }

    #[allow(dead_code)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    fn install_addons(&mut self) -> io::Result<()> {
        if self.addons.fit && self.addons.auto_fit {
            self.surface.fit()?;
        }
        Ok(())
    }

    fn fit_terminal(&mut self) -> io::Result<()> {
        if self.addons.fit {
            self.surface.fit()?;
        }
        Ok(())
    }

    fn write_welcome_message(&mut self) {
        for line in &self.cv.welcome {
            self.surface.writeln(line);
        }
        self.write_prompt();
    }

    /// Container was resized
    pub fn on_resize(&mut self) -> io::Result<()> {
        self.fit_terminal()
    }

    /// Focus moved onto (`true`) or away from (`false`) the terminal
    pub fn on_focus_change(&mut self, focused: bool) {
        if focused {
            self.surface.focus();
        } else {
            self.surface.blur();
        }
    }

    /// Handle one key press
    pub fn on_key(&mut self, input: KeyInput) {
        if self.animator.is_animating() {
            if input.is_interrupt() {
                self.interrupt_animation();
            } else {
                trace!("Dropped key during animation: {:?}", input.key);
            }
            return;
        }

        match input.key {
            NamedKey::Backspace => self.handle_backspace(),
            NamedKey::Enter => self.handle_return(),
            NamedKey::ArrowUp | NamedKey::ArrowDown | NamedKey::ArrowLeft | NamedKey::ArrowRight => {}
            NamedKey::Char(ch) if input.is_printable() => self.handle_input(ch),
            _ => {}
        }
    }

    fn handle_backspace(&mut self) {
        if let Some(ch) = self.session.pop_char() {
            let width = ch.width().unwrap_or(1).max(1);
            let back = "\x08".repeat(width);
            self.surface.write(&format!("{back}{}{back}", " ".repeat(width)));
        }
    }

    fn handle_return(&mut self) {
        self.surface.writeln("");
        let line = self.session.input_buffer.trim().to_string();
        self.handle_command(&line);
        self.session.take_line();
        if !self.animator.is_animating() {
            self.write_prompt();
        }
    }

    fn handle_input(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.surface.write(ch.encode_utf8(&mut buf));
        self.session.push_char(ch);
    }

    fn write_prompt(&mut self) {
        self.surface.write(&self.session.prompt);
    }

    fn handle_command(&mut self, input: &str) {
        let Some(command) = self.vocabulary.resolve(input).cloned() else {
            debug!("Unknown command: {:?}", input);
            self.surface
                .writeln(&format!(" ERROR: Command not recognized: {}!", input));
            self.surface.writeln("Type 'help' to see available commands.");
            return;
        };

        debug!("Command: {:?}", command);
        match command {
            Command::Help => self.write_help(),
            Command::FullCv => self.start_full_cv(),
            Command::Section(name) => self.write_section(&name),
        }
    }

    fn write_help(&mut self) {
        let text = self.vocabulary.help_text();
        self.animator.start(&text, Continuation::Prompt);
    }

    fn start_full_cv(&mut self) {
        if self.cv.sections.is_empty() {
            // The caller redraws the prompt
            debug!("Full CV requested with no sections");
            return;
        }
        self.session.full_cv = true;
        self.session.section_cursor = 0;
        self.step_full_cv();
    }

    /// Show the section under the cursor, or finish the traversal
    fn step_full_cv(&mut self) {
        let cv = self.cv;
        let Some(name) = cv.sections.get(self.session.section_cursor) else {
            info!("Full CV finished");
            self.session.reset_full_cv();
            self.write_prompt();
            return;
        };

        self.session.full_cv = true;
        self.session.section_cursor += 1;
        debug!(
            "Full CV section {}/{}: {}",
            self.session.section_cursor,
            cv.sections.len(),
            name
        );
        self.write_section(name);
    }

    fn write_section(&mut self, name: &str) {
        self.surface
            .writeln(&format!("\n  {}", name.to_uppercase()));

        let lines = self.cv.lines(name);
        if lines.is_empty() {
            warn!("No content for section '{}'", name);
        }
        let body = format!("\r\n{}", lines.join("\n"));

        if self.session.interrupted {
            return;
        }
        self.animator.start(&body, Continuation::Section);
    }

    /// Advance the live animation by one frame
    pub fn tick(&mut self) -> Frame {
        if !self.animator.is_animating() {
            return Frame::Idle;
        }
        if self.session.interrupted {
            self.stop_animation();
            return Frame::Idle;
        }

        let frame = self.animator.step(&mut self.surface);
        if let Frame::Finished(on_complete) = frame {
            self.complete(on_complete);
        }
        frame
    }

    fn complete(&mut self, on_complete: Continuation) {
        match on_complete {
            Continuation::Section if self.session.full_cv => self.step_full_cv(),
            Continuation::Section | Continuation::Prompt => self.write_prompt(),
        }
    }

    fn stop_animation(&mut self) {
        self.session.interrupted = false;
        self.animator.cancel();
        self.session.reset_full_cv();
    }

    /// Cancel the live animation and return to the prompt
    pub fn interrupt_animation(&mut self) {
        info!("Animation interrupted");
        self.session.interrupted = true;
        self.stop_animation();
        self.surface.write(INTERRUPTED_MESSAGE);
        self.write_prompt();
    }
}
