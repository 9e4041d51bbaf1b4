//! Typewriter animation
//!
//! Reveals a block of text one character per frame. The animator owns the
//! single live `AnimationTask`; the host decides when frames happen by
//! calling `step`.

use tracing::warn;

use crate::ui::Surface;

/// What to do once an animation runs to completion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Redraw the prompt
    Prompt,
    /// A section finished: chain to the next one in full CV mode,
    /// otherwise redraw the prompt
    Section,
}

/// Text being revealed
#[derive(Debug, Clone)]
pub struct AnimationTask {
    text: Vec<char>,
    position: usize,
    on_complete: Continuation,
}

impl AnimationTask {
    pub fn new(text: &str, on_complete: Continuation) -> Self {
        Self {
            text: text.chars().collect(),
            position: 0,
            on_complete,
        }
    }

    #[allow(dead_code)]
    pub fn position(&self) -> usize {
        self.position
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Result of one animation frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// No animation is live
    Idle,
    /// One character was revealed
    Revealed(char),
    /// The text is fully revealed; the task is gone
    Finished(Continuation),
}

/// Owner of the live animation
#[derive(Debug, Default)]
pub struct Animator {
    task: Option<AnimationTask>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.task.is_some()
    }

    #[allow(dead_code)]
    pub fn task(&self) -> Option<&AnimationTask> {
        self.task.as_ref()
    }

    /// Start revealing `text`. Nothing is written until the next `step`.
    /// Ignored while another animation is live.
    pub fn start(&mut self, text: &str, on_complete: Continuation) {
        if self.task.is_some() {
            warn!("Animation already running, ignoring new one");
            return;
        }
        self.task = Some(AnimationTask::new(text, on_complete));
    }

    /// Drop the live task without running its continuation
    pub fn cancel(&mut self) -> bool {
        self.task.take().is_some()
    }

    /// Advance the live task by one frame
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Frame {
        let Some(task) = self.task.as_mut() else {
            return Frame::Idle;
        };

        if let Some(&ch) = task.text.get(task.position) {
            let mut buf = [0u8; 4];
            surface.write(ch.encode_utf8(&mut buf));
            if ch == '\n' {
                surface.write("\r");
            }
            task.position += 1;
            return Frame::Revealed(ch);
        }

        surface.writeln("\r");
        let on_complete = task.on_complete;
        self.task = None;
        Frame::Finished(on_complete)
    }
}
