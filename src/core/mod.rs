//! Core CV terminal components.
//!
//! - **session**: Input buffer, cursor and full CV traversal state
//! - **command**: Command vocabulary resolved into `Command` variants
//! - **animator**: One-character-per-frame typewriter animation
//! - **terminal**: Input dispatch tying the above to a `Surface`
//!
//! # Architecture
//!
//! ```text
//! CvTerminal
//! ├── Session (input buffer + flags)
//! ├── CommandVocabulary (name -> Command)
//! ├── Animator (single live AnimationTask)
//! └── Surface (external display)
//! ```

pub mod animator;
pub mod command;
pub mod session;
pub mod terminal;

pub use terminal::CvTerminal;
