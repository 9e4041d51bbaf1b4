//! Rendering surfaces and input handling.
//!
//! - **surface**: The `Surface` trait and an in-memory implementation
//! - **renderer**: crossterm-backed surface for real terminals
//! - **keymapper**: Keyboard events to `KeyInput` mapping

pub mod keymapper;
pub mod renderer;
pub mod surface;

pub use keymapper::*;
pub use renderer::CrosstermSurface;
pub use surface::{MemorySurface, Surface};
