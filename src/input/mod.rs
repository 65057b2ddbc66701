//! Input bridging: event types, held-key state, and the processor that
//! turns raw window events into per-frame camera input.

/// Platform-agnostic input events.
pub mod event;
/// Movement directions and held-key sets.
pub mod keyboard;
/// Converts raw events into per-frame camera input.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::{HeldDirections, MoveDirection};
pub use processor::{FrameInput, InputProcessor};
