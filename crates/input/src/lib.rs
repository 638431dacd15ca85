//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks
//! the held state of the soft-drop key, including on terminals that never
//! emit key-release events.

pub mod handler;
pub mod map;

pub use tui_tetromino_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
