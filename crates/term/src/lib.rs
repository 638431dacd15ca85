//! Terminal game renderer.
//!
//! Renders a [`core::GameSnapshot`] into a plain framebuffer of styled
//! characters and flushes that framebuffer to the terminal, redrawing only
//! the cells that changed since the previous frame.
//!
//! - `core` stays free of terminal concerns
//! - board cells are drawn 2 columns wide to offset the glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tetromino_core as core;
pub use tui_tetromino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
