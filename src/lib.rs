//! Terminal falling-block puzzle (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_tetromino::{core,input,term,types}` and owns the
//! process-level concerns of the binary (logging).

pub mod logging;

pub use tui_tetromino_core as core;
pub use tui_tetromino_input as input;
pub use tui_tetromino_term as term;
pub use tui_tetromino_types as types;
