//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the simulation: the grid, the falling pieces and the
//! scoring rules. It has no dependencies on the terminal, input handling or
//! any other I/O, which makes it:
//!
//! - **Deterministic**: a fixed seed replays the same piece sequence
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Allocation-free** on the hot path: grid and shapes are fixed arrays
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, collision checks, line clearing, session counters
//! - [`piece`]: tetromino templates and clockwise matrix rotation
//! - [`scoring`]: line-clear points, drop bonuses, level and gravity pacing
//! - [`rng`]: uniform random piece source
//! - [`game`]: session driver (gravity, player actions, lock and respawn)
//! - [`config`]: startup configuration
//! - [`snapshot`]: read-only frame data for the presentation layer
//!
//! # Rules
//!
//! - Pieces are drawn independently and uniformly at random (no bag)
//! - Rotation is clockwise only and has no wall kicks: a rotation that does
//!   not fit is rejected
//! - Line clears score 100/300/500/800 times the level before the clear
//! - Soft drop scores 1 point per row, hard drop 2 points per row
//! - The level is `lines / 10 + 1`
//!
//! # Example
//!
//! ```
//! use tui_tetromino_core::{Board, Piece};
//!
//! let mut board = Board::new();
//! let piece = Piece::from_index(3, 4, 18); // O on the floor
//!
//! assert!(board.is_valid_position(&piece, 0, 0));
//! assert!(!board.is_valid_position(&piece, 0, 1));
//!
//! assert_eq!(board.place_tetromino(&piece), 0);
//! assert!(board.is_occupied(4, 19));
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game::Game;
pub use piece::{spawn_position, Piece, ShapeMatrix};
pub use rng::PieceSource;
pub use scoring::{drop_points, fall_interval_ms, level_for_lines, line_clear_points, Stats};
pub use snapshot::{GameSnapshot, PieceSnapshot};
