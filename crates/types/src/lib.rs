//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so the simulation
//! core, the terminal view and the input layer can all share them.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: top row, horizontally centered on the piece matrix
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed step interval (~60 steps/s) |
//! | `INITIAL_FALL_MS` | 500 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval decrease per level |
//! | `MIN_FALL_MS` | 50 | Interval floor |
//! | `FAST_DROP_MULTIPLIER` | 10 | Soft drop is 10x faster |
//! | `SOFT_DROP_RELEASE_MS` | 150 | Soft drop auto-release without key-up events |
//!
//! # Examples
//!
//! ```
//! use tui_tetromino_types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let piece = PieceKind::from_index(5);
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.index(), 5);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Fixed step interval in milliseconds (16ms ≈ 60 steps per second)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (one row every 500ms)
pub const INITIAL_FALL_MS: u32 = 500;

/// Gravity interval decrease per level gained
pub const FALL_STEP_MS: u32 = 50;

/// Gravity interval floor
pub const MIN_FALL_MS: u32 = 50;

/// Fast drop divides the gravity interval by this factor
pub const FAST_DROP_MULTIPLIER: u32 = 10;

/// Fast drop is released this long after the last down-key event when the
/// terminal never reports key releases.
pub const SOFT_DROP_RELEASE_MS: u32 = 150;

/// Lines needed to gain one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for clearing N lines at level 1, indexed by N.
///
/// - 0 lines: 0
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
///
/// Multiplied by the level in effect before the clear.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row of fast-dropped gravity descent
pub const SOFT_DROP_POINTS_PER_ROW: u32 = 1;

/// Points per row of a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// The seven tetromino kinds, in template index order.
///
/// - **I** (0): cyan bar
/// - **J** (1): blue
/// - **L** (2): orange
/// - **O** (3): yellow square
/// - **S** (4): green
/// - **T** (5): purple
/// - **Z** (6): red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Number of piece templates
    pub const COUNT: usize = 7;

    /// All kinds in template index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Kind for a template index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..7`.
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < Self::COUNT,
            "piece index {} out of range 0..{}",
            index,
            Self::COUNT
        );
        Self::ALL[index]
    }

    /// Template index of this kind
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Display color as RGB
    ///
    /// ```
    /// use tui_tetromino_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color(), (0, 255, 255));
    /// assert_eq!(PieceKind::Z.color(), (255, 0, 0));
    /// ```
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::J => (0, 0, 255),
            PieceKind::L => (255, 165, 0),
            PieceKind::O => (255, 255, 0),
            PieceKind::S => (0, 255, 0),
            PieceKind::T => (128, 0, 128),
            PieceKind::Z => (255, 0, 0),
        }
    }

    /// Uppercase letter for the kind
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(PieceKind)`: filled with the color of that piece kind
pub type Cell = Option<PieceKind>;

/// Player actions fed into the game orchestrator.
///
/// Produced by the key map in the input crate and consumed by
/// `Game::apply_action` in the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Start fast drop (gravity runs faster and awards soft drop points)
    SoftDrop,
    /// Stop fast drop
    SoftDropRelease,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to the floor and lock it
    HardDrop,
    /// Toggle pause
    Pause,
    /// Start a new game (only after game over)
    Restart,
}
