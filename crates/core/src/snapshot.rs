use crate::piece::{Piece, ShapeMatrix};
use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl PieceSnapshot {
    /// Absolute (column, row) cells covered by the piece
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            shape: *value.shape(),
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything the presentation layer reads for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    /// Falling piece; `None` once the game is over.
    pub active: Option<PieceSnapshot>,
    pub next: PieceSnapshot,
    pub fast_drop: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            next: Piece::spawn(PieceKind::I).into(),
            fast_drop: false,
            paused: false,
            game_over: false,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
