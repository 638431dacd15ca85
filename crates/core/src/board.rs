//! Board module - manages the game grid and session counters
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the grid (y < 0) are legal for a falling piece but never stored.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::scoring::Stats;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Upper bound on rows cleared at once
pub const MAX_CLEARED_ROWS: usize = GRID_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage, plus the
/// score/level/line counters of the running session.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    stats: Stats,
}

impl Board {
    /// Create a new empty board at level 1
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            stats: Stats::new(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether `piece` shifted by (x_offset, y_offset) fits.
    ///
    /// Fails when any set cell lands left of column 0, right of the last
    /// column, below the last row, or on a filled cell. Cells above the top
    /// row are only bounds-checked horizontally. Offsets of any size are
    /// accepted; the sum is taken in `i16` so it cannot overflow.
    pub fn is_valid_position(&self, piece: &Piece, x_offset: i8, y_offset: i8) -> bool {
        piece.blocks().all(|(bx, by)| {
            let x = i16::from(bx) + i16::from(x_offset);
            let y = i16::from(by) + i16::from(y_offset);
            if x < 0 || x >= GRID_WIDTH as i16 || y >= GRID_HEIGHT as i16 {
                return false;
            }
            y < 0 || !self.is_occupied(x as i8, y as i8)
        })
    }

    /// Rows `piece` can fall before it rests
    pub fn drop_distance(&self, piece: &Piece) -> u8 {
        let mut distance: u8 = 0;
        while distance < GRID_HEIGHT && self.is_valid_position(piece, 0, distance as i8 + 1) {
            distance += 1;
        }
        distance
    }

    /// Lock `piece` into the grid, clear full rows and update the counters.
    ///
    /// Cells above the top row are dropped. Returns the number of lines cleared.
    pub fn place_tetromino(&mut self, piece: &Piece) -> usize {
        for (x, y) in piece.blocks() {
            if y >= 0 {
                self.set(x, y, Some(piece.color()));
            }
        }

        let lines = self.clear_lines();
        self.update_stats(lines);
        lines
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return how many were removed
    pub fn clear_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Surviving rows keep their relative order and settle at the bottom;
    /// the freed rows at the top are emptied. Zero-allocation two-pointer
    /// compaction, scanning from the bottom up.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared_rows
    }

    /// Add a line clear to the counters
    pub fn update_stats(&mut self, lines_cleared: usize) {
        let points = self.stats.record_clear(lines_cleared);
        if points > 0 {
            log::debug!(
                "cleared {} line(s) for {} points, total lines {}",
                lines_cleared,
                points,
                self.stats.total_lines
            );
        }
    }

    /// One point per row of fast-dropped descent
    pub fn add_soft_drop_score(&mut self, distance: u32) {
        self.stats.add_drop(distance, false);
    }

    /// Two points per row of hard drop
    pub fn add_hard_drop_score(&mut self, distance: u32) {
        self.stats.add_drop(distance, true);
    }

    /// A freshly spawned piece that does not fit ends the game
    pub fn is_game_over(&self, piece: &Piece) -> bool {
        !self.is_valid_position(piece, 0, 0)
    }

    /// Empty the grid and restart the counters
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.stats = Stats::new();
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn total_lines(&self) -> u32 {
        self.stats.total_lines
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_WIDTH as usize)
    }

    /// Copy the grid into a 2D array (used by snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), GRID_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == GRID_WIDTH as usize));

        let mut board = Self::new();
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                board.cells[y * GRID_WIDTH as usize + x] = *cell;
            }
        }
        board
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
