//! Piece module - tetromino shape templates and matrix rotation
//!
//! Each piece kind has a fixed boolean template. A live [`Piece`] carries a
//! copy of that matrix (which rotation replaces) plus the grid position of
//! the matrix's top-left corner. Matrices are at most 4x4 and stored inline.

use rand::Rng;

use crate::types::{PieceKind, GRID_WIDTH};

/// Largest side of any template matrix
pub const MAX_SIDE: usize = 4;

/// A rectangular boolean shape matrix of up to 4x4 cells.
///
/// Only the top-left `rows x cols` region is meaningful; everything outside
/// it is kept `false` so derived equality compares shapes, not garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl ShapeMatrix {
    /// Build a matrix from row slices (1 = set, 0 = empty).
    ///
    /// # Panics
    ///
    /// Panics on an empty, ragged or larger-than-4x4 input.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SIDE, "bad row count");
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SIDE, "bad column count");

        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {}", y);
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Template matrix for a piece kind
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (column, row) is set. Out-of-range is `false`.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.cols() && y < self.rows() && self.cells[y][x]
    }

    /// Rotate 90° clockwise.
    ///
    /// An R x C matrix becomes C x R with `rotated[x][y] = self[R-1-y][x]`.
    pub fn rotate(&self) -> Self {
        let r = self.rows();
        let c = self.cols();
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for x in 0..c {
            for y in 0..r {
                cells[x][y] = self.cells[r - 1 - y][x];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Offsets (column, row) of set cells, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows()).flat_map(move |y| {
            (0..self.cols())
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }
}

/// One falling tetromino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Piece from a template index at an explicit position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..7`.
    pub fn from_index(index: usize, x: i8, y: i8) -> Self {
        Self::at(PieceKind::from_index(index), x, y)
    }

    /// Piece of `kind` at an explicit position
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: ShapeMatrix::template(kind),
            x,
            y,
        }
    }

    /// Piece of `kind` at its spawn position (top row, horizontally centered)
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self::at(kind, x, y)
    }

    /// Uniformly random kind at its spawn position
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let index = rng.random_range(0..PieceKind::COUNT);
        Self::spawn(PieceKind::from_index(index))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Color identity written into the grid when this piece locks
    pub fn color(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &ShapeMatrix {
        &self.shape
    }

    /// The clockwise-rotated matrix of the current shape. Does not modify `self`.
    pub fn rotate(&self) -> ShapeMatrix {
        self.shape.rotate()
    }

    /// Candidate piece with `shape` at the same position.
    pub fn with_shape(&self, shape: ShapeMatrix) -> Self {
        Self { shape, ..*self }
    }

    /// Candidate piece rotated clockwise in place; callers validate before committing.
    pub fn rotated(&self) -> Self {
        self.with_shape(self.rotate())
    }

    /// Candidate piece shifted by (dx, dy), saturating at the `i8` range
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Absolute (column, row) grid coordinates of the occupied cells.
    ///
    /// Coordinates saturate at the `i8` range; a saturated cell is always
    /// outside the grid.
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

/// Spawn position for a piece kind: `x = GRID_WIDTH/2 - cols/2`, `y = 0`
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let cols = ShapeMatrix::template(kind).cols() as i8;
    ((GRID_WIDTH as i8) / 2 - cols / 2, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_template_dimensions() {
        let dims: Vec<(usize, usize)> = PieceKind::ALL
            .iter()
            .map(|&k| {
                let m = ShapeMatrix::template(k);
                (m.rows(), m.cols())
            })
            .collect();
        assert_eq!(
            dims,
            vec![(1, 4), (2, 3), (2, 3), (2, 2), (2, 3), (2, 3), (2, 3)]
        );
    }

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(ShapeMatrix::template(kind).offsets().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // [0 1 0]      [1 0]
        // [1 1 1]  ->  [1 1]
        //              [1 0]
        let rotated = ShapeMatrix::template(PieceKind::T).rotate();
        assert_eq!(rotated, ShapeMatrix::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]));
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let rotated = ShapeMatrix::template(PieceKind::I).rotate();
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
        assert_eq!(rotated.offsets().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_rotate_does_not_mutate_piece() {
        let piece = Piece::spawn(PieceKind::L);
        let before = *piece.shape();
        let _ = piece.rotate();
        assert_eq!(*piece.shape(), before);
    }

    #[test]
    fn test_get_outside_matrix_is_false() {
        let m = ShapeMatrix::template(PieceKind::O);
        assert!(m.get(1, 1));
        assert!(!m.get(2, 0));
        assert!(!m.get(0, 2));
    }

    #[test]
    fn test_spawn_positions_are_centered() {
        assert_eq!(spawn_position(PieceKind::I), (3, 0));
        assert_eq!(spawn_position(PieceKind::O), (4, 0));
        assert_eq!(spawn_position(PieceKind::T), (4, 0));
    }

    #[test]
    fn test_random_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(Piece::random(&mut a), Piece::random(&mut b));
        }
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn test_from_rows_rejects_ragged_input() {
        let _ = ShapeMatrix::from_rows(&[&[1, 1], &[1]]);
    }
}
