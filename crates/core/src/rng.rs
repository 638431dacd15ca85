//! RNG module - independent uniform piece generation
//!
//! Every draw picks one of the seven kinds with equal probability, with no
//! bag or history. A fixed seed reproduces the same sequence, which tests and
//! replays of a session rely on.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::piece::Piece;

/// Source of freshly spawned pieces
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl PieceSource {
    /// Deterministic source for the given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draw the next piece at its spawn position
    pub fn draw(&mut self) -> Piece {
        Piece::random(&mut self.rng)
    }

    /// Seed this source was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceSource::from_seed(12345);
        let mut b = PieceSource::from_seed(12345);

        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_draws_spawn_at_top() {
        let mut source = PieceSource::from_seed(7);
        for _ in 0..20 {
            let piece = source.draw();
            assert_eq!(piece.y, 0);
            assert_eq!(piece, Piece::spawn(piece.kind()));
        }
    }

    #[test]
    fn test_every_kind_shows_up() {
        let mut source = PieceSource::from_seed(1);
        let mut seen = [false; PieceKind::COUNT];
        for _ in 0..500 {
            seen[source.draw().kind().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(PieceSource::from_seed(9).seed(), Some(9));
        assert_eq!(PieceSource::new(None).seed(), None);
    }
}
