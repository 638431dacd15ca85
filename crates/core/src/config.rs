//! Game configuration read once at startup.

use crate::types::{FALL_STEP_MS, INITIAL_FALL_MS, MIN_FALL_MS};

/// Tunable settings for a game session. Immutable once the game starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the piece source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Gravity interval at level 1
    pub initial_fall_ms: u32,
    /// Gravity interval decrease per level
    pub fall_step_ms: u32,
    /// Gravity interval floor
    pub min_fall_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_fall_ms: INITIAL_FALL_MS,
            fall_step_ms: FALL_STEP_MS,
            min_fall_ms: MIN_FALL_MS,
        }
    }
}

impl GameConfig {
    /// Config with a fixed seed and default gravity
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// - `TETRIS_SEED`
    /// - `TETRIS_FALL_MS`
    /// - `TETRIS_FALL_STEP_MS`
    /// - `TETRIS_MIN_FALL_MS`
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());
        let initial_fall_ms = lookup("TETRIS_FALL_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.initial_fall_ms);
        let fall_step_ms = lookup("TETRIS_FALL_STEP_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.fall_step_ms);
        let min_fall_ms = lookup("TETRIS_MIN_FALL_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.min_fall_ms);

        Self {
            seed,
            initial_fall_ms,
            fall_step_ms,
            min_fall_ms,
        }
    }
}
