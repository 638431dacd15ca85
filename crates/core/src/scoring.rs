//! Scoring module - classic line-clear scoring, drop bonuses and level pacing
//!
//! - Line clears award 100/300/500/800 points for 1-4 lines, multiplied by
//!   the level that was in effect *before* the clear.
//! - Soft drop awards 1 point per row, hard drop 2 points per row.
//! - The level is `total_lines / 10 + 1` and never goes down.

use crate::config::GameConfig;
use crate::types::{
    FAST_DROP_MULTIPLIER, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES,
    SOFT_DROP_POINTS_PER_ROW,
};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (1-based)
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Calculate drop score
/// soft drop: +1 per row
/// hard drop: +2 per row
pub fn drop_points(rows: u32, is_hard_drop: bool) -> u32 {
    let per_row = if is_hard_drop {
        HARD_DROP_POINTS_PER_ROW
    } else {
        SOFT_DROP_POINTS_PER_ROW
    };
    rows.saturating_mul(per_row)
}

/// Level reached after `total_lines` cleared lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level in milliseconds.
///
/// Decreases linearly from `initial_fall_ms` by `fall_step_ms` per level and
/// is clamped at `min_fall_ms`. Fast drop divides the result by
/// [`FAST_DROP_MULTIPLIER`].
pub fn fall_interval_ms(level: u32, fast_drop: bool, config: &GameConfig) -> u32 {
    let reduction = level
        .saturating_sub(1)
        .saturating_mul(config.fall_step_ms);
    let base = config
        .initial_fall_ms
        .saturating_sub(reduction)
        .max(config.min_fall_ms);

    if fast_drop {
        (base / FAST_DROP_MULTIPLIER).max(1)
    } else {
        base.max(1)
    }
}

/// Score, level and line counters for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    pub score: u32,
    pub level: u32,
    pub total_lines: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            total_lines: 0,
        }
    }

    /// Record a line clear. Returns the points awarded.
    ///
    /// Points use the level before this clear; the level is then recomputed
    /// and only ever raised.
    pub fn record_clear(&mut self, lines: usize) -> u32 {
        let points = line_clear_points(lines, self.level);
        self.score = self.score.saturating_add(points);
        self.total_lines = self.total_lines.saturating_add(lines as u32);
        self.level = self.level.max(level_for_lines(self.total_lines));
        points
    }

    pub fn add_drop(&mut self, rows: u32, is_hard_drop: bool) {
        self.score = self
            .score
            .saturating_add(drop_points(rows, is_hard_drop));
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_level_one() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);
    }

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(line_clear_points(1, 3), 300);
        assert_eq!(line_clear_points(4, 2), 1600);
    }

    #[test]
    fn test_more_than_four_lines_scores_nothing() {
        assert_eq!(line_clear_points(5, 1), 0);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(drop_points(10, false), 10);
        assert_eq!(drop_points(10, true), 20);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(20), 3);
    }

    #[test]
    fn test_fall_intervals() {
        let config = GameConfig::default();
        assert_eq!(fall_interval_ms(1, false, &config), 500);
        assert_eq!(fall_interval_ms(2, false, &config), 450);
        assert_eq!(fall_interval_ms(9, false, &config), 100);
        // Floor at 50ms.
        assert_eq!(fall_interval_ms(10, false, &config), 50);
        assert_eq!(fall_interval_ms(40, false, &config), 50);
    }

    #[test]
    fn test_fast_drop_interval() {
        let config = GameConfig::default();
        assert_eq!(fall_interval_ms(1, true, &config), 50);
        assert_eq!(fall_interval_ms(10, true, &config), 5);
    }

    #[test]
    fn test_stats_use_level_before_clear() {
        let mut stats = Stats::new();
        stats.total_lines = 8;

        // 8 + 4 = 12 lines crosses into level 2, but the tetris is scored at level 1.
        let points = stats.record_clear(4);
        assert_eq!(points, 800);
        assert_eq!(stats.score, 800);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.total_lines, 12);
    }

    #[test]
    fn test_stats_level_never_decreases() {
        let mut stats = Stats::new();
        stats.level = 5;
        stats.record_clear(1);
        assert_eq!(stats.level, 5);
    }
}
