//! Scoring module - line clear points, perfect clears and leveling
//!
//! Points are `base * level`, where the level is the one in effect before
//! the clear is counted. A clear that empties the board uses the perfect
//! clear table instead; a perfect-clear tetris right after another tetris
//! earns the back-to-back bonus.

use crate::types::{
    LINES_PER_LEVEL, LINE_SCORES, PERFECT_CLEAR_B2B_TETRIS_SCORE, PERFECT_CLEAR_SCORES,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Table value before the level multiplier
    pub base: u32,
    pub total: u32,
    pub perfect_clear: bool,
    /// Whether the back-to-back perfect tetris bonus applied
    pub b2b_applied: bool,
    /// Whether this clear starts (or continues) a back-to-back chain
    pub is_tetris: bool,
}

/// Base points for a clear of `lines` (1-4) before the level multiplier
pub fn base_score(lines: usize, perfect_clear: bool, previous_was_tetris: bool) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    if !perfect_clear {
        return LINE_SCORES[lines];
    }
    if lines == 4 && previous_was_tetris {
        PERFECT_CLEAR_B2B_TETRIS_SCORE
    } else {
        PERFECT_CLEAR_SCORES[lines]
    }
}

/// Calculate the complete score for one lock that cleared `lines` rows
pub fn calculate_score(
    lines: usize,
    level: u32,
    perfect_clear: bool,
    previous_was_tetris: bool,
) -> ScoreResult {
    let base = base_score(lines, perfect_clear, previous_was_tetris);
    ScoreResult {
        base,
        total: base.saturating_mul(level),
        perfect_clear,
        b2b_applied: perfect_clear && lines == 4 && previous_was_tetris,
        is_tetris: lines == 4,
    }
}

/// Level for a running line total; starts at 1 and rises every 10 lines
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}
