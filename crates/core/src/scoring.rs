//! Score calculation
//!
//! Every cleared line is worth a flat `LINE_CLEAR_SCORE` points, regardless of
//! how many lines a single placement clears.

use crate::types::LINE_CLEAR_SCORE;

/// Points for clearing `lines` rows in one placement
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(LINE_CLEAR_SCORE)
}
