//! Scoring module - points, cumulative rows and level
//!
//! Rules:
//! - Each cleared row is worth `40 * level` points, using the level in effect
//!   before the clear is counted.
//! - Level is derived from cumulative cleared rows: `rows / 20 + 1`. It is
//!   never set any other way.

use crate::types::{LINE_CLEAR_POINTS, ROWS_PER_LEVEL};

/// Points for clearing `rows` rows at once at `level`
pub fn line_clear_points(rows: u32, level: u32) -> u32 {
    LINE_CLEAR_POINTS.saturating_mul(rows).saturating_mul(level)
}

/// Level reached after `rows_cleared` cumulative rows
pub fn level_for_rows(rows_cleared: u32) -> u32 {
    rows_cleared / ROWS_PER_LEVEL + 1
}

/// Rows still needed to reach the next level
pub fn rows_until_next_level(rows_cleared: u32) -> u32 {
    ROWS_PER_LEVEL - rows_cleared % ROWS_PER_LEVEL
}

/// Result of applying one lock's row clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub rows: u32,
    pub points: u32,
    pub level_before: u32,
    pub level_after: u32,
}

impl ScoreResult {
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

/// Score, level and cumulative cleared rows of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    level: u32,
    rows_cleared: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            rows_cleared: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn rows_until_next_level(&self) -> u32 {
        rows_until_next_level(self.rows_cleared)
    }

    /// Account for `rows` rows cleared by a single lock.
    /// Zero rows leaves everything unchanged.
    pub fn apply_clear(&mut self, rows: u32) -> ScoreResult {
        let level_before = self.level;
        if rows == 0 {
            return ScoreResult {
                rows,
                points: 0,
                level_before,
                level_after: level_before,
            };
        }

        let points = line_clear_points(rows, level_before);
        self.score = self.score.saturating_add(points);
        self.rows_cleared = self.rows_cleared.saturating_add(rows);
        self.level = level_for_rows(self.rows_cleared);

        ScoreResult {
            rows,
            points,
            level_before,
            level_after: self.level,
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
