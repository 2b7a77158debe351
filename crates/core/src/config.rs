//! Game configuration and its validation.

use std::fmt;

use crate::rng::Randomizer;
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, MIN_COLUMNS, MIN_ROWS};

/// Largest accepted grid dimension (coordinates are `i16`).
pub const MAX_DIMENSION: u16 = 1024;

/// Settings for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: u16,
    /// Grid height including the spawn buffer.
    pub rows: u16,
    pub seed: u32,
    pub randomizer: Randomizer,
    /// Start a new game as soon as the current one ends.
    pub auto_restart: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            seed: 1,
            randomizer: Randomizer::Uniform,
            auto_restart: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.columns, self.rows)
    }
}

/// Check a `columns` x `rows` grid against the playable limits
///
/// Every piece must spawn fully inside the grid and below-buffer rows must
/// exist for it to fall into.
pub fn check_dimensions(columns: u16, rows: u16) -> Result<(), ConfigError> {
    if columns < MIN_COLUMNS {
        return Err(ConfigError::TooFewColumns { columns });
    }
    if rows < MIN_ROWS {
        return Err(ConfigError::TooFewRows { rows });
    }
    if columns > MAX_DIMENSION || rows > MAX_DIMENSION {
        return Err(ConfigError::TooLarge { columns, rows });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    TooFewColumns { columns: u16 },
    TooFewRows { rows: u16 },
    TooLarge { columns: u16, rows: u16 },
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::TooFewColumns { .. } => "too_few_columns",
            ConfigError::TooFewRows { .. } => "too_few_rows",
            ConfigError::TooLarge { .. } => "too_large",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewColumns { columns } => write!(
                f,
                "{} columns cannot fit the widest piece (minimum {})",
                columns, MIN_COLUMNS
            ),
            ConfigError::TooFewRows { rows } => write!(
                f,
                "{} rows cannot fit the spawn buffer and the tallest piece (minimum {})",
                rows, MIN_ROWS
            ),
            ConfigError::TooLarge { columns, rows } => write!(
                f,
                "{}x{} grid exceeds the {} cell limit per side",
                columns, rows, MAX_DIMENSION
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.columns, 10);
        assert_eq!(config.rows, 22);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_narrow_grid() {
        let config = GameConfig {
            columns: 3,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::TooFewColumns { columns: 3 });
        assert_eq!(err.code(), "too_few_columns");
    }

    #[test]
    fn rejects_short_grid() {
        let config = GameConfig {
            rows: 5,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooFewRows { rows: 5 }));
    }

    #[test]
    fn rejects_huge_grid() {
        let config = GameConfig {
            columns: MAX_DIMENSION + 1,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooLarge { .. })));
        assert!(config.validate().unwrap_err().to_string().contains("limit"));
    }
}
