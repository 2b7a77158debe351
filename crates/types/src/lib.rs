//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used across the workspace.
//! All types are plain data with no game logic, so they can be used by the
//! engine, the terminal front-end and the input mapping alike.
//!
//! # Board Dimensions
//!
//! Classic playfield dimensions:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 22 (indexed 0-21, top to bottom)
//! - **Spawn buffer**: rows 0 and 1; a block locked there ends the game
//!
//! # Scoring and Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_POINTS` | 40 | Points per cleared row, multiplied by level |
//! | `ROWS_PER_LEVEL` | 20 | Cleared rows needed to advance one level |
//! | `BASE_TICK_MS` | 1000 | Fall interval at level 1 |
//! | `LEVEL_CURVE_BASE` | 50 | Logarithm base of the fall-speed curve |
//! | `MIN_TICK_MS` | 20 | Floor applied to the fall interval |
//! | `FRAME_MS` | 16 | Front-end redraw/poll interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Color, Command, ShapeKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(kind.color(), Color::Purple);
//!
//! let cell = Cell::Occupied(kind.color());
//! assert!(cell.is_occupied());
//!
//! assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! assert_eq!(DEFAULT_ROWS, 22);
//! ```

use serde::Serialize;

/// Default grid width in cells.
pub const DEFAULT_COLUMNS: u16 = 10;

/// Default grid height in cells, spawn buffer included.
pub const DEFAULT_ROWS: u16 = 22;

/// Number of rows at the top of the grid reserved for spawning.
pub const SPAWN_BUFFER_ROWS: u16 = 2;

/// Every tetromino covers exactly this many cells in every orientation.
pub const CELLS_PER_PIECE: usize = 4;

/// Largest shape matrix (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Smallest grid that still fits the widest shape.
pub const MIN_COLUMNS: u16 = MAX_SHAPE_SIZE as u16;

/// Smallest grid that fits the spawn buffer plus the tallest shape.
pub const MIN_ROWS: u16 = SPAWN_BUFFER_ROWS + MAX_SHAPE_SIZE as u16;

/// Points for one cleared row at level 1.
pub const LINE_CLEAR_POINTS: u32 = 40;

/// Cumulative cleared rows per level.
pub const ROWS_PER_LEVEL: u32 = 20;

/// Fall interval at level 1 (1000ms = one row per second).
pub const BASE_TICK_MS: u32 = 1000;

/// Base of the logarithmic fall-speed curve.
pub const LEVEL_CURVE_BASE: f64 = 50.0;

/// Lower bound of the fall interval.
pub const MIN_TICK_MS: u32 = 20;

/// Front-end frame interval (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// The seven tetromino shapes
///
/// Each shape has a fixed color:
/// - **S**: Green
/// - **Z**: Red
/// - **T**: Purple
/// - **O**: Yellow, 2x2 square
/// - **I**: Cyan, 4-long bar
/// - **J**: Blue
/// - **L**: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    S,
    Z,
    T,
    O,
    I,
    J,
    L,
}

impl ShapeKind {
    /// All shapes, in the order random sources index them.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "t" => Some(ShapeKind::T),
            "o" => Some(ShapeKind::O),
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used by the front-end.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::T => "T",
            ShapeKind::O => "O",
            ShapeKind::I => "I",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
        }
    }

    /// Fixed color associated with the shape.
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::S => Color::Green,
            ShapeKind::Z => Color::Red,
            ShapeKind::T => Color::Purple,
            ShapeKind::O => Color::Yellow,
            ShapeKind::I => Color::Cyan,
            ShapeKind::J => Color::Blue,
            ShapeKind::L => Color::Orange,
        }
    }
}

/// Block colors. Renderers map these onto their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Red,
    Purple,
    Yellow,
    Cyan,
    Blue,
    Orange,
}

/// A cell on the grid
///
/// One tagged value per cell: occupancy and color can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Color of an occupied cell.
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(*color),
        }
    }
}

/// Inputs the board itself accepts while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardInput {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Step piece one row down, locking it when blocked
    SoftDrop,
}

/// The closed set of commands the front-end may send to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    /// Discard the current board and start over
    NewGame,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "softdrop" => Some(Command::SoftDrop),
            "newgame" => Some(Command::NewGame),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::SoftDrop => "softDrop",
            Command::NewGame => "newGame",
        }
    }

    /// The board-level input this command maps to, if any.
    ///
    /// `NewGame` is handled by the session, not the board.
    pub fn board_input(&self) -> Option<BoardInput> {
        match self {
            Command::MoveLeft => Some(BoardInput::MoveLeft),
            Command::MoveRight => Some(BoardInput::MoveRight),
            Command::Rotate => Some(BoardInput::Rotate),
            Command::SoftDrop => Some(BoardInput::SoftDrop),
            Command::NewGame => None,
        }
    }
}
