//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation engine: grid, pieces, collision, line
//! clearing, scoring and fall speed. It has **zero dependencies** on terminal,
//! windowing, networking or file I/O:
//!
//! - **Deterministic**: randomness is an injected, seeded [`PieceSource`]
//! - **Synchronous**: every call is a bounded in-memory state transition
//! - **Single-owner**: no internal locking; callers serialize timer and input
//!
//! # Module Structure
//!
//! - [`shape`]: the seven occupancy matrices and clockwise rotation
//! - [`piece`]: the falling piece and its move/rotate attempts
//! - [`grid`]: committed cells and line clearing
//! - [`board`]: tick, lock sequence, input handling, game over
//! - [`scoring`]: points, cumulative rows and level
//! - [`timing`]: fall interval by level and the fall clock
//! - [`rng`]: piece sources
//! - [`session`]: new-game lifecycle and wall-clock driving
//! - [`snapshot`]: render-ready copies of the board state
//!
//! # Game Rules
//!
//! - Rotation is a plain 90° clockwise matrix turn with no wall kicks
//! - A piece that cannot fall locks immediately on the next tick
//! - Each cleared row scores `40 * level`; every 20 rows raise the level
//! - A locked block in the top two rows ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, SequenceSource, TickOutcome};
//! use blockfall_core::types::{BoardInput, ShapeKind};
//!
//! let mut board = Board::new(10, 22, Box::new(SequenceSource::repeat(ShapeKind::O)))?;
//!
//! board.handle_input(BoardInput::MoveLeft);
//! board.handle_input(BoardInput::Rotate);
//! assert_eq!(board.tick(), TickOutcome::Fell);
//!
//! assert_eq!(board.score(), 0);
//! assert_eq!(board.level(), 1);
//! assert!(!board.is_game_over());
//! # Ok::<(), blockfall_core::ConfigError>(())
//! ```

pub mod board;
pub mod config;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod timing;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockEvent, TickOutcome};
pub use config::{ConfigError, GameConfig};
pub use grid::Grid;
pub use piece::{CellPos, CellQuery, Piece};
pub use rng::{BagSource, PieceSource, Randomizer, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{ScoreResult, Scoreboard};
pub use session::Session;
pub use shape::{template, ShapeMatrix};
pub use snapshot::{PieceSnapshot, Snapshot};
pub use timing::{tick_interval_ms, FallClock};
