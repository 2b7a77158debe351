//! Board module - grid, falling piece, preview and score
//!
//! The board owns every piece of game state and drives the fall tick:
//!
//! 1. Try to move the falling piece one row down.
//! 2. If that fails, lock it: copy its cells into the grid, flag game over if
//!    any landed in the spawn buffer, clear full rows, update the score.
//! 3. Promote the preview piece to falling and draw a new preview.
//!
//! Rejected moves are routine and simply return false.

use log::{debug, info};

use crate::config::{check_dimensions, ConfigError, GameConfig};
use crate::grid::Grid;
use crate::piece::{CellQuery, Piece};
use crate::rng::PieceSource;
use crate::scoring::Scoreboard;
use crate::snapshot::Snapshot;
use crate::types::{BoardInput, ShapeKind};

/// Report of a single lock sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: ShapeKind,
    pub rows_cleared: u32,
    pub points: u32,
    /// Level after the clear was counted.
    pub level: u32,
    pub leveled_up: bool,
    pub game_over: bool,
}

/// What one fall step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down a row.
    Fell,
    /// The piece could not move and was locked into the grid.
    Locked(LockEvent),
    /// The game is over; nothing happened.
    Halted,
}

#[derive(Debug)]
pub struct Board {
    grid: Grid,
    falling: Piece,
    next: Piece,
    scoreboard: Scoreboard,
    source: Box<dyn PieceSource>,
    game_over: bool,
    last_event: Option<LockEvent>,
    pieces_locked: u32,
}

impl Board {
    /// Create a board with an empty `columns` x `rows` grid
    pub fn new(columns: u16, rows: u16, source: Box<dyn PieceSource>) -> Result<Self, ConfigError> {
        check_dimensions(columns, rows)?;
        Ok(Self::assemble(Grid::new(columns, rows), source))
    }

    /// Create a board on top of an existing grid (puzzles, replays, tests)
    pub fn from_grid(grid: Grid, source: Box<dyn PieceSource>) -> Result<Self, ConfigError> {
        check_dimensions(grid.columns(), grid.rows())?;
        Ok(Self::assemble(grid, source))
    }

    /// Create a board from a validated configuration
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(
            Grid::new(config.columns, config.rows),
            config.randomizer.build(config.seed),
        ))
    }

    /// Build a board on a grid whose dimensions were already checked.
    pub(crate) fn assemble(grid: Grid, mut source: Box<dyn PieceSource>) -> Self {
        let mut falling = Piece::new(source.next_kind());
        falling.to_falling_layout(grid.columns());
        let mut next = Piece::new(source.next_kind());
        next.to_preview_layout();

        Self {
            grid,
            falling,
            next,
            scoreboard: Scoreboard::new(),
            source,
            game_over: false,
            last_event: None,
            pieces_locked: 0,
        }
    }

    /// Advance the falling piece by one row, locking it when blocked
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Halted;
        }
        if self.falling.attempt_move(0, 1, &self.grid) {
            return TickOutcome::Fell;
        }
        TickOutcome::Locked(self.lock_falling())
    }

    /// Apply a player input
    ///
    /// Returns true if the falling piece moved. A `SoftDrop` that cannot move
    /// still locks the piece (see [`Board::last_event`]) and returns false.
    pub fn handle_input(&mut self, input: BoardInput) -> bool {
        if self.game_over {
            return false;
        }
        match input {
            BoardInput::MoveLeft => self.falling.attempt_move(-1, 0, &self.grid),
            BoardInput::MoveRight => self.falling.attempt_move(1, 0, &self.grid),
            BoardInput::Rotate => self.falling.attempt_rotate(&self.grid),
            BoardInput::SoftDrop => matches!(self.tick(), TickOutcome::Fell),
        }
    }

    fn lock_falling(&mut self) -> LockEvent {
        let cells = self.falling.cells();
        let hit_buffer = self.grid.lock(&cells, self.falling.color());
        let rows = self.grid.clear_full_rows();
        let result = self.scoreboard.apply_clear(rows);
        self.pieces_locked += 1;

        debug!(
            "locked {:?} at {:?}, cleared {} row(s) for {} points",
            self.falling.kind(),
            cells.as_slice(),
            rows,
            result.points
        );
        if result.leveled_up() {
            info!("level {} reached", result.level_after);
        }

        let event = LockEvent {
            kind: self.falling.kind(),
            rows_cleared: rows,
            points: result.points,
            level: result.level_after,
            leveled_up: result.leveled_up(),
            game_over: hit_buffer || self.grid.spawn_buffer_occupied(),
        };
        self.game_over = event.game_over;
        if self.game_over {
            info!(
                "game over: score {}, level {}, rows {}",
                self.score(),
                self.level(),
                self.rows_cleared()
            );
        }

        self.promote_next();
        self.last_event = Some(event);
        event
    }

    fn promote_next(&mut self) {
        let mut preview = Piece::new(self.source.next_kind());
        preview.to_preview_layout();
        let mut falling = std::mem::replace(&mut self.next, preview);
        falling.to_falling_layout(self.grid.columns());
        self.falling = falling;
    }

    /// Bounds-checked occupancy lookup; out-of-range cells are not empty
    pub fn is_cell_empty(&self, column: i16, row: i16) -> bool {
        self.grid.is_cell_empty(column, row)
    }

    /// True once any block occupies the spawn buffer
    pub fn is_game_over(&self) -> bool {
        self.game_over || self.grid.spawn_buffer_occupied()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn falling(&self) -> &Piece {
        &self.falling
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn level(&self) -> u32 {
        self.scoreboard.level()
    }

    pub fn rows_cleared(&self) -> u32 {
        self.scoreboard.rows_cleared()
    }

    pub fn rows_until_next_level(&self) -> u32 {
        self.scoreboard.rows_until_next_level()
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Most recent lock report
    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Render-ready copy of the whole board state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_board(self)
    }
}
