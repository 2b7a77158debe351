use arrayvec::ArrayVec;
use serde::Serialize;

use crate::board::Board;
use crate::piece::{CellPos, Piece};
use crate::types::{Cell, Color, ShapeKind, CELLS_PER_PIECE};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    pub origin: CellPos,
    pub cells: ArrayVec<CellPos, CELLS_PER_PIECE>,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            origin: value.origin(),
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs, copied out of the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Snapshot {
    pub columns: u16,
    pub rows: u16,
    /// Row-major grid cells.
    pub cells: Vec<Cell>,
    pub falling: PieceSnapshot,
    /// Preview piece, in preview layout.
    pub next: PieceSnapshot,
    pub score: u32,
    pub level: u32,
    pub rows_cleared: u32,
    pub rows_until_next_level: u32,
    pub game_over: bool,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        let grid = board.grid();
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            cells: grid.cells().to_vec(),
            falling: PieceSnapshot::from(board.falling()),
            next: PieceSnapshot::from(board.next()),
            score: board.score(),
            level: board.level(),
            rows_cleared: board.rows_cleared(),
            rows_until_next_level: board.rows_until_next_level(),
            game_over: board.is_game_over(),
        }
    }

    /// Locked cell at `(column, row)`; out of range reads as empty.
    pub fn cell(&self, column: u16, row: u16) -> Cell {
        if column >= self.columns || row >= self.rows {
            return Cell::Empty;
        }
        self.cells[row as usize * self.columns as usize + column as usize]
    }

    /// Whether the falling piece covers `(column, row)`.
    pub fn falling_covers(&self, column: i16, row: i16) -> bool {
        self.falling.cells.contains(&(column, row))
    }
}
