//! Grid module - the committed cells of the playfield
//!
//! The grid is `columns` x `rows` cells, addressed `(column, row)` with row 0
//! at the top. The top [`SPAWN_BUFFER_ROWS`] rows are the spawn buffer.
//! Storage is one flat row-major array of tagged cells.

use crate::piece::{CellPos, CellQuery};
use crate::types::{Cell, Color, SPAWN_BUFFER_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: u16,
    rows: u16,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![Cell::Empty; columns as usize * rows as usize],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline(always)]
    fn index(&self, column: i16, row: i16) -> Option<usize> {
        if column < 0 || row < 0 || column >= self.columns as i16 || row >= self.rows as i16 {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    /// Get cell at `(column, row)`
    /// Returns None if out of bounds
    pub fn get(&self, column: i16, row: i16) -> Option<Cell> {
        self.index(column, row).map(|idx| self.cells[idx])
    }

    /// Set cell at `(column, row)`
    /// Returns false if out of bounds
    pub fn set(&mut self, column: i16, row: i16, cell: Cell) -> bool {
        match self.index(column, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill every listed cell with `color`.
    /// Returns true if any of them landed in the spawn buffer.
    ///
    /// Cells are expected to lie inside the grid; the falling piece only ever
    /// commits positions that fit.
    pub fn lock(&mut self, cells: &[CellPos], color: Color) -> bool {
        let mut in_buffer = false;
        for &(column, row) in cells {
            if row < SPAWN_BUFFER_ROWS as i16 {
                in_buffer = true;
            }
            let placed = self.set(column, row, Cell::Occupied(color));
            debug_assert!(placed, "locked cell ({}, {}) outside the grid", column, row);
        }
        in_buffer
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: u16) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        let start = row as usize * self.columns as usize;
        &self.cells[start..start + self.columns as usize]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: u16) -> bool {
        row < self.rows && self.columns > 0 && self.row(row).iter().all(Cell::is_occupied)
    }

    /// Remove `row` and shift every row above it down by one; row 0 empties.
    fn collapse_row(&mut self, row: usize) {
        let width = self.columns as usize;
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells.copy_within(src_start..src_start + width, r * width);
        }
        self.cells[..width].fill(Cell::Empty);
    }

    /// Clear all full rows, scanning from the bottom up
    ///
    /// After a collapse the same row index holds what used to be the row above
    /// it, so that index is examined again before the scan moves up. Multiple
    /// simultaneous clears cascade in a single pass.
    ///
    /// Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.rows;
        while row > 0 {
            if self.is_row_full(row - 1) {
                cleared += 1;
                self.collapse_row((row - 1) as usize);
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Whether any block sits in the spawn buffer
    pub fn spawn_buffer_occupied(&self) -> bool {
        (0..SPAWN_BUFFER_ROWS.min(self.rows)).any(|row| self.row(row).iter().any(Cell::is_occupied))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl CellQuery for Grid {
    fn columns(&self) -> u16 {
        self.columns
    }

    fn rows(&self) -> u16 {
        self.rows
    }

    fn is_cell_empty(&self, column: i16, row: i16) -> bool {
        matches!(self.get(column, row), Some(Cell::Empty))
    }
}
