//! Piece module - the falling tetromino
//!
//! A piece is a shape matrix placed at a grid origin. Moves and rotations are
//! attempted against a read-only [`CellQuery`] and either commit atomically or
//! leave the piece untouched. Rotation has no wall kicks.

use arrayvec::ArrayVec;
use log::trace;

use crate::shape::{template, ShapeMatrix};
use crate::types::{Color, ShapeKind, CELLS_PER_PIECE};

/// Absolute grid position: `(column, row)`
pub type CellPos = (i16, i16);

/// Read-only view of grid occupancy used for validity checks.
pub trait CellQuery {
    fn columns(&self) -> u16;

    fn rows(&self) -> u16;

    /// Whether `(column, row)` is inside the grid and holds no block.
    fn is_cell_empty(&self, column: i16, row: i16) -> bool;
}

/// Whether every cell lies inside the grid and on an empty cell
pub fn fits(cells: &[CellPos], grid: &(impl CellQuery + ?Sized)) -> bool {
    let columns = grid.columns() as i16;
    let rows = grid.rows() as i16;
    cells.iter().all(|&(column, row)| {
        (0..columns).contains(&column) && (0..rows).contains(&row) && grid.is_cell_empty(column, row)
    })
}

/// A tetromino instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    matrix: ShapeMatrix,
    column: i16,
    row: i16,
}

impl Piece {
    /// Create a new piece in preview layout
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            matrix: template(kind),
            column: 0,
            row: 0,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Current (possibly rotated) occupancy matrix.
    pub fn matrix(&self) -> &ShapeMatrix {
        &self.matrix
    }

    /// Matrix origin on the grid.
    pub fn origin(&self) -> CellPos {
        (self.column, self.row)
    }

    /// Absolute cells the piece occupies.
    pub fn cells(&self) -> ArrayVec<CellPos, CELLS_PER_PIECE> {
        Self::cells_at(&self.matrix, self.column, self.row)
    }

    fn cells_at(matrix: &ShapeMatrix, column: i16, row: i16) -> ArrayVec<CellPos, CELLS_PER_PIECE> {
        matrix
            .offsets()
            .iter()
            .map(|&(dx, dy)| (column + dx, row + dy))
            .collect()
    }

    /// Whether the piece in its current position fits the grid.
    pub fn fits(&self, grid: &(impl CellQuery + ?Sized)) -> bool {
        fits(&self.cells(), grid)
    }

    /// Try to translate the piece by `(dx, dy)`
    /// Returns true if the move was committed
    pub fn attempt_move(&mut self, dx: i16, dy: i16, grid: &(impl CellQuery + ?Sized)) -> bool {
        let column = self.column + dx;
        let row = self.row + dy;
        if !fits(&Self::cells_at(&self.matrix, column, row), grid) {
            return false;
        }
        self.column = column;
        self.row = row;
        true
    }

    /// Try to rotate the piece 90° clockwise in place
    /// Returns true if the rotation was committed
    pub fn attempt_rotate(&mut self, grid: &(impl CellQuery + ?Sized)) -> bool {
        let rotated = self.matrix.rotated_cw();
        if !fits(&Self::cells_at(&rotated, self.column, self.row), grid) {
            trace!("rotation of {:?} at {:?} blocked", self.kind, self.origin());
            return false;
        }
        self.matrix = rotated;
        true
    }

    /// Move the origin to the preview panel position.
    pub fn to_preview_layout(&mut self) {
        self.column = 0;
        self.row = 0;
    }

    /// Center the piece horizontally at row 0 of a grid `columns` wide.
    pub fn to_falling_layout(&mut self, columns: u16) {
        let size = self.matrix.size() as i16;
        self.column = columns as i16 / 2 - size / 2;
        self.row = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Open field with an optional set of blocked cells.
    struct Field {
        columns: u16,
        rows: u16,
        blocked: Vec<CellPos>,
    }

    impl CellQuery for Field {
        fn columns(&self) -> u16 {
            self.columns
        }

        fn rows(&self) -> u16 {
            self.rows
        }

        fn is_cell_empty(&self, column: i16, row: i16) -> bool {
            !self.blocked.contains(&(column, row))
        }
    }

    fn open_field() -> Field {
        Field {
            columns: 10,
            rows: 22,
            blocked: Vec::new(),
        }
    }

    #[test]
    fn falling_layout_centers_by_matrix_size() {
        let mut o = Piece::new(ShapeKind::O);
        o.to_falling_layout(10);
        assert_eq!(o.origin(), (4, 0));

        let mut i = Piece::new(ShapeKind::I);
        i.to_falling_layout(10);
        assert_eq!(i.origin(), (3, 0));

        let mut t = Piece::new(ShapeKind::T);
        t.to_falling_layout(10);
        assert_eq!(t.origin(), (4, 0));
    }

    #[test]
    fn layout_changes_keep_matrix() {
        let mut s = Piece::new(ShapeKind::S);
        let matrix = *s.matrix();
        s.to_falling_layout(10);
        s.to_preview_layout();
        assert_eq!(*s.matrix(), matrix);
        assert_eq!(s.origin(), (0, 0));
    }

    #[test]
    fn move_blocked_by_wall() {
        let field = open_field();
        let mut o = Piece::new(ShapeKind::O);
        assert!(!o.attempt_move(-1, 0, &field));
        assert_eq!(o.origin(), (0, 0));
        assert!(o.attempt_move(1, 0, &field));
        assert_eq!(o.origin(), (1, 0));
    }

    #[test]
    fn move_blocked_by_occupied_cell() {
        let field = Field {
            blocked: vec![(1, 2)],
            ..open_field()
        };
        let mut o = Piece::new(ShapeKind::O);
        assert!(!o.attempt_move(0, 1, &field));
        assert_eq!(o.origin(), (0, 0));
    }

    #[test]
    fn rotation_without_kick_fails_at_wall() {
        let field = open_field();
        // Vertical I hugging the left wall: rotating back to horizontal would
        // need column -2.
        let mut i = Piece::new(ShapeKind::I);
        assert!(i.attempt_rotate(&field));
        assert!(i.attempt_move(-2, 0, &field));
        let before = i;
        assert!(!i.attempt_rotate(&field));
        assert_eq!(i, before);
    }

    #[test]
    fn cells_follow_origin() {
        let mut t = Piece::new(ShapeKind::T);
        t.to_falling_layout(10);
        assert_eq!(t.cells().as_slice(), &[(5, 0), (4, 1), (5, 1), (6, 1)]);
    }
}
