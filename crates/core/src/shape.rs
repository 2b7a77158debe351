//! Shape module - tetromino occupancy matrices and rotation
//!
//! Every shape is a square boolean matrix (2x2 for O, 4x4 for I, 3x3 for the
//! rest). Templates are immutable; rotating always yields a new matrix.
//! Matrices are indexed `[row][column]`, row 0 at the top.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, CELLS_PER_PIECE, MAX_SHAPE_SIZE};

/// Offset of a single block inside its matrix: `(column, row)`
pub type CellOffset = (i16, i16);

/// Square occupancy matrix of a shape in one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: usize,
    bits: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a `size`x`size` matrix from the top-left corner of `rows`.
    /// Non-zero entries are occupied.
    const fn from_rows(size: usize, rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut i = 0;
        while i < size {
            let mut j = 0;
            while j < size {
                bits[i][j] = rows[i][j] != 0;
                j += 1;
            }
            i += 1;
        }
        Self { size, bits }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the block at `(row, column)` is occupied. Out of range is empty.
    pub fn is_set(&self, row: usize, column: usize) -> bool {
        row < self.size && column < self.size && self.bits[row][column]
    }

    /// Rotate 90° clockwise: `new[j][n-1-i] = old[i][j]`.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for i in 0..n {
            for j in 0..n {
                bits[j][n - 1 - i] = self.bits[i][j];
            }
        }
        Self { size: n, bits }
    }

    /// Occupied blocks as `(column, row)` offsets, scanned row by row.
    pub fn offsets(&self) -> ArrayVec<CellOffset, CELLS_PER_PIECE> {
        (0..self.size)
            .flat_map(|i| (0..self.size).map(move |j| (i, j)))
            .filter(|&(i, j)| self.bits[i][j])
            .map(|(i, j)| (j as i16, i as i16))
            .take(CELLS_PER_PIECE)
            .collect()
    }

    /// Number of occupied blocks.
    pub fn occupied_count(&self) -> usize {
        self.bits[..self.size]
            .iter()
            .map(|row| row[..self.size].iter().filter(|b| **b).count())
            .sum()
    }
}

const S_TEMPLATE: ShapeMatrix =
    ShapeMatrix::from_rows(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const Z_TEMPLATE: ShapeMatrix =
    ShapeMatrix::from_rows(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const T_TEMPLATE: ShapeMatrix =
    ShapeMatrix::from_rows(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const O_TEMPLATE: ShapeMatrix =
    ShapeMatrix::from_rows(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const I_TEMPLATE: ShapeMatrix =
    ShapeMatrix::from_rows(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);

const J_TEMPLATE: ShapeMatrix =
    ShapeMatrix::from_rows(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const L_TEMPLATE: ShapeMatrix =
    ShapeMatrix::from_rows(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

/// Spawn-orientation template for a shape kind
pub fn template(kind: ShapeKind) -> ShapeMatrix {
    match kind {
        ShapeKind::S => S_TEMPLATE,
        ShapeKind::Z => Z_TEMPLATE,
        ShapeKind::T => T_TEMPLATE,
        ShapeKind::O => O_TEMPLATE,
        ShapeKind::I => I_TEMPLATE,
        ShapeKind::J => J_TEMPLATE,
        ShapeKind::L => L_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_sizes() {
        assert_eq!(template(ShapeKind::O).size(), 2);
        assert_eq!(template(ShapeKind::I).size(), 4);
        for kind in [ShapeKind::S, ShapeKind::Z, ShapeKind::T, ShapeKind::J, ShapeKind::L] {
            assert_eq!(template(kind).size(), 3, "{:?}", kind);
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        // .#.    .#.
        // ###    .##
        // ...    .#.
        let east = template(ShapeKind::T).rotated_cw();
        assert_eq!(east.offsets().as_slice(), &[(1, 0), (1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn i_rotates_to_vertical_bar() {
        let vertical = template(ShapeKind::I).rotated_cw();
        assert_eq!(vertical.offsets().as_slice(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn four_rotations_return_to_template() {
        for kind in ShapeKind::ALL {
            let start = template(kind);
            let full_turn = start.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(full_turn, start, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_does_not_touch_template() {
        let before = template(ShapeKind::L);
        let _ = before.rotated_cw();
        assert_eq!(template(ShapeKind::L), before);
    }

    #[test]
    fn out_of_range_lookup_is_empty() {
        let o = template(ShapeKind::O);
        assert!(o.is_set(0, 0));
        assert!(!o.is_set(2, 0));
        assert!(!o.is_set(0, 3));
    }
}
