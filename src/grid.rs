//! Index arithmetic for the 4x4 grid.
//!
//! Slots are numbered 0..16 row-major; `row = index / 4`, `col = index % 4`.

use crate::common::BoardError;
use crate::config::{CELL_COUNT, GRID_SIDE};

/// (row, col) of a slot index.
pub fn row_col(index: usize) -> (usize, usize) {
    (index / GRID_SIDE, index % GRID_SIDE)
}

/// Slot index at (row, col). Errors when either coordinate leaves the grid.
pub fn index_at(row: usize, col: usize) -> Result<usize, BoardError> {
    if row >= GRID_SIDE || col >= GRID_SIDE {
        return Err(BoardError::InvalidIndex);
    }
    Ok(row * GRID_SIDE + col)
}

/// True iff `a` and `b` are orthogonal neighbors (Manhattan distance of
/// exactly 1). Symmetric; a slot is never adjacent to itself.
pub fn is_adjacent(a: usize, b: usize) -> bool {
    if a >= CELL_COUNT || b >= CELL_COUNT {
        return false;
    }
    let (ar, ac) = row_col(a);
    let (br, bc) = row_col(b);
    ar.abs_diff(br) + ac.abs_diff(bc) == 1
}

/// The orthogonal neighbors of a slot, at most four of them.
///
/// Fixed-capacity so `no_std` callers get no allocation; order is always
/// up, down, left, right with out-of-bounds directions skipped, which keeps
/// neighbor enumeration deterministic for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    slots: [usize; 4],
    len: usize,
}

impl Neighbors {
    fn push(&mut self, slot: usize) {
        self.slots[self.len] = slot;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.slots[..self.len]
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.as_slice().contains(&slot)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, usize> {
        self.as_slice().iter()
    }
}

/// Enumerate the slots orthogonally adjacent to `index`.
///
/// Every interior slot has 4 neighbors, edges 3, corners 2.
pub fn adjacent_indices(index: usize) -> Neighbors {
    let mut neighbors = Neighbors {
        slots: [0; 4],
        len: 0,
    };
    if index >= CELL_COUNT {
        return neighbors;
    }
    let (row, col) = row_col(index);
    if row > 0 {
        neighbors.push(index - GRID_SIDE);
    }
    if row < GRID_SIDE - 1 {
        neighbors.push(index + GRID_SIDE);
    }
    if col > 0 {
        neighbors.push(index - 1);
    }
    if col < GRID_SIDE - 1 {
        neighbors.push(index + 1);
    }
    neighbors
}
