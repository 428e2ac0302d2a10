//! Board state: the 16-slot tile arrangement plus the cached empty position.

use crate::common::{BoardError, Cell};
use crate::config::{CELL_COUNT, GRID_SIDE};
use crate::grid;
use core::fmt;

/// Serializable board snapshot for handing to a front-end or a sidecar tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: [Cell; CELL_COUNT],
    pub empty_index: usize,
}

/// Main board state: the 4x4 arrangement and where the empty slot sits.
///
/// Invariants held by every public operation:
/// - exactly one slot is `Cell::Empty`;
/// - `cells` is a permutation of {1..15, empty};
/// - `cells[empty_index]` is the empty slot.
#[derive(Clone)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    empty_index: usize,
}

impl Board {
    /// Create a board in the canonical solved arrangement: labels 1..=15
    /// ascending, empty slot last.
    pub fn new() -> Self {
        let cells = core::array::from_fn(Cell::solved_at);
        Board {
            cells,
            empty_index: CELL_COUNT - 1,
        }
    }

    /// Immutable view of all 16 slots in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Contents of one slot.
    pub fn cell(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidIndex)
    }

    /// Position of the empty slot.
    pub fn empty_index(&self) -> usize {
        self.empty_index
    }

    /// Exchange the contents of slots `i` and `j`, keeping `empty_index`
    /// in sync when the empty slot is one of them.
    ///
    /// This is the unvalidated primitive; it does not require adjacency.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), BoardError> {
        if i >= CELL_COUNT || j >= CELL_COUNT {
            return Err(BoardError::InvalidIndex);
        }
        self.cells.swap(i, j);
        if self.empty_index == i {
            self.empty_index = j;
        } else if self.empty_index == j {
            self.empty_index = i;
        }
        Ok(())
    }

    /// Returns `true` when every tile sits in its home slot. Slot 15 needs
    /// no separate check: a permutation with the other 15 labels in place
    /// forces it to hold the empty.
    pub fn is_solved(&self) -> bool {
        self.cells[..CELL_COUNT - 1]
            .iter()
            .enumerate()
            .all(|(i, &cell)| cell == Cell::solved_at(i))
    }

    /// Slot currently holding the tile with `label`, if the label is valid.
    pub fn find_tile(&self, label: u8) -> Option<usize> {
        self.cells.iter().position(|&c| c == Cell::Tile(label))
    }

    /// Classify the arrangement as solvable via permutation parity: on an
    /// even-width grid the inversion count plus the empty slot's row must be
    /// odd. Boards produced by legal moves alone always satisfy this.
    pub fn is_solvable(&self) -> bool {
        let (empty_row, _) = grid::row_col(self.empty_index);
        (self.count_inversions() + empty_row) % 2 == 1
    }

    fn count_inversions(&self) -> usize {
        let mut labels = [0u8; CELL_COUNT - 1];
        let mut n = 0;
        for cell in self.cells.iter() {
            if let Some(label) = cell.label() {
                labels[n] = label;
                n += 1;
            }
        }
        let mut inversions = 0;
        for i in 0..n {
            for j in i + 1..n {
                if labels[j] < labels[i] {
                    inversions += 1;
                }
            }
        }
        inversions
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.chunks(GRID_SIDE) {
            write!(f, " ")?;
            for cell in row {
                match cell.label() {
                    Some(n) => write!(f, " {:>2}", n)?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  empty_index: {}\n}}", self.empty_index)
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            cells: b.cells,
            empty_index: b.empty_index,
        }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board {
            cells: state.cells,
            empty_index: state.empty_index,
        }
    }
}
