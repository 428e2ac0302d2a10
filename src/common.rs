//! Common types for the 15-puzzle: cell contents, move outcomes, board errors.

use crate::config::TILE_COUNT;
use core::fmt;

/// Contents of one board slot: a numbered tile or the single empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Movable tile carrying its label, 1..=15.
    Tile(u8),
    /// The one empty slot tiles slide into.
    Empty,
}

impl Cell {
    /// Tile label, or `None` for the empty slot.
    pub fn label(self) -> Option<u8> {
        match self {
            Cell::Tile(n) => Some(n),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Cell holding the label that belongs at `index` in the solved
    /// arrangement (`Empty` for the last slot).
    pub fn solved_at(index: usize) -> Self {
        if index < TILE_COUNT {
            Cell::Tile(index as u8 + 1)
        } else {
            Cell::Empty
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Tile(n) => write!(f, "{}", n),
            Cell::Empty => write!(f, "."),
        }
    }
}

/// Result of a player move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Tile at `from` slid into the empty slot at `to`.
    Moved { from: usize, to: usize },
    /// Move was not legal; the board is unchanged.
    Rejected,
}

impl MoveOutcome {
    pub fn accepted(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Errors returned by board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Specified slot index is out of range.
    InvalidIndex,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Slot index is out of range"),
        }
    }
}
