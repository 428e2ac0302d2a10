use crate::{
    board::{Board, BoardState},
    common::{BoardError, MoveOutcome},
    config::CELL_COUNT,
    grid::{self, Neighbors},
};
use rand::Rng;

/// Current status of a puzzle. `Solved` is derived from the arrangement, so
/// a shuffle that happens to land back on the solved order reports `Solved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Solved,
}

/// Core puzzle logic mediating all state transitions over a [`Board`].
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Create an engine holding a board in the solved arrangement.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Immutable reference to the board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Attempt a player move of the tile at `index` into the empty slot.
    ///
    /// The only entry point a front-end should use for player moves: it
    /// validates adjacency and applies the swap in one step. A non-adjacent
    /// `index` is a defined no-op (`Ok(MoveOutcome::Rejected)`); only an
    /// out-of-range index is an error.
    pub fn try_move(&mut self, index: usize) -> Result<MoveOutcome, BoardError> {
        if index >= CELL_COUNT {
            return Err(BoardError::InvalidIndex);
        }
        let empty = self.board.empty_index();
        if !grid::is_adjacent(index, empty) {
            return Ok(MoveOutcome::Rejected);
        }
        self.board.swap(index, empty)?;
        Ok(MoveOutcome::Moved {
            from: index,
            to: empty,
        })
    }

    /// Randomize the board with `move_count` uniformly chosen legal moves.
    ///
    /// Each step swaps the empty slot with one of its neighbors directly,
    /// skipping `try_move`'s adjacency re-check since the candidate comes
    /// from the neighbor set. Walking only legal moves keeps every
    /// intermediate arrangement reachable, so the result is always solvable.
    /// A `move_count` of 0 leaves the board untouched, and the walk is free
    /// to reverse itself; both are properties of a genuine random walk.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R, move_count: u32) -> Result<(), BoardError> {
        for _ in 0..move_count {
            let empty = self.board.empty_index();
            let neighbors = grid::adjacent_indices(empty);
            let pick = neighbors.as_slice()[rng.random_range(0..neighbors.len())];
            self.board.swap(pick, empty)?;
        }
        Ok(())
    }

    /// Slots whose tile may legally slide: the neighbors of the empty slot.
    /// Front-ends use this to highlight movable tiles.
    pub fn movable_tiles(&self) -> Neighbors {
        grid::adjacent_indices(self.board.empty_index())
    }

    /// Evaluate the current puzzle status.
    pub fn status(&self) -> GameStatus {
        if self.board.is_solved() {
            GameStatus::Solved
        } else {
            GameStatus::InProgress
        }
    }

    /// Generate a snapshot of the current arrangement.
    pub fn state(&self) -> BoardState {
        BoardState::from(&self.board)
    }

    /// Restore an engine from a previously captured snapshot.
    pub fn from_state(state: BoardState) -> Self {
        Self {
            board: Board::from(state),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}
