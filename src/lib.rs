#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod artwork;
mod board;
mod common;
mod config;
mod engine;
pub mod grid;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod render;
mod session;

pub use board::{Board, BoardState};
pub use common::{BoardError, Cell, MoveOutcome};
pub use config::{CELL_COUNT, DEFAULT_SHUFFLE_MOVES, GRID_SIDE, TILE_COUNT};
pub use engine::{GameEngine, GameStatus};
pub use grid::{adjacent_indices, is_adjacent, Neighbors};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use session::Session;
