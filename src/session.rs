//! A single game session: one board, one RNG, explicit commands.
//!
//! Front-ends translate their input events (a click on a tile, a newly
//! loaded picture) into calls on [`Session`]; the session owns all mutable
//! state, so nothing here is shared or callback-driven.

use crate::{
    artwork::SpriteSheet,
    board::Board,
    common::{BoardError, MoveOutcome},
    engine::{GameEngine, GameStatus},
};
use rand::rngs::SmallRng;

pub struct Session {
    engine: GameEngine,
    rng: SmallRng,
    shuffle_moves: u32,
    artwork: Option<SpriteSheet>,
    moves_made: u32,
}

impl Session {
    /// Create a session around a solved board. Call [`Session::new_game`]
    /// to shuffle and start playing.
    pub fn new(rng: SmallRng, shuffle_moves: u32) -> Self {
        Self {
            engine: GameEngine::new(),
            rng,
            shuffle_moves,
            artwork: None,
            moves_made: 0,
        }
    }

    /// Discard the current arrangement and shuffle a fresh board.
    pub fn new_game(&mut self) -> Result<(), BoardError> {
        self.engine = GameEngine::new();
        self.engine.shuffle(&mut self.rng, self.shuffle_moves)?;
        self.moves_made = 0;
        Ok(())
    }

    /// Player activated the tile at `index` (e.g. clicked it). Legal moves
    /// are applied and counted; anything else leaves the board unchanged.
    pub fn tile_activated(&mut self, index: usize) -> Result<MoveOutcome, BoardError> {
        let outcome = self.engine.try_move(index)?;
        if outcome.accepted() {
            self.moves_made += 1;
        }
        Ok(outcome)
    }

    /// A new source picture of `width` x `height` is ready: remember its
    /// tile geometry and start a new game, as the original image-upload
    /// flow does.
    pub fn image_ready(&mut self, width: u32, height: u32) -> Result<(), BoardError> {
        self.artwork = Some(SpriteSheet::new(width, height));
        self.new_game()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// Accepted moves since the last shuffle.
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Sprite geometry for the current picture, if one was supplied.
    pub fn artwork(&self) -> Option<&SpriteSheet> {
        self.artwork.as_ref()
    }
}
