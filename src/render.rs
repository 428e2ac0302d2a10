#![cfg(feature = "std")]

//! Terminal rendering and input parsing for the CLI front-end.

use crate::{artwork::SpriteSheet, board::Board, config::GRID_SIDE, grid, session::Session};

/// Print the board as a 4x4 grid. Movable tiles (the neighbors of the empty
/// slot) are bracketed so the player can see the legal moves.
pub fn print_board(board: &Board) {
    let movable = grid::adjacent_indices(board.empty_index());
    for row in 0..GRID_SIDE {
        for col in 0..GRID_SIDE {
            let index = row * GRID_SIDE + col;
            let cell = board.cells()[index];
            match cell.label() {
                Some(n) if movable.contains(index) => std::print!("[{:>2}]", n),
                Some(n) => std::print!(" {:>2} ", n),
                None => std::print!("  . "),
            }
        }
        std::println!();
    }
}

/// One-line session summary: move count plus solved banner when done.
pub fn print_status(session: &Session) {
    use crate::engine::GameStatus;
    match session.status() {
        GameStatus::Solved => {
            std::println!(
                "Solved in {} moves. Congratulations!",
                session.moves_made()
            );
        }
        GameStatus::InProgress => {
            std::println!("Moves so far: {}", session.moves_made());
        }
    }
}

/// Show which square of the source picture each movable tile displays.
pub fn print_sprite_map(sheet: &SpriteSheet, board: &Board) {
    let crop = sheet.crop();
    std::println!(
        "Source crop: {}x{} at ({}, {})",
        crop.size,
        crop.size,
        crop.x,
        crop.y
    );
    for (index, cell) in board.cells().iter().enumerate() {
        if let Some(label) = cell.label() {
            if let Some(region) = sheet.region_for(label) {
                let (row, col) = grid::row_col(index);
                std::println!(
                    "slot ({}, {}): tile {} -> sprite ({}, {})",
                    row,
                    col,
                    label,
                    region.x,
                    region.y
                );
            }
        }
    }
}

/// Parse a player's tile choice: the printed tile label, 1..=15.
pub fn parse_tile(input: &str) -> Option<u8> {
    let label: u8 = input.trim().parse().ok()?;
    if (1..=crate::config::TILE_COUNT as u8).contains(&label) {
        Some(label)
    } else {
        None
    }
}
