pub const GRID_SIDE: usize = 4;
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;
pub const TILE_COUNT: usize = CELL_COUNT - 1;

/// Random-walk length used when the caller does not supply one.
/// Historical front-ends shuffled with 500-1000 moves.
pub const DEFAULT_SHUFFLE_MOVES: u32 = 500;
