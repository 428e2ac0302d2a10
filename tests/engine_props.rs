use fifteen::{Cell, GameEngine, MoveOutcome, CELL_COUNT};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::{rngs::SmallRng, SeedableRng};

fn shuffled_engine(seed: u64, moves: u32) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine.shuffle(&mut rng, moves).unwrap();
    engine
}

/// Every label 1..=15 present exactly once, exactly one empty slot, and the
/// cached empty position pointing at it.
fn assert_well_formed(engine: &GameEngine) -> Result<(), TestCaseError> {
    let board = engine.board();
    let mut seen = [0usize; CELL_COUNT];
    for &cell in board.cells() {
        match cell {
            Cell::Tile(n) => {
                prop_assert!((1..CELL_COUNT as u8).contains(&n));
                seen[n as usize] += 1;
            }
            Cell::Empty => seen[0] += 1,
        }
    }
    prop_assert_eq!(seen, [1; CELL_COUNT]);
    prop_assert_eq!(board.cells()[board.empty_index()], Cell::Empty);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn shuffle_preserves_permutation(seed in any::<u64>(), moves in 0u32..400) {
        let engine = shuffled_engine(seed, moves);
        assert_well_formed(&engine)?;
    }

    #[test]
    fn shuffle_stays_solvable(seed in any::<u64>(), moves in 0u32..400) {
        let engine = shuffled_engine(seed, moves);
        prop_assert!(engine.board().is_solvable());
    }

    #[test]
    fn non_adjacent_move_changes_nothing(seed in any::<u64>(), index in 0..CELL_COUNT) {
        let mut engine = shuffled_engine(seed, 200);
        let empty = engine.board().empty_index();
        prop_assume!(!fifteen::is_adjacent(index, empty));

        let before = engine.state();
        prop_assert_eq!(engine.try_move(index).unwrap(), MoveOutcome::Rejected);
        prop_assert_eq!(engine.state(), before);
    }

    #[test]
    fn adjacent_move_swaps_and_relocates_empty(seed in any::<u64>(), pick in 0..4usize) {
        let mut engine = shuffled_engine(seed, 200);
        let empty = engine.board().empty_index();
        let movable = engine.movable_tiles();
        let index = movable.as_slice()[pick % movable.len()];
        let moved_tile = engine.board().cells()[index];

        let outcome = engine.try_move(index).unwrap();
        prop_assert_eq!(outcome, MoveOutcome::Moved { from: index, to: empty });
        prop_assert_eq!(engine.board().empty_index(), index);
        prop_assert_eq!(engine.board().cells()[empty], moved_tile);
        prop_assert_eq!(engine.board().cells()[index], Cell::Empty);
        assert_well_formed(&engine)?;
    }

    #[test]
    fn moves_never_leave_solvable_class(seed in any::<u64>(), picks in proptest::collection::vec(0..4usize, 1..30)) {
        let mut engine = shuffled_engine(seed, 100);
        for pick in picks {
            let movable = engine.movable_tiles();
            let index = movable.as_slice()[pick % movable.len()];
            prop_assert!(engine.try_move(index).unwrap().accepted());
            prop_assert!(engine.board().is_solvable());
        }
    }
}
