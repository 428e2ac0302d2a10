use fifteen::{adjacent_indices, is_adjacent, CELL_COUNT, GRID_SIDE};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn adjacency_is_symmetric(a in 0..CELL_COUNT, b in 0..CELL_COUNT) {
        prop_assert_eq!(is_adjacent(a, b), is_adjacent(b, a));
    }

    #[test]
    fn never_adjacent_to_self(a in 0..CELL_COUNT) {
        prop_assert!(!is_adjacent(a, a));
    }

    #[test]
    fn neighbor_count_matches_position(index in 0..CELL_COUNT) {
        let (row, col) = (index / GRID_SIDE, index % GRID_SIDE);
        let on_row_edge = row == 0 || row == GRID_SIDE - 1;
        let on_col_edge = col == 0 || col == GRID_SIDE - 1;
        let expected = match (on_row_edge, on_col_edge) {
            (true, true) => 2,   // corner
            (true, false) | (false, true) => 3, // edge
            (false, false) => 4, // interior
        };
        prop_assert_eq!(adjacent_indices(index).len(), expected);
    }

    #[test]
    fn neighbors_are_mutually_adjacent(index in 0..CELL_COUNT) {
        for &n in adjacent_indices(index).iter() {
            prop_assert!(is_adjacent(index, n));
            prop_assert!(adjacent_indices(n).contains(index));
        }
    }

    #[test]
    fn adjacency_matches_neighbor_enumeration(a in 0..CELL_COUNT, b in 0..CELL_COUNT) {
        prop_assert_eq!(is_adjacent(a, b), adjacent_indices(a).contains(b));
    }
}

#[test]
fn neighbor_order_is_up_down_left_right() {
    // interior slot 5 = (1, 1)
    assert_eq!(adjacent_indices(5).as_slice(), &[1, 9, 4, 6]);
    // top-left corner
    assert_eq!(adjacent_indices(0).as_slice(), &[4, 1]);
    // bottom-right corner
    assert_eq!(adjacent_indices(15).as_slice(), &[11, 14]);
}
