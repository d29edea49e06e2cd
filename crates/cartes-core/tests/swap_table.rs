use std::collections::HashSet;

use cartes_core::sheet::{CARDS_PER_SHEET, GRID_COLUMNS, GRID_ROWS, SWAP_TABLE, swapped_index};

#[test]
fn sheet_is_a_two_by_four_grid() {
    assert_eq!(GRID_COLUMNS, 2);
    assert_eq!(GRID_ROWS, 4);
    assert_eq!(CARDS_PER_SHEET, 8);
}

#[test]
fn swap_is_self_inverse() {
    for i in 0..CARDS_PER_SHEET {
        assert_eq!(swapped_index(swapped_index(i)), i, "cell {i}");
    }
}

#[test]
fn swap_has_no_fixed_points() {
    for i in 0..CARDS_PER_SHEET {
        assert_ne!(swapped_index(i), i, "cell {i}");
    }
}

#[test]
fn swap_is_a_permutation() {
    let targets: HashSet<usize> = SWAP_TABLE.iter().copied().collect();
    assert_eq!(targets.len(), CARDS_PER_SHEET);
    assert!(targets.iter().all(|&t| t < CARDS_PER_SHEET));
}

#[test]
fn swap_stays_within_a_row() {
    for i in 0..CARDS_PER_SHEET {
        assert_eq!(i / GRID_COLUMNS, swapped_index(i) / GRID_COLUMNS);
    }
}
