//! Fixed sheet vocabulary: grid size and the answer-page permutation.

/// Cards printed per sheet (one per grid cell).
pub const CARDS_PER_SHEET: usize = GRID_COLUMNS * GRID_ROWS;

pub const GRID_COLUMNS: usize = 2;

pub const GRID_ROWS: usize = 4;

/// Answer-page permutation: cell `i` shows the answer of card `SWAP_TABLE[i]`.
///
/// Each row's two cells trade places so the answer lands behind its question
/// when the sheet is printed double-sided and flipped on the long edge.
pub const SWAP_TABLE: [usize; CARDS_PER_SHEET] = [1, 0, 3, 2, 5, 4, 7, 6];

/// Index of the card whose answer is drawn in cell `cell`.
///
/// `cell` must be below [`CARDS_PER_SHEET`].
pub fn swapped_index(cell: usize) -> usize {
    SWAP_TABLE[cell % CARDS_PER_SHEET]
}
