use chase_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for unit-cost cardinal moves.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
