use searchlab_core::Position;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for 4-directional movement with unit costs.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
