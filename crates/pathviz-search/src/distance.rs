use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a grid with unit-cost cardinal moves this equals the true shortest
/// distance when no obstacles intervene, which makes it an admissible
/// heuristic for guided search.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
