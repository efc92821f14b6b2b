//! Random wall scattering over a pathfinding grid.

use pathviz_core::{Grid, Point, VertexState};
use rand::{Rng, RngExt};

/// Fraction of the board the generator aims to cover with walls.
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Maze generator: scatters walls uniformly at random.
///
/// The generator draws independent cell picks with replacement, so the
/// realized coverage is a probabilistic upper bound on `density` rather
/// than an exact count. Existing walls are never removed; repeated calls
/// only grow coverage.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub density: f64,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator at [`DEFAULT_DENSITY`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            density: DEFAULT_DENSITY,
        }
    }

    /// Create a generator with a custom density.
    pub fn with_density(rng: R, density: f64) -> Self {
        Self { rng, density }
    }

    /// Scatter walls over `grid`, skipping the given endpoints.
    ///
    /// Draws `round(size² · density) + 1` uniform picks; a pick landing
    /// on `start` or `destination` is skipped, not retried, so endpoints
    /// are never walled. Returns the number of cells newly turned to
    /// wall (duplicate picks and skips don't count).
    ///
    /// Wall edits invalidate cached adjacency: call
    /// [`Grid::recompute_all_neighbors`] before the next search run.
    pub fn generate(
        &mut self,
        grid: &mut Grid,
        start: Option<Point>,
        destination: Option<Point>,
    ) -> usize {
        let size = grid.size();
        let n = ((size * size) as f64 * self.density).round() as usize;
        let mut placed = 0usize;

        for _ in 0..(n + 1) {
            let p = Point::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            if Some(p) == start || Some(p) == destination {
                continue;
            }
            if let Ok(v) = grid.vertex_mut(p) {
                if !v.is_wall() {
                    v.set_state(VertexState::Wall);
                    placed += 1;
                }
            }
        }

        log::debug!(
            "maze: {} new walls on a {}x{} grid (density {})",
            placed,
            size,
            size,
            self.density
        );
        placed
    }
}
