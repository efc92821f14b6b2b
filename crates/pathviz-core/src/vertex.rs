//! The [`Vertex`] type — a single grid cell and its [`VertexState`].

use crate::geom::Point;

/// The visual / logical state of a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexState {
    /// Plain traversable cell.
    #[default]
    Default,
    /// Obstacle; excluded from every neighbor list.
    Wall,
    /// The designated search origin.
    Start,
    /// The designated search target.
    Destination,
    /// Discovered and waiting in the frontier.
    Visiting,
    /// Expanded and finalized by the search.
    Visited,
    /// On the reconstructed shortest path.
    Path,
}

/// A single grid cell: immutable position, mutable state, and a cached
/// neighbor list.
///
/// Vertices are created once when the grid is built and live for the
/// grid's lifetime; only their state and neighbor cache change.
#[derive(Debug, Clone)]
pub struct Vertex {
    pos: Point,
    state: VertexState,
    neighbors: Vec<Point>,
}

impl Vertex {
    /// Create a vertex in the Default state with an empty neighbor cache.
    pub fn new(row: i32, col: i32) -> Self {
        Self {
            pos: Point::new(row, col),
            state: VertexState::Default,
            neighbors: Vec::new(),
        }
    }

    /// The cell's (row, col) position. Identity-defining, immutable.
    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Row coordinate.
    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    /// Column coordinate.
    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> VertexState {
        self.state
    }

    /// Whether the cell is an obstacle.
    #[inline]
    pub fn is_wall(&self) -> bool {
        self.state == VertexState::Wall
    }

    /// Set the state. Total: any state may replace any other. Mutates
    /// data only; rendering belongs to the caller.
    #[inline]
    pub fn set_state(&mut self, state: VertexState) {
        self.state = state;
    }

    /// The cached neighbor list, in the order it was computed.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    /// Recompute the cached neighbor list from a grid snapshot.
    ///
    /// `keep` decides which candidate positions survive (in bounds and
    /// not a wall, as supplied by the grid's neighbor pass). Candidates
    /// are offered in the fixed order up, down, left, right.
    pub fn compute_neighbors(&mut self, keep: impl Fn(Point) -> bool) {
        self.neighbors.clear();
        for n in self.pos.neighbors_4() {
            if keep(n) {
                self.neighbors.push(n);
            }
        }
    }

    /// Return the vertex to the Default state and drop the cached
    /// neighbor list.
    pub fn reset(&mut self) {
        self.state = VertexState::Default;
        self.neighbors.clear();
    }
}
