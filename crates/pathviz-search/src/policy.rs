use pathviz_core::Point;

use crate::distance::manhattan;

/// Priority-key policy for the shared traversal.
///
/// Both supported algorithms run the identical relaxation loop and differ
/// only in how a vertex's frontier key is derived from its cost-so-far.
pub trait Priority {
    /// Frontier key for a vertex reached with cost `g`.
    /// Lower keys are expanded first.
    fn key(&self, g: i32, pos: Point, destination: Point) -> i32;
}

/// Dijkstra ordering: the key is the cost-so-far alone.
pub struct UniformCost;

impl Priority for UniformCost {
    #[inline]
    fn key(&self, g: i32, _pos: Point, _destination: Point) -> i32 {
        g
    }
}

/// A* ordering: cost-so-far plus the Manhattan estimate to the
/// destination. The estimate never overestimates on a cardinal-move
/// unit grid, so the first settled cost of any vertex is optimal.
pub struct ManhattanGuided;

impl Priority for ManhattanGuided {
    #[inline]
    fn key(&self, g: i32, pos: Point, destination: Point) -> i32 {
        g + manhattan(pos, destination)
    }
}

/// Algorithm selector for the public entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Uniform-cost search ([`UniformCost`] keys).
    Dijkstra,
    /// Heuristic-guided search ([`ManhattanGuided`] keys).
    AStar,
}
