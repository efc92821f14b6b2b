//! **pathviz-core** — grid and vertex model for step-observable pathfinding.
//!
//! The crate owns the data layer: [`Point`] coordinates, the [`Vertex`]
//! cell with its lifecycle [`VertexState`], and the square [`Grid`] arena
//! that stores them row-major. Search and maze generation live in sibling
//! crates and drive this model through its public surface.
//!
//! Neighbor adjacency is cached per vertex and refreshed in one pass with
//! [`Grid::recompute_all_neighbors`] after wall edits, so traversals read
//! precomputed lists instead of re-deriving adjacency per step.

pub mod geom;
pub mod grid;
pub mod vertex;

pub use geom::Point;
pub use grid::{Grid, GridError, Points};
pub use vertex::{Vertex, VertexState};
