//! Step-observable shortest-path search on uniform grids.
//!
//! Two algorithms run the same traversal and differ only in frontier
//! ordering:
//!
//! - **Dijkstra**: uniform-cost expansion ([`UniformCost`] keys)
//! - **A\***: Manhattan-guided expansion ([`ManhattanGuided`] keys)
//!
//! Both operate through [`SearchEngine`], which owns a reusable node
//! arena so repeated runs incur no allocations after warm-up, or through
//! the one-shot [`search`] function. A run mutates vertex states on the
//! grid as it progresses (Visiting, Visited, Path) and reports each
//! processed vertex to an observer callback, so a caller can render the
//! algorithm step by step. Runs are deterministic: equal-priority
//! vertices leave the frontier in insertion order.
//!
//! Cancellation is cooperative through a shared [`CancelToken`], polled
//! once per processed vertex.

mod cancel;
mod distance;
mod engine;
mod frontier;
mod policy;
mod reconstruct;

pub use cancel::CancelToken;
pub use distance::manhattan;
pub use engine::{Endpoint, SearchEngine, SearchError, SearchOutcome, search};
pub use policy::{Algorithm, ManhattanGuided, Priority, UniformCost};
