//! Random obstacle generation for pathfinding grids.
//!
//! [`MazeGen`] scatters walls over a grid so search demos have something
//! to route around. Generation is probabilistic: see
//! [`MazeGen::generate`] for the exact contract.

mod mapgen;

pub use mapgen::{DEFAULT_DENSITY, MazeGen};
