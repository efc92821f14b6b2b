//! Shared scaffolding for the pathviz demos.

use crossterm::style::Color;
use pathviz_core::{Grid, GridError, Point, VertexState};
use pathviz_maze::MazeGen;
use rand::Rng;

/// Default board side length for the demos.
pub const BOARD_SIZE: i32 = 25;

/// Build a demo board: endpoints in opposite corners plus a random maze.
///
/// The board comes back with neighbor caches computed, ready to search.
pub fn build_board(size: i32, rng: impl Rng) -> Result<Grid, GridError> {
    let mut grid = Grid::new(size)?;
    grid.place_start(Point::new(0, 0))?;
    grid.place_destination(Point::new(size - 1, size - 1))?;

    let start = grid.start();
    let destination = grid.destination();
    let mut mazegen = MazeGen::new(rng);
    mazegen.generate(&mut grid, start, destination);
    grid.recompute_all_neighbors();
    Ok(grid)
}

/// Terminal rendition of a vertex state.
pub fn state_glyph(state: VertexState) -> (char, Color) {
    match state {
        VertexState::Default => ('·', Color::DarkGrey),
        VertexState::Wall => ('█', Color::White),
        VertexState::Start => ('S', Color::Yellow),
        VertexState::Destination => ('D', Color::Cyan),
        VertexState::Visiting => ('o', Color::Green),
        VertexState::Visited => ('x', Color::Red),
        VertexState::Path => ('@', Color::Magenta),
    }
}
