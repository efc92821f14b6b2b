//! The [`Grid`] type — a fixed-size square arena of [`Vertex`] cells.

use std::fmt;

use crate::geom::Point;
use crate::vertex::{Vertex, VertexState};

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors from grid construction and access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Requested side length is not positive.
    InvalidDimension(i32),
    /// Coordinate lies outside the grid extents.
    OutOfBounds { pos: Point, size: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(size) => {
                write!(f, "invalid grid dimension {size}: side length must be positive")
            }
            Self::OutOfBounds { pos, size } => {
                write!(f, "position {pos} outside {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A square grid owning all of its vertices.
///
/// Cells are stored row-major (`row * size + col`), so a vertex's identity
/// is a plain array index rather than object identity. The grid is
/// fixed-size: cells persist for its lifetime and only their state
/// changes.
#[derive(Debug, Clone)]
pub struct Grid {
    size: i32,
    vertices: Vec<Vertex>,
}

impl Grid {
    /// Allocate a `size`×`size` grid of Default vertices.
    pub fn new(size: i32) -> Result<Self, GridError> {
        if size <= 0 {
            return Err(GridError::InvalidDimension(size));
        }
        let mut vertices = Vec::with_capacity((size as usize) * (size as usize));
        for row in 0..size {
            for col in 0..size {
                vertices.push(Vertex::new(row, col));
            }
        }
        Ok(Self { size, vertices })
    }

    /// Cells per side (rows == cols).
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.size && p.col >= 0 && p.col < self.size
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.row * self.size + p.col) as usize)
        } else {
            None
        }
    }

    /// Bounds-checked vertex accessor.
    pub fn vertex(&self, p: Point) -> Result<&Vertex, GridError> {
        self.idx(p)
            .map(|i| &self.vertices[i])
            .ok_or(GridError::OutOfBounds { pos: p, size: self.size })
    }

    /// Bounds-checked mutable vertex accessor.
    pub fn vertex_mut(&mut self, p: Point) -> Result<&mut Vertex, GridError> {
        let size = self.size;
        match self.idx(p) {
            Some(i) => Ok(&mut self.vertices[i]),
            None => Err(GridError::OutOfBounds { pos: p, size }),
        }
    }

    /// The state at `p`.
    pub fn state(&self, p: Point) -> Result<VertexState, GridError> {
        Ok(self.vertex(p)?.state())
    }

    /// Set the state at `p`. Total beyond the bounds check.
    pub fn set_state(&mut self, p: Point, state: VertexState) -> Result<(), GridError> {
        self.vertex_mut(p)?.set_state(state);
        Ok(())
    }

    /// Designate `p` as the start vertex.
    ///
    /// Any previously designated start reverts to Default. Walls can never
    /// be endpoints: returns `Ok(false)` and leaves the grid unchanged
    /// when `p` is a wall.
    pub fn place_start(&mut self, p: Point) -> Result<bool, GridError> {
        self.place_endpoint(p, VertexState::Start)
    }

    /// Designate `p` as the destination vertex. Same contract as
    /// [`place_start`](Self::place_start).
    pub fn place_destination(&mut self, p: Point) -> Result<bool, GridError> {
        self.place_endpoint(p, VertexState::Destination)
    }

    fn place_endpoint(&mut self, p: Point, endpoint: VertexState) -> Result<bool, GridError> {
        if self.vertex(p)?.is_wall() {
            return Ok(false);
        }
        if let Some(prev) = self.find_state(endpoint) {
            if prev != p {
                self.set_state(prev, VertexState::Default)?;
            }
        }
        self.set_state(p, endpoint)
            .map(|()| true)
    }

    /// Position of the designated start vertex, if any.
    pub fn start(&self) -> Option<Point> {
        self.find_state(VertexState::Start)
    }

    /// Position of the designated destination vertex, if any.
    pub fn destination(&self) -> Option<Point> {
        self.find_state(VertexState::Destination)
    }

    fn find_state(&self, state: VertexState) -> Option<Point> {
        self.vertices
            .iter()
            .find(|v| v.state() == state)
            .map(Vertex::position)
    }

    /// Recompute every vertex's cached neighbor list from the current
    /// wall layout.
    ///
    /// Must run after any batch of wall edits and before a search run;
    /// the search reads the cached lists and never recomputes mid-run.
    /// The pass reads one wall snapshot taken up front, so the resulting
    /// neighbor sets are symmetric: walls never appear in any list, and a
    /// wall's own list is empty.
    pub fn recompute_all_neighbors(&mut self) {
        let size = self.size;
        let walls: Vec<bool> = self.vertices.iter().map(Vertex::is_wall).collect();
        for v in self.vertices.iter_mut() {
            if v.is_wall() {
                v.compute_neighbors(|_| false);
                continue;
            }
            v.compute_neighbors(|p| {
                p.row >= 0
                    && p.row < size
                    && p.col >= 0
                    && p.col < size
                    && !walls[(p.row * size + p.col) as usize]
            });
        }
    }

    /// Reset every vertex to Default, wiping walls, endpoints, and search
    /// markings.
    pub fn clear(&mut self) {
        for v in self.vertices.iter_mut() {
            v.reset();
        }
    }

    /// Row-major iterator over all vertices.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Row-major iterator over all cell positions.
    #[inline]
    pub fn points(&self) -> Points {
        Points {
            size: self.size,
            cur: Point::ZERO,
        }
    }

    /// How many cells currently hold `state`.
    pub fn count(&self, state: VertexState) -> usize {
        self.vertices.iter().filter(|v| v.state() == state).count()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Points
// ---------------------------------------------------------------------------

/// Row-major iterator over the cell positions of a [`Grid`].
#[derive(Clone, Debug)]
pub struct Points {
    size: i32,
    cur: Point,
}

impl Iterator for Points {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.row >= self.size {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.size {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.row >= self.size {
            return (0, Some(0));
        }
        let remaining_in_row = (self.size - self.cur.col) as usize;
        let remaining_rows = (self.size - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * self.size as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for Points {}
