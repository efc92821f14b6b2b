//! The search engine: one parameterized traversal serving both
//! algorithms, with per-run arena bookkeeping reused across runs.

use std::fmt;

use pathviz_core::{Grid, GridError, Point, VertexState};

use crate::cancel::CancelToken;
use crate::frontier::Frontier;
use crate::policy::{Algorithm, ManhattanGuided, Priority, UniformCost};

// ---------------------------------------------------------------------------
// Outcome and errors
// ---------------------------------------------------------------------------

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The destination was reached and the path has been marked.
    Found,
    /// The frontier drained without reaching the destination.
    NotFound,
    /// The run stopped because cancellation was requested. Grid and
    /// engine state reflect an interrupted run and must not be trusted.
    Cancelled,
}

/// Which endpoint a run was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Errors reported before a run's main loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// No start or no destination vertex was supplied.
    MissingEndpoint(Endpoint),
    /// An endpoint failed the grid's bounds check.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint(which) => write!(f, "no {which} vertex designated"),
            Self::Grid(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::MissingEndpoint(_) => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

// ---------------------------------------------------------------------------
// Internal per-cell bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Sentinel cost meaning "not yet reached".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Coordinator for shortest-path runs over a [`Grid`].
///
/// The engine owns a flat node arena sized to the grid; a generation
/// counter bumped per run lazily invalidates the previous run's entries,
/// so repeated runs incur no allocations after the first. Post-run
/// queries ([`cost_at`](Self::cost_at), [`expansions`](Self::expansions))
/// read the arena left behind by the last run.
pub struct SearchEngine {
    pub(crate) size: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) frontier: Frontier,
    pub(crate) expanded: usize,
    pub(crate) nbuf: Vec<Point>,
}

impl SearchEngine {
    /// Create an engine for `size`×`size` grids.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let len = (size as usize) * (size as usize);
        Self {
            size,
            nodes: vec![Node::default(); len],
            generation: 0,
            frontier: Frontier::new(),
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create an engine sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.size())
    }

    /// Re-target the arena at `grid`, reallocating only on growth.
    /// Shrinking keeps capacity; the per-run generation bump already
    /// invalidates stale entries.
    fn fit_to(&mut self, grid: &Grid) {
        self.size = grid.size();
        let len = grid.cell_count();
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat index of an in-bounds point. Callers guarantee bounds.
    #[inline]
    pub(crate) fn flat(&self, p: Point) -> usize {
        (p.row * self.size + p.col) as usize
    }

    /// Convert a `Point` to a flat index. `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.row >= 0 && p.row < self.size && p.col >= 0 && p.col < self.size {
            Some(self.flat(p))
        } else {
            None
        }
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new(
            (idx / self.size as usize) as i32,
            (idx % self.size as usize) as i32,
        )
    }

    // -----------------------------------------------------------------------
    // Post-run queries
    // -----------------------------------------------------------------------

    /// Best-known cost from the last run's start to `p`.
    ///
    /// `None` if `p` is out of range or was never reached by the last
    /// run. For vertices the run finalized this is the exact
    /// shortest-path cost.
    pub fn cost_at(&self, p: Point) -> Option<i32> {
        if self.generation == 0 {
            return None;
        }
        let node = self.nodes.get(self.idx(p)?)?;
        if node.generation != self.generation {
            return None;
        }
        Some(node.g)
    }

    /// How many vertices the last run finalized.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expanded
    }

    // -----------------------------------------------------------------------
    // Running a search
    // -----------------------------------------------------------------------

    /// Run `algorithm` from `start` to `destination` over `grid`.
    ///
    /// Endpoint validation happens before the loop: a `None` endpoint is
    /// rejected as [`SearchError::MissingEndpoint`], an out-of-range one
    /// as [`SearchError::Grid`]. During the run the engine mutates vertex
    /// states (Visiting on discovery, Visited on finalization, Path
    /// during reconstruction) and invokes `observer` once per processed
    /// vertex, after its neighbors were relaxed and before it is marked
    /// Visited. `cancel` is polled once per vertex; a set token ends the
    /// run with [`SearchOutcome::Cancelled`].
    ///
    /// Neighbor lists are read from the grid's cache, so
    /// [`Grid::recompute_all_neighbors`] must have run since the last
    /// wall edit.
    pub fn run<F>(
        &mut self,
        grid: &mut Grid,
        algorithm: Algorithm,
        start: Option<Point>,
        destination: Option<Point>,
        observer: F,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&Grid, Point),
    {
        let start = start.ok_or(SearchError::MissingEndpoint(Endpoint::Start))?;
        let destination =
            destination.ok_or(SearchError::MissingEndpoint(Endpoint::Destination))?;
        grid.vertex(start)?;
        grid.vertex(destination)?;

        log::debug!("{:?} search from {} to {}", algorithm, start, destination);

        let outcome = match algorithm {
            Algorithm::Dijkstra => {
                self.traverse(grid, &UniformCost, start, destination, observer, cancel)
            }
            Algorithm::AStar => {
                self.traverse(grid, &ManhattanGuided, start, destination, observer, cancel)
            }
        }?;

        log::debug!(
            "{:?} search finished: {:?} after {} expansions",
            algorithm,
            outcome,
            self.expanded
        );
        Ok(outcome)
    }

    /// The shared traversal. The priority policy is the only difference
    /// between the two public algorithms.
    fn traverse<P, F>(
        &mut self,
        grid: &mut Grid,
        policy: &P,
        start: Point,
        destination: Point,
        mut observer: F,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, SearchError>
    where
        P: Priority,
        F: FnMut(&Grid, Point),
    {
        self.fit_to(grid);
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        self.frontier.clear();
        self.expanded = 0;

        let si = self.flat(start);
        let di = self.flat(destination);

        // Seed the start node.
        {
            let node = &mut self.nodes[si];
            node.g = 0;
            node.f = policy.key(0, start, destination);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }
        let seed_key = self.nodes[si].f;
        self.frontier.push(seed_key, si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            if cancel.is_cancelled() {
                break 'search SearchOutcome::Cancelled;
            }
            let Some(ci) = self.frontier.pop() else {
                break 'search SearchOutcome::NotFound;
            };
            self.nodes[ci].open = false;

            if ci == di {
                break 'search SearchOutcome::Found;
            }

            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);

            nbuf.clear();
            nbuf.extend_from_slice(grid.vertex(cp)?.neighbors());

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let candidate = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if candidate >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.open = false;
                }

                n.g = candidate;
                n.f = policy.key(candidate, np, destination);
                n.parent = ci;

                // A vertex already queued keeps its entry; the revision
                // above is bookkeeping only.
                if n.open {
                    continue;
                }
                n.open = true;
                let key = n.f;
                self.frontier.push(key, ni);
                if np != destination {
                    grid.set_state(np, VertexState::Visiting)?;
                }
            }

            observer(&*grid, cp);
            self.expanded += 1;
            if cp != start {
                grid.set_state(cp, VertexState::Visited)?;
            }
        };

        self.nbuf = nbuf;

        if outcome == SearchOutcome::Found {
            self.reconstruct(grid, destination, &mut observer)?;
            grid.set_state(start, VertexState::Start)?;
        }
        Ok(outcome)
    }
}

// ---------------------------------------------------------------------------
// One-shot entry point
// ---------------------------------------------------------------------------

/// Run a single search with a throwaway engine.
///
/// Callers that run repeatedly (or want [`SearchEngine::cost_at`]
/// afterwards) should hold a [`SearchEngine`] instead.
pub fn search<F>(
    grid: &mut Grid,
    algorithm: Algorithm,
    start: Option<Point>,
    destination: Option<Point>,
    observer: F,
    cancel: &CancelToken,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Grid, Point),
{
    let mut engine = SearchEngine::for_grid(grid);
    engine.run(grid, algorithm, start, destination, observer, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_walls(size: i32, walls: &[Point]) -> Grid {
        let mut g = Grid::new(size).unwrap();
        for &w in walls {
            g.set_state(w, VertexState::Wall).unwrap();
        }
        g.recompute_all_neighbors();
        g
    }

    fn run_quiet(
        grid: &mut Grid,
        algorithm: Algorithm,
        start: Point,
        destination: Point,
    ) -> (SearchEngine, SearchOutcome) {
        let mut engine = SearchEngine::for_grid(grid);
        let outcome = engine
            .run(
                grid,
                algorithm,
                Some(start),
                Some(destination),
                |_, _| {},
                &CancelToken::new(),
            )
            .unwrap();
        (engine, outcome)
    }

    #[test]
    fn missing_endpoints_are_rejected() {
        let mut g = grid_with_walls(3, &[]);
        let mut engine = SearchEngine::for_grid(&g);
        let token = CancelToken::new();

        let err = engine
            .run(&mut g, Algorithm::Dijkstra, None, Some(Point::ZERO), |_, _| {}, &token)
            .unwrap_err();
        assert_eq!(err, SearchError::MissingEndpoint(Endpoint::Start));

        let err = engine
            .run(&mut g, Algorithm::AStar, Some(Point::ZERO), None, |_, _| {}, &token)
            .unwrap_err();
        assert_eq!(err, SearchError::MissingEndpoint(Endpoint::Destination));
    }

    #[test]
    fn out_of_range_endpoints_are_rejected() {
        let mut g = grid_with_walls(3, &[]);
        let mut engine = SearchEngine::for_grid(&g);
        let mut calls = 0;

        let err = engine
            .run(
                &mut g,
                Algorithm::Dijkstra,
                Some(Point::new(7, 7)),
                Some(Point::new(2, 2)),
                |_, _| calls += 1,
                &CancelToken::new(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::Grid(GridError::OutOfBounds {
                pos: Point::new(7, 7),
                size: 3
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn open_grid_reaches_the_far_corner() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut g = grid_with_walls(5, &[]);
            g.place_start(Point::new(0, 0)).unwrap();
            g.place_destination(Point::new(4, 4)).unwrap();

            let (engine, outcome) =
                run_quiet(&mut g, algorithm, Point::new(0, 0), Point::new(4, 4));

            assert_eq!(outcome, SearchOutcome::Found);
            assert_eq!(engine.cost_at(Point::new(4, 4)), Some(8));
            // Cost 8 means seven intermediate Path cells; the start is
            // re-marked Start and the destination is never overwritten.
            assert_eq!(g.count(VertexState::Path), 7);
            assert_eq!(g.state(Point::new(0, 0)).unwrap(), VertexState::Start);
            assert_eq!(g.state(Point::new(4, 4)).unwrap(), VertexState::Destination);
        }
    }

    #[test]
    fn both_algorithms_agree_on_cost() {
        // A full wall column with a single opening at the bottom forces
        // a detour: down the left side, through the gap, back up.
        let walls: Vec<Point> = (0..6).map(|r| Point::new(r, 3)).collect();
        let start = Point::new(0, 0);
        let dest = Point::new(0, 6);

        let mut costs = Vec::new();
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut g = grid_with_walls(7, &walls);
            let (engine, outcome) = run_quiet(&mut g, algorithm, start, dest);
            assert_eq!(outcome, SearchOutcome::Found);
            costs.push(engine.cost_at(dest));
        }
        assert_eq!(costs[0], costs[1]);
        assert_eq!(costs[0], Some(18));
    }

    #[test]
    fn wall_row_with_one_opening_routes_through_it() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut g = grid_with_walls(3, &[Point::new(1, 0), Point::new(1, 2)]);
            g.place_start(Point::new(0, 0)).unwrap();
            g.place_destination(Point::new(2, 2)).unwrap();

            let (engine, outcome) =
                run_quiet(&mut g, algorithm, Point::new(0, 0), Point::new(2, 2));

            assert_eq!(outcome, SearchOutcome::Found);
            assert_eq!(engine.cost_at(Point::new(2, 2)), Some(4));
            assert_eq!(g.state(Point::new(1, 1)).unwrap(), VertexState::Path);
            assert_eq!(g.count(VertexState::Path), 3);
        }
    }

    #[test]
    fn sealed_off_destination_is_not_found() {
        let walls = [Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)];
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut g = grid_with_walls(3, &walls);
            g.place_start(Point::new(0, 0)).unwrap();
            g.place_destination(Point::new(2, 2)).unwrap();

            let mut seen = Vec::new();
            let mut engine = SearchEngine::for_grid(&g);
            let outcome = engine
                .run(
                    &mut g,
                    algorithm,
                    Some(Point::new(0, 0)),
                    Some(Point::new(2, 2)),
                    |_, p| seen.push(p),
                    &CancelToken::new(),
                )
                .unwrap();

            assert_eq!(outcome, SearchOutcome::NotFound);
            // Exhausting the start's component processes each of its
            // three cells exactly once.
            assert_eq!(engine.expansions(), 3);
            assert_eq!(seen.len(), 3);
            let mut dedup = seen.clone();
            dedup.sort_by_key(|p| (p.row, p.col));
            dedup.dedup();
            assert_eq!(dedup.len(), 3);
            assert_eq!(g.count(VertexState::Path), 0);
            assert_eq!(g.count(VertexState::Visited), 2);
            assert_eq!(g.state(Point::new(0, 0)).unwrap(), VertexState::Start);
        }
    }

    #[test]
    fn start_equals_destination() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut g = grid_with_walls(4, &[]);
            let p = Point::new(2, 1);
            let mut calls = 0;

            let mut engine = SearchEngine::for_grid(&g);
            let outcome = engine
                .run(
                    &mut g,
                    algorithm,
                    Some(p),
                    Some(p),
                    |_, _| calls += 1,
                    &CancelToken::new(),
                )
                .unwrap();

            assert_eq!(outcome, SearchOutcome::Found);
            assert_eq!(calls, 0);
            assert_eq!(engine.expansions(), 0);
            assert_eq!(g.count(VertexState::Path), 0);
            // The final re-mark designates the single cell as the start.
            assert_eq!(g.state(p).unwrap(), VertexState::Start);
        }
    }

    #[test]
    fn dijkstra_costs_match_manhattan_on_open_grid() {
        // On an obstacle-free grid the far corner is the unique farthest
        // cell, so every other cell settles first and every reached cost
        // equals the Manhattan distance from the start.
        let mut g = grid_with_walls(6, &[]);
        let start = Point::new(0, 0);
        let dest = Point::new(5, 5);
        let (engine, outcome) = run_quiet(&mut g, Algorithm::Dijkstra, start, dest);

        assert_eq!(outcome, SearchOutcome::Found);
        for p in g.points() {
            assert_eq!(
                engine.cost_at(p),
                Some(crate::distance::manhattan(start, p)),
                "cost mismatch at {p}"
            );
        }
    }

    #[test]
    fn astar_cost_is_exact_despite_the_heuristic() {
        let mut g = grid_with_walls(6, &[]);
        let (engine, outcome) =
            run_quiet(&mut g, Algorithm::AStar, Point::new(0, 0), Point::new(5, 5));
        assert_eq!(outcome, SearchOutcome::Found);
        assert_eq!(engine.cost_at(Point::new(5, 5)), Some(10));
    }

    #[test]
    fn visit_order_is_deterministic() {
        let walls = [Point::new(1, 1), Point::new(2, 3), Point::new(3, 1)];
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut runs: Vec<(Vec<Point>, Vec<VertexState>)> = Vec::new();
            for _ in 0..2 {
                let mut g = grid_with_walls(5, &walls);
                g.place_start(Point::new(0, 0)).unwrap();
                g.place_destination(Point::new(4, 4)).unwrap();

                let mut seen = Vec::new();
                let mut engine = SearchEngine::for_grid(&g);
                engine
                    .run(
                        &mut g,
                        algorithm,
                        Some(Point::new(0, 0)),
                        Some(Point::new(4, 4)),
                        |_, p| seen.push(p),
                        &CancelToken::new(),
                    )
                    .unwrap();
                let states = g.iter().map(|v| v.state()).collect();
                runs.push((seen, states));
            }
            assert_eq!(runs[0].0, runs[1].0, "{algorithm:?} visit order diverged");
            assert_eq!(runs[0].1, runs[1].1, "{algorithm:?} final marks diverged");
        }
    }

    #[test]
    fn pre_set_token_cancels_before_any_work() {
        let mut g = grid_with_walls(5, &[]);
        let token = CancelToken::new();
        token.cancel();
        let mut calls = 0;

        let mut engine = SearchEngine::for_grid(&g);
        let outcome = engine
            .run(
                &mut g,
                Algorithm::Dijkstra,
                Some(Point::new(0, 0)),
                Some(Point::new(4, 4)),
                |_, _| calls += 1,
                &token,
            )
            .unwrap();

        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(calls, 0);
    }

    #[test]
    fn observer_can_cancel_mid_run() {
        let mut g = grid_with_walls(5, &[]);
        let token = CancelToken::new();
        let tok = token.clone();
        let mut calls = 0;

        let mut engine = SearchEngine::for_grid(&g);
        let outcome = engine
            .run(
                &mut g,
                Algorithm::Dijkstra,
                Some(Point::new(0, 0)),
                Some(Point::new(4, 4)),
                |_, _| {
                    calls += 1;
                    tok.cancel();
                },
                &token,
            )
            .unwrap();

        assert_eq!(outcome, SearchOutcome::Cancelled);
        // The token is polled at the top of the next iteration, so the
        // observer fires exactly once.
        assert_eq!(calls, 1);
    }

    #[test]
    fn engine_is_reusable_across_runs() {
        let mut g = grid_with_walls(3, &[Point::new(1, 0), Point::new(1, 2)]);
        let mut engine = SearchEngine::for_grid(&g);
        let token = CancelToken::new();

        for _ in 0..2 {
            let outcome = engine
                .run(
                    &mut g,
                    Algorithm::AStar,
                    Some(Point::new(0, 0)),
                    Some(Point::new(2, 2)),
                    |_, _| {},
                    &token,
                )
                .unwrap();
            assert_eq!(outcome, SearchOutcome::Found);
            assert_eq!(engine.cost_at(Point::new(2, 2)), Some(4));
            assert_eq!(g.count(VertexState::Path), 3);
        }
    }

    #[test]
    fn cost_at_before_any_run_is_none() {
        let g = grid_with_walls(4, &[]);
        let engine = SearchEngine::for_grid(&g);
        assert_eq!(engine.cost_at(Point::ZERO), None);
    }

    #[test]
    fn cost_at_unreached_cells_is_none() {
        let walls = [Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)];
        let mut g = grid_with_walls(3, &walls);
        let (engine, outcome) =
            run_quiet(&mut g, Algorithm::Dijkstra, Point::new(0, 0), Point::new(2, 2));

        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(engine.cost_at(Point::new(0, 1)), Some(1));
        assert_eq!(engine.cost_at(Point::new(2, 2)), None);
        assert_eq!(engine.cost_at(Point::new(9, 9)), None);
    }

    #[test]
    fn free_search_runs_one_shot() {
        let mut g = grid_with_walls(4, &[]);
        let outcome = search(
            &mut g,
            Algorithm::AStar,
            Some(Point::new(0, 0)),
            Some(Point::new(3, 3)),
            |_, _| {},
            &CancelToken::new(),
        )
        .unwrap();
        assert_eq!(outcome, SearchOutcome::Found);
        assert_eq!(g.count(VertexState::Path), 5);
    }

    #[test]
    fn observer_sees_neighbors_marked_before_finalization() {
        // When the observer fires for a vertex, its freshly discovered
        // neighbors are already Visiting but the vertex itself is not
        // yet Visited.
        let mut g = grid_with_walls(3, &[]);
        let start = Point::new(0, 0);
        g.place_start(start).unwrap();
        g.place_destination(Point::new(2, 2)).unwrap();
        let mut first_call_checked = false;
        let mut engine = SearchEngine::for_grid(&g);
        engine
            .run(
                &mut g,
                Algorithm::Dijkstra,
                Some(start),
                Some(Point::new(2, 2)),
                |grid, p| {
                    if p == start && !first_call_checked {
                        first_call_checked = true;
                        assert_eq!(grid.state(Point::new(1, 0)).unwrap(), VertexState::Visiting);
                        assert_eq!(grid.state(Point::new(0, 1)).unwrap(), VertexState::Visiting);
                        assert_eq!(grid.state(start).unwrap(), VertexState::Start);
                    }
                },
                &CancelToken::new(),
            )
            .unwrap();
        assert!(first_call_checked);
    }

    #[test]
    fn observer_fires_once_per_expansion_and_path_mark() {
        // The loop reports each finalized vertex once; reconstruction
        // reports each Path mark once. A path of cost c makes c marks
        // (intermediates plus the start, which is re-marked afterwards).
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut g = grid_with_walls(5, &[Point::new(2, 2), Point::new(3, 4)]);
            g.place_start(Point::new(0, 0)).unwrap();
            g.place_destination(Point::new(4, 4)).unwrap();

            let mut calls = 0usize;
            let mut engine = SearchEngine::for_grid(&g);
            let outcome = engine
                .run(
                    &mut g,
                    algorithm,
                    Some(Point::new(0, 0)),
                    Some(Point::new(4, 4)),
                    |_, _| calls += 1,
                    &CancelToken::new(),
                )
                .unwrap();

            assert_eq!(outcome, SearchOutcome::Found);
            let cost = engine.cost_at(Point::new(4, 4)).unwrap() as usize;
            assert_eq!(calls, engine.expansions() + cost, "{algorithm:?}");
            assert_eq!(g.count(VertexState::Path), cost - 1, "{algorithm:?}");
        }
    }
}
