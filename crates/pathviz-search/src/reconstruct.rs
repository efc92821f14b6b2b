use pathviz_core::{Grid, GridError, Point, VertexState};

use crate::engine::SearchEngine;

impl SearchEngine {
    /// Mark the shortest path discovered by the last run.
    ///
    /// Walks predecessor links backward from `destination`, marking every
    /// ancestor as Path with one `observer` invocation per mark. The walk
    /// includes the start vertex and excludes the destination itself;
    /// [`run`](Self::run) re-marks the start afterwards so it keeps its
    /// designation. A destination the last run never reached (including
    /// a run where it was the start) yields no marks.
    pub fn reconstruct<F>(
        &self,
        grid: &mut Grid,
        destination: Point,
        observer: &mut F,
    ) -> Result<(), GridError>
    where
        F: FnMut(&Grid, Point),
    {
        let di = match self.idx(destination) {
            Some(i) => i,
            None => {
                return Err(GridError::OutOfBounds {
                    pos: destination,
                    size: self.size,
                });
            }
        };
        if self.generation == 0 {
            return Ok(());
        }
        let node = &self.nodes[di];
        if node.generation != self.generation {
            return Ok(());
        }

        let mut pi = node.parent;
        while pi != usize::MAX {
            let p = self.point(pi);
            grid.set_state(p, VertexState::Path)?;
            observer(&*grid, p);
            pi = self.nodes[pi].parent;
        }
        Ok(())
    }
}
