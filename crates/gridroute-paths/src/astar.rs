use std::f64::consts::SQRT_2;

use gridroute_core::{Grid, Neighbors, Point};

use crate::frontier::Frontier;
use crate::heuristic::metric;
use crate::options::SearchOptions;
use crate::path::Path;
use crate::state::SearchState;
use crate::traits::PathFinder;

/// Classic A* over the cells of a [`Grid`].
///
/// Straight steps cost 1 and diagonal steps √2. A node's weight scales its
/// heuristic estimate and, with [`SearchOptions::weighted_steps`], the cost
/// of stepping onto it.
///
/// The finder owns and reuses its search state, so repeated queries incur no
/// per-cell reset.
#[derive(Default)]
pub struct AStar {
    state: SearchState,
    frontier: Frontier,
    nbuf: Neighbors,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookkeeping left by the most recent search.
    pub fn state(&self) -> &SearchState {
        &self.state
    }
}

impl PathFinder for AStar {
    fn find_path_with<'g>(
        &mut self,
        grid: &'g Grid,
        start: Point,
        end: Point,
        opts: &SearchOptions,
    ) -> Path<'g> {
        let (Some(start_idx), Some(end_idx)) = (node_index(grid, start), node_index(grid, end))
        else {
            log::debug!("astar: endpoint absent from grid ({start} -> {end})");
            return Path::empty(grid);
        };

        let Self {
            state,
            frontier,
            nbuf,
        } = self;
        state.begin(grid.slot_count());
        frontier.clear();

        {
            let s = state.slot_mut(start_idx);
            s.g = 0.0;
            s.f = 0.0;
            s.opened = true;
        }
        frontier.push(start_idx, 0.0);

        let mut last = start_idx;
        let mut found = false;
        let mut closed = 0usize;

        while let Some(ci) = frontier.pop() {
            let current = state.slot_mut(ci);
            // Outdated entry left behind by a key update.
            if current.closed {
                continue;
            }
            current.closed = true;
            let current_g = current.g;
            closed += 1;
            last = ci;

            if ci == end_idx {
                found = true;
                break;
            }

            let cp = grid.point(ci);
            log::trace!("astar: expand {cp} g={current_g:.3}");

            for &np in nbuf.of(grid, cp, opts.movement) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let n = state.slot_mut(ni);
                if n.closed {
                    continue;
                }

                let weight = grid.weight(np).unwrap_or(1.0);
                let mut step = if np.x == cp.x || np.y == cp.y { 1.0 } else { SQRT_2 };
                if opts.weighted_steps {
                    step *= weight;
                }
                let ng = current_g + step;

                if !n.opened || ng < n.g {
                    n.g = ng;
                    let h = *n
                        .h
                        .get_or_insert_with(|| weight * metric(np, end, opts.heuristic));
                    n.f = ng + h;
                    n.parent = Some(ci);
                    if n.opened {
                        frontier.update(ni, n.f);
                    } else {
                        n.opened = true;
                        frontier.push(ni, n.f);
                    }
                }
            }
        }

        let path = Path::backtrack(grid, state, last, found);
        log::debug!(
            "astar: {start} -> {end} found={found} closed={closed} nodes={}",
            path.len()
        );
        path
    }
}

/// Slot index of `p` if a node exists there.
pub(crate) fn node_index(grid: &Grid, p: Point) -> Option<usize> {
    grid.index(p).filter(|&i| grid.node_by_index(i).is_some())
}
