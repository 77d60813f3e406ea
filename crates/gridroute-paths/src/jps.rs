//! Jump Point Search (JPS).
//!
//! JPS is an optimised A* variant for uniform-cost grids. It "jumps" along straight and diagonal rays, only adding
//! nodes to the open list at *jump points*: cells with forced neighbours,
//! the goal, or diagonal cells whose straight sub-scans find one of those.
//!
//! Each [`MovementType`] has its own pruning and forced-neighbour rules; the
//! corner rules differ in which obstacle layouts force a turn, so they are
//! kept separate rather than merged.

use std::mem;

use gridroute_core::{Grid, MovementType, Neighbors, Point};

use crate::astar::node_index;
use crate::frontier::Frontier;
use crate::heuristic::{metric, octile};
use crate::options::SearchOptions;
use crate::path::Path;
use crate::state::SearchState;
use crate::traits::PathFinder;

/// Jump Point Search over the cells of a [`Grid`].
///
/// The returned [`Path`] holds jump points; call [`Path::expand`] for the
/// cell-by-cell route. With [`SearchOptions::weighted_steps`] the search
/// expands cell by cell like A*, since a jump would skip over the weights of
/// the cells it crosses.
#[derive(Default)]
pub struct JumpPointSearch {
    state: SearchState,
    frontier: Frontier,
    nbuf: Neighbors,
    succ: Vec<Point>,
}

impl JumpPointSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookkeeping left by the most recent search, including the cells
    /// scanned while jumping.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    fn identify_successors(&mut self, grid: &Grid, ci: usize, end: Point, opts: &SearchOptions) {
        let cp = grid.point(ci);
        let (current_g, parent) = {
            let s = self.state.slot_mut(ci);
            (s.g, s.parent)
        };

        let mut succ = mem::take(&mut self.succ);
        succ.clear();
        // Jumps skip cells, which is only sound when every cell costs the
        // same; weighted steps relax each neighbour on its own.
        match parent {
            Some(pi) if !opts.weighted_steps => {
                let dir = (cp - grid.point(pi)).signum();
                prune(grid, cp, dir, opts.movement, &mut succ);
            }
            _ => succ.extend_from_slice(self.nbuf.of(grid, cp, opts.movement)),
        }

        for &n in &succ {
            let found = if opts.weighted_steps {
                Some(n)
            } else {
                jump(grid, &mut self.state, n, n - cp, end, opts.movement)
            };
            let Some(jp) = found else {
                continue;
            };
            let Some(ji) = grid.index(jp) else {
                continue;
            };
            let s = self.state.slot_mut(ji);
            if s.closed {
                continue;
            }

            let weight = grid.weight(jp).unwrap_or(1.0);
            let mut dist = octile(cp, jp);
            if opts.weighted_steps {
                dist *= weight;
            }
            let ng = current_g + dist;

            if !s.opened || ng < s.g {
                s.g = ng;
                let h = *s
                    .h
                    .get_or_insert_with(|| weight * metric(jp, end, opts.heuristic));
                s.f = ng + h;
                s.parent = Some(ci);
                if s.opened {
                    self.frontier.update(ji, s.f);
                } else {
                    s.opened = true;
                    self.frontier.push(ji, s.f);
                }
            }
        }
        self.succ = succ;
    }
}

impl PathFinder for JumpPointSearch {
    fn find_path_with<'g>(
        &mut self,
        grid: &'g Grid,
        start: Point,
        end: Point,
        opts: &SearchOptions,
    ) -> Path<'g> {
        let (Some(start_idx), Some(end_idx)) = (node_index(grid, start), node_index(grid, end))
        else {
            log::debug!("jps: endpoint absent from grid ({start} -> {end})");
            return Path::empty(grid);
        };

        self.state.begin(grid.slot_count());
        self.frontier.clear();
        {
            let s = self.state.slot_mut(start_idx);
            s.g = 0.0;
            s.f = 0.0;
            s.opened = true;
        }
        self.frontier.push(start_idx, 0.0);

        let mut last = start_idx;
        let mut found = false;
        let mut closed = 0usize;

        while let Some(ci) = self.frontier.pop() {
            let current = self.state.slot_mut(ci);
            if current.closed {
                continue;
            }
            current.closed = true;
            closed += 1;
            last = ci;

            if ci == end_idx {
                found = true;
                break;
            }
            log::trace!("jps: expand {}", grid.point(ci));
            self.identify_successors(grid, ci, end, opts);
        }

        let path = Path::backtrack(grid, &self.state, last, found);
        log::debug!(
            "jps: {start} -> {end} found={found} closed={closed} tested={} jump points={}",
            self.state.tested_count(),
            path.len()
        );
        path
    }
}

// ---------------------------------------------------------------------------
// Neighbour pruning
// ---------------------------------------------------------------------------

/// Push the directions worth scanning from `p`, reached travelling along
/// `d`. Forced-neighbour candidates may be blocked; the jump rejects them.
fn prune(grid: &Grid, p: Point, d: Point, movement: MovementType, out: &mut Vec<Point>) {
    match movement {
        MovementType::Diagonal => prune_diagonal(grid, p, d, out),
        MovementType::Straight => prune_straight(grid, p, d, out),
        MovementType::DiagonalOneObstacle => prune_one_obstacle(grid, p, d, out),
        MovementType::DiagonalNoObstacle => prune_no_obstacle(grid, p, d, out),
    }
}

fn prune_diagonal(grid: &Grid, p: Point, d: Point, out: &mut Vec<Point>) {
    let w = |dx: i32, dy: i32| grid.is_walkable(p.shift(dx, dy));
    let (dx, dy) = (d.x, d.y);

    if d.is_diagonal() {
        if w(0, dy) {
            out.push(p.shift(0, dy));
        }
        if w(dx, 0) {
            out.push(p.shift(dx, 0));
        }
        if w(dx, dy) {
            out.push(p.shift(dx, dy));
        }
        if !w(-dx, 0) {
            out.push(p.shift(-dx, dy));
        }
        if !w(0, -dy) {
            out.push(p.shift(dx, -dy));
        }
    } else if dx == 0 {
        if w(0, dy) {
            out.push(p.shift(0, dy));
        }
        if !w(1, 0) {
            out.push(p.shift(1, dy));
        }
        if !w(-1, 0) {
            out.push(p.shift(-1, dy));
        }
    } else {
        if w(dx, 0) {
            out.push(p.shift(dx, 0));
        }
        if !w(0, 1) {
            out.push(p.shift(dx, 1));
        }
        if !w(0, -1) {
            out.push(p.shift(dx, -1));
        }
    }
}

fn prune_one_obstacle(grid: &Grid, p: Point, d: Point, out: &mut Vec<Point>) {
    let w = |dx: i32, dy: i32| grid.is_walkable(p.shift(dx, dy));
    let (dx, dy) = (d.x, d.y);

    if d.is_diagonal() {
        let vertical = w(0, dy);
        let horizontal = w(dx, 0);
        if vertical {
            out.push(p.shift(0, dy));
        }
        if horizontal {
            out.push(p.shift(dx, 0));
        }
        if vertical || horizontal {
            out.push(p.shift(dx, dy));
        }
        if !w(-dx, 0) && vertical {
            out.push(p.shift(-dx, dy));
        }
        if !w(0, -dy) && horizontal {
            out.push(p.shift(dx, -dy));
        }
    } else if dx == 0 {
        if w(0, dy) {
            out.push(p.shift(0, dy));
            if !w(1, 0) {
                out.push(p.shift(1, dy));
            }
            if !w(-1, 0) {
                out.push(p.shift(-1, dy));
            }
        }
    } else if w(dx, 0) {
        out.push(p.shift(dx, 0));
        if !w(0, 1) {
            out.push(p.shift(dx, 1));
        }
        if !w(0, -1) {
            out.push(p.shift(dx, -1));
        }
    }
}

fn prune_no_obstacle(grid: &Grid, p: Point, d: Point, out: &mut Vec<Point>) {
    let w = |dx: i32, dy: i32| grid.is_walkable(p.shift(dx, dy));
    let (dx, dy) = (d.x, d.y);

    if d.is_diagonal() {
        let vertical = w(0, dy);
        let horizontal = w(dx, 0);
        if vertical {
            out.push(p.shift(0, dy));
        }
        if horizontal {
            out.push(p.shift(dx, 0));
        }
        if vertical && horizontal {
            out.push(p.shift(dx, dy));
        }
    } else if dx != 0 {
        let next = w(dx, 0);
        let down = w(0, 1);
        let up = w(0, -1);
        if next {
            out.push(p.shift(dx, 0));
            if down {
                out.push(p.shift(dx, 1));
            }
            if up {
                out.push(p.shift(dx, -1));
            }
        }
        if down {
            out.push(p.shift(0, 1));
        }
        if up {
            out.push(p.shift(0, -1));
        }
    } else {
        let next = w(0, dy);
        let right = w(1, 0);
        let left = w(-1, 0);
        if next {
            out.push(p.shift(0, dy));
            if right {
                out.push(p.shift(1, dy));
            }
            if left {
                out.push(p.shift(-1, dy));
            }
        }
        if right {
            out.push(p.shift(1, 0));
        }
        if left {
            out.push(p.shift(-1, 0));
        }
    }
}

fn prune_straight(grid: &Grid, p: Point, d: Point, out: &mut Vec<Point>) {
    let w = |dx: i32, dy: i32| grid.is_walkable(p.shift(dx, dy));
    let (dx, dy) = (d.x, d.y);

    if dx != 0 {
        if w(0, -1) {
            out.push(p.shift(0, -1));
        }
        if w(0, 1) {
            out.push(p.shift(0, 1));
        }
        if w(dx, 0) {
            out.push(p.shift(dx, 0));
        }
    } else if dy != 0 {
        if w(-1, 0) {
            out.push(p.shift(-1, 0));
        }
        if w(1, 0) {
            out.push(p.shift(1, 0));
        }
        if w(0, dy) {
            out.push(p.shift(0, dy));
        }
    }
}

// ---------------------------------------------------------------------------
// Jumping
// ---------------------------------------------------------------------------

/// Scan from `p` (the first cell of the ray) along `d` and return the next
/// jump point, or `None` when the ray hits a blocked or absent cell. Every
/// scanned cell is marked tested.
fn jump(
    grid: &Grid,
    state: &mut SearchState,
    mut p: Point,
    d: Point,
    goal: Point,
    movement: MovementType,
) -> Option<Point> {
    let (dx, dy) = (d.x, d.y);
    loop {
        let idx = grid.index(p)?;
        if !grid.is_walkable(p) {
            return None;
        }
        state.slot_mut(idx).tested = true;
        if p == goal {
            return Some(p);
        }

        let w = |ox: i32, oy: i32| grid.is_walkable(p.shift(ox, oy));
        let forced = match movement {
            MovementType::Diagonal | MovementType::DiagonalOneObstacle => {
                if d.is_diagonal() {
                    (w(-dx, dy) && !w(-dx, 0)) || (w(dx, -dy) && !w(0, -dy))
                } else if dx != 0 {
                    (w(dx, 1) && !w(0, 1)) || (w(dx, -1) && !w(0, -1))
                } else {
                    (w(1, dy) && !w(1, 0)) || (w(-1, dy) && !w(-1, 0))
                }
            }
            MovementType::DiagonalNoObstacle | MovementType::Straight => {
                if d.is_diagonal() {
                    false
                } else if dx != 0 {
                    (w(0, -1) && !w(-dx, -1)) || (w(0, 1) && !w(-dx, 1))
                } else {
                    (w(-1, 0) && !w(-1, -dy)) || (w(1, 0) && !w(1, -dy))
                }
            }
        };
        if forced {
            return Some(p);
        }

        // Branch points: a diagonal cell whose straight components lead
        // somewhere, or (straight movement) a vertical cell whose sideways
        // scans do.
        let branch = match movement {
            MovementType::Straight if dx == 0 => [Point::new(1, 0), Point::new(-1, 0)],
            _ if d.is_diagonal() => [Point::new(dx, 0), Point::new(0, dy)],
            _ => [Point::ZERO; 2],
        };
        for b in branch {
            if b != Point::ZERO && jump(grid, state, p + b, b, goal, movement).is_some() {
                return Some(p);
            }
        }

        let proceed = match movement {
            MovementType::Diagonal | MovementType::Straight => true,
            MovementType::DiagonalOneObstacle => w(dx, 0) || w(0, dy),
            MovementType::DiagonalNoObstacle => w(dx, 0) && w(0, dy),
        };
        if !proceed {
            return None;
        }
        p = p + d;
    }
}
