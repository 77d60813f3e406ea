//! Shared fixtures for the search tests: seeded random maps, a plain
//! Dijkstra used as the ground truth for route costs, and weighted route
//! costs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::f64::consts::SQRT_2;

use gridroute_core::{Grid, MovementType, Point};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::path::path_cost;

/// A `width × height` map whose cells are walls with probability
/// `wall_ratio`. The top-left and bottom-right corners are always floor.
pub(crate) fn random_grid(width: i32, height: i32, wall_ratio: f64, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(width, height);
    for p in grid.bounds() {
        let r: f64 = rng.random();
        if r < wall_ratio {
            grid.set_walkable(p, false);
        }
    }
    grid.set_walkable(Point::new(0, 0), true);
    grid.set_walkable(Point::new(width - 1, height - 1), true);
    grid
}

#[derive(Clone, Copy)]
struct Entry {
    idx: usize,
    cost: f64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Cheapest cost from `from` to `to` with unit straight and √2 diagonal
/// steps, or `None` if `to` is unreachable.
pub(crate) fn reference_cost(
    grid: &Grid,
    from: Point,
    to: Point,
    movement: MovementType,
) -> Option<f64> {
    let start = grid.index(from)?;
    let goal = grid.index(to)?;
    let mut dist = vec![f64::INFINITY; grid.slot_count()];
    let mut open = BinaryHeap::new();
    dist[start] = 0.0;
    open.push(Entry {
        idx: start,
        cost: 0.0,
    });

    while let Some(Entry { idx, cost }) = open.pop() {
        if idx == goal {
            return Some(cost);
        }
        if cost > dist[idx] {
            continue;
        }
        let p = grid.point(idx);
        for n in grid.neighbors(p, movement) {
            let Some(ni) = grid.index(n) else {
                continue;
            };
            let step = if n.x == p.x || n.y == p.y { 1.0 } else { SQRT_2 };
            let nc = cost + step;
            if nc < dist[ni] {
                dist[ni] = nc;
                open.push(Entry { idx: ni, cost: nc });
            }
        }
    }
    None
}

/// Cost of a dense route when each step is multiplied by the weight of the
/// cell it enters.
pub(crate) fn weighted_cost(grid: &Grid, route: &[Point]) -> f64 {
    route
        .windows(2)
        .map(|w| path_cost(w) * grid.weight(w[1]).unwrap_or(1.0))
        .sum()
}
