//! Search results: the [`Path`] type and its dense expansion.

use std::f64::consts::SQRT_2;

use gridroute_core::{Grid, Point};

use crate::heuristic::octile;
use crate::state::SearchState;

/// An ordered route through a [`Grid`].
///
/// Nodes are stored in the order backtracking visits them, goal first and
/// start last. For A* they are adjacent cells; for Jump Point Search they are
/// jump points, and [`expand`](Self::expand) fills in the cells between them.
#[derive(Debug, Clone)]
pub struct Path<'g> {
    grid: &'g Grid,
    nodes: Vec<Point>,
    weight: f64,
    distance: f64,
    found: bool,
}

impl<'g> Path<'g> {
    /// An empty, not-found path over `grid`.
    pub fn empty(grid: &'g Grid) -> Self {
        Self {
            grid,
            nodes: Vec::new(),
            weight: 0.0,
            distance: 0.0,
            found: false,
        }
    }

    /// Wrap a start→goal list of points, e.g. the output of
    /// [`expand`](Self::expand), as a found path.
    pub fn from_waypoints(grid: &'g Grid, waypoints: &[Point]) -> Self {
        let mut path = Self::empty(grid);
        for &p in waypoints.iter().rev() {
            path.add_node(p);
        }
        path.found = !waypoints.is_empty();
        path
    }

    /// Walk parent links from slot `from` back to the root of the run.
    pub(crate) fn backtrack(grid: &'g Grid, state: &SearchState, from: usize, found: bool) -> Self {
        let mut path = Self::empty(grid);
        let mut cur = Some(from);
        while let Some(i) = cur {
            path.add_node(grid.point(i));
            cur = state.parent(i);
        }
        path.found = found;
        path
    }

    /// Append a node during backtracking.
    pub fn add_node(&mut self, p: Point) {
        if let Some(&prev) = self.nodes.last() {
            self.distance += octile(prev, p);
        }
        self.weight += self.grid.weight(p).unwrap_or(0.0);
        self.nodes.push(p);
    }

    /// Whether the search reached its goal.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Stored nodes, goal first.
    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Stored nodes, start first.
    pub fn waypoints(&self) -> Vec<Point> {
        self.nodes.iter().rev().copied().collect()
    }

    /// First node of the route.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.nodes.last().copied()
    }

    /// Last node of the route (the goal when found).
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.nodes.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of the weights of the stored nodes.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Sum of octile distances between consecutive stored nodes.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The grid this path was computed on.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Dense start→goal route: every stored segment is rasterized with
    /// Bresenham's algorithm and joined without repeating shared endpoints.
    ///
    /// A segment stops early at the first coordinate absent from the grid.
    pub fn expand(&self) -> Vec<Point> {
        let waypoints = self.waypoints();
        if waypoints.len() < 2 {
            return waypoints;
        }

        let mut out: Vec<Point> = Vec::with_capacity(waypoints.len());
        for pair in waypoints.windows(2) {
            let segment = interpolate(self.grid, pair[0], pair[1]);
            let skip = usize::from(out.last().is_some() && out.last() == segment.first());
            out.extend(segment.into_iter().skip(skip));
        }
        out
    }
}

/// Cells on the Bresenham line from `a` to `b`, both ends included.
///
/// Stops before the first coordinate the grid has no node for.
pub fn interpolate(grid: &Grid, a: Point, b: Point) -> Vec<Point> {
    // i64 so that deltas between far-apart i32 coordinates cannot overflow.
    let (x1, y1) = (i64::from(b.x), i64::from(b.y));
    let (mut x, mut y) = (i64::from(a.x), i64::from(a.y));
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    // The line cannot hold more cells than the grid has slots.
    let cap = dx.max(dy).min(grid.slot_count() as i64) as usize + 1;
    let mut line = Vec::with_capacity(cap);
    loop {
        // Every visited coordinate lies between `a` and `b`, so it fits i32.
        let cur = Point::new(x as i32, y as i32);
        if !grid.contains(cur) {
            break;
        }
        line.push(cur);
        if cur == b {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    line
}

/// Step cost of a route of adjacent cells: 1 per straight step, √2 per
/// diagonal step. Non-adjacent hops are charged their octile distance.
pub fn path_cost(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| {
            let d = w[1] - w[0];
            match (d.x.abs(), d.y.abs()) {
                (0, 0) => 0.0,
                (1, 0) | (0, 1) => 1.0,
                (1, 1) => SQRT_2,
                _ => octile(w[0], w[1]),
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn bresenham_lines() {
        let g = Grid::new(6, 6);
        assert_eq!(
            interpolate(&g, Point::new(0, 0), Point::new(3, 3)),
            pts(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );
        assert_eq!(
            interpolate(&g, Point::new(4, 2), Point::new(1, 2)),
            pts(&[(4, 2), (3, 2), (2, 2), (1, 2)])
        );
        assert_eq!(
            interpolate(&g, Point::new(0, 0), Point::new(4, 2)),
            pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)])
        );
        assert_eq!(
            interpolate(&g, Point::new(2, 2), Point::new(2, 2)),
            pts(&[(2, 2)])
        );
    }

    #[test]
    fn interpolation_stops_at_absent_cell() {
        let g = Grid::from_rows(&[vec![0, 0, 5, 0, 0]]);
        assert_eq!(
            interpolate(&g, Point::new(0, 0), Point::new(4, 0)),
            pts(&[(0, 0), (1, 0)])
        );
        // Walls are present, so they do not stop the line.
        let g = Grid::from_rows(&[vec![0, 9, 0]]);
        assert_eq!(interpolate(&g, Point::new(0, 0), Point::new(2, 0)).len(), 3);
    }

    #[test]
    fn far_waypoints_stop_at_grid_edge() {
        let g = Grid::new(4, 1);
        let path = Path::from_waypoints(&g, &[Point::new(0, 0), Point::new(2_000_000_000, 0)]);
        assert_eq!(path.expand(), pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
        assert!(interpolate(&g, Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)).is_empty());
        assert_eq!(
            interpolate(&g, Point::new(3, 0), Point::new(i32::MIN, i32::MIN)),
            pts(&[(3, 0)])
        );
    }

    #[test]
    fn expand_resumes_after_cut_segment() {
        // (2, 1) is absent, so the middle segment stops at (3, 0).
        let g = Grid::from_ascii(".....\n.. ..\n.....").unwrap();
        let path = Path::from_waypoints(&g, &pts(&[(0, 0), (4, 0), (0, 2), (4, 2)]));
        assert_eq!(
            path.expand(),
            pts(&[
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (3, 0),
                (0, 2),
                (1, 2),
                (2, 2),
                (3, 2),
                (4, 2),
            ])
        );
    }

    #[test]
    fn expand_joins_segments() {
        let g = Grid::new(5, 5);
        let path = Path::from_waypoints(&g, &pts(&[(0, 0), (2, 2), (2, 4), (4, 4)]));
        assert_eq!(path.nodes()[0], Point::new(4, 4));
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.end(), Some(Point::new(4, 4)));
        assert_eq!(
            path.expand(),
            pts(&[(0, 0), (1, 1), (2, 2), (2, 3), (2, 4), (3, 4), (4, 4)])
        );
    }

    #[test]
    fn expand_is_idempotent() {
        let g = Grid::new(8, 8);
        let path = Path::from_waypoints(&g, &pts(&[(0, 7), (3, 4), (3, 1), (7, 1)]));
        let dense = path.expand();
        let again = Path::from_waypoints(&g, &dense).expand();
        assert_eq!(dense, again);
    }

    #[test]
    fn expand_short_paths() {
        let g = Grid::new(2, 2);
        assert!(Path::empty(&g).expand().is_empty());
        let single = Path::from_waypoints(&g, &[Point::new(1, 1)]);
        assert_eq!(single.expand(), vec![Point::new(1, 1)]);
        assert!(single.is_found());
        assert!(!Path::empty(&g).is_found());
    }

    #[test]
    fn accumulators() {
        let mut g = Grid::new(4, 4);
        g.set_weight(Point::new(3, 3), 2.0);
        let path = Path::from_waypoints(&g, &pts(&[(0, 0), (3, 0), (3, 3)]));
        assert_eq!(path.len(), 3);
        assert!((path.distance() - 6.0).abs() < 1e-12);
        assert!((path.weight() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn step_costs() {
        let route = pts(&[(0, 0), (1, 1), (2, 1), (2, 2)]);
        assert!((path_cost(&route) - (SQRT_2 + 2.0)).abs() < 1e-12);
        assert_eq!(path_cost(&[]), 0.0);
        assert_eq!(path_cost(&pts(&[(0, 0), (0, 3)])), 3.0);
    }
}
