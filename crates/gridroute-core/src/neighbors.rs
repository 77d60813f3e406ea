use crate::geom::Point;
use crate::grid::Grid;
use crate::movement::MovementType;

/// Cached neighbor computation helper.
///
/// Enumerates the walkable neighbours of a cell under a [`MovementType`],
/// reusing one buffer across calls. Orthogonal neighbours come first in
/// N, E, S, W order, followed by the admitted diagonals in NW, NE, SE, SW
/// order.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the neighbours of `p` in `grid` that a step under `movement`
    /// may reach.
    pub fn of(&mut self, grid: &Grid, p: Point, movement: MovementType) -> &[Point] {
        self.buf.clear();

        // s[i]: walkability of N, E, S, W
        let mut s = [false; 4];
        for (i, n) in p.neighbors_4().into_iter().enumerate() {
            if grid.is_walkable(n) {
                s[i] = true;
                self.buf.push(n);
            }
        }

        if movement == MovementType::Straight {
            return &self.buf;
        }

        let flanks = [(s[0], s[3]), (s[0], s[1]), (s[2], s[1]), (s[2], s[3])];
        for (d, (a, b)) in p.diagonals().into_iter().zip(flanks) {
            if movement.allows_diagonal(a, b) && grid.is_walkable(d) {
                self.buf.push(d);
            }
        }
        &self.buf
    }
}
