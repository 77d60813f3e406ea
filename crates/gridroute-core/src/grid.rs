//! The [`Grid`] type: a sparse 2D arena of [`Node`]s.
//!
//! Nodes live in a dense slot array covering the grid's bounding [`Range`].
//! A slot may be empty: such a coordinate is *absent*, which is distinct
//! from a node that exists but is not walkable. Searches refer to cells by
//! their slot index (see [`Grid::index`]), never by owning pointers.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::movement::MovementType;
use crate::neighbors::Neighbors;
use crate::node::Node;

/// Array cell value for a walkable floor cell.
pub const FLOOR: i32 = 0;
/// Array cell value marking the suggested start (walkable).
pub const START_MARKER: i32 = 1;
/// Array cell value marking the suggested end (walkable).
pub const END_MARKER: i32 = 2;
/// Array cell value for a wall (present, not walkable).
pub const WALL: i32 = 9;

/// A sparse 2D collection of nodes indexed by coordinate.
///
/// The grid is the sole owner of its nodes, holding at most one node per
/// coordinate. It is never mutated by a search.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    bounds: Range,
    width: usize,
    slots: Vec<Option<Node>>,
    count: usize,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Create a fully walkable `width × height` grid with its origin at
    /// (0, 0).
    pub fn new(width: i32, height: i32) -> Self {
        let mut grid = Self::with_bounds(Range::new(0, 0, width.max(0), height.max(0)));
        for p in grid.bounds.iter() {
            grid.put(p, Node::new(p));
        }
        grid
    }

    /// Create an empty grid able to hold nodes inside `bounds`.
    pub fn with_bounds(bounds: Range) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            width: bounds.width().max(0) as usize,
            slots: vec![None; len],
            count: 0,
            start: None,
            end: None,
        }
    }

    /// Build a grid from rows of cell values.
    ///
    /// [`FLOOR`], [`START_MARKER`] and [`END_MARKER`] become walkable nodes,
    /// [`WALL`] becomes a non-walkable node and any other value leaves the
    /// coordinate absent. Rows may have different lengths. The first start
    /// and end markers found in row-major order are remembered; they are
    /// advisory only.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Self {
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut grid = Self::with_bounds(Range::new(0, 0, width as i32, rows.len() as i32));

        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match value {
                    FLOOR => grid.put(p, Node::new(p)),
                    START_MARKER => {
                        grid.put(p, Node::new(p));
                        grid.start.get_or_insert(p);
                    }
                    END_MARKER => {
                        grid.put(p, Node::new(p));
                        grid.end.get_or_insert(p);
                    }
                    WALL => grid.put(p, Node::wall(p)),
                    _ => {}
                }
            }
        }
        grid
    }

    /// Build a grid from a text map.
    ///
    /// `.` is floor, `#` is wall, `S` and `E` are walkable start/end markers
    /// and a space leaves the coordinate absent. Blank lines before and after
    /// the map are ignored; lines may have different lengths.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let s = s.trim_matches(|c: char| c == '\n' || c == '\r');
        let mut rows = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let value = match ch {
                    '.' => FLOOR,
                    '#' => WALL,
                    'S' => START_MARKER,
                    'E' => END_MARKER,
                    ' ' => -1,
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                row.push(value);
            }
            rows.push(row);
        }
        Ok(Self::from_rows(&rows))
    }

    /// The bounding range of the slot storage.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of nodes present (walkable or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the grid holds no node at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots, i.e. the exclusive upper bound of slot indices.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot index of `p`, or `None` if `p` lies outside the bounds. The slot
    /// itself may still be empty.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Coordinate of a slot index.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.bounds.min.x;
        let y = (idx / self.width) as i32 + self.bounds.min.y;
        Point::new(x, y)
    }

    /// The node at `p`, if any.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.index(p).and_then(|i| self.slots[i].as_ref())
    }

    /// The node at `(x, y)`, if any.
    #[inline]
    pub fn node_at(&self, x: i32, y: i32) -> Option<&Node> {
        self.node(Point::new(x, y))
    }

    /// The node stored in slot `idx`, if any.
    #[inline]
    pub fn node_by_index(&self, idx: usize) -> Option<&Node> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    /// Whether a node exists at `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.node(p).is_some()
    }

    /// Whether `p` holds a walkable node. Absent coordinates are not
    /// walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| n.walkable)
    }

    /// Same as [`is_walkable`](Self::is_walkable) with separate coordinates.
    #[inline]
    pub fn is_walkable_at(&self, x: i32, y: i32) -> bool {
        self.is_walkable(Point::new(x, y))
    }

    /// Traversal weight of the node at `p`.
    #[inline]
    pub fn weight(&self, p: Point) -> Option<f64> {
        self.node(p).map(|n| n.weight)
    }

    /// Walkable neighbours of `p` reachable in one step under `movement`.
    ///
    /// See [`Neighbors`] for the ordering and diagonal rules; use it directly
    /// to avoid allocating in a loop.
    pub fn neighbors(&self, p: Point, movement: MovementType) -> Vec<Point> {
        Neighbors::new().of(self, p, movement).to_vec()
    }

    /// Insert a node, replacing and returning any node at the same position.
    pub fn insert(&mut self, node: Node) -> Result<Option<Node>, GridError> {
        let Some(i) = self.index(node.pos) else {
            return Err(GridError::OutOfBounds {
                pos: node.pos,
                bounds: self.bounds,
            });
        };
        let old = self.slots[i].replace(node);
        if old.is_none() {
            self.count += 1;
        }
        Ok(old)
    }

    /// Remove the node at `p`, making the coordinate absent.
    pub fn remove(&mut self, p: Point) -> Option<Node> {
        let i = self.index(p)?;
        let old = self.slots[i].take();
        if old.is_some() {
            self.count -= 1;
        }
        old
    }

    /// Set the walkability of an existing node. Returns `false` if `p` is
    /// absent.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> bool {
        self.node_mut(p).map(|n| n.walkable = walkable).is_some()
    }

    /// Set the weight of an existing node. Returns `false` if `p` is absent.
    pub fn set_weight(&mut self, p: Point, weight: f64) -> bool {
        self.node_mut(p).map(|n| n.weight = weight).is_some()
    }

    /// First start marker found while building from rows or text.
    #[inline]
    pub fn start_marker(&self) -> Option<Point> {
        self.start
    }

    /// First end marker found while building from rows or text.
    #[inline]
    pub fn end_marker(&self) -> Option<Point> {
        self.end
    }

    /// Row-major iterator over the nodes present.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.slots.iter().flatten()
    }

    fn node_mut(&mut self, p: Point) -> Option<&mut Node> {
        let i = self.index(p)?;
        self.slots[i].as_mut()
    }

    fn put(&mut self, p: Point, node: Node) {
        if let Some(i) = self.index(p) {
            if self.slots[i].replace(node).is_none() {
                self.count += 1;
            }
        }
    }
}

/// Renders the grid in the [`from_ascii`](Grid::from_ascii) format.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.bounds.min.y..self.bounds.max.y {
            if y > self.bounds.min.y {
                writeln!(f)?;
            }
            for x in self.bounds.min.x..self.bounds.max.x {
                let p = Point::new(x, y);
                let ch = match self.node(p) {
                    None => ' ',
                    Some(_) if self.start == Some(p) => 'S',
                    Some(_) if self.end == Some(p) => 'E',
                    Some(n) if n.walkable => '.',
                    Some(_) => '#',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
