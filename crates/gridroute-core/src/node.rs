use crate::geom::Point;

/// Default traversal weight of a freshly created node.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A single addressable grid cell: position, walkability and weight.
///
/// Equality and hashing only look at the position, so two nodes describing
/// the same cell compare equal even if their attributes differ.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    /// Traversal cost multiplier.
    pub weight: f64,
    pub walkable: bool,
}

impl Node {
    /// A walkable node with the default weight.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            weight: DEFAULT_WEIGHT,
            walkable: true,
        }
    }

    /// A non-walkable node.
    pub const fn wall(pos: Point) -> Self {
        Self {
            pos,
            weight: DEFAULT_WEIGHT,
            walkable: false,
        }
    }

    /// Builder-style weight setter.
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}
