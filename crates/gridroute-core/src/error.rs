use std::fmt;

use crate::geom::{Point, Range};

/// Errors that can occur while building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A text map contained a character with no cell meaning.
    InvalidChar { ch: char, pos: Point },
    /// A node was placed outside the grid's fixed bounds.
    OutOfBounds { pos: Point, bounds: Range },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid map character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "grid: position {pos} outside bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for GridError {}
