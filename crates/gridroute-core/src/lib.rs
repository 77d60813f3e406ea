//! **gridroute-core**: grid model for the *gridroute* pathfinding engine.
//!
//! This crate provides the types every search works over: geometry
//! primitives, the [`Node`] cell record, the sparse [`Grid`] arena that owns
//! the nodes, and the [`MovementType`] policy that decides which diagonal
//! steps a search may take around obstacles.

pub mod error;
pub mod geom;
pub mod grid;
pub mod movement;
pub mod neighbors;
pub mod node;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{END_MARKER, FLOOR, Grid, START_MARKER, WALL};
pub use movement::{MovementType, UnknownMovement};
pub use neighbors::Neighbors;
pub use node::Node;
