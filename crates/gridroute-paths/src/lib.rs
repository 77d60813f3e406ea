//! Pathfinding over weighted 2D grids.
//!
//! Two finders share the [`PathFinder`] interface:
//!
//! - **A\*** ([`AStar`]): classic best-first search with unit straight and
//!   √2 diagonal steps.
//! - **Jump Point Search** ([`JumpPointSearch`]): an A* variant that skips
//!   over symmetric routes and stores only jump points.
//!
//! Both take a [`HeuristicType`] and a [`MovementType`] per query and return
//! a [`Path`] borrowing the searched [`Grid`](gridroute_core::Grid). Each
//! finder owns its [`SearchState`], so the grid itself is never mutated and
//! repeated queries reuse the same storage.
//!
//! [`MovementType`]: gridroute_core::MovementType

mod astar;
mod frontier;
mod heuristic;
mod jps;
mod options;
mod path;
mod state;
mod traits;

#[cfg(test)]
mod testutil;

pub use astar::AStar;
pub use frontier::Frontier;
pub use heuristic::{
    HeuristicType, MINKOWSKI_P, bray_curtis, canberra, chebyshev, euclidean, manhattan, metric,
    minkowski, octile,
};
pub use jps::JumpPointSearch;
pub use options::SearchOptions;
pub use path::{Path, interpolate, path_cost};
pub use state::{SearchState, Slot};
pub use traits::PathFinder;
