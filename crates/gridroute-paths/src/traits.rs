use gridroute_core::{Grid, MovementType, Point};

use crate::heuristic::HeuristicType;
use crate::options::SearchOptions;
use crate::path::Path;

/// A search that routes between two cells of a [`Grid`].
///
/// Implementors own their per-run state, so one finder can serve many
/// queries without reallocating, and two finders may search the same grid
/// independently.
pub trait PathFinder {
    /// Search from `start` to `end` under `opts`.
    ///
    /// Never fails: an absent endpoint yields an empty path, and an
    /// unreachable goal yields a path whose [`is_found`](Path::is_found) is
    /// `false`.
    fn find_path_with<'g>(
        &mut self,
        grid: &'g Grid,
        start: Point,
        end: Point,
        opts: &SearchOptions,
    ) -> Path<'g>;

    /// Search with the given heuristic and movement policy and unweighted
    /// step costs.
    fn find_path<'g>(
        &mut self,
        grid: &'g Grid,
        start: Point,
        end: Point,
        heuristic: HeuristicType,
        movement: MovementType,
    ) -> Path<'g> {
        self.find_path_with(grid, start, end, &SearchOptions::new(heuristic, movement))
    }
}
