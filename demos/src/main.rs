//! Command-line demo: find a route across a text map or a generated cave
//! and print it.
//!
//! Run: cargo run --bin gridroute -- [map-file|-] [astar|jps|both] [movement-code] [heuristic-code]
//!
//! Set `RUST_LOG=debug` to see the search summaries.

use std::env;
use std::fs;

use gridroute_core::{Grid, MovementType, Point};
use gridroute_paths::{AStar, HeuristicType, JumpPointSearch, Path, PathFinder, SearchOptions};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const CAVE_WIDTH: i32 = 60;
const CAVE_HEIGHT: i32 = 24;
const CAVE_SEED: u64 = 42;
const WALL_INIT: f64 = 0.42;
const SMOOTH_PASSES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    AStar,
    Jps,
    Both,
}

impl Algorithm {
    fn parse(s: &str) -> Result<Self, String> {
        match s {
            "astar" => Ok(Self::AStar),
            "jps" => Ok(Self::Jps),
            "both" => Ok(Self::Both),
            other => Err(format!("unknown algorithm {other:?} (expected astar, jps or both)")),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let grid = match args.first().map(String::as_str) {
        None | Some("-") => cave(CAVE_WIDTH, CAVE_HEIGHT, CAVE_SEED),
        Some(file) => Grid::from_ascii(&fs::read_to_string(file)?)?,
    };
    let algorithm = match args.get(1) {
        Some(s) => Algorithm::parse(s)?,
        None => Algorithm::Both,
    };
    let movement = match args.get(2) {
        Some(s) => MovementType::try_from(s.parse::<u8>()?)?,
        None => MovementType::default(),
    };
    let heuristic = match args.get(3) {
        Some(s) => HeuristicType::from(s.parse::<u8>()?),
        None => HeuristicType::Octile,
    };
    let opts = SearchOptions::new(heuristic, movement);

    let (start, end) = endpoints(&grid).ok_or("map has no walkable cells")?;
    log::info!(
        "{}x{} map, {} nodes, {start} -> {end}, {movement}, {heuristic:?}",
        grid.bounds().width(),
        grid.bounds().height(),
        grid.len()
    );

    if matches!(algorithm, Algorithm::AStar | Algorithm::Both) {
        let mut finder = AStar::new();
        let path = finder.find_path_with(&grid, start, end, &opts);
        report("A*", &path, finder.state().closed_count(), 0);
    }
    if matches!(algorithm, Algorithm::Jps | Algorithm::Both) {
        let mut finder = JumpPointSearch::new();
        let path = finder.find_path_with(&grid, start, end, &opts);
        report(
            "JPS",
            &path,
            finder.state().closed_count(),
            finder.state().tested_count(),
        );
    }
    Ok(())
}

/// Start and end markers when the map has them, otherwise the first and
/// last walkable cells in row order.
fn endpoints(grid: &Grid) -> Option<(Point, Point)> {
    let mut walkable = grid.bounds().into_iter().filter(|&p| grid.is_walkable(p));
    let first = walkable.next()?;
    let last = walkable.last().unwrap_or(first);
    Some((
        grid.start_marker().unwrap_or(first),
        grid.end_marker().unwrap_or(last),
    ))
}

fn report(name: &str, path: &Path<'_>, closed: usize, tested: usize) {
    let route = path.expand();
    println!("{name}:");
    println!("{}", render(path.grid(), &route));
    println!(
        "found: {}  stored nodes: {}  cells: {}  distance: {:.3}  closed: {closed}  tested: {tested}\n",
        path.is_found(),
        path.len(),
        route.len(),
        path.distance()
    );
}

/// The map with route cells drawn as `*`.
fn render(grid: &Grid, route: &[Point]) -> String {
    let bounds = grid.bounds();
    let mut rows = Vec::with_capacity(bounds.height() as usize);
    for y in bounds.min.y..bounds.max.y {
        let row: String = (bounds.min.x..bounds.max.x)
            .map(|x| {
                let p = Point::new(x, y);
                match grid.node(p) {
                    None => ' ',
                    Some(_) if route.first() == Some(&p) => 'S',
                    Some(_) if route.last() == Some(&p) => 'E',
                    Some(_) if route.contains(&p) => '*',
                    Some(n) if n.walkable => '.',
                    Some(_) => '#',
                }
            })
            .collect();
        rows.push(row);
    }
    rows.join("\n")
}

/// Cellular-automaton cave: random walls, then a few smoothing passes where
/// a cell becomes a wall when five or more of its 3×3 block are walls.
/// Out-of-bounds cells count as walls. The corners used as default
/// endpoints are cleared.
fn cave(width: i32, height: i32, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(width, height);
    for p in grid.bounds() {
        let r: f64 = rng.random();
        if r < WALL_INIT {
            grid.set_walkable(p, false);
        }
    }

    for _ in 0..SMOOTH_PASSES {
        let walls: Vec<(Point, bool)> = grid
            .bounds()
            .into_iter()
            .map(|p| {
                let count = (-1..=1)
                    .flat_map(|dy| (-1..=1).map(move |dx| p.shift(dx, dy)))
                    .filter(|&q| !grid.is_walkable(q))
                    .count();
                (p, count >= 5)
            })
            .collect();
        for (p, wall) in walls {
            grid.set_walkable(p, !wall);
        }
    }

    for corner in [Point::new(0, 0), Point::new(width - 1, height - 1)] {
        for dy in -1..=1 {
            for dx in -1..=1 {
                grid.set_walkable(corner.shift(dx, dy), true);
            }
        }
    }
    grid
}
