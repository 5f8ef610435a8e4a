//! # warehouse_pathfinding
//!
//! Shortest path lengths on character floor plans. A floor plan is a rectangular grid of
//! characters where `S` marks the start, `G` marks the goal and `#` marks an obstacle; every
//! other character is free space. Movement is restricted to the four cardinal directions at
//! unit cost, and the distance is found with a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search).
//!
//! ```
//! use warehouse_pathfinding::shortest_path_length;
//!
//! let grid: Vec<Vec<char>> = ["S.#.G", "#....", ".#..#", "..#.."]
//!     .iter()
//!     .map(|row| row.chars().collect())
//!     .collect();
//! assert_eq!(shortest_path_length(&grid), 6);
//! ```
pub mod bfs;
pub mod floor_plan;
pub mod input;

pub use floor_plan::{FloorPlan, FloorPlanError};

use log::warn;

pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const OBSTACLE: char = '#';
pub const FREE: char = '.';

/// Returned by [shortest_path_length] when no path exists or the grid is unusable.
pub const UNREACHABLE: i32 = -1;

const N_SMALLVEC_SIZE: usize = 4;

/// Computes the minimum number of orthogonal moves from the `S` cell to the `G` cell.
///
/// Malformed input is reported as an error, while an empty grid, a missing marker or an
/// unreachable goal all give `Ok(None)`.
pub fn try_shortest_path_length(grid: &[Vec<char>]) -> Result<Option<usize>, FloorPlanError> {
    let plan = FloorPlan::from_rows(grid)?;
    Ok(plan.shortest_path_length())
}

/// Computes the minimum number of orthogonal moves from the `S` cell to the `G` cell, or
/// [UNREACHABLE] if the grid is empty, a marker is missing, the goal cannot be reached or
/// the rows differ in length. Use [try_shortest_path_length] to tell malformed input apart.
pub fn shortest_path_length(grid: &[Vec<char>]) -> i32 {
    match try_shortest_path_length(grid) {
        Ok(Some(distance)) => distance_to_sentinel(distance),
        Ok(None) => UNREACHABLE,
        Err(e) => {
            warn!("Rejecting floor plan: {}", e);
            UNREACHABLE
        }
    }
}

/// Distances beyond [i32::MAX] cannot be told apart from a valid answer, so they map to
/// [UNREACHABLE].
fn distance_to_sentinel(distance: usize) -> i32 {
    i32::try_from(distance).unwrap_or_else(|_| {
        warn!("Distance {} does not fit the sentinel range", distance);
        UNREACHABLE
    })
}
