//! Grid-backed pather and the one-shot search entry point.

use gridseek_core::{Coord, Grid};

use crate::field::SearchField;
use crate::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Pather over a borrowed [`Grid`]: 4-directional moves across passable
/// cells, unit cost per move, Manhattan estimate.
pub struct GridPather<'a> {
    grid: &'a Grid,
}

impl<'a> GridPather<'a> {
    /// Create a pather reading the given grid.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4() {
            if self.grid.is_passable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, _from: Coord, _to: Coord) -> i32 {
        1
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        manhattan(from, to)
    }
}

/// Compute a shortest obstacle-avoiding path from `start` to `goal`.
///
/// Returns the ordered coordinates from the first step after `start`
/// through `goal` (start excluded, goal included), or `None` if no path
/// exists — a legitimate outcome, not an error. Each call is a fresh run
/// over the borrowed grid; callers issuing many queries over one grid can
/// reuse a [`SearchField`] directly to amortize allocations.
pub fn find_path(grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    let mut field = SearchField::new(grid.rows(), grid.cols());
    field.astar_path(&GridPather::new(grid), start, goal)
}
