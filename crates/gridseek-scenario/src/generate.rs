//! Obstacle placement and endpoint selection.
//!
//! Placement uses rejection sampling: uniform random coordinates are drawn
//! and non-`Empty` hits discarded. The sampling phase is bounded; once the
//! attempt cap is hit the generator switches to enumerating the remaining
//! free cells and drawing from that explicit set, so generation terminates
//! even on nearly (or fully) obstructed grids.

use std::fmt;

use gridseek_core::{CellState, Coord, Grid, GridError};
use log::{debug, warn};
use rand::{Rng, RngExt};

/// Multiplier on the cell count bounding each rejection-sampling phase.
const SAMPLE_CAP_FACTOR: usize = 4;

/// A generated scenario: the endpoints plus the obstacle set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub start: Coord,
    pub goal: Coord,
    /// Obstacle coordinates in placement order.
    pub obstacles: Vec<Coord>,
}

/// Errors from scenario generation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// Requested density outside the open interval (0, 1).
    InvalidDensity(f64),
    /// The grid has no empty cell left to pick from.
    NoFreeCellAvailable,
    /// A grid access failed; indicates a caller bug.
    Grid(GridError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(d) => {
                write!(f, "obstacle density {d} outside the open interval (0, 1)")
            }
            Self::NoFreeCellAvailable => write!(f, "no free cell available on the grid"),
            Self::Grid(e) => write!(f, "grid access failed: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<GridError> for ScenarioError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Draw a uniform random in-bounds coordinate.
fn random_coord(grid: &Grid, rng: &mut impl Rng) -> Coord {
    Coord::new(
        rng.random_range(0..grid.rows()),
        rng.random_range(0..grid.cols()),
    )
}

/// Collect every `Empty` cell in row-major order.
fn free_cells(grid: &Grid) -> Vec<Coord> {
    grid.iter()
        .filter(|&(_, s)| s == CellState::Empty)
        .map(|(c, _)| c)
        .collect()
}

/// Convert `Empty` cells to `Obstacle` until exactly
/// `floor(rows * cols * density)` obstacles have been placed.
///
/// Coordinates already occupied are skipped, so no cell is converted twice
/// and pre-existing markers survive. Returns the placed coordinates.
/// Fails with [`ScenarioError::InvalidDensity`] unless `0 < density < 1`,
/// and with [`ScenarioError::NoFreeCellAvailable`] if the grid runs out of
/// empty cells before the target is met (only possible when the grid was
/// already partially occupied).
pub fn place_obstacles(
    grid: &mut Grid,
    density: f64,
    rng: &mut impl Rng,
) -> Result<Vec<Coord>, ScenarioError> {
    if !(density > 0.0 && density < 1.0) {
        return Err(ScenarioError::InvalidDensity(density));
    }

    let target = (grid.cell_count() as f64 * density) as usize;
    let cap = grid.cell_count() * SAMPLE_CAP_FACTOR;
    let mut placed = Vec::with_capacity(target);

    let mut attempts = 0;
    while placed.len() < target && attempts < cap {
        attempts += 1;
        let c = random_coord(grid, rng);
        if grid.at(c) == Some(CellState::Empty) {
            grid.set(c, CellState::Obstacle)?;
            placed.push(c);
        }
    }

    if placed.len() < target {
        // Dense or pre-occupied grid: stop guessing and draw from the
        // explicit free set instead.
        warn!(
            "rejection sampling capped after {attempts} attempts at {}/{target} obstacles",
            placed.len()
        );
        let mut free = free_cells(grid);
        while placed.len() < target {
            if free.is_empty() {
                return Err(ScenarioError::NoFreeCellAvailable);
            }
            let c = free.swap_remove(rng.random_range(0..free.len()));
            grid.set(c, CellState::Obstacle)?;
            placed.push(c);
        }
    }

    debug!(
        "placed {} obstacles on a {}x{} grid",
        placed.len(),
        grid.rows(),
        grid.cols()
    );
    Ok(placed)
}

/// Pick a uniform random `Empty` cell without mutating the grid.
///
/// Sampling is bounded; once the attempt cap is hit the free cells are
/// enumerated and one drawn directly. Fails with
/// [`ScenarioError::NoFreeCellAvailable`] on a grid with no empty cell.
pub fn pick_free_cell(grid: &Grid, rng: &mut impl Rng) -> Result<Coord, ScenarioError> {
    let cap = grid.cell_count() * SAMPLE_CAP_FACTOR;
    for _ in 0..cap {
        let c = random_coord(grid, rng);
        if grid.at(c) == Some(CellState::Empty) {
            return Ok(c);
        }
    }

    let free = free_cells(grid);
    if free.is_empty() {
        return Err(ScenarioError::NoFreeCellAvailable);
    }
    Ok(free[rng.random_range(0..free.len())])
}

/// Pick two distinct free cells and mark them `Start` and `Goal`.
///
/// The start cell is marked before the goal is drawn, so the two picks can
/// never collide. Fails with [`ScenarioError::NoFreeCellAvailable`] when
/// fewer than two empty cells exist.
pub fn place_start_and_goal(
    grid: &mut Grid,
    rng: &mut impl Rng,
) -> Result<(Coord, Coord), ScenarioError> {
    let start = pick_free_cell(grid, rng)?;
    grid.set(start, CellState::Start)?;
    let goal = pick_free_cell(grid, rng)?;
    grid.set(goal, CellState::Goal)?;
    Ok((start, goal))
}

/// Build a complete scenario: obstacles first, then the endpoints.
///
/// Mutates the grid in place and returns the chosen coordinates. The grid
/// is expected to arrive fully `Empty`; anything already on it is treated
/// as occupied and preserved.
pub fn generate_scenario(
    grid: &mut Grid,
    density: f64,
    rng: &mut impl Rng,
) -> Result<Scenario, ScenarioError> {
    let obstacles = place_obstacles(grid, density, rng)?;
    let (start, goal) = place_start_and_goal(grid, rng)?;
    debug!(
        "scenario ready: {} obstacles, start {start}, goal {goal}",
        obstacles.len()
    );
    Ok(Scenario {
        start,
        goal,
        obstacles,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn scenario_round_trip() {
        let scenario = Scenario {
            start: Coord::new(0, 1),
            goal: Coord::new(4, 4),
            obstacles: vec![Coord::new(2, 2), Coord::new(3, 1)],
        };
        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, back);
    }
}
