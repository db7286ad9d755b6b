//! Textual rendering of grids and paths.

use std::collections::HashSet;

use gridseek_core::{CellState, Coord, Grid};

/// Render the grid as bordered text, one glyph per cell.
///
/// When `path` is given, its cells are drawn with the `*` glyph, but only
/// where the underlying cell is `Empty` — the `S` and `G` markers are never
/// overdrawn. Pure function: the same inputs always yield the same text.
pub fn render(grid: &Grid, path: Option<&[Coord]>) -> String {
    let on_path: HashSet<Coord> = path.unwrap_or_default().iter().copied().collect();
    let mut out = String::new();
    for row in 0..grid.rows() {
        out.push('|');
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            let state = grid.at(c).unwrap_or_default();
            let glyph = if state == CellState::Empty && on_path.contains(&c) {
                CellState::OnPath.glyph()
            } else {
                state.glyph()
            };
            out.push(' ');
            out.push(glyph);
        }
        out.push_str(" |\n");
    }
    out
}

/// Persist a found path onto the grid, converting its `Empty` cells to
/// `OnPath`. Non-empty cells (the `S`/`G` markers in particular) are left
/// untouched.
pub fn mark_path(grid: &mut Grid, path: &[Coord]) {
    for &c in path {
        if grid.at(c) == Some(CellState::Empty) {
            grid.set(c, CellState::OnPath).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> (Grid, Coord, Coord) {
        let mut grid = Grid::new(3, 4).unwrap();
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 3);
        grid.set(start, CellState::Start).unwrap();
        grid.set(goal, CellState::Goal).unwrap();
        grid.set(Coord::new(1, 1), CellState::Obstacle).unwrap();
        (grid, start, goal)
    }

    #[test]
    fn renders_expected_glyphs() {
        let (grid, _, _) = sample_grid();
        let text = render(&grid, None);
        assert_eq!(text, "| S . . . |\n| . # . . |\n| . . . G |\n");
    }

    #[test]
    fn rendering_is_idempotent() {
        let (grid, _, _) = sample_grid();
        let path = [Coord::new(1, 0), Coord::new(2, 0)];
        assert_eq!(render(&grid, Some(&path)), render(&grid, Some(&path)));
    }

    #[test]
    fn path_overlay_never_covers_markers() {
        let (grid, _, goal) = sample_grid();
        // A path ends on the goal cell; the G glyph must survive.
        let path = [
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(2, 1),
            Coord::new(2, 2),
            goal,
        ];
        let text = render(&grid, Some(&path));
        assert_eq!(text, "| S . . . |\n| * # . . |\n| * * * G |\n");
    }

    #[test]
    fn mark_path_matches_overlay_rendering() {
        let (mut grid, _, goal) = sample_grid();
        let path = [
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(0, 3),
            Coord::new(1, 3),
            goal,
        ];
        let overlay = render(&grid, Some(&path));
        mark_path(&mut grid, &path);
        assert_eq!(render(&grid, None), overlay);
        assert_eq!(grid.at(goal), Some(CellState::Goal));
    }
}
