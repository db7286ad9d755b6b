use std::collections::VecDeque;

use gridseek_core::Coord;

use crate::SearchField;
use crate::field::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl SearchField {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns a slice of all reached nodes. With uniform step
    /// costs the distances are exact shortest-path lengths, which makes
    /// this map an independent check on [`astar_path`](Self::astar_path).
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Coord],
        max_dist: i32,
    ) -> &[PathNode] {
        // Reset.
        for v in self.bfs_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.bfs_results.clear();

        let mut queue: VecDeque<usize> = VecDeque::new();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                if self.bfs_map[si] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[si] = 0;
                queue.push_back(si);
                self.bfs_results.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cc = self.coord(ci);

            nbuf.clear();
            pather.neighbors(cc, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.bfs_map[ni] = nd;
                queue.push_back(ni);
                self.bfs_results.push(PathNode { pos: nc, cost: nd });
            }
        }

        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Query the BFS distance at a specific coordinate.
    ///
    /// Returns [`UNREACHABLE`] if the coordinate is outside the field or
    /// was not reached by the last `bfs_map` call.
    pub fn bfs_at(&self, c: Coord) -> i32 {
        match self.idx(c) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pather::GridPather;
    use gridseek_core::{CellState, Grid};

    #[test]
    fn distances_on_open_grid() {
        let grid = Grid::new(3, 3).unwrap();
        let mut field = SearchField::new(3, 3);
        let reached = field
            .bfs_map(&GridPather::new(&grid), &[Coord::new(0, 0)], i32::MAX)
            .len();
        assert_eq!(reached, 9);
        assert_eq!(field.bfs_at(Coord::new(0, 0)), 0);
        assert_eq!(field.bfs_at(Coord::new(1, 1)), 2);
        assert_eq!(field.bfs_at(Coord::new(2, 2)), 4);
    }

    #[test]
    fn obstacles_block_expansion() {
        let mut grid = Grid::new(3, 3).unwrap();
        // Wall off the middle column.
        for row in 0..3 {
            grid.set(Coord::new(row, 1), CellState::Obstacle).unwrap();
        }
        let mut field = SearchField::new(3, 3);
        field.bfs_map(&GridPather::new(&grid), &[Coord::new(0, 0)], i32::MAX);
        assert_eq!(field.bfs_at(Coord::new(2, 0)), 2);
        assert_eq!(field.bfs_at(Coord::new(0, 2)), UNREACHABLE);
    }

    #[test]
    fn max_dist_caps_expansion() {
        let grid = Grid::new(5, 5).unwrap();
        let mut field = SearchField::new(5, 5);
        field.bfs_map(&GridPather::new(&grid), &[Coord::new(0, 0)], 2);
        assert_eq!(field.bfs_at(Coord::new(1, 1)), 2);
        assert_eq!(field.bfs_at(Coord::new(4, 4)), UNREACHABLE);
    }

    #[test]
    fn multi_source_takes_nearest() {
        let grid = Grid::new(3, 5).unwrap();
        let mut field = SearchField::new(3, 5);
        field.bfs_map(
            &GridPather::new(&grid),
            &[Coord::new(0, 0), Coord::new(0, 4)],
            i32::MAX,
        );
        assert_eq!(field.bfs_at(Coord::new(0, 2)), 2);
        assert_eq!(field.bfs_at(Coord::new(0, 3)), 1);
    }
}
