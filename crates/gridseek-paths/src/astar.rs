use std::collections::BinaryHeap;

use gridseek_core::Coord;

use crate::SearchField;
use crate::field::NodeRef;
use crate::traits::AstarPather;

impl SearchField {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the ordered path from the first step after `from` through
    /// `to` (start excluded, goal included), or `None` if no path exists.
    /// `from == to` yields an empty path.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Vec<Coord>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(Vec::new());
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            g: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_coord = self.coord(ci);

            nbuf.clear();
            pather.neighbors(current_coord, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_coord, nc);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(nc, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    g: tentative_g,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct the path by following parent links back to the start.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
