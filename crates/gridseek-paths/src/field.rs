use gridseek_core::Coord;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Coord,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on f so BinaryHeap (max-heap) pops smallest f first.
        // Equal f prefers the larger g, keeping tie-breaking deterministic.
        other.f.cmp(&self.f).then(self.g.cmp(&other.g))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// SearchField
// ---------------------------------------------------------------------------

/// Central coordinator for searches over a rows×cols grid rectangle.
///
/// `SearchField` owns all internal caches (the A* node array, the BFS
/// distance map, the neighbor scratch buffer) so that repeated queries
/// incur no allocations after the first use. It carries no scenario state:
/// each query is a fresh run, with previous results lazily invalidated by
/// a generation bump.
pub struct SearchField {
    rows: i32,
    cols: i32,
    // A* caches
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl SearchField {
    /// Create a new `SearchField` for a rows×cols grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
            nodes: vec![Node::default(); len],
            generation: 0,
            bfs_map: vec![UNREACHABLE; len],
            bfs_results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Number of rows covered by this field.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns covered by this field.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols {
            Some((c.row * self.cols + c.col) as usize)
        } else {
            None
        }
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }
}
