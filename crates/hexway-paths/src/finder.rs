use hexway_core::NodeId;

/// A node with an associated travel cost, returned from Dijkstra map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub id: NodeId,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for SearchNode {
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

/// Reference into the search-node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapRef {
    pub(crate) slot: usize,
    pub(crate) f: i32,
}

impl Ord for HeapRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for HeapRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "unreachable" in search results.
///
/// Doubles as the day cost of impassable terrain: a tile priced at
/// `UNREACHABLE` loses to every finite-cost alternative, and cost
/// accumulation saturates here instead of wrapping.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding over a node-indexed graph.
///
/// `PathFinder` owns all internal caches (open lists, node arrays, Dijkstra
/// maps, neighbor scratch buffer) so that repeated queries incur no
/// allocations after the first use. Capacity is the number of node slots;
/// queries naming a node at or beyond it report no path.
pub struct PathFinder {
    pub(crate) capacity: usize,
    // A* caches
    pub(crate) astar_nodes: Vec<SearchNode>,
    pub(crate) astar_generation: u32,
    // Dijkstra caches
    pub(crate) dijkstra_nodes: Vec<SearchNode>,
    pub(crate) dijkstra_generation: u32,
    pub(crate) dijkstra_results: Vec<PathNode>,
    pub(crate) dijkstra_map: Vec<i32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<NodeId>,
}

impl PathFinder {
    /// Create a new `PathFinder` with room for `capacity` node slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            astar_nodes: vec![SearchNode::default(); capacity],
            astar_generation: 0,
            dijkstra_nodes: vec![SearchNode::default(); capacity],
            dijkstra_generation: 0,
            dijkstra_results: Vec::new(),
            dijkstra_map: vec![UNREACHABLE; capacity],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Resize for a graph with `capacity` nodes, reallocating caches as needed.
    ///
    /// If the new size fits within existing allocations, caches are kept and
    /// only generation counters are bumped so stale entries are ignored.
    /// Otherwise caches are reallocated.
    pub fn set_capacity(&mut self, capacity: usize) {
        let old = self.astar_nodes.len();
        self.capacity = capacity;

        if capacity <= old {
            self.astar_generation = self.astar_generation.wrapping_add(1);
            self.dijkstra_generation = self.dijkstra_generation.wrapping_add(1);
            self.dijkstra_results.clear();
            return;
        }

        self.astar_nodes.clear();
        self.astar_nodes.resize(capacity, SearchNode::default());
        self.astar_generation = 0;

        self.dijkstra_nodes.clear();
        self.dijkstra_nodes.resize(capacity, SearchNode::default());
        self.dijkstra_generation = 0;
        self.dijkstra_results.clear();
        self.dijkstra_map.clear();
        self.dijkstra_map.resize(capacity, UNREACHABLE);
    }

    /// The number of node slots this finder can search over.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Convert a `NodeId` to a cache slot. Returns `None` if out of range.
    #[inline]
    pub(crate) fn slot(&self, n: NodeId) -> Option<usize> {
        (n.index() < self.capacity).then_some(n.index())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.capacity.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let capacity = usize::deserialize(deserializer)?;
        Ok(PathFinder::new(capacity))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            id: NodeId::new(7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn pathfinder_round_trip() {
        let pf = PathFinder::new(64);
        let json = serde_json::to_string(&pf).unwrap();
        let back: PathFinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.capacity(), 64);
        // Caches are freshly initialized (not serialized).
        assert_eq!(back.astar_generation, 0);
        assert_eq!(back.dijkstra_map.len(), 64);
    }
}
