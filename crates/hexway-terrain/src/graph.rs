//! Hex terrain graphs: construction, mutation and lookup.

use hexway_core::{Bounds, NodeId, Vec3};
use hexway_paths::{AstarPather, Pather, UNREACHABLE, WeightedPather, euclidean};
use rand::Rng;

use crate::hex::neighbor_positions;
use crate::terrain::Terrain;

/// One hexagonal tile: a fixed position and a mutable terrain kind.
///
/// Travel cost is always derived from the kind, never stored, so it cannot
/// drift out of sync when the kind changes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Vec3,
    pub terrain: Terrain,
}

impl Node {
    /// Days it takes to step onto this tile.
    #[inline]
    pub fn day_cost(&self) -> i32 {
        self.terrain.day_cost()
    }
}

/// Parameters for [`TerrainGraph::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildParams {
    /// Position of the seed tile.
    pub origin: Vec3,
    /// Extent of the map box. The box is centered on the coordinate origin,
    /// not on `origin`.
    pub area_size: Vec3,
    /// Tile footprint: x is the horizontal spacing, y the row height.
    pub hex_size: Vec3,
    /// Hard cap on the number of tiles.
    pub max_nodes: usize,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            area_size: Vec3::new(10.0, 10.0, 0.0),
            hex_size: Vec3::new(1.0, 1.0, 0.0),
            max_nodes: 500,
        }
    }
}

/// A bounded graph of hexagonal tiles with terrain-priced travel.
///
/// Nodes are stored densely and addressed by [`NodeId`]; adjacency is a
/// per-node deduplicated list of at most six entries, populated from both
/// sides at link time so edges are symmetric by construction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGraph {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<NodeId>>,
}

impl TerrainGraph {
    /// Grow a graph breadth-first from `params.origin`.
    ///
    /// Each tile in creation order proposes its six hex neighbor positions;
    /// candidates strictly inside the map box either link to the tile
    /// already there (tolerant position match) or become a new tile with a
    /// random terrain kind, while the count stays below `max_nodes`.
    ///
    /// Construction never fails: a zero `max_nodes` yields an empty graph,
    /// and a degenerate area yields the seed tile alone. Reaching the cap
    /// just stops growth.
    pub fn build(params: &BuildParams, rng: &mut impl Rng) -> Self {
        let mut graph = Self::default();
        if params.max_nodes == 0 {
            return graph;
        }

        let bounds = Bounds::centered(params.area_size);
        graph.push_node(params.origin, Terrain::sample(rng));

        let mut capped = false;
        let mut i = 0;
        while i < graph.nodes.len() {
            let center = graph.nodes[i].pos;
            for candidate in neighbor_positions(center, params.hex_size) {
                if !bounds.contains(candidate) {
                    continue;
                }
                match graph.find_node(candidate) {
                    Some(existing) => graph.link(NodeId::new(i), existing),
                    None if graph.nodes.len() < params.max_nodes => {
                        let id = graph.push_node(candidate, Terrain::sample(rng));
                        graph.link(NodeId::new(i), id);
                    }
                    None => capped = true,
                }
            }
            i += 1;
        }

        if capped {
            log::debug!(
                "tile cap of {} reached before the area was filled",
                params.max_nodes
            );
        }
        log::debug!("built terrain graph: {} tiles", graph.len());
        graph
    }

    fn push_node(&mut self, pos: Vec3, terrain: Terrain) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node { pos, terrain });
        self.adjacency.push(Vec::new());
        id
    }

    /// Record the edge between `a` and `b` on both sides, ignoring
    /// duplicates and self-links.
    fn link(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        if !self.adjacency[a.index()].contains(&b) {
            self.adjacency[a.index()].push(b);
        }
        if !self.adjacency[b.index()].contains(&a) {
            self.adjacency[b.index()].push(a);
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no tiles at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The tile behind a handle, if the handle belongs to this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Position of a tile.
    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Vec3> {
        self.node(id).map(|n| n.pos)
    }

    /// Terrain kind of a tile.
    #[inline]
    pub fn terrain(&self, id: NodeId) -> Option<Terrain> {
        self.node(id).map(|n| n.terrain)
    }

    /// Days it takes to step onto a tile; [`UNREACHABLE`] for unknown handles.
    #[inline]
    pub fn day_cost(&self, id: NodeId) -> i32 {
        self.node(id).map_or(UNREACHABLE, Node::day_cost)
    }

    /// Neighbors of a tile; empty for unknown handles.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// The tile at `pos`, matched with planar float tolerance.
    ///
    /// Tolerance matching rules out a hashed index, so this is a scan over
    /// the node list, bounded by `max_nodes`.
    pub fn find_node(&self, pos: Vec3) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.pos.same_tile(pos))
            .map(NodeId::new)
    }

    /// Iterate over all tiles with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i), n))
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Put `kind` on a tile. Returns the kind now in place, or `None` for an
    /// unknown handle.
    pub fn set_terrain(&mut self, id: NodeId, kind: Terrain) -> Option<Terrain> {
        let node = self.nodes.get_mut(id.index())?;
        node.terrain = kind;
        Some(kind)
    }

    /// Advance a tile to the successor terrain kind, wrapping after the last.
    pub fn advance_terrain(&mut self, id: NodeId) -> Option<Terrain> {
        let next = self.terrain(id)?.next();
        self.set_terrain(id, next)
    }

    /// Put a uniformly random terrain kind on a tile.
    pub fn randomize_terrain(&mut self, id: NodeId, rng: &mut impl Rng) -> Option<Terrain> {
        self.node(id)?;
        self.set_terrain(id, Terrain::sample(rng))
    }
}

// ---------------------------------------------------------------------------
// Search contract
// ---------------------------------------------------------------------------

impl Pather for TerrainGraph {
    fn neighbors(&self, n: NodeId, buf: &mut Vec<NodeId>) {
        buf.extend_from_slice(self.neighbors(n));
    }
}

impl WeightedPather for TerrainGraph {
    /// Stepping onto a tile costs that tile's own days; the edge weight is
    /// a property of the destination, not the pair.
    fn cost(&self, _from: NodeId, to: NodeId) -> i32 {
        self.day_cost(to)
    }
}

impl AstarPather for TerrainGraph {
    /// Straight-line distance to the goal priced as if every step crossed
    /// the most expensive passable terrain. Truncation keeps the estimate
    /// on the low side.
    fn estimate(&self, from: NodeId, to: NodeId) -> i32 {
        match (self.position(from), self.position(to)) {
            (Some(a), Some(b)) => (euclidean(a, b) * Terrain::Mountain.day_cost() as f32) as i32,
            _ => 0,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn graph_round_trip() {
        let params = BuildParams {
            area_size: Vec3::new(2.2, 2.2, 0.0),
            max_nodes: 20,
            ..BuildParams::default()
        };
        let g = TerrainGraph::build(&params, &mut StdRng::seed_from_u64(5));
        let json = serde_json::to_string(&g).unwrap();
        let back: TerrainGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn terrain_round_trip() {
        for kind in Terrain::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: Terrain = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }
}
