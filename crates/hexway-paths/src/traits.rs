use hexway_core::NodeId;

/// Minimal search interface: neighbor enumeration over node handles.
pub trait Pather {
    /// Append neighbors of `n` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, n: NodeId, buf: &mut Vec<NodeId>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` onto adjacent `to`. Must be > 0.
    ///
    /// Terrain graphs charge the destination tile's own cost, so the edge
    /// weight is a property of `to`, not of the pair.
    fn cost(&self, from: NodeId, to: NodeId) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: NodeId, to: NodeId) -> i32;
}

/// Total cost of walking `path` under the destination-cost model.
///
/// The starting node is free; each subsequent step charges the cost of the
/// tile stepped onto. Saturates rather than overflowing on sentinel costs.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[NodeId]) -> i32 {
    path.windows(2)
        .fold(0i32, |acc, w| acc.saturating_add(pather.cost(w[0], w[1])))
}
