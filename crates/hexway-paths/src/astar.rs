use std::collections::BinaryHeap;

use hexway_core::NodeId;

use crate::PathFinder;
use crate::finder::{HeapRef, UNREACHABLE};
use crate::traits::AstarPather;

impl PathFinder {
    /// Compute the cheapest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if the
    /// goal cannot be reached. `from == to` is answered immediately with a
    /// single-node path, no frontier expansion.
    ///
    /// Expansion order is deterministic for a fixed graph and neighbor
    /// insertion order, so repeated queries return the same path.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: NodeId,
        to: NodeId,
    ) -> Option<Vec<NodeId>> {
        let start_slot = self.slot(from)?;
        let goal_slot = self.slot(to)?;

        if start_slot == goal_slot {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        // Initialise the start node.
        {
            let node = &mut self.astar_nodes[start_slot];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<HeapRef> = BinaryHeap::new();
        open.push(HeapRef {
            slot: start_slot,
            f: self.astar_nodes[start_slot].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.slot;

            // Skip stale entries.
            if self.astar_nodes[ci].generation != cur_gen || !self.astar_nodes[ci].open {
                continue;
            }

            if ci == goal_slot {
                break 'search true;
            }

            self.astar_nodes[ci].open = false;
            let current_g = self.astar_nodes[ci].g;
            let current_id = NodeId::new(ci);

            nbuf.clear();
            pather.neighbors(current_id, &mut nbuf);

            for &nb in nbuf.iter() {
                let Some(ni) = self.slot(nb) else {
                    continue;
                };
                // Saturating: stepping onto sentinel-cost terrain pins g at
                // UNREACHABLE, so such routes lose to any finite one.
                let tentative_g = current_g.saturating_add(pather.cost(current_id, nb));

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    // Already visited this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.f = tentative_g.saturating_add(pather.estimate(nb, to));
                n.parent = ci;
                n.open = true;

                open.push(HeapRef { slot: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_slot;
        while ci != usize::MAX {
            path.push(NodeId::new(ci));
            ci = self.astar_nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather, path_cost};

    /// Hand-built weighted graph: adjacency lists plus a per-node entry
    /// cost and a planar position for the heuristic.
    struct Fixture {
        edges: Vec<Vec<NodeId>>,
        costs: Vec<i32>,
        pos: Vec<(f32, f32)>,
    }

    impl Pather for Fixture {
        fn neighbors(&self, n: NodeId, buf: &mut Vec<NodeId>) {
            buf.extend_from_slice(&self.edges[n.index()]);
        }
    }

    impl WeightedPather for Fixture {
        fn cost(&self, _from: NodeId, to: NodeId) -> i32 {
            self.costs[to.index()]
        }
    }

    impl AstarPather for Fixture {
        fn estimate(&self, from: NodeId, to: NodeId) -> i32 {
            let (ax, ay) = self.pos[from.index()];
            let (bx, by) = self.pos[to.index()];
            ((bx - ax).hypot(by - ay)) as i32
        }
    }

    fn id(i: usize) -> NodeId {
        NodeId::new(i)
    }

    /// Diamond: 0 connects to 1 (cheap) and 2 (expensive), both connect to 3.
    fn diamond() -> Fixture {
        Fixture {
            edges: vec![
                vec![id(1), id(2)],
                vec![id(0), id(3)],
                vec![id(0), id(3)],
                vec![id(1), id(2)],
            ],
            costs: vec![1, 1, 10, 1],
            pos: vec![(0.0, 0.0), (1.0, 1.0), (1.0, -1.0), (2.0, 0.0)],
        }
    }

    #[test]
    fn trivial_path_to_self() {
        let g = diamond();
        let mut pf = PathFinder::new(4);
        assert_eq!(pf.astar_path(&g, id(2), id(2)), Some(vec![id(2)]));
    }

    #[test]
    fn prefers_cheaper_branch() {
        let g = diamond();
        let mut pf = PathFinder::new(4);
        let path = pf.astar_path(&g, id(0), id(3)).unwrap();
        assert_eq!(path, vec![id(0), id(1), id(3)]);
        assert_eq!(path_cost(&g, &path), 2);
    }

    #[test]
    fn takes_expensive_branch_when_only_route() {
        let mut g = diamond();
        // Sever 0-1 so the expensive branch is the only way through.
        g.edges[0].retain(|&n| n != id(1));
        g.edges[1].retain(|&n| n != id(0));
        let mut pf = PathFinder::new(4);
        let path = pf.astar_path(&g, id(0), id(3)).unwrap();
        assert_eq!(path, vec![id(0), id(2), id(3)]);
    }

    #[test]
    fn repeated_queries_return_identical_paths() {
        let g = diamond();
        let mut pf = PathFinder::new(4);
        let a = pf.astar_path(&g, id(0), id(3));
        let b = pf.astar_path(&g, id(0), id(3));
        assert_eq!(a, b);
    }

    #[test]
    fn disconnected_goal_is_not_found() {
        let g = Fixture {
            edges: vec![vec![id(1)], vec![id(0)], vec![]],
            costs: vec![1, 1, 1],
            pos: vec![(0.0, 0.0), (1.0, 0.0), (9.0, 9.0)],
        };
        let mut pf = PathFinder::new(3);
        assert_eq!(pf.astar_path(&g, id(0), id(2)), None);
    }

    #[test]
    fn out_of_range_endpoint_is_not_found() {
        let g = diamond();
        let mut pf = PathFinder::new(2); // undersized on purpose
        assert_eq!(pf.astar_path(&g, id(0), id(3)), None);
    }

    #[test]
    fn sentinel_cost_does_not_wrap() {
        // One corridor through a sentinel-priced node: still found, with g
        // saturated rather than overflowed.
        let g = Fixture {
            edges: vec![vec![id(1)], vec![id(0), id(2)], vec![id(1)]],
            costs: vec![1, UNREACHABLE, 1],
            pos: vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
        };
        let mut pf = PathFinder::new(3);
        let path = pf.astar_path(&g, id(0), id(2)).unwrap();
        assert_eq!(path, vec![id(0), id(1), id(2)]);
        assert_eq!(path_cost(&g, &path), UNREACHABLE);
    }
}
