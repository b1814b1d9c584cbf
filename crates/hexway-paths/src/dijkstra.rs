use std::collections::BinaryHeap;

use hexway_core::NodeId;

use crate::PathFinder;
use crate::finder::{HeapRef, PathNode, UNREACHABLE};
use crate::traits::WeightedPather;

impl PathFinder {
    /// Compute a multi-source Dijkstra travel-range map.
    ///
    /// Every source starts at cost 0. Expansion stops when the cumulative
    /// cost exceeds `max_cost`, so a day budget carves out exactly the set
    /// of tiles reachable within it. Returns a slice of all reached nodes.
    pub fn dijkstra_map<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[NodeId],
        max_cost: i32,
    ) -> &[PathNode] {
        // Reset the flat cost map.
        for v in self.dijkstra_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.dijkstra_results.clear();

        self.dijkstra_generation = self.dijkstra_generation.wrapping_add(1);
        let cur_gen = self.dijkstra_generation;

        let mut open: BinaryHeap<HeapRef> = BinaryHeap::new();

        // Seed sources.
        for &src in sources {
            if let Some(si) = self.slot(src) {
                let n = &mut self.dijkstra_nodes[si];
                n.g = 0;
                n.f = 0;
                n.generation = cur_gen;
                n.open = true;
                self.dijkstra_map[si] = 0;
                open.push(HeapRef { slot: si, f: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.slot;
            let cn = &self.dijkstra_nodes[ci];
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let current_g = cn.g;
            self.dijkstra_nodes[ci].open = false;

            let cid = NodeId::new(ci);
            self.dijkstra_results.push(PathNode {
                id: cid,
                cost: current_g,
            });

            nbuf.clear();
            pather.neighbors(cid, &mut nbuf);

            for &nb in nbuf.iter() {
                let Some(ni) = self.slot(nb) else {
                    continue;
                };
                let tentative = current_g.saturating_add(pather.cost(cid, nb));
                if tentative > max_cost {
                    continue;
                }

                let n = &mut self.dijkstra_nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative;
                n.f = tentative;
                n.open = true;
                self.dijkstra_map[ni] = tentative;
                open.push(HeapRef {
                    slot: ni,
                    f: tentative,
                });
            }
        }

        self.nbuf = nbuf;
        &self.dijkstra_results
    }

    /// Query the Dijkstra cost at a specific node.
    ///
    /// Returns [`UNREACHABLE`] if the node is out of range or was not
    /// reached by the last `dijkstra_map` call.
    pub fn dijkstra_at(&self, n: NodeId) -> i32 {
        match self.slot(n) {
            Some(i) => self.dijkstra_map[i],
            None => UNREACHABLE,
        }
    }
}
