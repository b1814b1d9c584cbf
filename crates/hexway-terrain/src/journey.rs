//! Chained route sessions over a terrain graph.
//!
//! A host picks tiles one at a time: the first pick anchors a leg, the next
//! routes to it, and the journey rolls forward so travel can continue from
//! where the last leg ended. Water tiles never anchor a leg.

use hexway_core::NodeId;
use hexway_paths::{PathFinder, path_cost};

use crate::graph::TerrainGraph;

/// Outcome of one [`Journey::select`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The tile became the starting point of the next leg.
    Start(NodeId),
    /// A leg was routed; the journey now continues from its last tile.
    Leg { path: Vec<NodeId>, days: i32 },
    /// The current start was picked again; the journey was cleared.
    Cleared,
    /// Water tiles are refused as leg anchors.
    RejectedWater(NodeId),
    /// The handle does not belong to the graph.
    Unknown(NodeId),
    /// No route connects the start to the picked tile; the start is kept.
    NoRoute,
}

/// Step-by-step route planning: pick a start, then chain legs from it.
#[derive(Debug, Default)]
pub struct Journey {
    start: Option<NodeId>,
    total_days: i32,
}

impl Journey {
    /// A journey with nothing picked yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the next leg would start from.
    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    /// Days accumulated across all routed legs.
    pub fn total_days(&self) -> i32 {
        self.total_days
    }

    /// Forget the start and the accumulated days.
    pub fn reset(&mut self) {
        self.start = None;
        self.total_days = 0;
    }

    /// Pick `node` as the next endpoint.
    ///
    /// The first pick anchors the journey. Picking the anchor again clears
    /// it. Any later pick routes a leg from the anchor, adds its days, and
    /// moves the anchor to the leg's end; if no route exists the anchor is
    /// kept so the host can pick elsewhere.
    pub fn select(
        &mut self,
        graph: &TerrainGraph,
        finder: &mut PathFinder,
        node: NodeId,
    ) -> Selection {
        let Some(kind) = graph.terrain(node) else {
            return Selection::Unknown(node);
        };
        if kind.is_water() {
            log::debug!("refusing water tile {node} as a leg anchor");
            return Selection::RejectedWater(node);
        }

        let Some(from) = self.start else {
            self.start = Some(node);
            return Selection::Start(node);
        };

        if from == node {
            self.reset();
            return Selection::Cleared;
        }

        match finder.astar_path(graph, from, node) {
            Some(path) => {
                let days = path_cost(graph, &path);
                self.total_days = self.total_days.saturating_add(days);
                self.start = Some(node);
                Selection::Leg { path, days }
            }
            None => Selection::NoRoute,
        }
    }
}
