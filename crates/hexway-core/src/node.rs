//! The [`NodeId`] graph node handle.
//!
//! Graphs hand out dense indices rather than references so that adjacency,
//! search caches and paths can all be plain flat storage keyed by the same
//! handle.

use std::fmt;

/// Identifier of a node within one graph, valid only for the graph that
/// issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a handle from a dense index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The underlying dense index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
