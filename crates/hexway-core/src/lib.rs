//! **hexway-core** — Hex tile map toolkit (core types).
//!
//! This crate provides the foundational types used across the *hexway*
//! ecosystem: a planar 3-component position, float tolerance comparison,
//! an origin-centered map bounding box, and the dense node handle shared
//! by the graph and pathfinding crates.

pub mod geom;
pub mod node;

pub use geom::{Bounds, Vec3, approx_eq};
pub use node::NodeId;
