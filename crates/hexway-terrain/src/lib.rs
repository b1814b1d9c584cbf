//! **hexway-terrain** — bounded hexagonal tile graphs with terrain-priced
//! travel.
//!
//! A [`TerrainGraph`] is grown breadth-first from a seed tile inside an
//! origin-centered bounding box, each tile drawing a random [`Terrain`] kind
//! that prices every step onto it. The graph implements the `hexway-paths`
//! search traits, so A* and Dijkstra queries run against it directly.
//! [`Journey`] layers a leg-chaining route session on top.

pub mod graph;
pub mod hex;
pub mod journey;
pub mod terrain;

pub use graph::{BuildParams, Node, TerrainGraph};
pub use hex::neighbor_positions;
pub use journey::{Journey, Selection};
pub use terrain::Terrain;
