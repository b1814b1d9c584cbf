//! Terrain kinds and their day costs.

use hexway_paths::UNREACHABLE;
use rand::{Rng, RngExt};

/// The kind of terrain covering one tile.
///
/// Each kind carries a fixed cost in days for stepping onto a tile of that
/// kind. Water is priced at the [`UNREACHABLE`] sentinel so that any route
/// with a dry alternative never crosses it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Grass,
    Forest,
    Desert,
    Mountain,
    Water,
}

impl Terrain {
    /// Every kind, in enumeration order.
    pub const ALL: [Self; 5] = [
        Self::Grass,
        Self::Forest,
        Self::Desert,
        Self::Mountain,
        Self::Water,
    ];

    /// Days it takes to step onto a tile of this kind.
    #[inline]
    pub const fn day_cost(self) -> i32 {
        match self {
            Self::Grass => 1,
            Self::Forest => 3,
            Self::Desert => 5,
            Self::Mountain => 10,
            Self::Water => UNREACHABLE,
        }
    }

    /// The successor kind, wrapping after the last one.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Grass => Self::Forest,
            Self::Forest => Self::Desert,
            Self::Desert => Self::Mountain,
            Self::Mountain => Self::Water,
            Self::Water => Self::Grass,
        }
    }

    /// Draw a kind uniformly at random.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Whether this kind is water.
    #[inline]
    pub const fn is_water(self) -> bool {
        matches!(self, Self::Water)
    }
}
