//! Geometry primitives: [`Vec3`], [`Bounds`] and float tolerance comparison.
//!
//! Tile positions are real-valued because hex rows interleave at fractional
//! offsets. Only x and y place a tile on the map; z is a layering axis for
//! hosts that want one and never participates in identity or bounds checks.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Tolerant float equality for coordinates produced by repeated offset sums.
///
/// Scales the tolerance with the magnitude of the operands so that far-out
/// tiles compare as reliably as tiles near the origin.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (b - a).abs() < f32::max(1e-6 * a.abs().max(b.abs()), f32::EPSILON * 8.0)
}

// ---------------------------------------------------------------------------
// Vec3
// ---------------------------------------------------------------------------

/// A 3-component position. X grows right, Y grows up, Z is layering only.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Return a position shifted by (dx, dy) in the map plane.
    #[inline]
    pub const fn shift(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }

    /// Whether two positions name the same tile: tolerant comparison on the
    /// map plane, ignoring z.
    #[inline]
    pub fn same_tile(self, other: Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A map bounding box centered on the coordinate origin.
///
/// Containment is strict on both planar axes: a position exactly on the
/// margin is outside. A zero-size box therefore contains nothing, which is
/// how degenerate construction areas degrade to a seed-only graph.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Half-extent on each axis.
    pub half: Vec3,
}

impl Bounds {
    /// The box spanning `±size/2` around the origin.
    #[inline]
    pub fn centered(size: Vec3) -> Self {
        Self { half: size / 2.0 }
    }

    /// Whether `p` lies strictly inside the box on the map plane.
    #[inline]
    pub fn contains(self, p: Vec3) -> bool {
        p.x > -self.half.x && p.x < self.half.x && p.y > -self.half.y && p.y < self.half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 8.0);
        assert_eq!(a + b, Vec3::new(5.0, 8.0, 11.0));
        assert_eq!(b - a, Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn approx_eq_absorbs_accumulated_error() {
        let mut x = 0.0f32;
        for _ in 0..10 {
            x += 0.1;
        }
        assert!(x != 1.0); // plain float compare fails
        assert!(approx_eq(x, 1.0));
        assert!(!approx_eq(1.0, 1.01));
    }

    #[test]
    fn same_tile_ignores_z() {
        let a = Vec3::new(0.5, -0.25, 0.0);
        let b = Vec3::new(0.5, -0.25, 7.0);
        assert!(a.same_tile(b));
        assert!(!a.same_tile(Vec3::new(0.5, 0.25, 0.0)));
    }

    #[test]
    fn bounds_containment_is_strict() {
        let b = Bounds::centered(Vec3::new(4.0, 4.0, 0.0));
        assert!(b.contains(Vec3::new(0.0, 0.0, 0.0)));
        assert!(b.contains(Vec3::new(1.9, -1.9, 5.0))); // z ignored
        assert!(!b.contains(Vec3::new(2.0, 0.0, 0.0))); // on the margin
        assert!(!b.contains(Vec3::new(0.0, -2.5, 0.0)));
    }

    #[test]
    fn zero_bounds_contain_nothing() {
        let b = Bounds::centered(Vec3::ZERO);
        assert!(!b.contains(Vec3::ZERO));
    }
}
