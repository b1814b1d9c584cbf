//! The fixed hexagonal neighbor layout.

use hexway_core::Vec3;

/// Divisor squeezing adjacent rows together so pointy-top tiles interlock.
const ROW_SQUEEZE: f32 = 1.35;

/// The six candidate neighbor positions around `center`.
///
/// Side neighbors sit a full tile width away; the four diagonal neighbors
/// sit half a width sideways and one squeezed row height up or down.
/// `hex_size.x` is the tile width, `hex_size.y` the tile height; z is
/// carried through unchanged.
pub fn neighbor_positions(center: Vec3, hex_size: Vec3) -> [Vec3; 6] {
    let dx = hex_size.x;
    let dy = hex_size.y / ROW_SQUEEZE;
    [
        center.shift(-dx, 0.0),
        center.shift(-dx / 2.0, dy),
        center.shift(-dx / 2.0, -dy),
        center.shift(dx, 0.0),
        center.shift(dx / 2.0, dy),
        center.shift(dx / 2.0, -dy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_distinct_positions() {
        let ring = neighbor_positions(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        for (i, a) in ring.iter().enumerate() {
            for b in ring.iter().skip(i + 1) {
                assert!(!a.same_tile(*b), "{a} duplicates {b}");
            }
        }
    }

    #[test]
    fn every_offset_has_its_opposite() {
        let center = Vec3::new(2.0, -1.0, 0.0);
        let ring = neighbor_positions(center, Vec3::new(1.0, 1.0, 0.0));
        for p in ring {
            let mirrored = center + (center - p);
            assert!(
                ring.iter().any(|q| q.same_tile(mirrored)),
                "no opposite for {p}"
            );
        }
    }

    #[test]
    fn side_neighbors_sit_a_full_width_away() {
        let ring = neighbor_positions(Vec3::ZERO, Vec3::new(2.0, 1.0, 0.0));
        assert!(ring[0].same_tile(Vec3::new(-2.0, 0.0, 0.0)));
        assert!(ring[3].same_tile(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn z_is_carried_through() {
        let center = Vec3::new(0.0, 0.0, 3.0);
        for p in neighbor_positions(center, Vec3::new(1.0, 1.0, 0.0)) {
            assert_eq!(p.z, 3.0);
        }
    }
}
