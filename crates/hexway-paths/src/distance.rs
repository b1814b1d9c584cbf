use hexway_core::Vec3;

/// Straight-line (Euclidean) distance between two positions.
#[inline]
pub fn euclidean(a: Vec3, b: Vec3) -> f32 {
    let d = b - a;
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_345() {
        let a = Vec3::ZERO;
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(euclidean(b, a), 5.0);
    }

    #[test]
    fn euclidean_uses_all_three_axes() {
        assert_eq!(euclidean(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)), 2.0);
    }
}
