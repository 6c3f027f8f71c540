use crate::util::math::vector::Vector3;

/// An S2Point represents a point on the unit sphere as a 3D vector.  Usually
/// points are normalized to be unit length, but some methods do not require
/// this.  See util/math/vector.h for the methods available.  Among other
/// things, there are overloaded operators that make it convenient to write
/// arithmetic expressions (e.g. (1-x)*p1 + x*p2).
pub type S2Point = Vector3<f64>;

/// A fixed, arbitrary direction substituted whenever normalizing a zero
/// vector would otherwise be undefined, so that no S2Point constructed
/// through `point_from_coords` is ever degenerate. Also doubles as the
/// "point at infinity" reference used by edge-crossing parity tests.
pub fn origin_point() -> S2Point {
    S2Point::new(0.00456762077230, 0.99947476613078, 0.03208315302933)
}

/// Construct a unit-length S2Point in the direction of (x, y, z). If the
/// input is the zero vector, `origin_point()` is returned instead of the
/// (otherwise undefined) zero direction.
pub fn point_from_coords(x: f64, y: f64, z: f64) -> S2Point {
    let v = S2Point::new(x, y, z);
    if v.norm2() == 0.0 {
        origin_point()
    } else {
        v.normalize()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_origin_point_is_unit_length() {
        assert_relative_eq!(origin_point().norm(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_point_from_coords_normalizes() {
        let p = point_from_coords(2.0, 0.0, 0.0);
        assert_relative_eq!(p, S2Point::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_point_from_coords_zero_is_origin() {
        assert_eq!(point_from_coords(0.0, 0.0, 0.0), origin_point());
    }
}
