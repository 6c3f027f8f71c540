use crate::s2::s2point::S2Point;

/// The maximum relative error in the "triage" stage determinant, derived
/// from the floating-point error bound for three cross/dot products of
/// unit-length vectors (see `robust_sign`).
pub const MAX_DETERMINANT_ERROR: f64 = 4.6125e-16;

/// The relative error multiplier used by the "stable" stage, applied to
/// the product of the two shorter edge lengths of the (possibly permuted)
/// triangle.
pub const DET_ERROR_MULTIPLIER: f64 = 7.1767e-16;

/// The orientation of three points on the sphere, as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Clockwise,
    Indeterminate,
    CounterClockwise,
}

fn sign_of(det: f64) -> Sign {
    if det > 0.0 {
        Sign::CounterClockwise
    } else if det < 0.0 {
        Sign::Clockwise
    } else {
        Sign::Indeterminate
    }
}

/// Cheap (non-robust) orientation test. Computed as `(c x a) . b` rather
/// than `(a x b) . c` so that swapping the first and last arguments is
/// always the exact boolean negation: this avoids the pathological case
/// where both `(a,b,c)` and `(c,b,a)` report CCW due to rounding.
pub fn sign(a: &S2Point, b: &S2Point, c: &S2Point) -> Sign {
    sign_of(c.cross_prod(a).dot_prod(b))
}

/// A three-level adaptive orientation predicate. Unlike `sign`, this
/// function escalates to higher-precision (and more expensive) tests
/// when the cheap test is too close to call, and guarantees:
///
/// - rotating the arguments preserves the result;
/// - swapping any two arguments negates the result (CW <-> CCW);
/// - the result is `Indeterminate` only when two of the arguments are
///   (numerically) equal, or when the exact stage is reached (see below).
///
/// The third level (arbitrary-precision exact arithmetic) is not
/// implemented; it is a stub that returns `Indeterminate`; rare
/// near-collinear triples therefore report a tie rather than a forced
/// sign. Callers that need a total order (e.g. polygon boolean
/// operations) must have a tie-breaking strategy of their own.
pub fn robust_sign(a: &S2Point, b: &S2Point, c: &S2Point) -> Sign {
    let det = c.cross_prod(a).dot_prod(b);
    if det.abs() > MAX_DETERMINANT_ERROR {
        return sign_of(det);
    }
    stable_sign(a, b, c)
}

/// Second stage of `robust_sign`: cyclically permute the arguments so
/// that the longest edge plays the role of "AB" (this minimizes the
/// magnitude of the cross product involved, which is the dominant source
/// of cancellation error), then recompute against a tighter bound.
/// Cyclic permutation is an even permutation and never changes the sign.
fn stable_sign(a: &S2Point, b: &S2Point, c: &S2Point) -> Sign {
    let ab2 = (*a - *b).norm2();
    let bc2 = (*b - *c).norm2();
    let ca2 = (*c - *a).norm2();

    let (pa, pb, pc) = if ab2 >= bc2 && ab2 >= ca2 {
        (a, b, c)
    } else if bc2 >= ca2 {
        (b, c, a)
    } else {
        (c, a, b)
    };

    let det = pc.cross_prod(pa).dot_prod(pb);
    let error_bound = DET_ERROR_MULTIPLIER * (*pa - *pc).norm() * (*pb - *pc).norm();
    if det.abs() > error_bound {
        sign_of(det)
    } else {
        exact_sign(pa, pb, pc)
    }
}

/// Third (exact) stage of `robust_sign`. A real implementation would fall
/// back to arbitrary-precision or symbolic arithmetic; this one is a
/// documented stub that always reports a tie.
fn exact_sign(_a: &S2Point, _b: &S2Point, _c: &S2Point) -> Sign {
    Sign::Indeterminate
}

/// Returns true iff the edges OA, OB, OC are encountered in that order
/// while sweeping counterclockwise around O.
pub fn ordered_ccw(a: &S2Point, b: &S2Point, c: &S2Point, o: &S2Point) -> bool {
    let mut sum = 0;
    if robust_sign(b, o, a) != Sign::Clockwise {
        sum += 1;
    }
    if robust_sign(c, o, b) != Sign::Clockwise {
        sum += 1;
    }
    if robust_sign(a, o, c) == Sign::CounterClockwise {
        sum += 1;
    }
    sum >= 2
}

/// Area of the spherical triangle (a, b, c), always non-negative and at
/// most 4*Pi. Uses l'Huilier's theorem, falling back to Girard's formula
/// for very "skinny" triangles where l'Huilier's formula loses precision.
pub fn point_area(a: &S2Point, b: &S2Point, c: &S2Point) -> f64 {
    let sa = b.angle(c);
    let sb = c.angle(a);
    let sc = a.angle(b);
    let s = 0.5 * (sa + sb + sc);

    if s >= 3e-4 {
        let dmin = s - sa.max(sb).max(sc);
        if dmin < 1e-2 * s * s * s * s * s {
            let area = girard_area(a, b, c);
            if dmin < s * (0.1 * area) {
                return area;
            }
        }
    }

    let tan_e4 = (0.0_f64).max(
        (0.5 * s).tan() * (0.5 * (s - sa)).tan() * (0.5 * (s - sb)).tan() * (0.5 * (s - sc)).tan(),
    );
    4.0 * tan_e4.sqrt().atan()
}

/// Girard's formula for spherical excess, computed directly from the edge
/// normals so that degenerate triangles (a == b == c) do not error.
fn girard_area(a: &S2Point, b: &S2Point, c: &S2Point) -> f64 {
    let ab = a.cross_prod(b);
    let bc = b.cross_prod(c);
    let ac = a.cross_prod(c);
    let area = ab.angle(&ac) - ab.angle(&bc) + bc.angle(&ac);
    area.max(0.0)
}

/// A simplified spherical-triangle centroid: the planar centroid of the
/// three vertices, weighted by the signed volume of the tetrahedron they
/// form with the coordinate origin (a proxy for the signed area of the
/// triangle). This is the simplification this crate uses in place of the
/// full per-vertex-angle construction; see the design notes for why.
pub fn true_centroid(a: &S2Point, b: &S2Point, c: &S2Point) -> S2Point {
    let signed_volume = a.dot_prod(&(*b - *a).cross_prod(&(*c - *a)));
    planar_centroid(a, b, c) * signed_volume
}

/// The ordinary (unweighted) centroid of the three vertices.
pub fn planar_centroid(a: &S2Point, b: &S2Point, c: &S2Point) -> S2Point {
    (*a + *b + *c) * (1.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_sign_basic_ccw() {
        let a = S2Point::new(1.0, 0.0, 0.0);
        let b = S2Point::new(0.0, 1.0, 0.0);
        let c = S2Point::new(0.0, 0.0, 1.0);
        assert_eq!(robust_sign(&a, &b, &c), Sign::CounterClockwise);
    }

    #[test]
    fn test_robust_sign_rotation_invariant() {
        let a = S2Point::new(1.0, 0.0, 0.0);
        let b = S2Point::new(0.0, 1.0, 0.0);
        let c = S2Point::new(0.0, 0.0, 1.0);
        assert_eq!(robust_sign(&a, &b, &c), robust_sign(&b, &c, &a));
        assert_eq!(robust_sign(&a, &b, &c), robust_sign(&c, &a, &b));
    }

    #[test]
    fn test_robust_sign_swap_negates() {
        let a = S2Point::new(1.0, 0.0, 0.0);
        let b = S2Point::new(0.0, 1.0, 0.0);
        let c = S2Point::new(0.0, 0.0, 1.0);
        assert_eq!(robust_sign(&a, &b, &c), Sign::CounterClockwise);
        assert_eq!(robust_sign(&c, &b, &a), Sign::Clockwise);
    }

    #[test]
    fn test_robust_sign_indeterminate_for_near_collinear() {
        let eps = 1e-20;
        let a = S2Point::new(1.0, eps, 0.0);
        let b = S2Point::new(1.0, 2.0 * eps, 0.0);
        let c = S2Point::new(1.0, 3.0 * eps, 0.0);
        assert_eq!(robust_sign(&a, &b, &c), Sign::Indeterminate);
    }

    #[test]
    fn test_point_area_octant() {
        let a = S2Point::new(1.0, 0.0, 0.0);
        let b = S2Point::new(0.0, 1.0, 0.0);
        let c = S2Point::new(0.0, 0.0, 1.0);
        // One eighth of the sphere's total area (4*Pi) is Pi/2.
        assert_relative_eq!(point_area(&a, &b, &c), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_planar_centroid() {
        let a = S2Point::new(3.0, 0.0, 0.0);
        let b = S2Point::new(0.0, 3.0, 0.0);
        let c = S2Point::new(0.0, 0.0, 3.0);
        assert_relative_eq!(planar_centroid(&a, &b, &c), S2Point::new(1.0, 1.0, 1.0));
    }
}
