use crate::{
    r1::R1Interval,
    s1::{S1Angle, S1ChordAngle, S1Interval},
    s2::{
        s2cell::S2Cell,
        s2latlng::S2LatLng,
        s2latlng_rect::S2LatLngRect,
        s2point::{point_from_coords, S2Point},
    },
};

/// The smallest representable height increment above 1.0, used to round an
/// added point's height up so that the post-condition `contains(point)`
/// holds despite floating-point rounding.
const ROUNDING_EPSILON: f64 = 1e-15;

/// An S2Cap represents a disc-shaped region defined by a center and radius.
/// Internally, the cap is represented by its center and "height" above the
/// center, where height = 1 - cos(radius). This representation has good
/// numerical accuracy for very small caps (unlike the radius representation)
/// and is efficient for containment tests (unlike the angle representation).
///
/// Negative heights denote empty caps, and heights of 2 or more denote the
/// full cap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct S2Cap {
    center: S2Point,
    height: f64,
}

impl S2Cap {
    pub fn new(center: S2Point, height: f64) -> S2Cap {
        S2Cap { center, height }
    }

    pub fn from_center_angle(center: S2Point, radius: S1Angle) -> S2Cap {
        S2Cap::new(center, S2Cap::radius_to_height(radius.radians()))
    }

    pub fn from_center_chord_angle(center: S2Point, radius: S1ChordAngle) -> S2Cap {
        S2Cap::new(center, 0.5 * radius.length2())
    }

    pub fn empty() -> S2Cap {
        S2Cap::new(S2Point::new(1.0, 0.0, 0.0), -1.0)
    }

    pub fn full() -> S2Cap {
        S2Cap::new(S2Point::new(1.0, 0.0, 0.0), 2.0)
    }

    pub fn center(&self) -> S2Point {
        self.center
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.height < 0.0
    }

    pub fn is_full(&self) -> bool {
        self.height >= 2.0
    }

    /// height = 1 - cos(radius) = 2 * sin^2(radius / 2).
    pub fn radius_to_height(radius: f64) -> f64 {
        if radius < 0.0 {
            -1.0
        } else if radius >= std::f64::consts::PI {
            2.0
        } else {
            let d = (0.5 * radius).sin();
            2.0 * d * d
        }
    }

    pub fn height_to_radius(height: f64) -> f64 {
        if height < 0.0 {
            return -1.0;
        }
        if height >= 2.0 {
            return std::f64::consts::PI;
        }
        2.0 * (0.5 * height.sqrt()).asin()
    }

    /// The cap's radius as an S1Angle. Returns a negative angle for the
    /// empty cap.
    pub fn radius(&self) -> S1Angle {
        S1Angle::from_radians(S2Cap::height_to_radius(self.height))
    }

    /// The cap's radius as an S1ChordAngle; more accurate than `radius` for
    /// small caps.
    pub fn chord_angle_radius(&self) -> S1ChordAngle {
        S1ChordAngle::from_length2(2.0 * self.height)
    }

    /// Returns true if this cap contains the given point.
    pub fn contains_point(&self, p: &S2Point) -> bool {
        (self.center - *p).norm2() <= 2.0 * self.height
    }

    /// Returns true if this cap contains `other`.
    pub fn contains_cap(&self, other: &S2Cap) -> bool {
        if self.is_full() || other.is_empty() {
            return true;
        }
        self.radius().radians() >= self.center.angle(&other.center) + other.radius().radians()
    }

    /// Returns true if this cap intersects `other`.
    pub fn intersects_cap(&self, other: &S2Cap) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.radius().radians() + other.radius().radians() >= self.center.angle(&other.center)
    }

    /// Returns true if the interior of this cap intersects `other`.
    pub fn interior_intersects_cap(&self, other: &S2Cap) -> bool {
        if self.height <= 0.0 || other.is_empty() {
            return false;
        }
        self.radius().radians() + other.radius().radians() > self.center.angle(&other.center)
    }

    /// Expand the cap so that it contains the given point, enlarging the
    /// radius by the minimum amount necessary (plus one ulp of slack to
    /// guarantee the post-condition holds despite rounding).
    pub fn add_point(&self, p: &S2Point) -> S2Cap {
        if self.is_empty() {
            return S2Cap::new(*p, 0.0);
        }
        let dist2 = (self.center - *p).norm2();
        let new_height = self.height.max(0.5 * dist2);
        S2Cap::new(self.center, new_height * (1.0 + ROUNDING_EPSILON))
    }

    /// Expand the cap so that it contains `other`.
    pub fn add_cap(&self, other: &S2Cap) -> S2Cap {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let this_radius = self.radius().radians();
        let other_radius = other.radius().radians();
        let distance = self.center.angle(&other.center);
        if this_radius >= distance + other_radius {
            return *self;
        }
        if other_radius >= distance + this_radius {
            return *other;
        }
        let new_radius = 0.5 * (distance + this_radius + other_radius);
        if new_radius >= std::f64::consts::PI {
            return S2Cap::new(self.center, 2.0);
        }
        let center_fraction = (new_radius - this_radius) / distance.max(f64::EPSILON);
        let new_center = if distance == 0.0 {
            self.center
        } else {
            point_from_coords(
                self.center.x() + center_fraction * (other.center.x() - self.center.x()),
                self.center.y() + center_fraction * (other.center.y() - self.center.y()),
                self.center.z() + center_fraction * (other.center.z() - self.center.z()),
            )
        };
        S2Cap::new(
            new_center,
            S2Cap::radius_to_height(new_radius) * (1.0 + ROUNDING_EPSILON),
        )
    }

    /// The complement: same boundary, opposite interior.
    pub fn complement(&self) -> S2Cap {
        let height = if self.is_full() { -1.0 } else { 2.0 - self.height.max(0.0) };
        S2Cap::new(-self.center, height)
    }

    /// A bounding S2LatLngRect for this cap, via the spherical law of sines
    /// applied to the right triangle (pole, cap center, tangent point of the
    /// extremal longitude line).
    pub fn rect_bound(&self) -> S2LatLngRect {
        if self.is_empty() {
            return S2LatLngRect::empty();
        }

        let center_ll = S2LatLng::from_point(&self.center);
        let cap_angle = self.radius().radians();

        let mut lat_lo = center_ll.lat_radians() - cap_angle;
        let mut lat_hi = center_ll.lat_radians() + cap_angle;
        let mut full_lng = false;

        if lat_lo <= -std::f64::consts::FRAC_PI_2 {
            lat_lo = -std::f64::consts::FRAC_PI_2;
            full_lng = true;
        }
        if lat_hi >= std::f64::consts::FRAC_PI_2 {
            lat_hi = std::f64::consts::FRAC_PI_2;
            full_lng = true;
        }

        if full_lng {
            return S2LatLngRect::from_lat_lng_interval(
                R1Interval::new(lat_lo, lat_hi),
                S1Interval::full(),
            );
        }

        let sin_a = cap_angle.sin();
        let sin_c = center_ll.lat_radians().cos();
        if sin_a <= sin_c {
            let angle_a = (sin_a / sin_c).asin();
            let lng = S1Interval::new(
                normalize_to_pi(center_ll.lng_radians() - angle_a),
                normalize_to_pi(center_ll.lng_radians() + angle_a),
            );
            S2LatLngRect::from_lat_lng_interval(R1Interval::new(lat_lo, lat_hi), lng)
        } else {
            S2LatLngRect::from_lat_lng_interval(
                R1Interval::new(lat_lo, lat_hi),
                S1Interval::full(),
            )
        }
    }

    /// A bounding cap for this cap: itself.
    pub fn cap_bound(&self) -> S2Cap {
        *self
    }

    /// Returns true if this cap intersects the given cell. Caps with height
    /// at least 1 (covering a hemisphere or more) intersect any cell that
    /// doesn't contain one of their vertices, by convexity; caps smaller
    /// than that are tested by checking whether any vertex is inside, then
    /// whether any edge of the cell passes within range of the center.
    pub fn intersects_cell(&self, cell: &S2Cell) -> bool {
        if self.is_empty() {
            return false;
        }
        for k in 0..4 {
            if self.contains_point(&cell.vertex(k)) {
                return true;
            }
        }
        if self.height >= 1.0 {
            return false;
        }
        if self.is_full() {
            return true;
        }

        for k in 0..4 {
            let edge_normal = cell.edge(k);
            if edge_normal.dot_prod(&self.center) <= 0.0 {
                continue;
            }
            let v0 = cell.vertex(k);
            let v1 = cell.vertex((k + 1) % 4);
            let dir = edge_normal.cross_prod(&self.center);
            if dir.dot_prod(&v0) <= 0.0 && dir.dot_prod(&v1) >= 0.0 {
                let closest_dist2 = {
                    let proj = self.center - edge_normal * edge_normal.dot_prod(&self.center);
                    (proj.normalize() - self.center).norm2()
                };
                if closest_dist2 <= 2.0 * self.height {
                    return true;
                }
            }
        }
        false
    }
}

fn normalize_to_pi(radians: f64) -> f64 {
    use std::f64::consts::PI;
    let mut r = radians.rem_euclid(2.0 * PI);
    if r > PI {
        r -= 2.0 * PI;
    }
    if r == -PI {
        r = PI;
    }
    r
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_empty_and_full() {
        assert!(S2Cap::empty().is_empty());
        assert!(!S2Cap::empty().is_full());
        assert!(S2Cap::full().is_full());
        assert!(!S2Cap::full().is_empty());
    }

    #[test]
    fn test_contains_point() {
        let center = S2Point::new(1.0, 0.0, 0.0);
        let cap = S2Cap::from_center_angle(center, S1Angle::from_degrees(45.0));
        assert!(cap.contains_point(&center));
        let far = S2Point::new(0.0, 0.0, 1.0);
        assert!(!cap.contains_point(&far));
    }

    #[test]
    fn test_full_radius_contains_everything() {
        let cap = S2Cap::from_center_angle(S2Point::new(0.0, 0.0, 1.0), S1Angle::from_radians(std::f64::consts::PI));
        assert!(cap.contains_point(&S2Point::new(1.0, 0.0, 0.0)));
        assert!(cap.complement().is_empty());
    }

    #[test]
    fn test_contains_cap() {
        let big = S2Cap::from_center_angle(S2Point::new(1.0, 0.0, 0.0), S1Angle::from_degrees(80.0));
        let small = S2Cap::from_center_angle(S2Point::new(1.0, 0.0, 0.0), S1Angle::from_degrees(10.0));
        assert!(big.contains_cap(&small));
        assert!(!small.contains_cap(&big));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let a = S2Cap::from_center_angle(S2Point::new(1.0, 0.0, 0.0), S1Angle::from_degrees(30.0));
        let b = S2Cap::from_center_angle(S2Point::new(0.0, 1.0, 0.0), S1Angle::from_degrees(70.0));
        assert_eq!(a.intersects_cap(&b), b.intersects_cap(&a));
    }

    #[test]
    fn test_add_point_contains_it() {
        let cap = S2Cap::from_center_angle(S2Point::new(1.0, 0.0, 0.0), S1Angle::from_degrees(1.0));
        let p = S2Point::new(0.0, 1.0, 0.0).normalize();
        let grown = cap.add_point(&p);
        assert!(grown.contains_point(&p));
        assert!(grown.contains_point(&S2Point::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_radius_height_round_trip() {
        let r = 0.7_f64;
        let h = S2Cap::radius_to_height(r);
        assert_relative_eq!(S2Cap::height_to_radius(h), r, epsilon = 1e-12);
    }

    #[test]
    fn test_north_pole_zero_radius_rect_bound() {
        let cap = S2Cap::from_center_angle(S2Point::new(0.0, 0.0, 1.0), S1Angle::from_radians(0.0));
        let rect = cap.rect_bound();
        assert_relative_eq!(rect.lat().lo(), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(rect.lat().hi(), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
        assert!(rect.lng().is_full());
    }

    #[test]
    fn test_complement_height() {
        let cap = S2Cap::from_center_angle(S2Point::new(1.0, 0.0, 0.0), S1Angle::from_degrees(30.0));
        let comp = cap.complement();
        assert_relative_eq!(comp.center, -cap.center);
    }
}
