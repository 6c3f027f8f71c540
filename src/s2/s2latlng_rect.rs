// An S2LatLngRect represents a closed latitude-longitude rectangle. It is
// capable of representing the empty and full rectangles as well as single
// points. Note that the latitude-longitude space is considered to have a
// *cylindrical* topology rather than a spherical one, i.e. the poles have
// multiple lat/lng representations. An S2LatLngRect may be defined so that
// includes some representations of a pole but not others. Use the
// PolarClosure() method if you want to expand a rectangle so that it contains
// all possible representations of any contained poles.
//
// Because S2LatLngRect uses S1Interval to store the longitude range,
// longitudes of -180 degrees are treated specially. Except for empty
// and full longitude spans, -180 degree longitudes will turn into +180
// degrees. This sign flip causes lng_lo() to be greater than lng_hi(),
// indicating that the rectangle will wrap around through -180 instead of
// through +179. Thus the math is consistent within the library, but the sign
// flip can be surprising, especially when working with map projections where
// -180 and +180 are at opposite ends of the flattened map. See the comments
// on S1Interval for more details.

use std::f64::consts::FRAC_PI_2;

use crate::{
    r1::R1Interval,
    s1::S1Interval,
    s2::{s2latlng::S2LatLng, s2point::S2Point},
};

/// The minimum latitude (in radians) at which a longitude range may still be
/// considered non-degenerate; used by `polar_closure`.
pub const POLE_MIN_LAT: f64 = FRAC_PI_2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct S2LatLngRect {
    lat: R1Interval,
    lng: S1Interval,
}

impl S2LatLngRect {
    pub fn new(lat: R1Interval, lng: S1Interval) -> S2LatLngRect {
        S2LatLngRect { lat, lng }
    }

    pub fn from_lat_lng_interval(lat: R1Interval, lng: S1Interval) -> S2LatLngRect {
        S2LatLngRect::new(lat, lng)
    }

    pub fn from_point(p: &S2LatLng) -> S2LatLngRect {
        S2LatLngRect::new(
            R1Interval::from_point(p.lat_radians()),
            S1Interval::from_point(p.lng_radians()),
        )
    }

    pub fn from_point_pair(a: &S2LatLng, b: &S2LatLng) -> S2LatLngRect {
        S2LatLngRect::new(
            R1Interval::from_point_pair(a.lat_radians(), b.lat_radians()),
            S1Interval::from_point(a.lng_radians()).add_point(b.lng_radians()),
        )
    }

    pub fn empty() -> S2LatLngRect {
        S2LatLngRect::new(R1Interval::empty(), S1Interval::empty())
    }

    pub fn full() -> S2LatLngRect {
        S2LatLngRect::new(full_lat(), S1Interval::full())
    }

    pub fn lat(&self) -> R1Interval {
        self.lat
    }

    pub fn lng(&self) -> S1Interval {
        self.lng
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lat == full_lat() && self.lng.is_full()
    }

    /// True if the rectangle includes a pole (either representation).
    pub fn is_point(&self) -> bool {
        self.lat.lo() == self.lat.hi() && self.lng.lo() == self.lng.hi()
    }

    pub fn contains_point(&self, p: &S2Point) -> bool {
        self.contains_lat_lng(&S2LatLng::from_point(p))
    }

    pub fn contains_lat_lng(&self, ll: &S2LatLng) -> bool {
        self.lat.contains(ll.lat_radians()) && self.lng.contains(ll.lng_radians())
    }

    pub fn interior_contains_lat_lng(&self, ll: &S2LatLng) -> bool {
        self.lat.interior_contains(ll.lat_radians()) && self.lng.interior_contains(ll.lng_radians())
    }

    pub fn contains_rect(&self, other: &S2LatLngRect) -> bool {
        self.lat.contains_interval(&other.lat) && self.lng.contains_interval(&other.lng)
    }

    pub fn interior_contains_rect(&self, other: &S2LatLngRect) -> bool {
        self.lat.interior_contains_interval(&other.lat)
            && self.lng.interior_contains_interval(&other.lng)
    }

    pub fn intersects(&self, other: &S2LatLngRect) -> bool {
        self.lat.intersects(&other.lat) && self.lng.intersects(&other.lng)
    }

    pub fn interior_intersects(&self, other: &S2LatLngRect) -> bool {
        self.lat.interior_intersects(&other.lat) && self.lng.interior_intersects(&other.lng)
    }

    /// Expand the rectangle to include the given point.
    pub fn add(&self, ll: &S2LatLng) -> S2LatLngRect {
        S2LatLngRect::new(
            self.lat.add_point(ll.lat_radians()),
            self.lng.add_point(ll.lng_radians()),
        )
    }

    pub fn union(&self, other: &S2LatLngRect) -> S2LatLngRect {
        S2LatLngRect::new(self.lat.union(&other.lat), self.lng.union(&other.lng))
    }

    pub fn intersection(&self, other: &S2LatLngRect) -> S2LatLngRect {
        let lat = self.lat.intersection(&other.lat);
        let lng = self.lng.intersection(&other.lng);
        if lat.is_empty() || lng.is_empty() {
            S2LatLngRect::empty()
        } else {
            S2LatLngRect::new(lat, lng)
        }
    }

    /// Expand the rectangle by `margin.lat()` on the lat axis and
    /// `margin.lng()` on the lng axis.
    pub fn expanded(&self, margin: &S2LatLng) -> S2LatLngRect {
        if self.is_empty() {
            return *self;
        }
        let lat = self.lat.expanded(margin.lat_radians());
        let lng = if margin.lng_radians() >= 0.0 {
            S1Interval::new(
                normalize_to_pi(self.lng.lo() - margin.lng_radians()),
                normalize_to_pi(self.lng.hi() + margin.lng_radians()),
            )
        } else {
            self.lng
        };
        if lat.is_empty() {
            S2LatLngRect::empty()
        } else {
            S2LatLngRect::new(lat, lng)
        }
    }

    /// If the rectangle touches a pole, expand its longitude span to full.
    pub fn polar_closure(&self) -> S2LatLngRect {
        if self.lat.lo() == -POLE_MIN_LAT || self.lat.hi() == POLE_MIN_LAT {
            S2LatLngRect::new(self.lat, S1Interval::full())
        } else {
            *self
        }
    }

    pub fn get_center(&self) -> S2LatLng {
        S2LatLng::from_radians(self.lat.get_center(), self.lng.get_center())
    }
}

fn full_lat() -> R1Interval {
    R1Interval::new(-FRAC_PI_2, FRAC_PI_2)
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
        assert!(S2LatLngRect::empty().is_empty());
        assert!(S2LatLngRect::full().is_full());
    }

    #[test]
    fn test_contains_lat_lng() {
        let r = S2LatLngRect::from_point_pair(
            &S2LatLng::from_degrees(0.0, 0.0),
            &S2LatLng::from_degrees(10.0, 10.0),
        );
        assert!(r.contains_lat_lng(&S2LatLng::from_degrees(5.0, 5.0)));
        assert!(!r.contains_lat_lng(&S2LatLng::from_degrees(20.0, 5.0)));
    }

    #[test]
    fn test_union_and_intersection() {
        let a = S2LatLngRect::from_point_pair(
            &S2LatLng::from_degrees(0.0, 0.0),
            &S2LatLng::from_degrees(10.0, 10.0),
        );
        let b = S2LatLngRect::from_point_pair(
            &S2LatLng::from_degrees(5.0, 5.0),
            &S2LatLng::from_degrees(15.0, 15.0),
        );
        let u = a.union(&b);
        assert!(u.contains_rect(&a));
        assert!(u.contains_rect(&b));
        let i = a.intersection(&b);
        assert!(a.contains_rect(&i));
        assert!(b.contains_rect(&i));
    }

    #[test]
    fn test_add_point_grows_rect() {
        let r = S2LatLngRect::from_point(&S2LatLng::from_degrees(0.0, 0.0));
        let grown = r.add(&S2LatLng::from_degrees(5.0, 5.0));
        assert!(grown.contains_lat_lng(&S2LatLng::from_degrees(0.0, 0.0)));
        assert!(grown.contains_lat_lng(&S2LatLng::from_degrees(5.0, 5.0)));
    }

    #[test]
    fn test_polar_closure_widens_longitude() {
        let r = S2LatLngRect::new(
            R1Interval::new(POLE_MIN_LAT, POLE_MIN_LAT),
            S1Interval::from_point(0.0),
        );
        let closed = r.polar_closure();
        assert!(closed.lng.is_full());
    }

    #[test]
    fn test_get_center() {
        let r = S2LatLngRect::from_point_pair(
            &S2LatLng::from_degrees(0.0, 0.0),
            &S2LatLng::from_degrees(10.0, 10.0),
        );
        let c = r.get_center();
        assert_relative_eq!(c.lat_degrees(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(c.lng_degrees(), 5.0, epsilon = 1e-9);
    }
}
