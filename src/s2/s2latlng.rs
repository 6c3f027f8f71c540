use std::f64::consts::PI;

use crate::{
    s1::S1Angle,
    s2::s2point::{point_from_coords, S2Point},
};

/// An S2LatLng represents a point on the unit sphere as a pair of
/// latitude-longitude coordinates, in radians. Latitude must be between
/// -90 and 90 degrees inclusive; longitude is normalized into the range
/// (-180, 180] degrees by `normalized`, but may hold any value as
/// constructed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct S2LatLng {
    lat: f64,
    lng: f64,
}

impl S2LatLng {
    pub fn from_radians(lat_radians: f64, lng_radians: f64) -> S2LatLng {
        S2LatLng {
            lat: lat_radians,
            lng: lng_radians,
        }
    }

    pub fn from_degrees(lat_degrees: f64, lng_degrees: f64) -> S2LatLng {
        S2LatLng::from_radians(lat_degrees * PI / 180.0, lng_degrees * PI / 180.0)
    }

    /// Convert a point (not necessarily unit length) to an S2LatLng.
    pub fn from_point(p: &S2Point) -> S2LatLng {
        S2LatLng::from_radians(latitude(p), longitude(p))
    }

    pub fn lat(&self) -> S1Angle {
        S1Angle::from_radians(self.lat)
    }

    pub fn lng(&self) -> S1Angle {
        S1Angle::from_radians(self.lng)
    }

    pub fn lat_radians(&self) -> f64 {
        self.lat
    }

    pub fn lng_radians(&self) -> f64 {
        self.lng
    }

    pub fn lat_degrees(&self) -> f64 {
        self.lat * 180.0 / PI
    }

    pub fn lng_degrees(&self) -> f64 {
        self.lng * 180.0 / PI
    }

    /// Return true if the latitude is in [-Pi/2, Pi/2] and the longitude is
    /// in [-Pi, Pi].
    pub fn is_valid(&self) -> bool {
        self.lat.abs() <= PI / 2.0 && self.lng.abs() <= PI
    }

    /// Return a copy clamped to a valid latitude and with its longitude
    /// wrapped into (-Pi, Pi].
    pub fn normalized(&self) -> S2LatLng {
        let lat = self.lat.clamp(-PI / 2.0, PI / 2.0);
        let mut lng = self.lng.rem_euclid(2.0 * PI);
        if lng > PI {
            lng -= 2.0 * PI;
        }
        S2LatLng::from_radians(lat, lng)
    }

    /// Convert a LatLng to a (not necessarily unit-length, but normalized
    /// in this case since the formula already yields unit length) S2Point.
    pub fn to_point(&self) -> S2Point {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lng, cos_lng) = self.lng.sin_cos();
        point_from_coords(cos_lat * cos_lng, cos_lat * sin_lng, sin_lat)
    }

    /// Return the great-circle distance between the two points.
    pub fn get_distance(&self, other: &S2LatLng) -> S1Angle {
        S1Angle::from_points(&self.to_point(), &other.to_point())
    }
}

fn latitude(p: &S2Point) -> f64 {
    f64::atan2(p.z(), (p.x() * p.x() + p.y() * p.y()).sqrt())
}

fn longitude(p: &S2Point) -> f64 {
    f64::atan2(p.y(), p.x())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_from_degrees_round_trip() {
        let ll = S2LatLng::from_degrees(45.0, 90.0);
        assert_relative_eq!(ll.lat_radians(), PI / 4.0);
        assert_relative_eq!(ll.lng_radians(), PI / 2.0);
    }

    #[test]
    fn test_point_round_trip() {
        let ll = S2LatLng::from_degrees(27.3, -110.2);
        let back = S2LatLng::from_point(&ll.to_point());
        assert_relative_eq!(ll.lat_radians(), back.lat_radians(), epsilon = 1e-14);
        assert_relative_eq!(ll.lng_radians(), back.lng_radians(), epsilon = 1e-14);
    }

    #[test]
    fn test_is_valid() {
        assert!(S2LatLng::from_degrees(10.0, 20.0).is_valid());
        assert!(!S2LatLng::from_degrees(100.0, 20.0).is_valid());
    }

    #[test]
    fn test_normalized_wraps_longitude() {
        let ll = S2LatLng::from_degrees(10.0, 270.0).normalized();
        assert_relative_eq!(ll.lng_degrees(), -90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_get_distance_quarter_circle() {
        let a = S2LatLng::from_degrees(0.0, 0.0);
        let b = S2LatLng::from_degrees(0.0, 90.0);
        assert_relative_eq!(a.get_distance(&b).degrees(), 90.0, epsilon = 1e-9);
    }
}
