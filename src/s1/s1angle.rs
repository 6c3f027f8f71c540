// Copyright 2005 Google Inc. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS-IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

// Original Author: ericv@google.com (Eric Veach)

use std::f64::consts::PI;
use std::ops::{Add, Neg, Sub};

use crate::{s1::S1ChordAngle, s2::s2point::S2Point};

/// This class represents a one-dimensional angle (as opposed to a
/// two-dimensional solid angle).  It has methods for converting angles to
/// or from radians, degrees, and the E5/E6/E7 representations (i.e. degrees
/// multiplied by 1e5/1e6/1e7 and rounded to the nearest integer).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct S1Angle {
    radians: f64,
}

impl S1Angle {
    /// Creates an S1Angle from a value in radians.
    ///
    /// # Examples
    ///
    /// ```
    /// use s2::s1::s1angle::S1Angle;
    /// use std::f64::consts::PI;
    ///
    /// let angle = S1Angle::from_radians(PI / 2.0);
    /// assert_eq!(angle.radians(), PI / 2.0);
    /// ```
    pub fn from_radians(radians: f64) -> S1Angle {
        S1Angle { radians }
    }

    /// Creates an S1Angle from a value in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use s2::s1::S1Angle;
    /// use std::f64::consts::PI;
    ///
    /// let angle = S1Angle::from_degrees(90.0);
    /// assert_eq!(angle.radians(), PI / 2.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> S1Angle {
        S1Angle::from_radians(degrees * PI / 180.0)
    }

    /// Creates an S1Angle from the E5 representation (degrees * 1e5,
    /// rounded to the nearest integer).
    pub fn from_e5(e5: i32) -> S1Angle {
        S1Angle::from_degrees(e5 as f64 * 1e-5)
    }

    /// Creates an S1Angle from the E6 representation (degrees * 1e6,
    /// rounded to the nearest integer).
    pub fn from_e6(e6: i32) -> S1Angle {
        S1Angle::from_degrees(e6 as f64 * 1e-6)
    }

    /// Creates an S1Angle from the E7 representation (degrees * 1e7,
    /// rounded to the nearest integer).
    pub fn from_e7(e7: i32) -> S1Angle {
        S1Angle::from_degrees(e7 as f64 * 1e-7)
    }

    /// Creates an S1Angle from two S2Point's.
    ///
    /// # Examples
    ///
    /// ```
    /// use s2::{s1::S1Angle, s2::S2Point};
    ///
    /// let p1 = S2Point::new(1.0, 0.0, 0.0);
    /// let p2 = S2Point::new(0.0, 1.0, 0.0);
    ///
    /// let angle = S1Angle::from_points(&p1, &p2);
    /// assert_eq!(angle.degrees(), 90.0);
    /// ```
    pub fn from_points(x: &S2Point, y: &S2Point) -> S1Angle {
        S1Angle::from_radians(x.angle(y))
    }

    pub fn zero() -> S1Angle {
        S1Angle::from_radians(0.0)
    }

    pub fn infinity() -> S1Angle {
        S1Angle::from_radians(f64::INFINITY)
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        (180.0 / PI) * self.radians
    }

    pub fn e5(&self) -> i32 {
        (self.degrees() * 1e5).round() as i32
    }

    pub fn e6(&self) -> i32 {
        (self.degrees() * 1e6).round() as i32
    }

    pub fn e7(&self) -> i32 {
        (self.degrees() * 1e7).round() as i32
    }

    pub fn abs(self) -> S1Angle {
        S1Angle::from_radians(self.radians.abs())
    }

    /// Normalizes this angle to the range (-180, 180] degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use s2::s1::S1Angle;
    ///
    /// let angle = S1Angle::from_degrees(270.0);
    /// assert_eq!(angle.normalize().degrees(), -90.0);
    ///
    /// let angle = S1Angle::from_degrees(-270.0);
    /// assert_eq!(angle.normalize().degrees(), 90.0);
    ///
    /// let angle = S1Angle::from_degrees(180.0);
    /// assert_eq!(angle.normalize().degrees(), 180.0);
    /// ```
    pub fn normalize(self) -> S1Angle {
        let mut radians = self.radians.rem_euclid(2.0 * PI);
        if radians > PI {
            radians -= 2.0 * PI;
        }
        S1Angle::from_radians(radians)
    }
}

impl Default for S1Angle {
    fn default() -> S1Angle {
        S1Angle::zero()
    }
}

impl Add for S1Angle {
    type Output = S1Angle;

    fn add(self, rhs: S1Angle) -> S1Angle {
        S1Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for S1Angle {
    type Output = S1Angle;

    fn sub(self, rhs: S1Angle) -> S1Angle {
        S1Angle::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for S1Angle {
    type Output = S1Angle;

    fn neg(self) -> S1Angle {
        S1Angle::from_radians(-self.radians)
    }
}

impl From<S1ChordAngle> for S1Angle {
    fn from(value: S1ChordAngle) -> S1Angle {
        if value.is_negative() {
            S1Angle::from_radians(-1.0)
        } else if value.is_infinity() {
            S1Angle::infinity()
        } else {
            S1Angle::from_radians(2.0 * (0.5 * (value.length2()).sqrt()).asin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees() {
        assert_eq!(S1Angle::from_degrees(45.0).radians(), PI / 4.0);
    }

    #[test]
    fn test_e5_e6_e7() {
        let angle = S1Angle::from_degrees(12.3456789);
        assert_eq!(S1Angle::from_e7(angle.e7()).e7(), angle.e7());
    }

    #[test]
    fn test_arithmetic() {
        let a = S1Angle::from_degrees(30.0);
        let b = S1Angle::from_degrees(60.0);
        assert_eq!((a + b).degrees(), 90.0);
        assert_eq!((b - a).degrees(), 30.0);
        assert_eq!((-a).degrees(), -30.0);
    }

    #[test]
    fn test_from_chord_angle_bounds() {
        assert_eq!(S1Angle::from(S1ChordAngle::negative()).radians(), -1.0);
        assert_eq!(
            S1Angle::from(S1ChordAngle::infinity()).radians(),
            f64::INFINITY
        );
        assert_eq!(S1Angle::from(S1ChordAngle::zero()).radians(), 0.0);
    }
}
