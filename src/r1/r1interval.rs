use std::ops::{Index, IndexMut};

use crate::util::math::Vector2;

/// An R1Interval represents a closed, bounded interval on the real line.
/// It is capable of representing the empty interval (containing no points)
/// and zero-length intervals (containing a single point).
///
/// This class is intended to be copied by value as desired.  It uses
/// the default copy constructor and assignment operator.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct R1Interval {
    bounds: Vector2<f64>,
}

impl R1Interval {
    /// If lo > hi, the interval is empty.
    pub fn new(lo: f64, hi: f64) -> R1Interval {
        R1Interval {
            bounds: Vector2::new(lo, hi),
        }
    }

    /// Returns the canonical empty interval. Note that [1, 0] is considered
    /// empty.
    pub fn empty() -> R1Interval {
        R1Interval::new(1.0, 0.0)
    }

    pub fn from_point(p: f64) -> R1Interval {
        R1Interval::new(p, p)
    }

    pub fn from_point_pair(p1: f64, p2: f64) -> R1Interval {
        if p1 <= p2 {
            R1Interval::new(p1, p2)
        } else {
            R1Interval::new(p2, p1)
        }
    }

    /// The low bound of the interval.
    pub fn lo(&self) -> f64 {
        self.bounds[0]
    }

    /// The high bound of the interval.
    pub fn hi(&self) -> f64 {
        self.bounds[1]
    }

    pub fn bounds(&self) -> &Vector2<f64> {
        &self.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut Vector2<f64> {
        &mut self.bounds
    }

    /// Return true if the interval is empty, i.e. it contains no points.
    pub fn is_empty(&self) -> bool {
        self.lo() > self.hi()
    }

    /// Return the center of the interval.  For empty intervals,
    /// the result is arbitrary.
    pub fn get_center(&self) -> f64 {
        0.5 * (self.lo() + self.hi())
    }

    /// Return the length of the interval.  The length of an empty interval
    /// is negative.
    pub fn get_length(&self) -> f64 {
        self.hi() - self.lo()
    }

    /// Returns true if the given point is in the closed interval [lo, hi].
    pub fn contains(&self, p: f64) -> bool {
        p >= self.lo() && p <= self.hi()
    }

    /// Returns true if the given point is in the open interval (lo, hi).
    pub fn interior_contains(&self, p: f64) -> bool {
        p > self.lo() && p < self.hi()
    }

    /// Returns true if this interval contains the given interval.
    pub fn contains_interval(&self, y: &R1Interval) -> bool {
        if y.is_empty() {
            true
        } else {
            y.lo() >= self.lo() && y.hi() <= self.hi()
        }
    }

    /// Returns true if the interior of this interval contains the entirety
    /// of the given interval (including its boundary).
    pub fn interior_contains_interval(&self, y: &R1Interval) -> bool {
        if y.is_empty() {
            true
        } else {
            y.lo() > self.lo() && y.hi() < self.hi()
        }
    }

    /// Returns true if this interval intersects the given interval, i.e. if
    /// they have any points in common.
    pub fn intersects(&self, y: &R1Interval) -> bool {
        if self.lo() <= y.lo() {
            y.lo() <= self.hi() && !y.is_empty()
        } else {
            self.lo() <= y.hi() && !self.is_empty()
        }
    }

    /// Returns true if the interior of this interval intersects any point of
    /// the given interval (including its boundary).
    pub fn interior_intersects(&self, y: &R1Interval) -> bool {
        y.lo() < self.hi() && self.lo() < y.hi() && !self.is_empty() && !y.is_empty()
    }

    /// Returns the Hausdorff distance to the given interval. For two
    /// empty intervals, the distance is zero. Otherwise, one empty interval
    /// and one non-empty interval have an infinite distance.
    pub fn get_directed_hausdorff_distance(&self, y: &R1Interval) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        if y.is_empty() {
            return f64::INFINITY;
        }
        0f64.max(self.hi() - y.hi()).max(y.lo() - self.lo())
    }

    /// Expand the interval so that it contains the given point "p".
    pub fn add_point(&self, p: f64) -> R1Interval {
        if self.is_empty() {
            R1Interval::from_point(p)
        } else if p < self.lo() {
            R1Interval::new(p, self.hi())
        } else if p > self.hi() {
            R1Interval::new(self.lo(), p)
        } else {
            *self
        }
    }

    /// Return an interval that contains all points with a distance "radius"
    /// of a point in this interval. Note that the expansion of an empty
    /// interval is always empty. A negative radius shrinks the interval
    /// instead; if this would invert it, the result is the empty interval.
    pub fn expanded(&self, radius: f64) -> R1Interval {
        if self.is_empty() {
            return *self;
        }
        let result = R1Interval::new(self.lo() - radius, self.hi() + radius);
        if result.is_empty() {
            R1Interval::empty()
        } else {
            result
        }
    }

    /// Return the smallest interval that contains this interval and the
    /// given interval.
    pub fn union(&self, y: &R1Interval) -> R1Interval {
        if self.is_empty() {
            return *y;
        }
        if y.is_empty() {
            return *self;
        }
        R1Interval::new(self.lo().min(y.lo()), self.hi().max(y.hi()))
    }

    /// Return the intersection of this interval with the given interval.
    /// Empty intervals do not need to be specially represented.
    pub fn intersection(&self, y: &R1Interval) -> R1Interval {
        R1Interval::new(self.lo().max(y.lo()), self.hi().min(y.hi()))
    }

    /// Return true if the length of the symmetric difference between the
    /// two intervals is at most `max_error`.
    pub fn approx_equals(&self, y: &R1Interval, max_error: f64) -> bool {
        if self.is_empty() {
            return y.get_length() <= max_error;
        }
        if y.is_empty() {
            return self.get_length() <= max_error;
        }
        (y.lo() - self.lo()).abs() + (y.hi() - self.hi()).abs() <= max_error
    }

    /// Return the closest point in the interval to the given point "p". The
    /// interval must be non-empty.
    pub fn clamp_point(&self, p: f64) -> f64 {
        p.max(self.lo()).min(self.hi())
    }
}

impl Index<usize> for R1Interval {
    type Output = f64;

    /// The recommended style is to use `lo()` and `hi()` whenever possible,
    /// but these methods are useful when the endpoint to be selected is not constant.
    fn index(&self, index: usize) -> &Self::Output {
        &self.bounds[index]
    }
}

impl IndexMut<usize> for R1Interval {
    /// The recommended style is to use `lo()` and `hi()` whenever possible,
    /// but these methods are useful when the endpoint to be selected is not constant.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.bounds[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let i = R1Interval::empty();
        assert!(i.is_empty());
        assert_eq!(i.get_length(), -1.0);
    }

    #[test]
    fn test_contains() {
        let i = R1Interval::new(2.0, 4.0);
        assert!(i.contains(2.0));
        assert!(i.contains(4.0));
        assert!(i.contains(3.0));
        assert!(!i.contains(1.9));
        assert!(!i.interior_contains(2.0));
        assert!(i.interior_contains(3.0));
    }

    #[test]
    fn test_contains_interval() {
        let i = R1Interval::new(0.0, 4.0);
        assert!(i.contains_interval(&R1Interval::new(1.0, 3.0)));
        assert!(i.contains_interval(&R1Interval::empty()));
        assert!(!i.contains_interval(&R1Interval::new(-1.0, 2.0)));
        assert!(!i.interior_contains_interval(&R1Interval::new(0.0, 4.0)));
        assert!(i.interior_contains_interval(&R1Interval::new(1.0, 3.0)));
    }

    #[test]
    fn test_intersects() {
        let i = R1Interval::new(0.0, 2.0);
        assert!(i.intersects(&R1Interval::new(1.0, 3.0)));
        assert!(!i.intersects(&R1Interval::new(3.0, 5.0)));
        assert!(!i.intersects(&R1Interval::empty()));
        assert!(!R1Interval::empty().intersects(&i));
        assert!(i.interior_intersects(&R1Interval::new(1.0, 3.0)));
        assert!(!i.interior_intersects(&R1Interval::new(2.0, 3.0)));
    }

    #[test]
    fn test_union_and_intersection() {
        let a = R1Interval::new(0.0, 2.0);
        let b = R1Interval::new(1.0, 3.0);
        assert_eq!(a.union(&b), R1Interval::new(0.0, 3.0));
        assert_eq!(a.intersection(&b), R1Interval::new(1.0, 2.0));

        let disjoint = R1Interval::new(5.0, 6.0);
        assert!(a.intersection(&disjoint).is_empty());
        assert_eq!(a.union(&R1Interval::empty()), a);
    }

    #[test]
    fn test_add_point() {
        let i = R1Interval::new(0.0, 2.0);
        assert_eq!(i.add_point(3.0), R1Interval::new(0.0, 3.0));
        assert_eq!(i.add_point(-1.0), R1Interval::new(-1.0, 2.0));
        assert_eq!(i.add_point(1.0), i);
        assert_eq!(
            R1Interval::empty().add_point(5.0),
            R1Interval::from_point(5.0)
        );
    }

    #[test]
    fn test_expanded() {
        let i = R1Interval::new(0.0, 2.0);
        assert_eq!(i.expanded(1.0), R1Interval::new(-1.0, 3.0));
        assert!(i.expanded(-2.0).is_empty());
        assert!(R1Interval::empty().expanded(1.0).is_empty());
    }

    #[test]
    fn test_clamp_point() {
        let i = R1Interval::new(0.0, 2.0);
        assert_eq!(i.clamp_point(3.0), 2.0);
        assert_eq!(i.clamp_point(-3.0), 0.0);
        assert_eq!(i.clamp_point(1.0), 1.0);
    }
}
