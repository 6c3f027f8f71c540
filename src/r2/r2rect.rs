use std::ops::{Index, IndexMut};

use crate::r1::R1Interval;
use crate::r2::R2Point;

/// An R2Rect represents a closed axis-aligned rectangle in the (x,y) plane.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct R2Rect {
    bounds: [R1Interval; 2],
}

impl R2Rect {
    /// Construct a rectangle from the given lower-left and upper-right points.
    pub fn new(lo: R2Point, hi: R2Point) -> R2Rect {
        R2Rect {
            bounds: [
                R1Interval::new(lo.x(), hi.x()),
                R1Interval::new(lo.y(), hi.y()),
            ],
        }
    }

    /// Construct a rectangle from the given x/y intervals.
    pub fn from_intervals(x: R1Interval, y: R1Interval) -> R2Rect {
        R2Rect { bounds: [x, y] }
    }

    /// The canonical empty rectangle. Note that both axes must agree that
    /// the rectangle is empty.
    pub fn empty() -> R2Rect {
        R2Rect::from_intervals(R1Interval::empty(), R1Interval::empty())
    }

    /// Construct a rectangle from a center point and size in each dimension.
    /// Both components of size must be non-negative.
    pub fn from_center_size(center: R2Point, size: R2Point) -> R2Rect {
        R2Rect::new(
            R2Point::new(center.x() - 0.5 * size.x(), center.y() - 0.5 * size.y()),
            R2Point::new(center.x() + 0.5 * size.x(), center.y() + 0.5 * size.y()),
        )
    }

    /// Convenience method to construct a rectangle containing a single point.
    pub fn from_point(p: R2Point) -> R2Rect {
        R2Rect::new(p, p)
    }

    /// Convenience method to construct the minimal bounding rectangle
    /// containing the two given points. This is equivalent to starting with
    /// an empty rectangle and calling `add_point` twice, but it is more
    /// efficient.
    pub fn from_point_pair(p1: R2Point, p2: R2Point) -> R2Rect {
        R2Rect::from_intervals(
            R1Interval::from_point_pair(p1.x(), p2.x()),
            R1Interval::from_point_pair(p1.y(), p2.y()),
        )
    }

    pub fn x(&self) -> R1Interval {
        self.bounds[0]
    }

    pub fn y(&self) -> R1Interval {
        self.bounds[1]
    }

    pub fn lo(&self) -> R2Point {
        R2Point::new(self.x().lo(), self.y().lo())
    }

    pub fn hi(&self) -> R2Point {
        R2Point::new(self.x().hi(), self.y().hi())
    }

    /// Return true if the rectangle is empty, i.e. it contains no points at
    /// all. Note that both components must independently be empty: an
    /// R2Rect cannot have one empty axis and one non-empty axis.
    pub fn is_empty(&self) -> bool {
        self.x().is_empty()
    }

    pub fn get_center(&self) -> R2Point {
        R2Point::new(self.x().get_center(), self.y().get_center())
    }

    pub fn get_size(&self) -> R2Point {
        R2Point::new(self.x().get_length(), self.y().get_length())
    }

    /// Return the vertices of the rectangle in CCW order starting from the
    /// lower-left corner.
    pub fn vertices(&self) -> [R2Point; 4] {
        [
            R2Point::new(self.x().lo(), self.y().lo()),
            R2Point::new(self.x().hi(), self.y().lo()),
            R2Point::new(self.x().hi(), self.y().hi()),
            R2Point::new(self.x().lo(), self.y().hi()),
        ]
    }

    pub fn contains(&self, p: &R2Point) -> bool {
        self.x().contains(p.x()) && self.y().contains(p.y())
    }

    pub fn interior_contains(&self, p: &R2Point) -> bool {
        self.x().interior_contains(p.x()) && self.y().interior_contains(p.y())
    }

    pub fn contains_rect(&self, other: &R2Rect) -> bool {
        self.x().contains_interval(&other.x()) && self.y().contains_interval(&other.y())
    }

    pub fn interior_contains_rect(&self, other: &R2Rect) -> bool {
        self.x().interior_contains_interval(&other.x())
            && self.y().interior_contains_interval(&other.y())
    }

    pub fn intersects(&self, other: &R2Rect) -> bool {
        self.x().intersects(&other.x()) && self.y().intersects(&other.y())
    }

    pub fn interior_intersects(&self, other: &R2Rect) -> bool {
        self.x().interior_intersects(&other.x()) && self.y().interior_intersects(&other.y())
    }

    /// Expand the rectangle to include the given point. The rectangle is
    /// expanded by the minimum amount possible.
    pub fn add_point(&self, p: &R2Point) -> R2Rect {
        R2Rect::from_intervals(self.x().add_point(p.x()), self.y().add_point(p.y()))
    }

    pub fn add_rect(&self, other: &R2Rect) -> R2Rect {
        R2Rect::from_intervals(self.x().union(&other.x()), self.y().union(&other.y()))
    }

    /// Return the closest point in the rectangle to the given point. The
    /// rectangle must be non-empty.
    pub fn clamp_point(&self, p: &R2Point) -> R2Point {
        R2Point::new(self.x().clamp_point(p.x()), self.y().clamp_point(p.y()))
    }

    /// Return a rectangle that has been expanded on each side in the x
    /// direction by `margin.x()` and on each side in the y direction by
    /// `margin.y()`. If either margin is negative, the rectangle is shrunk
    /// instead. See `R1Interval::expanded` for details.
    pub fn expanded(&self, margin: &R2Point) -> R2Rect {
        let xx = self.x().expanded(margin.x());
        let yy = self.y().expanded(margin.y());
        if xx.is_empty() || yy.is_empty() {
            R2Rect::empty()
        } else {
            R2Rect::from_intervals(xx, yy)
        }
    }

    pub fn union(&self, other: &R2Rect) -> R2Rect {
        R2Rect::from_intervals(self.x().union(&other.x()), self.y().union(&other.y()))
    }

    pub fn intersection(&self, other: &R2Rect) -> R2Rect {
        let xx = self.x().intersection(&other.x());
        let yy = self.y().intersection(&other.y());
        if xx.is_empty() || yy.is_empty() {
            R2Rect::empty()
        } else {
            R2Rect::from_intervals(xx, yy)
        }
    }

    pub fn approx_equals(&self, other: &R2Rect, max_error: f64) -> bool {
        self.x().approx_equals(&other.x(), max_error)
            && self.y().approx_equals(&other.y(), max_error)
    }
}

impl Index<usize> for R2Rect {
    type Output = R1Interval;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bounds[index]
    }
}

impl IndexMut<usize> for R2Rect {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.bounds[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let r = R2Rect::empty();
        assert!(r.is_empty());
        assert!(r.x().is_empty());
        assert!(r.y().is_empty());
    }

    #[test]
    fn test_from_point_pair() {
        let r = R2Rect::from_point_pair(R2Point::new(1.0, 5.0), R2Point::new(-1.0, 2.0));
        assert_eq!(r.x(), R1Interval::new(-1.0, 1.0));
        assert_eq!(r.y(), R1Interval::new(2.0, 5.0));
    }

    #[test]
    fn test_contains() {
        let r = R2Rect::new(R2Point::new(0.0, 0.0), R2Point::new(2.0, 4.0));
        assert!(r.contains(&R2Point::new(1.0, 1.0)));
        assert!(r.contains(&R2Point::new(0.0, 0.0)));
        assert!(!r.contains(&R2Point::new(3.0, 1.0)));
        assert!(!r.interior_contains(&R2Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_vertices_ccw_from_lower_left() {
        let r = R2Rect::new(R2Point::new(0.0, 0.0), R2Point::new(1.0, 2.0));
        let v = r.vertices();
        assert_eq!(v[0], R2Point::new(0.0, 0.0));
        assert_eq!(v[1], R2Point::new(1.0, 0.0));
        assert_eq!(v[2], R2Point::new(1.0, 2.0));
        assert_eq!(v[3], R2Point::new(0.0, 2.0));
    }

    #[test]
    fn test_union_and_intersection() {
        let a = R2Rect::new(R2Point::new(0.0, 0.0), R2Point::new(2.0, 2.0));
        let b = R2Rect::new(R2Point::new(1.0, 1.0), R2Point::new(3.0, 3.0));
        assert_eq!(
            a.union(&b),
            R2Rect::new(R2Point::new(0.0, 0.0), R2Point::new(3.0, 3.0))
        );
        assert_eq!(
            a.intersection(&b),
            R2Rect::new(R2Point::new(1.0, 1.0), R2Point::new(2.0, 2.0))
        );

        let disjoint = R2Rect::new(R2Point::new(10.0, 10.0), R2Point::new(11.0, 11.0));
        assert!(a.intersection(&disjoint).is_empty());
    }

    #[test]
    fn test_expanded_empty_stays_empty() {
        let r = R2Rect::empty();
        assert!(r.expanded(&R2Point::new(1.0, 1.0)).is_empty());
    }

    #[test]
    fn test_expanded_can_invert_to_empty() {
        let r = R2Rect::new(R2Point::new(0.0, 0.0), R2Point::new(1.0, 1.0));
        assert!(r.expanded(&R2Point::new(-1.0, -1.0)).is_empty());
    }
}
