use std::f64::consts::PI;

/// An S1Interval represents a closed interval on a unit circle (also known
/// as a 1-dimensional sphere). It is capable of representing the empty
/// interval (containing no points), the full interval (containing all
/// points), and zero-length intervals (containing a single point).
///
/// Points are represented by the angle they make with the positive x-axis,
/// measured in radians in the range [-Pi, Pi]. An interval is represented
/// by its lower and upper bounds (lo, hi). Both endpoints must be in the
/// range [-Pi, Pi], with the exception that a value of -Pi may also be
/// represented as +Pi; this allows the interval to represent the arc that
/// just barely reaches +Pi without being the full circle.
///
/// The ordering of the two endpoints is significant: the interval is the
/// set of points traversed CCW from `lo` to `hi`. If `lo <= hi` this is the
/// ordinary interval `[lo, hi]`. If `lo > hi` the interval is "inverted":
/// it wraps around through +/-Pi and represents everything *except* the
/// open interval `(hi, lo)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct S1Interval {
    lo: f64,
    hi: f64,
}

/// Return the CCW distance you travel from `a` to `b`, i.e. the length of
/// the (ordinary, non-inverted) arc `[a, b]`. The result is in `[0, 2*Pi)`.
fn positive_distance(a: f64, b: f64) -> f64 {
    let d = b - a;
    if d >= 0.0 {
        d
    } else {
        d + 2.0 * PI
    }
}

impl S1Interval {
    /// Constructs an interval from the given pair of endpoints. Both
    /// endpoints must be in `[-Pi, Pi]`.
    pub fn new(lo: f64, hi: f64) -> S1Interval {
        debug_assert!((-PI..=PI).contains(&lo));
        debug_assert!((-PI..=PI).contains(&hi));
        S1Interval { lo, hi }
    }

    /// The canonical empty interval. Note `empty().hi() == -empty().lo()`.
    pub fn empty() -> S1Interval {
        S1Interval::new(PI, -PI)
    }

    /// The canonical full interval.
    pub fn full() -> S1Interval {
        S1Interval::new(-PI, PI)
    }

    /// Convenience constructor for a single point.
    pub fn from_point(p: f64) -> S1Interval {
        let p = if p == -PI { PI } else { p };
        S1Interval::new(p, p)
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Return true if `lo() > hi()`, i.e. the interval wraps around Pi.
    pub fn is_inverted(&self) -> bool {
        self.lo > self.hi
    }

    pub fn is_empty(&self) -> bool {
        self.lo == PI && self.hi == -PI
    }

    pub fn is_full(&self) -> bool {
        self.lo == -PI && self.hi == PI
    }

    /// Return the center of the interval. For full and empty intervals, the
    /// result is arbitrary.
    pub fn get_center(&self) -> f64 {
        let center = 0.5 * (self.lo + self.hi);
        if !self.is_inverted() {
            return center;
        }
        if center <= 0.0 {
            center + PI
        } else {
            center - PI
        }
    }

    /// Return the length of the interval. The length of the canonical
    /// empty interval is zero; the length of the full interval is `2*Pi`.
    pub fn get_length(&self) -> f64 {
        if self.lo <= self.hi {
            self.hi - self.lo
        } else {
            2.0 * PI - (self.lo - self.hi)
        }
    }

    /// Return the complement of the interior of the interval. An interval
    /// and its complement have the same boundary but do not share any
    /// interior points. The complement of the empty interval is full, and
    /// vice-versa.
    pub fn complement(&self) -> S1Interval {
        if self.lo == self.hi {
            // Singleton: its complement is the full circle minus a point,
            // which collapses to Full() under this representation.
            S1Interval::full()
        } else {
            S1Interval::new(self.hi, self.lo)
        }
    }

    /// Contains without normalizing -Pi to Pi first; used internally once
    /// endpoints are already known to be in canonical form.
    fn fast_contains(&self, p: f64) -> bool {
        if self.is_inverted() {
            (p >= self.lo || p <= self.hi) && !self.is_empty()
        } else {
            p >= self.lo && p <= self.hi
        }
    }

    /// Returns true if the interval (which is closed) contains the point
    /// `p`. Points are identified modulo 2*Pi, so -Pi and Pi are treated as
    /// the same point.
    pub fn contains(&self, p: f64) -> bool {
        let p = if p == -PI { PI } else { p };
        self.fast_contains(p)
    }

    /// Returns true if the interior of the interval contains `p`.
    pub fn interior_contains(&self, p: f64) -> bool {
        let p = if p == -PI { PI } else { p };
        if self.is_inverted() {
            p > self.lo || p < self.hi
        } else {
            (p > self.lo && p < self.hi) || self.is_full()
        }
    }

    /// Returns true if this interval contains `other`.
    pub fn contains_interval(&self, other: &S1Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_inverted() {
            if other.is_inverted() {
                other.lo >= self.lo && other.hi <= self.hi
            } else {
                (other.lo >= self.lo || other.hi <= self.hi) && !self.is_empty()
            }
        } else if other.is_inverted() {
            self.is_full()
        } else {
            other.lo >= self.lo && other.hi <= self.hi
        }
    }

    /// Returns true if the interior of this interval contains `other`
    /// entirely (including its boundary).
    pub fn interior_contains_interval(&self, other: &S1Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_inverted() {
            if other.is_inverted() {
                other.lo > self.lo && other.hi < self.hi
            } else {
                (other.lo > self.lo || other.hi < self.hi) && !self.is_empty()
            }
        } else if other.is_inverted() {
            self.is_full()
        } else {
            (other.lo > self.lo && other.hi < self.hi) || self.is_full()
        }
    }

    /// Returns true if this interval intersects `other`, i.e. if the two
    /// intervals have any points in common.
    pub fn intersects(&self, other: &S1Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.is_inverted() {
            other.is_inverted() || other.lo <= self.hi || other.hi >= self.lo
        } else if other.is_inverted() {
            other.lo <= self.hi || other.hi >= self.lo
        } else {
            other.lo <= self.hi && other.hi >= self.lo
        }
    }

    /// Returns true if the interior of this interval intersects any point
    /// (including the boundary) of `other`.
    pub fn interior_intersects(&self, other: &S1Interval) -> bool {
        if self.is_empty() || other.is_empty() || self.lo == self.hi {
            return false;
        }
        if self.is_inverted() {
            other.is_inverted() || other.lo < self.hi || other.hi > self.lo
        } else if other.is_inverted() {
            other.lo < self.hi || other.hi > self.lo
        } else {
            (other.lo < self.hi && other.hi > self.lo) || self.is_full()
        }
    }

    /// Expand the interval by the minimum amount necessary so that it
    /// contains the given point `p`. Ties (both extensions equally short)
    /// are broken by extending towards `lo`.
    pub fn add_point(&self, p: f64) -> S1Interval {
        let p = if p == -PI { PI } else { p };
        if self.contains(p) {
            return *self;
        }
        if self.is_empty() {
            return S1Interval::from_point(p);
        }
        let dlo = positive_distance(p, self.lo);
        let dhi = positive_distance(self.hi, p);
        if dlo <= dhi {
            S1Interval::new(p, self.hi)
        } else {
            S1Interval::new(self.lo, p)
        }
    }

    /// Return the smallest interval that contains this interval and the
    /// given interval.
    pub fn union(&self, other: &S1Interval) -> S1Interval {
        if other.is_empty() {
            return *self;
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                if self.contains_interval(other) {
                    return *self;
                }
                return S1Interval::full();
            }
            return S1Interval::new(self.lo, other.hi);
        }
        if self.fast_contains(other.hi) {
            return S1Interval::new(other.lo, self.hi);
        }
        if self.is_empty() || other.fast_contains(self.lo) {
            return *other;
        }
        let dlo = positive_distance(other.hi, self.lo);
        let dhi = positive_distance(self.hi, other.lo);
        if dlo < dhi {
            S1Interval::new(other.lo, self.hi)
        } else {
            S1Interval::new(self.lo, other.hi)
        }
    }

    /// Return the smallest interval containing the intersection of this
    /// interval and `other`. Empty intervals do not need to be specially
    /// represented.
    pub fn intersection(&self, other: &S1Interval) -> S1Interval {
        if other.is_empty() {
            return S1Interval::empty();
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                if other.get_length() < self.get_length() {
                    return *other;
                }
                return *self;
            }
            return S1Interval::new(other.lo, self.hi);
        }
        if self.fast_contains(other.hi) {
            return S1Interval::new(self.lo, other.hi);
        }
        if other.fast_contains(self.lo) {
            return *self;
        }
        S1Interval::empty()
    }

    /// Return true if the length of the symmetric difference between the
    /// two intervals is at most `max_error`.
    pub fn approx_equals(&self, other: &S1Interval, max_error: f64) -> bool {
        if self.is_empty() {
            return other.get_length() <= max_error;
        }
        if other.is_empty() {
            return self.get_length() <= max_error;
        }
        ((other.lo - self.lo + PI).rem_euclid(2.0 * PI) - PI).abs()
            + ((other.hi - self.hi + PI).rem_euclid(2.0 * PI) - PI).abs()
            <= max_error
    }
}
