// An S2Region represents a two-dimensional region over the unit sphere.
// It is an abstract interface with various concrete subtypes.
//
// The main purpose of this interface is to allow complex regions to be
// approximated as simpler regions.  So rather than having a wide variety
// of virtual methods that are implemented by all subtypes, the interface
// is restricted to methods that are useful for computing approximations.

use crate::s2::{s2cap::S2Cap, s2cell::S2Cell, s2latlng_rect::S2LatLngRect};

/// Shared capability implemented by every concrete region type (cap, cell,
/// lat/lng rect, and — outside this crate's scope — polyline and polygon).
/// Lets callers that only need approximate bounds or cell-level
/// containment/intersection tests work generically across region kinds,
/// including via `&dyn S2Region`.
pub trait S2Region {
    /// A bounding cap for this region. Not necessarily tight.
    fn cap_bound(&self) -> S2Cap;

    /// A bounding lat/lng rectangle for this region. Not necessarily tight.
    fn rect_bound(&self) -> S2LatLngRect;

    /// True if this region entirely contains the given cell.
    fn contains_cell(&self, cell: &S2Cell) -> bool;

    /// True if this region intersects the given cell.
    fn intersects_cell(&self, cell: &S2Cell) -> bool;
}

impl S2Region for S2Cap {
    fn cap_bound(&self) -> S2Cap {
        S2Cap::cap_bound(self)
    }

    fn rect_bound(&self) -> S2LatLngRect {
        S2Cap::rect_bound(self)
    }

    fn contains_cell(&self, cell: &S2Cell) -> bool {
        for k in 0..4 {
            if !self.contains_point(&cell.vertex(k)) {
                return false;
            }
        }
        true
    }

    fn intersects_cell(&self, cell: &S2Cell) -> bool {
        S2Cap::intersects_cell(self, cell)
    }
}

impl S2Region for S2Cell {
    fn cap_bound(&self) -> S2Cap {
        S2Cell::cap_bound(self)
    }

    fn rect_bound(&self) -> S2LatLngRect {
        S2Cell::rect_bound(self)
    }

    fn contains_cell(&self, cell: &S2Cell) -> bool {
        S2Cell::contains_cell(self, cell)
    }

    fn intersects_cell(&self, cell: &S2Cell) -> bool {
        S2Cell::intersects_cell(self, cell)
    }
}

impl S2Region for S2LatLngRect {
    fn cap_bound(&self) -> S2Cap {
        // A rect's extent is approximated by a cap centered at the rect's
        // center, grown to cover all four corners.
        let center = self.get_center().to_point();
        let mut cap = S2Cap::new(center, 0.0);
        for lat in [self.lat().lo(), self.lat().hi()] {
            for lng in [self.lng().lo(), self.lng().hi()] {
                let corner = crate::s2::s2latlng::S2LatLng::from_radians(lat, lng).to_point();
                cap = cap.add_point(&corner);
            }
        }
        cap
    }

    fn rect_bound(&self) -> S2LatLngRect {
        *self
    }

    fn contains_cell(&self, cell: &S2Cell) -> bool {
        for k in 0..4 {
            if !self.contains_point(&cell.vertex(k)) {
                return false;
            }
        }
        true
    }

    fn intersects_cell(&self, cell: &S2Cell) -> bool {
        for k in 0..4 {
            if self.contains_point(&cell.vertex(k)) {
                return true;
            }
        }
        // Fall back to the cell's own bounding rect, which is conservative
        // but correct: if the two rects don't even overlap, the cell can't
        // intersect this region.
        self.intersects(&cell.rect_bound())
    }
}

#[cfg(test)]
mod tests {
    use crate::s2::{s2cell_id::S2CellId, s2latlng::S2LatLng};

    use super::*;

    #[test]
    fn test_cap_contains_cell_via_trait() {
        let cell = S2Cell::new(S2CellId::from_face(0).child(0));
        let cap = cell.cap_bound();
        assert!(S2Region::contains_cell(&cap, &cell));
    }

    #[test]
    fn test_rect_bound_of_cell_contains_cell() {
        let cell = S2Cell::new(S2CellId::from_face(2).child(1));
        let rect = S2Region::rect_bound(&cell);
        assert!(S2Region::contains_cell(&rect, &cell));
    }

    #[test]
    fn test_latlngrect_as_trait_object() {
        let rect = S2LatLngRect::from_point(&S2LatLng::from_degrees(10.0, 10.0));
        let region: &dyn S2Region = &rect;
        let _ = region.cap_bound();
    }
}
