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

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::{
    r1::R1Interval,
    r2::{R2Point, R2Rect},
    s1::S1Interval,
    s2::{
        self, predicates::point_area, s2cap::S2Cap, s2cell_id::S2CellId, s2latlng::S2LatLng,
        s2latlng_rect::S2LatLngRect, s2point::S2Point,
    },
};

/// The cell's (u,v) rectangle is expanded by this much on each side to
/// absorb the round-off incurred projecting a point onto the cell's face
/// before testing containment.
const MAX_CELL_EDGE_ERROR: f64 = 2.22e-16;

/// Latitude of the corners of a polar face (2 or 5): the point on the face
/// farthest from that face's pole, reached at all four corners.
fn pole_face_corner_lat() -> f64 {
    (1.0_f64 / 3.0).sqrt().asin()
}

/// An S2Cell is an S2Region object that represents a cell. Unlike S2CellId's,
/// it supports efficient containment and intersection tests. However, it is
/// also a more expensive representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct S2Cell {
    id: S2CellId,
    face: i32,
    level: i32,
    orientation: i32,
    uv: R2Rect,
}

impl S2Cell {
    pub fn new(id: S2CellId) -> Self {
        let (face, i, j, orientation) = id.to_face_ij_orientation();
        let level = id.level();
        let uv = S2CellId::ij_level_to_bound_uv(i, j, level);
        S2Cell {
            id,
            face,
            orientation,
            level,
            uv,
        }
    }

    pub fn from_face(face: i32) -> Self {
        S2Cell::new(S2CellId::from_face(face))
    }

    pub fn id(&self) -> S2CellId {
        self.id
    }

    pub fn face(&self) -> i32 {
        self.face
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn orientation(&self) -> i32 {
        self.orientation
    }

    pub fn is_leaf(&self) -> bool {
        self.level == S2CellId::MAX_LEVEL
    }

    /// Return the bound of this cell in (u, v)-space on its face.
    pub fn bound_uv(&self) -> R2Rect {
        self.uv
    }

    /// The k-th vertex of the cell (CCW order starting at the lower-left
    /// corner), projected onto the unit sphere.
    pub fn vertex(&self, k: i32) -> S2Point {
        self.vertex_raw(k).normalize()
    }

    /// The k-th vertex of the cell, not normalized.
    pub fn vertex_raw(&self, k: i32) -> S2Point {
        let uv = self.uv.vertices()[(k & 3) as usize];
        s2::face_uv_to_xyz(self.face, uv.x(), uv.y())
    }

    /// The inward-facing unit normal of the great circle through vertices k
    /// and k+1.
    pub fn edge(&self, k: i32) -> S2Point {
        match k & 3 {
            0 => s2::v_norm(self.face, self.uv.y().lo()),
            1 => s2::u_norm(self.face, self.uv.x().hi()),
            2 => -s2::v_norm(self.face, self.uv.y().hi()),
            3 => -s2::u_norm(self.face, self.uv.x().lo()),
            _ => unreachable!(),
        }
    }

    /// True if this cell contains the given point.
    pub fn contains_point(&self, p: &S2Point) -> bool {
        let uv = match s2::face_xyz_to_uv(self.face, p) {
            Some(uv) => uv,
            None => return false,
        };
        self.uv
            .expanded(&R2Point::new(MAX_CELL_EDGE_ERROR, MAX_CELL_EDGE_ERROR))
            .contains(&uv)
    }

    /// True if this cell contains `other`.
    pub fn contains_cell(&self, other: &S2Cell) -> bool {
        self.id.contains(&other.id)
    }

    /// True if this cell intersects `other`.
    pub fn intersects_cell(&self, other: &S2Cell) -> bool {
        self.id.intersects(&other.id)
    }

    /// A bounding cap for this cell: centered at the normalized center of
    /// its (u,v) rectangle, grown to include all four vertices.
    pub fn cap_bound(&self) -> S2Cap {
        let center = s2::face_uv_to_xyz(self.face, self.uv.get_center().x(), self.uv.get_center().y())
            .normalize();
        let mut cap = S2Cap::new(center, 0.0);
        for k in 0..4 {
            cap = cap.add_point(&self.vertex(k));
        }
        cap
    }

    /// A bounding lat/lng rectangle for this cell, built from its four
    /// vertices and expanded slightly to absorb normalization round-off.
    ///
    /// A level-0 face cell spans an entire cube face, and the extremal
    /// latitude on a face is reached at an edge midpoint rather than a
    /// corner, so the vertex-only approach would under-estimate it; those
    /// cells use a hand-tabulated bound per face instead.
    pub fn rect_bound(&self) -> S2LatLngRect {
        if self.level == 0 {
            return Self::level0_face_rect_bound(self.face);
        }
        let mut rect = S2LatLngRect::empty();
        for k in 0..4 {
            rect = rect.add(&S2LatLng::from_point(&self.vertex(k)));
        }
        rect = rect.expanded(&S2LatLng::from_radians(2.0 * f64::EPSILON, 2.0 * f64::EPSILON));
        rect.polar_closure()
    }

    /// The exact lat/lng bound of a level-0 face cell. Faces 0, 1, 3, 4 are
    /// the four equatorial faces (centered on the +X, +Y, -X, -Y axes); each
    /// spans exactly 90 degrees of latitude and 90 degrees of longitude.
    /// Faces 2 and 5 are the polar faces (centered on +Z and -Z); they span
    /// the full longitude range, and their latitude runs from the pole to
    /// the latitude of their four corners, `asin(1/sqrt(3))` from the pole.
    fn level0_face_rect_bound(face: i32) -> S2LatLngRect {
        let pole_lat = pole_face_corner_lat();
        match face {
            0 => S2LatLngRect::new(
                R1Interval::new(-FRAC_PI_4, FRAC_PI_4),
                S1Interval::new(-FRAC_PI_4, FRAC_PI_4),
            ),
            1 => S2LatLngRect::new(
                R1Interval::new(-FRAC_PI_4, FRAC_PI_4),
                S1Interval::new(FRAC_PI_4, 3.0 * FRAC_PI_4),
            ),
            2 => S2LatLngRect::new(
                R1Interval::new(pole_lat, FRAC_PI_2),
                S1Interval::full(),
            ),
            3 => S2LatLngRect::new(
                R1Interval::new(-FRAC_PI_4, FRAC_PI_4),
                S1Interval::new(3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4),
            ),
            4 => S2LatLngRect::new(
                R1Interval::new(-FRAC_PI_4, FRAC_PI_4),
                S1Interval::new(-3.0 * FRAC_PI_4, -FRAC_PI_4),
            ),
            5 => S2LatLngRect::new(
                R1Interval::new(-FRAC_PI_2, -pole_lat),
                S1Interval::full(),
            ),
            _ => panic!("invalid face: {face}"),
        }
    }

    /// The area of this cell, via the predicate module's triangle-area
    /// formula applied to the two triangles formed by its vertices.
    pub fn area(&self) -> f64 {
        let v0 = self.vertex(0);
        let v1 = self.vertex(1);
        let v2 = self.vertex(2);
        let v3 = self.vertex(3);
        point_area(&v0, &v1, &v2) + point_area(&v0, &v2, &v3)
    }

    /// Alias for `area`; this crate does not implement a separate
    /// higher-precision exact-area algorithm.
    pub fn exact_area(&self) -> f64 {
        self.area()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_from_face_is_leaf_at_level_zero() {
        let cell = S2Cell::from_face(2);
        assert_eq!(cell.level(), 0);
        assert!(!cell.is_leaf());
    }

    #[test]
    fn test_cell_contains_its_own_center() {
        for face in 0..6 {
            let cell = S2Cell::from_face(face);
            let center = cell.id.to_point();
            assert!(cell.contains_point(&center), "face {face}");
        }
    }

    #[test]
    fn test_leaf_cell_contains_its_point() {
        let p = S2Point::new(0.2, -0.4, 0.8).normalize();
        let id = S2CellId::from_point(&p);
        let cell = S2Cell::new(id);
        assert!(cell.contains_point(&p));
    }

    #[test]
    fn test_parent_contains_child() {
        let id = S2CellId::from_face(0).child(0);
        let parent = S2Cell::new(S2CellId::from_face(0));
        let child = S2Cell::new(id);
        assert!(parent.contains_cell(&child));
        assert!(parent.intersects_cell(&child));
    }

    #[test]
    fn test_area_is_positive_and_bounded() {
        let cell = S2Cell::from_face(0);
        let area = cell.area();
        assert!(area > 0.0);
        assert!(area < 4.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_cap_bound_contains_all_vertices() {
        let cell = S2Cell::from_face(1);
        let cap = cell.cap_bound();
        for k in 0..4 {
            assert!(cap.contains_point(&cell.vertex(k)));
        }
    }

    #[test]
    fn test_rect_bound_contains_center() {
        let id = S2CellId::from_face(0).child(0).child(0);
        let cell = S2Cell::new(id);
        let rect = cell.rect_bound();
        let center_ll = S2LatLng::from_point(&cell.id.to_point());
        assert!(rect.contains_lat_lng(&center_ll));
    }

    #[test]
    fn test_level0_rect_bound_covers_edge_midpoint_bulge() {
        // (1, 0, 0.9) lies on face 0 (x is the largest component) and its
        // latitude, ~41.99 degrees, exceeds the ~35.26 degrees reached by
        // the face's four corners. The level-0 bound must still cover it.
        let p = S2Point::new(1.0, 0.0, 0.9).normalize();
        assert_eq!(s2::get_face(&p), 0);
        let cell = S2Cell::from_face(0);
        assert!(cell.contains_point(&p));
        let rect = cell.rect_bound();
        assert!(rect.contains_lat_lng(&S2LatLng::from_point(&p)));
    }

    #[test]
    fn test_level0_rect_bound_matches_per_face_table() {
        for face in 0..6 {
            let cell = S2Cell::from_face(face);
            let rect = cell.rect_bound();
            for k in 0..4 {
                assert!(
                    rect.contains_lat_lng(&S2LatLng::from_point(&cell.vertex(k))),
                    "face {face} vertex {k}"
                );
            }
        }
    }

    #[test]
    fn test_vertex_raw_matches_face_uv() {
        let cell = S2Cell::from_face(0);
        let v = cell.vertex_raw(0);
        assert_relative_eq!(v.x(), 1.0);
    }
}
