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

use lazy_static::lazy_static;

use crate::{
    r1::R1Interval,
    r2::R2Rect,
    s2::{
        error::S2CellIdParseError,
        internal::{INVERT_MASK, POS_TO_IJ, POS_TO_ORIENTATION, SWAP_MASK},
        s2latlng::S2LatLng,
        s2point::S2Point,
    },
};

use super::{face_uv_to_xyz, ij_to_st_min, siti_to_st, st_to_ij, st_to_uv, uv_to_st, xyz_to_face_uv};

/// An S2CellId is a 64-bit unsigned integer that uniquely identifies a
/// cell in the S2 cell decomposition. It has the following format:
///
///   id = [face][face_pos]
///
///   face:     a 3-bit number (range 0..5) encoding the cube face.
///
///   face_pos: a 61-bit number encoding the position of the center of this
///             cell along the Hilbert curve over this face.
///
/// Sequentially increasing cell ids follow a continuous space-filling curve
/// over the entire sphere. They have the following properties:
///
///  - The id of a cell at level k consists of a 3-bit face number followed
///    by k bit pairs that recursively select one of the four children of
///    each cell. The next bit is always 1, and all other bits are 0.
///    Therefore, the level of a cell is determined by the position of its
///    lowest-numbered bit that is turned on (for a cell at level k, this
///    position is 2 * (S2CellId::MAX_LEVEL - k).)
///
///  - The id of a parent cell is at the midpoint of the range of ids spanned
///    by its children (or by its descendants at any level).
///
/// Leaf cells are often used to represent points on the unit sphere, and
/// this class provides methods for converting directly between these two
/// representations. For cells that represent 2D regions rather than
/// discrete point, it is better to use the S2Cell class.
///
/// All methods require `is_valid()` to be true unless otherwise specified
/// (although not all methods enforce this).
///
/// This class is intended to be copied by value as desired.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct S2CellId {
    id: u64,
}

/// The following lookup tables are used to convert efficiently between an
/// (i,j) cell index and the corresponding position along the Hilbert curve.
/// "lookup_pos" maps 4 bits of "i", 4 bits of "j", and 2 bits representing the
/// orientation of the current cell into 8 bits representing the order in which
/// that subcell is visited by the Hilbert curve, plus 2 bits indicating the
/// new orientation of the Hilbert curve within that subcell. (Cell
/// orientations are represented as combination of s2::internal::SWAP_MASK and
/// s2::internal::INVERT_MASK.)
///
/// "lookup_ij" is an inverted table used for mapping in the opposite
/// direction.
const LOOKUP_BITS: i32 = 4;
const LOOKUP_TABLE_SIZE: usize = 1 << (2 * LOOKUP_BITS + 2);

lazy_static! {
    static ref LOOKUP_TABLES: ([u16; LOOKUP_TABLE_SIZE], [u16; LOOKUP_TABLE_SIZE]) =
        init_lookup_tables();
    static ref LOOKUP_POS: &'static [u16; LOOKUP_TABLE_SIZE] = &LOOKUP_TABLES.0;
    static ref LOOKUP_IJ: &'static [u16; LOOKUP_TABLE_SIZE] = &LOOKUP_TABLES.1;
}

#[rustfmt::skip]
fn init_lookup_tables() -> ([u16; LOOKUP_TABLE_SIZE], [u16; LOOKUP_TABLE_SIZE]) {
    let mut lookup_pos = [0u16; LOOKUP_TABLE_SIZE];
    let mut lookup_ij = [0u16; LOOKUP_TABLE_SIZE];

    // I'm leaving this with too many arguments because I'm trying to
    // replicate the original library's implementation as closely as I
    // can because I don't understand this enough to make this iterative.
    #[allow(clippy::too_many_arguments)]
    fn init_lookup_cell(
        level: i32, i: i32, j: i32, orig_orientation: i32, pos: i32, orientation: i32,
        lookup_pos: &mut [u16; LOOKUP_TABLE_SIZE], lookup_ij: &mut [u16; LOOKUP_TABLE_SIZE]
    ) {
        if level == LOOKUP_BITS {
            let ij: i32 = (i << LOOKUP_BITS) + j;
            lookup_pos[((ij << 2) + orig_orientation) as usize] = ((pos << 2) + orientation) as u16;
            lookup_ij[((pos << 2) + orig_orientation) as usize] = ((ij << 2) + orientation) as u16;
        } else {
            let level = level + 1;
            let i = i << 1;
            let j = j << 1;
            let pos = pos << 2;
            let r: [i32; 4] = POS_TO_IJ[orientation as usize];
            init_lookup_cell(level, i + (r[0] >> 1), j + (r[0] & 1), orig_orientation, pos,
                orientation ^ POS_TO_ORIENTATION[0], lookup_pos, lookup_ij);
            init_lookup_cell(level, i + (r[1] >> 1), j + (r[1] & 1), orig_orientation, pos + 1,
                orientation ^ POS_TO_ORIENTATION[1], lookup_pos, lookup_ij);
            init_lookup_cell(level, i + (r[2] >> 1), j + (r[2] & 1), orig_orientation, pos + 2,
                orientation ^ POS_TO_ORIENTATION[2], lookup_pos, lookup_ij);
            init_lookup_cell(level, i + (r[3] >> 1), j + (r[3] & 1), orig_orientation, pos + 3,
                orientation ^ POS_TO_ORIENTATION[3], lookup_pos, lookup_ij);
        }
    }

    init_lookup_cell(0, 0, 0, 0, 0, 0, &mut lookup_pos, &mut lookup_ij);
    init_lookup_cell(0, 0, 0, SWAP_MASK, 0, SWAP_MASK, &mut lookup_pos, &mut lookup_ij);
    init_lookup_cell(0, 0, 0, INVERT_MASK, 0, INVERT_MASK, &mut lookup_pos, &mut lookup_ij);
    init_lookup_cell(0, 0, 0, SWAP_MASK | INVERT_MASK, 0, SWAP_MASK | INVERT_MASK, &mut lookup_pos, &mut lookup_ij);

    (lookup_pos, lookup_ij)
}

impl S2CellId {
    // Although only 60 bits are needed to represent the index of a leaf cell, the
    // extra position bit lets us encode each cell as its Hilbert curve position
    // at the cell center, which is halfway along the portion of the Hilbert curve
    // that fills that cell.
    pub const FACE_BITS: i32 = 3;
    pub const NUM_FACES: i32 = 6;
    pub const MAX_LEVEL: i32 = 30;
    pub const POS_BITS: i32 = 2 * S2CellId::MAX_LEVEL + 1;
    pub const MAX_SIZE: i32 = 1 << S2CellId::MAX_LEVEL;

    /// Creates a new S2CellId from a 64-bit unsigned integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use s2::s2::s2cell_id::S2CellId;
    ///
    /// let cell_id = S2CellId::new(123456789);
    /// assert_eq!(cell_id.id(), 123456789);
    /// ```
    pub fn new(id: u64) -> S2CellId {
        S2CellId { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn face(&self) -> i32 {
        (self.id >> S2CellId::POS_BITS) as i32
    }

    /// The position along the Hilbert curve, stripped of the face bits.
    pub fn pos(&self) -> u64 {
        self.id & (u64::MAX >> S2CellId::FACE_BITS)
    }

    /// The subdivision level of this cell, in `0..=MAX_LEVEL`.
    pub fn level(&self) -> i32 {
        S2CellId::MAX_LEVEL - (self.id.trailing_zeros() as i32 >> 1)
    }

    /// True if this is a leaf cell (level == MAX_LEVEL).
    pub fn is_leaf(&self) -> bool {
        (self.id & 1) != 0
    }

    /// Returns an invalid cell id.
    ///
    /// # Examples
    ///
    /// ```
    /// use s2::s2::s2cell_id::S2CellId;
    ///
    /// let invalid = S2CellId::none();
    /// assert!(!invalid.is_valid());
    /// ```
    pub fn none() -> S2CellId {
        S2CellId::new(0)
    }

    /// Returns an invalid cell id guaranteed to be larger than any valid cell id. Useful for creating indexes
    pub fn sentinel() -> S2CellId {
        S2CellId::new(u64::MAX)
    }

    /// The (level 0) face cell containing the given face.
    pub fn from_face(face: i32) -> S2CellId {
        let lsb_at_level_zero = 1_u64 << (2 * S2CellId::MAX_LEVEL);
        S2CellId::new(((face as u64) << S2CellId::POS_BITS) + lsb_at_level_zero)
    }

    /// Construct a cell given its face, the 61-bit Hilbert curve position
    /// within that face (the low bit need not already be set), and the
    /// level to truncate to.
    pub fn from_face_pos_level(face: i8, pos: u64, level: i8) -> S2CellId {
        let id = ((face as u64) << S2CellId::POS_BITS) + (pos | 1);
        S2CellId::new(id).parent(level as i32)
    }

    /// Construct the leaf cell containing the given direction vector.
    pub fn from_point(p: &S2Point) -> S2CellId {
        let (face, uv) = xyz_to_face_uv(p);
        let i = st_to_ij(uv_to_st(uv.x()));
        let j = st_to_ij(uv_to_st(uv.y()));
        S2CellId::from_face_ij(face, i, j)
    }

    /// Construct the leaf cell containing the given lat/lng.
    pub fn from_lat_lng(ll: &S2LatLng) -> S2CellId {
        S2CellId::from_point(&ll.to_point())
    }

    /// Construct the leaf cell given its face and (i, j) leaf coordinates,
    /// via the same Hilbert-curve lookup table used (in reverse) by
    /// `to_face_ij_orientation`.
    fn from_face_ij(face: i32, i: i32, j: i32) -> S2CellId {
        let mut n: u64 = (face as u64) << (S2CellId::POS_BITS - 1);
        let mut bits = face & SWAP_MASK;

        for k in (0..8).rev() {
            let nbits = if k == 7 {
                S2CellId::MAX_LEVEL - 7 * LOOKUP_BITS
            } else {
                LOOKUP_BITS
            };
            let mask = (1 << nbits) - 1;
            bits += ((i >> (k * LOOKUP_BITS)) & mask) << (LOOKUP_BITS + 2);
            bits += ((j >> (k * LOOKUP_BITS)) & mask) << 2;
            bits = LOOKUP_POS[bits as usize] as i32;
            n |= ((bits >> 2) as u64) << (k * 2 * LOOKUP_BITS);
            bits &= SWAP_MASK | INVERT_MASK;
        }

        S2CellId::new(n.wrapping_mul(2).wrapping_add(1))
    }

    fn to_point_raw(self) -> S2Point {
        let (face, si, ti) = self.get_center_siti();
        let u = st_to_uv(siti_to_st(si as u32));
        let v = st_to_uv(siti_to_st(ti as u32));
        face_uv_to_xyz(face, u, v)
    }

    pub fn get_size_st(&self) -> f64 {
        S2CellId::get_size_st_at_level(self.level())
    }

    pub fn get_size_st_at_level(level: i32) -> f64 {
        ij_to_st_min(S2CellId::get_size_ij_at_level(level))
    }

    /// Return the (face, si, ti) coordinates of the center of this cell,
    /// where si, ti are the discrete cell-space coordinates at twice the
    /// resolution of (i, j) (so that non-leaf cell centers are exact).
    fn get_center_siti(&self) -> (i32, i32, i32) {
        let (face, i, j, _orientation) = self.to_face_ij_orientation();
        let delta = if self.is_leaf() {
            1
        } else if ((i ^ (self.id as i32 >> 2)) & 1) != 0 {
            2
        } else {
            0
        };
        (face, 2 * i + delta, 2 * j + delta)
    }

    pub fn get_size_ij(&self) -> i32 {
        S2CellId::get_size_ij_at_level(self.level())
    }

    pub fn get_size_ij_at_level(level: i32) -> i32 {
        debug_assert!((0..=S2CellId::MAX_LEVEL).contains(&level));
        1 << (S2CellId::MAX_LEVEL - level)
    }

    /// Return true if id() represents a valid cell.
    ///
    /// All methods require is_valid() to be true unless otherwise specified
    /// (although not all methods enforce this).
    pub fn is_valid(&self) -> bool {
        self.face() < S2CellId::NUM_FACES && (self.lsb() & 0x1555555555555555) != 0
    }

    /// Converts this cell ID to face, i, j, and orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use s2::s2::s2cell_id::S2CellId;
    ///
    /// let cell_id = S2CellId::new(0x1234567890ABCDEF);
    /// let (face, i, j, orientation) = cell_id.to_face_ij_orientation();
    /// assert!(face >= 0 && face < 6);
    /// assert!(orientation >= 0 && orientation < 4);
    /// ```
    pub fn to_face_ij_orientation(&self) -> (i32, i32, i32, i32) {
        let (mut i, mut j) = (0, 0);
        let face = self.face();
        let mut bits = face & SWAP_MASK;

        fn get_bits(k: i32, id: u64, bits: &mut i32, i: &mut i32, j: &mut i32, lookup_ij: &[u16]) {
            let nbits = if k == 7 {
                S2CellId::MAX_LEVEL - 7 * LOOKUP_BITS
            } else {
                LOOKUP_BITS
            };
            *bits += (((id >> (k * 2 * LOOKUP_BITS + 1)) & ((1 << (2 * nbits)) - 1)) as i32) << 2;
            *bits = lookup_ij[*bits as usize] as i32;
            *i += (*bits >> (LOOKUP_BITS + 2)) << (k * LOOKUP_BITS);
            *j += ((*bits >> 2) & ((1 << LOOKUP_BITS) - 1)) << (k * LOOKUP_BITS);
            *bits &= SWAP_MASK | INVERT_MASK;
        }

        for k in (0..8).rev() {
            get_bits(k, self.id, &mut bits, &mut i, &mut j, &LOOKUP_IJ[..]);
        }

        debug_assert_eq!(0, POS_TO_ORIENTATION[2]);
        debug_assert_eq!(SWAP_MASK, POS_TO_ORIENTATION[0]);
        let orientation = if self.lsb() & 0x1111111111111110 != 0 {
            bits ^ SWAP_MASK
        } else {
            bits
        };

        (face, i, j, orientation)
    }

    /// Return the lowest-numbered bit that is on for this cell id, which is
    /// equal to (uint64_t{1} << (2 * (kMaxLevel - level))).  So for example,
    /// a.lsb() <= b.lsb() if and only if a.level() >= b.level(), but the
    /// first test is more efficient.
    pub fn lsb(&self) -> u64 {
        self.id & (self.id.wrapping_neg() + 1)
    }

    pub fn lsb_for_level(&self, level: i32) -> u64 {
        1_u64 << (2 * (S2CellId::MAX_LEVEL - level))
    }

    /// Return the bound in (u,v)-space for the cell at the given level containing
    /// the leaf cell with the given (i,j)-coordinates.
    pub fn ij_level_to_bound_uv(i: i32, j: i32, level: i32) -> R2Rect {
        let cell_size = S2CellId::get_size_ij_at_level(level);
        let mut bound = R2Rect::default();

        for d in 0..2 {
            let ij = if d == 0 { i } else { j };
            let ij_lo = ij & -cell_size;
            let ij_hi = ij_lo + cell_size;
            bound[d] = R1Interval::new(
                st_to_uv(ij_to_st_min(ij_lo)),
                st_to_uv(ij_to_st_min(ij_hi)),
            );
        }

        bound
    }

    /// Return the ancestor of this cell at the given level, which must be
    /// less than or equal to `self.level()`.
    pub fn parent(&self, level: i32) -> S2CellId {
        let new_lsb = self.lsb_for_level(level);
        S2CellId::new((self.id & new_lsb.wrapping_neg()) | new_lsb)
    }

    /// Return the k-th child of this cell, for k in 0..4. The cell must
    /// not already be a leaf.
    pub fn child(&self, k: i32) -> S2CellId {
        debug_assert!(!self.is_leaf());
        debug_assert!((0..4).contains(&k));
        let new_lsb = self.lsb() >> 2;
        let offset = (2 * k as i64 + 1 - 4) * new_lsb as i64;
        S2CellId::new((self.id as i64 + offset) as u64)
    }

    /// Return the four children of this cell, in Hilbert curve order.
    pub fn children(&self) -> [S2CellId; 4] {
        [self.child(0), self.child(1), self.child(2), self.child(3)]
    }

    /// Return the first child cell one level deeper than this one.
    pub fn child_begin(&self) -> S2CellId {
        let old_lsb = self.lsb();
        S2CellId::new(self.id.wrapping_sub(old_lsb).wrapping_add(old_lsb >> 2))
    }

    /// Return the end (one past the last child) of the children one level
    /// deeper than this one.
    pub fn child_end(&self) -> S2CellId {
        let old_lsb = self.lsb();
        S2CellId::new(self.id.wrapping_add(old_lsb).wrapping_add(old_lsb >> 2))
    }

    /// Return the next cell at the same level along the Hilbert curve.
    pub fn next(&self) -> S2CellId {
        S2CellId::new(self.id.wrapping_add(self.lsb() << 1))
    }

    /// Return the previous cell at the same level along the Hilbert curve.
    pub fn prev(&self) -> S2CellId {
        S2CellId::new(self.id.wrapping_sub(self.lsb() << 1))
    }

    /// The smallest id (inclusive) in the range covered by this cell's
    /// descendants at any level, including itself.
    pub fn range_min(&self) -> S2CellId {
        S2CellId::new(self.id.wrapping_sub(self.lsb() - 1))
    }

    /// The largest id (inclusive) in the range covered by this cell's
    /// descendants at any level, including itself.
    pub fn range_max(&self) -> S2CellId {
        S2CellId::new(self.id.wrapping_add(self.lsb() - 1))
    }

    /// True if this cell contains `other`, i.e. `other` is this cell or
    /// one of its descendants.
    pub fn contains(&self, other: &S2CellId) -> bool {
        self.range_min().id <= other.id && other.id <= self.range_max().id
    }

    /// True if this cell intersects `other`, i.e. they share a common
    /// descendant (including the case where one contains the other).
    pub fn intersects(&self, other: &S2CellId) -> bool {
        other.range_min().id <= self.range_max().id && other.range_max().id >= self.range_min().id
    }

    /// Convert this cell id to its unit-point representation.
    pub fn to_point(&self) -> S2Point {
        S2Point::from(*self)
    }

    /// Convert this cell id to a latitude/longitude.
    pub fn to_lat_lng(&self) -> S2LatLng {
        S2LatLng::from_point(&self.to_point())
    }

    /// Encode this cell id as a lowercase hex token with trailing zero
    /// nibbles stripped. `S2CellId::none()` encodes as `"X"`.
    pub fn to_token(&self) -> String {
        if self.id == 0 {
            return "X".to_string();
        }
        let hex = format!("{:016x}", self.id);
        let trimmed = hex.trim_end_matches('0');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Parse a token produced by `to_token`.
    pub fn from_token(token: &str) -> Result<S2CellId, S2CellIdParseError> {
        if token == "X" {
            return Ok(S2CellId::none());
        }
        if token.is_empty() || token.len() > 16 {
            return Err(S2CellIdParseError::new("token length out of range"));
        }
        if !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(S2CellIdParseError::new(
                "token contains non-hexadecimal characters",
            ));
        }
        let mut padded = token.to_string();
        padded.push_str(&"0".repeat(16 - token.len()));
        let id = u64::from_str_radix(&padded, 16)
            .map_err(|_| S2CellIdParseError::new("token does not encode a 64-bit value"))?;
        Ok(S2CellId::new(id))
    }
}

impl From<S2CellId> for S2Point {
    fn from(val: S2CellId) -> S2Point {
        val.to_point_raw().normalize()
    }
}

impl From<S2CellId> for S2LatLng {
    fn from(val: S2CellId) -> S2LatLng {
        val.to_lat_lng()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_face0_level0_id() {
        let id = S2CellId::from_face(0);
        assert_eq!(id.face(), 0);
        assert_eq!(id.level(), 0);
        assert!(id.is_valid());
    }

    #[test]
    fn test_face3_level0_bit_pattern() {
        let id = S2CellId::from_face(3);
        assert_eq!(id.id(), 0x7000000000000000);
        assert_eq!(id.face(), 3);
        assert_eq!(id.level(), 0);
    }

    #[test]
    fn test_leaf_level_is_max_level() {
        let p = S2Point::new(1.0, 0.0, 0.0);
        let id = S2CellId::from_point(&p);
        assert_eq!(id.level(), S2CellId::MAX_LEVEL);
        assert!(id.is_leaf());
    }

    #[test]
    fn test_point_round_trip() {
        let p = S2Point::new(0.3, -0.5, 0.7).normalize();
        let id = S2CellId::from_point(&p);
        let back: S2Point = id.into();
        assert_relative_eq!(back.x(), p.x(), epsilon = 1e-9);
        assert_relative_eq!(back.y(), p.y(), epsilon = 1e-9);
        assert_relative_eq!(back.z(), p.z(), epsilon = 1e-9);
    }

    #[test]
    fn test_parent_child_round_trip() {
        let p = S2Point::new(0.3, -0.5, 0.7).normalize();
        let leaf = S2CellId::from_point(&p);
        let parent = leaf.parent(leaf.level() - 1);
        assert!(parent.contains(&leaf));
        assert_eq!(parent.level(), leaf.level() - 1);
    }

    #[test]
    fn test_children_cover_parent_range() {
        let face0 = S2CellId::from_face(0);
        let kids = face0.children();
        assert_eq!(kids[0].range_min(), face0.range_min());
        assert_eq!(kids[3].range_max(), face0.range_max());
        for k in &kids {
            assert!(face0.contains(k));
        }
    }

    #[test]
    fn test_next_prev_are_inverses() {
        let face0 = S2CellId::from_face(0);
        let child = face0.child_begin();
        assert_eq!(child.next().prev(), child);
    }

    #[test]
    fn test_contains_and_intersects() {
        let face0 = S2CellId::from_face(0);
        let face1 = S2CellId::from_face(1);
        assert!(!face0.intersects(&face1));
        let child = face0.child(0);
        assert!(face0.contains(&child));
        assert!(face0.intersects(&child));
    }

    #[test]
    fn test_token_round_trip() {
        let p = S2Point::new(0.1, 0.2, -0.9).normalize();
        let id = S2CellId::from_point(&p);
        let token = id.to_token();
        let back = S2CellId::from_token(&token).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_none_token() {
        assert_eq!(S2CellId::none().to_token(), "X");
        assert_eq!(S2CellId::from_token("X").unwrap(), S2CellId::none());
    }

    #[test]
    fn test_from_token_rejects_bad_input() {
        assert!(S2CellId::from_token("zzzz").is_err());
        assert!(S2CellId::from_token("").is_err());
        assert!(S2CellId::from_token("0123456789abcdef0").is_err());
    }

    #[test]
    fn test_to_lat_lng_round_trip() {
        let ll = S2LatLng::from_degrees(37.4, -122.1);
        let id = S2CellId::from_lat_lng(&ll);
        let back = id.to_lat_lng();
        assert_relative_eq!(back.lat_degrees(), ll.lat_degrees(), epsilon = 1e-6);
        assert_relative_eq!(back.lng_degrees(), ll.lng_degrees(), epsilon = 1e-6);
    }
}
