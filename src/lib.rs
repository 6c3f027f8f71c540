//! A spherical-geometry library: hierarchical cell decomposition and the
//! numerically-robust predicates that the rest of an S2-style geometry
//! stack (polylines, polygons, spatial indexes) is built on top of.
//!
//! The crate is organised the way the underlying coordinate systems layer
//! on top of each other:
//!
//! - [`util::math`] — generic `Vector2`/`Vector3` algebra.
//! - [`r1`] — closed bounded intervals on the real line.
//! - [`s1`] — angles, angular intervals (which wrap around a circle), and
//!   chord angles.
//! - [`r2`] — axis-aligned rectangles in the plane, used for per-face
//!   cube coordinates.
//! - [`s2`] — the cube projection, cell hierarchy, and region types
//!   (`S2Point`, `S2LatLng`, `S2CellId`, `S2Cell`, `S2Cap`, `S2LatLngRect`)
//!   plus the robust orientation predicates in [`s2::predicates`].

pub mod r1;
pub mod r2;
pub mod s1;
pub mod s2;
pub mod util;
