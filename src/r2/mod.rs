pub mod r2rect;

pub use r2rect::R2Rect;

use crate::util::math::Vector2;

/// A point in the (u,v) or (x,y) plane of a single cube face.
pub type R2Point = Vector2<f64>;
