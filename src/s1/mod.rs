pub mod s1angle;
pub mod s1chord_angle;
pub mod s1interval;

pub use s1angle::S1Angle;
pub use s1chord_angle::S1ChordAngle;
pub use s1interval::S1Interval;
