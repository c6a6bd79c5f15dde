//! Vector and rotation types used by the particle field and rigid bodies.
//!
//! `glam` supplies `Vec3` and `Mat3`; only the angle helpers live here.

mod rotation;

pub use glam::{EulerRot, Mat3, Vec3};
pub use rotation::{euler_xyz, nearest_right_angle};
