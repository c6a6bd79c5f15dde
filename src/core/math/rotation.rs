use super::{EulerRot, Mat3, Vec3};

/// Rotation from Euler angles applied in XYZ order (R = Rx * Ry * Rz),
/// matching the renderer's default object rotation order.
#[inline]
pub fn euler_xyz(angles: Vec3) -> Mat3 {
    Mat3::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)
}

/// Nearest multiple of 90 degrees (radians).
#[inline]
pub fn nearest_right_angle(angle: f32) -> f32 {
    let quarter = std::f32::consts::FRAC_PI_2;
    (angle / quarter).round() * quarter
}
