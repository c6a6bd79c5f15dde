use crate::core::math::{euler_xyz, Mat3, Vec3};
use crate::domain::shapes::Shape;

/// Rigid Body - one interactive solid
///
/// Orientation is split in two: `base_rotation` is whatever the user set,
/// `rotation` is what the physics accumulated on top of it. Both are Euler
/// angles (XYZ order) and the rendered orientation is their sum.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// Unique ID for this body (assigned by the system, 0 = unassigned)
    pub id: u32,
    pub shape: Shape,

    // === Physics State ===
    /// World position of the centre
    pub position: Vec3,
    /// Linear velocity (units per second)
    pub velocity: Vec3,
    /// Angular velocity, one scalar per axis (radians per second)
    pub angular_velocity: Vec3,

    // === Orientation ===
    pub base_rotation: Vec3,
    pub rotation: Vec3,

    /// Uniform scale applied to the shape's base extent
    pub scale: f32,
    /// Material density (kg/m³), drives buoyancy
    pub density: f32,

    /// Touching a boundary at the end of the last update
    pub in_contact: bool,
}

impl RigidBody {
    pub fn new(shape: Shape, position: Vec3, density: f32) -> Self {
        Self {
            id: 0,
            shape,
            position,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            base_rotation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            density,
            in_contact: false,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_base_rotation(mut self, rotation: Vec3) -> Self {
        self.base_rotation = rotation;
        self
    }

    /// Combined Euler angles (user + physics)
    #[inline]
    pub fn orientation(&self) -> Vec3 {
        self.base_rotation + self.rotation
    }

    #[inline]
    pub fn rotation_matrix(&self) -> Mat3 {
        euler_xyz(self.orientation())
    }

    /// Half extents of the body in world axes under its current orientation
    pub fn world_half_extents(&self) -> Vec3 {
        self.shape.world_half_extents(self.scale, &self.rotation_matrix())
    }

    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.shape.collision_radius(self.scale)
    }

    /// Flat transform for the renderer: position, orientation, scale, kind
    pub fn transform(&self) -> [f32; 8] {
        let o = self.orientation();
        [
            self.position.x,
            self.position.y,
            self.position.z,
            o.x,
            o.y,
            o.z,
            self.scale,
            self.shape.kind() as u8 as f32,
        ]
    }
}
