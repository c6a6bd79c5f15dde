//! Particle-vs-body contact, seen from the particle's side.
//!
//! Each body is reduced once per pass to a `FluidProxy` so the per-particle
//! loop never rebuilds rotation matrices.

use crate::core::math::Vec3;

use super::RigidBody;

/// Gap left between a pushed-out particle and the body surface.
pub const SURFACE_OFFSET: f32 = 1e-3;

const MIN_DISTANCE: f32 = 1e-6;

/// Collision volume a particle is tested against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FluidProxy {
    /// Sphere of the body's effective radius.
    Round { center: Vec3, radius: f32 },
    /// World-axis box of the body's rotated extents.
    Box { center: Vec3, half_extents: Vec3 },
}

impl RigidBody {
    pub fn fluid_proxy(&self) -> FluidProxy {
        if self.shape.is_box_like() {
            FluidProxy::Box { center: self.position, half_extents: self.world_half_extents() }
        } else {
            FluidProxy::Round { center: self.position, radius: self.collision_radius() }
        }
    }
}

impl FluidProxy {
    /// Move a particle found inside the volume back to its surface.
    ///
    /// Inward velocity is reflected and scaled by `damping`; velocity that
    /// already points away is left alone. Returns true if the particle was
    /// inside.
    pub fn push_out(&self, pos: &mut Vec3, vel: &mut Vec3, damping: f32) -> bool {
        match *self {
            FluidProxy::Round { center, radius } => {
                let d = *pos - center;
                let dist = d.length();
                if dist >= radius {
                    return false;
                }
                let n = if dist < MIN_DISTANCE { Vec3::Y } else { d * (1.0 / dist) };
                *pos = center + n * (radius + SURFACE_OFFSET);

                let vn = vel.dot(n);
                if vn < 0.0 {
                    *vel = (*vel - n * (2.0 * vn)) * damping;
                }
                true
            }
            FluidProxy::Box { center, half_extents } => {
                let local = *pos - center;
                let mut axis = 0;
                let mut depth = f32::MAX;
                for a in 0..3 {
                    let pen = half_extents[a] - local[a].abs();
                    if pen <= 0.0 {
                        return false;
                    }
                    if pen < depth {
                        depth = pen;
                        axis = a;
                    }
                }

                let side = if local[axis] >= 0.0 { 1.0 } else { -1.0 };
                pos[axis] = center[axis] + side * (half_extents[axis] + SURFACE_OFFSET);

                let v = &mut vel[axis];
                if *v * side < 0.0 {
                    *v = -*v * damping;
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shapes::{Shape, ShapeKind};

    #[test]
    fn particle_inside_sphere_ends_on_surface_moving_out() {
        let body = RigidBody::new(Shape::Sphere { radius: 0.8 }, Vec3::ZERO, 2700.0);
        let proxy = body.fluid_proxy();

        let mut p = Vec3::new(0.3, 0.0, 0.0);
        let mut v = Vec3::new(-1.0, 0.0, 0.0);
        assert!(proxy.push_out(&mut p, &mut v, 0.5));

        assert!((p.length() - (0.8 + SURFACE_OFFSET)).abs() < 1e-5);
        assert!(p.x > 0.0);
        assert!(v.dot(p) >= 0.0);
        assert!((v.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn outward_velocity_is_kept() {
        let proxy = FluidProxy::Round { center: Vec3::ZERO, radius: 1.0 };
        let mut p = Vec3::new(0.0, 0.5, 0.0);
        let mut v = Vec3::new(0.2, 1.0, 0.0);
        assert!(proxy.push_out(&mut p, &mut v, 0.5));
        assert_eq!(v, Vec3::new(0.2, 1.0, 0.0));
    }

    #[test]
    fn particle_at_centre_goes_up() {
        let proxy = FluidProxy::Round { center: Vec3::new(1.0, 1.0, 1.0), radius: 0.5 };
        let mut p = Vec3::new(1.0, 1.0, 1.0);
        let mut v = Vec3::ZERO;
        assert!(proxy.push_out(&mut p, &mut v, 0.5));
        assert!((p.y - (1.5 + SURFACE_OFFSET)).abs() < 1e-6);
        assert_eq!(p.x, 1.0);
    }

    #[test]
    fn outside_is_untouched() {
        let proxy = FluidProxy::Box { center: Vec3::ZERO, half_extents: Vec3::splat(0.5) };
        let mut p = Vec3::new(0.6, 0.0, 0.0);
        let mut v = Vec3::new(-1.0, 0.0, 0.0);
        assert!(!proxy.push_out(&mut p, &mut v, 0.5));
        assert_eq!(p, Vec3::new(0.6, 0.0, 0.0));
        assert_eq!(v, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn box_pushes_along_shallowest_axis_only() {
        let body = RigidBody::new(Shape::default_for(ShapeKind::Cube), Vec3::ZERO, 600.0);
        let proxy = body.fluid_proxy();
        assert!(matches!(proxy, FluidProxy::Box { .. }));

        let mut p = Vec3::new(0.1, 0.45, -0.2);
        let mut v = Vec3::new(0.3, -2.0, 0.1);
        assert!(proxy.push_out(&mut p, &mut v, 0.5));

        assert!((p.y - (0.5 + SURFACE_OFFSET)).abs() < 1e-6);
        assert_eq!(p.x, 0.1);
        assert_eq!(p.z, -0.2);
        assert_eq!(v, Vec3::new(0.3, 1.0, 0.1));
    }

    #[test]
    fn round_shapes_use_their_effective_radius() {
        let body = RigidBody::new(Shape::default_for(ShapeKind::Capsule), Vec3::ZERO, 600.0).with_scale(2.0);
        match body.fluid_proxy() {
            FluidProxy::Round { radius, .. } => assert!((radius - body.collision_radius()).abs() < 1e-6),
            other => panic!("expected round proxy, got {other:?}"),
        }
    }
}
