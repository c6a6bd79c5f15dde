//! BoundaryEnforcer - keeps particles and bodies inside the domain box
//!
//! Every face is handled independently. A crossing is clamped back onto the
//! face and the velocity component along that axis is made to point back into
//! the domain. It is never just zeroed.

use crate::core::math::Vec3;

/// Fraction of normal speed a body keeps when it hits a wall.
pub const BODY_RESTITUTION: f32 = 0.2;
/// Tangential velocity kept per step while a body touches the floor.
pub const BODY_FLOOR_FRICTION: f32 = 0.8;
/// Angular velocity gained per unit of sliding speed on the floor.
pub const BODY_ROLL_KICK: f32 = 0.05;
/// Angular velocity kept per step against a side wall.
const BODY_WALL_SPIN_DAMPING: f32 = 0.9;

/// Reflect a particle off the six faces.
///
/// The floor sets `v_y = |v_y| * damping`; every other face uses the same
/// rule mirrored, pushing away from the face it crossed.
#[inline]
pub fn enforce_particle(pos: &mut Vec3, vel: &mut Vec3, min: Vec3, max: Vec3, damping: f32) {
    for axis in 0..3 {
        let (lo, hi) = (min[axis], max[axis]);
        if pos[axis] < lo {
            pos[axis] = lo;
            vel[axis] = vel[axis].abs() * damping;
        } else if pos[axis] > hi {
            pos[axis] = hi;
            vel[axis] = -vel[axis].abs() * damping;
        }
    }
}

/// Clamp a position into the box without touching velocity.
#[inline]
pub fn contain(pos: &mut Vec3, min: Vec3, max: Vec3) {
    *pos = pos.max(min).min(max);
}

/// Which faces a body touched during one boundary check.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyContact {
    pub floor: bool,
    pub ceiling: bool,
    pub walls: bool,
    /// Downward speed at the moment of floor contact.
    pub impact_speed: f32,
}

impl BodyContact {
    #[inline]
    pub fn any(&self) -> bool {
        self.floor || self.ceiling || self.walls
    }
}

/// Keep a body of the given world half extents inside the box.
///
/// Contact is inelastic: weak restitution, floor friction on the horizontal
/// velocity, and a spin kick from sliding so bodies roll rather than skate.
/// If the body is wider than the domain on some axis, its centre is placed in
/// the middle of that axis and the velocity along it is reversed and damped.
pub fn enforce_body(
    pos: &mut Vec3,
    vel: &mut Vec3,
    angular_vel: &mut Vec3,
    half_extents: Vec3,
    min: Vec3,
    max: Vec3,
) -> BodyContact {
    let mut contact = BodyContact::default();

    for axis in 0..3 {
        let lo = min[axis] + half_extents[axis];
        let hi = max[axis] - half_extents[axis];
        let p = &mut pos[axis];
        let v = &mut vel[axis];

        if lo > hi {
            *p = 0.5 * (min[axis] + max[axis]);
            *v = -*v * BODY_RESTITUTION;
            continue;
        }

        let hit_low = *p < lo;
        let hit_high = *p > hi;
        if !(hit_low || hit_high) {
            continue;
        }

        let speed = *v;
        if hit_low {
            *p = lo;
            if speed < 0.0 {
                *v = -speed * BODY_RESTITUTION;
            }
        } else {
            *p = hi;
            if speed > 0.0 {
                *v = -speed * BODY_RESTITUTION;
            }
        }

        match (axis, hit_low) {
            (1, true) => {
                contact.floor = true;
                contact.impact_speed = (-speed).max(0.0);
            }
            (1, false) => contact.ceiling = true,
            _ => contact.walls = true,
        }
    }

    if contact.floor {
        vel.x *= BODY_FLOOR_FRICTION;
        vel.z *= BODY_FLOOR_FRICTION;
        // Rolling along +x turns about -z.
        angular_vel.z -= vel.x * BODY_ROLL_KICK;
        angular_vel.x += vel.z * BODY_ROLL_KICK;
    }
    if contact.walls {
        *angular_vel *= BODY_WALL_SPIN_DAMPING;
    }

    contact
}
