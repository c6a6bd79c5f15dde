use crate::rigid_body::RigidBody;

/// Bounciness of body-body contact.
pub const RESTITUTION: f32 = 0.4;
/// Tangential friction coefficient; each body takes half of it.
pub const FRICTION: f32 = 0.1;
/// Angular velocity kept by both bodies on an approaching contact.
pub const CONTACT_ANGULAR_DAMPING: f32 = 0.9;
/// Spin gained from the relative velocity at contact.
pub const CONTACT_TORQUE: f32 = 0.1;
/// Centres closer than this have no usable normal; the pair is skipped.
pub const MIN_SEPARATION: f32 = 1e-6;

/// Separate and bounce one pair of overlapping bodies.
///
/// The normal points from `a` to `b`. The slower body takes the larger share
/// of the positional correction. Impulses are only applied while the bodies
/// are still approaching. Returns true if the pair overlapped.
pub fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let reach = a.collision_radius() + b.collision_radius();
    let d = b.position - a.position;
    let dist = d.length();
    if dist >= reach || dist < MIN_SEPARATION {
        return false;
    }

    let n = d * (1.0 / dist);
    let overlap = reach - dist;

    let speed_a = a.velocity.length();
    let speed_b = b.velocity.length();
    let total = speed_a + speed_b;
    let share_a = if total < MIN_SEPARATION { 0.5 } else { speed_b / total };
    a.position -= n * (overlap * share_a);
    b.position += n * (overlap * (1.0 - share_a));

    let rel = b.velocity - a.velocity;
    let vn = rel.dot(n);
    if vn < 0.0 {
        let j = -(1.0 + RESTITUTION) * vn * 0.5;
        a.velocity -= n * j;
        b.velocity += n * j;

        let tangent = rel - n * vn;
        let friction = tangent * (FRICTION * 0.5);
        a.velocity += friction;
        b.velocity -= friction;

        a.angular_velocity *= CONTACT_ANGULAR_DAMPING;
        b.angular_velocity *= CONTACT_ANGULAR_DAMPING;
        let torque = n.cross(rel) * CONTACT_TORQUE;
        a.angular_velocity += torque;
        b.angular_velocity -= torque;
    }

    true
}

/// One pass over every unordered pair, in index order.
pub fn resolve_all(bodies: &mut [RigidBody]) -> u32 {
    let mut hits = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                hits += 1;
            }
        }
    }
    hits
}
