use crate::core::console;
use crate::core::math::Vec3;
use crate::domain::params::SimulationParams;
use crate::domain::shapes::Shape;
use crate::rigid_body::RigidBody;

use super::Simulation;

/// Spawn just below the ceiling so the body falls into the fluid.
pub(super) fn spawn_body(
    sim: &mut Simulation,
    shape: Shape,
    density: f32,
    x: f32,
    z: f32,
    scale: f32,
    params: &SimulationParams,
) -> u32 {
    let mut body = RigidBody::new(shape, Vec3::new(x, 0.0, z), density).with_scale(scale);
    body.position.y = params.bounds_max.y - body.world_half_extents().y;
    // Pulls x/z inside too; the body is at rest, so velocity is unaffected.
    body.enforce_bounds(params.bounds_min, params.bounds_max);
    body.in_contact = false;

    let kind = body.shape.kind();
    let id = add_body(sim, body);
    console::log(&format!("spawned body {id}: {kind:?} density {density} at ({x}, {z})"));
    id
}

pub(super) fn add_body(sim: &mut Simulation, body: RigidBody) -> u32 {
    sim.rigid_bodies.add_body(body)
}
