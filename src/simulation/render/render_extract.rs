use crate::core::error::EngineError;

use super::{Simulation, BODY_TRANSFORM_STRIDE};

pub(super) fn sync_render_buffers(sim: &mut Simulation) {
    let render = &mut sim.render;

    render.positions.clear();
    render.positions.extend(sim.field.positions().iter().flat_map(|p| p.to_array()));

    render.velocities.clear();
    render.velocities.extend(sim.field.velocities().iter().flat_map(|v| v.to_array()));

    let bodies = sim.rigid_bodies.bodies();
    render.body_transforms.clear();
    render.body_transforms.reserve(bodies.len() * BODY_TRANSFORM_STRIDE);
    for body in bodies {
        render.body_transforms.extend_from_slice(&body.transform());
    }
}

pub(super) fn check_finite(sim: &Simulation) -> Result<(), EngineError> {
    if let Some((index, what)) = sim.field.first_non_finite() {
        return Err(EngineError::NonFinite { what, index });
    }
    for (index, body) in sim.rigid_bodies.bodies().iter().enumerate() {
        if !body.position.is_finite() {
            return Err(EngineError::NonFinite { what: "body position", index });
        }
        if !body.velocity.is_finite() || !body.angular_velocity.is_finite() {
            return Err(EngineError::NonFinite { what: "body velocity", index });
        }
    }
    Ok(())
}
