use crate::core::console;
use crate::core::error::EngineError;
use crate::core::math::Vec3;
use crate::domain::params::SimulationParams;
use crate::fluid::ParticleField;
use crate::rigid_body::RigidBody;

use super::init::seed_block;
use super::Simulation;

pub(super) fn reset(sim: &mut Simulation, count: usize, params: &SimulationParams, seed: u32) {
    sim.field = ParticleField::from_positions(seed_block(count, params, seed));
    sim.seed = seed;
    sim.frame = 0;
    sim.last_stats = Default::default();
    sim.sync_render_buffers();
    console::log(&format!("field reset: {count} particles (seed {seed})"));
}

pub(super) fn remove_body(sim: &mut Simulation, id: u32) -> Result<RigidBody, EngineError> {
    let body = sim.rigid_bodies.remove_body(id)?;
    console::log(&format!("removed body {id} ({:?})", body.shape.kind()));
    Ok(body)
}

/// User-set orientation; the accumulated physics rotation is kept.
pub(super) fn set_body_base_rotation(sim: &mut Simulation, id: u32, rotation: Vec3) -> Result<(), EngineError> {
    let body = sim.rigid_bodies.get_mut(id).ok_or(EngineError::BodyNotFound(id))?;
    body.base_rotation = rotation;
    Ok(())
}

pub(super) fn clear_bodies(sim: &mut Simulation) {
    sim.rigid_bodies.clear();
}
