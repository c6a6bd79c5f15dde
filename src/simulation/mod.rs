//! Simulation - owns the particle field and the body list, steps them together
//!
//! One step, in order:
//! - ParticleField pipeline (density, force, integrate, boundary, coupling)
//! - each body's own update, then the first rigid-rigid pass
//! - `correction_passes` more rigid-rigid passes, then body containment
//!
//! Configuration is not stored here. Every step receives the current
//! `SimulationParams`, so the UI may change any field between frames.
//! The wasm `FluidWorld` facade is the piece that holds params for JS.

use crate::core::error::EngineError;
use crate::core::math::Vec3;
use crate::domain::params::SimulationParams;
use crate::domain::shapes::Shape;
use crate::fluid::ParticleField;
use crate::rigid_body::RigidBody;
use crate::rigid_body_system::RigidBodySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::FluidWorld;
pub use init::seed_block;
pub use step::StepReport;
pub use step_stats::StepStats;

use perf_timer::PerfTimer;

/// Flat buffers the renderer reads straight out of linear memory.
#[derive(Default)]
pub(crate) struct RenderBuffers {
    /// `[x, y, z] * N`
    positions: Vec<f32>,
    /// `[vx, vy, vz] * N`
    velocities: Vec<f32>,
    /// `[px, py, pz, rx, ry, rz, scale, kind] * B`
    body_transforms: Vec<f32>,
}

/// Floats per body in the transform buffer.
pub const BODY_TRANSFORM_STRIDE: usize = 8;

pub struct Simulation {
    field: ParticleField,
    rigid_bodies: RigidBodySystem,

    // State
    frame: u64,
    seed: u32,

    // Perf metrics
    perf_detailed: bool,
    last_stats: StepStats,

    render: RenderBuffers,
}

impl Simulation {
    /// Seed `count` particles as a block at the top of the domain.
    pub fn new(count: usize, params: &SimulationParams, seed: u32) -> Self {
        init::create_simulation(count, params, seed)
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    pub fn body_count(&self) -> usize {
        self.rigid_bodies.body_count()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Seed used by the last reset.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn bodies(&self) -> &[RigidBody] {
        self.rigid_bodies.bodies()
    }

    pub fn body(&self, id: u32) -> Option<&RigidBody> {
        self.rigid_bodies.get(id)
    }

    /// Time each pass separately (adds a timer call per pass).
    pub fn enable_perf_detailed(&mut self, enabled: bool) {
        settings::enable_perf_detailed(self, enabled);
    }

    /// Stats of the last completed step.
    pub fn last_stats(&self) -> StepStats {
        settings::last_stats(self)
    }

    /// Advance the whole world by one `params.time_step`.
    pub fn step(&mut self, params: &SimulationParams) -> StepReport {
        step::step(self, params)
    }

    /// Throw away the field and seed a new one. Bodies are kept.
    pub fn reset(&mut self, count: usize, params: &SimulationParams, seed: u32) {
        commands::reset(self, count, params, seed)
    }

    // === RIGID BODY API ===

    /// Drop a body of `shape` at horizontal position (x, z) near the top of
    /// the domain. Returns the body ID.
    pub fn spawn_body(&mut self, shape: Shape, density: f32, x: f32, z: f32, scale: f32, params: &SimulationParams) -> u32 {
        rigid::spawn_body(self, shape, density, x, z, scale, params)
    }

    /// Insert a fully built body as is. Returns the body ID.
    pub fn add_body(&mut self, body: RigidBody) -> u32 {
        rigid::add_body(self, body)
    }

    pub fn remove_body(&mut self, id: u32) -> Result<RigidBody, EngineError> {
        commands::remove_body(self, id)
    }

    pub fn set_body_base_rotation(&mut self, id: u32, rotation: Vec3) -> Result<(), EngineError> {
        commands::set_body_base_rotation(self, id, rotation)
    }

    pub fn clear_bodies(&mut self) {
        commands::clear_bodies(self)
    }

    // === RENDER API ===

    /// Copy current state into the flat render buffers.
    pub fn sync_render_buffers(&mut self) {
        render_extract::sync_render_buffers(self)
    }

    /// Fail on the first NaN or infinite particle or body value.
    pub fn check_finite(&self) -> Result<(), EngineError> {
        render_extract::check_finite(self)
    }

    pub fn positions_buffer(&self) -> &[f32] {
        &self.render.positions
    }

    pub fn velocities_buffer(&self) -> &[f32] {
        &self.render.velocities
    }

    pub fn body_transforms_buffer(&self) -> &[f32] {
        &self.render.body_transforms
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
