//! ParticleField - SPH fluid state and its per-step pipeline
//!
//! Structure-of-arrays storage, one slot per particle, count fixed at
//! construction. Each step runs, with a full barrier between passes:
//!
//! 1. density   - ρi = Σ m W(|xi - xj|, h), pi = k (ρi - ρ0)
//! 2. force     - pressure + viscosity + gravity body force
//! 3. integrate - symplectic Euler, skipping degenerate particles
//! 4. boundary  - reflect off the domain box
//! 5. coupling  - push particles out of rigid bodies (one-way)
//!
//! Passes 1, 2, 3 and 5 read only the previous pass's output and write only the
//! particle's own slot, so they run in parallel under the `parallel` feature
//! and produce the same bits either way.

mod coupling;
mod density;
mod forces;
mod integrate;
pub mod neighbors;

pub use forces::{pair_pressure_force, pair_viscosity_force};
pub use neighbors::{Neighbors, SpatialHash};

use crate::core::math::Vec3;
use crate::domain::params::{NeighborSearch, SimulationParams};
use crate::rigid_body::RigidBody;

/// Densities below this are treated as numerically degenerate.
pub const MIN_DENSITY: f32 = 1e-6;

/// Counters produced by one run of the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldStepCounts {
    /// Particles skipped by integration this step.
    pub degenerate: u32,
    /// Particles pushed out of at least one body.
    pub body_contacts: u32,
}

pub struct ParticleField {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    densities: Vec<f32>,
    pressures: Vec<f32>,
    forces: Vec<Vec3>,
    grid: SpatialHash,
}

impl ParticleField {
    /// Field of `count` particles at the origin, at rest.
    pub fn new(count: usize) -> Self {
        Self::from_positions(vec![Vec3::ZERO; count])
    }

    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        let n = positions.len();
        Self {
            positions,
            velocities: vec![Vec3::ZERO; n],
            densities: vec![0.0; n],
            pressures: vec![0.0; n],
            forces: vec![Vec3::ZERO; n],
            grid: SpatialHash::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Mutable view; the slice length (particle count) cannot change.
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn velocities_mut(&mut self) -> &mut [Vec3] {
        &mut self.velocities
    }

    pub fn densities(&self) -> &[f32] {
        &self.densities
    }

    pub fn pressures(&self) -> &[f32] {
        &self.pressures
    }

    pub fn forces(&self) -> &[Vec3] {
        &self.forces
    }

    /// Bucket particles for the hash strategy; no-op for brute force.
    pub fn rebuild_neighbors(&mut self, params: &SimulationParams) {
        if params.neighbor_search == NeighborSearch::SpatialHash {
            self.grid.rebuild(&self.positions, params.smoothing_radius);
        }
    }

    /// Whole pipeline in order. The step orchestrator calls the passes one by
    /// one to time them; this is the same sequence.
    pub fn advance(&mut self, params: &SimulationParams, bodies: &[RigidBody]) -> FieldStepCounts {
        self.rebuild_neighbors(params);
        self.compute_densities(params);
        self.compute_forces(params);
        let degenerate = self.integrate(params);
        self.enforce_boundary(params);
        let body_contacts = self.resolve_body_contacts(params, bodies);
        FieldStepCounts { degenerate, body_contacts }
    }

    /// Boundary pass: reflect every particle back into the domain.
    pub fn enforce_boundary(&mut self, params: &SimulationParams) {
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            crate::boundary::enforce_particle(p, v, params.bounds_min, params.bounds_max, params.damping);
        }
    }

    /// First particle or velocity that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<(usize, &'static str)> {
        if let Some(i) = self.positions.iter().position(|p| !p.is_finite()) {
            return Some((i, "position"));
        }
        self.velocities
            .iter()
            .position(|v| !v.is_finite())
            .map(|i| (i, "velocity"))
    }
}
