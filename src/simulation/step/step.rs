use crate::domain::params::SimulationParams;
use crate::fluid::FieldStepCounts;
use crate::rigid_body_system::BodyStepCounts;

use super::perf_timer::timed;
use super::step_stats::StepStats;
use super::{PerfTimer, Simulation};

/// What one step cost and what it touched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Wall time of the whole step in milliseconds.
    pub elapsed_ms: f64,
    pub stats: StepStats,
}

pub(super) fn step(sim: &mut Simulation, params: &SimulationParams) -> StepReport {
    let step_start = PerfTimer::start();
    let mut stats = StepStats::default();

    // === FLUID PIPELINE ===
    // Bodies are read at their pre-step positions.
    let field_counts = if sim.perf_detailed {
        step_field_timed(sim, params, &mut stats)
    } else {
        sim.field.advance(params, sim.rigid_bodies.bodies())
    };

    // === RIGID BODY PHYSICS ===
    let body_counts: BodyStepCounts = if sim.perf_detailed {
        timed(&mut stats.bodies_ms, || sim.rigid_bodies.step(params))
    } else {
        sim.rigid_bodies.step(params)
    };

    stats.particle_count = sim.field.len() as u32;
    stats.body_count = sim.rigid_bodies.body_count() as u32;
    stats.degenerate_particles = field_counts.degenerate;
    stats.particle_body_contacts = field_counts.body_contacts;
    stats.body_boundary_contacts = body_counts.boundary_contacts;
    stats.body_collisions = body_counts.collisions;
    stats.step_ms = step_start.elapsed_ms();

    sim.last_stats = stats;
    sim.frame += 1;

    StepReport { elapsed_ms: stats.step_ms, stats }
}

/// Same sequence as `ParticleField::advance`, one timer per pass.
fn step_field_timed(sim: &mut Simulation, params: &SimulationParams, stats: &mut StepStats) -> FieldStepCounts {
    let field = &mut sim.field;
    let bodies = sim.rigid_bodies.bodies();

    timed(&mut stats.neighbors_ms, || field.rebuild_neighbors(params));
    timed(&mut stats.density_ms, || field.compute_densities(params));
    timed(&mut stats.forces_ms, || field.compute_forces(params));
    let degenerate = timed(&mut stats.integrate_ms, || field.integrate(params));
    timed(&mut stats.boundary_ms, || field.enforce_boundary(params));
    let body_contacts = timed(&mut stats.coupling_ms, || field.resolve_body_contacts(params, bodies));

    FieldStepCounts { degenerate, body_contacts }
}
