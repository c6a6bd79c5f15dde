use crate::core::math::Vec3;
use crate::domain::params::SimulationParams;
use crate::fluid::ParticleField;
use crate::rigid_body_system::RigidBodySystem;

use super::random::{centered_unit, seed_state};
use super::step_stats::StepStats;
use super::{RenderBuffers, Simulation};

/// Lattice jitter as a fraction of particle spacing.
const JITTER: f32 = 0.05;

pub(super) fn create_simulation(count: usize, params: &SimulationParams, seed: u32) -> Simulation {
    let mut sim = Simulation {
        field: ParticleField::from_positions(seed_block(count, params, seed)),
        rigid_bodies: RigidBodySystem::new(),
        frame: 0,
        seed,
        perf_detailed: false,
        last_stats: StepStats::default(),
        render: RenderBuffers::default(),
    };
    sim.sync_render_buffers();
    sim
}

/// Deterministic block of `count` particles hanging from the top of the
/// domain, centred horizontally, one `particle_spacing` apart.
///
/// Layers fill downward; a small seeded jitter breaks the perfect lattice
/// so the first steps do not stack particles in columns.
pub fn seed_block(count: usize, params: &SimulationParams, seed: u32) -> Vec<Vec3> {
    let min = params.bounds_min;
    let max = params.bounds_max;
    let spacing = params.particle_spacing;

    let width = (max.x - min.x).min(max.z - min.z);
    let fits = ((width / spacing).floor() as usize).max(1);
    // Nudge down so exact cubes (27, 343, ...) do not round up a column.
    let side = (((count as f32).cbrt() - 1e-3).ceil() as usize).clamp(1, fits);

    let centre_x = 0.5 * (min.x + max.x);
    let centre_z = 0.5 * (min.z + max.z);
    let start = Vec3::new(
        centre_x - 0.5 * (side - 1) as f32 * spacing,
        max.y - 0.5 * spacing,
        centre_z - 0.5 * (side - 1) as f32 * spacing,
    );

    let mut rng = seed_state(seed);
    let per_layer = side * side;
    (0..count)
        .map(|i| {
            let layer = i / per_layer;
            let row = (i % per_layer) / side;
            let col = i % side;
            let jitter = Vec3::new(centered_unit(&mut rng), centered_unit(&mut rng), centered_unit(&mut rng))
                * (JITTER * spacing);
            let p = start + Vec3::new(col as f32, -(layer as f32), row as f32) * spacing + jitter;
            p.max(min).min(max)
        })
        .collect()
}
