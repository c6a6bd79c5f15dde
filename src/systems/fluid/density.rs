#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::Vec3;
use crate::domain::params::SimulationParams;
use crate::kernels::SphKernels;

use super::{Neighbors, ParticleField};

/// Σ m W over all particles within h of `i`, self term included.
#[inline]
fn density_at(i: usize, positions: &[Vec3], neighbors: Neighbors, kernels: &SphKernels, mass: f32) -> f32 {
    let mut rho = 0.0f32;
    neighbors.for_each_within(positions, i, kernels.h_sq, |_, _, r_sq| {
        rho += mass * kernels.poly6_sq(r_sq);
    });
    rho
}

impl ParticleField {
    /// Density pass, then the equation of state.
    ///
    /// Pressure may go negative where the fluid is rarefied.
    pub fn compute_densities(&mut self, params: &SimulationParams) {
        let kernels = SphKernels::new(params.smoothing_radius);
        let mass = params.particle_mass;
        let stiffness = params.stiffness;
        let rest_density = params.rest_density;

        let positions = &self.positions;
        let neighbors = Neighbors::select(params.neighbor_search, &self.grid);

        let eval = |i: usize, rho: &mut f32, p: &mut f32| {
            let d = density_at(i, positions, neighbors, &kernels, mass);
            *rho = d;
            *p = stiffness * (d - rest_density);
        };

        #[cfg(feature = "parallel")]
        {
            self.densities
                .par_iter_mut()
                .zip(self.pressures.par_iter_mut())
                .enumerate()
                .for_each(|(i, (rho, p))| eval(i, rho, p));
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.densities
                .iter_mut()
                .zip(self.pressures.iter_mut())
                .enumerate()
                .for_each(|(i, (rho, p))| eval(i, rho, p));
        }
    }
}
