#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::Vec3;
use crate::domain::params::SimulationParams;

use super::{ParticleField, MIN_DENSITY};

/// Symplectic Euler for one particle. Returns false if it was skipped.
#[inline]
fn integrate_one(x: &mut Vec3, v: &mut Vec3, force: Vec3, rho: f32, dt: f32) -> bool {
    if rho < MIN_DENSITY {
        return false;
    }
    let a = force * (1.0 / rho);
    *v += a * dt;
    *x += *v * dt;
    true
}

impl ParticleField {
    /// Integration pass. Degenerate particles keep their state for this step
    /// and rejoin once neighbors return; returns how many were skipped.
    pub fn integrate(&mut self, params: &SimulationParams) -> u32 {
        let dt = params.time_step;
        let forces = &self.forces;
        let densities = &self.densities;

        #[cfg(feature = "parallel")]
        let integrated = self
            .positions
            .par_iter_mut()
            .zip(self.velocities.par_iter_mut())
            .enumerate()
            .map(|(i, (x, v))| integrate_one(x, v, forces[i], densities[i], dt) as usize)
            .sum::<usize>();
        #[cfg(not(feature = "parallel"))]
        let integrated = self
            .positions
            .iter_mut()
            .zip(self.velocities.iter_mut())
            .enumerate()
            .map(|(i, (x, v))| integrate_one(x, v, forces[i], densities[i], dt) as usize)
            .sum::<usize>();

        (self.len() - integrated) as u32
    }
}
