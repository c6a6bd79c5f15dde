#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::Vec3;
use crate::domain::params::SimulationParams;
use crate::kernels::SphKernels;

use super::{Neighbors, ParticleField, MIN_DENSITY};

/// Pressure force particle j exerts on particle i.
///
/// `grad` is `∇W(xi - xj, h)`. Swapping i and j flips the gradient and leaves
/// the bracket unchanged, so the pair forces cancel exactly.
#[inline]
pub fn pair_pressure_force(mass: f32, p_i: f32, rho_i: f32, p_j: f32, rho_j: f32, grad: Vec3) -> Vec3 {
    grad * (-mass * (p_i / (rho_i * rho_i) + p_j / (rho_j * rho_j)))
}

/// Viscous force particle j exerts on particle i.
#[inline]
pub fn pair_viscosity_force(viscosity: f32, mass: f32, rho_j: f32, laplacian: f32, v_i: Vec3, v_j: Vec3) -> Vec3 {
    (v_j - v_i) * (viscosity * mass / rho_j * laplacian)
}

struct ForceInputs<'a> {
    positions: &'a [Vec3],
    velocities: &'a [Vec3],
    densities: &'a [f32],
    pressures: &'a [f32],
    neighbors: Neighbors<'a>,
    kernels: SphKernels,
    mass: f32,
    viscosity: f32,
    gravity: Vec3,
}

impl ForceInputs<'_> {
    fn force_at(&self, i: usize) -> Vec3 {
        let rho_i = *fast!(self.densities, [i]);
        if rho_i < MIN_DENSITY {
            return Vec3::ZERO;
        }
        let p_i = *fast!(self.pressures, [i]);
        let v_i = *fast!(self.velocities, [i]);

        let mut force = Vec3::ZERO;
        self.neighbors.for_each_within(self.positions, i, self.kernels.h_sq, |j, r, r_sq| {
            if j == i {
                return;
            }
            let rho_j = *fast!(self.densities, [j]);
            if rho_j < MIN_DENSITY {
                return;
            }
            let r_len = r_sq.sqrt();
            force += pair_pressure_force(
                self.mass,
                p_i,
                rho_i,
                *fast!(self.pressures, [j]),
                rho_j,
                self.kernels.spiky_gradient(r, r_len),
            );
            force += pair_viscosity_force(
                self.viscosity,
                self.mass,
                rho_j,
                self.kernels.viscosity_laplacian(r_len),
                v_i,
                *fast!(self.velocities, [j]),
            );
        });

        // Scaled by density so that F / ρ in integration is plain g.
        force + self.gravity * rho_i
    }
}

impl ParticleField {
    /// Force pass. Reads the density pass output, writes `forces`.
    pub fn compute_forces(&mut self, params: &SimulationParams) {
        let inputs = ForceInputs {
            positions: &self.positions,
            velocities: &self.velocities,
            densities: &self.densities,
            pressures: &self.pressures,
            neighbors: Neighbors::select(params.neighbor_search, &self.grid),
            kernels: SphKernels::new(params.smoothing_radius),
            mass: params.particle_mass,
            viscosity: params.viscosity,
            gravity: params.gravity_vector(),
        };

        #[cfg(feature = "parallel")]
        {
            self.forces
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, f)| *f = inputs.force_at(i));
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.forces
                .iter_mut()
                .enumerate()
                .for_each(|(i, f)| *f = inputs.force_at(i));
        }
    }
}
