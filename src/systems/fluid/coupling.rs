#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::boundary::contain;
use crate::core::math::Vec3;
use crate::domain::params::SimulationParams;
use crate::rigid_body::{FluidProxy, RigidBody};

use super::ParticleField;

/// Test one particle against every body in order, then keep it in the box.
#[inline]
fn couple_one(pos: &mut Vec3, vel: &mut Vec3, proxies: &[FluidProxy], params: &SimulationParams) -> bool {
    let mut touched = false;
    for proxy in proxies {
        touched |= proxy.push_out(pos, vel, params.damping);
    }
    contain(pos, params.bounds_min, params.bounds_max);
    touched
}

impl ParticleField {
    /// Coupling pass: particles are moved out of solids, bodies are only read.
    ///
    /// Returns how many particles touched at least one body.
    pub fn resolve_body_contacts(&mut self, params: &SimulationParams, bodies: &[RigidBody]) -> u32 {
        if bodies.is_empty() {
            return 0;
        }
        let proxies: Vec<FluidProxy> = bodies.iter().map(RigidBody::fluid_proxy).collect();

        #[cfg(feature = "parallel")]
        let touched = self
            .positions
            .par_iter_mut()
            .zip(self.velocities.par_iter_mut())
            .map(|(p, v)| couple_one(p, v, &proxies, params) as usize)
            .sum::<usize>();
        #[cfg(not(feature = "parallel"))]
        let touched = self
            .positions
            .iter_mut()
            .zip(self.velocities.iter_mut())
            .map(|(p, v)| couple_one(p, v, &proxies, params) as usize)
            .sum::<usize>();

        touched as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shapes::Shape;

    #[test]
    fn no_bodies_leaves_field_alone() {
        let params = SimulationParams::default();
        let mut field = ParticleField::from_positions(vec![Vec3::new(0.1, 0.2, 0.3)]);
        assert_eq!(field.resolve_body_contacts(&params, &[]), 0);
        assert_eq!(field.positions()[0], Vec3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn only_overlapping_particles_are_counted() {
        let params = SimulationParams::default();
        let body = RigidBody::new(Shape::Sphere { radius: 0.8 }, Vec3::ZERO, 2700.0);
        let mut field = ParticleField::from_positions(vec![
            Vec3::new(0.0, 0.3, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(-0.5, 0.0, 0.1),
        ]);
        field.velocities_mut()[0] = Vec3::new(0.0, -1.0, 0.0);

        assert_eq!(field.resolve_body_contacts(&params, &[body]), 2);
        for p in field.positions() {
            assert!(p.length() >= 0.8);
        }
        assert!(field.velocities()[0].y > 0.0);
        assert_eq!(field.positions()[1], Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn push_out_never_leaves_the_domain() {
        let params = SimulationParams::default();
        let floor = params.bounds_min.y;
        // Body resting on the floor; a particle under its centre is pushed down.
        let body = RigidBody::new(Shape::Sphere { radius: 1.0 }, Vec3::new(0.0, floor + 0.5, 0.0), 7850.0);
        let mut field = ParticleField::from_positions(vec![Vec3::new(0.0, floor + 0.1, 0.0)]);

        field.resolve_body_contacts(&params, &[body]);
        assert!(field.positions()[0].y >= floor);
    }
}
