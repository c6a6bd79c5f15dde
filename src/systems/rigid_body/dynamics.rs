//! Per-body dynamics: buoyancy, drag, integration, boundary contact, settling.
//!
//! The body never looks at individual particles. The ambient fluid density is
//! its only view of the fluid.

use crate::boundary::{enforce_body, BodyContact};
use crate::core::math::{nearest_right_angle, Vec3};
use crate::domain::params::SimulationParams;
use crate::domain::presets::WATER_DENSITY;

use super::RigidBody;

/// How strongly the density ratio offsets gravity.
pub const BUOYANCY_SCALE: f32 = 0.8;
/// Linear drag per second in a fluid as dense as water.
pub const BODY_DRAG: f32 = 0.5;
/// Angular velocity kept per step.
pub const ANGULAR_DAMPING: f32 = 0.98;
/// Landing speed above which horizontal motion turns into tumbling.
pub const TUMBLE_IMPACT_SPEED: f32 = 2.0;
pub const TUMBLE_FACTOR: f32 = 0.5;
/// Below these speeds a body in contact is considered to be settling.
pub const SETTLE_LINEAR_SPEED: f32 = 0.3;
pub const SETTLE_ANGULAR_SPEED: f32 = 0.5;
/// Rate (1/s) of the exponential ease toward a resting orientation.
pub const SETTLE_RATE: f32 = 8.0;

impl RigidBody {
    /// `ρ_fluid / ρ_body`
    #[inline]
    pub fn buoyancy_factor(&self, fluid_density: f32) -> f32 {
        fluid_density / self.density
    }

    /// Gravity after buoyancy. Turns upward once the fluid is dense enough
    /// relative to the body.
    #[inline]
    pub fn effective_gravity(&self, gravity: f32, fluid_density: f32) -> f32 {
        gravity * (1.0 - BUOYANCY_SCALE * self.buoyancy_factor(fluid_density))
    }

    /// Advance this body by one step, independent of every other body.
    pub fn update(&mut self, params: &SimulationParams) -> BodyContact {
        let dt = params.time_step;

        self.velocity.y += self.effective_gravity(params.gravity, params.fluid_density) * dt;

        let drag = (1.0 - BODY_DRAG * (params.fluid_density / WATER_DENSITY) * dt).clamp(0.0, 1.0);
        self.velocity *= drag;

        self.position += self.velocity * dt;
        self.rotation += self.angular_velocity * dt;
        self.angular_velocity *= ANGULAR_DAMPING;

        let incoming = self.velocity;
        let contact = self.enforce_bounds(params.bounds_min, params.bounds_max);

        if contact.floor && contact.impact_speed > TUMBLE_IMPACT_SPEED {
            self.angular_velocity.x += incoming.z * TUMBLE_FACTOR;
            self.angular_velocity.z -= incoming.x * TUMBLE_FACTOR;
        }

        if contact.any() && self.is_slow() && self.shape.rests_on_face() {
            self.settle(dt);
        }

        self.in_contact = contact.any();
        contact
    }

    /// Boundary contact using the shape's effective extents.
    pub fn enforce_bounds(&mut self, min: Vec3, max: Vec3) -> BodyContact {
        let extents = self.world_half_extents();
        enforce_body(
            &mut self.position,
            &mut self.velocity,
            &mut self.angular_velocity,
            extents,
            min,
            max,
        )
    }

    #[inline]
    fn is_slow(&self) -> bool {
        self.velocity.length() < SETTLE_LINEAR_SPEED
            && self.angular_velocity.length() < SETTLE_ANGULAR_SPEED
    }

    /// Ease the tilt axes of the accumulated rotation toward the nearest
    /// multiple of 90 degrees.
    fn settle(&mut self, dt: f32) {
        let t = 1.0 - (-SETTLE_RATE * dt).exp();
        let rot = &mut self.rotation;
        rot.x += (nearest_right_angle(rot.x) - rot.x) * t;
        rot.z += (nearest_right_angle(rot.z) - rot.z) * t;
    }
}
