//! RigidBody - A solid body that moves as a unit
//!
//! Bodies live in continuous 3D space and carry their shape in local
//! coordinates. Orientation is kept as Euler angles and turned into a matrix
//! only where geometry needs it (extents, fluid contact, rendering).

mod body;
mod dynamics;
mod fluid_contact;

pub use body::RigidBody;
pub use dynamics::{
    ANGULAR_DAMPING, BODY_DRAG, BUOYANCY_SCALE, SETTLE_RATE, TUMBLE_IMPACT_SPEED,
};
pub use fluid_contact::{FluidProxy, SURFACE_OFFSET};
