//! RigidBodySystem - owns the body list and runs the body phase of a step
//!
//! Bodies sit in one `Vec` in insertion order. Each step:
//! - every body advances on its own (buoyancy, drag, walls, settling)
//! - every unordered pair is resolved once, then `correction_passes` more times
//! - bodies are clamped back inside the domain
//!
//! Fluid particles never push back on bodies.

mod collision;
mod system;

pub use collision::{resolve_all, resolve_pair, FRICTION, MIN_SEPARATION, RESTITUTION};
pub use system::{BodyStepCounts, RigidBodySystem};
