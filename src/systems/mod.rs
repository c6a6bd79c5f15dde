//! Systems - the physics passes, each owning one concern

pub mod boundary;
pub mod fluid;
pub mod kernels;
pub mod rigid_body;
pub mod rigid_body_system;
