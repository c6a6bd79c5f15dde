//! SPH Engine - Smoothed-Particle Hydrodynamics fluid with interactive rigid bodies
//!
//! Architecture:
//! - core/        - Math primitives, errors, console + safety utilities
//! - domain/      - Configuration, presets and body shapes
//! - systems/     - Kernels, particle field, boundaries, rigid bodies
//! - simulation/  - Step orchestration, commands, render extraction, wasm facade
//!
//! Coupling is one-way: bodies push particles out of their volume, but only
//! feel the ambient fluid density and each other.

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports
pub use domain::params;
pub use domain::shapes;
pub use systems::boundary;
pub use systems::fluid;
pub use systems::kernels;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    core::console::log(&format!("SPH engine {} initialized", env!("CARGO_PKG_VERSION")));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use core::error::EngineError;
pub use core::math::Vec3;
pub use domain::params::{NeighborSearch, SimulationParams};
pub use domain::presets::{FluidPreset, Material};
pub use domain::shapes::{Shape, ShapeKind};
pub use simulation::{FluidWorld, Simulation, StepReport, StepStats};
