use wasm_bindgen::prelude::*;

/// Snapshot of the last step: pass timings and counters.
///
/// Per-pass timings are only filled in when detailed perf is enabled;
/// `step_ms` and the counters are always filled in.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) neighbors_ms: f64,
    pub(super) density_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) boundary_ms: f64,
    pub(super) coupling_ms: f64,
    pub(super) bodies_ms: f64,
    pub(super) particle_count: u32,
    pub(super) body_count: u32,
    pub(super) degenerate_particles: u32,
    pub(super) particle_body_contacts: u32,
    pub(super) body_boundary_contacts: u32,
    pub(super) body_collisions: u32,
}

impl StepStats {
    /// Sum of the per-pass timings.
    pub fn passes_ms(&self) -> f64 {
        self.neighbors_ms
            + self.density_ms
            + self.forces_ms
            + self.integrate_ms
            + self.boundary_ms
            + self.coupling_ms
            + self.bodies_ms
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn neighbors_ms(&self) -> f64 { self.neighbors_ms }
    #[wasm_bindgen(getter)]
    pub fn density_ms(&self) -> f64 { self.density_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 { self.boundary_ms }
    #[wasm_bindgen(getter)]
    pub fn coupling_ms(&self) -> f64 { self.coupling_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_ms(&self) -> f64 { self.bodies_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn degenerate_particles(&self) -> u32 { self.degenerate_particles }
    #[wasm_bindgen(getter)]
    pub fn particle_body_contacts(&self) -> u32 { self.particle_body_contacts }
    #[wasm_bindgen(getter)]
    pub fn body_boundary_contacts(&self) -> u32 { self.body_boundary_contacts }
    #[wasm_bindgen(getter)]
    pub fn body_collisions(&self) -> u32 { self.body_collisions }
}
