use wasm_bindgen::prelude::*;

use crate::core::console;
use crate::core::error::EngineError;
use crate::core::math::Vec3;
use crate::domain::params::{NeighborSearch, SimulationParams};
use crate::domain::presets::{FluidPreset, Material};
use crate::domain::shapes::Shape;

use super::step_stats::StepStats;
use super::Simulation;

fn to_js(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Browser-facing world: the simulation plus the params the UI edits.
#[wasm_bindgen]
pub struct FluidWorld {
    core: Simulation,
    params: SimulationParams,
}

#[wasm_bindgen]
impl FluidWorld {
    /// Create a world with `particle_count` water particles and default params
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: u32, seed: u32) -> Self {
        let params = SimulationParams::default();
        let core = Simulation::new(particle_count as usize, &params, seed);
        console::log(&format!("fluid world created: {particle_count} particles"));
        Self { core, params }
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Re-seed the fluid with a new particle count (bodies are kept)
    pub fn reset(&mut self, particle_count: u32, seed: u32) {
        self.core.reset(particle_count as usize, &self.params, seed);
    }

    /// Step the simulation forward and refresh the render buffers.
    ///
    /// Errors if the new state holds a NaN or infinity; the caller should
    /// stop stepping this world.
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.core.step(&self.params);
        self.core.sync_render_buffers();
        if let Err(e) = self.core.check_finite() {
            console::warn(&format!("simulation diverged: {e}"));
            return Err(to_js(e));
        }
        Ok(())
    }

    /// Enable or disable per-pass timings (adds timing overhead when enabled)
    pub fn enable_perf_detailed(&mut self, enabled: bool) {
        self.core.enable_perf_detailed(enabled);
    }

    /// Get last step stats
    pub fn get_step_stats(&self) -> StepStats {
        self.core.last_stats()
    }

    // === PARAMS API ===

    pub fn params_json(&self) -> Result<String, JsValue> {
        self.params.to_json().map_err(to_js)
    }

    /// Replace params from a (possibly partial) camelCase JSON document.
    pub fn load_params_json(&mut self, json: String) -> Result<(), JsValue> {
        self.params = SimulationParams::from_json(&json).map_err(to_js)?;
        Ok(())
    }

    pub fn apply_fluid_preset(&mut self, name: String) -> Result<(), JsValue> {
        let preset: FluidPreset = name.parse().map_err(to_js)?;
        self.params.apply_preset(preset);
        Ok(())
    }

    pub fn set_gravity(&mut self, gravity: f32) { self.params.gravity = gravity; }

    pub fn set_time_step(&mut self, dt: f32) { self.params.time_step = dt; }

    pub fn set_viscosity(&mut self, viscosity: f32) { self.params.viscosity = viscosity; }

    pub fn set_stiffness(&mut self, stiffness: f32) { self.params.stiffness = stiffness; }

    pub fn set_rest_density(&mut self, density: f32) { self.params.rest_density = density; }

    pub fn set_smoothing_radius(&mut self, h: f32) { self.params.smoothing_radius = h; }

    pub fn set_particle_mass(&mut self, mass: f32) { self.params.particle_mass = mass; }

    pub fn set_damping(&mut self, damping: f32) { self.params.damping = damping; }

    pub fn set_fluid_density(&mut self, density: f32) { self.params.fluid_density = density; }

    pub fn set_correction_passes(&mut self, passes: u32) { self.params.correction_passes = passes; }

    pub fn set_bounds(&mut self, min_x: f32, min_y: f32, min_z: f32, max_x: f32, max_y: f32, max_z: f32) {
        self.params.bounds_min = Vec3::new(min_x, min_y, min_z);
        self.params.bounds_max = Vec3::new(max_x, max_y, max_z);
    }

    /// Switch between the O(N²) loop and the hash grid
    pub fn set_spatial_hash(&mut self, enabled: bool) {
        self.params.neighbor_search = if enabled {
            NeighborSearch::SpatialHash
        } else {
            NeighborSearch::BruteForce
        };
    }

    // === RIGID BODY API ===

    /// Spawn a body by shape and material name at horizontal position (x, z)
    /// Returns the body ID
    pub fn spawn_body(&mut self, shape: String, material: String, x: f32, z: f32, scale: f32) -> Result<u32, JsValue> {
        let material: Material = material.parse().map_err(to_js)?;
        self.spawn_body_with_density(shape, material.density(), x, z, scale)
    }

    /// Spawn a body with an explicit density (kg/m³)
    pub fn spawn_body_with_density(&mut self, shape: String, density: f32, x: f32, z: f32, scale: f32) -> Result<u32, JsValue> {
        let shape: Shape = shape.parse().map_err(to_js)?;
        Ok(self.core.spawn_body(shape, density, x, z, scale, &self.params))
    }

    /// Remove a rigid body by ID
    pub fn remove_body(&mut self, id: u32) -> Result<(), JsValue> {
        self.core.remove_body(id).map_err(to_js)?;
        Ok(())
    }

    /// Set the user rotation (Euler XYZ, radians) of a body
    pub fn set_body_rotation(&mut self, id: u32, x: f32, y: f32, z: f32) -> Result<(), JsValue> {
        self.core
            .set_body_base_rotation(id, Vec3::new(x, y, z))
            .map_err(to_js)
    }

    pub fn clear_bodies(&mut self) {
        self.core.clear_bodies();
        self.core.sync_render_buffers();
    }

    // === RENDER API ===

    /// Get pointer to particle positions `[x, y, z] * N` (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_buffer().as_ptr()
    }

    /// Number of f32 values in the positions buffer
    pub fn positions_len(&self) -> usize {
        self.core.positions_buffer().len()
    }

    pub fn velocities_ptr(&self) -> *const f32 {
        self.core.velocities_buffer().as_ptr()
    }

    pub fn velocities_len(&self) -> usize {
        self.core.velocities_buffer().len()
    }

    /// Get pointer to body transforms `[px, py, pz, rx, ry, rz, scale, kind] * B`
    pub fn body_transforms_ptr(&self) -> *const f32 {
        self.core.body_transforms_buffer().as_ptr()
    }

    pub fn body_transforms_len(&self) -> usize {
        self.core.body_transforms_buffer().len()
    }
}

impl FluidWorld {
    /// Native access to the core, for tests and tools.
    pub fn simulation(&self) -> &Simulation {
        &self.core
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SimulationParams {
        &mut self.params
    }
}
