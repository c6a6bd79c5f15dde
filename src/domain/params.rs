//! Simulation parameters.
//!
//! One value, owned by whoever drives the simulation (the UI layer through the
//! wasm facade, or a test) and passed into every step. The core never caches
//! it between steps and never validates it: supplying physically sane values
//! is the caller's job.

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;
use crate::core::math::Vec3;

use super::presets::FluidPreset;

/// How the density and force passes enumerate neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NeighborSearch {
    /// Every pair, O(N²).
    #[default]
    BruteForce,
    /// Uniform hash grid with cell size h.
    SpatialHash,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParams {
    pub particle_mass: f32,
    pub rest_density: f32,
    /// Kernel support radius h.
    pub smoothing_radius: f32,
    /// Equation-of-state constant k in `p = k (ρ - ρ0)`.
    pub stiffness: f32,
    pub viscosity: f32,
    /// Acceleration along y (negative is down).
    pub gravity: f32,
    pub time_step: f32,
    /// Velocity kept on boundary and solid contact.
    pub damping: f32,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
    /// Ambient fluid density felt by rigid bodies (buoyancy, drag).
    pub fluid_density: f32,
    /// Lattice spacing used when seeding the field.
    pub particle_spacing: f32,
    /// Extra rigid-rigid passes after the first one.
    pub correction_passes: u32,
    pub neighbor_search: NeighborSearch,
}

impl Default for SimulationParams {
    fn default() -> Self {
        let spacing = 0.3;
        let preset = FluidPreset::Water;
        Self {
            particle_mass: preset.rest_density() * spacing * spacing * spacing,
            rest_density: preset.rest_density(),
            smoothing_radius: 0.5,
            stiffness: preset.stiffness(),
            viscosity: preset.viscosity(),
            gravity: -9.8,
            time_step: 0.003,
            damping: 0.5,
            bounds_min: Vec3::splat(-5.0),
            bounds_max: Vec3::splat(5.0),
            fluid_density: preset.rest_density(),
            particle_spacing: spacing,
            correction_passes: 3,
            neighbor_search: NeighborSearch::BruteForce,
        }
    }
}

impl SimulationParams {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Switch fluid: rest density, stiffness, viscosity and the ambient
    /// density seen by bodies follow the preset; particle mass is rescaled so a
    /// seeded lattice starts near rest density.
    pub fn apply_preset(&mut self, preset: FluidPreset) {
        self.rest_density = preset.rest_density();
        self.stiffness = preset.stiffness();
        self.viscosity = preset.viscosity();
        self.fluid_density = preset.rest_density();
        let s = self.particle_spacing;
        self.particle_mass = self.rest_density * s * s * s;
    }

    pub fn with_preset(mut self, preset: FluidPreset) -> Self {
        self.apply_preset(preset);
        self
    }

    #[inline]
    pub fn gravity_vector(&self) -> Vec3 {
        Vec3::new(0.0, self.gravity, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_in_defaults() {
        let params = SimulationParams::from_json(r#"{"stiffness": 3500, "neighborSearch": "spatialHash"}"#)
            .expect("params should parse");
        assert_eq!(params.stiffness, 3500.0);
        assert_eq!(params.neighbor_search, NeighborSearch::SpatialHash);
        assert_eq!(params.rest_density, 1000.0);
    }

    #[test]
    fn json_round_trip_preserves_bounds() {
        let mut params = SimulationParams::default();
        params.bounds_min = Vec3::new(-2.0, -1.0, -3.0);
        let json = params.to_json().expect("params serialize");
        assert!(json.contains(r#""boundsMin":[-2.0,-1.0,-3.0]"#));
        let back = SimulationParams::from_json(&json).expect("round trip");
        assert_eq!(back, params);
    }

    #[test]
    fn malformed_json_is_invalid_params() {
        let err = SimulationParams::from_json("{ stiffness: ").unwrap_err();
        assert!(matches!(err, EngineError::InvalidParams(_)));
    }

    #[test]
    fn preset_rescales_mass_with_density() {
        let params = SimulationParams::default().with_preset(FluidPreset::Mercury);
        assert_eq!(params.fluid_density, 13534.0);
        let s = params.particle_spacing;
        assert!((params.particle_mass - 13534.0 * s * s * s).abs() < 1e-2);
    }
}
