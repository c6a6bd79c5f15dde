//! Named fluids and body materials.

use std::str::FromStr;

use crate::core::error::EngineError;

/// Density of water, the reference for drag normalisation.
pub const WATER_DENSITY: f32 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FluidPreset {
    Water,
    Oil,
    Honey,
    Mercury,
}

impl FluidPreset {
    pub const ALL: [FluidPreset; 4] = [
        FluidPreset::Water,
        FluidPreset::Oil,
        FluidPreset::Honey,
        FluidPreset::Mercury,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FluidPreset::Water => "water",
            FluidPreset::Oil => "oil",
            FluidPreset::Honey => "honey",
            FluidPreset::Mercury => "mercury",
        }
    }

    /// kg/m³
    pub fn rest_density(&self) -> f32 {
        match self {
            FluidPreset::Water => WATER_DENSITY,
            FluidPreset::Oil => 900.0,
            FluidPreset::Honey => 1420.0,
            FluidPreset::Mercury => 13534.0,
        }
    }

    pub fn viscosity(&self) -> f32 {
        match self {
            FluidPreset::Water => 0.3,
            FluidPreset::Oil => 1.5,
            FluidPreset::Honey => 12.0,
            FluidPreset::Mercury => 2.0,
        }
    }

    /// Equation-of-state constant. Kept roughly proportional to rest density
    /// so every preset compresses by a similar fraction.
    pub fn stiffness(&self) -> f32 {
        match self {
            FluidPreset::Water => 2000.0,
            FluidPreset::Oil => 1800.0,
            FluidPreset::Honey => 2800.0,
            FluidPreset::Mercury => 27000.0,
        }
    }
}

impl FromStr for FluidPreset {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FluidPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::UnknownPreset(s.to_string()))
    }
}

/// Body materials; only the density matters to the dynamics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Wood,
    Ice,
    Plastic,
    Aluminium,
    Steel,
    Gold,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Wood,
        Material::Ice,
        Material::Plastic,
        Material::Aluminium,
        Material::Steel,
        Material::Gold,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Material::Wood => "wood",
            Material::Ice => "ice",
            Material::Plastic => "plastic",
            Material::Aluminium => "aluminium",
            Material::Steel => "steel",
            Material::Gold => "gold",
        }
    }

    pub fn density(&self) -> f32 {
        match self {
            Material::Wood => 600.0,
            Material::Ice => 917.0,
            Material::Plastic => 1200.0,
            Material::Aluminium => 2700.0,
            Material::Steel => 7850.0,
            Material::Gold => 19300.0,
        }
    }
}

impl FromStr for Material {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("aluminum") {
            return Ok(Material::Aluminium);
        }
        Material::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_round_trip() {
        for preset in FluidPreset::ALL {
            assert_eq!(preset.name().parse::<FluidPreset>(), Ok(preset));
        }
        for material in Material::ALL {
            assert_eq!(material.name().parse::<Material>(), Ok(material));
        }
        assert_eq!("Aluminum".parse::<Material>(), Ok(Material::Aluminium));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(matches!("lava".parse::<FluidPreset>(), Err(EngineError::UnknownPreset(_))));
        assert!(matches!("cheese".parse::<Material>(), Err(EngineError::UnknownPreset(_))));
    }
}
