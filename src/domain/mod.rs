pub mod params;
pub mod presets;
pub mod shapes;
