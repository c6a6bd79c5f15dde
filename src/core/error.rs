//! Error types for the engine.

use thiserror::Error;

/// Errors surfaced by the engine's public API.
///
/// Numerical degeneration (near-zero density) is not an error: the particle is
/// skipped for the step. Everything here is either a boundary problem (bad
/// JSON, unknown names) or the render-boundary finiteness check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Parameter document could not be parsed.
    #[error("invalid simulation params: {0}")]
    InvalidParams(String),

    /// Shape name not recognised.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// Fluid preset or material name not recognised.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// No live body carries this id.
    #[error("rigid body not found: {0}")]
    BodyNotFound(u32),

    /// A NaN or infinity reached the render boundary.
    #[error("non-finite {what} at index {index}")]
    NonFinite {
        /// Which buffer held the bad value.
        what: &'static str,
        /// Particle or body index.
        index: usize,
    },
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidParams(e.to_string())
    }
}
