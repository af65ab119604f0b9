//! Error types surfaced by the engine.
//!
//! Degenerate drawings and bad gesture payloads are absorbed locally and never
//! show up here; these enums only cover what a host has to decide about.

/// Rejected [`crate::ArConfig`] values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("reference width must be finite and positive, got {0}")]
    ReferenceWidth(f32),
    #[error("bake scale must be finite and positive, got {0}")]
    BakeScale(f32),
    #[error("max texture edge must be at least 1")]
    MaxTextureEdge,
    #[error("default position must be finite, got {0:?}")]
    DefaultPosition([f32; 3]),
    #[error("scale bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    ScaleBounds { min: f32, max: f32 },
    #[error("pan divisor must be finite and positive, got {0}")]
    PanDivisor(f32),
}

/// Failure to start world tracking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackingError {
    #[error("world tracking is not supported on this device")]
    Unsupported,
    #[error("camera access denied: {0}")]
    Denied(String),
    #[error("tracking failed to start: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("paint name must not be empty")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("scene already holds its plane node")]
    AlreadyPopulated,
}
