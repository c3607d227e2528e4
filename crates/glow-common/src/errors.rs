use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Rejected glow parameter values.
///
/// Raised where parameters are set, so the compositor never sees a
/// kernel with a zero or negative denominator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("radius must not be negative (got {0})")]
    NegativeRadius(i64),

    #[error("radius {0} exceeds the maximum of {max}", max = MAX_RADIUS)]
    RadiusTooLarge(i64),

    #[error("base must be greater than zero (got {0})")]
    NonPositiveBase(f64),

    #[error("base must be finite (got {0})")]
    NonFiniteBase(f64),

    #[error("intensity must be finite (got {0})")]
    NonFiniteIntensity(f32),
}

/// Largest width or height accepted for a canvas or image.
pub const MAX_SURFACE_SIDE: u32 = 16384;

/// Largest accepted kernel radius (`(2 * 512 + 1)^2` draws per call).
pub const MAX_RADIUS: u32 = 512;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("draw failed: {0}")]
    DrawFailed(String),

    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("image encode error: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlowError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
