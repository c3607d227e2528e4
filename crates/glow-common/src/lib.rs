pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{
    ConfigError, GlowError, ParamError, PlatformError, RenderError, MAX_RADIUS, MAX_SURFACE_SIDE,
};
pub use types::Color;

pub type Result<T> = std::result::Result<T, GlowError>;
