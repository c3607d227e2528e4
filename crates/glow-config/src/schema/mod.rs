//! Configuration schema types for the glow demo.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields fall back to their defaults.

mod canvas;
mod glow;
mod keybind_config;
mod system;

pub use canvas::*;
pub use glow::*;
pub use keybind_config::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub glow: GlowParamsConfig,
    pub canvas: CanvasConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: GlowConfig = toml::from_str("").unwrap();
        assert!(config.glow.enabled);
        assert_eq!(config.glow.radius, 10);
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.keybinds.toggle_glow, "Space");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml_str = r#"
[glow]
radius = 3

[canvas]
height = 200
"#;
        let config: GlowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.glow.radius, 3);
        assert!((config.glow.base - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 200);
    }
}
