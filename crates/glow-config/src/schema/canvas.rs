//! Output canvas configuration types.

use serde::{Deserialize, Serialize};

/// The `[canvas]` section: size and clear color of the rendered frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in pixels (valid range: 1-16384).
    pub width: u32,
    /// Height in pixels (valid range: 1-16384).
    pub height: u32,
    /// Clear color, `#RRGGBB[AA]` or `rgba(r,g,b,a)`.
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: "rgba(0,0,0,1)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_config_defaults() {
        let config = CanvasConfig::default();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.background, "rgba(0,0,0,1)");
    }

    #[test]
    fn canvas_config_partial_toml() {
        let config: CanvasConfig = toml::from_str(r##"background = "#101010""##).unwrap();
        assert_eq!(config.background, "#101010");
        assert_eq!(config.width, 640);
    }
}
