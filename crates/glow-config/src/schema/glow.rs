//! Glow effect configuration types.
//!
//! Mirrors the tunable parameters of the compositor plus the step sizes
//! used when a key press nudges them at runtime.

use serde::{Deserialize, Serialize};

/// Per-key-press adjustment amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    /// Intensity delta per press (valid range: finite, >= 0).
    pub intensity: f32,
    /// Radius delta per press.
    pub radius: u32,
    /// Base delta per press (valid range: finite, >= 0).
    pub base: f64,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            intensity: 0.01,
            radius: 1,
            base: 0.5,
        }
    }
}

/// The `[glow]` section.
///
/// `radius` is signed here so that a negative value in a config file is
/// reported by validation instead of failing deserialization opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowParamsConfig {
    /// Draw the attenuated halo. The sharp image is drawn either way.
    pub enabled: bool,
    /// Multiplier on every kernel coefficient (any finite value).
    pub intensity: f32,
    /// Kernel half-width in pixels (valid range: 0-512).
    pub radius: i64,
    /// Added to the squared distance before taking the reciprocal (must be > 0).
    pub base: f64,
    pub steps: StepConfig,
}

impl Default for GlowParamsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 0.3,
            radius: 10,
            base: 10.0,
            steps: StepConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_config_defaults() {
        let config = GlowParamsConfig::default();
        assert!(config.enabled);
        assert!((config.intensity - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.radius, 10);
        assert!((config.base - 10.0).abs() < f64::EPSILON);
        assert!((config.steps.intensity - 0.01).abs() < f32::EPSILON);
        assert_eq!(config.steps.radius, 1);
        assert!((config.steps.base - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn glow_config_partial_toml() {
        let toml_str = r#"
intensity = 0.8
base = 2.5
"#;
        let config: GlowParamsConfig = toml::from_str(toml_str).unwrap();
        assert!(config.enabled); // default preserved
        assert!((config.intensity - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.radius, 10);
        assert!((config.base - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn glow_config_accepts_negative_radius_for_validation() {
        let config: GlowParamsConfig = toml::from_str("radius = -1").unwrap();
        assert_eq!(config.radius, -1);
    }

    #[test]
    fn steps_nested_table() {
        let toml_str = r#"
enabled = false

[steps]
intensity = 0.05
radius = 2
"#;
        let config: GlowParamsConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.enabled);
        assert!((config.steps.intensity - 0.05).abs() < f32::EPSILON);
        assert_eq!(config.steps.radius, 2);
        assert!((config.steps.base - 0.5).abs() < f64::EPSILON);
    }
}
