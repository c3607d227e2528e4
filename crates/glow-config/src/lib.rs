//! Glow configuration system.
//!
//! Provides TOML-based configuration for the glow parameters, the output
//! canvas, keybinds, and logging, with validation at load time. All config
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glow_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GlowConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_from_path, create_default_config, default_config_path};

use glow_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<GlowConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GlowConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
