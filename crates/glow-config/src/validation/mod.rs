//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod canvas;
mod glow;
mod helpers;


use crate::keybinds;
use crate::schema::GlowConfig;
use glow_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlowConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_not_empty(&config.keybinds) {
        errors.push(e.to_string());
    }
    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    glow::validate_glow(&mut errors, config);
    canvas::validate_canvas(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
