//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use glow_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
///
/// Names match the `[keybinds]` TOML keys and `Action::from_name`.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("toggle_glow", &config.toggle_glow),
        ("increase_intensity", &config.increase_intensity),
        ("decrease_intensity", &config.decrease_intensity),
        ("increase_radius", &config.increase_radius),
        ("decrease_radius", &config.decrease_radius),
        ("increase_base", &config.increase_base),
        ("decrease_base", &config.decrease_base),
        ("quit", &config.quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Comparison is case-insensitive, so `"q"` and `"Q"` collide.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in &binds {
        let key = binding.trim().to_lowercase();
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}

/// Validate that no keybind is empty.
pub fn validate_not_empty(config: &KeybindConfig) -> Result<(), ConfigError> {
    for (name, binding) in all_keybinds(config) {
        if binding.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "keybinds.{name} must not be empty"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_common::Action;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        let config = KeybindConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
        assert!(validate_not_empty(&config).is_ok());
    }

    #[test]
    fn all_keybinds_returns_8_entries() {
        let config = KeybindConfig::default();
        assert_eq!(all_keybinds(&config).len(), 8);
    }

    #[test]
    fn all_keybind_names_resolve_to_actions() {
        let config = KeybindConfig::default();
        for (name, _) in all_keybinds(&config) {
            assert!(Action::from_name(name).is_some(), "no action for {name}");
        }
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            increase_base: "A".into(), // same as decrease_base
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("increase_base"));
        assert!(err.contains("decrease_base"));
    }

    #[test]
    fn duplicate_detection_ignores_case() {
        let config = KeybindConfig {
            increase_base: "a".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn detects_empty_keybind() {
        let config = KeybindConfig {
            quit: "  ".into(),
            ..Default::default()
        };
        let err = validate_not_empty(&config).unwrap_err().to_string();
        assert!(err.contains("keybinds.quit"));
    }
}
