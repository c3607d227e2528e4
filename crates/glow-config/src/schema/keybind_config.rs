//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// Multiple modifiers: "Ctrl+Shift+Up".
/// Defaults assume a QWERTY layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub toggle_glow: String,
    pub increase_intensity: String,
    pub decrease_intensity: String,
    pub increase_radius: String,
    pub decrease_radius: String,
    pub increase_base: String,
    pub decrease_base: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            toggle_glow: "Space".into(),
            increase_intensity: "Up".into(),
            decrease_intensity: "Down".into(),
            increase_radius: "Right".into(),
            decrease_radius: "Left".into(),
            increase_base: "Q".into(),
            decrease_base: "A".into(),
            quit: "Escape".into(),
        }
    }
}
