//! Keybind registry: maps parsed `KeyBind` values to runtime `Action`s.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;
