pub mod input;
pub mod keymap;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{keybind_to_display, parse_keybind, KeyBind, Modifier};
