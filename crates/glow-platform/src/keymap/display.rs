use super::types::{KeyBind, Modifier};

/// Converts a [`KeyBind`] into a display string such as `"Ctrl+Shift+Up"`.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut parts: Vec<&str> = kb.modifiers.iter().map(|m| display_modifier(*m)).collect();
    parts.push(&kb.key);
    parts.join("+")
}

fn display_modifier(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Ctrl => "Ctrl",
        Modifier::Alt => {
            if cfg!(target_os = "macos") {
                "Option"
            } else {
                "Alt"
            }
        }
        Modifier::Shift => "Shift",
        Modifier::Super => {
            if cfg!(target_os = "macos") {
                "Cmd"
            } else if cfg!(target_os = "windows") {
                "Win"
            } else {
                "Super"
            }
        }
    }
}
