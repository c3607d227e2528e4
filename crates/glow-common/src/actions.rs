use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the demo driver.
///
/// Keybinds and scripted key sequences both resolve to an `Action`.
/// The session dispatcher matches on this enum to adjust glow parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Glow --
    ToggleGlow,
    IncreaseIntensity,
    DecreaseIntensity,
    IncreaseRadius,
    DecreaseRadius,
    IncreaseBase,
    DecreaseBase,

    // -- App --
    Quit,

    // -- Noop --
    None,
}

impl Action {
    /// Human-readable label for logs and help output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ToggleGlow => "Toggle Glow",
            Action::IncreaseIntensity => "Increase Intensity",
            Action::DecreaseIntensity => "Decrease Intensity",
            Action::IncreaseRadius => "Increase Radius",
            Action::DecreaseRadius => "Decrease Radius",
            Action::IncreaseBase => "Increase Base",
            Action::DecreaseBase => "Decrease Base",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Resolve a config key name (e.g. `"increase_radius"`) to an action.
    pub fn from_name(name: &str) -> Option<Action> {
        match name {
            "toggle_glow" => Some(Action::ToggleGlow),
            "increase_intensity" => Some(Action::IncreaseIntensity),
            "decrease_intensity" => Some(Action::DecreaseIntensity),
            "increase_radius" => Some(Action::IncreaseRadius),
            "decrease_radius" => Some(Action::DecreaseRadius),
            "increase_base" => Some(Action::IncreaseBase),
            "decrease_base" => Some(Action::DecreaseBase),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}
