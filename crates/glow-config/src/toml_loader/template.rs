//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Glow Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[glow]
# enabled = true         # false draws only the sharp image
# intensity = 0.3        # multiplier on every halo coefficient
# radius = 10            # 0-512, kernel is (2*radius+1)^2 draws
# base = 10.0            # > 0, coefficient = intensity / (dx^2 + dy^2 + base)

[glow.steps]
# intensity = 0.01
# radius = 1
# base = 0.5

[canvas]
# width = 640            # 1-16384
# height = 480           # 1-16384
# background = "rgba(0,0,0,1)"

[keybinds]
# toggle_glow = "Space"
# increase_intensity = "Up"
# decrease_intensity = "Down"
# increase_radius = "Right"
# decrease_radius = "Left"
# increase_base = "Q"
# decrease_base = "A"
# quit = "Escape"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
