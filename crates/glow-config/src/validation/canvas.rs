//! Canvas validation.

use crate::colors::parse_color;
use crate::schema::GlowConfig;
use glow_common::MAX_SURFACE_SIDE;

use super::helpers::validate_range;

pub(crate) fn validate_canvas(errors: &mut Vec<String>, config: &GlowConfig) {
    validate_range(errors, "canvas.width", config.canvas.width, 1, MAX_SURFACE_SIDE);
    validate_range(errors, "canvas.height", config.canvas.height, 1, MAX_SURFACE_SIDE);

    if let Err(e) = parse_color(&config.canvas.background) {
        errors.push(format!("canvas.background: {e}"));
    }
}
