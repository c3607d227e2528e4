//! Glow parameter validation.

use crate::schema::GlowConfig;
use glow_common::MAX_RADIUS;

use super::helpers::{validate_finite, validate_non_negative, validate_positive, validate_range_i64};

/// Validate the `[glow]` section.
///
/// The smallest kernel denominator is `base` itself (offset 0,0), so a
/// strictly positive base keeps every coefficient finite.
pub(crate) fn validate_glow(errors: &mut Vec<String>, config: &GlowConfig) {
    let glow = &config.glow;

    validate_finite(errors, "glow.intensity", f64::from(glow.intensity));
    validate_range_i64(errors, "glow.radius", glow.radius, 0, i64::from(MAX_RADIUS));
    validate_positive(errors, "glow.base", glow.base);

    validate_non_negative(
        errors,
        "glow.steps.intensity",
        f64::from(glow.steps.intensity),
    );
    validate_non_negative(errors, "glow.steps.base", glow.steps.base);
}
