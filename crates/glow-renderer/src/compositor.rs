//! The glow operation.

use glow_common::RenderError;
use tracing::trace;

use crate::canvas::Canvas;
use crate::kernel::{coefficient, offsets};
use crate::params::GlowParameters;

/// Draw `image` at `(x, y)` with a glow halo.
///
/// When `params` is active, the image is first drawn once per kernel
/// offset `(dx, dy)` at `(x + dx, y + dy)`, row-major, with its alpha
/// scaled by [`coefficient`]. Then, active or not, it is drawn once at
/// exactly `(x, y)` with alpha scale 1.0.
///
/// The halo is the canvas's own sequential "over" compositing of those
/// draws. It is not a normalized blur: later layers weigh more than a
/// true average would give them, and that bias is part of the look.
///
/// Issues exactly `params.draw_count()` draws on success. The first
/// failing draw is returned as-is; draws before it stay on the canvas
/// and nothing after it is attempted.
pub fn draw_glowing<C>(
    canvas: &mut C,
    image: &C::Image,
    x: f64,
    y: f64,
    params: &GlowParameters,
) -> Result<(), RenderError>
where
    C: Canvas + ?Sized,
{
    trace!(
        x,
        y,
        radius = params.radius(),
        active = params.is_active(),
        draws = params.draw_count(),
        "draw_glowing"
    );

    if params.is_active() {
        for (dx, dy) in offsets(params.radius()) {
            let alpha_scale = coefficient(dx, dy, params);
            canvas.draw_image(image, x + f64::from(dx), y + f64::from(dy), alpha_scale)?;
        }
    }

    canvas.draw_image(image, x, y, 1.0)
}
