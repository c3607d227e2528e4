//! Kernel math: offset enumeration and per-offset attenuation.
//!
//! The coefficient at offset `(dx, dy)` is `intensity / (dx^2 + dy^2 + base)`.
//! It falls off with squared distance and is largest at the center.

use std::iter::FusedIterator;

use glow_common::MAX_RADIUS;

use crate::params::GlowParameters;

/// Attenuation for an offset given raw, unvalidated inputs.
///
/// Returns `None` when the denominator `dx^2 + dy^2 + base` is zero,
/// negative, or not finite, or when `intensity` is not finite.
pub fn attenuation(dx: i32, dy: i32, intensity: f32, base: f64) -> Option<f32> {
    let denom = squared_distance(dx, dy) + base;
    if !denom.is_finite() || denom <= 0.0 || !intensity.is_finite() {
        return None;
    }
    Some(narrow(f64::from(intensity) / denom))
}

/// Attenuation coefficient for an offset under validated parameters.
///
/// Total: `GlowParameters` keeps `base > 0`, so the denominator is always
/// positive.
pub fn coefficient(dx: i32, dy: i32, params: &GlowParameters) -> f32 {
    let denom = squared_distance(dx, dy) + params.base();
    narrow(f64::from(params.intensity()) / denom)
}

fn squared_distance(dx: i32, dy: i32) -> f64 {
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    dx * dx + dy * dy
}

/// f64 -> f32, saturating at `f32::MAX` instead of overflowing to infinity.
fn narrow(value: f64) -> f32 {
    value.clamp(-f64::from(f32::MAX), f64::from(f32::MAX)) as f32
}

/// Every `(dx, dy)` in `[-radius, radius]^2`, row-major.
///
/// Radii above [`MAX_RADIUS`] are clamped to it.
pub fn offsets(radius: u32) -> Offsets {
    let radius = radius.min(MAX_RADIUS) as i32;
    let side = 2 * radius as usize + 1;
    Offsets {
        radius,
        dx: -radius,
        dy: -radius,
        remaining: side * side,
    }
}

/// Lazy row-major walk over a square kernel: `dy` is the outer loop,
/// `dx` the inner one, both from `-radius` to `radius`.
///
/// Clone it (or call [`offsets`] again) to restart.
#[derive(Debug, Clone)]
pub struct Offsets {
    radius: i32,
    dx: i32,
    dy: i32,
    remaining: usize,
}

impl Iterator for Offsets {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = (self.dx, self.dy);
        self.remaining -= 1;
        self.dx += 1;
        if self.dx > self.radius {
            self.dx = -self.radius;
            self.dy += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Offsets {}

impl FusedIterator for Offsets {}

/// One kernel entry: an offset and its attenuation coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelTap {
    pub dx: i32,
    pub dy: i32,
    pub coefficient: f32,
}

/// The full kernel for `params`, in draw order.
pub fn kernel(params: &GlowParameters) -> impl ExactSizeIterator<Item = KernelTap> {
    let params = *params;
    offsets(params.radius()).map(move |(dx, dy)| KernelTap {
        dx,
        dy,
        coefficient: coefficient(dx, dy, &params),
    })
}
