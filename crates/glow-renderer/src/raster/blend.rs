//! Straight-alpha "over" compositing on RGBA8 pixels.

use image::RgbaImage;

/// Clamp an alpha scale into `[0, 1]`; NaN counts as 0.
pub(crate) fn clamp_scale(alpha_scale: f32) -> f32 {
    if alpha_scale.is_nan() {
        0.0
    } else {
        alpha_scale.clamp(0.0, 1.0)
    }
}

/// `src` over `dst`, with the source alpha multiplied by `alpha_scale`.
pub(crate) fn blend_over(dst: [u8; 4], src: [u8; 4], alpha_scale: f32) -> [u8; 4] {
    let sa = f32::from(src[3]) / 255.0 * clamp_scale(alpha_scale);
    if sa <= 0.0 {
        return dst;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        out[i] = to_channel(c);
    }
    out[3] = to_channel(out_a * 255.0);
    out
}

fn to_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Composite all of `src` onto `dst` with its top-left at `(ox, oy)`,
/// clipping whatever falls outside `dst`.
pub(crate) fn composite(dst: &mut RgbaImage, src: &RgbaImage, ox: i64, oy: i64, alpha_scale: f32) {
    if clamp_scale(alpha_scale) <= 0.0 {
        return;
    }
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

    let x_start = ox.max(0);
    let y_start = oy.max(0);
    let x_end = ox.saturating_add(sw).min(dw);
    let y_end = oy.saturating_add(sh).min(dh);

    for y in y_start..y_end {
        for x in x_start..x_end {
            let s = src.get_pixel((x - ox) as u32, (y - oy) as u32).0;
            let d = dst.get_pixel_mut(x as u32, y as u32);
            d.0 = blend_over(d.0, s, alpha_scale);
        }
    }
}
