use glow_common::Color;
use image::RgbaImage;

/// Paint a solid line segment of the given `width` onto `image`.
///
/// Every pixel whose center lies within `width / 2` of the segment is set
/// to `color` (no blending, no anti-aliasing). Ends are round. A segment
/// with equal endpoints paints a dot. Parts outside the image are clipped;
/// non-finite coordinates or a non-positive width paint nothing.
pub fn stroke_line(
    image: &mut RgbaImage,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    width: f64,
    color: Color,
) {
    let coords = [x0, y0, x1, y1, width];
    if coords.iter().any(|v| !v.is_finite()) || width <= 0.0 {
        return;
    }
    let half = width / 2.0;

    let left = (x0.min(x1) - half).floor().max(0.0);
    let top = (y0.min(y1) - half).floor().max(0.0);
    let right = (x0.max(x1) + half).ceil().min(f64::from(image.width()));
    let bottom = (y0.max(y1) + half).ceil().min(f64::from(image.height()));
    if left >= right || top >= bottom {
        return;
    }

    let rgba = image::Rgba(color.to_array());
    for py in top as u32..bottom as u32 {
        for px in left as u32..right as u32 {
            let cx = f64::from(px) + 0.5;
            let cy = f64::from(py) + 0.5;
            if distance_to_segment(cx, cy, x0, y0, x1, y1) <= half {
                image.put_pixel(px, py, rgba);
            }
        }
    }
}

fn distance_to_segment(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let (vx, vy) = (x1 - x0, y1 - y0);
    let len_sq = vx * vx + vy * vy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - x0) * vx + (py - y0) * vy) / len_sq).clamp(0.0, 1.0)
    };
    let (nx, ny) = (x0 + t * vx, y0 + t * vy);
    ((px - nx).powi(2) + (py - ny).powi(2)).sqrt()
}
