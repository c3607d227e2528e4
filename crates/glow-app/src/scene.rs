//! The sample scene: a yellow line and a blue square outline.

use glow_common::{Color, RenderError};
use glow_renderer::{draw_glowing, stroke_line, Canvas, GlowParameters};
use image::RgbaImage;

pub const LINE_COLOR: Color = Color::from_rgb(255, 255, 50);
pub const SQUARE_COLOR: Color = Color::from_rgb(50, 50, 255);
pub const STROKE_WIDTH: f64 = 3.0;

/// Sizes of the sample images, in draw order.
pub const IMAGE_SIZES: [(u32, u32); 2] = [(102, 5), (200, 200)];

const LINE: (f64, f64, f64, f64) = (0.0, 3.0, 100.0, 3.0);

const SQUARE_EDGES: [(f64, f64, f64, f64); 4] = [
    (3.0, 3.0, 103.0, 3.0),
    (3.0, 3.0, 3.0, 103.0),
    (103.0, 3.0, 103.0, 103.0),
    (3.0, 103.0, 103.0, 103.0),
];

/// Allocate one blank image per sample, sized like the real ones.
pub fn blank_images<C>(canvas: &mut C) -> Result<Vec<C::Image>, RenderError>
where
    C: Canvas + ?Sized,
{
    IMAGE_SIZES
        .iter()
        .map(|&(w, h)| canvas.create_image(w, h))
        .collect()
}

/// Build the sample images and stroke their shapes.
pub fn sample_images<C>(canvas: &mut C) -> Result<Vec<RgbaImage>, RenderError>
where
    C: Canvas<Image = RgbaImage> + ?Sized,
{
    let mut images = blank_images(canvas)?;

    let (x0, y0, x1, y1) = LINE;
    stroke_line(&mut images[0], x0, y0, x1, y1, STROKE_WIDTH, LINE_COLOR);

    for (x0, y0, x1, y1) in SQUARE_EDGES {
        stroke_line(&mut images[1], x0, y0, x1, y1, STROKE_WIDTH, SQUARE_COLOR);
    }
    Ok(images)
}

/// Top-left position of image `index` on a `width`x`height` canvas.
///
/// Images are spread horizontally in thirds and sit just above the middle row.
pub fn placement(index: usize, width: u32, height: u32) -> (f64, f64) {
    let x = (index as f64 + 1.0) * f64::from(width / 3);
    let y = f64::from(height / 2) - 3.0;
    (x, y)
}

/// Draw every image with glow at its placement. Returns the draw calls issued.
pub fn draw_scene<C>(
    canvas: &mut C,
    images: &[C::Image],
    width: u32,
    height: u32,
    params: &GlowParameters,
) -> Result<usize, RenderError>
where
    C: Canvas + ?Sized,
{
    for (i, image) in images.iter().enumerate() {
        let (x, y) = placement(i, width, height);
        draw_glowing(canvas, image, x, y, params)?;
    }
    Ok(images.len() * params.draw_count())
}
