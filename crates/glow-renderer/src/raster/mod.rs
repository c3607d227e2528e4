//! CPU reference canvas on an RGBA8 pixel buffer.

mod blend;
mod stroke;


use std::path::Path;

use glow_common::{Color, RenderError, MAX_SURFACE_SIDE};
use image::{ImageFormat, Rgba, RgbaImage};
use tracing::{debug, info};

use crate::canvas::Canvas;

pub use stroke::stroke_line;

/// A [`Canvas`] that rasterizes every draw into an [`RgbaImage`].
///
/// Draw positions are rounded to the nearest pixel. Blending is
/// straight-alpha "over", one composite per draw.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    target: RgbaImage,
}

impl RasterCanvas {
    /// A transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        check_size(width, height)?;
        debug!(width, height, "raster canvas created");
        Ok(Self {
            target: RgbaImage::new(width, height),
        })
    }

    pub fn from_image(image: RgbaImage) -> Result<Self, RenderError> {
        check_size(image.width(), image.height())?;
        Ok(Self { target: image })
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let px = Rgba(color.to_array());
        for p in self.target.pixels_mut() {
            *p = px;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.target
            .get_pixel_checked(x, y)
            .map(|p| Color::from_rgba(p.0[0], p.0[1], p.0[2], p.0[3]))
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.target
    }

    pub fn into_image(self) -> RgbaImage {
        self.target
    }

    /// Encode the canvas as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.target
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| RenderError::Encode(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), "canvas written");
        Ok(())
    }
}

impl Canvas for RasterCanvas {
    type Image = RgbaImage;

    fn draw_image(
        &mut self,
        image: &RgbaImage,
        x: f64,
        y: f64,
        alpha_scale: f32,
    ) -> Result<(), RenderError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RenderError::DrawFailed(format!(
                "non-finite destination ({x}, {y})"
            )));
        }
        blend::composite(
            &mut self.target,
            image,
            x.round() as i64,
            y.round() as i64,
            alpha_scale,
        );
        Ok(())
    }

    fn create_image(&mut self, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
        check_size(width, height)?;
        Ok(RgbaImage::new(width, height))
    }
}

fn check_size(width: u32, height: u32) -> Result<(), RenderError> {
    let ok = |side: u32| (1..=MAX_SURFACE_SIDE).contains(&side);
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(RenderError::InvalidSurface { width, height })
    }
}
