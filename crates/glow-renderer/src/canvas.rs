//! The drawing surface the compositor writes to.

use glow_common::RenderError;

/// A destination surface that composites images with "over" blending.
///
/// Each `draw_image` call is one discrete composite: it blends with
/// whatever is already on the surface, including earlier draws of the
/// same glow call. Implementations must not batch or reorder draws.
pub trait Canvas {
    type Image;

    /// Composite `image` with its top-left corner at `(x, y)`, its alpha
    /// multiplied by `alpha_scale`.
    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        alpha_scale: f32,
    ) -> Result<(), RenderError>;

    /// Allocate a blank drawable image of the given size.
    fn create_image(&mut self, width: u32, height: u32) -> Result<Self::Image, RenderError>;
}

/// One recorded `draw_image` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub x: f64,
    pub y: f64,
    pub alpha_scale: f32,
}

/// Image handle produced by [`RecordingCanvas`]; carries only its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedImage {
    pub width: u32,
    pub height: u32,
}

/// A canvas that records draw calls instead of rasterizing them.
///
/// Can be told to fail at a given draw index to exercise error paths.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
    fail_at: Option<usize>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas whose draw number `index` (0-based) fails.
    pub fn failing_at(index: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_at: Some(index),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    type Image = RecordedImage;

    fn draw_image(
        &mut self,
        _image: &RecordedImage,
        x: f64,
        y: f64,
        alpha_scale: f32,
    ) -> Result<(), RenderError> {
        if self.fail_at == Some(self.calls.len()) {
            return Err(RenderError::DrawFailed(format!(
                "injected failure at draw {}",
                self.calls.len()
            )));
        }
        self.calls.push(DrawCall { x, y, alpha_scale });
        Ok(())
    }

    fn create_image(&mut self, width: u32, height: u32) -> Result<RecordedImage, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSurface { width, height });
        }
        Ok(RecordedImage { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut canvas = RecordingCanvas::new();
        let img = canvas.create_image(4, 4).unwrap();
        canvas.draw_image(&img, 1.0, 2.0, 0.5).unwrap();
        canvas.draw_image(&img, 3.0, 4.0, 1.0).unwrap();

        assert_eq!(canvas.len(), 2);
        assert_eq!(
            canvas.calls()[0],
            DrawCall {
                x: 1.0,
                y: 2.0,
                alpha_scale: 0.5
            }
        );
        assert_eq!(canvas.calls()[1].x, 3.0);

        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn injected_failure_is_not_recorded() {
        let mut canvas = RecordingCanvas::failing_at(1);
        let img = RecordedImage {
            width: 1,
            height: 1,
        };
        assert!(canvas.draw_image(&img, 0.0, 0.0, 1.0).is_ok());
        let err = canvas.draw_image(&img, 0.0, 0.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("injected failure at draw 1"));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn create_image_rejects_empty_size() {
        let mut canvas = RecordingCanvas::new();
        assert!(matches!(
            canvas.create_image(0, 5),
            Err(RenderError::InvalidSurface {
                width: 0,
                height: 5
            })
        ));
    }
}
