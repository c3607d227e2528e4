//! Glow compositing.
//!
//! Draws a source image once per offset of a square kernel with a
//! distance-attenuated alpha, then once more at full strength, so the
//! sharp image sits on top of its own halo.

pub mod canvas;
pub mod compositor;
pub mod kernel;
pub mod params;
pub mod raster;

pub use canvas::{Canvas, DrawCall, RecordedImage, RecordingCanvas};
pub use compositor::draw_glowing;
pub use kernel::{attenuation, coefficient, kernel, offsets, KernelTap, Offsets};
pub use params::{GlowParameters, DEFAULT_BASE, DEFAULT_INTENSITY, DEFAULT_RADIUS};
pub use raster::{stroke_line, RasterCanvas};
