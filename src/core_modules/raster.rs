// THEORY:
// The `raster` module owns the input contract of the engine: an immutable,
// row-major RGBA byte buffer with explicit dimensions. It is the bridge
// between whatever produced the frame (camera capture, file decode, canvas
// readback - all external collaborators) and the per-pixel analyzers.
//
// Key architectural principles:
// 1.  **Validated Once, Trusted Everywhere**: The byte length is checked
//     against width*height*4 at construction. After that, every analyzer can
//     index pixels without re-validating shape.
// 2.  **Immutable Per Call**: A `PixelBuffer` is never mutated and never
//     cached by the engine. Each analysis call reflects exactly the frame it
//     was handed.
// 3.  **Dimension-Generic Container, Fixed-Size Pipeline**: The buffer itself
//     carries arbitrary dimensions so analyzers stay testable on small
//     synthetic rasters; the 224x224 requirement is enforced at the pipeline
//     boundary, not here.

use crate::error::EngineError;
use crate::core_modules::pixel::pixel::Pixel;
use image::RgbaImage;

const CHANNELS: u32 = 4;

/// An immutable RGBA raster, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps a raw RGBA byte buffer, rejecting any length that does not
    /// match `width * height * 4`.
    pub fn new(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, EngineError> {
        let expected = width as usize * height as usize * CHANNELS as usize;
        if bytes.len() != expected {
            return Err(EngineError::InvalidBufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Builds a buffer from a decoded `image::RgbaImage`, for callers that
    /// hold frames from the `image` crate's decode path.
    pub fn from_image(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            bytes: image.as_raw().clone(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels in the raster.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The pixel at (x, y). Callers are expected to stay inside the
    /// dimensions they read from this buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        let offset = ((y * self.width + x) * CHANNELS) as usize;
        Pixel::from(&self.bytes[offset..offset + CHANNELS as usize])
    }

    /// Iterates every pixel in row-major order together with its coordinate.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Pixel)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }
}
