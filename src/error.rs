// THEORY:
// The engine is a pure computation over validated input, so the error
// surface is tiny: the only failure mode is a malformed frame, which is a
// caller-side precondition violation. Degenerate content (all background,
// zero bounding box, empty ratios) is never an error; every analyzer
// defines an explicit fallback instead.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The byte buffer does not match its declared dimensions.
    #[error("buffer length {actual} does not match expected {expected} bytes")]
    InvalidBufferLength { expected: usize, actual: usize },

    /// The pipeline was handed a raster that is not the fixed analysis size.
    #[error("frame is {width}x{height}, expected {expected_width}x{expected_height}")]
    InvalidFrameShape {
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },
}
