// THEORY:
// The `geometry` module estimates the physical footprint of the onion from
// the bounding box of its subject pixels. It is a rough heuristic, not a
// calibrated measurement: the scale factor assumes the onion's longest pixel
// span corresponds to a fixed reference size.
//
// Key architectural principles:
// 1.  **Bounding Box, Not Contour**: A single min/max sweep over subject
//     pixels is enough for a size class; contour tracing would add cost
//     without changing the discrete outcome.
// 2.  **Guarded Scale Factor**: An empty or single-pixel bounding box has a
//     zero max span. The scale factor degrades to 0 instead of dividing by
//     zero, which cascades into all-zero dimensions and the `Small` class.
// 3.  **Classification After Rounding**: Dimensions are reported to one
//     decimal; the size class is derived from the rounded max dimension so
//     the class always agrees with the numbers callers see.

use crate::core_modules::classifier::{self, ClassifierMode};
use crate::core_modules::raster::PixelBuffer;
use serde::{Deserialize, Serialize};

/// The longest span of the subject is assumed to be this many millimeters.
const REFERENCE_SIZE_MM: f64 = 75.0;

/// Discrete size bucket from the scaled max dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// Estimated physical dimensions of the subject, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub diameter_mm: f64,
    pub size_class: SizeClass,
}

impl Dimensions {
    fn empty() -> Self {
        Self {
            length_mm: 0.0,
            width_mm: 0.0,
            height_mm: 0.0,
            diameter_mm: 0.0,
            size_class: SizeClass::Small,
        }
    }
}

/// Sweeps the raster once, tracking the bounding box of subject pixels, and
/// converts the pixel spans into scaled dimensions.
pub fn estimate(buffer: &PixelBuffer, mode: ClassifierMode) -> Dimensions {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in buffer.pixels() {
        if classifier::is_subject(mode, pixel.red, pixel.green, pixel.blue) {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !found {
        return Dimensions::empty();
    }

    let pixel_width = (max_x - min_x) as f64;
    let pixel_height = (max_y - min_y) as f64;
    let max_span = pixel_width.max(pixel_height);
    // A single subject pixel leaves a zero-area box; treat it like no subject.
    let scale = if max_span > 0.0 {
        REFERENCE_SIZE_MM / max_span
    } else {
        0.0
    };

    let width_mm = round_one_decimal(pixel_width * scale);
    let height_mm = round_one_decimal(pixel_height * scale);
    let length_mm = round_one_decimal(max_span * scale);
    let diameter_mm = round_one_decimal((width_mm + height_mm) / 2.0);

    Dimensions {
        length_mm,
        width_mm,
        height_mm,
        diameter_mm,
        size_class: classify_size(length_mm),
    }
}

fn classify_size(max_dimension_mm: f64) -> SizeClass {
    if max_dimension_mm < 50.0 {
        SizeClass::Small
    } else if max_dimension_mm < 75.0 {
        SizeClass::Medium
    } else if max_dimension_mm < 100.0 {
        SizeClass::Large
    } else {
        SizeClass::ExtraLarge
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
