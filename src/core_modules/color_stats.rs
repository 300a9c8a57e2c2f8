// THEORY:
// The `color_stats` module summarizes the overall appearance of the subject
// as two scalars: mean brightness and mean saturation over subject pixels.
// These feed the record directly and give the display layer a compact
// signature of skin color quality.
//
// Key architectural principles:
// 1.  **Subject-Gated Averaging**: Background pixels never contribute, so a
//     small onion on a dark background reports the onion's color, not the
//     scene's.
// 2.  **Zero-Sample Fallback**: A frame with no subject pixels reports 0/0
//     rather than NaN from an empty average.

use crate::core_modules::classifier::{self, ClassifierMode};
use crate::core_modules::raster::PixelBuffer;
use serde::{Deserialize, Serialize};

/// Mean brightness (0..=255) and saturation (0..=1) over subject pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    pub avg_brightness: f64,
    pub avg_saturation: f64,
}

/// Accumulates brightness and saturation sums over subject pixels and
/// averages them; both outputs are 0 when no subject pixel exists.
pub fn aggregate(buffer: &PixelBuffer, mode: ClassifierMode) -> ColorAnalysis {
    let mut brightness_sum = 0.0;
    let mut saturation_sum = 0.0;
    let mut samples = 0usize;

    for (_, _, pixel) in buffer.pixels() {
        if classifier::is_subject(mode, pixel.red, pixel.green, pixel.blue) {
            brightness_sum += pixel.brightness();
            saturation_sum += pixel.saturation();
            samples += 1;
        }
    }

    if samples == 0 {
        return ColorAnalysis {
            avg_brightness: 0.0,
            avg_saturation: 0.0,
        };
    }

    ColorAnalysis {
        avg_brightness: brightness_sum / samples as f64,
        avg_saturation: saturation_sum / samples as f64,
    }
}
