// THEORY:
// The `edges` module looks for knife damage. A cut exposes pale flesh next
// to dark outer skin, which shows up as a sharp horizontal brightness
// discontinuity between adjacent subject pixels. Gradual shading across the
// bulb's curvature changes brightness slowly and never trips the delta
// threshold.

use crate::core_modules::classifier::{self, ClassifierMode};
use crate::core_modules::raster::PixelBuffer;

/// A right-neighbor brightness delta above this counts as a sharp edge.
const SHARP_EDGE_DELTA: f64 = 60.0;

/// Fraction of sharp comparisons above which the frame is flagged as cut.
const CUT_RATIO_THRESHOLD: f64 = 0.03;

/// Fraction of subject-to-subject right-neighbor pairs whose brightness
/// difference exceeds the sharp-edge delta. 0 when no pair exists.
pub fn sharp_edge_ratio(buffer: &PixelBuffer, mode: ClassifierMode) -> f64 {
    let mut comparisons = 0usize;
    let mut sharp = 0usize;

    for y in 0..buffer.height() {
        for x in 0..buffer.width().saturating_sub(1) {
            let here = buffer.pixel(x, y);
            if !classifier::is_subject(mode, here.red, here.green, here.blue) {
                continue;
            }
            let right = buffer.pixel(x + 1, y);
            if !classifier::is_subject(mode, right.red, right.green, right.blue) {
                continue;
            }
            comparisons += 1;
            if (here.brightness() - right.brightness()).abs() > SHARP_EDGE_DELTA {
                sharp += 1;
            }
        }
    }

    if comparisons == 0 {
        return 0.0;
    }
    sharp as f64 / comparisons as f64
}

/// True when sharp discontinuities cover more than 3% of the comparisons.
pub fn detect_cuts(buffer: &PixelBuffer, mode: ClassifierMode) -> bool {
    sharp_edge_ratio(buffer, mode) > CUT_RATIO_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both subject under the warm rule; brightness 136.67 vs 56.67.
    const BRIGHT: [u8; 4] = [200, 150, 60, 255];
    const DARK: [u8; 4] = [90, 55, 25, 255];

    fn row(colors: &[[u8; 4]]) -> PixelBuffer {
        let mut bytes = Vec::new();
        for c in colors {
            bytes.extend_from_slice(c);
        }
        PixelBuffer::new(colors.len() as u32, 1, bytes).unwrap()
    }

    #[test]
    fn alternating_row_is_all_sharp_edges() {
        let buffer = row(&[BRIGHT, DARK, BRIGHT, DARK]);
        assert_eq!(sharp_edge_ratio(&buffer, ClassifierMode::Standard), 1.0);
        assert!(detect_cuts(&buffer, ClassifierMode::Standard));
    }

    #[test]
    fn uniform_row_has_no_edges() {
        let buffer = row(&[BRIGHT, BRIGHT, BRIGHT, BRIGHT]);
        assert_eq!(sharp_edge_ratio(&buffer, ClassifierMode::Standard), 0.0);
        assert!(!detect_cuts(&buffer, ClassifierMode::Standard));
    }

    #[test]
    fn background_neighbors_are_not_compared() {
        // Subject pixels separated by background never form a pair, so a
        // large apparent delta across the gap is ignored.
        let buffer = row(&[BRIGHT, [0, 0, 0, 255], DARK]);
        assert_eq!(sharp_edge_ratio(&buffer, ClassifierMode::Standard), 0.0);
        assert!(!detect_cuts(&buffer, ClassifierMode::Standard));
    }

    #[test]
    fn no_subject_pixels_means_no_cuts() {
        let buffer = row(&[[0, 0, 0, 255]; 4]);
        assert!(!detect_cuts(&buffer, ClassifierMode::Standard));
    }
}
