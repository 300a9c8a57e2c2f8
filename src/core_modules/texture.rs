// THEORY:
// The `texture` module measures surface roughness as a local brightness
// gradient. Healthy papery skin is locally smooth; softening and
// deterioration crinkle the surface and raise the average difference between
// a pixel and its four orthogonal neighbors.
//
// Key architectural principles:
// 1.  **Interior Pixels Only**: The outer 1-pixel border is excluded so
//     every sampled pixel has all four neighbors; no edge special-casing
//     inside the hot loop.
// 2.  **Neighbors Ungated**: Only the center pixel must be subject. The
//     gradient at the onion's silhouette against the background is part of
//     the texture signal, matching the thresholds this score was tuned with.
// 3.  **Ordinal Output**: Callers never see the raw variance; it is
//     quantized into a 1..=4 score so downstream weighting stays stable.

use crate::core_modules::classifier::{self, ClassifierMode};
use crate::core_modules::raster::PixelBuffer;

/// Average over interior subject pixels of the mean absolute brightness
/// difference to the four orthogonal neighbors. 0 when no pixel qualifies.
pub fn average_local_variance(buffer: &PixelBuffer, mode: ClassifierMode) -> f64 {
    if buffer.width() < 3 || buffer.height() < 3 {
        return 0.0;
    }

    let mut variance_sum = 0.0;
    let mut samples = 0usize;

    for y in 1..buffer.height() - 1 {
        for x in 1..buffer.width() - 1 {
            let center = buffer.pixel(x, y);
            if !classifier::is_subject(mode, center.red, center.green, center.blue) {
                continue;
            }
            let brightness = center.brightness();
            let local = [
                (buffer.pixel(x + 1, y).brightness() - brightness).abs(),
                (buffer.pixel(x - 1, y).brightness() - brightness).abs(),
                (buffer.pixel(x, y + 1).brightness() - brightness).abs(),
                (buffer.pixel(x, y - 1).brightness() - brightness).abs(),
            ];
            variance_sum += local.iter().sum::<f64>() / local.len() as f64;
            samples += 1;
        }
    }

    if samples == 0 {
        return 0.0;
    }
    variance_sum / samples as f64
}

/// Quantizes the average local variance into the 1..=4 roughness score.
pub fn score_from_variance(avg_variance: f64) -> u8 {
    if avg_variance < 10.0 {
        1
    } else if avg_variance < 20.0 {
        2
    } else if avg_variance < 35.0 {
        3
    } else {
        4
    }
}

/// The 1 (smooth) to 4 (very soft/deteriorated) surface texture score.
pub fn surface_score(buffer: &PixelBuffer, mode: ClassifierMode) -> u8 {
    score_from_variance(average_local_variance(buffer, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN: [u8; 4] = [150, 120, 60, 255];

    fn solid(side: u32, rgba: [u8; 4]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for _ in 0..side * side {
            bytes.extend_from_slice(&rgba);
        }
        bytes
    }

    #[test]
    fn uniform_surface_is_smooth() {
        let buffer = PixelBuffer::new(8, 8, solid(8, GOLDEN)).unwrap();
        assert_eq!(average_local_variance(&buffer, ClassifierMode::Standard), 0.0);
        assert_eq!(surface_score(&buffer, ClassifierMode::Standard), 1);
    }

    #[test]
    fn lone_rough_center_averages_its_four_neighbors() {
        // 3x3 golden raster with a brighter center: the center is the only
        // interior pixel, so the variance is exactly its mean neighbor delta.
        let mut bytes = solid(3, GOLDEN);
        let center = 4 * 4; // pixel (1, 1)
        bytes[center..center + 4].copy_from_slice(&[200, 150, 60, 255]);
        let buffer = PixelBuffer::new(3, 3, bytes).unwrap();
        // Center brightness 136.67 vs neighbors at 110.
        let expected = 410.0 / 3.0 - 110.0;
        let variance = average_local_variance(&buffer, ClassifierMode::Standard);
        assert!((variance - expected).abs() < 1e-9);
        assert_eq!(surface_score(&buffer, ClassifierMode::Standard), 3);
    }

    #[test]
    fn no_subject_means_zero_variance() {
        let buffer = PixelBuffer::new(8, 8, solid(8, [0, 0, 0, 255])).unwrap();
        assert_eq!(average_local_variance(&buffer, ClassifierMode::Standard), 0.0);
        assert_eq!(surface_score(&buffer, ClassifierMode::Standard), 1);
    }

    #[test]
    fn variance_bands() {
        assert_eq!(score_from_variance(0.0), 1);
        assert_eq!(score_from_variance(9.9), 1);
        assert_eq!(score_from_variance(10.0), 2);
        assert_eq!(score_from_variance(19.9), 2);
        assert_eq!(score_from_variance(20.0), 3);
        assert_eq!(score_from_variance(34.9), 3);
        assert_eq!(score_from_variance(35.0), 4);
    }
}
