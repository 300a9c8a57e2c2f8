// THEORY:
// The `sprouts` module detects green shoots. Sprouts grow past the bulb's
// silhouette, so unlike every other analyzer this one scans the whole
// raster rather than gating on the subject classifier - a green shoot is
// not a subject-colored pixel and would be invisible behind the gate.

use crate::core_modules::raster::PixelBuffer;

/// Margin by which green must dominate both other channels.
const GREEN_DOMINANCE_MARGIN: i16 = 35;

/// Minimum absolute green level for a sprout pixel.
const GREEN_FLOOR: u8 = 100;

/// Fraction of all raster pixels matching the green-dominance rule, in
/// [0, 1]. Guarded to 0 for an empty raster.
pub fn sprout_ratio(buffer: &PixelBuffer) -> f64 {
    let total = buffer.pixel_count();
    if total == 0 {
        return 0.0;
    }

    let green = buffer
        .pixels()
        .filter(|(_, _, p)| {
            p.green as i16 > p.red as i16 + GREEN_DOMINANCE_MARGIN
                && p.green as i16 > p.blue as i16 + GREEN_DOMINANCE_MARGIN
                && p.green >= GREEN_FLOOR
        })
        .count();

    green as f64 / total as f64
}
