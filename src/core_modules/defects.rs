// THEORY:
// The `defects` module is the engine's damage assessor. It runs a single
// accumulation pass over subject pixels and derives four density-based
// signals (black spots, bruises, lesions, skin condition) plus the
// connectivity-based secondary signal (largest contiguous dark region).
//
// Key architectural principles:
// 1.  **Ratios Over Counts**: Every detector is a fraction of subject
//     pixels, so a small onion and a large onion with the same damage
//     density score the same. Raw pixel counts would conflate size with
//     damage.
// 2.  **Piecewise Spot Mapping**: The dark-pixel ratio maps to an integer
//     spot count through three linear bands with increasing slope - light
//     speckling resolves finely, heavy discoloration saturates toward the
//     cap of 21.
// 3.  **Ordered Skin Rules**: The skin condition score walks five rules from
//     best to worst and takes the first match, so the thresholds read as a
//     grading rubric rather than a formula.
// 4.  **Documented Defaults**: A frame with no subject pixels reports zero
//     spots, no flags, and the neutral skin score of 3. Absence of signal is
//     never reported as damage.

use crate::core_modules::classifier::{self, ClassifierMode};
use crate::core_modules::connectivity;
use crate::core_modules::raster::PixelBuffer;
use std::collections::HashSet;

/// Dark-spot band: brightness strictly inside this range counts as a spot pixel.
const SPOT_BRIGHTNESS_MIN: f64 = 20.0;
const SPOT_BRIGHTNESS_MAX: f64 = 80.0;

/// Spot count ceiling.
const MAX_SPOT_COUNT: u32 = 21;

/// Bruise band: dark with red/brown dominance.
const BRUISE_BRIGHTNESS_MIN: f64 = 40.0;
const BRUISE_BRIGHTNESS_MAX: f64 = 100.0;
const BRUISE_RATIO_THRESHOLD: f64 = 0.05;

/// Lesion signature: dark and desaturated (soft rot).
const LESION_BRIGHTNESS_MAX: f64 = 70.0;
const LESION_SATURATION_MAX: f64 = 0.25;
const LESION_RATIO_THRESHOLD: f64 = 0.06;

/// Skin score reported when the frame holds no subject pixels.
const NEUTRAL_SKIN_SCORE: u8 = 3;

/// At most this many flood fills are seeded per frame.
const MAX_SEEDED_REGIONS: usize = 20;

/// Density-based damage signals over the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefectSummary {
    pub black_spots_count: u32,
    pub has_bruises: bool,
    pub has_lesions: bool,
    /// 1 (flawless golden skin) to 5 (heavily degraded).
    pub skin_condition_score: u8,
    /// Size of the largest contiguous dark region, capped by the flood-fill
    /// visit budget. Secondary signal; never feeds back into the spot count.
    pub largest_dark_region: usize,
}

impl DefectSummary {
    fn no_subject() -> Self {
        Self {
            black_spots_count: 0,
            has_bruises: false,
            has_lesions: false,
            skin_condition_score: NEUTRAL_SKIN_SCORE,
            largest_dark_region: 0,
        }
    }
}

/// Scans subject pixels once, accumulating the per-detector counts, then
/// folds them into ratios and scores.
pub fn analyze(buffer: &PixelBuffer, mode: ClassifierMode) -> DefectSummary {
    let mut subject_count = 0usize;
    let mut dark_count = 0usize;
    let mut bruise_count = 0usize;
    let mut lesion_count = 0usize;
    let mut good_count = 0usize;
    let mut poor_count = 0usize;
    let mut brightness_sum = 0.0;
    let mut saturation_sum = 0.0;
    let mut dark_seeds: Vec<(u32, u32)> = Vec::new();

    for (x, y, pixel) in buffer.pixels() {
        if !classifier::is_subject(mode, pixel.red, pixel.green, pixel.blue) {
            continue;
        }
        subject_count += 1;
        let brightness = pixel.brightness();
        let saturation = pixel.saturation();
        brightness_sum += brightness;
        saturation_sum += saturation;

        if brightness > SPOT_BRIGHTNESS_MIN && brightness < SPOT_BRIGHTNESS_MAX {
            dark_count += 1;
            if dark_seeds.len() < MAX_SEEDED_REGIONS {
                dark_seeds.push((x, y));
            }
        }
        if (BRUISE_BRIGHTNESS_MIN..BRUISE_BRIGHTNESS_MAX).contains(&brightness)
            && pixel.red >= pixel.green
            && pixel.red >= pixel.blue
        {
            bruise_count += 1;
        }
        if brightness < LESION_BRIGHTNESS_MAX && saturation < LESION_SATURATION_MAX {
            lesion_count += 1;
        }
        if brightness > 120.0
            && saturation > 0.25
            && pixel.red > pixel.green
            && pixel.green > pixel.blue
        {
            good_count += 1;
        }
        if brightness < 80.0 || saturation < 0.15 {
            poor_count += 1;
        }
    }

    if subject_count == 0 {
        return DefectSummary::no_subject();
    }

    let total = subject_count as f64;
    let dark_ratio = dark_count as f64 / total;
    let bruise_ratio = bruise_count as f64 / total;
    let lesion_ratio = lesion_count as f64 / total;
    let good_ratio = good_count as f64 / total;
    let poor_ratio = poor_count as f64 / total;
    let avg_brightness = brightness_sum / total;
    let avg_saturation = saturation_sum / total;

    DefectSummary {
        black_spots_count: spot_count_from_ratio(dark_ratio),
        has_bruises: bruise_ratio > BRUISE_RATIO_THRESHOLD,
        has_lesions: lesion_ratio > LESION_RATIO_THRESHOLD,
        skin_condition_score: skin_condition(good_ratio, poor_ratio, avg_brightness, avg_saturation),
        largest_dark_region: largest_dark_region(buffer, &dark_seeds),
    }
}

/// Maps the dark-pixel ratio onto an integer spot count through three
/// piecewise-linear bands, clamped to [0, 21].
pub fn spot_count_from_ratio(dark_ratio: f64) -> u32 {
    let raw = if dark_ratio < 0.02 {
        (dark_ratio * 100.0).floor()
    } else if dark_ratio < 0.08 {
        2.0 + ((dark_ratio - 0.02) * 100.0).floor()
    } else {
        8.0 + ((dark_ratio - 0.08) * 150.0).floor()
    };
    (raw.max(0.0) as u32).min(MAX_SPOT_COUNT)
}

/// Ordered grading rubric, first match wins. 1 is best, 5 is worst.
fn skin_condition(good_ratio: f64, poor_ratio: f64, avg_brightness: f64, avg_saturation: f64) -> u8 {
    if good_ratio > 0.4 && avg_brightness > 130.0 && avg_saturation > 0.30 {
        1
    } else if good_ratio > 0.25 && avg_brightness > 110.0 && avg_saturation > 0.25 {
        2
    } else if poor_ratio < 0.3 && avg_brightness > 90.0 {
        3
    } else if poor_ratio < 0.5 || avg_brightness > 70.0 {
        4
    } else {
        5
    }
}

/// Seeds a bounded flood fill at each sampled dark pixel and keeps the
/// largest region found. The visited set is shared across seeds so two seeds
/// inside the same patch count it once.
fn largest_dark_region(buffer: &PixelBuffer, seeds: &[(u32, u32)]) -> usize {
    let mut visited: HashSet<(u32, u32)> = HashSet::new();
    let mut largest = 0usize;
    for &seed in seeds {
        largest = largest.max(connectivity::dark_region_size(buffer, seed, &mut visited));
    }
    largest
}
