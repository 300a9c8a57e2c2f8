// Cross-module properties of the full engine: idempotence, output bounds,
// and the behavior of a handful of carefully constructed synthetic frames.

use allium_vision::shelf_life::{self, QualityGrade};
use allium_vision::{
    AnalysisPipeline, PixelBuffer, SizeClass, FRAME_HEIGHT, FRAME_WIDTH,
};

const GOLDEN: [u8; 4] = [150, 120, 60, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const GREEN: [u8; 4] = [60, 140, 60, 255];
// Subject-colored under the warm rule; brightness 136.67 and 56.67.
const BRIGHT_WARM: [u8; 4] = [200, 150, 60, 255];
const DARK_WARM: [u8; 4] = [90, 55, 25, 255];

/// Builds a full-size frame by asking `paint` for the color of each (x, y).
fn frame(paint: impl Fn(u32, u32) -> [u8; 4]) -> PixelBuffer {
    let mut bytes = Vec::with_capacity((FRAME_WIDTH * FRAME_HEIGHT * 4) as usize);
    for y in 0..FRAME_HEIGHT {
        for x in 0..FRAME_WIDTH {
            bytes.extend_from_slice(&paint(x, y));
        }
    }
    PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT, bytes).unwrap()
}

#[test]
fn identical_frames_yield_identical_results() {
    let pipeline = AnalysisPipeline::default();
    let buffer = frame(|x, y| if (x / 16 + y / 16) % 2 == 0 { GOLDEN } else { BLACK });

    let first = pipeline.analyze(&buffer).unwrap();
    let second = pipeline.analyze(&buffer).unwrap();
    assert_eq!(first, second);
    assert_eq!(shelf_life::estimate(&first), shelf_life::estimate(&second));
}

#[test]
fn all_black_frame_reports_no_onion_and_no_penalties() {
    let record = AnalysisPipeline::default()
        .analyze(&frame(|_, _| BLACK))
        .unwrap();

    assert_eq!(record.subject_pixel_count, 0);
    assert_eq!(record.dimensions.size_class, SizeClass::Small);
    assert_eq!(record.dimensions.length_mm, 0.0);
    assert_eq!(record.black_spots_count, 0);
    assert_eq!(record.surface_texture_score, 1);
    assert_eq!(record.skin_condition_score, 3);
    assert!(!record.has_bruises && !record.has_cuts && !record.has_lesions);
    assert!(!record.visible_damage_flag);
    assert_eq!(record.color_analysis.avg_brightness, 0.0);
    assert_eq!(record.color_analysis.avg_saturation, 0.0);
    assert_eq!(record.sprouting_detected, 0.0);
    assert_eq!(record.largest_dark_region, 0);

    // Absence of signal must not read as damage.
    let score = shelf_life::estimate(&record);
    assert_eq!(score.days, 30);
    assert_eq!(score.grade, QualityGrade::A);
}

#[test]
fn uniform_golden_frame_walks_the_expected_branches() {
    let record = AnalysisPipeline::default()
        .analyze(&frame(|_, _| GOLDEN))
        .unwrap();

    assert_eq!(record.subject_pixel_count, (FRAME_WIDTH * FRAME_HEIGHT) as usize);
    assert!((record.color_analysis.avg_brightness - 110.0).abs() < 1e-9);
    assert!((record.color_analysis.avg_saturation - 0.6).abs() < 1e-9);
    assert_eq!(record.black_spots_count, 0);
    assert_eq!(record.surface_texture_score, 1);
    // Brightness 110 fails the per-pixel "good" gate (needs > 120), so the
    // rubric falls through rules 1 and 2 to the neutral rule 3.
    assert_eq!(record.skin_condition_score, 3);
    assert!(!record.visible_damage_flag);
    assert_eq!(record.dimensions.length_mm, 75.0);
    assert_eq!(record.dimensions.size_class, SizeClass::Large);

    // 30 baseline minus the skin penalty (3 - 1) * 4.
    let score = shelf_life::estimate(&record);
    assert_eq!(score.days, 22);
    assert_eq!(score.grade, QualityGrade::B);
}

#[test]
fn green_stripe_ratios_are_exact() {
    // 56 of 224 rows: ratio 12544/50176 = 0.25 exactly.
    let quarter = AnalysisPipeline::default()
        .analyze(&frame(|_, y| if y < 56 { GREEN } else { BLACK }))
        .unwrap();
    assert_eq!(quarter.sprouting_detected, 0.25);
    assert_eq!(shelf_life::sprouting_penalty(quarter.sprouting_detected), 10.0);

    // 7 of 224 rows: ratio 1/32 = 0.03125 exactly, the light-sprouting band.
    let light = AnalysisPipeline::default()
        .analyze(&frame(|_, y| if y < 7 { GREEN } else { BLACK }))
        .unwrap();
    assert_eq!(light.sprouting_detected, 0.03125);
    assert_eq!(shelf_life::sprouting_penalty(light.sprouting_detected), 5.0);

    // 2 of 224 rows: below the light threshold, no penalty.
    let trace = AnalysisPipeline::default()
        .analyze(&frame(|_, y| if y < 2 { GREEN } else { BLACK }))
        .unwrap();
    assert_eq!(shelf_life::sprouting_penalty(trace.sprouting_detected), 0.0);
}

#[test]
fn sharp_checkerboard_flags_cuts() {
    let record = AnalysisPipeline::default()
        .analyze(&frame(|x, y| if (x + y) % 2 == 0 { BRIGHT_WARM } else { DARK_WARM }))
        .unwrap();

    // Every horizontal neighbor pair differs by 80 brightness.
    assert!(record.has_cuts);
    // The same frame maxes out the other damage channels too.
    assert!(record.has_bruises);
    assert!(record.visible_damage_flag);
    assert_eq!(record.black_spots_count, 21);
    assert_eq!(record.surface_texture_score, 4);

    let score = shelf_life::estimate(&record);
    assert_eq!(score.days, 0);
    assert_eq!(score.grade, QualityGrade::D);
}

#[test]
fn golden_frame_with_dark_spot_counts_it_once() {
    // A 45x45 dark-warm square: dark ratio 2025/50176 ~ 0.0404, band 2.
    let record = AnalysisPipeline::default()
        .analyze(&frame(|x, y| {
            if x < 45 && y < 45 {
                [85, 55, 25, 255]
            } else {
                GOLDEN
            }
        }))
        .unwrap();

    assert_eq!(record.black_spots_count, 4);
    // One contiguous patch far larger than the flood-fill budget.
    assert_eq!(record.largest_dark_region, 100);
    // 0.0404 is under the bruise threshold of 0.05.
    assert!(!record.has_bruises);
    assert!(!record.has_cuts);
}

#[test]
fn all_outputs_stay_inside_their_documented_bounds() {
    let frames = [
        frame(|_, _| BLACK),
        frame(|_, _| GOLDEN),
        frame(|x, y| if (x + y) % 2 == 0 { BRIGHT_WARM } else { DARK_WARM }),
        frame(|_, y| if y < 56 { GREEN } else { GOLDEN }),
        frame(|x, _| if x % 3 == 0 { DARK_WARM } else { BLACK }),
    ];

    let pipeline = AnalysisPipeline::default();
    for buffer in &frames {
        let record = pipeline.analyze(buffer).unwrap();
        assert!(record.black_spots_count <= 21);
        assert!((1..=4).contains(&record.surface_texture_score));
        assert!((1..=5).contains(&record.skin_condition_score));
        assert!((0.0..=1.0).contains(&record.sprouting_detected));
        assert!((0.0..=1.0).contains(&record.color_analysis.avg_saturation));
        assert!((0.0..=255.0).contains(&record.color_analysis.avg_brightness));
        assert!(record.dimensions.length_mm >= 0.0);
        assert_eq!(
            record.visible_damage_flag,
            record.has_bruises || record.has_cuts || record.has_lesions
        );

        let score = shelf_life::estimate(&record);
        assert!((0..=37).contains(&score.days));
    }
}
