// THEORY:
// The `pipeline` module is the top-level API of the engine. It owns the
// fixed-resolution input contract, fans a validated frame out to every
// analyzer, and assembles their disjoint outputs into a single immutable
// `FeatureRecord`.
//
// Key architectural principles:
// 1.  **Independent Passes**: Each analyzer scans the raster on its own;
//     there is no shared intermediate grid. The passes are all O(W*H) over a
//     fixed 224x224 frame, so simplicity wins over a fused mega-loop.
// 2.  **Stateless Per Call**: The pipeline holds only configuration. Nothing
//     survives between calls, which makes repeated analysis of the same
//     frame idempotent and concurrent analysis of independent buffers safe.
// 3.  **Construct Complete or Not At All**: The record is built in one
//     expression from finished analyzer outputs. No field is ever exposed
//     half-computed.

use crate::core_modules::classifier;
use crate::core_modules::color_stats;
use crate::core_modules::defects;
use crate::core_modules::edges;
use crate::core_modules::geometry;
use crate::core_modules::sprouts;
use crate::core_modules::texture;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::debug;

// Re-export the pieces of the record's schema for the public API.
pub use crate::core_modules::classifier::ClassifierMode;
pub use crate::core_modules::color_stats::ColorAnalysis;
pub use crate::core_modules::geometry::{Dimensions, SizeClass};
pub use crate::core_modules::raster::PixelBuffer;

/// Every frame handed to the pipeline must be exactly this size.
pub const FRAME_WIDTH: u32 = 224;
pub const FRAME_HEIGHT: u32 = 224;

/// Configuration for the `AnalysisPipeline`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineConfig {
    /// Which classifier rule set gates the subject analyzers. The default
    /// excludes the dark-brownish extension.
    pub classifier_mode: ClassifierMode,
}

/// The complete hand-off contract produced from one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub dimensions: Dimensions,
    pub black_spots_count: u32,
    /// 1 (smooth) to 4 (very soft/deteriorated).
    pub surface_texture_score: u8,
    /// 1 (best) to 5 (worst).
    pub skin_condition_score: u8,
    pub has_bruises: bool,
    pub has_cuts: bool,
    pub has_lesions: bool,
    /// OR of the three damage flags.
    pub visible_damage_flag: bool,
    pub color_analysis: ColorAnalysis,
    /// Whole-raster green-dominance ratio in [0, 1].
    pub sprouting_detected: f64,
    /// How many raster pixels the classifier accepted as onion.
    pub subject_pixel_count: usize,
    /// Largest contiguous dark region found by the bounded flood fill.
    pub largest_dark_region: usize,
}

/// The main, top-level struct of the extraction engine.
pub struct AnalysisPipeline {
    config: PipelineConfig,
}

impl AnalysisPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs every analyzer over the frame and assembles the record.
    /// Rejects any raster that is not exactly 224x224.
    pub fn analyze(&self, buffer: &PixelBuffer) -> Result<FeatureRecord, EngineError> {
        if buffer.width() != FRAME_WIDTH || buffer.height() != FRAME_HEIGHT {
            return Err(EngineError::InvalidFrameShape {
                width: buffer.width(),
                height: buffer.height(),
                expected_width: FRAME_WIDTH,
                expected_height: FRAME_HEIGHT,
            });
        }

        let mode = self.config.classifier_mode;
        let subject_pixel_count = buffer
            .pixels()
            .filter(|(_, _, p)| classifier::is_subject(mode, p.red, p.green, p.blue))
            .count();

        let dimensions = geometry::estimate(buffer, mode);
        let color_analysis = color_stats::aggregate(buffer, mode);
        let defect_summary = defects::analyze(buffer, mode);
        let has_cuts = edges::detect_cuts(buffer, mode);
        let surface_texture_score = texture::surface_score(buffer, mode);
        let sprouting_detected = sprouts::sprout_ratio(buffer);

        let record = FeatureRecord {
            dimensions,
            black_spots_count: defect_summary.black_spots_count,
            surface_texture_score,
            skin_condition_score: defect_summary.skin_condition_score,
            has_bruises: defect_summary.has_bruises,
            has_cuts,
            has_lesions: defect_summary.has_lesions,
            visible_damage_flag: defect_summary.has_bruises
                || has_cuts
                || defect_summary.has_lesions,
            color_analysis,
            sprouting_detected,
            subject_pixel_count,
            largest_dark_region: defect_summary.largest_dark_region,
        };

        debug!(
            subject_pixel_count,
            black_spots = record.black_spots_count,
            skin = record.skin_condition_score,
            texture = record.surface_texture_score,
            damage = record.visible_damage_flag,
            "frame analyzed"
        );

        Ok(record)
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(fill: [u8; 4]) -> PixelBuffer {
        let mut bytes = Vec::with_capacity((FRAME_WIDTH * FRAME_HEIGHT * 4) as usize);
        for _ in 0..FRAME_WIDTH * FRAME_HEIGHT {
            bytes.extend_from_slice(&fill);
        }
        PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT, bytes).unwrap()
    }

    #[test]
    fn rejects_wrong_frame_shape() {
        let small = PixelBuffer::new(10, 10, vec![0u8; 400]).unwrap();
        let result = AnalysisPipeline::default().analyze(&small);
        assert_eq!(
            result,
            Err(EngineError::InvalidFrameShape {
                width: 10,
                height: 10,
                expected_width: FRAME_WIDTH,
                expected_height: FRAME_HEIGHT,
            })
        );
    }

    #[test]
    fn damage_flag_is_the_or_of_the_three_flags() {
        let record = AnalysisPipeline::default()
            .analyze(&frame([150, 120, 60, 255]))
            .unwrap();
        assert!(!record.has_bruises && !record.has_cuts && !record.has_lesions);
        assert!(!record.visible_damage_flag);
    }

    #[test]
    fn record_serializes_with_named_fields() {
        let record = AnalysisPipeline::default()
            .analyze(&frame([150, 120, 60, 255]))
            .unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["skin_condition_score"], 3);
        assert_eq!(value["dimensions"]["size_class"], "Large");
    }
}
