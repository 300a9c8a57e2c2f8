// THEORY:
// The `shelf_life` module folds a completed `FeatureRecord` into a bounded
// days-remaining estimate and an ordinal quality grade. It is the only
// consumer-facing number the engine produces, and it is deliberately boring:
// a linear penalty sum from a fixed baseline, rounded and clamped.
//
// Key architectural principles:
// 1.  **Pure Function of the Record**: No clock, no randomness, no state.
//     Scoring the same record twice is bit-identical. Display-layer jitter
//     (picking a specific day inside a bucket for video loops) lives outside
//     this crate and must never leak in.
// 2.  **No Penalty Without a Subject**: A frame with zero subject pixels
//     carries default scores (neutral skin 3, texture 1). Those defaults
//     describe the absence of an onion, not a damaged one, so the estimator
//     returns the untouched baseline instead of reading defaults as damage.
// 3.  **Clamped Output**: The estimate is pinned to [0, 37] days; the grade
//     is a strict step function of the clamped day count.

use crate::pipeline::FeatureRecord;
use serde::{Deserialize, Serialize};

const BASELINE_DAYS: f64 = 30.0;
const MIN_DAYS: i32 = 0;
const MAX_DAYS: i32 = 37;

const SPOT_PENALTY_PER_COUNT: f64 = 0.8;
const TEXTURE_PENALTY_PER_STEP: f64 = 3.0;
const SKIN_PENALTY_PER_STEP: f64 = 4.0;
const VISIBLE_DAMAGE_PENALTY: f64 = 8.0;

const HEAVY_SPROUTING_RATIO: f64 = 0.05;
const LIGHT_SPROUTING_RATIO: f64 = 0.02;
const HEAVY_SPROUTING_PENALTY: f64 = 10.0;
const LIGHT_SPROUTING_PENALTY: f64 = 5.0;

/// Ordinal quality grade, A best through D worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityGrade {
    A,
    B,
    C,
    D,
}

/// Bounded shelf-life estimate derived from a single `FeatureRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLifeResult {
    /// Estimated days of remaining freshness, clamped to [0, 37].
    pub days: i32,
    pub grade: QualityGrade,
}

/// Deterministic scoring over a completed record.
pub fn estimate(record: &FeatureRecord) -> ShelfLifeResult {
    if record.subject_pixel_count == 0 {
        // Nothing was detected; the defaults in the record describe an empty
        // frame, not a damaged onion.
        return ShelfLifeResult {
            days: BASELINE_DAYS as i32,
            grade: grade_for_days(BASELINE_DAYS as i32),
        };
    }

    let damage_penalty = if record.visible_damage_flag {
        VISIBLE_DAMAGE_PENALTY
    } else {
        0.0
    };

    let days = BASELINE_DAYS
        - record.black_spots_count as f64 * SPOT_PENALTY_PER_COUNT
        - (record.surface_texture_score as f64 - 1.0) * TEXTURE_PENALTY_PER_STEP
        - (record.skin_condition_score as f64 - 1.0) * SKIN_PENALTY_PER_STEP
        - damage_penalty
        - sprouting_penalty(record.sprouting_detected);

    let days = (days.round() as i32).clamp(MIN_DAYS, MAX_DAYS);
    ShelfLifeResult {
        days,
        grade: grade_for_days(days),
    }
}

/// Two-step sprouting penalty: heavy sprouting costs 10 days, light 5.
pub fn sprouting_penalty(sprout_ratio: f64) -> f64 {
    if sprout_ratio > HEAVY_SPROUTING_RATIO {
        HEAVY_SPROUTING_PENALTY
    } else if sprout_ratio > LIGHT_SPROUTING_RATIO {
        LIGHT_SPROUTING_PENALTY
    } else {
        0.0
    }
}

/// Strict step function from day count to grade; bands never overlap.
pub fn grade_for_days(days: i32) -> QualityGrade {
    if days > 25 {
        QualityGrade::A
    } else if days > 18 {
        QualityGrade::B
    } else if days > 10 {
        QualityGrade::C
    } else {
        QualityGrade::D
    }
}
