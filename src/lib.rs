// THEORY:
// This file is the main entry point for the `allium_vision` library crate.
// It exposes the `AnalysisPipeline` and its data structures (`FeatureRecord`,
// `ShelfLifeResult`, etc.) as the clean, high-level interface for the whole
// extraction engine, while the per-analyzer internals stay encapsulated in
// `core_modules`.
//
// The engine is deliberately narrow: one validated 224x224 RGBA frame in,
// one immutable `FeatureRecord` out, plus a separately invocable
// deterministic shelf-life score over that record. Frame acquisition,
// rendering, and any cosmetic randomization belong to external collaborators
// and have no hooks here.

pub mod core_modules;
pub mod error;
pub mod pipeline;
pub mod shelf_life;

pub use error::EngineError;
pub use pipeline::{
    AnalysisPipeline, ClassifierMode, FeatureRecord, PipelineConfig, PixelBuffer, SizeClass,
    FRAME_HEIGHT, FRAME_WIDTH,
};
pub use shelf_life::{QualityGrade, ShelfLifeResult};
