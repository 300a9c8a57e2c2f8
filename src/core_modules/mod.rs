pub mod classifier;
pub mod color_stats;
pub mod connectivity;
pub mod defects;
pub mod edges;
pub mod geometry;
pub mod pixel;
pub mod raster;
pub mod sprouts;
pub mod texture;
