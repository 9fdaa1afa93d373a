//! TIFF writing module
//!
//! Writes reconstructed height maps as 16-bit grayscale TIFF files.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::HeightMapWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{TiffCompression, TiffPredictor, UnpackConfig, UnpackConfigBuilder};
