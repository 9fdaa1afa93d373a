//! PNG writing module
//!
//! Encodes packed images as lossless 8-bit RGB PNG files.

mod writer;
mod standard_png_writer;
pub mod types;

pub use writer::PackedImageWriter;
pub use standard_png_writer::StandardPngWriter;
pub use types::{PngCompression, PngFilter, PackConfig, PackConfigBuilder};
