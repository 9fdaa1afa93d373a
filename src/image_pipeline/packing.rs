//! Byte packing module
//!
//! Splits 16-bit heights into the green (low byte) and red (high byte)
//! channels of an 8-bit image, and merges them back.

mod split;
mod reader;
mod image_reader;
pub mod types;

pub use split::{split_height_map, merge_packed_image, split_value};
pub use reader::PackedImageReader;
pub use image_reader::ImagePackedReader;
pub use types::PackedImage;
