//! Height map reading module
//!
//! Decodes 16-bit single-channel source images into a [`HeightMap`].

mod reader;
mod image_reader;
pub mod types;

pub use reader::HeightMapReader;
pub use image_reader::ImageHeightMapReader;
pub use types::HeightMap;
