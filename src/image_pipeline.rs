//! Image processing pipeline module
//!
//! Height map packing: 16-bit grayscale sources are split into the green
//! (low byte) and red (high byte) channels of an 8-bit PNG, and packed
//! images can be merged back into 16-bit TIFF height maps.

pub mod heightmap;
pub mod packing;
pub mod png;
pub mod tiff;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use heightmap::{
    HeightMap,
    HeightMapReader,
    ImageHeightMapReader,
};

pub use packing::{
    PackedImage,
    PackedImageReader,
    ImagePackedReader,
    split_height_map,
    merge_packed_image,
    split_value,
};

pub use png::{
    PngCompression,
    PngFilter,
    PackConfig,
    PackConfigBuilder,
    PackedImageWriter,
    StandardPngWriter,
};

pub use self::tiff::{
    TiffCompression,
    TiffPredictor,
    UnpackConfig,
    UnpackConfigBuilder,
    HeightMapWriter,
    StandardTiffWriter,
};

pub use conversions::{
    HeightMapPackPipeline,
    HeightMapUnpackPipeline,
};
