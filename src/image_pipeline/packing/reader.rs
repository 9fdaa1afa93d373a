use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::packing::types::PackedImage;

pub trait PackedImageReader {
    fn read_packed(&self, data: &[u8]) -> Result<PackedImage>;
}
