use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::packing::types::PackedImage;
use crate::image_pipeline::png::types::PackConfig;

pub trait PackedImageWriter {
    fn write_png(&self, image: &PackedImage, output: &mut dyn Write, config: &PackConfig) -> Result<()>;
}
