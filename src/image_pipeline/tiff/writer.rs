use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::heightmap::types::HeightMap;
use crate::image_pipeline::tiff::types::UnpackConfig;

pub trait HeightMapWriter {
    fn write_tiff(&self, image: &HeightMap, output: &mut dyn Write, config: &UnpackConfig) -> Result<()>;
}
