use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::heightmap::types::HeightMap;

pub trait HeightMapReader {
    fn read_height_map(&self, data: &[u8]) -> Result<HeightMap>;
}
