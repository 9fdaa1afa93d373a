use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::heightmap::types::HeightMap;
use crate::image_pipeline::tiff::types::{UnpackConfig, TiffCompression, TiffPredictor};
use crate::image_pipeline::tiff::writer::HeightMapWriter;

pub struct StandardTiffWriter;

impl HeightMapWriter for StandardTiffWriter {
    fn write_tiff(&self, image: &HeightMap, output: &mut dyn Write, config: &UnpackConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width, image.height);
        
        if image.data.len() != image.width * image.height {
            return Err(ConversionError::SaveError(format!(
                "height map holds {} samples, {}x{} needs {}",
                image.data.len(),
                image.width,
                image.height,
                image.width * image.height
            )));
        }
        
        let mut buffer = Vec::new();
        
        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };
        
        let predictor = match config.predictor {
            TiffPredictor::None => tiff::tags::Predictor::None,
            TiffPredictor::Horizontal => tiff::tags::Predictor::Horizontal,
        };
        
        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::SaveError(e.to_string()))?
            .with_compression(compression)
            .with_predictor(predictor);
        
        encoder.write_image::<tiff::encoder::colortype::Gray16>(
            image.width as u32,
            image.height as u32,
            &image.data,
        ).map_err(|e| ConversionError::SaveError(e.to_string()))?;
        
        output
            .write_all(&buffer)
            .map_err(|e| ConversionError::SaveError(e.to_string()))?;
        
        debug!("TIFF encoding complete");
        Ok(())
    }
}
