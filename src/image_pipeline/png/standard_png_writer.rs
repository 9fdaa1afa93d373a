use std::io::Write;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::packing::types::{PackedImage, PACKED_CHANNELS};
use crate::image_pipeline::png::types::{PackConfig, PngCompression, PngFilter};
use crate::image_pipeline::png::writer::PackedImageWriter;

pub struct StandardPngWriter;

impl PackedImageWriter for StandardPngWriter {
    fn write_png(&self, image: &PackedImage, output: &mut dyn Write, config: &PackConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);
        
        let compression = match config.compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };
        
        let filter = match config.filter {
            PngFilter::NoFilter => FilterType::NoFilter,
            PngFilter::Sub => FilterType::Sub,
            PngFilter::Up => FilterType::Up,
            PngFilter::Avg => FilterType::Avg,
            PngFilter::Paeth => FilterType::Paeth,
            PngFilter::Adaptive => FilterType::Adaptive,
        };
        
        let expected = image.width * image.height * PACKED_CHANNELS;
        if image.data.len() != expected {
            return Err(ConversionError::SaveError(format!(
                "buffer holds {} bytes, {}x{} RGB needs {}",
                image.data.len(),
                image.width,
                image.height,
                expected
            )));
        }

        // Stored as BGR, PNG wants RGB
        let rgb: Vec<u8> = image
            .data
            .chunks_exact(PACKED_CHANNELS)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect();
        
        let mut buffer = Vec::new();
        
        PngEncoder::new_with_quality(&mut buffer, compression, filter)
            .write_image(
                &rgb,
                image.width as u32,
                image.height as u32,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| ConversionError::SaveError(e.to_string()))?;
        
        output
            .write_all(&buffer)
            .map_err(|e| ConversionError::SaveError(e.to_string()))?;
        
        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    #[test]
    fn test_writes_rgb8_in_file_order() {
        let packed = PackedImage {
            width: 1,
            height: 1,
            data: vec![0, 0x34, 0x12],
        };
        let mut out = Vec::new();

        StandardPngWriter
            .write_png(&packed, &mut out, &PackConfig::default())
            .unwrap();

        let decoded = image::load_from_memory(&out).unwrap();
        let DynamicImage::ImageRgb8(buf) = decoded else {
            panic!("expected Rgb8 output");
        };
        assert_eq!(buf.get_pixel(0, 0).0, [0x12, 0x34, 0x00]);
    }

    #[test]
    fn test_size_mismatch_is_save_error() {
        let packed = PackedImage {
            width: 4,
            height: 4,
            data: vec![0; 3],
        };
        let mut out = Vec::new();

        let result = StandardPngWriter.write_png(&packed, &mut out, &PackConfig::default());

        assert!(matches!(result, Err(ConversionError::SaveError(_))));
        assert!(out.is_empty());
    }
}
