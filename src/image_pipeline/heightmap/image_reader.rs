//! Height map reader backed by the `image` crate.
//!
//! Any container the crate can decode losslessly (PNG, TIFF) is accepted as
//! long as it carries 16 bits per channel. Grayscale sources keep their
//! luma sample; colour sources keep blue, the leading channel in BGR order.

use image::DynamicImage;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::heightmap::reader::HeightMapReader;
use crate::image_pipeline::heightmap::types::HeightMap;

pub struct ImageHeightMapReader;

impl HeightMapReader for ImageHeightMapReader {
    /// Decodes `data` and extracts the first 16-bit channel.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::LoadError`] when the bytes are not a
    /// decodable image, when the image is 8-bit or floating point, or when
    /// it has no pixels.
    fn read_height_map(&self, data: &[u8]) -> Result<HeightMap> {
        debug!("Decoding source image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::LoadError(e.to_string()))?;

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;
        if width == 0 || height == 0 {
            return Err(ConversionError::LoadError(format!(
                "image has no pixels: width={}, height={}",
                width, height
            )));
        }

        // (samples, channels per pixel, offset of the kept sample)
        let (samples, stride, offset): (&[u16], usize, usize) = match &decoded {
            DynamicImage::ImageLuma16(buf) => (buf.as_raw(), 1, 0),
            DynamicImage::ImageLumaA16(buf) => (buf.as_raw(), 2, 0),
            DynamicImage::ImageRgb16(buf) => (buf.as_raw(), 3, 2),
            DynamicImage::ImageRgba16(buf) => (buf.as_raw(), 4, 2),
            other => {
                return Err(ConversionError::LoadError(format!(
                    "expected a 16-bit channel, found {:?}",
                    other.color()
                )));
            }
        };

        debug!("Decoded image: {}x{}, {} channel(s)", width, height, stride);

        let data: Vec<u16> = samples.iter().skip(offset).step_by(stride).copied().collect();
        if data.len() != width * height {
            return Err(ConversionError::LoadError(format!(
                "sample count {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }

        Ok(HeightMap::new(width, height, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Luma, LumaA, Rgb, Rgba};
    use std::io::Cursor;

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_reads_luma16() {
        let buf: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_raw(2, 1, vec![0x0000, 0xFFFF]).unwrap();
        let bytes = encode_png(DynamicImage::ImageLuma16(buf));

        let map = ImageHeightMapReader.read_height_map(&bytes).unwrap();

        assert_eq!(map.width, 2);
        assert_eq!(map.height, 1);
        assert_eq!(map.data, vec![0x0000, 0xFFFF]);
    }

    #[test]
    fn test_keeps_blue_channel_of_rgb16() {
        let buf: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_raw(1, 2, vec![0x1111, 0x5555, 0x1234, 3, 4, 0xABCD]).unwrap();
        let bytes = encode_png(DynamicImage::ImageRgb16(buf));

        let map = ImageHeightMapReader.read_height_map(&bytes).unwrap();

        assert_eq!(map.data, vec![0x1234, 0xABCD]);
        assert_eq!(map.get(1, 0), Some(0xABCD));
        assert_eq!(map.get(0, 1), None);
    }

    #[test]
    fn test_keeps_blue_channel_of_rgba16() {
        let buf: ImageBuffer<Rgba<u16>, Vec<u16>> =
            ImageBuffer::from_raw(1, 1, vec![0x1111, 0x5555, 0x2222, 0xFFFF]).unwrap();
        let bytes = encode_png(DynamicImage::ImageRgba16(buf));

        let map = ImageHeightMapReader.read_height_map(&bytes).unwrap();

        assert_eq!(map.data, vec![0x2222]);
    }

    #[test]
    fn test_keeps_luma_of_lumaa16() {
        let buf: ImageBuffer<LumaA<u16>, Vec<u16>> =
            ImageBuffer::from_raw(2, 1, vec![0x0102, 0xFFFF, 0x0304, 0]).unwrap();
        let bytes = encode_png(DynamicImage::ImageLumaA16(buf));

        let map = ImageHeightMapReader.read_height_map(&bytes).unwrap();

        assert_eq!(map.data, vec![0x0102, 0x0304]);
    }

    #[test]
    fn test_rejects_8bit_source() {
        let buf: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_raw(1, 1, vec![7]).unwrap();
        let bytes = encode_png(DynamicImage::ImageLuma8(buf));

        let result = ImageHeightMapReader.read_height_map(&bytes);

        assert!(matches!(result, Err(ConversionError::LoadError(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        let result = ImageHeightMapReader.read_height_map(b"not an image");
        assert!(matches!(result, Err(ConversionError::LoadError(_))));
    }
}
