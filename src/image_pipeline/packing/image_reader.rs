use image::DynamicImage;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::packing::reader::PackedImageReader;
use crate::image_pipeline::packing::types::{PackedImage, PACKED_CHANNELS};

/// Reads previously packed 8-bit RGB(A) images back into BGR order.
pub struct ImagePackedReader;

impl PackedImageReader for ImagePackedReader {
    fn read_packed(&self, data: &[u8]) -> Result<PackedImage> {
        debug!("Decoding packed image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::LoadError(e.to_string()))?;

        let (samples, stride): (&[u8], usize) = match &decoded {
            DynamicImage::ImageRgb8(buf) => (buf.as_raw(), 3),
            DynamicImage::ImageRgba8(buf) => (buf.as_raw(), 4),
            other => {
                return Err(ConversionError::LoadError(format!(
                    "expected an 8-bit RGB image, found {:?}",
                    other.color()
                )));
            }
        };

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        let mut packed = PackedImage::zeroed(width, height);
        for (dst, src) in packed
            .data
            .chunks_exact_mut(PACKED_CHANNELS)
            .zip(samples.chunks_exact(stride))
        {
            dst[0] = src[2];
            dst[1] = src[1];
            dst[2] = src[0];
        }

        Ok(packed)
    }
}
