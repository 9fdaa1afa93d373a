use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    packing::{merge_packed_image, ImagePackedReader, PackedImageReader},
    tiff::{HeightMapWriter, StandardTiffWriter, UnpackConfig},
};

/// Rebuilds a 16-bit height map from a packed image and stores it as a
/// grayscale TIFF.
pub struct HeightMapUnpackPipeline<R: PackedImageReader, W: HeightMapWriter> {
    reader: R,
    writer: W,
    config: UnpackConfig,
}

impl HeightMapUnpackPipeline<ImagePackedReader, StandardTiffWriter> {
    pub fn new(config: UnpackConfig) -> Self {
        Self {
            reader: ImagePackedReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: PackedImageReader, W: HeightMapWriter> HeightMapUnpackPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: UnpackConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting height map unpacking");

        let packed = {
            let _span = tracing::info_span!("decode_packed").entered();
            self.reader.read_packed(input_data)?
        };

        let height_map = {
            let _span = tracing::info_span!("merge_bytes",
                width = packed.width,
                height = packed.height
            ).entered();
            merge_packed_image(&packed)
        };

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_tiff(&height_map, output, &self.config)?;
        }

        info!(
            width = height_map.width,
            height = height_map.height,
            "Unpacking complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Unpacking file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::LoadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::SaveError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &UnpackConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: UnpackConfig) {
        self.config = config;
    }
}
