use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    heightmap::{HeightMapReader, ImageHeightMapReader},
    packing::split_height_map,
    png::{PackedImageWriter, StandardPngWriter, PackConfig},
};

fn check_png_destination(path: &Path) -> Result<()> {
    match path.extension() {
        None => Ok(()),
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(()),
        Some(ext) => Err(ConversionError::SaveError(format!(
            "{}: output is always PNG, refusing extension .{}",
            path.display(),
            ext.to_string_lossy()
        ))),
    }
}

/// Converts a 16-bit height map into an 8-bit image with the low byte in
/// green and the high byte in red.
pub struct HeightMapPackPipeline<R: HeightMapReader, W: PackedImageWriter> {
    reader: R,
    writer: W,
    config: PackConfig,
}

impl HeightMapPackPipeline<ImageHeightMapReader, StandardPngWriter> {
    pub fn new(config: PackConfig) -> Self {
        Self {
            reader: ImageHeightMapReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: HeightMapReader, W: PackedImageWriter> HeightMapPackPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PackConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting height map packing");

        let height_map = {
            let _span = tracing::info_span!("decode_source").entered();
            self.reader.read_height_map(input_data)?
        };

        let packed = {
            let _span = tracing::info_span!("split_bytes",
                width = height_map.width,
                height = height_map.height,
                parallel = self.config.parallel
            ).entered();
            split_height_map(&height_map, self.config.parallel)
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&packed, output, &self.config)?;
        }

        info!(
            width = packed.width,
            height = packed.height,
            "Packing complete"
        );
        Ok(())
    }

    /// Packs `input_path` into `output_path`.
    ///
    /// The whole conversion runs in memory before the destination is
    /// created, so a source that fails to load never leaves a file behind.
    /// The output is always PNG; a destination with any other extension is
    /// rejected with [`ConversionError::SaveError`] before the source is read.
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
            "Packing file"
        );

        check_png_destination(output_path)?;

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

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PackConfig) {
        self.config = config;
    }
}
