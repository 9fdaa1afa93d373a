//! Unpacking configuration types

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Sample predictor applied before compression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffPredictor {
    /// Samples are stored as-is
    None,
    /// Each sample is stored as the difference to its left neighbour.
    /// Smooth terrain compresses noticeably better this way.
    Horizontal,
}

/// Configuration for packed PNG to height map TIFF conversion
#[derive(Debug, Clone)]
pub struct UnpackConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor used together with `compression`
    pub predictor: TiffPredictor,
}

impl Default for UnpackConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::DeflateBalanced,
            predictor: TiffPredictor::None,
        }
    }
}

impl UnpackConfig {
    pub fn builder() -> UnpackConfigBuilder {
        UnpackConfigBuilder::default()
    }
}

/// Builder for UnpackConfig
#[derive(Default)]
pub struct UnpackConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<TiffPredictor>,
}

impl UnpackConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }
    
    pub fn predictor(mut self, predictor: TiffPredictor) -> Self {
        self.predictor = Some(predictor);
        self
    }
    
    pub fn build(self) -> UnpackConfig {
        let default = UnpackConfig::default();
        UnpackConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
