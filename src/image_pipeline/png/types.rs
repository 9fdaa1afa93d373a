//! Packing configuration types

/// PNG compression levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    /// Fastest encoding, largest file
    Fast,
    /// Encoder default (balanced)
    Default,
    /// Smallest file, slowest encoding
    Best,
}

/// PNG row filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngFilter {
    NoFilter,
    Sub,
    Up,
    Avg,
    Paeth,
    /// Pick a filter per row (default)
    Adaptive,
}

/// Configuration for height map packing
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Compression level of the output PNG
    pub compression: PngCompression,
    /// Row filter of the output PNG
    pub filter: PngFilter,
    /// Split rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Default,
            filter: PngFilter::Adaptive,
            parallel: false,
        }
    }
}

impl PackConfig {
    pub fn builder() -> PackConfigBuilder {
        PackConfigBuilder::default()
    }
}

/// Builder for PackConfig
#[derive(Default)]
pub struct PackConfigBuilder {
    compression: Option<PngCompression>,
    filter: Option<PngFilter>,
    parallel: Option<bool>,
}

impl PackConfigBuilder {
    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }
    
    pub fn filter(mut self, filter: PngFilter) -> Self {
        self.filter = Some(filter);
        self
    }
    
    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }
    
    pub fn build(self) -> PackConfig {
        let default = PackConfig::default();
        PackConfig {
            compression: self.compression.unwrap_or(default.compression),
            filter: self.filter.unwrap_or(default.filter),
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}
