use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    /// Source could not be read, decoded, or lacks a 16-bit channel.
    #[error("Failed to load source image: {0}")]
    LoadError(String),
    
    /// Destination could not be encoded, created, or written.
    #[error("Failed to save output image: {0}")]
    SaveError(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
