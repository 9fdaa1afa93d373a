//! Packed image data types

/// Channels per packed pixel
pub const PACKED_CHANNELS: usize = 3;

/// 8-bit, 3-channel image holding split heights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved pixel data [B, G, R, B, G, R, ...]
    pub data: Vec<u8>,
}

impl PackedImage {
    /// All-zero image of the given size.
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * PACKED_CHANNELS],
        }
    }

    /// `[B, G, R]` at (`row`, `column`), or `None` outside the grid.
    pub fn pixel(&self, row: usize, column: usize) -> Option<[u8; 3]> {
        if row >= self.height || column >= self.width {
            return None;
        }
        let offset = (row * self.width + column) * PACKED_CHANNELS;
        let px = self.data.get(offset..offset + PACKED_CHANNELS)?;
        Some([px[0], px[1], px[2]])
    }

    pub fn channels(&self) -> usize {
        PACKED_CHANNELS
    }
}
