//! Height map data types

/// Decoded 16-bit height samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Row-major samples, one per pixel
    pub data: Vec<u16>,
}

impl HeightMap {
    pub fn new(width: usize, height: usize, data: Vec<u16>) -> Self {
        Self { width, height, data }
    }

    /// Sample at (`row`, `column`), or `None` outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<u16> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.data.get(row * self.width + column).copied()
    }
}
