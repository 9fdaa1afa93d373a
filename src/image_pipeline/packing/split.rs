use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::heightmap::types::HeightMap;
use crate::image_pipeline::packing::types::{PackedImage, PACKED_CHANNELS};

/// Splits a height into `[B, G, R]` = `[0, low byte, high byte]`.
#[inline]
pub fn split_value(value: u16) -> [u8; 3] {
    let high_bits = ((value >> 8) & 0xFF) as u8;
    let low_bits = (value & 0xFF) as u8;
    [0, low_bits, high_bits]
}

#[inline]
fn split_row(src: &[u16], dst: &mut [u8]) {
    for (&value, px) in src.iter().zip(dst.chunks_exact_mut(PACKED_CHANNELS)) {
        px.copy_from_slice(&split_value(value));
    }
}

/// Packs every sample of `map` into a freshly zeroed [`PackedImage`] of the
/// same size.
///
/// Pixels are independent, so `parallel` only changes how rows are
/// scheduled (on the rayon pool), never the result. Samples missing from a
/// short `data` buffer leave their pixels at zero.
pub fn split_height_map(map: &HeightMap, parallel: bool) -> PackedImage {
    let mut packed = PackedImage::zeroed(map.width, map.height);
    if map.width == 0 || map.height == 0 {
        return packed;
    }

    debug!("Splitting {}x{} height map (parallel: {})", map.width, map.height, parallel);

    let row_bytes = map.width * PACKED_CHANNELS;
    if parallel {
        packed
            .data
            .par_chunks_mut(row_bytes)
            .zip(map.data.par_chunks(map.width))
            .for_each(|(dst, src)| split_row(src, dst));
    } else {
        for (dst, src) in packed.data.chunks_mut(row_bytes).zip(map.data.chunks(map.width)) {
            split_row(src, dst);
        }
    }

    packed
}

/// Rebuilds heights from a packed image: `(R << 8) | G`. Blue is ignored.
pub fn merge_packed_image(packed: &PackedImage) -> HeightMap {
    debug!("Merging {}x{} packed image", packed.width, packed.height);

    let data = packed
        .data
        .chunks_exact(PACKED_CHANNELS)
        .map(|px| (u16::from(px[2]) << 8) | u16::from(px[1]))
        .collect();

    HeightMap::new(packed.width, packed.height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_value() {
        assert_eq!(split_value(0x0000), [0, 0, 0]);
        assert_eq!(split_value(0xFFFF), [0, 0xFF, 0xFF]);
        assert_eq!(split_value(0x1234), [0, 0x34, 0x12]);
        assert_eq!(split_value(0x00FF), [0, 0xFF, 0x00]);
        assert_eq!(split_value(0xFF00), [0, 0x00, 0xFF]);
    }

    #[test]
    fn test_two_pixel_scenario() {
        let map = HeightMap::new(2, 1, vec![0x0000, 0xFFFF]);
        let packed = split_height_map(&map, false);

        assert_eq!(packed.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(packed.pixel(0, 1), Some([0, 255, 255]));
    }

    #[test]
    fn test_full_value_range_round_trips() {
        let values: Vec<u16> = (0..=u16::MAX).collect();
        let map = HeightMap::new(256, 256, values.clone());

        let packed = split_height_map(&map, false);

        for (i, &v) in values.iter().enumerate() {
            let px = packed.pixel(i / 256, i % 256).unwrap();
            assert_eq!(px, [0, (v & 0xFF) as u8, (v >> 8) as u8], "value {v:#06x}");
        }
        assert_eq!(merge_packed_image(&packed), map);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data: Vec<u16> = (0..37 * 19).map(|i| (i * 977) as u16).collect();
        let map = HeightMap::new(37, 19, data);

        assert_eq!(split_height_map(&map, true), split_height_map(&map, false));
    }

    #[test]
    fn test_dimensions_preserved() {
        let map = HeightMap::new(5, 3, vec![1; 15]);
        let packed = split_height_map(&map, true);

        assert_eq!((packed.width, packed.height), (5, 3));
        assert_eq!(packed.channels(), 3);
        assert_eq!(packed.data.len(), 5 * 3 * 3);
    }

    #[test]
    fn test_short_buffer_leaves_zeros() {
        let map = HeightMap::new(2, 2, vec![0xFFFF]);
        let packed = split_height_map(&map, false);

        assert_eq!(packed.pixel(0, 0), Some([0, 255, 255]));
        assert_eq!(packed.pixel(1, 1), Some([0, 0, 0]));
    }

    #[test]
    fn test_empty_map() {
        let map = HeightMap::new(0, 4, Vec::new());
        let packed = split_height_map(&map, true);
        assert!(packed.data.is_empty());
    }

    #[test]
    fn test_merge_ignores_blue() {
        let packed = PackedImage {
            width: 1,
            height: 1,
            data: vec![0xAA, 0x34, 0x12],
        };
        assert_eq!(merge_packed_image(&packed).data, vec![0x1234]);
    }
}
