//! Exact whole-frame comparison
//!
//! The encoder uses this to compute damage rectangles between
//! consecutive frames; the similarity engine uses it as a fast path
//! when no tolerance, masking or sampling is requested.

use loopcap_core::{ChannelMask, Raster, Region};

/// Compare two rasters exactly under a channel mask
///
/// Returns `None` when every pixel matches on the selected channels,
/// otherwise the minimal bounding rectangle enclosing all differing
/// pixels. Mismatched dimensions report the full larger bounds as
/// different.
pub fn compare_exact(a: &dyn Raster, b: &dyn Raster, mask: ChannelMask) -> Option<Region> {
    let (aw, ah) = (a.width(), a.height());
    let (bw, bh) = (b.width(), b.height());
    if aw != bw || ah != bh {
        return Some(Region::new(0, 0, aw.max(bw), ah.max(bh)));
    }
    if aw <= 0 || ah <= 0 {
        return None;
    }

    let mask = mask.bits();
    let mut min_x = aw;
    let mut min_y = ah;
    let mut max_x = -1;
    let mut max_y = -1;

    for y in 0..ah {
        let row_a = a.row(y);
        let row_b = b.row(y);
        for x in 0..aw {
            if (row_a[x as usize].bits() ^ row_b[x as usize].bits()) & mask != 0 {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }

    if max_x < min_x || max_y < min_y {
        return None;
    }
    Some(Region::new(min_x, min_y, max_x + 1, max_y + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use loopcap_core::{Pixel, PixelBuffer};

    #[test]
    fn test_identical_frames() {
        let a = PixelBuffer::solid(8, 8, Pixel::rgb(10, 20, 30));
        let b = a.clone();
        assert_eq!(compare_exact(&a, &b, ChannelMask::RGBA), None);
    }

    #[test]
    fn test_single_pixel_bbox() {
        let a = PixelBuffer::solid(8, 8, Pixel::rgb(10, 20, 30));
        let mut b = a.clone();
        b.set_pixel(5, 3, Pixel::rgb(0, 0, 0));
        let diff = compare_exact(&a, &b, ChannelMask::RGB).unwrap();
        assert_eq!(diff, Region::from_size(5, 3, 1, 1));
    }

    #[test]
    fn test_bbox_spans_all_differences() {
        let a = PixelBuffer::solid(10, 10, Pixel::rgb(1, 1, 1));
        let mut b = a.clone();
        b.set_pixel(2, 1, Pixel::rgb(9, 9, 9));
        b.set_pixel(7, 6, Pixel::rgb(9, 9, 9));
        let diff = compare_exact(&a, &b, ChannelMask::RGB).unwrap();
        assert_eq!(diff, Region::new(2, 1, 8, 7));
    }

    #[test]
    fn test_masked_difference_invisible() {
        let a = PixelBuffer::solid(4, 4, Pixel::rgba(10, 20, 30, 0));
        let b = PixelBuffer::solid(4, 4, Pixel::rgba(10, 20, 30, 255));
        // Alpha differs, but the default mask ignores alpha
        assert_eq!(compare_exact(&a, &b, ChannelMask::RGB), None);
        assert!(compare_exact(&a, &b, ChannelMask::RGBA).is_some());
    }

    #[test]
    fn test_mismatched_sizes_report_full_bounds() {
        let a = PixelBuffer::new(8, 4);
        let b = PixelBuffer::new(6, 10);
        let diff = compare_exact(&a, &b, ChannelMask::RGB).unwrap();
        assert_eq!(diff, Region::new(0, 0, 8, 10));
    }
}
