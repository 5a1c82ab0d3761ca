//! Raster access for captured frames
//!
//! Capture backends hand the rest of the pipeline raw pixel grids in
//! whatever layout the platform produced: the row stride may exceed
//! the width, and some sources store rows bottom-to-top. The [`Raster`]
//! trait abstracts both so consumers always address logical rows.

use crate::pixel::Pixel;

/// A read-only rectangular pixel grid
///
/// Implementations own (or borrow) the pixel storage; nothing in this
/// crate ever writes through a raster or frees one.
pub trait Raster {
    /// Width in pixels
    fn width(&self) -> i32;

    /// Height in pixels
    fn height(&self) -> i32;

    /// Distance between successive rows, in pixels (not bytes)
    fn row_stride(&self) -> usize;

    /// Whether rows are stored bottom-to-top
    fn is_flipped(&self) -> bool {
        false
    }

    /// The linear pixel buffer, `row_stride * height` pixels long
    fn pixels(&self) -> &[Pixel];

    /// The pixels of logical row `y`, honoring stride and flip
    ///
    /// Logical row 0 is always the top of the image regardless of the
    /// storage orientation. Panics when `y` is out of bounds.
    fn row(&self, y: i32) -> &[Pixel] {
        debug_assert!(y >= 0 && y < self.height());
        let phys = if self.is_flipped() {
            self.height() - 1 - y
        } else {
            y
        };
        let start = phys as usize * self.row_stride();
        &self.pixels()[start..start + self.width() as usize]
    }

    /// The pixel at logical coordinates (x, y)
    fn pixel(&self, x: i32, y: i32) -> Pixel {
        self.row(y)[x as usize]
    }
}

/// An owned, top-down, tightly packed raster
///
/// The in-memory frame store used by tests and by callers that capture
/// into their own buffers.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create a buffer of the given size filled with transparent black
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        PixelBuffer {
            width,
            height,
            data: vec![Pixel::default(); (width * height) as usize],
        }
    }

    /// Create a buffer filled with a single color
    pub fn solid(width: i32, height: i32, fill: Pixel) -> Self {
        let mut buf = Self::new(width, height);
        buf.fill(fill);
        buf
    }

    /// Fill the whole buffer with one color
    pub fn fill(&mut self, px: Pixel) {
        self.data.fill(px);
    }

    /// Set a single pixel; out-of-bounds coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, px: Pixel) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.data[(y * self.width + x) as usize] = px;
    }
}

impl Raster for PixelBuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn row_stride(&self) -> usize {
        self.width as usize
    }

    fn pixels(&self) -> &[Pixel] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A raster with padded rows stored bottom-to-top, as capture
    // backends on some platforms produce.
    struct FlippedPadded {
        width: i32,
        height: i32,
        stride: usize,
        data: Vec<Pixel>,
    }

    impl Raster for FlippedPadded {
        fn width(&self) -> i32 {
            self.width
        }
        fn height(&self) -> i32 {
            self.height
        }
        fn row_stride(&self) -> usize {
            self.stride
        }
        fn is_flipped(&self) -> bool {
            true
        }
        fn pixels(&self) -> &[Pixel] {
            &self.data
        }
    }

    #[test]
    fn test_pixel_buffer_addressing() {
        let mut buf = PixelBuffer::new(4, 3);
        buf.set_pixel(2, 1, Pixel::rgb(9, 9, 9));
        assert_eq!(buf.pixel(2, 1), Pixel::rgb(9, 9, 9));
        assert_eq!(buf.pixel(0, 0), Pixel::default());
        assert_eq!(buf.row(1)[2], Pixel::rgb(9, 9, 9));
    }

    #[test]
    fn test_set_pixel_out_of_bounds_ignored() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set_pixel(-1, 0, Pixel::rgb(1, 1, 1));
        buf.set_pixel(0, 5, Pixel::rgb(1, 1, 1));
        assert!(buf.pixels().iter().all(|&p| p == Pixel::default()));
    }

    #[test]
    fn test_flipped_stride_addressing() {
        // 2x2 image, stride 3, rows stored bottom-to-top:
        // physical row 0 holds logical row 1.
        let pad = Pixel::rgb(0xee, 0xee, 0xee);
        let data = vec![
            Pixel::rgb(3, 0, 0), // logical (0,1)
            Pixel::rgb(4, 0, 0), // logical (1,1)
            pad,
            Pixel::rgb(1, 0, 0), // logical (0,0)
            Pixel::rgb(2, 0, 0), // logical (1,0)
            pad,
        ];
        let r = FlippedPadded {
            width: 2,
            height: 2,
            stride: 3,
            data,
        };
        assert_eq!(r.pixel(0, 0), Pixel::rgb(1, 0, 0));
        assert_eq!(r.pixel(1, 0), Pixel::rgb(2, 0, 0));
        assert_eq!(r.pixel(0, 1), Pixel::rgb(3, 0, 0));
        assert_eq!(r.pixel(1, 1), Pixel::rgb(4, 0, 0));
    }
}
