//! Rectangular comparison regions

/// A rectangle in raster coordinates
///
/// Edges are half-open: a pixel (x, y) is inside when
/// `left <= x < right` and `top <= y < bottom`. A zero-area region is
/// valid and means "compare nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Region {
    /// Create a region from its edges
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Region {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a region from an origin and size
    pub const fn from_size(x: i32, y: i32, w: i32, h: i32) -> Self {
        Region {
            left: x,
            top: y,
            right: x + w,
            bottom: y + h,
        }
    }

    /// Width in pixels; zero or negative for an empty region
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels; zero or negative for an empty region
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Whether the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Area in pixels, zero for an empty region
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width() as i64 * self.height() as i64
        }
    }

    /// Clamp the region to `[0, w) x [0, h)` bounds
    ///
    /// Edges are clamped independently, then inverted edges collapse
    /// to an empty region at the requested corner.
    pub fn clamped_to(&self, w: i32, h: i32) -> Region {
        let left = self.left.clamp(0, w);
        let top = self.top.clamp(0, h);
        let mut right = self.right.clamp(0, w);
        let mut bottom = self.bottom.clamp(0, h);
        if right < left {
            right = left;
        }
        if bottom < top {
            bottom = top;
        }
        Region {
            left,
            top,
            right,
            bottom,
        }
    }
}
