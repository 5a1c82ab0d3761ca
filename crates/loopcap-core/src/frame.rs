//! Frame descriptors for the capture sequence
//!
//! A [`Frame`] pairs a raster with its display delay and an optional
//! comparison sub-region. Frames borrow their raster; copying a frame
//! never copies pixel data.

use crate::raster::Raster;
use crate::region::Region;

/// A captured frame awaiting encoding
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    /// Logical index in the capture sequence
    pub index: usize,
    /// The frame's pixels; `None` for a dropped or failed capture
    pub raster: Option<&'a dyn Raster>,
    /// Display delay in milliseconds
    pub delay_ms: u64,
    /// Optional comparison region; absent or empty means full frame
    pub region: Option<Region>,
}

impl<'a> Frame<'a> {
    /// Create a full-frame descriptor
    pub fn new(index: usize, raster: &'a dyn Raster, delay_ms: u64) -> Self {
        Frame {
            index,
            raster: Some(raster),
            delay_ms,
            region: None,
        }
    }

    /// Restrict comparisons for this frame to a sub-region
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// The comparison region, if set and non-empty
    pub fn comparison_region(&self) -> Option<Region> {
        self.region.filter(|r| !r.is_empty())
    }
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("index", &self.index)
            .field("delay_ms", &self.delay_ms)
            .field("region", &self.region)
            .field("has_raster", &self.raster.is_some())
            .finish()
    }
}
