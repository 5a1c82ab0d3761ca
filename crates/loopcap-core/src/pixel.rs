//! Packed pixel and channel-mask types
//!
//! A pixel is a 32-bit RGBA value with a fixed channel layout:
//! red in bits 0-7, green in bits 8-15, blue in bits 16-23 and alpha
//! in bits 24-31. A channel mask uses the same layout, with a selected
//! channel contributing 0xFF in its byte.

use serde::{Deserialize, Serialize};

const RED_SHIFT: u32 = 0;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 16;
const ALPHA_SHIFT: u32 = 24;

/// A packed 32-bit RGBA pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel(u32);

impl Pixel {
    /// Pack four 8-bit channel values into a pixel
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Pixel(
            ((r as u32) << RED_SHIFT)
                | ((g as u32) << GREEN_SHIFT)
                | ((b as u32) << BLUE_SHIFT)
                | ((a as u32) << ALPHA_SHIFT),
        )
    }

    /// Pack an opaque RGB color (alpha 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    /// Construct from a raw packed value
    pub const fn from_bits(bits: u32) -> Self {
        Pixel(bits)
    }

    /// The raw packed value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Red channel value
    pub const fn r(self) -> u8 {
        (self.0 >> RED_SHIFT) as u8
    }

    /// Green channel value
    pub const fn g(self) -> u8 {
        (self.0 >> GREEN_SHIFT) as u8
    }

    /// Blue channel value
    pub const fn b(self) -> u8 {
        (self.0 >> BLUE_SHIFT) as u8
    }

    /// Alpha channel value
    pub const fn a(self) -> u8 {
        (self.0 >> ALPHA_SHIFT) as u8
    }
}

/// Per-channel selector for equality and tolerance checks
///
/// Packed in the same layout as [`Pixel`]; a channel selected for
/// comparison has all eight of its bits set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMask(u32);

impl ChannelMask {
    /// No channels selected; every pixel pair compares equal
    pub const NONE: ChannelMask = ChannelMask(0);

    /// Red, green and blue selected, alpha ignored
    pub const RGB: ChannelMask = ChannelMask::new(true, true, true, false);

    /// All four channels selected
    pub const RGBA: ChannelMask = ChannelMask::new(true, true, true, true);

    /// Select channels individually
    pub const fn new(r: bool, g: bool, b: bool, a: bool) -> Self {
        let mut bits = 0u32;
        if r {
            bits |= 0xff << RED_SHIFT;
        }
        if g {
            bits |= 0xff << GREEN_SHIFT;
        }
        if b {
            bits |= 0xff << BLUE_SHIFT;
        }
        if a {
            bits |= 0xff << ALPHA_SHIFT;
        }
        ChannelMask(bits)
    }

    /// Construct from a raw packed value
    pub const fn from_bits(bits: u32) -> Self {
        ChannelMask(bits)
    }

    /// The raw packed value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether the red channel participates in comparisons
    pub const fn has_red(self) -> bool {
        self.0 & (0xff << RED_SHIFT) != 0
    }

    /// Whether the green channel participates in comparisons
    pub const fn has_green(self) -> bool {
        self.0 & (0xff << GREEN_SHIFT) != 0
    }

    /// Whether the blue channel participates in comparisons
    pub const fn has_blue(self) -> bool {
        self.0 & (0xff << BLUE_SHIFT) != 0
    }

    /// Whether the alpha channel participates in comparisons
    pub const fn has_alpha(self) -> bool {
        self.0 & (0xff << ALPHA_SHIFT) != 0
    }
}

impl Default for ChannelMask {
    fn default() -> Self {
        ChannelMask::RGB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_roundtrip() {
        let px = Pixel::rgba(10, 20, 30, 40);
        assert_eq!(px.r(), 10);
        assert_eq!(px.g(), 20);
        assert_eq!(px.b(), 30);
        assert_eq!(px.a(), 40);
        assert_eq!(Pixel::from_bits(px.bits()), px);
    }

    #[test]
    fn test_mask_selects_channels() {
        let mask = ChannelMask::new(true, false, true, false);
        assert!(mask.has_red());
        assert!(!mask.has_green());
        assert!(mask.has_blue());
        assert!(!mask.has_alpha());
    }

    #[test]
    fn test_default_mask_ignores_alpha() {
        let mask = ChannelMask::default();
        assert_eq!(mask, ChannelMask::RGB);
        assert!(!mask.has_alpha());

        // Alpha-only difference is invisible under the default mask
        let a = Pixel::rgba(1, 2, 3, 0);
        let b = Pixel::rgba(1, 2, 3, 255);
        assert_eq!((a.bits() ^ b.bits()) & mask.bits(), 0);
    }
}
