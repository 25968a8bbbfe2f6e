//! BGR color type
//!
//! BGR is the raw device channel order used throughout the labeling dataset.
//! Images are stored as [`image::RgbImage`]; this type only fixes the order in
//! which channels are exposed to callers.

use image::Rgb;

/// An 8-bit color in blue, green, red channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bgr {
    /// Blue channel (0..=255)
    pub b: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Red channel (0..=255)
    pub r: u8,
}

impl Bgr {
    /// Create a new color from channels in BGR order.
    #[inline]
    pub fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Gray level using the BT.601 luma weights, rounded to the nearest integer.
    ///
    /// This is the brightness measure every threshold in the cleaner compares
    /// against.
    ///
    /// # Example
    /// ```
    /// use band_clean::Bgr;
    /// assert_eq!(Bgr::new(255, 255, 255).gray(), 255);
    /// assert_eq!(Bgr::new(0, 0, 255).gray(), 76);
    /// ```
    #[inline]
    pub fn gray(self) -> u8 {
        let y = 0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32;
        y.round().clamp(0.0, 255.0) as u8
    }

    /// Channels as a `[B, G, R]` array.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl From<Rgb<u8>> for Bgr {
    #[inline]
    fn from(px: Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { b, g, r }
    }
}

impl From<Bgr> for Rgb<u8> {
    #[inline]
    fn from(bgr: Bgr) -> Self {
        Rgb([bgr.r, bgr.g, bgr.b])
    }
}
