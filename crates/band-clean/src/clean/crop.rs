//! Center band crop.
//!
//! Resistor bands sit near the middle of the frame. The crop keeps the
//! horizontal middle of the image and a horizontal band that starts one
//! band-height below the top edge, discarding background at every edge.

use image::{imageops, RgbImage};

use crate::error::CleanError;

/// Pixel rectangle kept by [`crop_middle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Compute the band for a `width` × `height` image.
    ///
    /// - width: `floor(width * width_ratio)`, centered
    /// - height: `floor(height * height_ratio)`, rows `[h, 2h)`
    ///
    /// # Example
    /// ```
    /// use band_clean::clean::CropRegion;
    ///
    /// let region = CropRegion::centered(100, 100, 0.85, 0.40);
    /// assert_eq!((region.left, region.top), (7, 40));
    /// assert_eq!((region.width, region.height), (85, 40));
    /// ```
    pub fn centered(width: u32, height: u32, width_ratio: f32, height_ratio: f32) -> Self {
        let crop_width = (width as f64 * width_ratio as f64).floor() as u32;
        let left = (width - crop_width.min(width)) / 2;
        let crop_height = (height as f64 * height_ratio as f64).floor() as u32;

        Self {
            left,
            top: crop_height,
            width: crop_width,
            height: crop_height,
        }
    }

    /// Whether the region lies inside a `width` × `height` image.
    #[inline]
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.left + self.width <= width && self.top + self.height <= height
    }
}

/// Crop the center band of `image`.
///
/// Fails with [`CleanError::EmptyImage`] when the band has no pixels and
/// with [`CleanError::InvalidOption`] when the band would extend past the
/// image (a height ratio above 0.5).
pub fn crop_middle(
    image: &RgbImage,
    width_ratio: f32,
    height_ratio: f32,
) -> Result<RgbImage, CleanError> {
    let (width, height) = image.dimensions();
    let region = CropRegion::centered(width, height, width_ratio, height_ratio);

    if !region.fits(width, height) {
        return Err(CleanError::invalid("crop_height_ratio", height_ratio));
    }
    if region.width == 0 || region.height == 0 {
        return Err(CleanError::EmptyImage {
            stage: "crop",
            width: region.width,
            height: region.height,
        });
    }

    Ok(imageops::crop_imm(image, region.left, region.top, region.width, region.height).to_image())
}
