//! The cleaning pipeline.
//!
//! [`ImageCleaner`] turns a raw resistor photo into a flat, cropped strip of
//! band colors ready for keypoint labeling.
//!
//! # Processing Pipeline
//!
//! 1. **Gaussian blur** (13×13, sigma 1.0)
//! 2. **Median blur** (47-pixel aperture)
//!    - Removes texture and printed marks from the resistor body
//! 3. **Adaptive contrast** (CLAHE on the L* channel)
//!    - Dim images (mean gray < 90) get a much stronger clip limit
//! 4. **Saturation boost** (HSV S + 10)
//! 5. **Center crop**
//! 6. **Column flattening**
//!    - Column mean, then median over 3 and 5 column spans
//! 7. **Background removal** (off by default)
//! 8. **Black level** (every channel × 0.9)
//! 9. **Conditional brighten** (HSV V + 20 when mean gray < 200)

use image::RgbImage;

use crate::clean::{
    column_average_replace, column_median_replace_step, crop_middle, enhance_contrast,
    increase_black_level, increase_brightness, increase_saturation, mean_brightness,
    remove_background, CleanOptions,
};
use crate::error::CleanError;
use crate::filter::{gaussian_blur, median_blur};

/// Cleans raw resistor photos.
///
/// # Example
///
/// ```
/// use band_clean::{CleanOptions, ImageCleaner};
/// use image::{Rgb, RgbImage};
///
/// let cleaner = ImageCleaner::new(CleanOptions::new().median_aperture(5)).unwrap();
/// let raw = RgbImage::from_pixel(40, 40, Rgb([120, 110, 100]));
/// let cleaned = cleaner.clean(&raw).unwrap();
///
/// assert_eq!(cleaned.dimensions(), (34, 16));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageCleaner {
    options: CleanOptions,
}

impl ImageCleaner {
    /// Create a cleaner, rejecting options no stage can run with.
    pub fn new(options: CleanOptions) -> Result<Self, CleanError> {
        options.validate()?;
        Ok(Self { options })
    }

    #[inline]
    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Run every stage on `image`. The input is not modified.
    pub fn clean(&self, image: &RgbImage) -> Result<RgbImage, CleanError> {
        let opts = &self.options;
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CleanError::EmptyImage {
                stage: "input",
                width,
                height,
            });
        }

        let blurred = gaussian_blur(image, opts.gaussian_kernel, opts.gaussian_sigma);
        let smoothed = median_blur(&blurred, opts.median_aperture);

        let clip_limit = if mean_brightness(&smoothed) < opts.brightness_threshold as f64 {
            opts.dim_clip_limit
        } else {
            opts.bright_clip_limit
        };
        let contrasted = enhance_contrast(&smoothed, clip_limit, opts.tile_grid);
        let saturated = increase_saturation(&contrasted, opts.saturation_offset);

        let mut strip = crop_middle(&saturated, opts.crop_width_ratio, opts.crop_height_ratio)?;

        if opts.column_average {
            strip = column_average_replace(&strip);
        }
        for &span in &opts.flatten_spans {
            strip = column_median_replace_step(&strip, span);
        }
        if let Some(threshold) = opts.background_removal {
            strip = remove_background(&strip, threshold);
        }

        let leveled = increase_black_level(&strip, opts.black_level);
        Ok(increase_brightness(
            &leveled,
            opts.brighten_offset,
            opts.brighten_threshold,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn small_options() -> CleanOptions {
        CleanOptions::new().gaussian_kernel(3).median_aperture(3)
    }

    #[test]
    fn test_invalid_options_rejected_up_front() {
        let err = ImageCleaner::new(CleanOptions::new().tile_grid(0)).unwrap_err();
        assert!(matches!(err, CleanError::InvalidOption { name: "tile_grid", .. }));
    }

    #[test]
    fn test_empty_input_is_error() {
        let cleaner = ImageCleaner::default();
        let err = cleaner.clean(&RgbImage::new(0, 10)).unwrap_err();
        assert_eq!(
            err,
            CleanError::EmptyImage {
                stage: "input",
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn test_tiny_input_fails_at_crop() {
        let cleaner = ImageCleaner::new(small_options()).unwrap();
        let err = cleaner
            .clean(&RgbImage::from_pixel(10, 2, Rgb([90, 90, 90])))
            .unwrap_err();
        assert!(matches!(err, CleanError::EmptyImage { stage: "crop", .. }));
    }

    #[test]
    fn test_input_not_modified() {
        let raw = RgbImage::from_fn(30, 30, |x, y| Rgb([(x * 8) as u8, (y * 8) as u8, 77]));
        let copy = raw.clone();
        let _ = ImageCleaner::new(small_options()).unwrap().clean(&raw).unwrap();
        assert_eq!(raw, copy);
    }

    #[test]
    fn test_deterministic() {
        let raw = RgbImage::from_fn(30, 30, |x, y| Rgb([(x * 8) as u8, (y * 8) as u8, 77]));
        let cleaner = ImageCleaner::new(small_options()).unwrap();
        assert_eq!(cleaner.clean(&raw).unwrap(), cleaner.clean(&raw).unwrap());
    }

    #[test]
    fn test_output_columns_are_uniform() {
        let raw = RgbImage::from_fn(40, 40, |x, y| {
            Rgb([(x * 6) as u8, (255 - y * 6) as u8, ((x + y) * 3) as u8])
        });
        let cleaned = ImageCleaner::new(small_options()).unwrap().clean(&raw).unwrap();
        for x in 0..cleaned.width() {
            let top = cleaned.get_pixel(x, 0);
            for y in 1..cleaned.height() {
                assert_eq!(cleaned.get_pixel(x, y), top);
            }
        }
    }

    #[test]
    fn test_background_stage_whitens_body() {
        let raw = RgbImage::from_pixel(40, 40, Rgb([150, 130, 100]));
        let cleaner =
            ImageCleaner::new(small_options().background_removal(Some(30))).unwrap();
        let cleaned = cleaner.clean(&raw).unwrap();
        // white, then black level 0.9
        assert!(cleaned.pixels().all(|p| p.0 == [229, 229, 229]));
    }
}
