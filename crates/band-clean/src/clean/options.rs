//! Cleaning options and configuration.
//!
//! This module provides the [`CleanOptions`] struct for configuring every
//! stage of the [`ImageCleaner`](crate::ImageCleaner) pipeline.

use crate::error::CleanError;

/// Configuration options for the cleaning pipeline.
///
/// # Defaults
///
/// The defaults are the tuned values for phone photos of single resistors:
/// - Gaussian blur: 13×13 kernel, sigma 1.0
/// - Median blur: 47-pixel aperture
/// - CLAHE: clip 12.0 below mean brightness 90, otherwise 2.0, 8×8 tiles
/// - Saturation: +10
/// - Crop: middle 85% of width, rows between 40% and 80% of height
/// - Flattening: column average, then median spans of 3 and 5 columns
/// - Tone: black level 0.9, +20 value when mean brightness is below 200
///
/// # Example
///
/// ```
/// use band_clean::CleanOptions;
///
/// let options = CleanOptions::new()
///     .flatten_spans(vec![3, 5, 15])
///     .black_level(0.8);
/// assert!(options.validate().is_ok());
///
/// let broken = CleanOptions::new().gaussian_kernel(12);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOptions {
    /// Gaussian kernel size in pixels. Must be odd.
    pub gaussian_kernel: usize,

    /// Gaussian standard deviation. Non-positive derives it from the kernel size.
    pub gaussian_sigma: f64,

    /// Median blur aperture in pixels. Must be odd.
    pub median_aperture: u32,

    /// Mean gray level below which the image counts as dim.
    pub brightness_threshold: f32,

    /// CLAHE clip limit for dim images.
    pub dim_clip_limit: f32,

    /// CLAHE clip limit for well-lit images.
    pub bright_clip_limit: f32,

    /// CLAHE tiles per axis.
    pub tile_grid: u32,

    /// Added to the HSV saturation channel, saturating at 255.
    pub saturation_offset: u8,

    /// Fraction of the width kept, centered.
    pub crop_width_ratio: f32,

    /// Crop band height as a fraction of image height.
    ///
    /// The band starts one band-height below the top edge, so the value may
    /// not exceed 0.5.
    pub crop_height_ratio: f32,

    /// Replace each column with its mean before median flattening.
    pub column_average: bool,

    /// Median flatten span widths, applied in order.
    pub flatten_spans: Vec<u32>,

    /// Replace near-background pixels with white, using this per-channel
    /// distance from the mean color. `None` skips the stage.
    pub background_removal: Option<u8>,

    /// Multiplier applied to every channel after flattening.
    pub black_level: f64,

    /// Mean gray level at or above which no brightening happens.
    pub brighten_threshold: f32,

    /// Added to the HSV value channel of dark images, saturating at 255.
    pub brighten_offset: u8,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            gaussian_kernel: 13,
            gaussian_sigma: 1.0,
            median_aperture: 47,
            brightness_threshold: 90.0,
            dim_clip_limit: 12.0,
            bright_clip_limit: 2.0,
            tile_grid: 8,
            saturation_offset: 10,
            crop_width_ratio: 0.85,
            crop_height_ratio: 0.40,
            column_average: true,
            flatten_spans: vec![3, 5],
            background_removal: None,
            black_level: 0.9,
            brighten_threshold: 200.0,
            brighten_offset: 20,
        }
    }
}

impl CleanOptions {
    /// Create options with the tuned defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn gaussian_kernel(mut self, size: usize) -> Self {
        self.gaussian_kernel = size;
        self
    }

    #[inline]
    pub fn gaussian_sigma(mut self, sigma: f64) -> Self {
        self.gaussian_sigma = sigma;
        self
    }

    #[inline]
    pub fn median_aperture(mut self, aperture: u32) -> Self {
        self.median_aperture = aperture;
        self
    }

    /// Set the dim/bright threshold and both CLAHE clip limits.
    #[inline]
    pub fn contrast(mut self, threshold: f32, dim_clip: f32, bright_clip: f32) -> Self {
        self.brightness_threshold = threshold;
        self.dim_clip_limit = dim_clip;
        self.bright_clip_limit = bright_clip;
        self
    }

    #[inline]
    pub fn tile_grid(mut self, tiles: u32) -> Self {
        self.tile_grid = tiles;
        self
    }

    #[inline]
    pub fn saturation_offset(mut self, offset: u8) -> Self {
        self.saturation_offset = offset;
        self
    }

    /// Set the crop ratios.
    #[inline]
    pub fn crop(mut self, width_ratio: f32, height_ratio: f32) -> Self {
        self.crop_width_ratio = width_ratio;
        self.crop_height_ratio = height_ratio;
        self
    }

    #[inline]
    pub fn column_average(mut self, enabled: bool) -> Self {
        self.column_average = enabled;
        self
    }

    #[inline]
    pub fn flatten_spans(mut self, spans: Vec<u32>) -> Self {
        self.flatten_spans = spans;
        self
    }

    #[inline]
    pub fn background_removal(mut self, threshold: Option<u8>) -> Self {
        self.background_removal = threshold;
        self
    }

    #[inline]
    pub fn black_level(mut self, factor: f64) -> Self {
        self.black_level = factor;
        self
    }

    /// Set the brightening threshold and offset.
    #[inline]
    pub fn brighten(mut self, threshold: f32, offset: u8) -> Self {
        self.brighten_threshold = threshold;
        self.brighten_offset = offset;
        self
    }

    /// Check every option against the range its stage supports.
    pub fn validate(&self) -> Result<(), CleanError> {
        if self.gaussian_kernel == 0 || self.gaussian_kernel % 2 == 0 {
            return Err(CleanError::invalid("gaussian_kernel", self.gaussian_kernel));
        }
        if !self.gaussian_sigma.is_finite() {
            return Err(CleanError::invalid("gaussian_sigma", self.gaussian_sigma));
        }
        if self.median_aperture == 0 || self.median_aperture % 2 == 0 {
            return Err(CleanError::invalid("median_aperture", self.median_aperture));
        }
        for (name, limit) in [
            ("dim_clip_limit", self.dim_clip_limit),
            ("bright_clip_limit", self.bright_clip_limit),
        ] {
            if !limit.is_finite() || limit < 0.0 {
                return Err(CleanError::invalid(name, limit));
            }
        }
        if self.tile_grid == 0 {
            return Err(CleanError::invalid("tile_grid", self.tile_grid));
        }
        if !(self.crop_width_ratio > 0.0 && self.crop_width_ratio <= 1.0) {
            return Err(CleanError::invalid(
                "crop_width_ratio",
                self.crop_width_ratio,
            ));
        }
        if !(self.crop_height_ratio > 0.0 && self.crop_height_ratio <= 0.5) {
            return Err(CleanError::invalid(
                "crop_height_ratio",
                self.crop_height_ratio,
            ));
        }
        if let Some(span) = self.flatten_spans.iter().find(|&&s| s == 0) {
            return Err(CleanError::invalid("flatten_spans", span));
        }
        if !self.black_level.is_finite() || self.black_level < 0.0 {
            return Err(CleanError::invalid("black_level", self.black_level));
        }
        Ok(())
    }
}
