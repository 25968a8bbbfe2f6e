//! band-clean: image cleaning for resistor color-band photos
//!
//! This library turns phone photos of single resistors into flat strips of
//! band colors and samples pixels of those strips in the color spaces the
//! labeling dataset records.
//!
//! # Quick Start
//!
//! The [`ImageCleaner`] is the primary entry point:
//!
//! ```
//! use band_clean::{CleanOptions, ImageCleaner};
//! use image::{Rgb, RgbImage};
//!
//! let cleaner = ImageCleaner::new(CleanOptions::new().median_aperture(9)).unwrap();
//! let raw = RgbImage::from_pixel(64, 64, Rgb([150, 120, 90]));
//! let strip = cleaner.clean(&raw).unwrap();
//!
//! assert_eq!(strip.width(), 54);
//! assert_eq!(strip.height(), 25);
//! ```
//!
//! # Sampling
//!
//! [`sample_pixel`] reads one pixel and projects it into every dataset color
//! space at once:
//!
//! ```
//! use band_clean::{sample_pixel, Bgr};
//! use image::{Rgb, RgbImage};
//!
//! let strip = RgbImage::from_pixel(10, 4, Rgb([30, 30, 180]));
//! let sample = sample_pixel(&strip, 2, 7).unwrap();
//!
//! assert_eq!(sample.bgr, Bgr::new(180, 30, 30));
//! assert!(sample.lab.b < 0);
//! ```
//!
//! # Color Spaces
//!
//! Every value is a typed record rather than a bare tuple:
//!
//! - [`Bgr`]: device channels in dataset order
//! - [`Lab8`]: 8-bit packed L*a*b*, the space contrast is equalized in
//! - [`LabSample`]: L in 0..=100 and signed a/b, as written to the dataset
//! - [`Hsv`]: 8-bit HSV with hue packed per [`HueRange`]
//! - [`YCrCb`]: BT.601 luma and chroma differences
//!
//! ## 8-bit Conventions
//!
//! All conversions follow the common 8-bit image-processing conventions so
//! that values are comparable with datasets produced by other tools:
//!
//! | Space | Channel | Encoding |
//! |-------|---------|----------|
//! | LAB | L | L* × 255 / 100 (packed), L* truncated (sample) |
//! | LAB | a, b | +128 (packed), signed (sample) |
//! | HSV | H | degrees / 2 (cleaner), degrees × 256 / 360 (sample) |
//! | YCrCb | Cr, Cb | 0.713 (R − Y) + 128, 0.564 (B − Y) + 128 |
//!
//! The cleaner's saturation and brightness passes use the half-range hue so
//! that a round trip never moves a hue by more than one degree. Samples use
//! the full range so hue gets all 256 codes.
//!
//! # Pipeline
//!
//! ```text
//! raw photo
//!     |
//!     v
//! Gaussian blur -> median blur        (remove texture and print)
//!     |
//!     v
//! CLAHE on L*                         (clip 12 if dim, else 2)
//!     |
//!     v
//! saturation + 10
//!     |
//!     v
//! center crop                         (85% width, 40% height band)
//!     |
//!     v
//! column mean -> span medians (3, 5)  (one color per band)
//!     |
//!     v
//! black level x 0.9 -> brighten + 20
//! ```

pub mod clean;
pub mod color;
pub mod error;
pub mod filter;
pub mod sample;
pub mod temperature;

#[cfg(test)]
mod domain_tests;

pub use clean::{remove_background, CleanOptions, ImageCleaner};
pub use color::{Bgr, Hsv, HueRange, Lab8, LabSample, YCrCb};
pub use error::{CleanError, ColorSpaceError, OutOfBounds};
pub use sample::{sample_pixel, ColorSpace, PixelSample};
pub use temperature::{estimate_temperature, ChromaAxis};
