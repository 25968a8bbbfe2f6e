//! Rough color temperature of a cleaned image.
//!
//! This is a diagnostic, not a calibrated measurement: the mean of one LAB
//! chroma channel is mapped linearly onto 2000..=8000 K so that strongly
//! tinted photos stand out in the logs.

use std::fmt;
use std::str::FromStr;

use image::RgbImage;

use crate::color::{Bgr, Lab8};

/// Lowest reported temperature, for a channel mean of 0.
pub const MIN_KELVIN: f64 = 2000.0;
/// Highest reported temperature, for a channel mean of 255.
pub const MAX_KELVIN: f64 = 8000.0;

/// LAB chroma channel the estimate is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromaAxis {
    /// a*: green (low) to red (high)
    A,
    /// b*: blue (low) to yellow (high)
    #[default]
    B,
}

impl FromStr for ChromaAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(ChromaAxis::A),
            "b" => Ok(ChromaAxis::B),
            other => Err(format!("unknown chroma axis '{}' (expected a or b)", other)),
        }
    }
}

impl fmt::Display for ChromaAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChromaAxis::A => f.write_str("a"),
            ChromaAxis::B => f.write_str("b"),
        }
    }
}

/// Estimate the color temperature of `image` in Kelvin.
///
/// The result always lies in `[MIN_KELVIN, MAX_KELVIN]`; an empty image
/// reports the midpoint of a neutral chroma mean (128).
///
/// # Example
/// ```
/// use band_clean::{estimate_temperature, ChromaAxis};
/// use image::{Rgb, RgbImage};
///
/// let gray = RgbImage::from_pixel(4, 4, Rgb([128, 128, 128]));
/// let kelvin = estimate_temperature(&gray, ChromaAxis::B);
/// assert!((kelvin - 5011.76).abs() < 0.01);
/// ```
pub fn estimate_temperature(image: &RgbImage, axis: ChromaAxis) -> f64 {
    let count = image.width() as u64 * image.height() as u64;
    let mean = if count == 0 {
        128.0
    } else {
        let total: u64 = image
            .pixels()
            .map(|&px| {
                let lab = Lab8::from(Bgr::from(px));
                match axis {
                    ChromaAxis::A => lab.a as u64,
                    ChromaAxis::B => lab.b as u64,
                }
            })
            .sum();
        total as f64 / count as f64
    };

    mean / 255.0 * (MAX_KELVIN - MIN_KELVIN) + MIN_KELVIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_blue_is_cooler_than_yellow_on_b_axis() {
        let blue = RgbImage::from_pixel(4, 4, Rgb([0, 0, 255]));
        let yellow = RgbImage::from_pixel(4, 4, Rgb([255, 255, 0]));
        assert!(
            estimate_temperature(&blue, ChromaAxis::B)
                < estimate_temperature(&yellow, ChromaAxis::B)
        );
    }

    #[test]
    fn test_red_is_high_on_a_axis() {
        let red = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
        let green = RgbImage::from_pixel(4, 4, Rgb([0, 255, 0]));
        assert!(
            estimate_temperature(&red, ChromaAxis::A)
                > estimate_temperature(&green, ChromaAxis::A)
        );
    }

    #[test]
    fn test_always_in_range() {
        for rgb in [[0, 0, 0], [255, 255, 255], [0, 0, 255], [255, 255, 0], [0, 255, 0]] {
            let img = RgbImage::from_pixel(2, 2, Rgb(rgb));
            for axis in [ChromaAxis::A, ChromaAxis::B] {
                let k = estimate_temperature(&img, axis);
                assert!((MIN_KELVIN..=MAX_KELVIN).contains(&k), "{:?} -> {}", rgb, k);
            }
        }
    }

    #[test]
    fn test_empty_image_is_neutral() {
        let k = estimate_temperature(&RgbImage::new(0, 0), ChromaAxis::B);
        assert!((k - (128.0 / 255.0 * 6000.0 + 2000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("A".parse::<ChromaAxis>(), Ok(ChromaAxis::A));
        assert_eq!(" b ".parse::<ChromaAxis>(), Ok(ChromaAxis::B));
        assert!("c".parse::<ChromaAxis>().is_err());
        assert_eq!(ChromaAxis::default().to_string(), "b");
    }
}
