//! Per-pixel sampling in every dataset color space.

use std::fmt;
use std::str::FromStr;

use image::RgbImage;

use crate::color::{Bgr, Hsv, HueRange, LabSample, YCrCb};
use crate::error::{ColorSpaceError, OutOfBounds};

/// Color spaces a pixel can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Bgr,
    Lab,
    Hsv,
    YCrCb,
}

impl ColorSpace {
    /// All spaces in dataset column order.
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Lab,
        ColorSpace::Bgr,
        ColorSpace::Hsv,
        ColorSpace::YCrCb,
    ];
}

impl FromStr for ColorSpace {
    type Err = ColorSpaceError;

    /// Parse a selector such as `"BGR"` or `"ycrcb"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BGR" => Ok(ColorSpace::Bgr),
            "LAB" => Ok(ColorSpace::Lab),
            "HSV" => Ok(ColorSpace::Hsv),
            "YCRCB" => Ok(ColorSpace::YCrCb),
            _ => Err(ColorSpaceError {
                selector: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorSpace::Bgr => "BGR",
            ColorSpace::Lab => "LAB",
            ColorSpace::Hsv => "HSV",
            ColorSpace::YCrCb => "YCRCB",
        };
        f.write_str(name)
    }
}

/// One pixel projected into every dataset color space.
///
/// All four values derive from a single read of the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    pub bgr: Bgr,
    pub lab: LabSample,
    /// Full-range hue (0..=255)
    pub hsv: Hsv,
    pub ycrcb: YCrCb,
}

impl From<Bgr> for PixelSample {
    fn from(bgr: Bgr) -> Self {
        Self {
            bgr,
            lab: LabSample::from(bgr),
            hsv: Hsv::from_bgr(bgr, HueRange::Full),
            ycrcb: YCrCb::from(bgr),
        }
    }
}

impl PixelSample {
    /// The three channels of one space, in that space's column order.
    pub fn channels(&self, space: ColorSpace) -> [i16; 3] {
        match space {
            ColorSpace::Bgr => self.bgr.to_array().map(i16::from),
            ColorSpace::Lab => [self.lab.l as i16, self.lab.a, self.lab.b],
            ColorSpace::Hsv => [self.hsv.h, self.hsv.s, self.hsv.v].map(i16::from),
            ColorSpace::YCrCb => [self.ycrcb.y, self.ycrcb.cr, self.ycrcb.cb].map(i16::from),
        }
    }
}

/// Sample the pixel at `(row, col)`.
///
/// # Example
/// ```
/// use band_clean::{sample_pixel, Bgr};
/// use image::{Rgb, RgbImage};
///
/// let img = RgbImage::from_pixel(4, 3, Rgb([200, 40, 40]));
/// let sample = sample_pixel(&img, 2, 3).unwrap();
/// assert_eq!(sample.bgr, Bgr::new(40, 40, 200));
/// assert!(sample_pixel(&img, 3, 0).is_err());
/// ```
pub fn sample_pixel(image: &RgbImage, row: u32, col: u32) -> Result<PixelSample, OutOfBounds> {
    let (width, height) = image.dimensions();
    if row >= height || col >= width {
        return Err(OutOfBounds {
            row,
            col,
            width,
            height,
        });
    }
    Ok(PixelSample::from(Bgr::from(*image.get_pixel(col, row))))
}
