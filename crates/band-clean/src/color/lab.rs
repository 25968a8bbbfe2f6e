//! CIE L*a*b* color types
//!
//! Two encodings are used:
//!
//! - [`Lab8`]: the packed 8-bit form the cleaner works in. L* is scaled from
//!   0..=100 to 0..=255 and a*/b* are offset by 128.
//! - [`LabSample`]: the dataset form. L is rescaled back to 0..=100 and a/b
//!   are recentered to signed values.
//!
//! The conversion itself (sRGB gamma decode, D65 XYZ, Lab) is delegated to
//! [`palette`].

use palette::{FromColor, Lab, LinSrgb, Srgb};

use super::bgr::Bgr;

/// L*a*b* packed into three bytes.
///
/// - `l`: L* × 255 / 100
/// - `a`: a* + 128
/// - `b`: b* + 128
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lab8 {
    pub l: u8,
    pub a: u8,
    pub b: u8,
}

impl Lab8 {
    #[inline]
    pub fn new(l: u8, a: u8, b: u8) -> Self {
        Self { l, a, b }
    }
}

impl From<Bgr> for Lab8 {
    fn from(bgr: Bgr) -> Self {
        let srgb = Srgb::new(
            bgr.r as f32 / 255.0,
            bgr.g as f32 / 255.0,
            bgr.b as f32 / 255.0,
        );
        let lab: Lab = Lab::from_color(srgb.into_linear());

        Self {
            l: to_byte(lab.l * 255.0 / 100.0),
            a: to_byte(lab.a + 128.0),
            b: to_byte(lab.b + 128.0),
        }
    }
}

impl From<Lab8> for Bgr {
    /// Decode back to BGR. Out-of-gamut results are clamped.
    fn from(lab8: Lab8) -> Self {
        let lab: Lab = Lab::new(
            lab8.l as f32 * 100.0 / 255.0,
            lab8.a as f32 - 128.0,
            lab8.b as f32 - 128.0,
        );
        let linear = LinSrgb::from_color(lab);
        let srgb: Srgb = Srgb::from_linear(linear);

        Bgr::new(
            to_byte(srgb.blue * 255.0),
            to_byte(srgb.green * 255.0),
            to_byte(srgb.red * 255.0),
        )
    }
}

/// L*a*b* as written to the dataset.
///
/// `l` is always in 0..=100; `a` and `b` are always in -128..=127.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabSample {
    pub l: u8,
    pub a: i16,
    pub b: i16,
}

impl From<Lab8> for LabSample {
    /// L is truncated, not rounded, when rescaling to 0..=100.
    #[inline]
    fn from(lab8: Lab8) -> Self {
        Self {
            l: (lab8.l as u16 * 100 / 255) as u8,
            a: lab8.a as i16 - 128,
            b: lab8.b as i16 - 128,
        }
    }
}

impl From<Bgr> for LabSample {
    #[inline]
    fn from(bgr: Bgr) -> Self {
        Self::from(Lab8::from(bgr))
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
