//! 8-bit hue/saturation/value
//!
//! Hue does not fit a byte in degrees, so it is scaled into one of two
//! ranges (see [`HueRange`]). Saturation and value use the full 0..=255 range.

use super::bgr::Bgr;

/// How hue degrees are packed into a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueRange {
    /// Degrees halved: 0..180. Used by the cleaner's saturation and brightness passes.
    #[default]
    Half,
    /// Degrees scaled by 256/360: 0..=255. Used for dataset sampling.
    Full,
}

impl HueRange {
    /// Number of distinct hue codes.
    #[inline]
    pub fn steps(self) -> u16 {
        match self {
            HueRange::Half => 180,
            HueRange::Full => 256,
        }
    }
}

/// A color in 8-bit HSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    /// Hue, scaled according to the [`HueRange`] it was produced with
    pub h: u8,
    /// Saturation (0..=255)
    pub s: u8,
    /// Value (0..=255), equal to the largest BGR channel
    pub v: u8,
}

impl Hsv {
    #[inline]
    pub fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Convert a BGR color, packing hue into `range`.
    ///
    /// # Example
    /// ```
    /// use band_clean::{Bgr, Hsv, HueRange};
    ///
    /// let red = Hsv::from_bgr(Bgr::new(0, 0, 255), HueRange::Half);
    /// assert_eq!((red.h, red.s, red.v), (0, 255, 255));
    ///
    /// let blue = Hsv::from_bgr(Bgr::new(255, 0, 0), HueRange::Full);
    /// assert_eq!(blue.h, 171);
    /// ```
    pub fn from_bgr(bgr: Bgr, range: HueRange) -> Self {
        let (r, g, b) = (bgr.r as f32, bgr.g as f32, bgr.b as f32);
        let v = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = v - min;

        let s = if v > 0.0 { diff * 255.0 / v } else { 0.0 };

        let h = if diff == 0.0 {
            0.0
        } else {
            let degrees = if v == r {
                60.0 * (g - b) / diff
            } else if v == g {
                120.0 + 60.0 * (b - r) / diff
            } else {
                240.0 + 60.0 * (r - g) / diff
            };
            if degrees < 0.0 {
                degrees + 360.0
            } else {
                degrees
            }
        };

        let steps = range.steps();
        let mut h_code = (h * steps as f32 / 360.0).round() as u16;
        if h_code >= steps {
            h_code -= steps;
        }

        Self {
            h: h_code as u8,
            s: s.round().clamp(0.0, 255.0) as u8,
            v: v as u8,
        }
    }

    /// Convert back to BGR, interpreting hue according to `range`.
    pub fn to_bgr(self, range: HueRange) -> Bgr {
        let s = self.s as f32 / 255.0;
        let v = self.v as f32 / 255.0;

        let (r, g, b) = if self.s == 0 {
            (v, v, v)
        } else {
            let h = (self.h as f32 * 6.0 / range.steps() as f32).rem_euclid(6.0);
            let sector = h.floor();
            let f = h - sector;
            let p = v * (1.0 - s);
            let q = v * (1.0 - s * f);
            let t = v * (1.0 - s * (1.0 - f));
            match sector as u8 {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };

        Bgr::new(to_byte(b), to_byte(g), to_byte(r))
    }
}

#[inline]
fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
