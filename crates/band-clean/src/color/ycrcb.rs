//! YCrCb (BT.601 luma plus two chroma differences, offset by 128)

use super::bgr::Bgr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YCrCb {
    pub y: u8,
    pub cr: u8,
    pub cb: u8,
}

impl YCrCb {
    #[inline]
    pub fn new(y: u8, cr: u8, cb: u8) -> Self {
        Self { y, cr, cb }
    }
}

impl From<Bgr> for YCrCb {
    fn from(bgr: Bgr) -> Self {
        let (r, g, b) = (bgr.r as f32, bgr.g as f32, bgr.b as f32);
        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        let cr = (r - y) * 0.713 + 128.0;
        let cb = (b - y) * 0.564 + 128.0;
        Self {
            y: to_byte(y),
            cr: to_byte(cr),
            cb: to_byte(cb),
        }
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
