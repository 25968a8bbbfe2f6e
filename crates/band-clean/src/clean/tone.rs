//! Brightness, contrast and saturation adjustments.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::color::{Bgr, Hsv, HueRange, Lab8};
use crate::filter::clahe;

/// Mean gray level of the image, 0.0 for an empty image.
pub fn mean_brightness(image: &RgbImage) -> f64 {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return 0.0;
    }
    let total: u64 = image
        .pixels()
        .map(|&px| Bgr::from(px).gray() as u64)
        .sum();
    total as f64 / count as f64
}

/// Apply CLAHE to the lightness channel, leaving chroma untouched.
pub fn enhance_contrast(image: &RgbImage, clip_limit: f32, grid: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let lab: Vec<Lab8> = image.pixels().map(|&px| Lab8::from(Bgr::from(px))).collect();

    let lightness = GrayImage::from_fn(width, height, |x, y| {
        Luma([lab[(y * width + x) as usize].l])
    });
    let equalized = clahe(&lightness, clip_limit, grid);

    RgbImage::from_fn(width, height, |x, y| {
        let mut px = lab[(y * width + x) as usize];
        px.l = equalized.get_pixel(x, y).0[0];
        Bgr::from(px).into()
    })
}

/// Add `offset` to the saturation of every pixel, saturating at 255.
pub fn increase_saturation(image: &RgbImage, offset: u8) -> RgbImage {
    map_hsv(image, |hsv| Hsv {
        s: hsv.s.saturating_add(offset),
        ..hsv
    })
}

/// Add `offset` to the value channel, saturating at 255.
///
/// Images whose mean brightness is at or above `threshold` are returned
/// unchanged.
pub fn increase_brightness(image: &RgbImage, offset: u8, threshold: f32) -> RgbImage {
    if mean_brightness(image) >= threshold as f64 {
        return image.clone();
    }
    map_hsv(image, |hsv| Hsv {
        v: hsv.v.saturating_add(offset),
        ..hsv
    })
}

/// Multiply every channel by `factor`, truncating and clamping to 0..=255.
pub fn increase_black_level(image: &RgbImage, factor: f64) -> RgbImage {
    let mut out = image.clone();
    for px in out.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = (*c as f64 * factor).clamp(0.0, 255.0) as u8;
        }
    }
    out
}

fn map_hsv(image: &RgbImage, f: impl Fn(Hsv) -> Hsv) -> RgbImage {
    let mut out = image.clone();
    for px in out.pixels_mut() {
        let hsv = Hsv::from_bgr(Bgr::from(*px), HueRange::Half);
        let bgr = f(hsv).to_bgr(HueRange::Half);
        *px = Rgb::from(bgr);
    }
    out
}
