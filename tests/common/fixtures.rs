//! Test fixtures: synthetic photos, cleaned strips and annotation JSON.

use image::{Rgb, RgbImage};
use serde_json::{json, Value};

/// Band colors in RGB order
pub mod colors {
    use image::Rgb;

    pub const BODY: Rgb<u8> = Rgb([214, 190, 150]);
    pub const BLACK: Rgb<u8> = Rgb([12, 12, 12]);
    pub const BROWN: Rgb<u8> = Rgb([120, 60, 30]);
    pub const RED: Rgb<u8> = Rgb([200, 20, 20]);
    pub const BACKGROUND: Rgb<u8> = Rgb([245, 245, 245]);
}

/// A photo-like resistor: light background, body band through the middle
/// rows, vertical color bands across the body.
pub fn resistor_photo(width: u32, height: u32, bands: &[(u32, Rgb<u8>)]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let in_body = y >= height / 4 && y < height * 3 / 4;
        if !in_body {
            return colors::BACKGROUND;
        }
        bands
            .iter()
            .find(|(start, _)| x >= *start && x < *start + width / 12)
            .map(|(_, c)| *c)
            .unwrap_or(colors::BODY)
    })
}

/// A cleaned strip: solid vertical spans of the given widths and colors,
/// padded with body color to `width`.
pub fn cleaned_strip(width: u32, height: u32, spans: &[(u32, Rgb<u8>)]) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, colors::BODY);
    let mut x0 = 0;
    for (span, color) in spans {
        for x in x0..(x0 + span).min(width) {
            for y in 0..height {
                img.put_pixel(x, y, *color);
            }
        }
        x0 += span;
    }
    img
}

/// One keypoint object as exported by the annotation tool
pub fn keypoint(x: f64, y: f64, width: u32, height: u32, labels: &[&str]) -> Value {
    json!({
        "x": x,
        "y": y,
        "width": 0.5,
        "keypointlabels": labels,
        "original_width": width,
        "original_height": height
    })
}

/// One annotation group (image plus keypoints)
pub fn group(img: &str, keypoints: Vec<Value>) -> Value {
    json!({
        "id": 1,
        "img": img,
        "kp-1": keypoints,
        "annotator": 1,
        "lead_time": 12.5
    })
}
