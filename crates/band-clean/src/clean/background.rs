//! Background whitening.

use image::{Rgb, RgbImage};

/// Mean color of the image, per channel.
fn dominant_color(image: &RgbImage) -> [f64; 3] {
    let count = (image.width() as u64 * image.height() as u64).max(1) as f64;
    let mut sums = [0f64; 3];
    for px in image.pixels() {
        for (sum, &c) in sums.iter_mut().zip(px.0.iter()) {
            *sum += c as f64;
        }
    }
    sums.map(|s| s / count)
}

/// Replace pixels close to the dominant color with white.
///
/// A pixel is background when every channel differs from the image's mean
/// color by less than `threshold`. After flattening, the body of the resistor
/// dominates the crop, so bands survive and the body turns white.
pub fn remove_background(image: &RgbImage, threshold: u8) -> RgbImage {
    let dominant = dominant_color(image);
    let limit = threshold as f64;

    let mut out = image.clone();
    for px in out.pixels_mut() {
        let near = px
            .0
            .iter()
            .zip(dominant.iter())
            .all(|(&c, &d)| (c as f64 - d).abs() < limit);
        if near {
            *px = Rgb([255, 255, 255]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_turns_white_and_band_survives() {
        let mut img = RgbImage::from_pixel(10, 4, Rgb([180, 150, 110]));
        for y in 0..4 {
            img.put_pixel(4, y, Rgb([200, 20, 20]));
        }
        let out = remove_background(&img, 40);
        assert_eq!(out.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(out.get_pixel(4, 2), &Rgb([200, 20, 20]));
    }

    #[test]
    fn test_zero_threshold_keeps_everything() {
        let img = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));
        assert_eq!(remove_background(&img, 0), img);
    }
}
