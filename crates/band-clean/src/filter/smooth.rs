//! Gaussian and median smoothing.
//!
//! Convolution and the median window are delegated to [`imageproc`]; this
//! module only builds the Gaussian kernel so its size can be set
//! independently of sigma.

use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::filter::{median_filter, separable_filter_equal};

/// Build a normalized 1D Gaussian kernel of `size` taps.
///
/// A non-positive `sigma` is derived from the size with
/// `0.3 * ((size - 1) / 2 - 1) + 0.8`.
///
/// # Example
/// ```
/// use band_clean::filter::gaussian_kernel;
///
/// let k = gaussian_kernel(13, 1.0);
/// assert_eq!(k.len(), 13);
/// assert!((k.iter().sum::<f32>() - 1.0).abs() < 1e-5);
/// ```
pub fn gaussian_kernel(size: usize, sigma: f64) -> Vec<f32> {
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8
    };
    let center = (size as f64 - 1.0) / 2.0;
    let scale = -0.5 / (sigma * sigma);

    let weights: Vec<f64> = (0..size)
        .map(|i| {
            let x = i as f64 - center;
            (scale * x * x).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();

    weights.iter().map(|w| (w / sum) as f32).collect()
}

/// Separable Gaussian blur with a `size` × `size` kernel.
///
/// Both passes run on `f32` samples and the result is rounded once, so a
/// constant image comes back unchanged.
pub fn gaussian_blur(image: &RgbImage, size: usize, sigma: f64) -> RgbImage {
    let kernel = gaussian_kernel(size, sigma);
    let wide: ImageBuffer<Rgb<f32>, Vec<f32>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            Rgb(image.get_pixel(x, y).0.map(f32::from))
        });
    let blurred = separable_filter_equal(&wide, &kernel);

    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        Rgb(blurred
            .get_pixel(x, y)
            .0
            .map(|c| c.round().clamp(0.0, 255.0) as u8))
    })
}

/// Per-channel median over an `aperture` × `aperture` neighborhood.
///
/// Edge pixels use a window clamped to the image.
pub fn median_blur(image: &RgbImage, aperture: u32) -> RgbImage {
    let radius = aperture / 2;
    median_filter(image, radius, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_kernel_is_symmetric_and_peaked() {
        let k = gaussian_kernel(13, 1.0);
        for i in 0..6 {
            assert!((k[i] - k[12 - i]).abs() < 1e-7);
            assert!(k[i] < k[i + 1]);
        }
        // sigma 1.0: center tap of the continuous Gaussian is ~0.399
        assert!((k[6] - 0.399).abs() < 0.01);
    }

    #[test]
    fn test_kernel_derives_sigma_from_size() {
        let derived = gaussian_kernel(5, 0.0);
        let explicit = gaussian_kernel(5, 1.1);
        for (a, b) in derived.iter().zip(explicit.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_median_removes_single_speckle() {
        let mut img = RgbImage::from_pixel(9, 9, Rgb([50, 60, 70]));
        img.put_pixel(4, 4, Rgb([255, 255, 255]));
        let out = median_blur(&img, 3);
        assert_eq!(out.get_pixel(4, 4), &Rgb([50, 60, 70]));
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = RgbImage::from_pixel(20, 11, Rgb([10, 20, 30]));
        let out = gaussian_blur(&img, 13, 1.0);
        assert_eq!(out.dimensions(), (20, 11));
    }

    #[test]
    fn test_blur_of_constant_image_stays_constant() {
        let img = RgbImage::from_pixel(16, 16, Rgb([128, 64, 201]));
        let out = gaussian_blur(&img, 13, 1.0);
        assert!(out.pixels().all(|px| px.0 == [128, 64, 201]));
    }
}
