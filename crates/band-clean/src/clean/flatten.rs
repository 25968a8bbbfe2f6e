//! Column flattening.
//!
//! Resistor bands run vertically through the crop, so glare and shadow show
//! up as streaks along a band. Collapsing narrow column spans to a single
//! color removes those streaks while keeping the boundaries between spans.

use image::{Rgb, RgbImage};

/// Replace every pixel of each column with that column's per-channel mean.
///
/// Means are truncated toward zero.
pub fn column_average_replace(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = image.clone();
    if height == 0 {
        return out;
    }

    for x in 0..width {
        let mut sums = [0u64; 3];
        for y in 0..height {
            for (sum, &c) in sums.iter_mut().zip(image.get_pixel(x, y).0.iter()) {
                *sum += c as u64;
            }
        }
        let mean = Rgb(sums.map(|s| (s / height as u64) as u8));
        for y in 0..height {
            out.put_pixel(x, y, mean);
        }
    }
    out
}

/// Replace every pixel of each span of `span` columns with the span's
/// per-channel median, taken over all rows and the span's columns.
///
/// Spans start at column 0 and partition the width; the last one is
/// narrower when the width is not a multiple of `span`. An even sample
/// count takes the truncated mean of the two middle values.
///
/// # Example
/// ```
/// use band_clean::clean::column_median_replace_step;
/// use image::{Rgb, RgbImage};
///
/// let img = RgbImage::from_fn(6, 4, |x, y| Rgb([(x * 10 + y) as u8, 0, 0]));
/// let out = column_median_replace_step(&img, 3);
/// assert_eq!(out.get_pixel(0, 0), out.get_pixel(2, 3));
/// assert_ne!(out.get_pixel(2, 0), out.get_pixel(3, 0));
/// ```
pub fn column_median_replace_step(image: &RgbImage, span: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = image.clone();
    if span == 0 || height == 0 {
        return out;
    }

    let mut samples: [Vec<u8>; 3] = Default::default();
    let mut start = 0;
    while start < width {
        let end = (start + span).min(width);

        for channel in samples.iter_mut() {
            channel.clear();
        }
        for y in 0..height {
            for x in start..end {
                let px = image.get_pixel(x, y);
                for (channel, &c) in samples.iter_mut().zip(px.0.iter()) {
                    channel.push(c);
                }
            }
        }

        let median = Rgb([
            median_u8(&mut samples[0]),
            median_u8(&mut samples[1]),
            median_u8(&mut samples[2]),
        ]);
        for y in 0..height {
            for x in start..end {
                out.put_pixel(x, y, median);
            }
        }

        start = end;
    }
    out
}

/// Replace every pixel of each column with that column's per-channel median.
#[inline]
pub fn column_median_replace(image: &RgbImage) -> RgbImage {
    column_median_replace_step(image, 1)
}

fn median_u8(values: &mut [u8]) -> u8 {
    let n = values.len();
    debug_assert!(n > 0);
    let mid = n / 2;
    let (_, &mut upper, _) = values.select_nth_unstable(mid);
    if n % 2 == 1 {
        upper
    } else {
        let lower = *values[..mid].iter().max().unwrap_or(&upper);
        ((lower as u16 + upper as u16) / 2) as u8
    }
}
