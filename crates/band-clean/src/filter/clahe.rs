//! Contrast Limited Adaptive Histogram Equalization on a single channel.
//!
//! The plane is split into a `grid` × `grid` set of equally sized tiles. When
//! the plane does not divide evenly, tiles past the edge read a mirrored
//! border so every tile histogram covers the same area. Each tile gets its
//! own equalization lookup table built from a clipped histogram; clipped
//! counts are spread back over all bins so the table stays monotonic. Output
//! pixels blend the four nearest tile tables bilinearly, which hides tile
//! seams.

use image::{GrayImage, Luma};

/// Equalize `plane` with contrast clipping.
///
/// `clip_limit` is relative to a flat histogram: a bin may hold at most
/// `clip_limit * tile_area / 256` counts (at least 1). A limit of `0.0`
/// disables clipping, giving plain per-tile equalization.
///
/// # Example
/// ```
/// use band_clean::filter::clahe;
/// use image::{GrayImage, Luma};
///
/// let flat = GrayImage::from_pixel(32, 32, Luma([120]));
/// let out = clahe(&flat, 2.0, 8);
/// assert_eq!(out.dimensions(), (32, 32));
/// ```
pub fn clahe(plane: &GrayImage, clip_limit: f32, grid: u32) -> GrayImage {
    let (width, height) = plane.dimensions();
    if width == 0 || height == 0 || grid == 0 {
        return plane.clone();
    }

    let tile_w = width.div_ceil(grid);
    let tile_h = height.div_ceil(grid);
    let (tiles_x, tiles_y) = (grid, grid);
    let area = tile_w * tile_h;

    let mut luts = Vec::with_capacity((tiles_x * tiles_y) as usize);
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let mut hist = [0u32; 256];
            for y in ty * tile_h..(ty + 1) * tile_h {
                let sy = reflect_101(y, height);
                for x in tx * tile_w..(tx + 1) * tile_w {
                    let sx = reflect_101(x, width);
                    hist[plane.get_pixel(sx, sy).0[0] as usize] += 1;
                }
            }
            luts.push(tile_lut(&mut hist, area, clip_limit));
        }
    }

    let lut_at = |tx: u32, ty: u32| &luts[(ty * tiles_x + tx) as usize];

    GrayImage::from_fn(width, height, |x, y| {
        let v = plane.get_pixel(x, y).0[0] as usize;

        let (tx1, tx2, xa) = neighbors(x, tile_w, tiles_x);
        let (ty1, ty2, ya) = neighbors(y, tile_h, tiles_y);

        let top = lut_at(tx1, ty1)[v] as f32 * (1.0 - xa) + lut_at(tx2, ty1)[v] as f32 * xa;
        let bottom = lut_at(tx1, ty2)[v] as f32 * (1.0 - xa) + lut_at(tx2, ty2)[v] as f32 * xa;
        let blended = top * (1.0 - ya) + bottom * ya;

        Luma([blended.round().clamp(0.0, 255.0) as u8])
    })
}

/// Mirror `pos` into `0..len` without repeating the edge sample.
#[inline]
fn reflect_101(pos: u32, len: u32) -> u32 {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let p = pos % period;
    if p < len {
        p
    } else {
        period - p
    }
}

/// The two tile indices around `pos` along one axis and the weight of the second.
///
/// Tile centers sit at `tile / 2`, matching OpenCV's interpolation.
#[inline]
fn neighbors(pos: u32, tile: u32, tiles: u32) -> (u32, u32, f32) {
    let t = pos as f32 / tile as f32 - 0.5;
    let first = t.floor();
    let weight = t - first;
    let last = tiles as i64 - 1;
    let t1 = (first as i64).clamp(0, last) as u32;
    let t2 = (first as i64 + 1).clamp(0, last) as u32;
    (t1, t2, weight)
}

fn tile_lut(hist: &mut [u32; 256], area: u32, clip_limit: f32) -> [u8; 256] {
    if clip_limit > 0.0 {
        let clip = ((clip_limit * area as f32 / 256.0) as u32).max(1);

        let mut excess = 0u32;
        for bin in hist.iter_mut() {
            if *bin > clip {
                excess += *bin - clip;
                *bin = clip;
            }
        }

        let batch = excess / 256;
        let residual = excess % 256;
        for bin in hist.iter_mut() {
            *bin += batch;
        }
        if residual > 0 {
            let step = (256 / residual as usize).max(1);
            for bin in hist.iter_mut().step_by(step).take(residual as usize) {
                *bin += 1;
            }
        }
    }

    let scale = 255.0 / area as f32;
    let mut lut = [0u8; 256];
    let mut cumulative = 0u32;
    for (entry, &count) in lut.iter_mut().zip(hist.iter()) {
        cumulative += count;
        *entry = (cumulative as f32 * scale).round().min(255.0) as u8;
    }
    lut
}
