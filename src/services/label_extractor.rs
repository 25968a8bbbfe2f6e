//! Turns annotation groups into labeled pixel samples.

use std::path::PathBuf;

use band_clean::{sample_pixel, ColorSpace};
use image::RgbImage;

use crate::error::PipelineError;
use crate::models::{AnnotationGroup, BandColor, Keypoint, PointLabel};
use crate::services::image_store::load_image;

/// Recover the cleaned image filename from an upload path.
///
/// The annotation tool stores `/data/upload/<project>/<hash>-<original>`;
/// everything up to the last `/` and the hash prefix up to the first `-`
/// are dropped.
pub fn parse_filename(img: &str) -> Result<String, PipelineError> {
    let base = img.rsplit('/').next().unwrap_or(img);
    match base.split_once('-') {
        Some((_, name)) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(PipelineError::malformed(
            img,
            "upload name has no '-' separated filename",
        )),
    }
}

/// Pixel `(row, col)` a keypoint points at.
///
/// Percent coordinates are scaled by the recorded image size and rounded up.
pub fn resolve_pixel(keypoint: &Keypoint, file: &str) -> Result<(u32, u32), PipelineError> {
    let to_index = |percent: f64, size: u32, axis: &str| -> Result<u32, PipelineError> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(PipelineError::out_of_range(
                file,
                format!("{} = {} is not a valid percentage", axis, percent),
            ));
        }
        let index = (percent * size as f64 / 100.0).ceil();
        if index > u32::MAX as f64 {
            return Err(PipelineError::out_of_range(
                file,
                format!("{} = {} overflows the image", axis, percent),
            ));
        }
        Ok(index as u32)
    };

    let row = to_index(keypoint.y, keypoint.original_height, "y")?;
    let col = to_index(keypoint.x, keypoint.original_width, "x")?;
    Ok((row, col))
}

/// Sample one pixel in the color space named by `selector`
/// (`BGR`, `LAB`, `HSV` or `YCRCB`, any case).
pub fn colorspace_values(
    image: &RgbImage,
    row: u32,
    col: u32,
    selector: &str,
) -> Result<[i16; 3], PipelineError> {
    let space: ColorSpace = selector.parse()?;
    let sample = sample_pixel(image, row, col)
        .map_err(|e| PipelineError::out_of_range(selector, e.to_string()))?;
    Ok(sample.channels(space))
}

/// Label one keypoint of an already loaded cleaned image
pub fn label_keypoint(
    name: &str,
    image: &RgbImage,
    keypoint: &Keypoint,
) -> Result<PointLabel, PipelineError> {
    let (label, alternates) = keypoint
        .keypointlabels
        .split_first()
        .ok_or_else(|| PipelineError::malformed(name, "keypoint has no labels"))?;

    if !alternates.is_empty() {
        tracing::debug!(file = %name, label = %label, alternates = ?alternates, "Ignoring alternate labels");
    }
    if label.parse::<BandColor>().is_err() {
        tracing::warn!(file = %name, label = %label, "Unknown band color label");
    }

    let (row, col) = resolve_pixel(keypoint, name)?;
    let sample = sample_pixel(image, row, col)
        .map_err(|e| PipelineError::out_of_range(name, e.to_string()))?;

    Ok(PointLabel::new(name, label.as_str(), sample))
}

/// Labels produced for one annotation group
#[derive(Debug, Default)]
pub struct GroupLabels {
    pub labels: Vec<PointLabel>,
    /// Keypoints that could not be labeled
    pub failures: Vec<PipelineError>,
}

/// Samples annotated keypoints from the cleaned images
pub struct LabelExtractor {
    cleaned_dir: PathBuf,
}

impl LabelExtractor {
    pub fn new(cleaned_dir: impl Into<PathBuf>) -> Self {
        Self {
            cleaned_dir: cleaned_dir.into(),
        }
    }

    /// Label every keypoint of `group`.
    ///
    /// The cleaned image is loaded once. A bad filename, a missing `kp-1`
    /// field or an unreadable image fails the whole group; a bad keypoint
    /// only fails itself.
    pub fn extract_group(&self, group: &AnnotationGroup) -> Result<GroupLabels, PipelineError> {
        let name = parse_filename(&group.img)?;
        let keypoints = group
            .keypoints
            .as_deref()
            .ok_or_else(|| PipelineError::malformed(&name, "missing kp-1"))?;
        let image = load_image(&self.cleaned_dir.join(&name))?;

        let mut result = GroupLabels::default();
        for keypoint in keypoints {
            if (keypoint.original_width, keypoint.original_height) != image.dimensions() {
                tracing::warn!(
                    file = %name,
                    recorded = %format!("{}x{}", keypoint.original_width, keypoint.original_height),
                    actual = %format!("{}x{}", image.width(), image.height()),
                    "Annotation was made on an image of a different size"
                );
            }

            match label_keypoint(&name, &image, keypoint) {
                Ok(label) => result.labels.push(label),
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "Skipping keypoint");
                    result.failures.push(e);
                }
            }
        }

        tracing::debug!(file = %name, labels = result.labels.len(), "Extracted labels");
        Ok(result)
    }
}
