//! Filesystem access for the drivers.
//!
//! Every failure names the file it happened on so the drivers can log it and
//! move on to the next one.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::PipelineError;

/// An image together with its filename
#[derive(Debug, Clone)]
pub struct NamedImage {
    pub name: String,
    pub image: RgbImage,
}

/// Files in `dir` with the given extension (no dot), sorted by filename.
///
/// A missing or unreadable directory is an error; subdirectories are
/// skipped.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = std::fs::read_dir(dir).map_err(|e| PipelineError::FileNotReadable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    files.sort();

    Ok(files)
}

/// Decode an image file into 8-bit RGB
pub fn load_image(path: &Path) -> Result<RgbImage, PipelineError> {
    image::open(path)
        .map(|img| img.to_rgb8())
        .map_err(|e| PipelineError::FileNotReadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Load an image and keep its filename alongside
pub fn load_named(path: &Path) -> Result<NamedImage, PipelineError> {
    let image = load_image(path)?;
    Ok(NamedImage {
        name: file_name(path),
        image,
    })
}

/// Encode `image` to `path`; the format follows the extension
pub fn save_image(path: &Path, image: &RgbImage) -> Result<(), PipelineError> {
    image.save(path).map_err(|e| PipelineError::FileNotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Create `dir` and its parents if missing
pub fn ensure_dir(dir: &Path) -> Result<(), PipelineError> {
    std::fs::create_dir_all(dir).map_err(|e| PipelineError::FileNotWritable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Final path component as a string
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
