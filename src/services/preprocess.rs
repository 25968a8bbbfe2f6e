use std::path::{Path, PathBuf};

use band_clean::{estimate_temperature, ChromaAxis, ImageCleaner};

use crate::error::PipelineError;
use crate::models::PipelineConfig;
use crate::services::image_store::{ensure_dir, file_name, list_files, load_named, save_image};

/// Outcome of a preprocessing run
#[derive(Debug, Default)]
pub struct PreprocessReport {
    /// Filenames written to the cleaned directory, in processing order
    pub processed: Vec<String>,
    /// Files that were skipped and why
    pub failures: Vec<(PathBuf, PipelineError)>,
}

impl PreprocessReport {
    pub fn skipped(&self) -> usize {
        self.failures.len()
    }
}

/// Cleans every raw photo into the cleaned directory
pub struct Preprocessor {
    cleaner: ImageCleaner,
    axis: ChromaAxis,
    raw_dir: PathBuf,
    cleaned_dir: PathBuf,
    extension: String,
}

impl Preprocessor {
    pub fn new(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let cleaner = ImageCleaner::new(config.clean_options())?;

        Ok(Self {
            cleaner,
            axis: config.temperature_axis.into(),
            raw_dir: config.raw_dir.clone(),
            cleaned_dir: config.cleaned_dir.clone(),
            extension: config.extension().to_string(),
        })
    }

    /// Process every raw image.
    ///
    /// Per-file failures are logged and collected in the report. A missing
    /// raw directory or an output directory that cannot be created fails
    /// the whole run.
    pub fn run(&self) -> Result<PreprocessReport, PipelineError> {
        let files = list_files(&self.raw_dir, &self.extension)?;
        ensure_dir(&self.cleaned_dir)?;

        tracing::info!(
            raw_dir = %self.raw_dir.display(),
            files = files.len(),
            "Preprocessing images"
        );

        let mut report = PreprocessReport::default();
        for path in files {
            match self.process_file(&path) {
                Ok(name) => report.processed.push(name),
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "Skipping image");
                    report.failures.push((path, e));
                }
            }
        }

        tracing::info!(
            processed = report.processed.len(),
            skipped = report.skipped(),
            "Preprocessing finished"
        );
        Ok(report)
    }

    /// Clean one file and write it under the same name. Returns the name.
    pub fn process_file(&self, path: &Path) -> Result<String, PipelineError> {
        let raw = load_named(path)?;
        let cleaned = self.cleaner.clean(&raw.image)?;

        let kelvin = estimate_temperature(&cleaned, self.axis);
        tracing::info!(file = %raw.name, temperature = kelvin, "Cleaned image");

        save_image(&self.cleaned_path(path), &cleaned)?;
        Ok(raw.name)
    }

    /// Where the cleaned version of the raw file at `path` is written
    pub fn cleaned_path(&self, path: &Path) -> PathBuf {
        self.cleaned_dir.join(file_name(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CleanerConfig;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config(root: &Path) -> PipelineConfig {
        PipelineConfig {
            raw_dir: root.join("raw"),
            cleaned_dir: root.join("cleaned"),
            image_extension: "png".to_string(),
            cleaner: CleanerConfig {
                gaussian_kernel: 3,
                median_aperture: 3,
                ..CleanerConfig::default()
            },
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_invalid_options_fail_construction() {
        let mut config = PipelineConfig::default();
        config.cleaner.tile_grid = 0;
        assert!(matches!(
            Preprocessor::new(&config),
            Err(PipelineError::Clean(_))
        ));
    }

    #[test]
    fn test_missing_raw_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let pre = Preprocessor::new(&config(dir.path())).unwrap();
        assert!(matches!(
            pre.run(),
            Err(PipelineError::FileNotReadable { .. })
        ));
    }

    #[test]
    fn test_process_file_writes_same_name() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        std::fs::create_dir_all(&config.raw_dir).unwrap();
        std::fs::create_dir_all(&config.cleaned_dir).unwrap();

        let raw = config.raw_dir.join("red-red-4.png");
        RgbImage::from_pixel(30, 30, Rgb([180, 40, 40]))
            .save(&raw)
            .unwrap();

        let pre = Preprocessor::new(&config).unwrap();
        assert_eq!(pre.process_file(&raw).unwrap(), "red-red-4.png");
        assert_eq!(
            pre.cleaned_path(&raw),
            config.cleaned_dir.join("red-red-4.png")
        );
        assert!(pre.cleaned_path(&raw).is_file());
    }
}
