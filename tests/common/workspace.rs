//! Scratch data directories laid out like the real data tree.

use std::path::{Path, PathBuf};

use image::RgbImage;
use resistor_prep::models::{CleanerConfig, PipelineConfig};
use serde_json::Value;
use tempfile::TempDir;

/// A temporary `data/` tree with raw, cleaned, labels and output directories
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for sub in ["raw", "labelling", "labels_json"] {
            std::fs::create_dir_all(dir.path().join(sub)).expect("Failed to create data dir");
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root().join("raw")
    }

    pub fn cleaned_dir(&self) -> PathBuf {
        self.root().join("labelling")
    }

    pub fn labels_dir(&self) -> PathBuf {
        self.root().join("labels_json")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("training")
    }

    /// Config pointing at this workspace, with default cleaning options
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig {
            raw_dir: self.raw_dir(),
            cleaned_dir: self.cleaned_dir(),
            labels_dir: self.labels_dir(),
            output_dir: self.output_dir(),
            ..PipelineConfig::default()
        }
    }

    /// Config with small filter windows for fast tests
    pub fn fast_config(&self) -> PipelineConfig {
        PipelineConfig {
            cleaner: CleanerConfig {
                gaussian_kernel: 5,
                median_aperture: 5,
                ..CleanerConfig::default()
            },
            ..self.config()
        }
    }

    pub fn write_raw(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.raw_dir().join(name);
        image.save(&path).expect("Failed to write raw image");
        path
    }

    pub fn write_raw_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.raw_dir().join(name);
        std::fs::write(&path, bytes).expect("Failed to write raw file");
        path
    }

    pub fn write_cleaned(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.cleaned_dir().join(name);
        image.save(&path).expect("Failed to write cleaned image");
        path
    }

    /// Write an annotation export containing `groups`
    pub fn write_labels(&self, name: &str, groups: &[Value]) -> PathBuf {
        let path = self.labels_dir().join(name);
        let json = serde_json::to_string_pretty(groups).expect("Failed to encode JSON");
        std::fs::write(&path, json).expect("Failed to write labels");
        path
    }

    pub fn write_labels_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.labels_dir().join(name);
        std::fs::write(&path, content).expect("Failed to write labels");
        path
    }
}
