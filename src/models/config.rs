use std::path::{Path, PathBuf};

use band_clean::{ChromaAxis, CleanOptions};
use serde::Deserialize;

use crate::error::PipelineError;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// The config file written by `resistor-prep init`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../config.yaml");

/// Pipeline configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Raw resistor photos
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,

    /// Cleaned images, one per raw photo with the same filename
    #[serde(default = "default_cleaned_dir")]
    pub cleaned_dir: PathBuf,

    /// Annotation JSON exports
    #[serde(default = "default_labels_dir")]
    pub labels_dir: PathBuf,

    /// Where the dated label CSV is written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extension of raw photos, without the dot
    #[serde(default = "default_image_extension")]
    pub image_extension: String,

    /// Cleaning pipeline parameters
    #[serde(default)]
    pub cleaner: CleanerConfig,

    /// LAB channel for the temperature estimate
    #[serde(default)]
    pub temperature_axis: TemperatureAxis,
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("../data/raw")
}

fn default_cleaned_dir() -> PathBuf {
    PathBuf::from("../data/labelling")
}

fn default_labels_dir() -> PathBuf {
    PathBuf::from("../data/labels_json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("../data/training")
}

fn default_image_extension() -> String {
    "jpg".to_string()
}

/// Cleaning parameters as they appear in the config file.
///
/// Missing fields take the [`CleanOptions`] defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CleanerConfig {
    pub gaussian_kernel: usize,
    pub gaussian_sigma: f64,
    pub median_aperture: u32,
    pub brightness_threshold: f32,
    pub dim_clip_limit: f32,
    pub bright_clip_limit: f32,
    pub tile_grid: u32,
    pub saturation_offset: u8,
    pub crop_width_ratio: f32,
    pub crop_height_ratio: f32,
    pub column_average: bool,
    pub flatten_spans: Vec<u32>,
    pub background_removal: Option<u8>,
    pub black_level: f64,
    pub brighten_threshold: f32,
    pub brighten_offset: u8,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        CleanOptions::default().into()
    }
}

impl From<CleanOptions> for CleanerConfig {
    fn from(o: CleanOptions) -> Self {
        Self {
            gaussian_kernel: o.gaussian_kernel,
            gaussian_sigma: o.gaussian_sigma,
            median_aperture: o.median_aperture,
            brightness_threshold: o.brightness_threshold,
            dim_clip_limit: o.dim_clip_limit,
            bright_clip_limit: o.bright_clip_limit,
            tile_grid: o.tile_grid,
            saturation_offset: o.saturation_offset,
            crop_width_ratio: o.crop_width_ratio,
            crop_height_ratio: o.crop_height_ratio,
            column_average: o.column_average,
            flatten_spans: o.flatten_spans,
            background_removal: o.background_removal,
            black_level: o.black_level,
            brighten_threshold: o.brighten_threshold,
            brighten_offset: o.brighten_offset,
        }
    }
}

impl From<&CleanerConfig> for CleanOptions {
    fn from(c: &CleanerConfig) -> Self {
        CleanOptions::new()
            .gaussian_kernel(c.gaussian_kernel)
            .gaussian_sigma(c.gaussian_sigma)
            .median_aperture(c.median_aperture)
            .contrast(c.brightness_threshold, c.dim_clip_limit, c.bright_clip_limit)
            .tile_grid(c.tile_grid)
            .saturation_offset(c.saturation_offset)
            .crop(c.crop_width_ratio, c.crop_height_ratio)
            .column_average(c.column_average)
            .flatten_spans(c.flatten_spans.clone())
            .background_removal(c.background_removal)
            .black_level(c.black_level)
            .brighten(c.brighten_threshold, c.brighten_offset)
    }
}

/// LAB channel the temperature estimate reads
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureAxis {
    A,
    #[default]
    B,
}

impl From<TemperatureAxis> for ChromaAxis {
    fn from(axis: TemperatureAxis) -> Self {
        match axis {
            TemperatureAxis::A => ChromaAxis::A,
            TemperatureAxis::B => ChromaAxis::B,
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl PipelineConfig {
    /// Parse a YAML document and validate it
    pub fn from_yaml(content: &str) -> Result<Self, PipelineError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| PipelineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PipelineError::FileNotReadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let config = Self::from_yaml(&content)
            .map_err(|e| PipelineError::Config(format!("{}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load the explicitly given file, else `config.yaml` in the working
    /// directory if present, else the built-in defaults.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, ConfigSource), PipelineError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(local)?, ConfigSource::File(local.to_path_buf())));
        }

        tracing::info!("No config file found, using defaults");
        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Check settings that would otherwise only fail once files are processed
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.image_extension.trim_start_matches('.').is_empty() {
            return Err(PipelineError::Config(
                "image_extension must not be empty".to_string(),
            ));
        }
        self.clean_options().validate()?;
        Ok(())
    }

    /// Cleaning options for [`band_clean::ImageCleaner`]
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions::from(&self.cleaner)
    }

    /// Raw image extension without a leading dot
    pub fn extension(&self) -> &str {
        self.image_extension.trim_start_matches('.')
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            cleaned_dir: default_cleaned_dir(),
            labels_dir: default_labels_dir(),
            output_dir: default_output_dir(),
            image_extension: default_image_extension(),
            cleaner: CleanerConfig::default(),
            temperature_axis: TemperatureAxis::default(),
        }
    }
}
