pub mod annotation;
pub mod config;
pub mod point_label;

pub use annotation::{AnnotationGroup, BandColor, Keypoint};
pub use config::{
    CleanerConfig, ConfigSource, PipelineConfig, TemperatureAxis, DEFAULT_CONFIG_FILE,
    DEFAULT_CONFIG_YAML,
};
pub use point_label::{LabelTable, PointLabel, CSV_HEADER};
