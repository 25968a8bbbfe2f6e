//! Resistor Prep
//!
//! Data preparation for a resistor color-band classifier: cleans raw
//! resistor photos for labeling and turns keypoint annotations into a
//! color-space table. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use error::PipelineError;
