use std::path::PathBuf;

use band_clean::{CleanError, ColorSpaceError};
use thiserror::Error;

/// Error from the preprocessing and label parsing drivers
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Cannot read {}: {reason}", path.display())]
    FileNotReadable { path: PathBuf, reason: String },

    #[error("Cannot write {}: {reason}", path.display())]
    FileNotWritable { path: PathBuf, reason: String },

    #[error("Malformed input in {file}: {reason}")]
    MalformedInput { file: String, reason: String },

    #[error("Out of range in {file}: {reason}")]
    OutOfRange { file: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cleaning error: {0}")]
    Clean(#[from] CleanError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ColorSpaceError> for PipelineError {
    fn from(e: ColorSpaceError) -> Self {
        PipelineError::InvalidArgument(e.to_string())
    }
}

impl PipelineError {
    pub fn malformed(file: impl Into<String>, reason: impl Into<String>) -> Self {
        PipelineError::MalformedInput {
            file: file.into(),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(file: impl Into<String>, reason: impl Into<String>) -> Self {
        PipelineError::OutOfRange {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_readable() {
        let error = PipelineError::FileNotReadable {
            path: PathBuf::from("raw/r1.jpg"),
            reason: "truncated JPEG".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot read raw/r1.jpg: truncated JPEG");
    }

    #[test]
    fn test_file_not_writable() {
        let error = PipelineError::FileNotWritable {
            path: PathBuf::from("out/labels.csv"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot write out/labels.csv: permission denied"
        );
    }

    #[test]
    fn test_malformed_input() {
        let error = PipelineError::malformed("batch1.json", "expected an array");
        assert_eq!(
            error.to_string(),
            "Malformed input in batch1.json: expected an array"
        );
    }

    #[test]
    fn test_out_of_range() {
        let error = PipelineError::out_of_range("r1.jpg", "row 40 >= height 40");
        assert_eq!(error.to_string(), "Out of range in r1.jpg: row 40 >= height 40");
    }

    #[test]
    fn test_from_clean_error() {
        let clean = CleanError::EmptyImage {
            stage: "crop",
            width: 8,
            height: 0,
        };
        let error: PipelineError = clean.into();
        match error {
            PipelineError::Clean(_) => {}
            _ => panic!("Expected Clean variant"),
        }
    }

    #[test]
    fn test_from_color_space_error() {
        let error: PipelineError = ColorSpaceError {
            selector: "RGB".to_string(),
        }
        .into();
        assert!(matches!(error, PipelineError::InvalidArgument(_)));
        assert!(error.to_string().contains("'RGB'"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: PipelineError = io.into();
        assert_eq!(error.to_string(), "IO error: gone");
    }
}
