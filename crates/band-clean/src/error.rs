//! Error types for the cleaning pipeline and color sampling.

use std::fmt;

/// Error returned by [`ImageCleaner`](crate::ImageCleaner) and the stage
/// functions it is built from.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanError {
    /// The image (or the region a stage produced) has no pixels
    EmptyImage {
        /// Stage that received or produced the empty image
        stage: &'static str,
        width: u32,
        height: u32,
    },
    /// An option value is outside the range the stage supports
    InvalidOption {
        /// Option name as it appears in [`CleanOptions`](crate::CleanOptions)
        name: &'static str,
        /// Rendered offending value
        value: String,
    },
}

impl CleanError {
    pub(crate) fn invalid(name: &'static str, value: impl fmt::Display) -> Self {
        CleanError::InvalidOption {
            name,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::EmptyImage {
                stage,
                width,
                height,
            } => write!(f, "empty image at {} stage ({}x{})", stage, width, height),
            CleanError::InvalidOption { name, value } => {
                write!(f, "invalid option {} = {}", name, value)
            }
        }
    }
}

impl std::error::Error for CleanError {}

/// Error for an unrecognized color space selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpaceError {
    /// The selector that was rejected
    pub selector: String,
}

impl fmt::Display for ColorSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported color space '{}' (expected BGR, LAB, HSV or YCRCB)",
            self.selector
        )
    }
}

impl std::error::Error for ColorSpaceError {}

/// Error for a sample coordinate that does not address a pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: u32,
    pub col: u32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pixel (row {}, col {}) outside {}x{} image",
            self.row, self.col, self.width, self.height
        )
    }
}

impl std::error::Error for OutOfBounds {}
