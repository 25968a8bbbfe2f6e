//! Neighborhood filters used by the cleaner's smoothing and contrast stages.

mod clahe;
mod smooth;

pub use clahe::clahe;
pub use smooth::{gaussian_blur, gaussian_kernel, median_blur};
