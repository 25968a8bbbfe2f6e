//! Image cleaning stages and the [`ImageCleaner`] pipeline that runs them.
//!
//! Each stage is a free function over [`image::RgbImage`] so it can be used
//! on its own; [`ImageCleaner`] fixes their order and parameters.

mod background;
mod cleaner;
mod crop;
mod flatten;
mod options;
mod tone;

pub use background::remove_background;
pub use cleaner::ImageCleaner;
pub use crop::{crop_middle, CropRegion};
pub use flatten::{column_average_replace, column_median_replace, column_median_replace_step};
pub use options::CleanOptions;
pub use tone::{
    enhance_contrast, increase_black_level, increase_brightness, increase_saturation,
    mean_brightness,
};
