//! Typed 8-bit color spaces
//!
//! Every sample the pipeline produces is one of these records rather than a
//! bare tuple, so a hue can never be mistaken for a blue channel.
//!
//! - [`Bgr`]: raw device channels
//! - [`Lab8`] / [`LabSample`]: CIE L*a*b*, packed and dataset forms
//! - [`Hsv`]: hue/saturation/value with a selectable [`HueRange`]
//! - [`YCrCb`]: BT.601 luma and chroma differences
//!
//! # Example
//!
//! ```
//! use band_clean::{Bgr, Hsv, HueRange, LabSample, YCrCb};
//!
//! let px = Bgr::new(40, 40, 200);
//! let lab = LabSample::from(px);
//! let hsv = Hsv::from_bgr(px, HueRange::Full);
//! let ycc = YCrCb::from(px);
//!
//! assert!(lab.a > 0);
//! assert_eq!(hsv.v, 200);
//! assert!(ycc.cr > 128);
//! ```

mod bgr;
mod hsv;
mod lab;
mod ycrcb;

pub use bgr::Bgr;
pub use hsv::{Hsv, HueRange};
pub use lab::{Lab8, LabSample};
pub use ycrcb::YCrCb;
