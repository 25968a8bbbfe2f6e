//! Keypoint annotations as exported by the labeling tool.
//!
//! Each export file is a JSON array of [`AnnotationGroup`]s, one per labeled
//! image. Fields the pipeline does not use are ignored.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// All keypoints placed on one image
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnnotationGroup {
    /// Upload path of the image, e.g. `/data/upload/3/d52ffd44-black-brown-9.jpg`
    pub img: String,

    /// `None` when the export has no `kp-1` field at all
    #[serde(rename = "kp-1")]
    pub keypoints: Option<Vec<Keypoint>>,
}

/// One labeled point, positioned in percent of the image size
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Keypoint {
    /// Height of the image the annotator saw, in pixels
    pub original_height: u32,
    /// Width of the image the annotator saw, in pixels
    pub original_width: u32,
    /// Horizontal position, 0..=100
    pub x: f64,
    /// Vertical position, 0..=100
    pub y: f64,
    /// Candidate labels; the first one is used
    #[serde(default)]
    pub keypointlabels: Vec<String>,
}

/// Resistor band colors plus a class for points that hit no band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Grey,
    White,
    Gold,
    Silver,
    Noise,
}

impl BandColor {
    pub const ALL: [BandColor; 13] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Purple,
        BandColor::Grey,
        BandColor::White,
        BandColor::Gold,
        BandColor::Silver,
        BandColor::Noise,
    ];

    /// Label string as used in annotations and the CSV
    pub fn as_str(self) -> &'static str {
        match self {
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
            BandColor::Blue => "blue",
            BandColor::Purple => "purple",
            BandColor::Grey => "grey",
            BandColor::White => "white",
            BandColor::Gold => "gold",
            BandColor::Silver => "silver",
            BandColor::Noise => "noise",
        }
    }
}

impl FromStr for BandColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BandColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown band color '{}'", s))
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
