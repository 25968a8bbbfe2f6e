//! Labeled pixel samples and the CSV table they are written to.

use std::io;
use std::path::Path;

use band_clean::{Bgr, Hsv, LabSample, PixelSample, YCrCb};
use serde::Serialize;

use crate::error::PipelineError;

/// CSV column order
pub const CSV_HEADER: [&str; 15] = [
    "id", "name", "label", "L", "a", "b", "B", "G", "R", "H", "S", "V", "Y", "Cr", "Cb",
];

/// One annotated pixel of a cleaned image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointLabel {
    /// Cleaned image filename
    pub name: String,
    /// Band color class, verbatim from the annotation
    pub label: String,
    pub bgr: Bgr,
    pub lab: LabSample,
    /// Full-range HSV (hue 0..=255)
    pub hsv: Hsv,
    pub ycrcb: YCrCb,
}

impl PointLabel {
    pub fn new(name: impl Into<String>, label: impl Into<String>, sample: PixelSample) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            bgr: sample.bgr,
            lab: sample.lab,
            hsv: sample.hsv,
            ycrcb: sample.ycrcb,
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: usize,
    name: &'a str,
    label: &'a str,
    #[serde(rename = "L")]
    lab_l: u8,
    #[serde(rename = "a")]
    lab_a: i16,
    #[serde(rename = "b")]
    lab_b: i16,
    #[serde(rename = "B")]
    blue: u8,
    #[serde(rename = "G")]
    green: u8,
    #[serde(rename = "R")]
    red: u8,
    #[serde(rename = "H")]
    hue: u8,
    #[serde(rename = "S")]
    saturation: u8,
    #[serde(rename = "V")]
    value: u8,
    #[serde(rename = "Y")]
    luma: u8,
    #[serde(rename = "Cr")]
    cr: u8,
    #[serde(rename = "Cb")]
    cb: u8,
}

impl<'a> CsvRow<'a> {
    fn new(id: usize, p: &'a PointLabel) -> Self {
        Self {
            id,
            name: &p.name,
            label: &p.label,
            lab_l: p.lab.l,
            lab_a: p.lab.a,
            lab_b: p.lab.b,
            blue: p.bgr.b,
            green: p.bgr.g,
            red: p.bgr.r,
            hue: p.hsv.h,
            saturation: p.hsv.s,
            value: p.hsv.v,
            luma: p.ycrcb.y,
            cr: p.ycrcb.cr,
            cb: p.ycrcb.cb,
        }
    }
}

/// Ordered collection of [`PointLabel`]s.
///
/// Row ids are the zero-based position in the table and are assigned when
/// the table is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    rows: Vec<PointLabel>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: PointLabel) {
        self.rows.push(label);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PointLabel] {
        &self.rows
    }

    /// Write the header and every row as CSV
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv.write_record(CSV_HEADER)?;
        for (id, row) in self.rows.iter().enumerate() {
            csv.serialize(CsvRow::new(id, row))?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write the table to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<(), PipelineError> {
        let not_writable = |reason: String| PipelineError::FileNotWritable {
            path: path.to_path_buf(),
            reason,
        };
        let file = std::fs::File::create(path).map_err(|e| not_writable(e.to_string()))?;
        self.write_csv(io::BufWriter::new(file))
            .map_err(|e| not_writable(e.to_string()))
    }
}

impl Extend<PointLabel> for LabelTable {
    fn extend<I: IntoIterator<Item = PointLabel>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl FromIterator<PointLabel> for LabelTable {
    fn from_iter<I: IntoIterator<Item = PointLabel>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
