use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::PipelineError;
use crate::models::{AnnotationGroup, LabelTable, PipelineConfig};
use crate::services::image_store::{ensure_dir, file_name, list_files};
use crate::services::label_extractor::LabelExtractor;

/// Outcome of a label parsing run
#[derive(Debug)]
pub struct LabelReport {
    /// CSV that was written
    pub output: PathBuf,
    /// Rows in the CSV
    pub rows: usize,
    /// Files, groups and keypoints that were skipped, keyed by source file
    pub failures: Vec<(String, PipelineError)>,
}

/// Output filename for labels parsed on `date`
pub fn output_file_name(date: NaiveDate) -> String {
    format!("labels_{}.csv", date.format("%Y-%m-%d"))
}

/// Parse one annotation export
pub fn parse_file(path: &Path) -> Result<Vec<AnnotationGroup>, PipelineError> {
    let content = std::fs::read_to_string(path).map_err(|e| PipelineError::FileNotReadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content)
        .map_err(|e| PipelineError::malformed(file_name(path), e.to_string()))
}

/// Reads every annotation export and writes one dated label CSV
pub struct LabelParser {
    labels_dir: PathBuf,
    output_dir: PathBuf,
    extractor: LabelExtractor,
}

impl LabelParser {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            labels_dir: config.labels_dir.clone(),
            output_dir: config.output_dir.clone(),
            extractor: LabelExtractor::new(config.cleaned_dir.clone()),
        }
    }

    /// Collect labels from every export, dated today
    pub fn run(&self) -> Result<LabelReport, PipelineError> {
        self.run_dated(Local::now().date_naive())
    }

    /// Collect labels from every export and write `labels_<date>.csv`
    pub fn run_dated(&self, date: NaiveDate) -> Result<LabelReport, PipelineError> {
        let files = list_files(&self.labels_dir, "json")?;
        tracing::info!(
            labels_dir = %self.labels_dir.display(),
            files = files.len(),
            "Parsing annotation exports"
        );

        let (table, failures) = self.collect(&files);

        ensure_dir(&self.output_dir)?;
        let output = self.output_dir.join(output_file_name(date));
        table.save(&output)?;

        tracing::info!(
            output = %output.display(),
            rows = table.len(),
            skipped = failures.len(),
            "Wrote label table"
        );
        Ok(LabelReport {
            output,
            rows: table.len(),
            failures,
        })
    }

    /// Build the table from `files` in order, without writing it
    pub fn collect(&self, files: &[PathBuf]) -> (LabelTable, Vec<(String, PipelineError)>) {
        let mut table = LabelTable::new();
        let mut failures = Vec::new();

        for path in files {
            let source = file_name(path);
            let groups = match parse_file(path) {
                Ok(groups) => groups,
                Err(e) => {
                    tracing::warn!(file = %source, error = %e, "Skipping annotation file");
                    failures.push((source, e));
                    continue;
                }
            };

            for group in &groups {
                match self.extractor.extract_group(group) {
                    Ok(result) => {
                        table.extend(result.labels);
                        failures.extend(result.failures.into_iter().map(|e| (source.clone(), e)));
                    }
                    Err(e) => {
                        tracing::warn!(file = %source, img = %group.img, error = %e, "Skipping annotation group");
                        failures.push((source.clone(), e));
                    }
                }
            }
        }

        (table, failures)
    }
}
