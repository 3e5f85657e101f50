//! Export configuration.
//!
//! The output directory and processing year are explicit values handed
//! to the exporter at construction -- not ambient state. The processing
//! year stamps GIS-sourced records (`dataSource.year`), which describe
//! present-day cadastral data rather than a historical survey; carrying
//! it in the config keeps merge/export output deterministic under test.

use std::path::PathBuf;

use chrono::{Datelike, Utc};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "../data";

/// Configuration for a [`SnapshotExporter`].
///
/// [`SnapshotExporter`]: crate::exporter::SnapshotExporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Directory snapshot files are written into. Must already exist;
    /// a missing directory surfaces as an I/O error at write time.
    pub output_dir: PathBuf,
    /// Year stamped into GIS-sourced `dataSource.year` fields.
    pub processing_year: i32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            processing_year: Utc::now().year(),
        }
    }
}

impl ExportConfig {
    /// Replace the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Replace the processing year (primarily for deterministic tests).
    #[must_use]
    pub const fn with_processing_year(mut self, year: i32) -> Self {
        self.processing_year = year;
        self
    }
}
