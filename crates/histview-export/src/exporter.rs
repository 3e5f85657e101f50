//! The snapshot aggregator and JSON writer.
//!
//! A [`SnapshotExporter`] owns the accumulated snapshot list and the
//! export configuration. Per-snapshot documents and the merged document
//! are written whole, overwriting any existing file at the target path
//! (no temp-file-plus-rename: this is an offline batch tool, not a
//! service).
//!
//! JSON output uses 2-space indentation and leaves non-ASCII characters
//! unescaped -- both are compatibility requirements of the downstream
//! viewer tooling, and both are `serde_json`'s pretty-printer defaults.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use histview_normalize::{NormalizeError, normalize_gis, normalize_sanborn, normalize_street};
use histview_types::{
    GisRecord, MergedSnapshots, PROJECT_NAME, SanbornRecord, Snapshot, StreetRecord,
};

use crate::config::ExportConfig;
use crate::error::ExportError;

/// Default filename for the merged multi-snapshot document.
pub const DEFAULT_MERGED_FILENAME: &str = "historical-snapshots.json";

/// Aggregates snapshots in memory and serializes them to flat JSON.
#[derive(Debug, Default)]
pub struct SnapshotExporter {
    config: ExportConfig,
    snapshots: Vec<Snapshot>,
}

impl SnapshotExporter {
    /// Create an exporter with the given configuration and no
    /// accumulated snapshots.
    pub const fn new(config: ExportConfig) -> Self {
        Self {
            config,
            snapshots: Vec::new(),
        }
    }

    /// Create an empty snapshot container.
    ///
    /// Inputs are accepted as-is; see [`Snapshot::new`].
    pub const fn create_snapshot(
        year: i32,
        era: String,
        description: String,
        population: u32,
    ) -> Snapshot {
        Snapshot::new(year, era, description, population)
    }

    /// Normalize a Sanborn record and append it to the snapshot's
    /// building list, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MissingCoordinates`] without appending
    /// anything if the record has no coordinates.
    #[allow(clippy::unused_self)] // Mirrors the GIS path, which needs the config.
    pub fn add_building_from_sanborn(
        &self,
        snapshot: &mut Snapshot,
        record: &SanbornRecord,
    ) -> Result<(), NormalizeError> {
        let building = normalize_sanborn(record)?;
        snapshot.buildings.push(building);
        Ok(())
    }

    /// Normalize a GIS record and append it to the snapshot's building
    /// list, preserving insertion order. The configured processing year
    /// becomes the record's `dataSource.year`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MissingCoordinates`] without appending
    /// anything if the record has no coordinates.
    pub fn add_building_from_gis(
        &self,
        snapshot: &mut Snapshot,
        record: &GisRecord,
    ) -> Result<(), NormalizeError> {
        let building = normalize_gis(record, self.config.processing_year)?;
        snapshot.buildings.push(building);
        Ok(())
    }

    /// Normalize a street record and append it to the snapshot's street
    /// list. Streets have no required fields, so this cannot fail.
    #[allow(clippy::unused_self)] // Mirrors the building paths.
    pub fn add_street(&self, snapshot: &mut Snapshot, record: &StreetRecord) {
        snapshot.streets.push(normalize_street(record));
    }

    /// Append a finished snapshot to the in-memory accumulation list.
    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// The snapshots accumulated so far, in accumulation order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Write one snapshot to `<output_dir>/<filename>`, defaulting the
    /// filename to `snapshot_<year>.json`. Overwrites any existing file.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the output directory is missing
    /// or unwritable, [`ExportError::Serialization`] if encoding fails.
    pub fn export_snapshot(
        &self,
        snapshot: &Snapshot,
        filename: Option<&str>,
    ) -> Result<PathBuf, ExportError> {
        let filename = filename.map_or_else(
            || format!("snapshot_{}.json", snapshot.year),
            ToOwned::to_owned,
        );
        let path = self.config.output_dir.join(filename);
        write_pretty(&path, snapshot)?;

        tracing::info!(
            year = snapshot.year,
            buildings = snapshot.buildings.len(),
            streets = snapshot.streets.len(),
            path = %path.display(),
            "exported snapshot"
        );
        Ok(path)
    }

    /// Write all accumulated snapshots as one merged document, stamped
    /// with the current time. Overwrites any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the output directory is missing
    /// or unwritable, [`ExportError::Serialization`] if encoding fails.
    pub fn merge_snapshots(&self, output_file: Option<&str>) -> Result<PathBuf, ExportError> {
        self.merge_snapshots_with_created(Utc::now(), output_file)
    }

    /// Write the merged document with an explicit `created` timestamp.
    ///
    /// Exists so callers (and tests) can produce byte-identical output
    /// across runs.
    ///
    /// # Errors
    ///
    /// Same as [`Self::merge_snapshots`].
    pub fn merge_snapshots_with_created(
        &self,
        created: DateTime<Utc>,
        output_file: Option<&str>,
    ) -> Result<PathBuf, ExportError> {
        let document = MergedSnapshots {
            project: String::from(PROJECT_NAME),
            created,
            snapshots: self.snapshots.clone(),
        };
        let path = self
            .config
            .output_dir
            .join(output_file.unwrap_or(DEFAULT_MERGED_FILENAME));
        write_pretty(&path, &document)?;

        tracing::info!(
            count = self.snapshots.len(),
            path = %path.display(),
            "merged snapshots"
        );
        Ok(path)
    }
}

/// Serialize a value as 2-space-indented JSON to `path`, whole-document,
/// overwriting.
fn write_pretty<T: serde::Serialize>(path: &std::path::Path, value: &T) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use chrono::TimeZone;
    use tempfile::tempdir;

    use histview_types::SanbornRecord;

    use super::*;

    fn exporter_at(dir: &std::path::Path) -> SnapshotExporter {
        SnapshotExporter::new(
            ExportConfig::default()
                .with_output_dir(dir)
                .with_processing_year(2026),
        )
    }

    fn small_snapshot() -> Snapshot {
        let mut snapshot = SnapshotExporter::create_snapshot(
            1880,
            String::from("Frontier Era"),
            String::from("Río de \u{00e9}poca"), // non-ASCII must survive literally
            41_000,
        );
        let exporter = SnapshotExporter::new(ExportConfig::default());
        exporter
            .add_building_from_sanborn(
                &mut snapshot,
                &SanbornRecord {
                    coordinates: Some([-93.09, 44.94]),
                    ..SanbornRecord::default()
                },
            )
            .unwrap();
        snapshot
    }

    #[test]
    fn export_uses_default_filename_pattern() {
        let dir = tempdir().unwrap();
        let exporter = exporter_at(dir.path());
        let path = exporter.export_snapshot(&small_snapshot(), None).unwrap();
        assert_eq!(path, dir.path().join("snapshot_1880.json"));
        assert!(path.exists());
    }

    #[test]
    fn export_honors_explicit_filename_and_overwrites() {
        let dir = tempdir().unwrap();
        let exporter = exporter_at(dir.path());
        let path = exporter
            .export_snapshot(&small_snapshot(), Some("custom.json"))
            .unwrap();
        fs::write(&path, "garbage").unwrap();
        exporter
            .export_snapshot(&small_snapshot(), Some("custom.json"))
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('{'));
    }

    #[test]
    fn export_is_byte_identical_across_runs() {
        let dir = tempdir().unwrap();
        let exporter = exporter_at(dir.path());
        let snapshot = small_snapshot();
        let a = exporter.export_snapshot(&snapshot, Some("a.json")).unwrap();
        let b = exporter.export_snapshot(&snapshot, Some("b.json")).unwrap();
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }

    #[test]
    fn export_preserves_non_ascii_and_indentation() {
        let dir = tempdir().unwrap();
        let exporter = exporter_at(dir.path());
        let path = exporter.export_snapshot(&small_snapshot(), None).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("Río de época"));
        assert!(!content.contains("\\u00e9"));
        assert!(content.contains("\n  \"year\": 1880"));
    }

    #[test]
    fn export_round_trips_to_equal_snapshot() {
        let dir = tempdir().unwrap();
        let exporter = exporter_at(dir.path());
        let snapshot = small_snapshot();
        let path = exporter.export_snapshot(&snapshot, None).unwrap();
        let parsed: Snapshot =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let exporter = exporter_at(&dir.path().join("does-not-exist"));
        let err = exporter.export_snapshot(&small_snapshot(), None).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn merge_with_fixed_created_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut exporter = exporter_at(dir.path());
        exporter.push_snapshot(small_snapshot());
        let created = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();

        let a = exporter
            .merge_snapshots_with_created(created, Some("m1.json"))
            .unwrap();
        let b = exporter
            .merge_snapshots_with_created(created, Some("m2.json"))
            .unwrap();
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }

    #[test]
    fn merge_writes_project_header_and_default_filename() {
        let dir = tempdir().unwrap();
        let mut exporter = exporter_at(dir.path());
        exporter.push_snapshot(small_snapshot());
        let created = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();

        let path = exporter.merge_snapshots_with_created(created, None).unwrap();
        assert_eq!(path, dir.path().join(DEFAULT_MERGED_FILENAME));

        let document: MergedSnapshots =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(document.project, PROJECT_NAME);
        assert_eq!(document.created, created);
        assert_eq!(document.snapshots.len(), 1);
    }
}
