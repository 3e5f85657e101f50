//! Snapshot aggregation and flat-JSON export for the Saint Paul
//! Historical 3D Viewer.
//!
//! This crate is the file-facing half of the pipeline: it owns the
//! in-memory snapshot list, applies the normalizers from
//! `histview-normalize` while preserving insertion order, and writes
//! per-snapshot and merged JSON documents in the exact shape the viewer
//! loads. Execution is single-threaded and synchronous throughout.
//!
//! # Modules
//!
//! - [`config`] -- Output directory and processing-year configuration
//! - [`exporter`] -- The [`SnapshotExporter`] aggregator and JSON writer
//! - [`error`] -- I/O and serialization failures

pub mod config;
pub mod error;
pub mod exporter;

// Re-export primary types for convenience.
pub use config::{DEFAULT_OUTPUT_DIR, ExportConfig};
pub use error::ExportError;
pub use exporter::{DEFAULT_MERGED_FILENAME, SnapshotExporter};
