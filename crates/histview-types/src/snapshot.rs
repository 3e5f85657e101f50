//! Snapshot containers: the per-year time slice and the merged document.
//!
//! A [`Snapshot`] is created empty, mutated by appending buildings and
//! streets, and treated as immutable once serialized. The merged document
//! ([`MergedSnapshots`]) is the single-file form the viewer loads at
//! startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::building::Building;
use crate::street::Street;

/// Project name written into the merged document header.
pub const PROJECT_NAME: &str = "Saint Paul Historical 3D Viewer";

/// A named historical time slice containing buildings and streets for one
/// year/era.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Snapshot {
    /// The year this snapshot represents.
    pub year: i32,
    /// Human-readable era label (e.g. "Late Victorian Era").
    pub era: String,
    /// Narrative description of the city at this point in time.
    pub description: String,
    /// City population in the snapshot year.
    pub population: u32,
    /// Normalized buildings, in insertion order.
    pub buildings: Vec<Building>,
    /// Normalized streets, in insertion order.
    pub streets: Vec<Street>,
    /// Source catalog references. Currently unpopulated; reserved for
    /// the viewer's attribution panel.
    #[serde(rename = "dataSources")]
    pub data_sources: Vec<String>,
}

impl Snapshot {
    /// Create an empty snapshot container.
    ///
    /// No validation is performed on the inputs; any year, era,
    /// description, or population is accepted as-is.
    pub const fn new(year: i32, era: String, description: String, population: u32) -> Self {
        Self {
            year,
            era,
            description,
            population,
            buildings: Vec::new(),
            streets: Vec::new(),
            data_sources: Vec::new(),
        }
    }
}

/// The merged multi-snapshot document (`historical-snapshots.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MergedSnapshots {
    /// Project identifier, always [`PROJECT_NAME`].
    pub project: String,
    /// Timestamp of the merge run (ISO-8601).
    pub created: DateTime<Utc>,
    /// All accumulated snapshots, in accumulation order.
    pub snapshots: Vec<Snapshot>,
}
