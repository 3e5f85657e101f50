//! The canonical building record and its embedded value types.
//!
//! Field names follow the viewer's wire format (`roofType`,
//! `yearCompleted`, `dataSource`); Rust fields stay `snake_case` with
//! explicit serde renames. Optional fields that carry no value are
//! omitted from the JSON entirely, so the GIS variant's naturally
//! smaller key set falls out of the same struct.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A normalized building placed in the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Building {
    /// Display name ("Unknown Building" when the source has none).
    pub name: String,
    /// Geographic anchor point. Always present; a building without a
    /// location cannot be placed in the scene.
    pub location: PointLocation,
    /// Construction year, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built: Option<i32>,
    /// Primary construction material ("unknown" when absent).
    pub material: String,
    /// Material breakdown with optional percentages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<MaterialEntry>>,
    /// Number of stories (default 1).
    pub stories: u32,
    /// Footprint dimensions. Members are individually optional.
    pub dimensions: Dimensions,
    /// Height in meters. Derived as `stories * 4.0` unless the source
    /// supplied a surveyed height.
    pub height: f64,
    /// Roof shape ("flat" when absent).
    #[serde(rename = "roofType")]
    pub roof_type: String,
    /// Architect of record, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architect: Option<String>,
    /// Completion year, if distinct from the construction year.
    #[serde(rename = "yearCompleted", skip_serializing_if = "Option::is_none")]
    pub year_completed: Option<i32>,
    /// Construction status (`"completed"`, `"under_construction"`, ...).
    pub status: String,
    /// Provenance of this record.
    #[serde(rename = "dataSource")]
    pub data_source: DataSource,
}

/// A `GeoJSON`-style point anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PointLocation {
    /// Geometry type discriminator, always `"Point"`.
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// `[longitude, latitude]` pair.
    pub coordinates: [f64; 2],
}

impl PointLocation {
    /// Build a point anchor from a `[lon, lat]` pair.
    pub fn new(coordinates: [f64; 2]) -> Self {
        Self {
            geometry_type: String::from("Point"),
            coordinates,
        }
    }
}

/// Building footprint dimensions in meters.
///
/// The GIS path supplies at most length and width; area and accuracy
/// come from digitized Sanborn sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Dimensions {
    /// Footprint length in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Footprint width in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Footprint area in square meters.
    #[serde(rename = "area_m2", skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<f64>,
    /// Positional accuracy of the digitized footprint in meters.
    #[serde(rename = "footprintAccuracy_m", skip_serializing_if = "Option::is_none")]
    pub footprint_accuracy_m: Option<f64>,
}

/// One entry in a building's material breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MaterialEntry {
    /// Material name (e.g. "limestone").
    pub material: String,
    /// Share of the building using this material, as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// Provenance metadata embedded in every building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DataSource {
    /// Source name (e.g. "Sanborn Fire Insurance Map").
    pub name: String,
    /// Survey year for historical sources; processing year for GIS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Trust tier assigned to this record.
    pub confidence: Confidence,
    /// Pointer back into the raw source (sheet number, parcel ID, ...).
    #[serde(rename = "rawReference", skip_serializing_if = "Option::is_none")]
    pub raw_reference: Option<String>,
}

/// Per-record trust tier used for downstream display and weighting.
///
/// Serialized in `snake_case` to match the viewer's vocabulary
/// (`"very_high"`, `"high"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Modern cadastral data, the most trusted tier.
    VeryHigh,
    /// Digitized survey maps with known provenance.
    High,
    /// Corroborated secondary sources.
    Medium,
    /// Single uncorroborated source.
    Low,
    /// Reconstructed or interpolated values.
    Estimated,
}
