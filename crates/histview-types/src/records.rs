//! Typed per-source input records.
//!
//! These are the shapes the data-preparation tooling hands to the
//! normalizer: every field is optional except where a hard requirement
//! exists downstream (building coordinates, enforced at normalization
//! time, not here). Modeling absence as `Option` instead of dynamic key
//! lookup surfaces missing-field errors at construction.

use serde::{Deserialize, Serialize};

use crate::building::{Confidence, MaterialEntry};

/// A building record digitized from a Sanborn fire-insurance sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SanbornRecord {
    /// Building name as annotated on the sheet.
    pub name: Option<String>,
    /// `[lon, lat]` anchor point. Required downstream.
    pub coordinates: Option<[f64; 2]>,
    /// Construction year.
    pub year_built: Option<i32>,
    /// Primary construction material.
    pub material: Option<String>,
    /// Material breakdown, if the sheet distinguishes sections.
    pub materials: Option<Vec<MaterialEntry>>,
    /// Number of stories.
    pub stories: Option<u32>,
    /// Footprint length in meters.
    pub length_meters: Option<f64>,
    /// Footprint width in meters.
    pub width_meters: Option<f64>,
    /// Footprint area in square meters.
    pub area_m2: Option<f64>,
    /// Positional accuracy of the digitized footprint in meters.
    #[serde(rename = "footprintAccuracy_m")]
    pub footprint_accuracy_m: Option<f64>,
    /// Roof shape as annotated.
    pub roof_type: Option<String>,
    /// Architect of record.
    pub architect: Option<String>,
    /// Completion year.
    pub year_completed: Option<i32>,
    /// Construction status at survey time.
    pub status: Option<String>,
    /// Year of the Sanborn survey this sheet belongs to.
    pub sanborn_year: Option<i32>,
    /// Digitizer-assigned confidence override.
    pub confidence: Option<Confidence>,
    /// Sheet/plate reference in the source archive.
    pub raw_reference: Option<String>,
}

/// A building record exported from county GIS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GisRecord {
    /// Building name, if the parcel carries one.
    pub name: Option<String>,
    /// Street address; used as the display name when `name` is absent.
    pub address: Option<String>,
    /// `[lon, lat]` anchor point. Required downstream.
    pub coordinates: Option<[f64; 2]>,
    /// Construction year from tax records.
    pub year_built: Option<i32>,
    /// Primary construction material.
    pub material: Option<String>,
    /// Number of stories.
    pub stories: Option<u32>,
    /// Footprint length in meters.
    pub length: Option<f64>,
    /// Footprint width in meters.
    pub width: Option<f64>,
    /// Surveyed height in meters. GIS is the only source tier that may
    /// carry a true height.
    pub height: Option<f64>,
    /// Roof shape.
    pub roof_type: Option<String>,
    /// Originating dataset name (defaults to "Ramsey County GIS").
    pub source: Option<String>,
}

/// A street record from either source family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreetRecord {
    /// Street name.
    pub name: Option<String>,
    /// Centerline as `[lon, lat]` pairs.
    pub coordinates: Option<Vec<[f64; 2]>>,
    /// Street width in meters.
    pub width_meters: Option<f64>,
    /// Surface material.
    pub surface: Option<String>,
    /// Year the street was established.
    pub established_year: Option<i32>,
}
