//! The canonical street record.
//!
//! Unlike buildings, streets have no required fields: a street with no
//! coordinates represents a planned or unverified alignment and is
//! accepted as-is.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A normalized street polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Street {
    /// Street name, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Centerline as `[lon, lat]` pairs, if digitized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<[f64; 2]>>,
    /// Street width in meters (default 10.0).
    pub width: f64,
    /// Surface material ("dirt" when unrecorded).
    pub surface: String,
    /// Year the street was established, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established: Option<i32>,
}
