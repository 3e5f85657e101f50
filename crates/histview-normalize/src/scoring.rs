//! Static per-source confidence scoring.
//!
//! Advisory utility for downstream display and weighting. It is not
//! wired into the export path; callers invoke it separately when they
//! need a numeric trust weight instead of the categorical label.

use histview_types::Building;

/// Score returned for a source name not in the table.
pub const UNKNOWN_SOURCE_SCORE: f64 = 0.50;

/// Compute a trust weight in `[0, 1]` for a building's data source.
///
/// Pure lookup on `dataSource.name`; unknown names score
/// [`UNKNOWN_SOURCE_SCORE`]. The score weights display, it never
/// filters records.
pub fn confidence_score(building: &Building) -> f64 {
    source_score(&building.data_source.name)
}

/// Trust weight for a source name.
pub fn source_score(name: &str) -> f64 {
    match name {
        "Sanborn Fire Insurance Map" => 0.90,
        "Ramsey County GIS" | "Architectural drawing" => 0.95,
        "Historical photograph" => 0.70,
        "Tax assessor record" => 0.80,
        "Historical society" => 0.75,
        _ => UNKNOWN_SOURCE_SCORE,
    }
}
