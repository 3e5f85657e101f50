//! Street normalization.
//!
//! Streets deliberately have no required fields: an alignment may be
//! known to have existed without a digitized centerline. This asymmetry
//! with buildings is intentional.

use histview_types::{Street, StreetRecord};

/// Street width in meters assumed when unrecorded.
pub const DEFAULT_STREET_WIDTH_M: f64 = 10.0;

/// Surface material assumed when unrecorded.
pub const DEFAULT_SURFACE: &str = "dirt";

/// Normalize a street record into a canonical [`Street`].
///
/// Infallible: every field degrades to a default or stays absent.
pub fn normalize_street(record: &StreetRecord) -> Street {
    let street = Street {
        name: record.name.clone(),
        coordinates: record.coordinates.clone(),
        width: record.width_meters.unwrap_or(DEFAULT_STREET_WIDTH_M),
        surface: record
            .surface
            .clone()
            .unwrap_or_else(|| String::from(DEFAULT_SURFACE)),
        established: record.established_year,
    };
    tracing::debug!(name = ?street.name, "normalized street record");
    street
}
