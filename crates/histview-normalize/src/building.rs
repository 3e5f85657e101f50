//! Canonical building assembly for both source families.
//!
//! Each typed source record is flattened into [`BuildingParts`] and run
//! through a single [`assemble`] step parameterized by the source's
//! [`SourceProfile`]. The differing defaulting rules (height, status,
//! source year, confidence) live in the profile, not in per-source code.

use histview_types::{
    Building, Confidence, DataSource, Dimensions, GisRecord, MaterialEntry, PointLocation,
    SanbornRecord,
};

use crate::error::NormalizeError;
use crate::profile::{
    HeightPolicy, SourceKind, SourceProfile, SourceYearPolicy, StatusPolicy, profile,
};

/// Assumed story height in meters when no surveyed height exists.
pub const STORY_HEIGHT_M: f64 = 4.0;

/// Display name used when a source record carries no name.
pub const DEFAULT_BUILDING_NAME: &str = "Unknown Building";

/// Material recorded when the source is silent.
pub const DEFAULT_MATERIAL: &str = "unknown";

/// Roof shape recorded when the source is silent.
pub const DEFAULT_ROOF_TYPE: &str = "flat";

/// Status recorded when the source is silent (or forced by profile).
pub const DEFAULT_STATUS: &str = "completed";

/// Story count assumed when the source is silent.
pub const DEFAULT_STORIES: u32 = 1;

/// Height in meters derived from a story count.
pub fn derived_height(stories: u32) -> f64 {
    f64::from(stories) * STORY_HEIGHT_M
}

/// Source-agnostic field bundle extracted from a typed record.
///
/// `name` is already resolved (record name, address fallback for GIS,
/// then [`DEFAULT_BUILDING_NAME`]) so the missing-coordinates error can
/// identify the record.
#[derive(Debug)]
struct BuildingParts {
    name: String,
    coordinates: Option<[f64; 2]>,
    built: Option<i32>,
    material: Option<String>,
    materials: Option<Vec<MaterialEntry>>,
    stories: Option<u32>,
    dimensions: Dimensions,
    surveyed_height: Option<f64>,
    roof_type: Option<String>,
    architect: Option<String>,
    year_completed: Option<i32>,
    status: Option<String>,
    source_name_override: Option<String>,
    survey_year: Option<i32>,
    confidence_override: Option<Confidence>,
    raw_reference: Option<String>,
}

/// Normalize a Sanborn sheet record into a canonical [`Building`].
///
/// Defaults applied when the record is silent: name "Unknown Building",
/// material "unknown", stories 1, roof type "flat", status "completed",
/// confidence high. Height is always `stories * 4.0`; Sanborn sheets
/// never carry a measured height.
///
/// # Errors
///
/// Returns [`NormalizeError::MissingCoordinates`] if the record has no
/// `[lon, lat]` anchor.
pub fn normalize_sanborn(record: &SanbornRecord) -> Result<Building, NormalizeError> {
    let parts = BuildingParts {
        name: record
            .name
            .clone()
            .unwrap_or_else(|| String::from(DEFAULT_BUILDING_NAME)),
        coordinates: record.coordinates,
        built: record.year_built,
        material: record.material.clone(),
        materials: record.materials.clone(),
        stories: record.stories,
        dimensions: Dimensions {
            length: record.length_meters,
            width: record.width_meters,
            area_m2: record.area_m2,
            footprint_accuracy_m: record.footprint_accuracy_m,
        },
        surveyed_height: None,
        roof_type: record.roof_type.clone(),
        architect: record.architect.clone(),
        year_completed: record.year_completed,
        status: record.status.clone(),
        source_name_override: None,
        survey_year: record.sanborn_year,
        confidence_override: record.confidence,
        raw_reference: record.raw_reference.clone(),
    };
    assemble(parts, &profile(SourceKind::Sanborn), None)
}

/// Normalize a county GIS record into a canonical [`Building`].
///
/// The display name falls back to the street address. A surveyed height
/// wins over the story-derived estimate. Status is unconditionally
/// "completed" and confidence unconditionally very high: GIS describes
/// currently-standing structures and is the most trusted tier.
/// `processing_year` becomes `dataSource.year` -- the record reflects
/// present-day cadastral data, not a historical survey.
///
/// # Errors
///
/// Returns [`NormalizeError::MissingCoordinates`] if the record has no
/// `[lon, lat]` anchor.
pub fn normalize_gis(record: &GisRecord, processing_year: i32) -> Result<Building, NormalizeError> {
    let parts = BuildingParts {
        name: record
            .name
            .clone()
            .or_else(|| record.address.clone())
            .unwrap_or_else(|| String::from(DEFAULT_BUILDING_NAME)),
        coordinates: record.coordinates,
        built: record.year_built,
        material: record.material.clone(),
        materials: None,
        stories: record.stories,
        dimensions: Dimensions {
            length: record.length,
            width: record.width,
            area_m2: None,
            footprint_accuracy_m: None,
        },
        surveyed_height: record.height,
        roof_type: record.roof_type.clone(),
        architect: None,
        year_completed: None,
        status: None,
        source_name_override: record.source.clone(),
        survey_year: None,
        confidence_override: None,
        raw_reference: None,
    };
    assemble(parts, &profile(SourceKind::Gis), Some(processing_year))
}

/// Assemble a canonical [`Building`] from extracted parts under a
/// source profile.
fn assemble(
    parts: BuildingParts,
    source: &SourceProfile,
    processing_year: Option<i32>,
) -> Result<Building, NormalizeError> {
    let Some(coordinates) = parts.coordinates else {
        return Err(NormalizeError::MissingCoordinates {
            kind: source.kind,
            name: parts.name,
        });
    };

    let stories = parts.stories.unwrap_or(DEFAULT_STORIES);

    let height = match source.height_policy {
        HeightPolicy::DeriveFromStories => derived_height(stories),
        HeightPolicy::PreferSurveyed => parts
            .surveyed_height
            .unwrap_or_else(|| derived_height(stories)),
    };

    let status = match source.status_policy {
        StatusPolicy::RecordOrDefault => parts
            .status
            .unwrap_or_else(|| String::from(DEFAULT_STATUS)),
        StatusPolicy::AlwaysCompleted => String::from(DEFAULT_STATUS),
    };

    let source_year = match source.year_policy {
        SourceYearPolicy::SurveyYear => parts.survey_year,
        SourceYearPolicy::ProcessingYear => processing_year,
    };

    let building = Building {
        name: parts.name,
        location: PointLocation::new(coordinates),
        built: parts.built,
        material: parts
            .material
            .unwrap_or_else(|| String::from(DEFAULT_MATERIAL)),
        materials: parts.materials,
        stories,
        dimensions: parts.dimensions,
        height,
        roof_type: parts
            .roof_type
            .unwrap_or_else(|| String::from(DEFAULT_ROOF_TYPE)),
        architect: parts.architect,
        year_completed: parts.year_completed,
        status,
        data_source: DataSource {
            name: parts
                .source_name_override
                .unwrap_or_else(|| String::from(source.source_name)),
            year: source_year,
            confidence: parts
                .confidence_override
                .unwrap_or(source.default_confidence),
            raw_reference: parts.raw_reference,
        },
    };

    tracing::debug!(
        name = %building.name,
        source = source.source_name,
        "normalized building record"
    );
    Ok(building)
}
