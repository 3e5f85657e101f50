//! Source-record normalization for the Saint Paul Historical 3D Viewer
//! data pipeline.
//!
//! This crate maps loosely-structured per-source records (Sanborn map
//! attributes, county GIS attributes) into the canonical building and
//! street schema from `histview-types`, applying source-specific
//! defaults through a static profile table. Everything here is pure and
//! synchronous; file output lives in `histview-export`.
//!
//! # Modules
//!
//! - [`profile`] -- Per-source defaulting rules ([`SourceProfile`])
//!   looked up by [`SourceKind`]
//! - [`building`] -- Canonical building assembly for both source
//!   families
//! - [`street`] -- Street normalization (no required fields)
//! - [`scoring`] -- Static per-source confidence scores
//! - [`error`] -- The missing-coordinates failure

pub mod building;
pub mod error;
pub mod profile;
pub mod scoring;
pub mod street;

// Re-export primary items at crate root.
pub use building::{
    DEFAULT_BUILDING_NAME, DEFAULT_MATERIAL, DEFAULT_ROOF_TYPE, DEFAULT_STATUS, DEFAULT_STORIES,
    STORY_HEIGHT_M, derived_height, normalize_gis, normalize_sanborn,
};
pub use error::NormalizeError;
pub use profile::{
    HeightPolicy, SourceKind, SourceProfile, SourceYearPolicy, StatusPolicy, profile,
};
pub use scoring::{UNKNOWN_SOURCE_SCORE, confidence_score, source_score};
pub use street::{DEFAULT_STREET_WIDTH_M, DEFAULT_SURFACE, normalize_street};
