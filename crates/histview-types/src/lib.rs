//! Shared type definitions for the Saint Paul Historical 3D Viewer
//! data pipeline.
//!
//! This crate is the single source of truth for the snapshot schema.
//! Canonical output types flow downstream to `TypeScript` via `ts-rs`
//! for the viewer frontend.
//!
//! # Modules
//!
//! - [`building`] -- Canonical building record and embedded value types
//! - [`street`] -- Canonical street polyline record
//! - [`snapshot`] -- Per-year snapshot container and merged document
//! - [`records`] -- Typed per-source input records (Sanborn, GIS, street)

pub mod building;
pub mod records;
pub mod snapshot;
pub mod street;

// Re-export all public types at crate root for convenience.
pub use building::{
    Building, Confidence, DataSource, Dimensions, MaterialEntry, PointLocation,
};
pub use records::{GisRecord, SanbornRecord, StreetRecord};
pub use snapshot::{MergedSnapshots, PROJECT_NAME, Snapshot};
pub use street::Street;

#[cfg(test)]
mod tests {
    //! Integration tests for `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers
        // generation into the crate-local `bindings/` directory.
        use ts_rs::TS;

        let _ = crate::building::Building::export_all();
        let _ = crate::building::PointLocation::export_all();
        let _ = crate::building::Dimensions::export_all();
        let _ = crate::building::MaterialEntry::export_all();
        let _ = crate::building::DataSource::export_all();
        let _ = crate::building::Confidence::export_all();
        let _ = crate::street::Street::export_all();
        let _ = crate::snapshot::Snapshot::export_all();
        let _ = crate::snapshot::MergedSnapshots::export_all();
    }
}
