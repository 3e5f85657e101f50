//! End-to-end pipeline test: the 1895 Late Victorian Era scenario.
//!
//! Builds one snapshot from a Sanborn building and a street record,
//! exports it, and verifies the written JSON field-for-field against
//! the viewer's expectations.

#![allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]

use std::fs;

use tempfile::tempdir;

use histview_export::{ExportConfig, SnapshotExporter};
use histview_types::{SanbornRecord, Snapshot, StreetRecord};

#[test]
fn late_victorian_snapshot_exports_expected_document() {
    let dir = tempdir().unwrap();
    let exporter = SnapshotExporter::new(
        ExportConfig::default()
            .with_output_dir(dir.path())
            .with_processing_year(2026),
    );

    let mut snapshot = SnapshotExporter::create_snapshot(
        1895,
        String::from("Late Victorian Era"),
        String::from("Saint Paul during the height of railroad expansion"),
        163_000,
    );

    exporter
        .add_building_from_sanborn(
            &mut snapshot,
            &SanbornRecord {
                name: Some(String::from("State Capitol (Under Construction)")),
                coordinates: Some([-93.1044, 44.9550]),
                year_built: Some(1895),
                material: Some(String::from("limestone")),
                stories: Some(4),
                length_meters: Some(110.0),
                width_meters: Some(67.0),
                roof_type: Some(String::from("dome")),
                status: Some(String::from("under_construction")),
                sanborn_year: Some(1895),
                ..SanbornRecord::default()
            },
        )
        .unwrap();

    exporter.add_street(
        &mut snapshot,
        &StreetRecord {
            name: Some(String::from("Wabasha Street")),
            coordinates: Some(vec![[-93.0955, 44.9450], [-93.0955, 44.9550]]),
            width_meters: Some(12.0),
            surface: Some(String::from("cobblestone")),
            established_year: Some(1849),
        },
    );

    let path = exporter.export_snapshot(&snapshot, None).unwrap();
    assert_eq!(path, dir.path().join("snapshot_1895.json"));

    let content = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(json["year"], 1895);
    assert_eq!(json["era"], "Late Victorian Era");
    assert_eq!(json["population"], 163_000);

    let buildings = json["buildings"].as_array().unwrap();
    assert_eq!(buildings.len(), 1);
    assert_eq!(buildings[0]["height"], 16.0);
    assert_eq!(buildings[0]["roofType"], "dome");
    assert_eq!(buildings[0]["location"]["type"], "Point");
    assert_eq!(buildings[0]["location"]["coordinates"][0], -93.1044);
    assert_eq!(buildings[0]["dataSource"]["name"], "Sanborn Fire Insurance Map");
    assert_eq!(buildings[0]["dataSource"]["confidence"], "high");

    let streets = json["streets"].as_array().unwrap();
    assert_eq!(streets.len(), 1);
    assert_eq!(streets[0]["width"], 12.0);
    assert_eq!(streets[0]["surface"], "cobblestone");

    assert_eq!(json["dataSources"], serde_json::json!([]));

    // The in-memory snapshot survives a parse round-trip untouched.
    let parsed: Snapshot = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, snapshot);

    // Rejected records leave the snapshot untouched.
    let before = snapshot.buildings.len();
    let missing = SanbornRecord {
        name: Some(String::from("Unplaceable")),
        ..SanbornRecord::default()
    };
    assert!(exporter
        .add_building_from_sanborn(&mut snapshot, &missing)
        .is_err());
    assert_eq!(snapshot.buildings.len(), before);
}
