//! Tests for crime type and location normalization

use crate::app::services::field_normalizers::{
    AbbreviationTable, normalize_crime_type, normalize_location,
};

#[test]
fn test_crime_type_drops_related() {
    assert_eq!(normalize_crime_type("Alcohol Related"), "Alcohol");
    assert_eq!(normalize_crime_type("Drug-Related Incident"), "Drug Incident");
    assert_eq!(normalize_crime_type("Unrelated Call"), "Unrelated Call");
}

#[test]
fn test_crime_type_expands_abbreviations() {
    assert_eq!(normalize_crime_type("BURG"), "BURGLARY");
    assert_eq!(normalize_crime_type("Burg"), "Burglary");
    assert_eq!(
        normalize_crime_type("THEFT FM MTR"),
        "THEFT FROM MOTOR VEHICLE"
    );
    assert_eq!(normalize_crime_type("FOUND PROP."), "FOUND PROPERTY");
    assert_eq!(normalize_crime_type("Burglary"), "Burglary");
}

#[test]
fn test_crime_type_collapses_whitespace() {
    assert_eq!(normalize_crime_type("  Theft   of\nBicycle "), "Theft of Bicycle");
}

#[test]
fn test_location_drops_on_campus_suffix() {
    assert_eq!(normalize_location("Parking Lot 4 - On Campus"), "Parking Lot 4");
    assert_eq!(normalize_location("Parking Lot 4 - ON CAMPUS "), "Parking Lot 4");
    assert_eq!(normalize_location("On Campus Housing"), "On Campus Housing");
    assert_eq!(normalize_location("Hall - On Campus - On Campus"), "Hall");
}

#[test]
fn test_location_collapses_line_breaks() {
    assert_eq!(normalize_location("Lobby,\n  Hall"), "Lobby, Hall");
}

#[test]
fn test_custom_abbreviation_table_prefers_longest() {
    let table = AbbreviationTable::new(&[("ST", "STREET"), ("ST PK", "STATE PARK")]).unwrap();
    assert_eq!(table.expand("Lake St Pk"), "Lake State Park");
    assert_eq!(table.expand("main st"), "main street");
}
