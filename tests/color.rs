//! Validates zone color assignment, default extraction and duplicate warnings

use std::collections::{BTreeMap, HashMap};

use calepin::color::{Rgb, Swatch, SwatchCatalog, ZoneColorStore};

fn swatch(hex: &str, name: &str) -> Swatch {
    Swatch {
        hex: hex.to_string(),
        name: name.to_string(),
        code: format!("REF-{name}"),
        pantone: None,
        ral: None,
        is_public: true,
    }
}

#[test]
fn nearest_extraction_snaps_to_black_for_near_black() {
    let catalog = SwatchCatalog::new(vec![
        swatch("#000000", "noir"),
        swatch("#ffffff", "blanc"),
    ]);
    let mut fills = BTreeMap::new();
    fills.insert("zone-1".to_string(), "#101010".to_string());

    let mut store = ZoneColorStore::new();
    store.extract_default_colors(&fills, &HashMap::new(), &catalog);
    assert_eq!(store.color("zone-1"), Some("#000000"));
}

#[test]
fn exact_catalog_match_adopts_canonical_hex() {
    let catalog = SwatchCatalog::new(vec![swatch("#C86448", "terracotta")]);
    let mut fills = BTreeMap::new();
    fills.insert("zone-1".to_string(), "rgb(200, 100, 72)".to_string());

    let mut store = ZoneColorStore::new();
    store.extract_default_colors(&fills, &HashMap::new(), &catalog);
    assert_eq!(store.color("zone-1"), Some("#c86448"));
}

#[test]
fn named_fills_resolve_before_matching() {
    let catalog = SwatchCatalog::new(vec![
        swatch("#fefefe", "blanc casse"),
        swatch("#010101", "presque noir"),
    ]);
    let mut names = HashMap::new();
    names.insert("white".to_string(), "#ffffff".to_string());
    let mut fills = BTreeMap::new();
    fills.insert("zone-1".to_string(), "white".to_string());

    let mut store = ZoneColorStore::new();
    store.extract_default_colors(&fills, &names, &catalog);
    assert_eq!(store.color("zone-1"), Some("#fefefe"));
}

#[test]
fn duplicate_zone_colors_are_flagged() {
    let mut store = ZoneColorStore::new();
    store.set_zone_color("zoneA", "#ff0000").unwrap();
    store.set_zone_color("zoneB", "#ff0000").unwrap();
    assert!(store.has_duplicate_colors());

    store.set_zone_color("zoneB", "#00ff00").unwrap();
    assert!(!store.has_duplicate_colors());
}

#[test]
fn rejected_assignment_keeps_previous_color() {
    let mut store = ZoneColorStore::new();
    store.set_zone_color("zone-1", "#336699").unwrap();

    assert!(store.set_zone_color("zone-1", "rgb(1,2,3,4,5)").is_err());
    assert!(store.set_zone_color("zone-1", "#12345g").is_err());
    assert_eq!(store.color("zone-1"), Some("#336699"));
}

#[test]
fn three_digit_inputs_normalize_before_duplicate_checks() {
    let mut store = ZoneColorStore::new();
    store.set_zone_color("zone-1", "#f00").unwrap();
    store.set_zone_color("zone-2", "FF0000").unwrap();
    assert!(store.has_duplicate_colors());
}

#[test]
fn distance_ties_resolve_to_catalog_order() {
    let catalog = SwatchCatalog::new(vec![
        swatch("#000000", "premier"),
        swatch("#808080", "second"),
    ]);
    // #404040 is equidistant from both entries
    let target = Rgb { r: 64, g: 64, b: 64 };
    assert_eq!(
        catalog.nearest(target).map(|s| s.name.as_str()),
        Some("premier")
    );
}
