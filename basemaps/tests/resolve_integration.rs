//! Integration tests for basemap resolution.
//!
//! These tests drive the public API end to end: STAC JSON documents are
//! classified, their targets extracted, and the targets resolved against the
//! built-in registry and against registry documents loaded from disk.

use basemaps::basemap::{BasemapDefinition, SourceType};
use basemaps::catalog::{CatalogResource, StacObject};
use basemaps::configure::{configure_basemap, Locale};
use basemaps::registry::{resolve_basemaps, BasemapRegistry, RegistryError};
use basemaps::target::resolve_targets;
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

fn stac(value: Value) -> StacObject {
    StacObject::from_value(value).expect("fixture should be a STAC object")
}

fn targets_of(value: Value) -> Vec<String> {
    let resource = StacObject::from_value(value);
    resolve_targets(resource.as_ref().map(|r| r as &dyn CatalogResource))
}

fn titles(layers: &[&BasemapDefinition]) -> Vec<String> {
    layers.iter().map(|d| d.title.clone()).collect()
}

// =============================================================================
// Target extraction
// =============================================================================

#[test]
fn test_non_catalog_inputs_default_to_earth() {
    assert_eq!(resolve_targets(None), vec!["earth"]);
    assert_eq!(targets_of(Value::Null), vec!["earth"]);
    assert_eq!(targets_of(json!({"ssys:targets": ["mars"]})), vec!["earth"]);
    assert_eq!(targets_of(json!(["mars"])), vec!["earth"]);
}

#[test]
fn test_collection_summaries_unchanged() {
    let targets = targets_of(json!({
        "type": "Collection",
        "id": "mars-hirise",
        "summaries": {"ssys:targets": ["Mars", "Moon"]}
    }));

    assert_eq!(targets, vec!["Mars", "Moon"]);
}

#[test]
fn test_collection_top_level_targets() {
    let targets = targets_of(json!({
        "type": "Collection",
        "ssys:targets": ["Europa"],
        "summaries": {"platform": ["galileo"]}
    }));

    assert_eq!(targets, vec!["Europa"]);
}

#[test]
fn test_item_properties_targets() {
    let targets = targets_of(json!({
        "type": "Feature",
        "properties": {"ssys:targets": ["europa"], "datetime": null}
    }));

    assert_eq!(targets, vec!["europa"]);
}

#[test]
fn test_catalog_defaults_to_earth() {
    let targets = targets_of(json!({
        "type": "Catalog",
        "ssys:targets": ["mars"]
    }));

    assert_eq!(targets, vec!["earth"]);
}

#[test]
fn test_malformed_metadata_falls_back() {
    let targets = targets_of(json!({
        "type": "Feature",
        "properties": {"ssys:targets": "mars"}
    }));
    assert_eq!(targets, vec!["earth"]);

    let targets = targets_of(json!({"type": "Feature", "properties": 7}));
    assert_eq!(targets, vec!["earth"]);
}

#[test]
fn test_mixed_target_array_keeps_its_strings() {
    let registry = BasemapRegistry::builtin();

    let collection = stac(json!({
        "type": "Collection",
        "summaries": {"ssys:targets": ["Mars", 42]},
        "ssys:targets": ["moon"]
    }));
    let layers = configure_basemap(Some(&collection), &Locale::default(), &registry);
    assert_eq!(titles(&layers), vec!["USGS Mars"]);

    let item = stac(json!({
        "type": "Feature",
        "properties": {"ssys:targets": ["mars", null]}
    }));
    let layers = configure_basemap(Some(&item), &Locale::default(), &registry);
    assert_eq!(titles(&layers), vec!["USGS Mars"]);
}

// =============================================================================
// Registry resolution
// =============================================================================

#[test]
fn test_earth_list_in_registered_order() {
    let registry = BasemapRegistry::builtin();
    let layers = resolve_basemaps(&registry, &["earth"]);

    let sources: Vec<_> = layers.iter().map(|d| d.source_type).collect();
    assert_eq!(
        sources,
        vec![SourceType::VectorTile, SourceType::Wms, SourceType::Xyz]
    );
}

#[test]
fn test_mars_lookup_case_insensitive() {
    let registry = BasemapRegistry::builtin();
    let layers = resolve_basemaps(&registry, &["Mars"]);

    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].source_type, SourceType::Wms);
    assert_eq!(layers[0].projection, "EPSG:4326");
}

#[test]
fn test_unknown_body_contributes_nothing() {
    let registry = BasemapRegistry::builtin();
    let layers = resolve_basemaps(&registry, &["mars", "pluto"]);
    assert_eq!(titles(&layers), vec!["USGS Mars"]);
}

#[test]
fn test_empty_targets_empty_result() {
    let registry = BasemapRegistry::builtin();
    let targets: Vec<String> = Vec::new();
    assert!(resolve_basemaps(&registry, &targets).is_empty());
}

#[test]
fn test_repeated_body_repeats_list() {
    let registry = BasemapRegistry::builtin();
    let layers = resolve_basemaps(&registry, &["earth", "earth"]);
    let earth = resolve_basemaps(&registry, &["earth"]);

    assert_eq!(layers.len(), 2 * earth.len());
    assert_eq!(layers[..earth.len()], earth[..]);
    assert_eq!(layers[earth.len()..], earth[..]);
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn test_configure_item_for_moon() {
    let registry = BasemapRegistry::builtin();
    let item = stac(json!({
        "type": "Feature",
        "id": "lroc-wac-001",
        "properties": {"ssys:targets": ["Moon"]}
    }));

    let layers = configure_basemap(Some(&item), &Locale::default(), &registry);
    assert_eq!(titles(&layers), vec!["USGS Moon"]);
    assert_eq!(layers[0].param("LAYERS"), Some("LROC_WAC"));
}

#[test]
fn test_configure_with_registry_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    std::fs::write(
        &path,
        json!({
            "Titan": [
                {
                    "source": "XYZ",
                    "url": "https://tiles.example.org/titan/{z}/{x}/{y}.png",
                    "title": "Titan Mosaic",
                    "attributions": "Cassini"
                }
            ],
            "earth": [
                {
                    "source": "VectorTile",
                    "url": "https://tiles.example.org/earth/{z}/{x}/{y}.pbf",
                    "title": "Earth Vectors"
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    let registry = BasemapRegistry::load_from(&path).unwrap();
    let collection = stac(json!({
        "type": "Collection",
        "summaries": {"ssys:targets": ["TITAN", "mars"]}
    }));

    let layers = configure_basemap(Some(&collection), &Locale::new("en"), &registry);
    assert_eq!(titles(&layers), vec!["Titan Mosaic"]);

    let earth = configure_basemap(None, &Locale::default(), &registry);
    assert_eq!(titles(&earth), vec!["Earth Vectors"]);
    assert!(earth[0].format.is_some());
}

#[test]
fn test_invalid_registry_document_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    std::fs::write(
        &path,
        json!({"mars": [{"source": "WMS", "url": "https://wms", "title": "No layers"}]})
            .to_string(),
    )
    .unwrap();

    let result = BasemapRegistry::load_from(&path);
    assert!(matches!(
        result,
        Err(RegistryError::MissingWmsLayers { index: 0, .. })
    ));
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = std::sync::Arc::new(BasemapRegistry::builtin());

    let handles: Vec<_> = ["earth", "mars", "moon", "europa"]
        .into_iter()
        .map(|body| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.resolve_basemaps(&[body]).len())
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![3, 1, 1, 1]);
}
