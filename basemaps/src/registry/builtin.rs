//! Reference basemap configuration.
//!
//! Earth uses swisstopo services; the other bodies use the USGS
//! Astrogeology planetary map server in geographic coordinates.

use crate::basemap::{BasemapDefinition, SourceType, TileFormat};

const SWISSTOPO_ATTRIBUTION: &str = "&copy; swisstopo";
const USGS_ATTRIBUTION: &str = "USGS Astrogeology";
const USGS_MAPSERV: &str = "https://planetarymaps.usgs.gov/cgi-bin/mapserv";

/// Body identifiers and their basemaps, in registry order.
pub(super) fn builtin_bodies() -> Vec<(&'static str, Vec<BasemapDefinition>)> {
    vec![
        ("earth", earth()),
        (
            "europa",
            vec![usgs_wms(
                "jupiter/europa_simp_cyl.map",
                "USGS Europa",
                "GALILEO_VOYAGER",
            )],
        ),
        (
            "mars",
            vec![usgs_wms("mars/mars_simp_cyl.map", "USGS Mars", "MDIM21")],
        ),
        (
            "moon",
            vec![usgs_wms("earth/moon_simp_cyl.map", "USGS Moon", "LROC_WAC")],
        ),
    ]
}

fn earth() -> Vec<BasemapDefinition> {
    vec![
        BasemapDefinition::new(
            SourceType::VectorTile,
            "https://vectortiles.geo.admin.ch/tiles/ch.swisstopo.base.vt/v1.0.0/{z}/{x}/{y}.pbf",
            "Swisstopo VectorTiles",
        )
        .with_attributions(SWISSTOPO_ATTRIBUTION)
        .with_projection("EPSG:2056")
        .with_format(TileFormat::Mvt),
        BasemapDefinition::new(SourceType::Wms, "https://wms.geo.admin.ch/", "Swisstopo WMS")
            .with_attributions(SWISSTOPO_ATTRIBUTION)
            .with_projection("EPSG:2056")
            .with_param("LAYERS", "ch.swisstopo.landeskarte-farbe-10")
            .with_param("FORMAT", "image/png"),
        BasemapDefinition::new(
            SourceType::Xyz,
            "https://wmts.geo.admin.ch/1.0.0/ch.swisstopo.swissimage/default/current/3857/{z}/{x}/{y}.jpeg",
            "Swisstopo XYZ",
        )
        .with_attributions(SWISSTOPO_ATTRIBUTION)
        .with_projection("EPSG:3857"),
    ]
}

fn usgs_wms(map: &str, title: &str, layers: &str) -> BasemapDefinition {
    BasemapDefinition::new(
        SourceType::Wms,
        format!("{}?map=/maps/{}", USGS_MAPSERV, map),
        title,
    )
    .with_attributions(USGS_ATTRIBUTION)
    .with_projection("EPSG:4326")
    .with_param("FORMAT", "image/png")
    .with_param("LAYERS", layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_titles() {
        let bodies = builtin_bodies();
        let (_, earth) = bodies
            .iter()
            .find(|(body, _)| *body == "earth")
            .expect("earth is built in");

        let titles: Vec<_> = earth.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Swisstopo VectorTiles", "Swisstopo WMS", "Swisstopo XYZ"]
        );
    }

    #[test]
    fn test_titles_have_no_surrounding_whitespace() {
        for (body, definitions) in builtin_bodies() {
            for definition in definitions {
                assert_eq!(
                    definition.title.trim(),
                    definition.title,
                    "{} has an untrimmed title",
                    body
                );
            }
        }
    }
}
