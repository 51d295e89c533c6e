//! Basemap definition types

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Projection assumed when a definition does not name one.
pub const DEFAULT_PROJECTION: &str = "EPSG:3857";

/// Projections every front end knows without extra registration.
pub const STANDARD_PROJECTIONS: [&str; 2] = ["EPSG:3857", "EPSG:4326"];

/// Wire protocol or tile scheme used by a basemap source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    /// OGC Web Map Service, tiled requests with query parameters
    #[serde(rename = "WMS")]
    Wms,
    /// `{z}/{x}/{y}` URL template
    #[serde(rename = "XYZ")]
    Xyz,
    /// Vector tiles decoded client-side
    #[serde(rename = "VectorTile")]
    VectorTile,
}

impl SourceType {
    /// Returns the name used in registry documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Wms => "WMS",
            SourceType::Xyz => "XYZ",
            SourceType::VectorTile => "VectorTile",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoder handle for vector tile payloads.
///
/// Opaque to the resolver; the layer builder picks its decoder from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileFormat {
    /// Mapbox Vector Tile (protobuf)
    #[default]
    Mvt,
}

/// One selectable map layer source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasemapDefinition {
    /// Protocol the layer uses
    #[serde(rename = "source")]
    pub source_type: SourceType,

    /// Endpoint or URL template
    pub url: String,

    /// Human-readable label
    pub title: String,

    /// Copyright / credit text
    #[serde(default)]
    pub attributions: String,

    /// Coordinate reference system identifier
    #[serde(default = "default_projection")]
    pub projection: String,

    /// Protocol-specific query parameters (WMS)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,

    /// Vector tile decoder (VectorTile sources only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TileFormat>,
}

fn default_projection() -> String {
    DEFAULT_PROJECTION.to_string()
}

impl BasemapDefinition {
    /// Create a definition with empty attributions and the default projection.
    pub fn new(source_type: SourceType, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source_type,
            url: url.into(),
            title: title.into(),
            attributions: String::new(),
            projection: default_projection(),
            params: None,
            format: None,
        }
    }

    /// Set the attribution text.
    pub fn with_attributions(mut self, attributions: impl Into<String>) -> Self {
        self.attributions = attributions.into();
        self
    }

    /// Set the projection identifier.
    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }

    /// Add a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the vector tile decoder.
    pub fn with_format(mut self, format: TileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Look up a query parameter by name, ignoring case.
    ///
    /// WMS parameter names are case-insensitive on the wire.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.as_ref().and_then(|params| {
            params
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str())
        })
    }

    /// Returns true when the projection must be registered by the front end
    /// before this layer can be displayed.
    pub fn uses_custom_projection(&self) -> bool {
        !STANDARD_PROJECTIONS.contains(&self.projection.as_str())
    }
}
