//! Registry document parsing and validation.
//!
//! A registry document is a JSON object whose keys are body identifiers and
//! whose values are arrays of basemap definitions:
//!
//! ```json
//! {
//!   "mars": [
//!     {
//!       "source": "WMS",
//!       "url": "https://planetarymaps.usgs.gov/cgi-bin/mapserv?map=/maps/mars/mars_simp_cyl.map",
//!       "title": "USGS Mars",
//!       "attributions": "USGS Astrogeology",
//!       "projection": "EPSG:4326",
//!       "params": { "FORMAT": "image/png", "LAYERS": "MDIM21" }
//!     }
//!   ]
//! }
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::error::RegistryError;
use crate::basemap::{BasemapDefinition, SourceType, TileFormat};

/// Parse a registry document into (body, definitions) pairs.
pub(super) fn parse_document(
    json: &str,
) -> Result<Vec<(String, Vec<BasemapDefinition>)>, RegistryError> {
    // Body order is irrelevant; definition order within a body is kept.
    let document: Map<String, Value> = serde_json::from_str(json)?;

    document
        .into_iter()
        .map(|(body, definitions)| {
            let definitions: Vec<BasemapDefinition> = serde_json::from_value(definitions)?;
            Ok((body, definitions))
        })
        .collect()
}

/// Validate and normalize body entries into the registry map.
///
/// Body identifiers are lowercased. VectorTile sources without an explicit
/// decoder get [`TileFormat::Mvt`].
pub(super) fn build_entries<I, S>(
    bodies: I,
) -> Result<HashMap<String, Vec<BasemapDefinition>>, RegistryError>
where
    I: IntoIterator<Item = (S, Vec<BasemapDefinition>)>,
    S: AsRef<str>,
{
    let mut entries = HashMap::new();

    for (body, mut definitions) in bodies {
        let body = body.as_ref().to_lowercase();
        for (index, definition) in definitions.iter_mut().enumerate() {
            validate_definition(&body, index, definition)?;
        }
        if entries.contains_key(&body) {
            return Err(RegistryError::DuplicateBody(body));
        }
        entries.insert(body, definitions);
    }

    Ok(entries)
}

fn validate_definition(
    body: &str,
    index: usize,
    definition: &mut BasemapDefinition,
) -> Result<(), RegistryError> {
    let empty_field = |field| RegistryError::EmptyField {
        body: body.to_string(),
        index,
        field,
    };

    if definition.url.trim().is_empty() {
        return Err(empty_field("url"));
    }
    if definition.title.trim().is_empty() {
        return Err(empty_field("title"));
    }
    if definition.projection.trim().is_empty() {
        return Err(empty_field("projection"));
    }

    match definition.source_type {
        SourceType::VectorTile => {
            definition.format.get_or_insert(TileFormat::Mvt);
        }
        _ if definition.format.is_some() => {
            return Err(RegistryError::FormatMismatch {
                body: body.to_string(),
                index,
            });
        }
        SourceType::Wms if definition.param("LAYERS").is_none() => {
            return Err(RegistryError::MissingWmsLayers {
                body: body.to_string(),
                index,
            });
        }
        _ => {}
    }

    Ok(())
}
