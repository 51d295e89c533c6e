//! Target body extraction.
//!
//! STAC resources name the celestial bodies they describe through the
//! `ssys:targets` field of the Solar System extension. Depending on the
//! resource kind the field lives in collection summaries, at the top level of
//! a collection, or in item properties. The lookups below are tried in that
//! order and the first usable array wins; everything else means Earth.

use serde_json::Value;
use tracing::{debug, trace};

use crate::catalog::CatalogResource;

/// Solar System extension field listing target bodies.
pub const TARGETS_FIELD: &str = "ssys:targets";

/// Body assumed when a resource carries no target information.
pub const DEFAULT_TARGET: &str = "earth";

/// One metadata location that may carry a target list.
struct TargetLookup {
    name: &'static str,
    applies: fn(&dyn CatalogResource) -> bool,
    extract: fn(&dyn CatalogResource) -> Option<&Value>,
}

const LOOKUPS: [TargetLookup; 3] = [
    TargetLookup {
        name: "collection summaries",
        applies: is_collection,
        extract: summaries_targets,
    },
    TargetLookup {
        name: "collection field",
        applies: is_collection,
        extract: top_level_targets,
    },
    TargetLookup {
        name: "item properties",
        applies: is_item,
        extract: properties_targets,
    },
];

fn is_collection(resource: &dyn CatalogResource) -> bool {
    resource.is_collection()
}

fn is_item(resource: &dyn CatalogResource) -> bool {
    resource.is_item()
}

fn summaries_targets(resource: &dyn CatalogResource) -> Option<&Value> {
    resource.summaries()?.get(TARGETS_FIELD)
}

fn top_level_targets(resource: &dyn CatalogResource) -> Option<&Value> {
    resource.field(TARGETS_FIELD)
}

fn properties_targets(resource: &dyn CatalogResource) -> Option<&Value> {
    resource.properties()?.get(TARGETS_FIELD)
}

/// Convert a metadata value into a target list.
///
/// Any array claims its lookup. Non-string elements are dropped and case is
/// left untouched. An array with no string element yields `None` so the
/// result of [`resolve_targets`] stays non-empty.
fn as_targets(value: &Value) -> Option<Vec<String>> {
    let targets: Vec<String> = value
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    (!targets.is_empty()).then_some(targets)
}

/// Determine which bodies a catalog resource describes.
///
/// Returns `["earth"]` when `resource` is `None` or no lookup yields a usable
/// target list. The result is never empty.
///
/// # Example
///
/// ```
/// use basemaps::catalog::StacObject;
/// use basemaps::target::resolve_targets;
/// use serde_json::json;
///
/// let collection = StacObject::from_value(json!({
///     "type": "Collection",
///     "summaries": { "ssys:targets": ["Mars"] }
/// }))
/// .unwrap();
///
/// assert_eq!(resolve_targets(Some(&collection)), vec!["Mars"]);
/// assert_eq!(resolve_targets(None), vec!["earth"]);
/// ```
pub fn resolve_targets(resource: Option<&dyn CatalogResource>) -> Vec<String> {
    let Some(resource) = resource else {
        trace!("No catalog resource, using default target");
        return default_targets();
    };

    for lookup in &LOOKUPS {
        if !(lookup.applies)(resource) {
            continue;
        }
        if let Some(targets) = (lookup.extract)(resource).and_then(as_targets) {
            debug!(source = lookup.name, ?targets, "Resolved targets");
            return targets;
        }
        trace!(source = lookup.name, "No usable target list");
    }

    debug!("No target metadata, using default target");
    default_targets()
}

fn default_targets() -> Vec<String> {
    vec![DEFAULT_TARGET.to_string()]
}
