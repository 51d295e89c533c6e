//! Basemap configuration entry point for map front ends.

use tracing::debug;

use crate::basemap::BasemapDefinition;
use crate::catalog::CatalogResource;
use crate::registry::BasemapRegistry;
use crate::target::resolve_targets;

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Localization context supplied by the front end.
///
/// Carried through basemap configuration so titles and attributions can be
/// localized later; it does not influence resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
}

impl Locale {
    /// Create a locale from a language tag such as `en` or `de-CH`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// The language tag.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

/// Select the basemaps to offer for a catalog resource.
///
/// Resolves the resource's target bodies and looks them up in `registry`.
///
/// # Example
///
/// ```
/// use basemaps::catalog::StacObject;
/// use basemaps::configure::{configure_basemap, Locale};
/// use basemaps::registry::BasemapRegistry;
/// use serde_json::json;
///
/// let registry = BasemapRegistry::builtin();
/// let item = StacObject::from_value(json!({
///     "type": "Feature",
///     "properties": { "ssys:targets": ["moon"] }
/// }))
/// .unwrap();
///
/// let layers = configure_basemap(Some(&item), &Locale::default(), &registry);
/// assert_eq!(layers[0].title, "USGS Moon");
/// ```
pub fn configure_basemap<'r>(
    resource: Option<&dyn CatalogResource>,
    locale: &Locale,
    registry: &'r BasemapRegistry,
) -> Vec<&'r BasemapDefinition> {
    let targets = resolve_targets(resource);
    debug!(?targets, language = locale.language(), "Configuring basemaps");
    registry.resolve_basemaps(&targets)
}
