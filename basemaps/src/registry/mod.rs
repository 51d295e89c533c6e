//! Basemap registry and resolver.
//!
//! The registry maps lowercase body identifiers (`earth`, `mars`, ...) to an
//! ordered list of [`BasemapDefinition`]s. It is built once, from the bundled
//! reference data or from a registry document, and is immutable afterwards,
//! so a single instance can be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use basemaps::registry::BasemapRegistry;
//!
//! let registry = BasemapRegistry::builtin();
//! let layers = registry.resolve_basemaps(&["Mars", "pluto"]);
//!
//! assert_eq!(layers.len(), 1);
//! assert_eq!(layers[0].title, "USGS Mars");
//! ```

mod builtin;
mod error;
mod loader;

pub use error::RegistryError;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::basemap::BasemapDefinition;

/// Immutable mapping from body identifier to basemap definitions.
#[derive(Debug, Clone, Default)]
pub struct BasemapRegistry {
    entries: HashMap<String, Vec<BasemapDefinition>>,
}

impl BasemapRegistry {
    /// The reference configuration: Earth, Europa, Mars and the Moon.
    pub fn builtin() -> Self {
        let entries = builtin::builtin_bodies()
            .into_iter()
            .map(|(body, definitions)| (body.to_string(), definitions))
            .collect();
        Self { entries }
    }

    /// Build a registry from (body, definitions) pairs.
    ///
    /// Body identifiers are lowercased and every definition is validated.
    pub fn from_bodies<I, S>(bodies: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, Vec<BasemapDefinition>)>,
        S: AsRef<str>,
    {
        let entries = loader::build_entries(bodies)?;
        Ok(Self { entries })
    }

    /// Build a registry from a JSON registry document.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        Self::from_bodies(loader::parse_document(json)?)
    }

    /// Load a registry document from disk.
    pub fn load_from(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            bodies = registry.len(),
            "Loaded basemap registry"
        );
        Ok(registry)
    }

    /// Definitions registered for a body, matched case-insensitively.
    pub fn get(&self, body: &str) -> Option<&[BasemapDefinition]> {
        self.entries.get(&body.to_lowercase()).map(Vec::as_slice)
    }

    /// Registered body identifiers in alphabetical order.
    pub fn bodies(&self) -> Vec<&str> {
        let mut bodies: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        bodies.sort_unstable();
        bodies
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no body is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projections the front end must register before every layer can be shown.
    pub fn custom_projections(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flatten()
            .filter(|definition| definition.uses_custom_projection())
            .map(|definition| definition.projection.as_str())
            .collect()
    }

    /// Resolve target bodies into basemap definitions.
    ///
    /// Lists are concatenated in target order, each keeping registry order.
    /// Unknown bodies are skipped and repeated bodies are repeated.
    pub fn resolve_basemaps<S: AsRef<str>>(&self, targets: &[S]) -> Vec<&BasemapDefinition> {
        let mut layers = Vec::new();
        for target in targets {
            let target = target.as_ref();
            match self.get(target) {
                Some(definitions) => layers.extend(definitions),
                None => trace!(body = target, "No basemaps registered for target"),
            }
        }
        debug!(targets = targets.len(), layers = layers.len(), "Resolved basemaps");
        layers
    }
}

/// Resolve target bodies against a registry.
///
/// Free-function form of [`BasemapRegistry::resolve_basemaps`].
pub fn resolve_basemaps<'r, S: AsRef<str>>(
    registry: &'r BasemapRegistry,
    targets: &[S],
) -> Vec<&'r BasemapDefinition> {
    registry.resolve_basemaps(targets)
}
