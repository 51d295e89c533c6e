//! Catalog resource abstraction.
//!
//! Target resolution only needs to ask a resource what kind of STAC object
//! it is and to read a few metadata maps. [`CatalogResource`] captures that
//! capability set so any catalog model can plug in. [`StacObject`] is the
//! bundled adapter over a parsed STAC JSON document.

mod stac;

pub use stac::{StacObject, StacType};

use serde_json::{Map, Value};

/// Read-only view of a STAC collection or item.
pub trait CatalogResource {
    /// Returns true for STAC collections.
    fn is_collection(&self) -> bool;

    /// Returns true for STAC items.
    fn is_item(&self) -> bool;

    /// The collection `summaries` object, if present.
    fn summaries(&self) -> Option<&Map<String, Value>>;

    /// The item `properties` object, if present.
    fn properties(&self) -> Option<&Map<String, Value>>;

    /// A top-level field of the resource.
    fn field(&self, key: &str) -> Option<&Value>;
}
