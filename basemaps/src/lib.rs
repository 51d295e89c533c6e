//! Basemaps - planetary basemap resolution for STAC catalogs
//!
//! Map front ends showing STAC collections and items need Earth imagery for
//! terrestrial data and planetary imagery for everything else. This library
//! reads the Solar System extension (`ssys:targets`) from a catalog resource
//! and returns the basemap definitions registered for those bodies.
//!
//! # High-Level API
//!
//! ```
//! use basemaps::catalog::StacObject;
//! use basemaps::configure::{configure_basemap, Locale};
//! use basemaps::registry::BasemapRegistry;
//!
//! let registry = BasemapRegistry::builtin();
//! let collection = StacObject::from_json_str(
//!     r#"{"type": "Collection", "summaries": {"ssys:targets": ["Mars"]}}"#,
//! )
//! .unwrap()
//! .expect("a STAC object");
//!
//! let layers = configure_basemap(Some(&collection), &Locale::default(), &registry);
//! assert_eq!(layers[0].title, "USGS Mars");
//! ```

pub mod basemap;
pub mod catalog;
pub mod config;
pub mod configure;
pub mod logging;
pub mod registry;
pub mod target;

/// Version of the basemaps library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
