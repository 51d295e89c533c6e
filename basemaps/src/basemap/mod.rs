//! Basemap definitions.
//!
//! A [`BasemapDefinition`] declares one selectable map layer source: which
//! protocol it speaks, where its tiles live, and how it should be labelled.
//! Definitions are plain data; turning them into renderable layers is the
//! front end's job.
//!
//! # Example
//!
//! ```
//! use basemaps::basemap::{BasemapDefinition, SourceType};
//!
//! let mars = BasemapDefinition::new(
//!     SourceType::Wms,
//!     "https://planetarymaps.usgs.gov/cgi-bin/mapserv?map=/maps/mars/mars_simp_cyl.map",
//!     "USGS Mars",
//! )
//! .with_attributions("USGS Astrogeology")
//! .with_projection("EPSG:4326")
//! .with_param("FORMAT", "image/png")
//! .with_param("LAYERS", "MDIM21");
//!
//! assert!(!mars.uses_custom_projection());
//! ```

mod types;

pub use types::{
    BasemapDefinition, SourceType, TileFormat, DEFAULT_PROJECTION, STANDARD_PROJECTIONS,
};
