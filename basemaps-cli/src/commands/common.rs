//! Common types and utilities shared across CLI commands.

use std::path::Path;

use basemaps::catalog::{CatalogResource, StacObject};
use basemaps::target::resolve_targets;
use tracing::debug;

use crate::error::CliError;

/// Read a STAC document from disk.
///
/// Well-formed JSON that is not a STAC object yields `Ok(None)` so that it is
/// resolved like a missing resource.
pub fn read_stac(path: &Path) -> Result<Option<StacObject>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|error| CliError::ReadInput {
        path: path.display().to_string(),
        error,
    })?;

    let stac = StacObject::from_json_str(&content).map_err(|error| CliError::InvalidJson {
        path: path.display().to_string(),
        error,
    })?;

    match &stac {
        Some(object) => debug!(
            path = %path.display(),
            kind = ?object.kind(),
            id = object.id().unwrap_or("-"),
            "Read STAC document"
        ),
        None => debug!(path = %path.display(), "Document is not a STAC object"),
    }

    Ok(stac)
}

/// Resolve targets for an optional STAC object.
pub fn targets_for(stac: Option<&StacObject>) -> Vec<String> {
    resolve_targets(stac.map(|s| s as &dyn CatalogResource))
}
