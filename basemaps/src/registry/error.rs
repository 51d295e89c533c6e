//! Registry configuration errors.

use thiserror::Error;

/// Errors raised while building a registry.
///
/// These are configuration-time failures; resolution itself never fails.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Failed to read the registry document
    #[error("Failed to read registry file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or a definition missing a required field
    #[error("Failed to parse registry document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required text field is blank
    #[error("Basemap {body}[{index}]: '{field}' must not be empty")]
    EmptyField {
        body: String,
        index: usize,
        field: &'static str,
    },

    /// Two body identifiers are equal once lowercased
    #[error("Body '{0}' is defined more than once")]
    DuplicateBody(String),

    /// A decoder handle was given to a non-vector source
    #[error("Basemap {body}[{index}]: 'format' is only valid for VectorTile sources")]
    FormatMismatch { body: String, index: usize },

    /// A WMS source without the mandatory LAYERS parameter
    #[error("Basemap {body}[{index}]: WMS sources require a LAYERS parameter")]
    MissingWmsLayers { body: String, index: usize },
}
