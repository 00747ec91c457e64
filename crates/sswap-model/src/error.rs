//! Error types for the object-graph layer

use crate::validation::ValidationReport;
use sswap_core::{CoreError, RdfKey};
use sswap_store::StoreError;
use thiserror::Error;

/// Failures raised while resolving an external document
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0:#}")]
    Parse(anyhow::Error),
}

/// Errors surfaced by elements and source models.
///
/// Capability probes never produce these; a capability that does not hold
/// is reported as `None`/`false`.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The element already carries an identity key
    #[error("Identity already set to {existing}; refusing to overwrite with {rejected}")]
    IdentityAlreadySet { existing: RdfKey, rejected: RdfKey },

    /// The operation is not allowed for this kind of element
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("No backing resource: element has no identity or its source model is gone")]
    NoBackingResource,

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cursor has no current element")]
    InvalidCursorState,

    #[error("Source model has no document URI to dereference")]
    MissingDocumentUri,

    /// The external document could not be fetched or parsed
    #[error("Failed to dereference {uri}: {source}")]
    DataAccess {
        uri: String,
        #[source]
        source: ResolveError,
    },

    /// The fetched document was rejected by the validation gate
    #[error("Validation of {uri} failed: {report}")]
    Validation { uri: String, report: ValidationReport },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ModelError {
    /// Whether this is a contract violation rather than a runtime failure
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            ModelError::IdentityAlreadySet { .. }
                | ModelError::UnsupportedOperation(_)
                | ModelError::IndexOutOfBounds { .. }
                | ModelError::InvalidCursorState
        )
    }
}
