//! Where stored triples came from, and the log of changes to the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a stored triple
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Provenance {
    /// Written through the object-graph API
    Asserted,
    /// Read from a dereferenced document
    Imported {
        source_uri: String,
        imported_at: DateTime<Utc>,
    },
}

impl Provenance {
    /// Imported from `source_uri` now
    pub fn imported<S: Into<String>>(source_uri: S) -> Self {
        Provenance::Imported {
            source_uri: source_uri.into(),
            imported_at: Utc::now(),
        }
    }

    pub fn is_imported(&self) -> bool {
        matches!(self, Provenance::Imported { .. })
    }

    pub fn source_uri(&self) -> Option<&str> {
        match self {
            Provenance::Imported { source_uri, .. } => Some(source_uri),
            Provenance::Asserted => None,
        }
    }
}

/// Graph a triple is filed under
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GraphId {
    #[default]
    Default,
    Named(String),
    /// Content of the document at this URI
    Document(String),
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphId::Default => f.write_str("default"),
            GraphId::Named(name) => write!(f, "named:{}", name),
            GraphId::Document(uri) => write!(f, "document:{}", uri),
        }
    }
}

/// One recorded change to the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub operation: AuditOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AuditOperation {
    Insert {
        triple: String,
        graph_id: GraphId,
        provenance: Provenance,
    },
    Remove {
        triple: String,
    },
    Clear {
        triple_count: usize,
    },
}
