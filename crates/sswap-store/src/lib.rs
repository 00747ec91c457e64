//! # SSWAP Store
//!
//! In-memory RDF triple store adapter consumed by the object-graph layer:
//! resource and statement creation, typed literals, ordered lists and
//! property lookup, with provenance recorded for every asserted triple.

pub mod store;
pub mod provenance;

pub use store::*;
pub use provenance::*;
pub use sswap_core::model::{Literal, RdfKey, Term, Triple};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Malformed RDF list at {node}: {reason}")]
    MalformedList { node: String, reason: String },
}
