//! # SSWAP - Typed Object Graphs over RDF
//!
//! SSWAP gives application code strongly-typed semantic elements
//! (individuals, nodes, lists, datatypes, literals) instead of raw triples.
//! Every element is keyed by an RDF identity and backed by a shared,
//! session-scoped source model.
//!
//! ## Quick Start
//!
//! ```rust
//! use sswap::prelude::*;
//! use sswap::core::vocab::{rdf, sswap as vocab};
//!
//! let uri = "http://example.org/services/lookup";
//! let document = vec![
//!     Triple::new(Term::iri(uri), rdf::TYPE, Term::iri(vocab::RESOURCE)),
//!     Triple::new(Term::iri(uri), vocab::NAME, Term::literal("lookup")),
//! ];
//!
//! let model = SourceModel::builder()
//!     .kind(ModelKind::Protocol)
//!     .uri(uri)
//!     .resolver(StaticResolver::new().with_document(uri, document))
//!     .build()?;
//!
//! let node = Node::from_uri(&model, uri)?;
//! node.dereference()?;
//!
//! let resource = node.as_resource().expect("declared as a resource");
//! assert_eq!(resource.field(vocab::NAME), vec![Term::literal("lookup")]);
//! assert!(node.as_provider().is_none());
//! # Ok::<(), sswap::model::ModelError>(())
//! ```
//!
//! ## Architecture
//!
//! - **`sswap-core`**: identity keys, RDF terms, vocabulary and JSON-LD codec
//! - **`sswap-store`**: in-memory triple store with provenance tracking
//! - **`sswap-model`**: source models, semantic elements, view factory and validation gate
//!
//! ## Feature Flags
//!
//! - `full` (default): all crates included
//! - `core`: only the term model
//! - `store`: term model and triple store
//! - `model`: the complete object-graph layer

#[cfg(feature = "sswap-core")]
pub use sswap_core as core;

#[cfg(feature = "sswap-store")]
pub use sswap_store as store;

#[cfg(feature = "sswap-model")]
pub use sswap_model as model;

// Convenience re-exports for common types (feature-gated)
#[cfg(feature = "sswap-core")]
pub use sswap_core::{Literal, RdfKey, Term, Triple};

#[cfg(feature = "sswap-store")]
pub use sswap_store::{GraphId, Provenance, RdfStore};

#[cfg(feature = "sswap-model")]
pub use sswap_model::{
    Capability, Datatype, Element, Individual, List, ModelError, ModelKind, Node, NodeKind,
    SourceModel, SourceModelConfig,
};

// Commonly used external dependencies
pub use anyhow;
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports
///
/// ```rust
/// use sswap::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "sswap-core")]
    pub use crate::core::{Literal, RdfKey, Term, Triple};

    #[cfg(feature = "sswap-store")]
    pub use crate::store::{GraphId, Provenance, RdfStore};

    #[cfg(feature = "sswap-model")]
    pub use crate::model::{
        Annotated, Capability, Datatype, Element, Individual, List, LiteralElement, ModelError,
        ModelKind, Node, NodeKind, ScalarValue, SemanticElement, SourceModel, SourceModelConfig,
        StaticResolver,
    };

    // Common external types
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sswap-model")]
    #[test]
    fn test_prelude_builds_a_model() {
        use crate::prelude::*;

        let model = SourceModel::builder().build().unwrap();
        let node = Node::anonymous(&model);
        assert!(node.is_anonymous());
        assert!(node.is(Capability::Node));
    }
}
