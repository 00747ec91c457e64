//! # SSWAP Model
//!
//! Typed semantic elements over a shared RDF source model.
//!
//! Every identity-bearing element (individual, node, datatype) wraps one
//! [`Entity`] record: an identity key, a weak handle on its [`SourceModel`]
//! and a lazily created store resource. Protocol nodes can be cast to
//! graph/object/provider/resource/subject views through the model's
//! [`ViewFactory`]; views alias the same store node. Capabilities are
//! queried uniformly with [`SemanticElement::probe`].
//!
//! ```rust
//! use sswap_model::{Annotated, Node, SourceModel};
//!
//! let model = SourceModel::builder().build().unwrap();
//! let node = Node::from_uri(&model, "http://example.org/thing").unwrap();
//! node.add_label("a thing").unwrap();
//! assert_eq!(node.label().as_deref(), Some("a thing"));
//! ```

pub mod capability;
pub mod config;
pub mod datatype;
pub mod entity;
pub mod error;
pub mod factory;
pub mod individual;
pub mod list;
pub mod literal;
pub mod manager;
pub mod node;
pub mod resolver;
pub mod source;
pub mod validation;

pub use capability::{Annotated, Capability, Element, ScalarValue, SemanticElement};
pub use config::{SourceModelConfig, DEFAULT_AUDIT_LIMIT};
pub use datatype::Datatype;
pub use entity::Entity;
pub use error::{ModelError, ResolveError};
pub use factory::{NodeKind, ViewFactory};
pub use individual::Individual;
pub use list::{List, ListCursor};
pub use literal::LiteralElement;
pub use manager::{EntityManager, ManagedFields};
pub use node::Node;
pub use resolver::{DocumentResolver, FileResolver, NullResolver, StaticResolver};
pub use source::{ModelKind, SourceModel, SourceModelBuilder};
pub use validation::{
    classify, CompositeValidator, ExpressivityProfile, ExpressivityValidator, ProfileValidator,
    SelfDescriptionValidator, ValidationReport, Violation, ViolationLevel,
};

pub use sswap_core::{Literal, RdfKey, Term, Triple};
