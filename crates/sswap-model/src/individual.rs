//! Individuals: identity-bearing elements with typed property access

use crate::capability::{Annotated, Capability, Element, ScalarValue, SemanticElement};
use crate::entity::Entity;
use crate::error::ModelError;
use crate::source::SourceModel;
use sswap_core::{RdfKey, Term};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An RDF individual bound to a source model
#[derive(Debug, Clone)]
pub struct Individual {
    entity: Entity,
}

impl Individual {
    pub fn new(model: &Rc<SourceModel>, key: Option<RdfKey>) -> Self {
        Self {
            entity: Entity::new(model, key),
        }
    }

    pub(crate) fn from_entity(entity: Entity) -> Self {
        Self { entity }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn add_type(&self, class: &str) -> Result<(), ModelError> {
        self.entity.add_type(class)
    }

    /// Asserted `rdf:type` IRIs
    pub fn types(&self) -> Vec<String> {
        self.entity.types()
    }

    pub fn has_type(&self, class: &str) -> bool {
        self.types().iter().any(|t| t == class)
    }

    pub fn add_property<T: Into<Term>>(&self, predicate: &str, value: T) -> Result<(), ModelError> {
        self.entity.add_property(predicate, value.into())
    }

    pub fn property(&self, predicate: &str) -> Option<Term> {
        self.entity.property(predicate)
    }

    pub fn properties(&self, predicate: &str) -> Vec<Term> {
        self.entity.properties(predicate)
    }

    pub fn remove_property(&self, predicate: &str, value: &Term) -> Result<bool, ModelError> {
        self.entity.remove_property(predicate, value)
    }
}

impl Annotated for Individual {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}

impl SemanticElement for Individual {
    fn rdf_id(&self) -> Option<RdfKey> {
        self.entity.rdf_id().cloned()
    }

    fn set_rdf_id(&self, key: RdfKey) -> Result<(), ModelError> {
        self.entity.set_rdf_id(key)
    }

    fn is_anonymous(&self) -> bool {
        self.entity.is_anonymous()
    }

    fn probe(&self, capability: Capability) -> Option<Element> {
        match capability {
            Capability::Individual => Some(Element::Individual(self.clone())),
            _ => None,
        }
    }
}

impl ScalarValue for Individual {}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.entity.identity_eq(&other.entity)
    }
}

impl Eq for Individual {}

impl Hash for Individual {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity.identity_hash(state);
    }
}
