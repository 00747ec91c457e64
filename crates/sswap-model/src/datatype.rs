//! Datatype definitions with optional enumeration constraints

use crate::capability::{Annotated, Capability, Element, ScalarValue, SemanticElement};
use crate::entity::Entity;
use crate::error::ModelError;
use crate::source::SourceModel;
use sswap_core::vocab::{owl, rdf, rdfs};
use sswap_core::{Literal, RdfKey};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Datatype {
    entity: Entity,
}

impl Datatype {
    /// Datatype named by `uri`, or a fresh anonymous one.
    ///
    /// A named datatype asserts nothing. An anonymous one is typed
    /// `rdfs:Datatype` in the store when the model is configured to do so.
    pub fn new(model: &Rc<SourceModel>, uri: Option<&str>) -> Result<Self, ModelError> {
        let datatype = match uri {
            Some(uri) => Self {
                entity: Entity::new(model, Some(RdfKey::try_uri(uri)?)),
            },
            None => {
                let datatype = Self {
                    entity: Entity::new(model, Some(RdfKey::fresh_blank())),
                };
                // TODO: decide whether XSD built-in datatypes should skip this assertion
                if model.config().type_anonymous_datatypes {
                    datatype.entity.add_type(rdfs::DATATYPE)?;
                }
                datatype
            }
        };
        Ok(datatype)
    }

    /// Assert `owl:oneOf` with an ordered list of `literals`
    pub fn add_one_of(&self, literals: &[Literal]) -> Result<(), ModelError> {
        let model = self.entity.model().ok_or(ModelError::NoBackingResource)?;
        let resource = self.entity.resource().ok_or(ModelError::NoBackingResource)?;

        let mut store = model.store_mut();
        let items = literals
            .iter()
            .map(|literal| store.create_typed_literal(literal.clone()))
            .collect();
        let head = store.create_ordered_list(items);
        let statement = store.create_statement(&resource, owl::ONE_OF, head);
        store.add_triple(statement);
        Ok(())
    }

    /// Enumerated values, in assertion order; empty without a constraint
    pub fn one_of(&self) -> Result<Vec<Literal>, ModelError> {
        let Some(head) = self.entity.property(owl::ONE_OF) else {
            return Ok(Vec::new());
        };
        let model = self.entity.model().ok_or(ModelError::NoBackingResource)?;
        let store = model.store();
        let items = store.read_list(&head)?;
        Ok(items
            .into_iter()
            .filter_map(|term| term.as_literal().cloned())
            .collect())
    }

    pub fn is_declared(&self) -> bool {
        self.entity
            .properties(rdf::TYPE)
            .iter()
            .any(|t| t.as_iri() == Some(rdfs::DATATYPE))
    }
}

impl Annotated for Datatype {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}

impl SemanticElement for Datatype {
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
            Capability::Datatype => Some(Element::Datatype(self.clone())),
            _ => None,
        }
    }
}

impl ScalarValue for Datatype {}

impl PartialEq for Datatype {
    fn eq(&self, other: &Self) -> bool {
        self.entity.identity_eq(&other.entity)
    }
}

impl Eq for Datatype {}

impl Hash for Datatype {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity.identity_hash(state);
    }
}
