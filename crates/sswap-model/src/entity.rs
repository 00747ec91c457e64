//! Entity record shared by every identity-bearing element

use crate::error::ModelError;
use crate::source::SourceModel;
use sswap_core::vocab::{rdf, rdfs};
use sswap_core::{RdfKey, Term, BLANK_NODE_PREFIX};
use sswap_store::RdfStore;
use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};
use tracing::debug;

struct EntityRecord {
    model: Weak<SourceModel>,
    key: OnceCell<RdfKey>,
    resource: OnceCell<Term>,
}

/// Identity key plus source model, with a lazily materialized store resource.
///
/// Cloning an `Entity` aliases the same record: the key, once set, and the
/// cached resource are observed by every clone.
#[derive(Clone)]
pub struct Entity {
    inner: Rc<EntityRecord>,
}

impl Entity {
    pub fn new(model: &Rc<SourceModel>, key: Option<RdfKey>) -> Self {
        let cell = OnceCell::new();
        if let Some(key) = key {
            let _ = cell.set(key);
        }
        Self {
            inner: Rc::new(EntityRecord {
                model: Rc::downgrade(model),
                key: cell,
                resource: OnceCell::new(),
            }),
        }
    }

    /// Owning source model, if it is still alive
    pub fn model(&self) -> Option<Rc<SourceModel>> {
        self.inner.model.upgrade()
    }

    pub fn rdf_id(&self) -> Option<&RdfKey> {
        self.inner.key.get()
    }

    /// Set the identity key; fails if one is already set
    pub fn set_rdf_id(&self, key: RdfKey) -> Result<(), ModelError> {
        self.inner.key.set(key).map_err(|rejected| ModelError::IdentityAlreadySet {
            existing: self.inner.key.get().cloned().unwrap_or_else(|| rejected.clone()),
            rejected,
        })
    }

    pub fn uri(&self) -> Option<&str> {
        self.rdf_id().and_then(RdfKey::as_uri)
    }

    /// True for blank-node keys and for URIs spelled with the store's blank-node prefix
    pub fn is_anonymous(&self) -> bool {
        match self.rdf_id() {
            Some(RdfKey::Blank(_)) => true,
            Some(RdfKey::Uri(uri)) => RdfStore::is_blank_node_uri(uri, &self.blank_node_prefix()),
            None => false,
        }
    }

    pub fn same_record(&self, other: &Entity) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn blank_node_prefix(&self) -> String {
        self.model()
            .map(|model| model.config().blank_node_prefix.clone())
            .unwrap_or_else(|| BLANK_NODE_PREFIX.to_string())
    }

    /// Store resource for this entity, created on first access and cached
    pub fn resource(&self) -> Option<Term> {
        if let Some(resource) = self.inner.resource.get() {
            return Some(resource.clone());
        }

        let key = self.rdf_id()?;
        let model = self.model()?;
        let store_key = match key {
            RdfKey::Uri(uri) => {
                let prefix = &model.config().blank_node_prefix;
                match uri.strip_prefix(prefix.as_str()) {
                    Some(id) if !prefix.is_empty() => RdfKey::blank(id),
                    _ => key.clone(),
                }
            }
            RdfKey::Blank(_) => key.clone(),
        };

        let resource = model.store_mut().create_resource(&store_key);
        debug!(key = %key, resource = %resource, "materialized resource");
        Some(self.inner.resource.get_or_init(|| resource).clone())
    }

    fn require_resource(&self) -> Result<(Rc<SourceModel>, Term), ModelError> {
        let resource = self.resource().ok_or(ModelError::NoBackingResource)?;
        let model = self.model().ok_or(ModelError::NoBackingResource)?;
        Ok((model, resource))
    }

    pub fn add_property(&self, predicate: &str, value: Term) -> Result<(), ModelError> {
        let (model, resource) = self.require_resource()?;
        let mut store = model.store_mut();
        let statement = store.create_statement(&resource, predicate, value);
        store.add_triple(statement);
        Ok(())
    }

    /// First asserted value of `predicate`
    pub fn property(&self, predicate: &str) -> Option<Term> {
        let (model, resource) = self.require_resource().ok()?;
        let store = model.store();
        let value = store.get_property(&resource, predicate).map(|t| t.object.clone());
        value
    }

    pub fn properties(&self, predicate: &str) -> Vec<Term> {
        let Ok((model, resource)) = self.require_resource() else {
            return Vec::new();
        };
        let store = model.store();
        let values = store.objects(&resource, predicate).into_iter().cloned().collect();
        values
    }

    pub fn remove_property(&self, predicate: &str, value: &Term) -> Result<bool, ModelError> {
        let (model, resource) = self.require_resource()?;
        let mut store = model.store_mut();
        let statement = store.create_statement(&resource, predicate, value.clone());
        Ok(store.remove_triple(&statement))
    }

    pub fn add_type(&self, class: &str) -> Result<(), ModelError> {
        self.add_property(rdf::TYPE, Term::iri(class))
    }

    pub fn types(&self) -> Vec<String> {
        self.properties(rdf::TYPE)
            .into_iter()
            .filter_map(|t| t.as_iri().map(str::to_string))
            .collect()
    }

    fn add_annotation(&self, predicate: &str, text: &str) -> Result<(), ModelError> {
        let (model, resource) = self.require_resource()?;
        let mut store = model.store_mut();
        let literal = store.create_typed_literal(text);
        let statement = store.create_statement(&resource, predicate, literal);
        store.add_triple(statement);
        Ok(())
    }

    // With several values the first asserted one wins.
    fn annotation(&self, predicate: &str) -> Option<String> {
        self.property(predicate).map(|object| match object {
            Term::Literal(literal) => literal.lexical,
            other => other.to_plain_string(),
        })
    }

    pub fn add_label(&self, text: &str) -> Result<(), ModelError> {
        self.add_annotation(rdfs::LABEL, text)
    }

    pub fn add_comment(&self, text: &str) -> Result<(), ModelError> {
        self.add_annotation(rdfs::COMMENT, text)
    }

    pub fn label(&self) -> Option<String> {
        self.annotation(rdfs::LABEL)
    }

    pub fn comment(&self) -> Option<String> {
        self.annotation(rdfs::COMMENT)
    }

    /// Key equality, falling back to record identity for keyless entities
    pub(crate) fn identity_eq(&self, other: &Entity) -> bool {
        match (self.rdf_id(), other.rdf_id()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.same_record(other),
            _ => false,
        }
    }

    pub(crate) fn identity_hash<H: Hasher>(&self, state: &mut H) {
        self.rdf_id().hash(state);
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("key", &self.rdf_id())
            .field("attached", &self.model().is_some())
            .finish()
    }
}
