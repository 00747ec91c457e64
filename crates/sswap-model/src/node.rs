//! Nodes: individuals with dereferencing and protocol view casting
//!
//! A node's dereferenced state lives on its source model. Views obtained
//! through [`Node::as_view`] share the node's identity key and model, so a
//! write through any view is visible through all of them.

use crate::capability::{Annotated, Capability, Element, ScalarValue, SemanticElement};
use crate::entity::Entity;
use crate::error::ModelError;
use crate::factory::NodeKind;
use crate::individual::Individual;
use crate::manager::ManagedFields;
use crate::source::SourceModel;
use sswap_core::{RdfKey, Term};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Node {
    individual: Individual,
    view: Option<NodeKind>,
    managed: Option<Rc<ManagedFields>>,
}

impl Node {
    pub fn new(model: &Rc<SourceModel>, key: Option<RdfKey>) -> Self {
        Self {
            individual: Individual::new(model, key),
            view: None,
            managed: None,
        }
    }

    /// Node keyed by an absolute URI
    pub fn from_uri(model: &Rc<SourceModel>, uri: &str) -> Result<Self, ModelError> {
        Ok(Self::new(model, Some(RdfKey::try_uri(uri)?)))
    }

    /// Node keyed by a fresh blank node
    pub fn anonymous(model: &Rc<SourceModel>) -> Self {
        Self::new(model, Some(RdfKey::fresh_blank()))
    }

    pub(crate) fn managed(model: &Rc<SourceModel>, key: RdfKey, kind: NodeKind) -> Self {
        Self {
            individual: Individual::from_entity(Entity::new(model, Some(key))),
            view: Some(kind),
            managed: Some(Rc::new(ManagedFields::default())),
        }
    }

    pub fn individual(&self) -> &Individual {
        &self.individual
    }

    pub fn entity(&self) -> &Entity {
        self.individual.entity()
    }

    /// Protocol view this node was cast to, `None` for a plain node
    pub fn view_kind(&self) -> Option<NodeKind> {
        self.view
    }

    /// Whether this node is populated by the entity manager
    pub fn is_managed(&self) -> bool {
        self.managed.is_some()
    }

    pub fn managed_fields(&self) -> Option<&ManagedFields> {
        self.managed.as_deref()
    }

    /// Managed field values for `predicate`; empty for unmanaged nodes
    pub fn field(&self, predicate: &str) -> Vec<Term> {
        self.managed_fields()
            .map(|fields| fields.get(predicate))
            .unwrap_or_default()
    }

    pub fn is_dereferenced(&self) -> bool {
        self.entity().model().map_or(false, |model| model.is_dereferenced())
    }

    /// Pull the source model's document into its store, then refresh this
    /// node's managed fields.
    ///
    /// No-op when the model is gone or already dereferenced.
    pub fn dereference(&self) -> Result<(), ModelError> {
        let Some(model) = self.entity().model() else {
            debug!("dereference skipped, source model dropped");
            return Ok(());
        };
        if model.is_dereferenced() {
            return Ok(());
        }

        model.dereference()?;
        if self.is_managed() && model.config().refresh_managed_on_dereference {
            model.entity_manager().refresh(self)?;
        }
        Ok(())
    }

    /// Whether this node can be viewed as `kind`
    pub fn is_of_type(&self, kind: NodeKind) -> bool {
        self.viewable_uri(kind).is_some()
    }

    /// View of this node as `kind`, sharing its identity key and model.
    ///
    /// Absent when the model is gone, the node is anonymous or has no key,
    /// the model does not support views, or the store does not license
    /// `kind` for it.
    pub fn as_view(&self, kind: NodeKind) -> Option<Node> {
        let (model, uri) = self.viewable_uri(kind)?;
        Some(model.factory().view_as(&model, &uri, kind))
    }

    pub fn as_graph(&self) -> Option<Node> {
        self.as_view(NodeKind::Graph)
    }

    pub fn as_object(&self) -> Option<Node> {
        self.as_view(NodeKind::Object)
    }

    pub fn as_provider(&self) -> Option<Node> {
        self.as_view(NodeKind::Provider)
    }

    pub fn as_resource(&self) -> Option<Node> {
        self.as_view(NodeKind::Resource)
    }

    pub fn as_subject(&self) -> Option<Node> {
        self.as_view(NodeKind::Subject)
    }

    fn viewable_uri(&self, kind: NodeKind) -> Option<(Rc<SourceModel>, String)> {
        if self.is_anonymous() {
            return None;
        }
        let model = self.entity().model()?;
        let uri = self.entity().uri()?.to_string();
        if !model.supports_views() || !model.factory().can_view_as(&model, &uri, kind) {
            return None;
        }
        Some((model, uri))
    }

    pub fn add_type(&self, class: &str) -> Result<(), ModelError> {
        self.individual.add_type(class)
    }

    pub fn types(&self) -> Vec<String> {
        self.individual.types()
    }

    pub fn add_property<T: Into<Term>>(&self, predicate: &str, value: T) -> Result<(), ModelError> {
        self.individual.add_property(predicate, value)
    }

    pub fn property(&self, predicate: &str) -> Option<Term> {
        self.individual.property(predicate)
    }

    pub fn properties(&self, predicate: &str) -> Vec<Term> {
        self.individual.properties(predicate)
    }
}

impl Annotated for Node {
    fn entity(&self) -> &Entity {
        self.individual.entity()
    }
}

impl SemanticElement for Node {
    fn rdf_id(&self) -> Option<RdfKey> {
        self.individual.rdf_id()
    }

    fn set_rdf_id(&self, key: RdfKey) -> Result<(), ModelError> {
        self.individual.set_rdf_id(key)
    }

    fn is_anonymous(&self) -> bool {
        self.individual.is_anonymous()
    }

    fn probe(&self, capability: Capability) -> Option<Element> {
        match capability {
            Capability::Individual => Some(Element::Individual(self.individual.clone())),
            Capability::Node => Some(Element::Node(self.clone())),
            other => other
                .node_kind()
                .and_then(|kind| self.as_view(kind))
                .map(Element::Node),
        }
    }

    fn is(&self, capability: Capability) -> bool {
        match capability.node_kind() {
            Some(kind) => self.is_of_type(kind),
            None => self.probe(capability).is_some(),
        }
    }
}

impl ScalarValue for Node {}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.view == other.view && self.entity().identity_eq(other.entity())
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.view.hash(state);
        self.entity().identity_hash(state);
    }
}
