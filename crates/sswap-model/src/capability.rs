//! Capability queries over semantic elements
//!
//! Instead of one `as_x`/`is_x` method per element kind, every element
//! answers [`SemanticElement::probe`] with the capability it is asked about.
//! A capability that does not hold is `None`, never an error.

use crate::datatype::Datatype;
use crate::entity::Entity;
use crate::error::ModelError;
use crate::factory::NodeKind;
use crate::individual::Individual;
use crate::list::List;
use crate::literal::LiteralElement;
use crate::node::Node;
use sswap_core::{Literal, RdfKey};

/// Capabilities an element can be probed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Individual,
    Node,
    List,
    Datatype,
    Literal,
    Graph,
    Object,
    Provider,
    Resource,
    Subject,
}

impl Capability {
    /// Protocol view kind behind this capability, if it is one
    pub fn node_kind(self) -> Option<NodeKind> {
        match self {
            Capability::Graph => Some(NodeKind::Graph),
            Capability::Object => Some(NodeKind::Object),
            Capability::Provider => Some(NodeKind::Provider),
            Capability::Resource => Some(NodeKind::Resource),
            Capability::Subject => Some(NodeKind::Subject),
            _ => None,
        }
    }
}

impl From<NodeKind> for Capability {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Graph => Capability::Graph,
            NodeKind::Object => Capability::Object,
            NodeKind::Provider => Capability::Provider,
            NodeKind::Resource => Capability::Resource,
            NodeKind::Subject => Capability::Subject,
        }
    }
}

/// Behaviour common to every semantic element
pub trait SemanticElement {
    fn rdf_id(&self) -> Option<RdfKey>;

    /// Assign the identity key; identity is set at most once
    fn set_rdf_id(&self, key: RdfKey) -> Result<(), ModelError>;

    fn is_anonymous(&self) -> bool;

    /// View this element with the requested capability
    fn probe(&self, capability: Capability) -> Option<Element> {
        let _ = capability;
        None
    }

    fn is(&self, capability: Capability) -> bool {
        self.probe(capability).is_some()
    }
}

/// Scalar accessors; only literal-backed elements answer them
pub trait ScalarValue {
    fn as_literal(&self) -> Option<&Literal> {
        None
    }

    fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(Literal::as_str)
    }

    fn as_integer(&self) -> Option<i64> {
        self.as_literal().and_then(Literal::as_integer)
    }

    fn as_double(&self) -> Option<f64> {
        self.as_literal().and_then(Literal::as_double)
    }

    fn as_boolean(&self) -> Option<bool> {
        self.as_literal().and_then(Literal::as_boolean)
    }
}

/// `rdfs:label` / `rdfs:comment` access for identity-bearing elements
pub trait Annotated {
    fn entity(&self) -> &Entity;

    fn add_label(&self, text: &str) -> Result<(), ModelError> {
        self.entity().add_label(text)
    }

    fn add_comment(&self, text: &str) -> Result<(), ModelError> {
        self.entity().add_comment(text)
    }

    fn label(&self) -> Option<String> {
        self.entity().label()
    }

    fn comment(&self) -> Option<String> {
        self.entity().comment()
    }
}

/// Any semantic element
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Individual(Individual),
    Node(Node),
    List(List),
    Datatype(Datatype),
    Literal(LiteralElement),
}

impl Element {
    pub fn as_individual(&self) -> Option<&Individual> {
        match self {
            Element::Individual(individual) => Some(individual),
            Element::Node(node) => Some(node.individual()),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Element::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Element::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_datatype(&self) -> Option<&Datatype> {
        match self {
            Element::Datatype(datatype) => Some(datatype),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn SemanticElement {
        match self {
            Element::Individual(e) => e,
            Element::Node(e) => e,
            Element::List(e) => e,
            Element::Datatype(e) => e,
            Element::Literal(e) => e,
        }
    }
}

impl SemanticElement for Element {
    fn rdf_id(&self) -> Option<RdfKey> {
        self.inner().rdf_id()
    }

    fn set_rdf_id(&self, key: RdfKey) -> Result<(), ModelError> {
        self.inner().set_rdf_id(key)
    }

    fn is_anonymous(&self) -> bool {
        self.inner().is_anonymous()
    }

    fn probe(&self, capability: Capability) -> Option<Element> {
        self.inner().probe(capability)
    }

    fn is(&self, capability: Capability) -> bool {
        self.inner().is(capability)
    }
}

impl ScalarValue for Element {
    fn as_literal(&self) -> Option<&Literal> {
        match self {
            Element::Literal(literal) => literal.as_literal(),
            _ => None,
        }
    }
}

impl From<Individual> for Element {
    fn from(individual: Individual) -> Self {
        Element::Individual(individual)
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<List> for Element {
    fn from(list: List) -> Self {
        Element::List(list)
    }
}

impl From<Datatype> for Element {
    fn from(datatype: Datatype) -> Self {
        Element::Datatype(datatype)
    }
}

impl From<LiteralElement> for Element {
    fn from(literal: LiteralElement) -> Self {
        Element::Literal(literal)
    }
}

impl From<Literal> for Element {
    fn from(literal: Literal) -> Self {
        Element::Literal(LiteralElement::new(literal))
    }
}
