//! Literal values as semantic elements

use crate::capability::{Capability, Element, ScalarValue, SemanticElement};
use crate::error::ModelError;
use sswap_core::{Literal, RdfKey, Term};
use std::fmt;

/// A literal value; it has no identity key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralElement {
    literal: Literal,
}

impl LiteralElement {
    pub fn new(literal: Literal) -> Self {
        Self { literal }
    }

    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    pub fn datatype(&self) -> &str {
        &self.literal.datatype
    }

    pub fn to_term(&self) -> Term {
        Term::Literal(self.literal.clone())
    }
}

impl SemanticElement for LiteralElement {
    fn rdf_id(&self) -> Option<RdfKey> {
        None
    }

    fn set_rdf_id(&self, _key: RdfKey) -> Result<(), ModelError> {
        Err(ModelError::UnsupportedOperation("literals have no RDF identity"))
    }

    fn is_anonymous(&self) -> bool {
        false
    }

    fn probe(&self, capability: Capability) -> Option<Element> {
        match capability {
            Capability::Literal => Some(Element::Literal(self.clone())),
            _ => None,
        }
    }
}

impl ScalarValue for LiteralElement {
    fn as_literal(&self) -> Option<&Literal> {
        Some(&self.literal)
    }
}

impl From<Literal> for LiteralElement {
    fn from(literal: Literal) -> Self {
        Self::new(literal)
    }
}

impl fmt::Display for LiteralElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}
