//! RDF term and identity models

use crate::vocab::{rdf, xsd};
use iri_string::types::IriStr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix used when rendering blank nodes as strings
pub const BLANK_NODE_PREFIX: &str = "_:";

/// Identity key of an RDF-backed element.
///
/// Equality and hashing are derived from the variant and its value only,
/// so two keys built from the same URI are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum RdfKey {
    /// Absolute URI
    Uri(String),
    /// Locally scoped blank node id (without the `_:` prefix)
    Blank(String),
}

impl RdfKey {
    pub fn uri<S: Into<String>>(uri: S) -> Self {
        RdfKey::Uri(uri.into())
    }

    pub fn blank<S: Into<String>>(id: S) -> Self {
        RdfKey::Blank(id.into())
    }

    /// Generate a new, globally unique blank node key
    pub fn fresh_blank() -> Self {
        RdfKey::Blank(format!("b{}", uuid::Uuid::new_v4().simple()))
    }

    /// The underlying URI or blank node id, unmodified
    pub fn value(&self) -> &str {
        match self {
            RdfKey::Uri(uri) => uri,
            RdfKey::Blank(id) => id,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, RdfKey::Blank(_))
    }

    /// The URI, if this is a URI key
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            RdfKey::Uri(uri) => Some(uri),
            RdfKey::Blank(_) => None,
        }
    }

    pub fn to_term(&self) -> Term {
        match self {
            RdfKey::Uri(uri) => Term::Iri(uri.clone()),
            RdfKey::Blank(id) => Term::BlankNode(id.clone()),
        }
    }
}

impl fmt::Display for RdfKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfKey::Uri(uri) => write!(f, "{}", uri),
            RdfKey::Blank(id) => write!(f, "{}{}", BLANK_NODE_PREFIX, id),
        }
    }
}

/// RDF literal with datatype and optional language tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub datatype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Literal {
    pub fn typed<L: Into<String>, D: Into<String>>(lexical: L, datatype: D) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    pub fn string<L: Into<String>>(lexical: L) -> Self {
        Self::typed(lexical, xsd::STRING)
    }

    pub fn lang_string<L: Into<String>, T: Into<String>>(lexical: L, language: T) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: rdf::LANG_STRING.to_string(),
            language: Some(language.into()),
        }
    }

    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }

    pub fn double(value: f64) -> Self {
        Self::typed(value.to_string(), xsd::DOUBLE)
    }

    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), xsd::BOOLEAN)
    }

    /// Lexical form if this is a string-like literal
    pub fn as_str(&self) -> Option<&str> {
        match self.datatype.as_str() {
            xsd::STRING | rdf::LANG_STRING => Some(&self.lexical),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if xsd::is_integer_type(&self.datatype) {
            self.lexical.trim().parse().ok()
        } else {
            None
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self.datatype.as_str() {
            xsd::DOUBLE | xsd::FLOAT | xsd::DECIMAL => self.lexical.trim().parse().ok(),
            dt if xsd::is_integer_type(dt) => self.lexical.trim().parse::<i64>().ok().map(|v| v as f64),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if self.datatype != xsd::BOOLEAN {
            return None;
        }
        match self.lexical.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::string(s)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::string(s)
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::integer(v)
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::double(v)
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::boolean(v)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.lexical.replace('\\', "\\\\").replace('"', "\\\""))?;
        match &self.language {
            Some(lang) => write!(f, "@{}", lang),
            None => write!(f, "^^<{}>", self.datatype),
        }
    }
}

/// RDF term: IRI, blank node or literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Term {
    Iri(String),
    BlankNode(String),
    Literal(Literal),
}

impl Term {
    pub fn iri<S: Into<String>>(iri: S) -> Self {
        Term::Iri(iri.into())
    }

    pub fn literal<L: Into<Literal>>(value: L) -> Self {
        Term::Literal(value.into())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Identity key of a resource term; literals have none
    pub fn to_key(&self) -> Option<RdfKey> {
        match self {
            Term::Iri(iri) => Some(RdfKey::Uri(iri.clone())),
            Term::BlankNode(id) => Some(RdfKey::Blank(id.clone())),
            Term::Literal(_) => None,
        }
    }

    /// Generic string form: IRI text, `_:id` for blank nodes, N-Triples form for literals
    pub fn to_plain_string(&self) -> String {
        match self {
            Term::Iri(iri) => iri.clone(),
            Term::BlankNode(id) => format!("{}{}", BLANK_NODE_PREFIX, id),
            Term::Literal(literal) => literal.to_string(),
        }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<&RdfKey> for Term {
    fn from(key: &RdfKey) -> Self {
        key.to_term()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "{}{}", BLANK_NODE_PREFIX, id),
            Term::Literal(literal) => write!(f, "{}", literal),
        }
    }
}

/// RDF Triple representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new<P: Into<String>>(subject: Term, predicate: P, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

impl RdfKey {
    /// Build a URI key, rejecting strings that are not absolute IRIs.
    ///
    /// A bare scheme such as `http:` parses as an IRI but names nothing, so
    /// it is rejected as well.
    pub fn try_uri(uri: &str) -> Result<Self, crate::CoreError> {
        let invalid = || crate::CoreError::InvalidIri(uri.to_string());
        let iri = IriStr::new(uri).map_err(|_| invalid())?;
        if iri.authority_str().is_none() && iri.path_str().is_empty() {
            return Err(invalid());
        }
        Ok(RdfKey::Uri(uri.to_string()))
    }
}
