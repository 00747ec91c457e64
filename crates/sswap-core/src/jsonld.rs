//! JSON-LD serialization and deserialization utilities
//!
//! Only expanded-form nodes are understood: `@context` is carried through
//! but never applied, so property keys must be absolute IRIs.

use crate::model::{Literal, Term, Triple, BLANK_NODE_PREFIX};
use crate::vocab::{rdf, xsd};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// JSON-LD Document with context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonLdDocument {
    #[serde(rename = "@context", default)]
    pub context: Value,
    #[serde(rename = "@graph", skip_serializing_if = "Option::is_none")]
    pub graph: Option<Vec<Value>>,
    #[serde(flatten)]
    pub data: HashMap<String, Value>,
}

/// Convert JSON-LD document to triples
///
/// A document without `@graph` is treated as a single top-level node.
pub fn jsonld_to_triples(doc: &JsonLdDocument) -> Result<Vec<Triple>> {
    let mut triples = Vec::new();

    match &doc.graph {
        Some(graph) => {
            for node in graph {
                let node_obj = node
                    .as_object()
                    .ok_or_else(|| anyhow!("@graph entries must be objects"))?;
                node_to_triples(node_obj, &mut triples)?;
            }
        }
        None if doc.data.contains_key("@id") => {
            let node_obj: Map<String, Value> = doc
                .data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            node_to_triples(&node_obj, &mut triples)?;
        }
        None => {}
    }

    Ok(triples)
}

fn node_to_triples(node_obj: &Map<String, Value>, triples: &mut Vec<Triple>) -> Result<()> {
    let subject_str = node_obj
        .get("@id")
        .ok_or_else(|| anyhow!("node is missing @id"))?
        .as_str()
        .ok_or_else(|| anyhow!("@id must be a string"))?;
    let subject = resource_term(subject_str);

    for (key, value) in node_obj {
        match key.as_str() {
            "@id" => {}
            "@type" => {
                for class in as_values(value) {
                    let class = class
                        .as_str()
                        .ok_or_else(|| anyhow!("@type values must be strings"))?;
                    triples.push(Triple::new(subject.clone(), rdf::TYPE, resource_term(class)));
                }
            }
            predicate => {
                for object in as_values(value) {
                    triples.push(Triple::new(subject.clone(), predicate, value_to_term(object)?));
                }
            }
        }
    }

    Ok(())
}

fn as_values(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

fn resource_term(id: &str) -> Term {
    match id.strip_prefix(BLANK_NODE_PREFIX) {
        Some(blank) => Term::BlankNode(blank.to_string()),
        None => Term::Iri(id.to_string()),
    }
}

fn value_to_term(value: &Value) -> Result<Term> {
    match value {
        Value::String(s) => Ok(Term::Literal(Literal::string(s.clone()))),
        Value::Bool(b) => Ok(Term::Literal(Literal::boolean(*b))),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Term::Literal(Literal::integer(i))),
            None => n
                .as_f64()
                .map(|f| Term::Literal(Literal::double(f)))
                .ok_or_else(|| anyhow!("unsupported number: {}", n)),
        },
        Value::Object(obj) => {
            if let Some(id) = obj.get("@id").and_then(Value::as_str) {
                return Ok(resource_term(id));
            }
            let lexical = match obj.get("@value") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => return Err(anyhow!("value object is missing @value")),
                Some(other) => other.to_string(),
            };
            if let Some(lang) = obj.get("@language").and_then(Value::as_str) {
                return Ok(Term::Literal(Literal::lang_string(lexical, lang)));
            }
            let datatype = obj.get("@type").and_then(Value::as_str).unwrap_or(xsd::STRING);
            Ok(Term::Literal(Literal::typed(lexical, datatype)))
        }
        Value::Null | Value::Array(_) => Err(anyhow!("unsupported JSON-LD value: {}", value)),
    }
}

fn term_to_value(term: &Term) -> Value {
    match term {
        Term::Iri(iri) => serde_json::json!({ "@id": iri }),
        Term::BlankNode(id) => serde_json::json!({ "@id": format!("{}{}", BLANK_NODE_PREFIX, id) }),
        Term::Literal(literal) => match &literal.language {
            Some(lang) => serde_json::json!({ "@value": literal.lexical, "@language": lang }),
            None => serde_json::json!({ "@value": literal.lexical, "@type": literal.datatype }),
        },
    }
}

/// Convert triples to an expanded JSON-LD document, one node per subject
pub fn triples_to_jsonld(triples: &[Triple]) -> JsonLdDocument {
    let mut nodes: BTreeMap<String, Map<String, Value>> = BTreeMap::new();

    for triple in triples {
        let id = triple.subject.to_plain_string();
        let node = nodes.entry(id.clone()).or_insert_with(|| {
            let mut node = Map::new();
            node.insert("@id".to_string(), Value::String(id));
            node
        });

        let (key, value) = match (&triple.predicate[..], &triple.object) {
            (rdf::TYPE, Term::Iri(class)) => ("@type".to_string(), Value::String(class.clone())),
            (predicate, object) => (predicate.to_string(), term_to_value(object)),
        };

        match node.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                node.insert(key, value);
            }
        }
    }

    JsonLdDocument {
        context: Value::Object(Map::new()),
        graph: Some(nodes.into_values().map(Value::Object).collect()),
        data: HashMap::new(),
    }
}

/// Parse JSON-LD string to document
pub fn parse_jsonld(json_str: &str) -> Result<JsonLdDocument> {
    let doc: JsonLdDocument = serde_json::from_str(json_str)?;
    Ok(doc)
}

/// Serialize JSON-LD document to string
pub fn serialize_jsonld(doc: &JsonLdDocument) -> Result<String> {
    let json_str = serde_json::to_string_pretty(doc)?;
    Ok(json_str)
}
