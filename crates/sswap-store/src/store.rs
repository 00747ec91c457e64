//! RDF Store implementation with provenance

use crate::provenance::{AuditEntry, AuditOperation, GraphId, Provenance};
use crate::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use sswap_core::model::{Literal, RdfKey, Term, Triple};
use sswap_core::vocab::rdf;
use std::collections::{HashMap, HashSet};
use tracing::debug;
use uuid::Uuid;

/// Stored triple with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTriple {
    /// Graph identifier
    pub graph_id: GraphId,
    /// The RDF triple
    pub triple: Triple,
    /// When this triple was asserted
    pub asserted_at: DateTime<Utc>,
    /// Provenance information
    pub provenance: Provenance,
}

type Postings = SmallVec<[usize; 8]>;

/// RDF Store with provenance tracking.
///
/// The store has set semantics: asserting a triple that is already present
/// is a no-op. Index postings are kept in insertion order, so lookups that
/// return "the" matching triple return the first one asserted.
#[derive(Debug, Default)]
pub struct RdfStore {
    /// All stored triples in insertion order
    triples: Vec<StoredTriple>,
    /// Membership set backing set semantics
    members: HashSet<Triple>,
    /// Resources created through `create_resource`
    resources: HashSet<Term>,
    /// Subject index for fast lookup
    subject_index: HashMap<Term, Postings>,
    /// Predicate index for fast lookup
    predicate_index: HashMap<String, Postings>,
    /// Object index for fast lookup
    object_index: HashMap<Term, Postings>,
    /// Audit trail
    audit_trail: Vec<AuditEntry>,
    /// Maximum retained audit entries, oldest dropped first
    audit_limit: Option<usize>,
}

impl RdfStore {
    /// Create a new empty RDF store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that keeps at most `limit` audit entries
    pub fn with_audit_limit(limit: usize) -> Self {
        Self {
            audit_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Whether `uri` follows the blank-node URI convention given by `prefix`
    pub fn is_blank_node_uri(uri: &str, prefix: &str) -> bool {
        !prefix.is_empty() && uri.starts_with(prefix)
    }

    /// Create (or fetch) the resource for an identity key
    pub fn create_resource(&mut self, key: &RdfKey) -> Term {
        let term = key.to_term();
        if self.resources.insert(term.clone()) {
            debug!(resource = %term, "created resource");
        }
        term
    }

    /// Create a fresh anonymous resource
    pub fn create_blank_node(&mut self) -> Term {
        self.create_resource(&RdfKey::fresh_blank())
    }

    /// Whether the resource was created here or appears as a subject
    pub fn has_resource(&self, term: &Term) -> bool {
        self.resources.contains(term) || self.subject_index.contains_key(term)
    }

    pub fn create_typed_literal<L: Into<Literal>>(&self, value: L) -> Term {
        Term::Literal(value.into())
    }

    pub fn create_statement(&self, subject: &Term, predicate: &str, object: Term) -> Triple {
        Triple::new(subject.clone(), predicate, object)
    }

    /// Assert a triple in the default graph
    pub fn add_triple(&mut self, triple: Triple) -> bool {
        self.insert(triple, GraphId::Default, Provenance::Asserted)
    }

    /// Insert a triple with provenance; returns false if it was already present
    pub fn insert(&mut self, triple: Triple, graph_id: GraphId, provenance: Provenance) -> bool {
        if self.members.contains(&triple) {
            return false;
        }

        let index = self.triples.len();
        self.index_triple(&triple, index);
        self.members.insert(triple.clone());

        self.record(AuditOperation::Insert {
            triple: triple.to_string(),
            graph_id: graph_id.clone(),
            provenance: provenance.clone(),
        });

        self.triples.push(StoredTriple {
            graph_id,
            triple,
            asserted_at: Utc::now(),
            provenance,
        });
        true
    }

    /// Insert multiple triples with the same provenance; returns how many were new
    pub fn insert_batch(&mut self, triples: Vec<Triple>, graph_id: GraphId, provenance: Provenance) -> usize {
        triples
            .into_iter()
            .filter(|triple| self.insert(triple.clone(), graph_id.clone(), provenance.clone()))
            .count()
    }

    /// Remove a triple; returns false if it was not present
    pub fn remove_triple(&mut self, triple: &Triple) -> bool {
        if !self.members.remove(triple) {
            return false;
        }
        self.triples.retain(|stored| &stored.triple != triple);
        self.rebuild_indices();
        self.record(AuditOperation::Remove {
            triple: triple.to_string(),
        });
        true
    }

    /// Build an `rdf:first`/`rdf:rest` chain holding `items` in order.
    ///
    /// Returns the head node, or `rdf:nil` for an empty sequence.
    pub fn create_ordered_list(&mut self, items: Vec<Term>) -> Term {
        let nil = Term::iri(rdf::NIL);
        let cells: Vec<Term> = items.iter().map(|_| self.create_blank_node()).collect();

        for (position, (cell, item)) in cells.iter().zip(items).enumerate() {
            let rest = cells.get(position + 1).cloned().unwrap_or_else(|| nil.clone());
            self.add_triple(Triple::new(cell.clone(), rdf::FIRST, item));
            self.add_triple(Triple::new(cell.clone(), rdf::REST, rest));
        }

        cells.into_iter().next().unwrap_or(nil)
    }

    /// Read back an `rdf:first`/`rdf:rest` chain starting at `head`
    pub fn read_list(&self, head: &Term) -> Result<Vec<Term>, StoreError> {
        let nil = Term::iri(rdf::NIL);
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut cell = head.clone();

        while cell != nil {
            if !visited.insert(cell.clone()) {
                return Err(StoreError::MalformedList {
                    node: cell.to_string(),
                    reason: "cycle in rdf:rest chain".to_string(),
                });
            }
            let first = self.get_property(&cell, rdf::FIRST).ok_or_else(|| StoreError::MalformedList {
                node: cell.to_string(),
                reason: "missing rdf:first".to_string(),
            })?;
            items.push(first.object.clone());

            let rest = self.get_property(&cell, rdf::REST).ok_or_else(|| StoreError::MalformedList {
                node: cell.to_string(),
                reason: "missing rdf:rest".to_string(),
            })?;
            cell = rest.object.clone();
        }

        Ok(items)
    }

    /// First asserted triple with the given subject and predicate
    pub fn get_property(&self, subject: &Term, predicate: &str) -> Option<&Triple> {
        self.matching(Some(subject), Some(predicate), None)
            .next()
            .map(|stored| &stored.triple)
    }

    /// All objects for a subject/predicate pair, in assertion order
    pub fn objects(&self, subject: &Term, predicate: &str) -> Vec<&Term> {
        self.matching(Some(subject), Some(predicate), None)
            .map(|stored| &stored.triple.object)
            .collect()
    }

    /// All subjects carrying `predicate` with value `object`
    pub fn subjects_with(&self, predicate: &str, object: &Term) -> Vec<&Term> {
        self.matching(None, Some(predicate), Some(object))
            .map(|stored| &stored.triple.subject)
            .collect()
    }

    /// Find triples matching a pattern
    pub fn find_triples(&self, subject: Option<&Term>, predicate: Option<&str>, object: Option<&Term>) -> Vec<&StoredTriple> {
        self.matching(subject, predicate, object).collect()
    }

    /// Get all triples in a specific graph
    pub fn get_graph(&self, graph_id: &GraphId) -> Vec<&StoredTriple> {
        self.triples.iter().filter(|stored| &stored.graph_id == graph_id).collect()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.members.contains(triple)
    }

    /// All triples in assertion order
    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter().map(|stored| &stored.triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Get audit trail
    pub fn audit_trail(&self) -> &[AuditEntry] {
        &self.audit_trail
    }

    /// Get statistics
    pub fn statistics(&self) -> StoreStatistics {
        let graphs: HashSet<&GraphId> = self.triples.iter().map(|stored| &stored.graph_id).collect();
        StoreStatistics {
            total_triples: self.triples.len(),
            imported_triples: self.triples.iter().filter(|stored| stored.provenance.is_imported()).count(),
            graph_count: graphs.len(),
            resource_count: self.resources.len(),
            audit_entries: self.audit_trail.len(),
        }
    }

    /// Clear all triples and resources
    pub fn clear(&mut self) {
        let triple_count = self.triples.len();
        self.triples.clear();
        self.members.clear();
        self.resources.clear();
        self.subject_index.clear();
        self.predicate_index.clear();
        self.object_index.clear();
        self.record(AuditOperation::Clear { triple_count });
    }

    fn matching<'a, 'p>(
        &'a self,
        subject: Option<&'p Term>,
        predicate: Option<&'p str>,
        object: Option<&'p Term>,
    ) -> impl Iterator<Item = &'a StoredTriple> + 'p
    where
        'a: 'p,
    {
        // Use the most selective index available
        let postings: Option<Option<&'a Postings>> = if let Some(s) = subject {
            Some(self.subject_index.get(s))
        } else if let Some(o) = object {
            Some(self.object_index.get(o))
        } else if let Some(p) = predicate {
            Some(self.predicate_index.get(p))
        } else {
            None
        };

        let candidates: Box<dyn Iterator<Item = &'a StoredTriple> + 'p> = match postings {
            Some(Some(indices)) => Box::new(indices.iter().filter_map(move |&i| self.triples.get(i))),
            Some(None) => Box::new(std::iter::empty()),
            None => Box::new(self.triples.iter()),
        };

        candidates.filter(move |stored| {
            subject.map_or(true, |s| &stored.triple.subject == s)
                && predicate.map_or(true, |p| stored.triple.predicate == p)
                && object.map_or(true, |o| &stored.triple.object == o)
        })
    }

    fn index_triple(&mut self, triple: &Triple, index: usize) {
        self.subject_index.entry(triple.subject.clone()).or_default().push(index);
        self.predicate_index.entry(triple.predicate.clone()).or_default().push(index);
        self.object_index.entry(triple.object.clone()).or_default().push(index);
    }

    /// Rebuild all indices (expensive operation)
    fn rebuild_indices(&mut self) {
        self.subject_index.clear();
        self.predicate_index.clear();
        self.object_index.clear();

        let triples: Vec<Triple> = self.triples.iter().map(|stored| stored.triple.clone()).collect();
        for (index, triple) in triples.iter().enumerate() {
            self.index_triple(triple, index);
        }
    }

    fn record(&mut self, operation: AuditOperation) {
        self.audit_trail.push(AuditEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            operation,
        });
        if let Some(limit) = self.audit_limit {
            if self.audit_trail.len() > limit {
                let excess = self.audit_trail.len() - limit;
                self.audit_trail.drain(..excess);
            }
        }
    }
}

/// Store statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStatistics {
    pub total_triples: usize,
    pub imported_triples: usize,
    pub graph_count: usize,
    pub resource_count: usize,
    pub audit_entries: usize,
}
