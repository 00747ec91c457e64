//! View factory: decides which protocol views a node supports and caches them

use crate::node::Node;
use crate::source::SourceModel;
use sswap_core::vocab::{rdf, rdfs, sswap};
use sswap_core::{RdfKey, Term};
use sswap_store::RdfStore;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Protocol views a node can be cast to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Graph,
    Object,
    Provider,
    Resource,
    Subject,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Graph,
        NodeKind::Object,
        NodeKind::Provider,
        NodeKind::Resource,
        NodeKind::Subject,
    ];

    /// Protocol class whose (sub)class membership grants this view
    pub fn class_iri(self) -> &'static str {
        match self {
            NodeKind::Graph => sswap::GRAPH,
            NodeKind::Object => sswap::OBJECT,
            NodeKind::Provider => sswap::PROVIDER,
            NodeKind::Resource => sswap::RESOURCE,
            NodeKind::Subject => sswap::SUBJECT,
        }
    }

    /// Whether the node plays this role in the protocol graph structure.
    ///
    /// Resource --providedBy--> Provider, Resource --operatesOn--> Graph,
    /// Graph --hasMapping--> Subject, Subject --mapsTo--> Object.
    fn plays_role(self, store: &RdfStore, node: &Term) -> bool {
        let is_subject_of = |predicate: &str| !store.objects(node, predicate).is_empty();
        let is_object_of = |predicate: &str| !store.subjects_with(predicate, node).is_empty();
        match self {
            NodeKind::Resource => is_subject_of(sswap::PROVIDED_BY) || is_subject_of(sswap::OPERATES_ON),
            NodeKind::Provider => is_object_of(sswap::PROVIDED_BY),
            NodeKind::Graph => is_object_of(sswap::OPERATES_ON) || is_subject_of(sswap::HAS_MAPPING),
            NodeKind::Subject => is_object_of(sswap::HAS_MAPPING) || is_subject_of(sswap::MAPS_TO),
            NodeKind::Object => is_object_of(sswap::MAPS_TO),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Graph => "Graph",
            NodeKind::Object => "Object",
            NodeKind::Provider => "Provider",
            NodeKind::Resource => "Resource",
            NodeKind::Subject => "Subject",
        };
        f.write_str(name)
    }
}

/// Whether any asserted type of `node` is `class` or one of its subclasses
fn has_class(store: &RdfStore, node: &Term, class: &str) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = store
        .objects(node, rdf::TYPE)
        .into_iter()
        .filter_map(Term::as_iri)
        .collect();

    while let Some(current) = queue.pop_front() {
        if current == class {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        let parents = store.objects(&Term::iri(current), rdfs::SUB_CLASS_OF);
        queue.extend(parents.into_iter().filter_map(Term::as_iri));
    }
    false
}

/// Per-model registry of protocol views, cached by (URI, kind)
#[derive(Default)]
pub struct ViewFactory {
    cache: RefCell<HashMap<(String, NodeKind), Node>>,
}

impl ViewFactory {
    /// Whether the entity at `uri` is legally viewable as `kind` given the store contents
    pub fn can_view_as(&self, model: &SourceModel, uri: &str, kind: NodeKind) -> bool {
        let store = model.store();
        let node = Term::iri(uri);
        has_class(&store, &node, kind.class_iri()) || kind.plays_role(&store, &node)
    }

    /// Managed view of `uri` as `kind`, created on first request and cached afterwards.
    ///
    /// Callers check [`ViewFactory::can_view_as`] first; this does not.
    pub fn view_as(&self, model: &Rc<SourceModel>, uri: &str, kind: NodeKind) -> Node {
        let cache_key = (uri.to_string(), kind);
        if let Some(view) = self.cache.borrow().get(&cache_key) {
            debug!(uri, %kind, "view cache hit");
            return view.clone();
        }

        let view = Node::managed(model, RdfKey::uri(uri), kind);
        if let Err(error) = model.entity_manager().refresh(&view) {
            debug!(uri, %kind, %error, "initial refresh of view skipped");
        }
        debug!(uri, %kind, "view cache miss, created view");
        self.cache.borrow_mut().insert(cache_key, view.clone());
        view
    }

    /// Number of views materialized so far
    pub fn cached_views(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl fmt::Debug for ViewFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewFactory")
            .field("cached_views", &self.cache.try_borrow().map(|c| c.len()).ok())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ModelKind;

    fn protocol_model() -> Rc<SourceModel> {
        SourceModel::builder().kind(ModelKind::Protocol).build().unwrap()
    }

    fn assert_triple(model: &SourceModel, s: &str, p: &str, o: Term) {
        let mut store = model.store_mut();
        let statement = store.create_statement(&Term::iri(s), p, o);
        store.add_triple(statement);
    }

    #[test]
    fn test_nothing_viewable_in_empty_store() {
        let model = protocol_model();
        for kind in NodeKind::ALL {
            assert!(!model.factory().can_view_as(&model, "urn:x", kind));
        }
    }

    #[test]
    fn test_asserted_type_grants_view() {
        let model = protocol_model();
        assert_triple(&model, "urn:p", rdf::TYPE, Term::iri(sswap::PROVIDER));
        assert!(model.factory().can_view_as(&model, "urn:p", NodeKind::Provider));
        assert!(!model.factory().can_view_as(&model, "urn:p", NodeKind::Resource));
    }

    #[test]
    fn test_subclass_chain_grants_view() {
        let model = protocol_model();
        assert_triple(&model, "urn:MyProvider", rdfs::SUB_CLASS_OF, Term::iri("urn:Middle"));
        assert_triple(&model, "urn:Middle", rdfs::SUB_CLASS_OF, Term::iri(sswap::PROVIDER));
        assert_triple(&model, "urn:p", rdf::TYPE, Term::iri("urn:MyProvider"));
        assert!(model.factory().can_view_as(&model, "urn:p", NodeKind::Provider));
    }

    #[test]
    fn test_subclass_cycle_terminates() {
        let model = protocol_model();
        assert_triple(&model, "urn:A", rdfs::SUB_CLASS_OF, Term::iri("urn:B"));
        assert_triple(&model, "urn:B", rdfs::SUB_CLASS_OF, Term::iri("urn:A"));
        assert_triple(&model, "urn:x", rdf::TYPE, Term::iri("urn:A"));
        assert!(!model.factory().can_view_as(&model, "urn:x", NodeKind::Graph));
    }

    #[test]
    fn test_roles_grant_views() {
        let model = protocol_model();
        assert_triple(&model, "urn:r", sswap::PROVIDED_BY, Term::iri("urn:p"));
        assert_triple(&model, "urn:r", sswap::OPERATES_ON, Term::iri("urn:g"));
        assert_triple(&model, "urn:g", sswap::HAS_MAPPING, Term::iri("urn:s"));
        assert_triple(&model, "urn:s", sswap::MAPS_TO, Term::iri("urn:o"));

        let factory = model.factory();
        assert!(factory.can_view_as(&model, "urn:r", NodeKind::Resource));
        assert!(factory.can_view_as(&model, "urn:p", NodeKind::Provider));
        assert!(factory.can_view_as(&model, "urn:g", NodeKind::Graph));
        assert!(factory.can_view_as(&model, "urn:s", NodeKind::Subject));
        assert!(factory.can_view_as(&model, "urn:o", NodeKind::Object));
        assert!(!factory.can_view_as(&model, "urn:o", NodeKind::Provider));
    }

    #[test]
    fn test_views_are_cached_per_uri_and_kind() {
        let model = protocol_model();
        let factory = model.factory();
        let first = factory.view_as(&model, "urn:x", NodeKind::Provider);
        let second = factory.view_as(&model, "urn:x", NodeKind::Provider);
        let other = factory.view_as(&model, "urn:x", NodeKind::Resource);

        assert_eq!(first, second);
        assert!(first.entity().same_record(second.entity()));
        assert_ne!(first, other);
        assert_eq!(factory.cached_views(), 2);
        assert!(first.is_managed());
    }
}
