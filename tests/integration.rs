// Integration tests for SSWAP components
// These tests verify end-to-end behaviour across the core, store and model crates

use serde_json::json;
use sswap_core::vocab::{owl, rdf, rdfs, sswap, xsd};
use sswap_core::{Literal, RdfKey, Term};
use sswap_model::*;
use sswap_store::{AuditOperation, GraphId, Provenance};
use std::rc::Rc;

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Expanded-form JSON-LD description of a small protocol service
pub fn service_jsonld(service: &str) -> serde_json::Value {
    json!({
        "@context": {},
        "@graph": [
            {
                "@id": service,
                "@type": [sswap::RESOURCE],
                (rdfs::LABEL): "Taxonomy lookup",
                (sswap::NAME): "taxa",
                (sswap::PROVIDED_BY): { "@id": "http://example.org/providers/herbarium" },
                (sswap::OPERATES_ON): { "@id": "_:graph" }
            },
            {
                "@id": "_:graph",
                (sswap::HAS_MAPPING): { "@id": "http://example.org/mapping/in" }
            },
            {
                "@id": "http://example.org/mapping/in",
                (sswap::MAPS_TO): { "@id": "http://example.org/mapping/out" },
                "http://example.org/terms/limit": { "@value": "25", "@type": xsd::INTEGER }
            }
        ]
    })
}

fn file_backed_model(dir: &tempfile::TempDir, service: &str) -> Rc<SourceModel> {
    let path = dir.path().join("taxa.jsonld");
    std::fs::write(&path, service_jsonld(service).to_string()).unwrap();

    SourceModel::builder()
        .kind(ModelKind::Protocol)
        .uri(service)
        .resolver(FileResolver::with_root(dir.path()))
        .build()
        .unwrap()
}

#[test]
fn test_end_to_end_dereference_from_jsonld_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let service = "http://example.org/services/taxa";
    let model = file_backed_model(&dir, service);

    let node = Node::from_uri(&model, service).unwrap();
    assert!(node.as_resource().is_none());

    node.dereference().unwrap();
    assert!(node.is_dereferenced());
    assert_eq!(node.label().as_deref(), Some("Taxonomy lookup"));

    let resource = node.as_resource().expect("service is a resource");
    assert_eq!(resource.field(sswap::NAME), vec![Term::literal("taxa")]);

    let provider = Node::from_uri(&model, "http://example.org/providers/herbarium")
        .unwrap()
        .as_provider()
        .expect("provider role");
    assert_eq!(provider.rdf_id(), Some(RdfKey::uri("http://example.org/providers/herbarium")));

    let subject = Node::from_uri(&model, "http://example.org/mapping/in").unwrap();
    let limit = subject.property("http://example.org/terms/limit").unwrap();
    assert_eq!(limit.as_literal().and_then(Literal::as_integer), Some(25));
    assert!(subject.as_subject().is_some());
    assert!(Node::from_uri(&model, "http://example.org/mapping/out").unwrap().as_object().is_some());
}

#[test]
fn test_blank_graph_node_is_anonymous_and_not_castable() {
    let dir = tempfile::tempdir().unwrap();
    let service = "http://example.org/services/taxa";
    let model = file_backed_model(&dir, service);
    model.dereference().unwrap();

    let operates_on = Node::from_uri(&model, service)
        .unwrap()
        .property(sswap::OPERATES_ON)
        .expect("operatesOn edge");
    let key = operates_on.to_key().expect("graph key");
    assert!(key.is_blank());

    let graph = Node::new(&model, Some(key));
    assert!(graph.is_anonymous());
    assert!(graph.as_graph().is_none());
    assert_eq!(graph.properties(sswap::HAS_MAPPING).len(), 1);
}

#[test]
fn test_missing_document_is_a_data_access_failure() {
    let dir = tempfile::tempdir().unwrap();
    let model = SourceModel::builder()
        .kind(ModelKind::Protocol)
        .uri("http://example.org/services/absent")
        .resolver(FileResolver::with_root(dir.path()))
        .build()
        .unwrap();

    let err = model.dereference().unwrap_err();
    assert!(matches!(err, ModelError::DataAccess { .. }));
    assert!(!model.is_dereferenced());
}

#[test]
fn test_unparseable_document_is_a_data_access_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.jsonld"), "{ not json").unwrap();
    let model = SourceModel::builder()
        .uri("http://example.org/services/broken")
        .resolver(FileResolver::with_root(dir.path()))
        .build()
        .unwrap();

    let err = model.dereference().unwrap_err();
    assert!(matches!(err, ModelError::DataAccess { source: ResolveError::Parse(_), .. }));
}

#[test]
fn test_expressivity_gate_from_json_config() {
    init_tracing();
    let config = SourceModelConfig::from_json_str(r#"{ "required_profile": "lite" }"#).unwrap();
    let service = "http://example.org/services/enum";
    let document = vec![
        sswap_core::Triple::new(Term::iri(service), rdf::TYPE, Term::iri(sswap::RESOURCE)),
        sswap_core::Triple::new(Term::iri("http://example.org/Size"), owl::ONE_OF, Term::iri(rdf::NIL)),
    ];
    let model = SourceModel::builder()
        .uri(service)
        .config(config)
        .resolver(StaticResolver::new().with_document(service, document))
        .build()
        .unwrap();

    match model.dereference() {
        Err(ModelError::Validation { report, .. }) => {
            assert_eq!(report.profile, ExpressivityProfile::Dl);
            assert!(report.to_string().contains("OWL Lite"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_datatype_enumeration_survives_jsonld_export() {
    let model = SourceModel::builder().build().unwrap();
    let datatype = Datatype::new(&model, Some("http://example.org/Size")).unwrap();
    datatype
        .add_one_of(&[Literal::string("S"), Literal::string("M"), Literal::string("L")])
        .unwrap();
    datatype.add_label("Garment size").unwrap();

    let triples: Vec<sswap_core::Triple> = model.store().triples().cloned().collect();
    let exported = sswap_core::triples_to_jsonld(&triples);
    let reimported = sswap_core::jsonld_to_triples(&exported).unwrap();

    let uri = "http://example.org/reimported";
    let copy = SourceModel::builder()
        .uri(uri)
        .resolver(StaticResolver::new().with_document(uri, reimported))
        .build()
        .unwrap();
    copy.dereference().unwrap();

    let same = Datatype::new(&copy, Some("http://example.org/Size")).unwrap();
    assert_eq!(same, datatype);
    assert_eq!(same.label().as_deref(), Some("Garment size"));
    let values: Vec<String> = same.one_of().unwrap().into_iter().map(|l| l.lexical).collect();
    assert_eq!(values, vec!["S", "M", "L"]);
}

#[test]
fn test_views_and_plain_nodes_share_store_state() {
    let service = "http://example.org/services/taxa";
    let dir = tempfile::tempdir().unwrap();
    let model = file_backed_model(&dir, service);
    model.dereference().unwrap();

    let node = Node::from_uri(&model, service).unwrap();
    let resource = node.as_resource().unwrap();
    node.add_comment("maintained by the herbarium").unwrap();
    assert_eq!(resource.comment().as_deref(), Some("maintained by the herbarium"));

    model.entity_manager().refresh(&resource).unwrap();
    assert_eq!(resource.field(rdfs::COMMENT).len(), 1);
}

#[test]
fn test_dereferenced_triples_carry_document_provenance() {
    let service = "http://example.org/services/taxa";
    let dir = tempfile::tempdir().unwrap();
    let model = file_backed_model(&dir, service);
    model.dereference().unwrap();

    let node = Node::from_uri(&model, service).unwrap();
    node.add_comment("local note").unwrap();

    let store = model.store();
    let document = store.get_graph(&GraphId::Document(service.to_string()));
    assert!(!document.is_empty());
    assert!(document
        .iter()
        .all(|stored| stored.provenance.source_uri() == Some(service)));

    let local = store.find_triples(None, Some(rdfs::COMMENT), None);
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].provenance, Provenance::Asserted);
    assert_eq!(local[0].graph_id, GraphId::Default);

    let stats = store.statistics();
    assert_eq!(stats.imported_triples, document.len());
    assert_eq!(stats.total_triples, document.len() + 1);
    assert!(matches!(
        store.audit_trail().last().map(|entry| &entry.operation),
        Some(AuditOperation::Insert { provenance: Provenance::Asserted, .. })
    ));
}
