use sswap_core::vocab::{rdf, rdfs, sswap};
use sswap_model::{ModelKind, SourceModel, SourceModelBuilder, StaticResolver};
use sswap_core::{Term, Triple};
use std::rc::Rc;

pub const SERVICE: &str = "http://example.org/services/lookup";
pub const PROVIDER: &str = "http://example.org/providers/lab";
pub const GRAPH: &str = "http://example.org/services/lookup#graph";
pub const SUBJECT: &str = "http://example.org/services/lookup#subject";
pub const OBJECT: &str = "http://example.org/services/lookup#object";

/// Install a test subscriber honouring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn iri(s: &str) -> Term {
    Term::iri(s)
}

/// A complete protocol description: resource, provider, graph, subject, object
pub fn service_document() -> Vec<Triple> {
    vec![
        Triple::new(iri(SERVICE), rdf::TYPE, iri(sswap::RESOURCE)),
        Triple::new(iri(SERVICE), rdfs::LABEL, Term::literal("Lookup service")),
        Triple::new(iri(SERVICE), sswap::NAME, Term::literal("lookup")),
        Triple::new(iri(SERVICE), sswap::PROVIDED_BY, iri(PROVIDER)),
        Triple::new(iri(SERVICE), sswap::OPERATES_ON, iri(GRAPH)),
        Triple::new(iri(GRAPH), sswap::HAS_MAPPING, iri(SUBJECT)),
        Triple::new(iri(SUBJECT), sswap::MAPS_TO, iri(OBJECT)),
    ]
}

pub fn protocol_builder() -> SourceModelBuilder {
    SourceModel::builder()
        .kind(ModelKind::Protocol)
        .uri(SERVICE)
        .resolver(StaticResolver::new().with_document(SERVICE, service_document()))
}

pub fn protocol_model() -> Rc<SourceModel> {
    init_tracing();
    protocol_builder().build().expect("protocol model")
}
