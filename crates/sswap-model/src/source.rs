//! Source model: the session-scoped owner of one triple store

use crate::config::SourceModelConfig;
use crate::error::ModelError;
use crate::factory::ViewFactory;
use crate::manager::EntityManager;
use crate::resolver::{DocumentResolver, NullResolver};
use crate::validation::{CompositeValidator, ExpressivityValidator, ProfileValidator, SelfDescriptionValidator};
use sswap_core::RdfKey;
use sswap_store::{GraphId, Provenance, RdfStore};
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Kind of source model; only protocol models support view casting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelKind {
    /// Plain RDF document
    #[default]
    Generic,
    /// Protocol document whose nodes may be viewed as graphs, providers, resources, subjects and objects
    Protocol,
}

/// Session-scoped owner of one triple store and its dereferenced flag.
///
/// A source model is shared through `Rc` by every element created against
/// it and is not designed for concurrent use: callers serialize writes.
/// Store borrows are dynamically checked, so a store guard must not be held
/// across calls into elements of the same model.
pub struct SourceModel {
    kind: ModelKind,
    uri: Option<String>,
    config: SourceModelConfig,
    store: RefCell<RdfStore>,
    dereferenced: Cell<bool>,
    fetches: Cell<usize>,
    resolver: Box<dyn DocumentResolver>,
    validator: CompositeValidator,
    factory: ViewFactory,
    entity_manager: EntityManager,
}

impl SourceModel {
    pub fn builder() -> SourceModelBuilder {
        SourceModelBuilder::default()
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn supports_views(&self) -> bool {
        self.kind == ModelKind::Protocol
    }

    /// URI of the document this model is dereferenced from
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn config(&self) -> &SourceModelConfig {
        &self.config
    }

    pub fn store(&self) -> Ref<'_, RdfStore> {
        self.store.borrow()
    }

    pub fn store_mut(&self) -> RefMut<'_, RdfStore> {
        self.store.borrow_mut()
    }

    pub fn factory(&self) -> &ViewFactory {
        &self.factory
    }

    pub fn entity_manager(&self) -> &EntityManager {
        &self.entity_manager
    }

    pub fn is_dereferenced(&self) -> bool {
        self.dereferenced.get()
    }

    /// Number of times the resolver has been asked for the document
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    /// Fetch the document into the store.
    ///
    /// Idempotent: once this has succeeded, later calls return immediately.
    /// Fetched triples are validated as a whole and only committed when the
    /// validation gate passes; on any failure the model stays not dereferenced.
    pub fn dereference(&self) -> Result<(), ModelError> {
        if self.is_dereferenced() {
            debug!(uri = ?self.uri, "source model already dereferenced");
            return Ok(());
        }

        let uri = self.uri.as_deref().ok_or(ModelError::MissingDocumentUri)?;
        self.fetches.set(self.fetches.get() + 1);

        let triples = self.resolver.resolve(uri).map_err(|source| {
            warn!(uri, error = %source, "dereference failed");
            ModelError::DataAccess {
                uri: uri.to_string(),
                source,
            }
        })?;

        let report = self.validator.validate(uri, &triples);
        if !report.conforms {
            warn!(uri, %report, "dereferenced document rejected");
            return Err(ModelError::Validation {
                uri: uri.to_string(),
                report,
            });
        }

        let fetched = triples.len();
        let added = self.store_mut().insert_batch(
            triples,
            GraphId::Document(uri.to_string()),
            Provenance::imported(uri),
        );
        self.dereferenced.set(true);
        info!(uri, fetched, added, profile = %report.profile, "dereferenced source model");
        Ok(())
    }
}

impl fmt::Debug for SourceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceModel")
            .field("kind", &self.kind)
            .field("uri", &self.uri)
            .field("dereferenced", &self.dereferenced.get())
            .field("triples", &self.store.try_borrow().map(|s| s.len()).ok())
            .finish()
    }
}

/// Builder for [`SourceModel`]
#[derive(Default)]
pub struct SourceModelBuilder {
    kind: ModelKind,
    uri: Option<String>,
    config: SourceModelConfig,
    resolver: Option<Box<dyn DocumentResolver>>,
    validators: Vec<Box<dyn ProfileValidator>>,
}

impl SourceModelBuilder {
    pub fn kind(mut self, kind: ModelKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn config(mut self, config: SourceModelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn resolver<R: DocumentResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Add a validator run on top of those implied by the configuration
    pub fn validator<V: ProfileValidator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn build(self) -> Result<Rc<SourceModel>, ModelError> {
        if let Some(uri) = &self.uri {
            RdfKey::try_uri(uri)?;
        }

        let mut validator = CompositeValidator::new();
        if let Some(required) = self.config.required_profile {
            validator.push(Box::new(ExpressivityValidator { required }));
        }
        if self.config.require_self_description {
            validator.push(Box::new(SelfDescriptionValidator));
        }
        for extra in self.validators {
            validator.push(extra);
        }

        let store = match self.config.audit_limit {
            Some(limit) => RdfStore::with_audit_limit(limit),
            None => RdfStore::new(),
        };

        Ok(Rc::new(SourceModel {
            kind: self.kind,
            uri: self.uri,
            config: self.config,
            store: RefCell::new(store),
            dereferenced: Cell::new(false),
            fetches: Cell::new(0),
            resolver: self.resolver.unwrap_or_else(|| Box::new(NullResolver)),
            validator,
            factory: ViewFactory::default(),
            entity_manager: EntityManager::default(),
        }))
    }
}
