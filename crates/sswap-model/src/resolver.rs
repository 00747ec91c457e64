//! Document resolvers used by dereferencing

use crate::error::ResolveError;
use sswap_core::jsonld::{jsonld_to_triples, parse_jsonld};
use sswap_core::Triple;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fetches the external representation of a document as triples
pub trait DocumentResolver {
    fn resolve(&self, uri: &str) -> Result<Vec<Triple>, ResolveError>;
}

impl<F> DocumentResolver for F
where
    F: Fn(&str) -> Result<Vec<Triple>, ResolveError>,
{
    fn resolve(&self, uri: &str) -> Result<Vec<Triple>, ResolveError> {
        self(uri)
    }
}

/// Resolver that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl DocumentResolver for NullResolver {
    fn resolve(&self, uri: &str) -> Result<Vec<Triple>, ResolveError> {
        Err(ResolveError::NotFound(uri.to_string()))
    }
}

/// In-memory resolver backed by a map of documents
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    documents: HashMap<String, Vec<Triple>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document<S: Into<String>>(mut self, uri: S, triples: Vec<Triple>) -> Self {
        self.insert(uri, triples);
        self
    }

    pub fn insert<S: Into<String>>(&mut self, uri: S, triples: Vec<Triple>) {
        self.documents.insert(uri.into(), triples);
    }
}

impl DocumentResolver for StaticResolver {
    fn resolve(&self, uri: &str) -> Result<Vec<Triple>, ResolveError> {
        self.documents
            .get(uri)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(uri.to_string()))
    }
}

/// Reads JSON-LD documents from the file system.
///
/// `file://` URIs are read directly. Any other URI is mapped to
/// `<root>/<last path segment>`, with `.jsonld` appended when the segment
/// has no extension.
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    root: Option<PathBuf>,
}

impl FileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: Some(root.into()) }
    }

    fn path_for(&self, uri: &str) -> Option<PathBuf> {
        if let Some(path) = uri.strip_prefix("file://") {
            return Some(PathBuf::from(path));
        }

        let root = self.root.as_ref()?;
        let segment = uri
            .trim_end_matches(|c: char| c == '/' || c == '#')
            .rsplit(|c: char| c == '/' || c == '#')
            .next()
            .filter(|segment| !segment.is_empty() && !segment.contains(':'))?;

        let mut path = root.join(segment);
        if Path::new(segment).extension().is_none() {
            path.set_extension("jsonld");
        }
        Some(path)
    }
}

impl DocumentResolver for FileResolver {
    fn resolve(&self, uri: &str) -> Result<Vec<Triple>, ResolveError> {
        let path = self
            .path_for(uri)
            .ok_or_else(|| ResolveError::NotFound(uri.to_string()))?;
        debug!(uri, path = %path.display(), "reading document");

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ResolveError::NotFound(uri.to_string()));
            }
            Err(err) => return Err(ResolveError::Io(err)),
        };

        let doc = parse_jsonld(&text).map_err(ResolveError::Parse)?;
        jsonld_to_triples(&doc).map_err(ResolveError::Parse)
    }
}
