//! Source model configuration

use crate::validation::ExpressivityProfile;
use serde::{Deserialize, Serialize};
use sswap_core::BLANK_NODE_PREFIX;

/// Audit entries a model's store keeps unless configured otherwise
pub const DEFAULT_AUDIT_LIMIT: usize = 4096;

/// Configuration of a [`SourceModel`](crate::SourceModel)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceModelConfig {
    /// URI prefix the store uses to spell blank nodes as URIs
    pub blank_node_prefix: String,

    /// Assert `rdf:type rdfs:Datatype` for datatypes created without a URI
    pub type_anonymous_datatypes: bool,

    /// Maximum expressivity accepted from dereferenced documents
    pub required_profile: Option<ExpressivityProfile>,

    /// Require dereferenced documents to describe their own URI
    pub require_self_description: bool,

    /// Refresh managed nodes from the store after dereferencing
    pub refresh_managed_on_dereference: bool,

    /// Most recent store audit entries to keep; `None` keeps all of them
    pub audit_limit: Option<usize>,
}

impl Default for SourceModelConfig {
    fn default() -> Self {
        Self {
            blank_node_prefix: BLANK_NODE_PREFIX.to_string(),
            type_anonymous_datatypes: true,
            required_profile: None,
            require_self_description: false,
            refresh_managed_on_dereference: true,
            audit_limit: Some(DEFAULT_AUDIT_LIMIT),
        }
    }
}

impl SourceModelConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
