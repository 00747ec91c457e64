//! Entity manager: refreshes managed node fields from the store

use crate::error::ModelError;
use crate::node::Node;
use sswap_core::Term;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use tracing::debug;

/// Field snapshot of a managed node, keyed by predicate IRI
#[derive(Debug, Default)]
pub struct ManagedFields {
    values: RefCell<BTreeMap<String, Vec<Term>>>,
}

impl ManagedFields {
    pub fn get(&self, predicate: &str) -> Vec<Term> {
        self.values.borrow().get(predicate).cloned().unwrap_or_default()
    }

    pub fn first(&self, predicate: &str) -> Option<Term> {
        self.values
            .borrow()
            .get(predicate)
            .and_then(|values| values.first().cloned())
    }

    pub fn predicates(&self) -> Vec<String> {
        self.values.borrow().keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    fn replace(&self, values: BTreeMap<String, Vec<Term>>) {
        *self.values.borrow_mut() = values;
    }
}

/// Populates managed nodes from the current store state
#[derive(Debug, Default)]
pub struct EntityManager {
    refreshes: Cell<usize>,
}

impl EntityManager {
    /// Re-read every property of `node` from the store into its field snapshot
    pub fn refresh(&self, node: &Node) -> Result<(), ModelError> {
        let fields = node
            .managed_fields()
            .ok_or(ModelError::UnsupportedOperation("refresh of an unmanaged node"))?;
        let model = node.entity().model().ok_or(ModelError::NoBackingResource)?;
        let resource = node.entity().resource().ok_or(ModelError::NoBackingResource)?;

        let mut values: BTreeMap<String, Vec<Term>> = BTreeMap::new();
        for stored in model.store().find_triples(Some(&resource), None, None) {
            values
                .entry(stored.triple.predicate.clone())
                .or_default()
                .push(stored.triple.object.clone());
        }

        debug!(node = %resource, fields = values.len(), "refreshed managed node");
        fields.replace(values);
        self.refreshes.set(self.refreshes.get() + 1);
        Ok(())
    }

    /// Number of refreshes performed so far
    pub fn refresh_count(&self) -> usize {
        self.refreshes.get()
    }
}
