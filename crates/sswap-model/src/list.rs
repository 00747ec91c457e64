//! Lists: ordered, mutable sequences of elements without RDF identity
//!
//! Slots may be empty (`None`) and duplicates are allowed. Two lists are
//! equal when their slots are equal element-wise.
//!
//! A `List` is a handle and clones share the same slots, including the
//! [`Element::List`] a capability query returns and the list a [`ListCursor`]
//! edits. [`List::sub_list`] copies.

use crate::capability::{Capability, Element, ScalarValue, SemanticElement};
use crate::error::ModelError;
use sswap_core::RdfKey;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct List {
    items: Rc<RefCell<Vec<Option<Element>>>>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_vec(items: Vec<Option<Element>>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    /// Whether `self` and `other` are handles on the same slots
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Append a slot, which may be empty
    pub fn add(&self, element: Option<Element>) {
        self.items.borrow_mut().push(element);
    }

    pub fn push<E: Into<Element>>(&self, element: E) {
        self.add(Some(element.into()));
    }

    /// Insert at `index`, shifting later slots right; `index == len` appends
    pub fn insert(&self, index: usize, element: Option<Element>) -> Result<(), ModelError> {
        self.check_position(index)?;
        self.items.borrow_mut().insert(index, element);
        Ok(())
    }

    pub fn add_all<I: IntoIterator<Item = Option<Element>>>(&self, elements: I) -> bool {
        let elements: Vec<_> = elements.into_iter().collect();
        let changed = !elements.is_empty();
        self.items.borrow_mut().extend(elements);
        changed
    }

    pub fn insert_all<I: IntoIterator<Item = Option<Element>>>(
        &self,
        index: usize,
        elements: I,
    ) -> Result<bool, ModelError> {
        self.check_position(index)?;
        let elements: Vec<_> = elements.into_iter().collect();
        let changed = !elements.is_empty();
        self.items.borrow_mut().splice(index..index, elements);
        Ok(changed)
    }

    pub fn get(&self, index: usize) -> Result<Option<Element>, ModelError> {
        let items = self.items.borrow();
        items
            .get(index)
            .cloned()
            .ok_or(ModelError::IndexOutOfBounds { index, len: items.len() })
    }

    /// Replace the slot at `index`, returning its previous content
    pub fn set(&self, index: usize, element: Option<Element>) -> Result<Option<Element>, ModelError> {
        let mut items = self.items.borrow_mut();
        let len = items.len();
        let slot = items
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, element))
    }

    /// Remove the first slot equal to `element`
    pub fn remove(&self, element: Option<&Element>) -> bool {
        match self.index_of(element) {
            Some(index) => {
                self.items.borrow_mut().remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&self, index: usize) -> Result<Option<Element>, ModelError> {
        let mut items = self.items.borrow_mut();
        if index >= items.len() {
            return Err(ModelError::IndexOutOfBounds { index, len: items.len() });
        }
        Ok(items.remove(index))
    }

    /// Remove every slot that appears in `other`
    pub fn remove_all(&self, other: &List) -> bool {
        let other = other.to_vec();
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|item| !other.contains(item));
        items.len() != before
    }

    /// Keep only slots that appear in `other`
    pub fn retain_all(&self, other: &List) -> bool {
        let other = other.to_vec();
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|item| other.contains(item));
        items.len() != before
    }

    pub fn contains(&self, element: Option<&Element>) -> bool {
        self.index_of(element).is_some()
    }

    pub fn contains_all(&self, other: &List) -> bool {
        let other = other.to_vec();
        let items = self.items.borrow();
        other.iter().all(|item| items.contains(item))
    }

    pub fn index_of(&self, element: Option<&Element>) -> Option<usize> {
        self.items.borrow().iter().position(|item| item.as_ref() == element)
    }

    pub fn last_index_of(&self, element: Option<&Element>) -> Option<usize> {
        self.items.borrow().iter().rposition(|item| item.as_ref() == element)
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// Snapshot of the current slots
    pub fn to_vec(&self) -> Vec<Option<Element>> {
        self.items.borrow().clone()
    }

    /// Iterate over a snapshot of the current slots
    pub fn iter(&self) -> std::vec::IntoIter<Option<Element>> {
        self.to_vec().into_iter()
    }

    /// Copy of the slots in `from..to` as a new, unshared list
    pub fn sub_list(&self, from: usize, to: usize) -> Result<List, ModelError> {
        let items = self.items.borrow();
        if from > to || to > items.len() {
            return Err(ModelError::IndexOutOfBounds {
                index: if from > to { from } else { to },
                len: items.len(),
            });
        }
        Ok(List::from_vec(items[from..to].to_vec()))
    }

    pub fn cursor(&self) -> ListCursor {
        ListCursor {
            list: self.clone(),
            position: 0,
            last: None,
        }
    }

    /// Cursor positioned before the slot at `index`
    pub fn cursor_at(&self, index: usize) -> Result<ListCursor, ModelError> {
        self.check_position(index)?;
        Ok(ListCursor {
            list: self.clone(),
            position: index,
            last: None,
        })
    }

    fn check_position(&self, index: usize) -> Result<(), ModelError> {
        let len = self.len();
        if index > len {
            return Err(ModelError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.items.try_borrow() {
            Ok(items) => f.debug_list().entries(items.iter()).finish(),
            Err(_) => f.write_str("[<borrowed>]"),
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.items.borrow() == *other.items.borrow()
    }
}

impl SemanticElement for List {
    fn rdf_id(&self) -> Option<RdfKey> {
        None
    }

    fn set_rdf_id(&self, _key: RdfKey) -> Result<(), ModelError> {
        Err(ModelError::UnsupportedOperation("lists have no RDF identity"))
    }

    fn is_anonymous(&self) -> bool {
        false
    }

    fn probe(&self, capability: Capability) -> Option<Element> {
        match capability {
            Capability::List => Some(Element::List(self.clone())),
            _ => None,
        }
    }
}

impl ScalarValue for List {}

impl FromIterator<Option<Element>> for List {
    fn from_iter<I: IntoIterator<Item = Option<Element>>>(iter: I) -> Self {
        List::from_vec(iter.into_iter().collect())
    }
}

impl FromIterator<Element> for List {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        iter.into_iter().map(Some).collect()
    }
}

impl Extend<Option<Element>> for List {
    fn extend<I: IntoIterator<Item = Option<Element>>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl Extend<Element> for List {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().map(Some));
    }
}

impl IntoIterator for List {
    type Item = Option<Element>;
    type IntoIter = std::vec::IntoIter<Option<Element>>;

    fn into_iter(self) -> Self::IntoIter {
        match Rc::try_unwrap(self.items) {
            Ok(items) => items.into_inner().into_iter(),
            Err(shared) => shared.borrow().clone().into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = Option<Element>;
    type IntoIter = std::vec::IntoIter<Option<Element>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// Bidirectional cursor over a [`List`] that can edit in place.
///
/// The cursor sits between slots. `set` and `remove` act on the slot most
/// recently returned by `next` or `previous`; `add` inserts before the
/// cursor and forgets that slot. Edits through other handles while a cursor
/// is live leave its position unspecified, but never panic.
#[derive(Debug)]
pub struct ListCursor {
    list: List,
    position: usize,
    last: Option<Step>,
}

impl ListCursor {
    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Index of the slot `previous` would return; `None` at the start
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    pub fn next(&mut self) -> Option<Option<Element>> {
        let slot = self.list.items.borrow().get(self.position).cloned()?;
        self.position += 1;
        self.last = Some(Step::Forward);
        Some(slot)
    }

    pub fn previous(&mut self) -> Option<Option<Element>> {
        let index = self.position.checked_sub(1)?;
        let slot = self.list.items.borrow().get(index).cloned()?;
        self.position = index;
        self.last = Some(Step::Backward);
        Some(slot)
    }

    fn last_index(&self) -> Result<usize, ModelError> {
        match self.last {
            Some(Step::Forward) => Ok(self.position - 1),
            Some(Step::Backward) => Ok(self.position),
            None => Err(ModelError::InvalidCursorState),
        }
    }

    /// Replace the slot last returned
    pub fn set(&mut self, element: Option<Element>) -> Result<(), ModelError> {
        let index = self.last_index()?;
        self.list.set(index, element)?;
        Ok(())
    }

    /// Remove the slot last returned
    pub fn remove(&mut self) -> Result<Option<Element>, ModelError> {
        let index = self.last_index()?;
        let removed = self.list.remove_at(index)?;
        self.position = index;
        self.last = None;
        Ok(removed)
    }

    /// Insert before the cursor; a following `previous` returns the new slot
    pub fn add(&mut self, element: Option<Element>) -> Result<(), ModelError> {
        self.list.insert(self.position, element)?;
        self.position += 1;
        self.last = None;
        Ok(())
    }
}
