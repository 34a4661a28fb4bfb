//! Insertion-ordered record collection with id-based replace/remove.

use crate::model::{EntityId, Record};

/// Ordered sequence of records of one kind.
///
/// Mutation is crate-private so that every write goes through `EntityStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T: Record> {
    items: Vec<T>,
    /// Highest id ever appended; survives deletions.
    highest_id: Option<EntityId>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            highest_id: None,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first record carrying `id`.
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Highest identifier ever appended, including since-deleted records.
    pub fn highest_id(&self) -> Option<EntityId> {
        self.highest_id
    }

    /// Appends `record` to the end. Duplicate ids are kept side by side.
    pub(crate) fn push(&mut self, record: T) {
        let id = record.id();
        self.highest_id = Some(self.highest_id.map_or(id, |current| current.max(id)));
        self.items.push(record);
    }

    /// Replaces every record whose id matches, keeping positions.
    ///
    /// Returns the number of replaced records (0 when absent).
    pub(crate) fn replace(&mut self, record: T) -> usize {
        let id = record.id();
        let mut replaced = 0;
        for slot in self.items.iter_mut().filter(|item| item.id() == id) {
            *slot = record.clone();
            replaced += 1;
        }
        replaced
    }

    /// Removes every record whose id matches.
    ///
    /// Returns the number of removed records (0 when absent).
    pub(crate) fn remove(&mut self, id: EntityId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        before - self.items.len()
    }
}

impl<'a, T: Record> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
