//! Indexed in-memory triple store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::FactStore;
use crate::error::StoreError;
use crate::triple::Triple;

/// Insertion-ordered triple storage with subject, predicate and object indexes.
///
/// Each index maps a term to the slots holding it, in insertion order, so
/// every query returns matches in the order they were added. Deleted slots are
/// dropped from the indexes and tombstoned; once tombstones reach the live
/// count the slots are compacted, preserving order.
#[derive(Debug, Clone, Default)]
struct Inner {
    slots: Vec<Option<Triple>>,
    tombstones: usize,
    live: HashMap<Triple, usize>,
    by_subject: HashMap<String, Vec<usize>>,
    by_predicate: HashMap<String, Vec<usize>>,
    by_object: HashMap<String, Vec<usize>>,
}

impl Inner {
    fn insert(&mut self, triple: Triple) -> bool {
        if self.live.contains_key(&triple) {
            return false;
        }
        let slot = self.slots.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(slot);
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(slot);
        self.by_object
            .entry(triple.object.clone())
            .or_default()
            .push(slot);
        self.live.insert(triple.clone(), slot);
        self.slots.push(Some(triple));
        true
    }

    /// Slots worth scanning for a pattern: the shortest applicable index
    /// list, or every slot when the pattern is all wildcards.
    fn candidates(&self, subject: &str, predicate: &str, object: &str) -> Vec<usize> {
        let empty: &[usize] = &[];
        let lists = [
            (subject, &self.by_subject),
            (predicate, &self.by_predicate),
            (object, &self.by_object),
        ]
        .into_iter()
        .filter(|(term, _)| !term.is_empty())
        .map(|(term, index)| index.get(term).map_or(empty, Vec::as_slice));

        match lists.min_by_key(|slots| slots.len()) {
            Some(slots) => slots.to_vec(),
            None => (0..self.slots.len()).collect(),
        }
    }

    fn find(&self, subject: &str, predicate: &str, object: &str) -> Vec<Triple> {
        self.candidates(subject, predicate, object)
            .into_iter()
            .filter_map(|slot| self.slots[slot].as_ref())
            .filter(|t| t.matches(subject, predicate, object))
            .cloned()
            .collect()
    }

    fn remove(&mut self, triple: &Triple) {
        let Some(slot) = self.live.remove(triple) else {
            return;
        };
        unindex(&mut self.by_subject, &triple.subject, slot);
        unindex(&mut self.by_predicate, &triple.predicate, slot);
        unindex(&mut self.by_object, &triple.object, slot);
        self.slots[slot] = None;
        self.tombstones += 1;
        if self.tombstones >= self.live.len() {
            self.compact();
        }
    }

    /// Rebuild slots and indexes from the live triples, in slot order.
    fn compact(&mut self) {
        let slots = std::mem::take(&mut self.slots);
        *self = Self::default();
        for triple in slots.into_iter().flatten() {
            self.insert(triple);
        }
    }
}

fn unindex(index: &mut HashMap<String, Vec<usize>>, term: &str, slot: usize) {
    if let Some(slots) = index.get_mut(term) {
        slots.retain(|&s| s != slot);
        if slots.is_empty() {
            index.remove(term);
        }
    }
}

/// A thread-safe, in-memory [`FactStore`].
///
/// Reads share an `RwLock`; each query sees a consistent state, and
/// [`snapshot`](MemoryStore::snapshot) freezes a copy for multi-query builds
/// that must not observe concurrent writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert many triples under a single write lock.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyComponent` for the first invalid triple;
    /// triples before it remain inserted.
    pub fn bulk_add<'a, I>(&self, triples: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut inner = self.write();
        let mut added = 0;
        for (subject, predicate, object) in triples {
            if inner.insert(Triple::new(subject, predicate, object)?) {
                added += 1;
            }
        }
        tracing::trace!(added, "bulk-added triples");
        Ok(added)
    }

    #[must_use]
    pub fn exists(&self, subject: &str, predicate: &str, object: &str) -> bool {
        Triple::new(subject, predicate, object)
            .is_ok_and(|triple| self.read().live.contains_key(&triple))
    }

    /// Object of the first `(subject, predicate, _)` triple, or `None`.
    #[must_use]
    pub fn get_one(&self, subject: &str, predicate: &str) -> Option<String> {
        self.first_object(subject, predicate)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        *self.write() = Inner::default();
    }

    /// An independent copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            inner: RwLock::new(self.read().clone()),
        }
    }
}

impl FactStore for MemoryStore {
    fn find(&self, subject: &str, predicate: &str, object: &str) -> Vec<Triple> {
        self.read().find(subject, predicate, object)
    }

    fn add(&self, subject: &str, predicate: &str, object: &str) -> Result<(), StoreError> {
        let triple = Triple::new(subject, predicate, object)?;
        if self.write().insert(triple) {
            tracing::trace!(subject, predicate, object, "added triple");
        }
        Ok(())
    }

    fn delete(&self, subject: &str, predicate: &str, object: &str) -> usize {
        let mut inner = self.write();
        let matches = inner.find(subject, predicate, object);
        for triple in &matches {
            inner.remove(triple);
        }
        tracing::trace!(removed = matches.len(), "deleted triples");
        matches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn objects(triples: &[Triple]) -> Vec<&str> {
        triples.iter().map(|t| t.object.as_str()).collect()
    }

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .bulk_add([
                ("reg:article5", "rdf:type", "reg:Article"),
                ("reg:article5", "reg:discussedAt", "reg:meeting2"),
                ("reg:article5", "reg:discussedAt", "reg:meeting1"),
                ("reg:article6", "rdf:type", "reg:Article"),
                ("reg:meeting1", "rdfs:label", "Meeting 1"),
            ])
            .unwrap();
        store
    }

    #[test]
    fn find_returns_insertion_order() {
        let store = seeded();
        let found = store.find("reg:article5", "reg:discussedAt", "");
        assert_eq!(objects(&found), vec!["reg:meeting2", "reg:meeting1"]);
    }

    #[test]
    fn find_by_object() {
        let store = seeded();
        let subjects: Vec<String> = store.subjects("rdf:type", "reg:Article");
        assert_eq!(subjects, vec!["reg:article5", "reg:article6"]);
    }

    #[test]
    fn all_wildcards_return_everything() {
        assert_eq!(seeded().find("", "", "").len(), 5);
    }

    #[test]
    fn unknown_term_matches_nothing() {
        let store = seeded();
        assert!(store.find("reg:nowhere", "", "").is_empty());
        assert!(store.find("", "reg:unused", "reg:article5").is_empty());
    }

    #[test]
    fn add_is_idempotent() {
        let store = seeded();
        store.add("reg:article5", "rdf:type", "reg:Article").unwrap();
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn add_rejects_empty_components() {
        let store = MemoryStore::new();
        assert_eq!(
            store.add("reg:a", "", "reg:b"),
            Err(StoreError::EmptyComponent {
                position: "predicate"
            })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn delete_with_wildcard_object() {
        let store = seeded();
        let removed = store.delete("reg:article5", "reg:discussedAt", "");
        assert_eq!(removed, 2);
        assert!(store.find("reg:article5", "reg:discussedAt", "").is_empty());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn re_adding_after_delete_appends() {
        let store = seeded();
        store.delete("reg:article5", "reg:discussedAt", "reg:meeting2");
        store
            .add("reg:article5", "reg:discussedAt", "reg:meeting2")
            .unwrap();
        let found = store.find("reg:article5", "reg:discussedAt", "");
        assert_eq!(objects(&found), vec!["reg:meeting1", "reg:meeting2"]);
    }

    #[test]
    fn add_delete_cycles_stay_bounded() {
        let store = seeded();
        for _ in 0..10_000 {
            store.add("reg:article8", "rdf:type", "reg:Article").unwrap();
            assert_eq!(store.delete("reg:article8", "rdf:type", "reg:Article"), 1);
        }
        store.add("reg:article8", "rdf:type", "reg:Article").unwrap();

        let inner = store.read();
        assert!(inner.slots.len() <= 2 * inner.live.len() + 1);
        assert!(!inner.by_subject.values().any(Vec::is_empty));
        assert_eq!(inner.by_predicate["rdf:type"].len(), 3);
        drop(inner);

        assert_eq!(store.len(), 6);
        assert_eq!(
            store.subjects("rdf:type", "reg:Article"),
            vec!["reg:article5", "reg:article6", "reg:article8"]
        );
    }

    #[test]
    fn compaction_keeps_insertion_order() {
        let store = seeded();
        store.delete("reg:article5", "", "");
        store.delete("reg:article6", "", "");
        let inner = store.read();
        assert_eq!(inner.tombstones, 0);
        assert_eq!(inner.slots.len(), 1);
        drop(inner);

        store.add("reg:meeting1", "reg:meetingDate", "2024-01-15").unwrap();
        let found = store.find("reg:meeting1", "", "");
        assert_eq!(objects(&found), vec!["Meeting 1", "2024-01-15"]);
    }

    #[test]
    fn exists_and_get_one() {
        let store = seeded();
        assert!(store.exists("reg:meeting1", "rdfs:label", "Meeting 1"));
        assert!(!store.exists("reg:meeting1", "rdfs:label", ""));
        assert_eq!(
            store.get_one("reg:meeting1", "rdfs:label").as_deref(),
            Some("Meeting 1")
        );
        assert_eq!(store.get_one("reg:meeting9", "rdfs:label"), None);
    }

    #[test]
    fn snapshot_is_isolated_from_later_writes() {
        let store = seeded();
        let frozen = store.snapshot();
        store.add("reg:article7", "rdf:type", "reg:Article").unwrap();
        store.clear();
        assert_eq!(frozen.len(), 5);
        assert!(store.is_empty());
    }
}
