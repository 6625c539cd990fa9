//! Contract tests for `MemoryStore` through the `FactStore` trait object.

use std::sync::Arc;
use std::thread;

use delib_store::{FactStore, MemoryStore, TriplePattern};
use pretty_assertions::assert_eq;

fn store() -> Arc<dyn FactStore> {
    let store = MemoryStore::new();
    store
        .bulk_add([
            ("reg:decision1", "reg:affectsProvision", "reg:article5"),
            ("reg:decision2", "reg:affectsProvision", "reg:article5"),
            ("reg:decision1", "reg:decisionType", "adoption"),
            ("reg:article5", "rdfs:label", "Article 5"),
        ])
        .expect("valid triples");
    Arc::new(store)
}

#[test]
fn trait_object_probes() {
    let store = store();
    assert_eq!(
        store.first_object("reg:article5", "rdfs:label").as_deref(),
        Some("Article 5")
    );
    assert_eq!(
        store.subjects("reg:affectsProvision", "reg:article5"),
        vec!["reg:decision1", "reg:decision2"]
    );
    assert_eq!(store.objects("reg:decision1", "reg:decisionType"), vec!["adoption"]);
    assert_eq!(store.first_object("reg:article5", "reg:title"), None);
}

#[test]
fn pattern_queries_match_positional_queries() {
    let store = store();
    let pattern = TriplePattern::new()
        .predicate("reg:affectsProvision")
        .object("reg:article5");
    assert_eq!(
        store.find_pattern(&pattern),
        store.find("", "reg:affectsProvision", "reg:article5")
    );
    assert_eq!(store.find_pattern(&TriplePattern::new()).len(), 4);
}

#[test]
fn concurrent_readers_and_a_writer() {
    let store = store();
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    let found = store.subjects("reg:affectsProvision", "reg:article5");
                    assert!(found.len() >= 2);
                }
            })
        })
        .collect();

    for n in 0..50 {
        store
            .add(&format!("reg:decision{}", n + 10), "reg:affectsProvision", "reg:article5")
            .expect("valid triple");
    }

    for reader in readers {
        reader.join().expect("reader thread");
    }
    assert_eq!(store.subjects("reg:affectsProvision", "reg:article5").len(), 52);
}

#[test]
fn delete_through_trait_object() {
    let store = store();
    assert_eq!(store.delete("", "reg:affectsProvision", ""), 2);
    assert_eq!(store.delete("", "reg:affectsProvision", ""), 0);
    assert!(store.subjects("reg:affectsProvision", "reg:article5").is_empty());
}
