use versegate_core::history::{load, save};
use versegate_core::{CanonicalReference, HistoryCache, LookupResult, TranslationRecord};

fn result(reference: &str) -> LookupResult {
    LookupResult::new(
        CanonicalReference::new(reference),
        vec![
            TranslationRecord::new("KJV", format!("{reference} in the KJV")),
            TranslationRecord::new("ZZZ", format!("{reference} in ZZZ")),
        ],
    )
}

#[test]
fn save_then_load_preserves_order_and_translations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.json");
    let mut cache = HistoryCache::new(5);
    for r in ["Genesis 1:1", "John 1:1", "Revelation 22:21"] {
        cache.put(CanonicalReference::new(r), result(r));
    }
    save(&path, &cache).unwrap();

    let restored = load(&path, 5).unwrap();
    let before: Vec<_> = cache.entries().cloned().collect();
    let after: Vec<_> = restored.entries().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(after[0].result.translations[1].code, "ZZZ");
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let cache = load(&dir.path().join("absent.json"), 7).unwrap();
    assert!(cache.is_empty());
    assert_eq!(cache.capacity(), 7);
}

#[test]
fn smaller_capacity_on_load_keeps_newest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut cache = HistoryCache::new(10);
    for r in ["Genesis 1:1", "Genesis 1:2", "Genesis 1:3"] {
        cache.put(CanonicalReference::new(r), result(r));
    }
    save(&path, &cache).unwrap();

    let restored = load(&path, 2).unwrap();
    let keys: Vec<String> = restored.entries().map(|e| e.reference.to_string()).collect();
    assert_eq!(keys, vec!["Genesis 1:3", "Genesis 1:2"]);
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, b"{not json").unwrap();
    assert!(load(&path, 5).is_err());
}

#[test]
fn resave_replaces_file_without_leftovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut cache = HistoryCache::new(5);
    for r in ["Genesis 1:1", "Exodus 20:3", "Psalm 23:1"] {
        cache.put(CanonicalReference::new(r), result(r));
    }
    save(&path, &cache).unwrap();

    cache.clear();
    cache.put(CanonicalReference::new("John 11:35"), result("John 11:35"));
    save(&path, &cache).unwrap();

    let restored = load(&path, 5).unwrap();
    let keys: Vec<String> = restored.entries().map(|e| e.reference.to_string()).collect();
    assert_eq!(keys, vec!["John 11:35"]);
    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(files, vec![std::ffi::OsString::from("history.json")]);
}
