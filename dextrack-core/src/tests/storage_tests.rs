use super::*;
use tempfile::TempDir;

#[derive(Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
struct Sample {
    ids: Vec<String>,
}

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("a").unwrap(), None);
    store.set("a", "1").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    store.set("a", "2").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
    store.remove("a").unwrap();
    assert_eq!(store.get("a").unwrap(), None);
    store.remove("a").unwrap();
    assert!(store.is_empty());
}

#[test]
fn file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("data"));
    assert_eq!(store.get("owned").unwrap(), None);
    store.set("owned", "[\"1\"]").unwrap();

    let reopened = JsonFileStore::new(dir.path().join("data"));
    assert_eq!(reopened.get("owned").unwrap().as_deref(), Some("[\"1\"]"));
    assert_eq!(reopened.size_of("owned").unwrap(), Some(5));
    assert!(!dir.path().join("data").join("owned.json.tmp").exists());

    reopened.remove("owned").unwrap();
    assert_eq!(store.get("owned").unwrap(), None);
    assert_eq!(store.size_of("owned").unwrap(), None);
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert!(matches!(
        store.set("../escape", "x"),
        Err(StorageError::InvalidKey(_))
    ));
    assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
}

#[test]
fn json_helpers_round_trip() {
    let store = MemoryStore::new();
    let value = Sample {
        ids: vec!["4".into(), "7".into()],
    };
    save_json(&store, "sample", &value).unwrap();
    let loaded: Sample = load_json_or_default(&store, "sample");
    assert_eq!(loaded, value);
}

#[test]
fn corrupt_json_degrades_to_default() {
    let store = MemoryStore::new();
    store.set("sample", "{not json").unwrap();
    let loaded: Sample = load_json_or_default(&store, "sample");
    assert_eq!(loaded, Sample::default());

    let missing: Sample = load_json_or_default(&store, "nothing-here");
    assert_eq!(missing, Sample::default());
}

#[test]
fn arc_wrapped_store_shares_state() {
    let store = Arc::new(MemoryStore::new());
    let handle = store.clone();
    handle.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}
