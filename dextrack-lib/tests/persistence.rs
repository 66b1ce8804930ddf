use dextrack_core::{JsonFileStore, KeyValueStore};
use dextrack_lib::{COLLECTION_KEY, CollectionStore};
use tempfile::TempDir;

#[test]
fn collection_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = CollectionStore::new(JsonFileStore::new(dir.path()));
        store.toggle_owned(1).unwrap();
        store.toggle_owned(25).unwrap();
        store.toggle_favorite(25).unwrap();
        store.record_viewed(1).unwrap();
        store.record_viewed(25).unwrap();
    }

    let reopened = CollectionStore::new(JsonFileStore::new(dir.path()));
    assert_eq!(reopened.owned_ids(), vec![1, 25]);
    assert_eq!(reopened.favorite_ids(), vec![25]);
    assert_eq!(reopened.recent(), vec![25, 1]);
}

#[test]
fn cascade_lands_in_a_single_record() {
    let dir = TempDir::new().unwrap();
    let files = JsonFileStore::new(dir.path());
    let store = CollectionStore::new(files.clone());

    store.toggle_owned(150).unwrap();
    store.toggle_favorite(150).unwrap();
    store.toggle_owned(150).unwrap();

    let raw = files.get(COLLECTION_KEY).unwrap().unwrap();
    let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(record["owned"], serde_json::json!([]));
    assert_eq!(record["favorites"], serde_json::json!([]));

    // Only the collection file exists in the data directory
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec![format!("{COLLECTION_KEY}.json")]);
}

#[test]
fn ids_are_stored_as_strings() {
    let dir = TempDir::new().unwrap();
    let files = JsonFileStore::new(dir.path());
    let store = CollectionStore::new(files.clone());
    store.toggle_owned(7).unwrap();

    let raw = files.get(COLLECTION_KEY).unwrap().unwrap();
    let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(record["owned"], serde_json::json!(["7"]));
}

#[test]
fn corrupt_file_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(format!("{COLLECTION_KEY}.json")), "{{{").unwrap();

    let store = CollectionStore::new(JsonFileStore::new(dir.path()));
    assert!(store.owned_ids().is_empty());

    // The next write replaces the corrupt record
    store.toggle_owned(4).unwrap();
    assert_eq!(store.owned_ids(), vec![4]);
}
