use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    name: String,
}

#[test]
fn load_json_missing_key_is_none() {
    let storage = MemoryStorage::new();
    let loaded: Option<Draft> = load_json(&storage, "draft").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn save_json_then_load_json() {
    let storage = MemoryStorage::new();
    save_json(&storage, "draft", &Draft { name: "pdu".to_owned() }).unwrap();
    assert_eq!(storage.get_item("draft").unwrap().as_deref(), Some(r#"{"name":"pdu"}"#));

    let loaded: Option<Draft> = load_json(&storage, "draft").unwrap();
    assert_eq!(loaded, Some(Draft { name: "pdu".to_owned() }));
}

#[test]
fn load_json_reports_malformed_value_with_key() {
    let storage = MemoryStorage::new();
    storage.set_item("draft", "{not json").unwrap();
    let err = load_json::<Draft>(&storage, "draft").unwrap_err();
    match err {
        StorageError::Malformed { key, .. } => assert_eq!(key, "draft"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn set_item_overwrites() {
    let storage = MemoryStorage::new();
    storage.set_item("k", "1").unwrap();
    storage.set_item("k", "2").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("2"));
}
