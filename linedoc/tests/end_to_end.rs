//! End-to-end flow through the facade: the store behaves like the boundary
//! layer expects, from collection creation through purge.

use linedoc::fs::{FsStore, StoreConfig};
use linedoc::prelude::*;
use serde_json::json;
use tempfile::TempDir;

async fn open_store(dir: &TempDir) -> DocumentStore<FsStore> {
    DocumentStore::new(FsStore::open(StoreConfig::new(dir.path())).unwrap())
}

#[tokio::test]
async fn full_collection_and_document_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    validate_collection_name("molecules").unwrap();
    store.create_collection("molecules").await.unwrap();

    let molecules = store.collection("molecules");

    let payload: DocumentPayload =
        serde_json::from_value(json!({"data": {"name": "Methane", "smiles": "C"}})).unwrap();
    let first = molecules.add(payload.into_fields()).await.unwrap();

    let payload: DocumentPayload =
        serde_json::from_value(json!({"data": {"name": "Methane"}})).unwrap();
    let second = molecules.add(payload.into_fields()).await.unwrap();

    let entry = molecules.entry().await.unwrap();
    assert_eq!(entry.size, 2);

    let found = molecules.find_by_field("name", "Methane").await.unwrap();
    let ids: Vec<String> = found.into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first.clone(), second.clone()]);

    molecules.delete(&first).await.unwrap();
    assert!(!molecules.contains(&first).await.unwrap());
    assert!(molecules.contains(&second).await.unwrap());
    assert_eq!(molecules.entry().await.unwrap().size, 1);

    store
        .update_collection("molecules", CollectionEntry { name: "compounds".to_string(), size: 1 })
        .await
        .unwrap();
    assert!(!store.collection_exists("molecules").await.unwrap());
    assert_eq!(store.collection("compounds").list().await.unwrap().len(), 1);

    store.purge_all().await.unwrap();
    assert!(store.list_collections().await.unwrap().is_empty());

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn boundary_error_mapping_contract() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    // 400 family
    assert!(!validate_collection_name("").is_ok());
    store.create_collection("m").await.unwrap();
    let err = store.create_collection("m").await.unwrap_err();
    assert!(!err.is_not_found());

    // 404 family
    assert!(store.get_collection("ghost").await.unwrap_err().is_not_found());
    let err = store.collection("m").get("ghost").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, StoreError::DocumentNotFound(_, _)));
}
