//! The filesystem-backed document store.
//!
//! [`FsStore`] is the exclusive owner of one base directory. Every operation
//! opens and fully re-reads the relevant file(s); there is no cached index,
//! trading throughput for simplicity and crash-safety.
//!
//! # Consistency discipline
//!
//! The manifest and the per-collection backing files are independent files
//! with no shared transaction, so mutations always touch the backing file
//! first and the manifest second. A crash between the two can leave a
//! manifest `size` drifted from reality; [`FsStoreBuilder`] heals that on
//! startup by recounting every collection's lines.
//!
//! # Concurrency
//!
//! All access is serialized through one async read-write lock: read-only
//! operations share a read guard, mutating operations take the write guard.
//! Nothing else may write into the base directory while the store is alive.

use async_trait::async_trait;
use mea::rwlock::RwLock;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use linedoc_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    collection::CollectionEntry,
    document::StoredDocument,
    error::{StoreError, StoreResult},
    validate::RESERVED_COLLECTION_NAME,
};

use crate::{
    config::{CreateMode, StoreConfig},
    file,
};

/// File name of the manifest inside the collections directory.
pub const MANIFEST_FILE: &str = "collections.json";

const COLLECTIONS_DIR: &str = "collections";

/// Line-delimited JSON document store rooted at one base directory.
#[derive(Debug)]
pub struct FsStore {
    collections_dir: PathBuf,
    manifest_path: PathBuf,
    lock: RwLock<()>,
}

impl FsStore {
    /// Creates a builder for the given configuration.
    pub fn builder(config: StoreConfig) -> FsStoreBuilder {
        FsStoreBuilder { config }
    }

    /// Opens the store, creating the directory layout if needed.
    ///
    /// Safe to call repeatedly on the same directory: with
    /// [`CreateMode::Update`] nothing existing is overwritten or truncated.
    /// [`CreateMode::Replace`] wipes the base directory first. After the
    /// layout exists, manifest sizes are reconciled against the backing
    /// files.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        if config.create_mode == CreateMode::Replace && config.base_dir.exists() {
            fs::remove_dir_all(&config.base_dir)?;
        }

        let collections_dir = config.base_dir.join(COLLECTIONS_DIR);
        fs::create_dir_all(&collections_dir)?;

        let manifest_path = collections_dir.join(MANIFEST_FILE);
        file::ensure_exists(&manifest_path)?;

        let store = Self {
            collections_dir,
            manifest_path,
            lock: RwLock::new(()),
        };
        store.reconcile_sizes()?;

        info!("opened document store at {}", config.base_dir.display());
        Ok(store)
    }

    fn backing_path(&self, name: &str) -> PathBuf {
        self.collections_dir.join(format!("{name}.json"))
    }

    fn read_manifest(&self) -> StoreResult<Vec<CollectionEntry>> {
        file::read_lines(&self.manifest_path)
    }

    fn write_manifest(&self, entries: &[CollectionEntry]) -> StoreResult<()> {
        file::write_lines(&self.manifest_path, entries)
    }

    fn read_documents(&self, path: &Path) -> StoreResult<Vec<StoredDocument>> {
        file::read_lines(path)
    }

    /// Looks up a manifest entry, raising the typed failure for unknown names.
    fn require_entry<'a>(
        entries: &'a [CollectionEntry],
        name: &str,
    ) -> StoreResult<&'a CollectionEntry> {
        entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| StoreError::CollectionNotFound(name.to_string()))
    }

    /// Rejects the name that would clobber the manifest's own file.
    fn reject_reserved(name: &str) -> StoreResult<()> {
        if name == RESERVED_COLLECTION_NAME {
            return Err(StoreError::Validation(format!(
                "Name cannot be '{RESERVED_COLLECTION_NAME}'."
            )));
        }
        Ok(())
    }

    /// Recounts every collection's backing file and rewrites the manifest if
    /// any `size` drifted (for example after a crash between a backing-file
    /// write and the manifest update). A manifest entry whose backing file
    /// vanished gets an empty file back.
    fn reconcile_sizes(&self) -> StoreResult<()> {
        let mut entries = self.read_manifest()?;
        let mut drifted = false;

        for entry in &mut entries {
            let path = self.backing_path(&entry.name);
            if !path.exists() {
                warn!("recreating missing backing file for collection '{}'", entry.name);
                file::create_empty(&path)?;
            }
            let actual = self.read_documents(&path)?.len() as u64;
            if entry.size != actual {
                warn!(
                    "collection '{}' size drifted: manifest {} vs {} on disk",
                    entry.name, entry.size, actual
                );
                entry.size = actual;
                drifted = true;
            }
        }

        if drifted {
            self.write_manifest(&entries)?;
        }
        Ok(())
    }

    /// Replaces one collection's manifest line with `updated`, preserving the
    /// order of all other lines.
    fn replace_manifest_entry(&self, name: &str, updated: CollectionEntry) -> StoreResult<()> {
        let entries: Vec<CollectionEntry> = self
            .read_manifest()?
            .into_iter()
            .map(|entry| {
                if entry.name == name {
                    updated.clone()
                } else {
                    entry
                }
            })
            .collect();
        self.write_manifest(&entries)
    }
}

#[async_trait]
impl StoreBackend for FsStore {
    async fn collection_exists(&self, name: &str) -> StoreResult<bool> {
        let _guard = self.lock.read().await;
        Ok(self.read_manifest()?.iter().any(|entry| entry.name == name))
    }

    async fn create_collection(&self, name: &str) -> StoreResult<()> {
        Self::reject_reserved(name)?;

        let _guard = self.lock.write().await;
        let entries = self.read_manifest()?;
        if entries.iter().any(|entry| entry.name == name) {
            return Err(StoreError::CollectionAlreadyExists(name.to_string()));
        }

        file::create_empty(&self.backing_path(name))?;
        file::append_line(&self.manifest_path, &CollectionEntry::new(name))?;

        debug!("created collection '{name}'");
        Ok(())
    }

    async fn get_collection(&self, name: &str) -> StoreResult<CollectionEntry> {
        let _guard = self.lock.read().await;
        let entries = self.read_manifest()?;
        Self::require_entry(&entries, name).cloned()
    }

    async fn list_collections(&self) -> StoreResult<Vec<CollectionEntry>> {
        let _guard = self.lock.read().await;
        self.read_manifest()
    }

    async fn delete_collection(&self, name: &str) -> StoreResult<()> {
        let _guard = self.lock.write().await;
        let entries = self.read_manifest()?;
        Self::require_entry(&entries, name)?;

        // Backing file first, manifest second.
        fs::remove_file(self.backing_path(name))?;
        let survivors: Vec<CollectionEntry> =
            entries.into_iter().filter(|entry| entry.name != name).collect();
        self.write_manifest(&survivors)?;

        debug!("deleted collection '{name}'");
        Ok(())
    }

    async fn update_collection(&self, name: &str, entry: CollectionEntry) -> StoreResult<()> {
        Self::reject_reserved(&entry.name)?;

        let _guard = self.lock.write().await;
        let entries = self.read_manifest()?;
        Self::require_entry(&entries, name)?;

        if entry.name != name {
            fs::rename(self.backing_path(name), self.backing_path(&entry.name))?;
        }
        self.replace_manifest_entry(name, entry)?;

        Ok(())
    }

    async fn document_exists(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let _guard = self.lock.read().await;
        let entries = self.read_manifest()?;
        Self::require_entry(&entries, collection)?;

        let documents = self.read_documents(&self.backing_path(collection))?;
        Ok(documents.iter().any(|doc| doc.id == id))
    }

    async fn add_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<String> {
        let _guard = self.lock.write().await;
        let entries = self.read_manifest()?;
        let entry = Self::require_entry(&entries, collection)?.clone();

        let document = StoredDocument::with_fresh_id(fields);
        file::append_line(&self.backing_path(collection), &document)?;
        self.replace_manifest_entry(collection, entry.incremented())?;

        debug!("added document {} to collection '{collection}'", document.id);
        Ok(document.id)
    }

    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<StoredDocument> {
        let _guard = self.lock.read().await;
        let entries = self.read_manifest()?;
        Self::require_entry(&entries, collection)?;

        self.read_documents(&self.backing_path(collection))?
            .into_iter()
            .find(|doc| doc.id == id)
            .ok_or_else(|| StoreError::DocumentNotFound(collection.to_string(), id.to_string()))
    }

    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        let _guard = self.lock.read().await;
        let entries = self.read_manifest()?;
        Self::require_entry(&entries, collection)?;

        self.read_documents(&self.backing_path(collection))
    }

    async fn delete_document(&self, collection: &str, id: &str) -> StoreResult<()> {
        let _guard = self.lock.write().await;
        let entries = self.read_manifest()?;
        let entry = Self::require_entry(&entries, collection)?.clone();

        let path = self.backing_path(collection);
        let documents = self.read_documents(&path)?;
        if !documents.iter().any(|doc| doc.id == id) {
            return Err(StoreError::DocumentNotFound(
                collection.to_string(),
                id.to_string(),
            ));
        }

        let survivors: Vec<StoredDocument> =
            documents.into_iter().filter(|doc| doc.id != id).collect();
        file::write_lines(&path, &survivors)?;
        self.replace_manifest_entry(collection, entry.decremented())?;

        debug!("deleted document {id} from collection '{collection}'");
        Ok(())
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<()> {
        let _guard = self.lock.write().await;
        let entries = self.read_manifest()?;
        Self::require_entry(&entries, collection)?;

        let path = self.backing_path(collection);
        let documents = self.read_documents(&path)?;
        if !documents.iter().any(|doc| doc.id == id) {
            return Err(StoreError::DocumentNotFound(
                collection.to_string(),
                id.to_string(),
            ));
        }

        let replacement = StoredDocument::with_id(id, fields);
        let rewritten: Vec<StoredDocument> = documents
            .into_iter()
            .map(|doc| {
                if doc.id == id {
                    replacement.clone()
                } else {
                    doc
                }
            })
            .collect();
        file::write_lines(&path, &rewritten)?;

        debug!("updated document {id} in collection '{collection}'");
        Ok(())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Vec<StoredDocument>> {
        let _guard = self.lock.read().await;
        let entries = self.read_manifest()?;
        Self::require_entry(&entries, collection)?;

        Ok(self
            .read_documents(&self.backing_path(collection))?
            .into_iter()
            .filter(|doc| doc.matches_field(field, value))
            .collect())
    }

    async fn purge_all(&self) -> StoreResult<()> {
        let _guard = self.lock.write().await;
        if !self.manifest_path.exists() {
            return Ok(());
        }

        for dir_entry in fs::read_dir(&self.collections_dir)? {
            let path = dir_entry?.path();
            if path.file_name().is_some_and(|n| n != MANIFEST_FILE) {
                fs::remove_file(&path)?;
            }
        }
        self.write_manifest(&[])?;

        info!("purged all collections");
        Ok(())
    }
}

/// Builder that opens an [`FsStore`] from a [`StoreConfig`].
#[derive(Debug)]
pub struct FsStoreBuilder {
    config: StoreConfig,
}

impl FsStoreBuilder {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl StoreBackendBuilder for FsStoreBuilder {
    type Backend = FsStore;

    async fn build(self) -> StoreResult<Self::Backend> {
        FsStore::open(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linedoc_core::document::DOCUMENT_ID_FIELD;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> FsStore {
        FsStore::open(StoreConfig::new(dir.path())).unwrap()
    }

    fn payload(data: Value) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("data".to_string(), data);
        fields
    }

    fn backing(dir: &TempDir, name: &str) -> PathBuf {
        dir.path().join("collections").join(format!("{name}.json"))
    }

    #[tokio::test]
    async fn create_then_exists_and_get() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);

        store.create_collection("molecules").await.unwrap();

        assert!(store.collection_exists("molecules").await.unwrap());
        let entry = store.get_collection("molecules").await.unwrap();
        assert_eq!(entry, CollectionEntry { name: "molecules".to_string(), size: 0 });
        assert!(backing(&dir, "molecules").exists());
    }

    #[tokio::test]
    async fn create_twice_fails_and_keeps_state() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);

        store.create_collection("molecules").await.unwrap();
        let err = store.create_collection("molecules").await.unwrap_err();
        assert!(matches!(err, StoreError::CollectionAlreadyExists(name) if name == "molecules"));

        let all = store.list_collections().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].size, 0);
    }

    #[tokio::test]
    async fn reserved_manifest_name_is_rejected_by_the_store() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);

        let err = store.create_collection("collections").await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        store.create_collection("ok").await.unwrap();
        let err = store
            .update_collection("ok", CollectionEntry::new("collections"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn list_preserves_creation_order() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);

        for name in ["c", "a", "b"] {
            store.create_collection(name).await.unwrap();
        }

        let names: Vec<String> = store
            .list_collections()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn size_tracks_document_count() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();

        for i in 0..3 {
            store
                .add_document("molecules", payload(json!({"n": i})))
                .await
                .unwrap();
        }

        assert_eq!(store.get_collection("molecules").await.unwrap().size, 3);
        assert_eq!(store.list_documents("molecules").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn document_round_trip_keeps_id_across_update() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();

        let id = store
            .add_document("molecules", payload(json!({"name": "Methane", "smiles": "C"})))
            .await
            .unwrap();

        let doc = store.get_document("molecules", &id).await.unwrap();
        assert_eq!(doc.data().unwrap().get("name"), Some(&json!("Methane")));

        store
            .update_document("molecules", &id, payload(json!({"name": "Ethane"})))
            .await
            .unwrap();

        let doc = store.get_document("molecules", &id).await.unwrap();
        assert_eq!(doc.id, id);
        assert_eq!(doc.data().unwrap().get("name"), Some(&json!("Ethane")));
        assert_eq!(doc.data().unwrap().get("smiles"), None);
    }

    #[tokio::test]
    async fn update_ignores_caller_supplied_id() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();

        let id = store
            .add_document("molecules", payload(json!({"name": "Methane"})))
            .await
            .unwrap();

        let mut fields = payload(json!({"name": "Ethane"}));
        fields.insert(DOCUMENT_ID_FIELD.to_string(), json!("forged-id"));
        store.update_document("molecules", &id, fields).await.unwrap();

        assert!(store.document_exists("molecules", &id).await.unwrap());
        assert!(!store.document_exists("molecules", "forged-id").await.unwrap());
    }

    #[tokio::test]
    async fn delete_decrements_size_and_keeps_survivors_in_order() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();

        let first = store
            .add_document("molecules", payload(json!({"n": 1})))
            .await
            .unwrap();
        let second = store
            .add_document("molecules", payload(json!({"n": 2})))
            .await
            .unwrap();
        let third = store
            .add_document("molecules", payload(json!({"n": 3})))
            .await
            .unwrap();

        store.delete_document("molecules", &second).await.unwrap();

        assert_eq!(store.get_collection("molecules").await.unwrap().size, 2);
        assert!(!store.document_exists("molecules", &second).await.unwrap());

        let remaining: Vec<String> = store
            .list_documents("molecules")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(remaining, vec![first, third]);
    }

    #[tokio::test]
    async fn find_by_field_matches_text_form() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();

        store
            .add_document("molecules", payload(json!({"molecule_id": 1})))
            .await
            .unwrap();
        store
            .add_document("molecules", payload(json!({"molecule_id": 2})))
            .await
            .unwrap();

        let found = store
            .find_by_field("molecules", "molecule_id", "1")
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].data().unwrap().get("molecule_id"), Some(&json!(1)));

        let none = store
            .find_by_field("molecules", "molecule_id", "3")
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn find_by_field_molecules_scenario() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();

        let a = store
            .add_document("molecules", payload(json!({"name": "Methane", "smiles": "C"})))
            .await
            .unwrap();
        let b = store
            .add_document("molecules", payload(json!({"name": "Methane"})))
            .await
            .unwrap();
        store
            .add_document("molecules", payload(json!({"name": "Ethane"})))
            .await
            .unwrap();

        let found = store
            .find_by_field("molecules", "name", "Methane")
            .await
            .unwrap();
        let ids: Vec<String> = found.into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn update_collection_renames_backing_file() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();
        store
            .add_document("molecules", payload(json!({"name": "Methane"})))
            .await
            .unwrap();

        store
            .update_collection(
                "molecules",
                CollectionEntry { name: "compounds".to_string(), size: 1 },
            )
            .await
            .unwrap();

        assert!(!backing(&dir, "molecules").exists());
        assert!(backing(&dir, "compounds").exists());
        assert!(!store.collection_exists("molecules").await.unwrap());

        let entry = store.get_collection("compounds").await.unwrap();
        assert_eq!(entry.size, 1);
        assert_eq!(store.list_documents("compounds").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_collection_removes_backing_file() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();
        store.create_collection("atoms").await.unwrap();

        store.delete_collection("molecules").await.unwrap();

        assert!(!backing(&dir, "molecules").exists());
        assert!(!store.collection_exists("molecules").await.unwrap());
        assert!(store.collection_exists("atoms").await.unwrap());
    }

    #[tokio::test]
    async fn missing_collection_is_a_typed_failure() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);

        let err = store.get_collection("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::CollectionNotFound(name) if name == "nope"));

        assert!(store
            .add_document("nope", payload(json!({})))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store.list_documents("nope").await.unwrap_err().is_not_found());
        assert!(store.delete_collection("nope").await.unwrap_err().is_not_found());
        assert!(store
            .find_by_field("nope", "a", "b")
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store.document_exists("nope", "x").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn missing_document_is_a_typed_failure() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();

        let err = store.get_document("molecules", "ghost").await.unwrap_err();
        assert!(
            matches!(err, StoreError::DocumentNotFound(ref c, ref i) if c == "molecules" && i == "ghost")
        );

        assert!(store
            .delete_document("molecules", "ghost")
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store
            .update_document("molecules", "ghost", payload(json!({})))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(!store.document_exists("molecules", "ghost").await.unwrap());
    }

    #[tokio::test]
    async fn purge_all_empties_the_store_but_keeps_the_manifest() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();
        store.create_collection("atoms").await.unwrap();
        store
            .add_document("molecules", payload(json!({"name": "Methane"})))
            .await
            .unwrap();

        store.purge_all().await.unwrap();

        let manifest = dir.path().join("collections").join(MANIFEST_FILE);
        assert!(manifest.exists());
        assert_eq!(fs::read_to_string(&manifest).unwrap(), "");
        assert!(!backing(&dir, "molecules").exists());
        assert!(!backing(&dir, "atoms").exists());
        assert!(store.list_collections().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn purge_all_is_a_noop_without_a_manifest() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        fs::remove_file(dir.path().join("collections").join(MANIFEST_FILE)).unwrap();

        store.purge_all().await.unwrap();
    }

    #[tokio::test]
    async fn reopening_keeps_existing_data() {
        let dir = TempDir::new().unwrap();
        let id;
        {
            let store = open(&dir);
            store.create_collection("molecules").await.unwrap();
            id = store
                .add_document("molecules", payload(json!({"name": "Methane"})))
                .await
                .unwrap();
        }

        let store = open(&dir);
        let doc = store.get_document("molecules", &id).await.unwrap();
        assert_eq!(doc.data().unwrap().get("name"), Some(&json!("Methane")));
        assert_eq!(store.get_collection("molecules").await.unwrap().size, 1);
    }

    #[tokio::test]
    async fn replace_mode_wipes_the_base_directory() {
        let dir = TempDir::new().unwrap();
        {
            let store = open(&dir);
            store.create_collection("molecules").await.unwrap();
        }

        let store = FsStore::open(
            StoreConfig::new(dir.path()).with_create_mode(CreateMode::Replace),
        )
        .unwrap();
        assert!(store.list_collections().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reopen_heals_a_drifted_manifest_size() {
        let dir = TempDir::new().unwrap();
        {
            let store = open(&dir);
            store.create_collection("molecules").await.unwrap();
            store
                .add_document("molecules", payload(json!({"n": 1})))
                .await
                .unwrap();
            store
                .add_document("molecules", payload(json!({"n": 2})))
                .await
                .unwrap();
        }

        // Simulate a crash that landed the documents but not the manifest.
        let manifest = dir.path().join("collections").join(MANIFEST_FILE);
        fs::write(&manifest, "{\"name\":\"molecules\",\"size\":7}\n").unwrap();

        let store = open(&dir);
        assert_eq!(store.get_collection("molecules").await.unwrap().size, 2);
    }

    #[tokio::test]
    async fn blank_lines_in_backing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        store.create_collection("molecules").await.unwrap();
        let id = store
            .add_document("molecules", payload(json!({"n": 1})))
            .await
            .unwrap();

        let path = backing(&dir, "molecules");
        let mut content = fs::read_to_string(&path).unwrap();
        content.push_str("\n   \n");
        fs::write(&path, content).unwrap();

        assert_eq!(store.list_documents("molecules").await.unwrap().len(), 1);
        assert!(store.document_exists("molecules", &id).await.unwrap());
    }

    #[tokio::test]
    async fn builder_opens_the_store() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::builder(StoreConfig::new(dir.path()))
            .build()
            .await
            .unwrap();
        store.create_collection("molecules").await.unwrap();
        assert!(store.collection_exists("molecules").await.unwrap());
    }
}
