//! [`FileStorage`]: the entity registry and its whole-file JSON backing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use hearth_model::{Model, CLASS_KEY};

use crate::error::{StoreError, StoreResult};
use crate::registry::VariantRegistry;

/// Default backing file path.
pub const DEFAULT_STORE_PATH: &str = "file.json";

/// The storage engine: owns every live entity and the backing file.
///
/// Entities live in a `BTreeMap` keyed by `"{Kind}.{id}"`. All operations
/// are synchronous and take `&self`/`&mut self`; there is no internal
/// locking (see the crate docs for the caller's responsibilities).
pub struct FileStorage {
    /// Path of the JSON backing file.
    path: PathBuf,
    /// The live registry. Sole owner of every entity.
    objects: BTreeMap<String, Box<dyn Model>>,
    /// Resolver used by `reload` to reconstruct typed entities.
    variants: VariantRegistry,
}

impl FileStorage {
    /// Create an empty store backed by `path`, resolving persisted records
    /// through `variants`. Nothing is read until [`reload`](Self::reload).
    pub fn open(path: impl Into<PathBuf>, variants: VariantRegistry) -> Self {
        Self {
            path: path.into(),
            objects: BTreeMap::new(),
            variants,
        }
    }

    /// Store at [`DEFAULT_STORE_PATH`] with the built-in domain variants.
    pub fn with_defaults() -> Self {
        Self::open(DEFAULT_STORE_PATH, VariantRegistry::with_domain_models())
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The live registry. Callers observe membership changes through this
    /// reference; it is not a snapshot.
    pub fn all(&self) -> &BTreeMap<String, Box<dyn Model>> {
        &self.objects
    }

    /// Look up one entity by its composite key.
    pub fn get(&self, key: &str) -> Option<&dyn Model> {
        self.objects.get(key).map(|entity| entity.as_ref())
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the registry holds no entities.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All registry keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.objects.keys().map(String::as_str).collect()
    }

    /// Register an entity under `"{Kind}.{id}"` and return the key.
    ///
    /// Upsert semantics: inserting an entity with a key already present
    /// replaces that entry, so re-inserting the same entity is idempotent.
    /// The entity's shape is not validated.
    pub fn insert(&mut self, entity: impl Model + 'static) -> String {
        self.insert_boxed(Box::new(entity))
    }

    fn insert_boxed(&mut self, entity: Box<dyn Model>) -> String {
        let key = entity.storage_key();
        self.objects.insert(key.clone(), entity);
        key
    }

    /// Serialize the whole registry to the backing file.
    ///
    /// Every entry is converted to its attribute record and the resulting
    /// document replaces the entire file content. Prior content is
    /// overwritten unconditionally.
    pub fn save(&self) -> StoreResult<()> {
        let mut document = serde_json::Map::new();
        for (key, entity) in &self.objects {
            document.insert(key.clone(), Value::Object(entity.to_attrs()?));
        }
        let payload = serde_json::to_vec(&document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, payload)?;
        debug!(
            objects = self.objects.len(),
            path = %self.path.display(),
            "store saved"
        );
        Ok(())
    }

    /// Rebuild the registry from the backing file.
    ///
    /// A missing file is a no-op: an empty store is a valid initial state.
    /// Otherwise every persisted record is resolved through the variant
    /// registry and inserted under its own `"{Kind}.{id}"` key, so after a
    /// successful reload [`all`](Self::all) reflects each record exactly
    /// once. An unknown discriminator or malformed record fails the call.
    pub fn reload(&mut self) -> StoreResult<()> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no backing file, starting empty");
            return Ok(());
        }
        let raw = fs::read_to_string(&self.path)?;
        let document: serde_json::Map<String, Value> =
            serde_json::from_str(&raw).map_err(|e| StoreError::MalformedDocument(e.to_string()))?;

        for (key, record) in document {
            let record = match record {
                Value::Object(record) => record,
                _ => {
                    return Err(StoreError::MalformedDocument(format!(
                        "record {key:?} is not an attribute mapping"
                    )))
                }
            };
            let kind = match record.get(CLASS_KEY) {
                Some(Value::String(kind)) => kind.clone(),
                _ => return Err(StoreError::MissingDiscriminator { key }),
            };
            let constructor =
                self.variants
                    .resolve(&kind)
                    .ok_or_else(|| StoreError::UnknownVariant {
                        kind: kind.clone(),
                        key: key.clone(),
                    })?;
            let entity = constructor(&record)?;
            self.insert_boxed(entity);
        }
        debug!(
            objects = self.objects.len(),
            path = %self.path.display(),
            "store reloaded"
        );
        Ok(())
    }

    /// Refresh one entity's `updated_at`, then flush the whole registry.
    ///
    /// This is the explicit-save path for a single entity; the write is
    /// still a whole-registry flush, not a single-entity update.
    pub fn persist(&mut self, key: &str) -> StoreResult<()> {
        match self.objects.get_mut(key) {
            Some(entity) => entity.core_mut().touch(),
            None => return Err(StoreError::NotFound(key.to_string())),
        }
        self.save()
    }
}

impl std::fmt::Debug for FileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStorage")
            .field("path", &self.path)
            .field("objects", &self.objects.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use hearth_model::{AttrMap, City, Place, User};
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    fn store_at(dir: &tempfile::TempDir) -> FileStorage {
        FileStorage::open(
            dir.path().join("file.json"),
            VariantRegistry::with_domain_models(),
        )
    }

    fn attr_snapshot(store: &FileStorage) -> BTreeMap<String, AttrMap> {
        store
            .all()
            .iter()
            .map(|(key, entity)| (key.clone(), entity.to_attrs().unwrap()))
            .collect()
    }

    #[test]
    fn insert_keys_by_kind_and_id() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        let user = User::new();
        let id = user.core.id;
        let key = store.insert(user);
        assert_eq!(key, format!("User.{id}"));
        assert_eq!(store.len(), 1);
        assert!(store.get(&key).is_some());
    }

    #[test]
    fn insert_is_idempotent_per_key() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        let user = User::new();
        store.insert(user.clone());
        store.insert(user);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn distinct_kinds_share_the_registry() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.insert(User::new());
        store.insert(City::new());
        store.insert(Place::new());
        assert_eq!(store.len(), 3);
        let keys = store.keys();
        assert!(keys[0].starts_with("City."));
    }

    #[test]
    fn save_then_reload_roundtrips_the_registry() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        let mut user = User::new();
        user.email = "sam@example.com".into();
        user.first_name = "Sam".into();
        let mut place = Place::new();
        place.name = "Loft".into();
        place.price_by_night = 120;
        place.amenity_ids = vec!["wifi".into()];
        store.insert(user);
        store.insert(place);
        store.save().unwrap();

        let mut fresh = store_at(&dir);
        fresh.reload().unwrap();
        assert_eq!(attr_snapshot(&store), attr_snapshot(&fresh));
    }

    #[test]
    fn reload_without_backing_file_is_a_noop() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.reload().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn saved_record_carries_discriminator_and_timestamps() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        let user = User::new();
        let id = user.core.id;
        let created = user.core.created_at;
        let key = store.insert(user);
        store.save().unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let document: serde_json::Map<String, Value> = serde_json::from_str(&raw).unwrap();
        let record = document.get(&key).unwrap().as_object().unwrap();
        assert_eq!(record.get(CLASS_KEY), Some(&json!("User")));
        assert_eq!(record.get("id"), Some(&json!(id.to_string())));
        assert_eq!(
            record.get("created_at"),
            Some(&json!(created.to_canonical()))
        );
    }

    #[test]
    fn reload_rejects_unknown_variant() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.json");
        let document = json!({
            "Ghost.123": { "__class__": "Ghost", "id": "123" }
        });
        fs::write(&path, document.to_string()).unwrap();

        let mut store = FileStorage::open(&path, VariantRegistry::with_domain_models());
        let err = store.reload().unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnknownVariant { ref kind, .. } if kind == "Ghost"
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn reload_rejects_record_without_discriminator() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.json");
        fs::write(&path, json!({ "User.1": { "id": "1" } }).to_string()).unwrap();

        let mut store = FileStorage::open(&path, VariantRegistry::with_domain_models());
        assert!(matches!(
            store.reload().unwrap_err(),
            StoreError::MissingDiscriminator { .. }
        ));
    }

    #[test]
    fn reload_rejects_non_mapping_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let mut store = FileStorage::open(&path, VariantRegistry::with_domain_models());
        assert!(matches!(
            store.reload().unwrap_err(),
            StoreError::MalformedDocument(_)
        ));
    }

    #[test]
    fn reload_rejects_malformed_timestamp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.json");
        let document = json!({
            "State.9": {
                "__class__": "State",
                "id": "1f0e41b2-32a5-4f2e-8a9a-2d6f54c0a8de",
                "created_at": "last tuesday",
                "updated_at": "last tuesday",
                "name": "Nowhere"
            }
        });
        fs::write(&path, document.to_string()).unwrap();

        let mut store = FileStorage::open(&path, VariantRegistry::with_domain_models());
        assert!(matches!(
            store.reload().unwrap_err(),
            StoreError::Model(_)
        ));
    }

    #[test]
    fn save_overwrites_prior_file_content() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.insert(User::new());
        store.save().unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        let mut emptied = store_at(&dir);
        emptied.save().unwrap();
        let second = fs::read_to_string(store.path()).unwrap();
        assert_ne!(first, second);
        assert_eq!(second, "{}");
    }

    #[test]
    fn persist_refreshes_updated_at_monotonically() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        let key = store.insert(User::new());
        store.save().unwrap();
        let before = store.get(&key).unwrap().core().updated_at;

        store.persist(&key).unwrap();
        let after = store.get(&key).unwrap().core().updated_at;
        assert!(after >= before);

        store.persist(&key).unwrap();
        assert!(store.get(&key).unwrap().core().updated_at >= after);
    }

    #[test]
    fn persist_unknown_key_is_an_error() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        assert!(matches!(
            store.persist("User.missing").unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    // The end-to-end scenario: create, save, then reload in a fresh
    // engine as a new process would at startup.
    #[test]
    fn fresh_engine_sees_saved_entities_at_startup() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        let user = User::new();
        let id = user.core.id;
        let created = user.core.created_at;
        let updated = user.core.updated_at;
        store.insert(user);
        store.save().unwrap();

        let mut next_process = store_at(&dir);
        next_process.reload().unwrap();
        assert_eq!(next_process.len(), 1);
        let entity = next_process.get(&format!("User.{id}")).unwrap();
        assert_eq!(entity.core().id, id);
        assert_eq!(entity.core().created_at, created);
        assert_eq!(entity.core().updated_at, updated);
    }
}
