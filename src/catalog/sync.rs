//! Catalog synchronization: the single source of truth for entry CRUD.
//!
//! The service performs exactly one load at startup and thereafter serves
//! caller-driven mutations. `load_all` is the one place that recovers
//! locally: a failed or undecodable fetch yields the bundled dataset so the
//! browser stays usable offline or misconfigured.

use super::{CatalogError, EntryStore};
use crate::entry::{Entry, EntryDraft, EntryPatch};
use crate::fallback::bundled_entries;
use crate::ident::allocate_id;

pub struct CatalogService {
    store: Box<dyn EntryStore>,
}

impl CatalogService {
    pub fn new(store: Box<dyn EntryStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &str {
        self.store.backend_name()
    }

    /// Fetch the authoritative entry list, surfacing failures.
    ///
    /// Both branches are observable here; `load_all` applies the fallback
    /// policy on top.
    pub async fn load_remote(&self) -> Result<Vec<Entry>, CatalogError> {
        self.store.find_all().await
    }

    /// Fetch the entry list, substituting the bundled dataset on failure.
    /// Never errors and never retries.
    pub async fn load_all(&self) -> Vec<Entry> {
        match self.load_remote().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Catalog load from {} backend failed ({}); using bundled dataset",
                    self.store.backend_name(),
                    e
                );
                bundled_entries()
            }
        }
    }

    /// Seed an empty store with the bundled dataset. Returns how many
    /// entries were written (0 when the store already has data).
    pub async fn seed_if_empty(&self) -> Result<usize, CatalogError> {
        if !self.store.find_all().await?.is_empty() {
            return Ok(0);
        }
        let seed = bundled_entries();
        let count = seed.len();
        for entry in seed {
            self.store.insert(entry).await?;
        }
        Ok(count)
    }

    /// Validate and persist a draft, allocating an id when the draft has
    /// none. Returns the stored entry including server-assigned fields.
    pub async fn create(&self, draft: EntryDraft) -> Result<Entry, CatalogError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(CatalogError::Validation { fields: missing });
        }

        let id = match draft.id.clone() {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                let known: Vec<String> = self
                    .store
                    .find_all()
                    .await?
                    .into_iter()
                    .map(|e| e.id)
                    .collect();
                allocate_id(&known)
            }
        };

        self.store.insert(draft.into_entry(id)).await
    }

    /// Merge a patch over the stored entry. Asset refs are replaced only
    /// when the patch supplies a new reference.
    pub async fn update(&self, id: &str, patch: &EntryPatch) -> Result<Entry, CatalogError> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, Rarity, Vec3};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory store with the same contract as the real backends.
    #[derive(Default)]
    struct MemStore {
        entries: Mutex<Vec<Entry>>,
    }

    #[async_trait]
    impl EntryStore for MemStore {
        fn backend_name(&self) -> &str {
            "mem"
        }

        async fn find_all(&self) -> Result<Vec<Entry>, CatalogError> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn find(&self, id: &str) -> Result<Entry, CatalogError> {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| CatalogError::NotFound(id.to_string()))
        }

        async fn insert(&self, entry: Entry) -> Result<Entry, CatalogError> {
            let mut entries = self.entries.lock().unwrap();
            if entries.iter().any(|e| e.id == entry.id) {
                return Err(CatalogError::Conflict(entry.id));
            }
            entries.push(entry.clone());
            Ok(entry)
        }

        async fn update(&self, id: &str, patch: &EntryPatch) -> Result<Entry, CatalogError> {
            let mut entries = self.entries.lock().unwrap();
            let entry = entries
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
            patch.apply(entry);
            Ok(entry.clone())
        }

        async fn delete(&self, id: &str) -> Result<(), CatalogError> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.id != id);
            if entries.len() == before {
                return Err(CatalogError::NotFound(id.to_string()));
            }
            Ok(())
        }
    }

    /// Store whose every operation fails with a transport error.
    struct UnreachableStore;

    #[async_trait]
    impl EntryStore for UnreachableStore {
        fn backend_name(&self) -> &str {
            "unreachable"
        }

        async fn find_all(&self) -> Result<Vec<Entry>, CatalogError> {
            Err(CatalogError::Transport("connection refused".to_string()))
        }

        async fn find(&self, _id: &str) -> Result<Entry, CatalogError> {
            Err(CatalogError::Transport("connection refused".to_string()))
        }

        async fn insert(&self, _entry: Entry) -> Result<Entry, CatalogError> {
            Err(CatalogError::Transport("connection refused".to_string()))
        }

        async fn update(&self, _id: &str, _patch: &EntryPatch) -> Result<Entry, CatalogError> {
            Err(CatalogError::Transport("connection refused".to_string()))
        }

        async fn delete(&self, _id: &str) -> Result<(), CatalogError> {
            Err(CatalogError::Transport("connection refused".to_string()))
        }
    }

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: format!("Creature {}", id),
            category: Category::Passive,
            health: 10.0,
            damage: "0 (None)".to_string(),
            behavior: "Idle".to_string(),
            habitat: "Everywhere".to_string(),
            drops: vec![],
            rarity: Rarity::Common,
            description: "test".to_string(),
            model: "m.glb".to_string(),
            image: "i.png".to_string(),
            banner: "b.jpg".to_string(),
            sound: "s.ogg".to_string(),
            scale: 1.0,
            position: Vec3::default(),
            rotation: Vec3::default(),
            weaknesses: vec![],
            abilities: vec![],
            created_at: None,
            updated_at: None,
            is_playing_sound: false,
        }
    }

    fn draft(name: &str) -> EntryDraft {
        EntryDraft {
            id: None,
            name: name.to_string(),
            category: Some(Category::Hostile),
            health: 20.0,
            damage: "6 (Fireball)".to_string(),
            behavior: "Shoots fireballs".to_string(),
            habitat: "Nether fortresses".to_string(),
            drops: vec!["Blaze Rod".to_string()],
            rarity: Some(Rarity::Uncommon),
            description: "A floating fiery sentinel.".to_string(),
            model: "/uploads/models/blaze.glb".to_string(),
            image: "/uploads/images/blaze.png".to_string(),
            banner: "/uploads/banners/blaze.jpg".to_string(),
            sound: "/uploads/sounds/blaze.ogg".to_string(),
            scale: 1.0,
            position: Vec3::default(),
            rotation: Vec3::default(),
            weaknesses: vec![],
            abilities: vec![],
        }
    }

    fn service_with(ids: &[&str]) -> CatalogService {
        let store = MemStore::default();
        {
            let mut entries = store.entries.lock().unwrap();
            for id in ids {
                entries.push(entry(id));
            }
        }
        CatalogService::new(Box::new(store))
    }

    #[tokio::test]
    async fn test_load_all_returns_store_contents() {
        let service = service_with(&["1", "2"]);
        let entries = service.load_all().await;
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_load_all_falls_back_on_transport_failure() {
        let service = CatalogService::new(Box::new(UnreachableStore));

        let entries = service.load_all().await;
        assert_eq!(entries.len(), bundled_entries().len());
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Pig", "Creeper", "Enderman"]);
    }

    #[tokio::test]
    async fn test_load_remote_surfaces_the_failure() {
        let service = CatalogService::new(Box::new(UnreachableStore));
        let err = service.load_remote().await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[tokio::test]
    async fn test_create_allocates_next_id() {
        let service = service_with(&["1", "2", "5"]);

        let created = service.create(draft("Blaze")).await.unwrap();
        assert_eq!(created.id, "6");

        let all = service.load_remote().await.unwrap();
        assert_eq!(all.last().unwrap().id, "6");
    }

    #[tokio::test]
    async fn test_create_on_empty_store_starts_at_one() {
        let service = service_with(&[]);
        let created = service.create(draft("Blaze")).await.unwrap();
        assert_eq!(created.id, "1");
    }

    #[tokio::test]
    async fn test_create_honors_explicit_id() {
        let service = service_with(&["1"]);
        let mut d = draft("Blaze");
        d.id = Some("42".to_string());
        let created = service.create(d).await.unwrap();
        assert_eq!(created.id, "42");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let service = service_with(&[]);
        let mut d = draft("Blaze");
        d.name.clear();
        d.sound.clear();

        let err = service.create(d).await.unwrap_err();
        match err {
            CatalogError::Validation { fields } => {
                assert!(fields.contains(&"name".to_string()));
                assert!(fields.contains(&"sound".to_string()));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        // Nothing was persisted
        assert!(service.load_remote().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_explicit_id_is_conflict() {
        let service = service_with(&["1"]);
        let mut d = draft("Blaze");
        d.id = Some("1".to_string());

        let err = service.create(d).await.unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let service = service_with(&["1"]);
        let err = service
            .update("99", &EntryPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref id) if id == "99"));
    }

    #[tokio::test]
    async fn test_update_retains_asset_refs() {
        let service = service_with(&["1"]);
        let patch = EntryPatch {
            name: Some("Piglet".to_string()),
            banner: Some("/uploads/banners/piglet.jpg".to_string()),
            ..Default::default()
        };

        let updated = service.update("1", &patch).await.unwrap();
        assert_eq!(updated.name, "Piglet");
        assert_eq!(updated.banner, "/uploads/banners/piglet.jpg");
        // Untouched asset refs survive
        assert_eq!(updated.model, "m.glb");
        assert_eq!(updated.sound, "s.ogg");
    }

    #[tokio::test]
    async fn test_double_delete_reports_not_found() {
        let service = service_with(&["3"]);

        service.delete("3").await.unwrap();
        let err = service.delete("3").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref id) if id == "3"));
    }

    #[tokio::test]
    async fn test_seed_if_empty_populates_once() {
        let service = service_with(&[]);

        let seeded = service.seed_if_empty().await.unwrap();
        assert_eq!(seeded, 3);
        let again = service.seed_if_empty().await.unwrap();
        assert_eq!(again, 0);
        assert_eq!(service.load_remote().await.unwrap().len(), 3);
    }
}
