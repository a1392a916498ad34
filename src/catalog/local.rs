//! redb-backed entry store for offline use.
//!
//! Entries are JSON bytes keyed by a monotonic sequence number, so iteration
//! order is insertion order. Updates rewrite in place under the original
//! sequence key and therefore keep an entry's position.

use anyhow::{Context, Result};
use async_trait::async_trait;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::{Path, PathBuf};

use super::{CatalogError, EntryStore};
use crate::entry::{Entry, EntryPatch};

const ENTRIES_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("catalog_entries");

pub struct LocalStore {
    db: Database,
}

impl LocalStore {
    /// Open (or create) the store at the default data path.
    pub fn new() -> Result<Self> {
        Self::open(&Self::db_path()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::create(path).context("Failed to open catalog database")?;
        // Ensure table exists
        let txn = db.begin_write()?;
        {
            let _ = txn.open_table(ENTRIES_TABLE)?;
        }
        txn.commit()?;
        Ok(Self { db })
    }

    fn db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .context("Failed to get data directory")?
            .join("mobdex");
        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
        Ok(data_dir.join("catalog.redb"))
    }

    fn read_all(&self) -> Result<Vec<(u64, Entry)>> {
        let rtxn = self.db.begin_read()?;
        let table = rtxn.open_table(ENTRIES_TABLE)?;
        let mut entries = Vec::new();
        for item in table.iter()? {
            let (key, val) = item?;
            let entry: Entry = serde_json::from_slice(val.value())
                .context("Corrupt entry record in catalog database")?;
            entries.push((key.value(), entry));
        }
        Ok(entries)
    }

    fn seq_for(&self, id: &str) -> Result<Option<u64>> {
        Ok(self
            .read_all()?
            .into_iter()
            .find(|(_, e)| e.id == id)
            .map(|(seq, _)| seq))
    }

    fn next_seq(&self) -> Result<u64> {
        let rtxn = self.db.begin_read()?;
        let table = rtxn.open_table(ENTRIES_TABLE)?;
        let last = table.iter()?.next_back().transpose()?;
        Ok(last.map(|(k, _)| k.value() + 1).unwrap_or(1))
    }

    fn write(&self, seq: u64, entry: &Entry) -> Result<()> {
        let json = serde_json::to_vec(entry)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ENTRIES_TABLE)?;
            table.insert(seq, json.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn remove(&self, seq: u64) -> Result<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ENTRIES_TABLE)?;
            table.remove(seq)?;
        }
        txn.commit()?;
        Ok(())
    }
}

#[async_trait]
impl EntryStore for LocalStore {
    fn backend_name(&self) -> &str {
        "local"
    }

    async fn find_all(&self) -> Result<Vec<Entry>, CatalogError> {
        let entries = self.read_all().map_err(CatalogError::transport)?;
        Ok(entries.into_iter().map(|(_, e)| e).collect())
    }

    async fn find(&self, id: &str) -> Result<Entry, CatalogError> {
        self.read_all()
            .map_err(CatalogError::transport)?
            .into_iter()
            .map(|(_, e)| e)
            .find(|e| e.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn insert(&self, mut entry: Entry) -> Result<Entry, CatalogError> {
        if self
            .seq_for(&entry.id)
            .map_err(CatalogError::transport)?
            .is_some()
        {
            return Err(CatalogError::Conflict(entry.id));
        }
        let now = chrono::Utc::now();
        entry.created_at = Some(now);
        entry.updated_at = Some(now);

        let seq = self.next_seq().map_err(CatalogError::transport)?;
        self.write(seq, &entry).map_err(CatalogError::transport)?;
        Ok(entry)
    }

    async fn update(&self, id: &str, patch: &EntryPatch) -> Result<Entry, CatalogError> {
        let seq = self
            .seq_for(id)
            .map_err(CatalogError::transport)?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        let mut entry = self.find(id).await?;
        patch.apply(&mut entry);
        self.write(seq, &entry).map_err(CatalogError::transport)?;
        Ok(entry)
    }

    async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let seq = self
            .seq_for(id)
            .map_err(CatalogError::transport)?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.remove(seq).map_err(CatalogError::transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, Rarity, Vec3};

    fn test_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(&dir.path().join("catalog.redb")).unwrap();
        (dir, store)
    }

    fn test_entry(id: &str, name: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
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

    #[tokio::test]
    async fn test_empty_store() {
        let (_dir, store) = test_store();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_preserves_insertion_order() {
        let (_dir, store) = test_store();
        // Non-sequential ids on purpose; order must come from insertion
        for (id, name) in [("5", "Ghast"), ("1", "Pig"), ("3", "Spider")] {
            store.insert(test_entry(id, name)).await.unwrap();
        }

        let all = store.find_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "1", "3"]);
    }

    #[tokio::test]
    async fn test_insert_stamps_timestamps() {
        let (_dir, store) = test_store();
        let stored = store.insert(test_entry("1", "Pig")).await.unwrap();
        assert!(stored.created_at.is_some());
        assert!(stored.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_conflict() {
        let (_dir, store) = test_store();
        store.insert(test_entry("1", "Pig")).await.unwrap();

        let err = store.insert(test_entry("1", "Impostor")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(ref id) if id == "1"));
        // Prior state untouched
        assert_eq!(store.find("1").await.unwrap().name, "Pig");
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let (_dir, store) = test_store();
        let err = store.find("99").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref id) if id == "99"));
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_position() {
        let (_dir, store) = test_store();
        store.insert(test_entry("1", "Pig")).await.unwrap();
        store.insert(test_entry("2", "Creeper")).await.unwrap();

        let patch = EntryPatch {
            health: Some(25.0),
            ..Default::default()
        };
        let updated = store.update("1", &patch).await.unwrap();
        assert_eq!(updated.health, 25.0);
        assert_eq!(updated.name, "Pig");

        let ids: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_dir, store) = test_store();
        let err = store
            .update("99", &EntryPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let (_dir, store) = test_store();
        store.insert(test_entry("3", "Spider")).await.unwrap();

        store.delete("3").await.unwrap();
        let err = store.delete("3").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref id) if id == "3"));
    }

    #[tokio::test]
    async fn test_insertion_order_survives_delete() {
        let (_dir, store) = test_store();
        store.insert(test_entry("1", "Pig")).await.unwrap();
        store.insert(test_entry("2", "Creeper")).await.unwrap();
        store.delete("2").await.unwrap();
        store.insert(test_entry("4", "Blaze")).await.unwrap();

        let ids: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
    }
}
