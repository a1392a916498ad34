//! Catalog storage abstraction.
//!
//! - [`local::LocalStore`]: redb-backed, fully offline
//! - [`remote::RemoteStore`]: REST backend over HTTP
//!
//! The app holds a [`sync::CatalogService`] wrapping a `Box<dyn EntryStore>`
//! and every catalog mutation goes through it.

pub mod local;
pub mod remote;
pub mod sync;

use async_trait::async_trait;
use thiserror::Error;

use crate::entry::{Entry, EntryPatch};

/// Catalog failure taxonomy.
///
/// Only `load_all` recovers locally (bundled fallback); everything else is
/// surfaced to the caller unchanged and leaves prior state untouched.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Required field missing or malformed on create/update.
    #[error("validation failed: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    /// Operation referenced a nonexistent id.
    #[error("entry not found: {0}")]
    NotFound(String),

    /// Id collision on create. The allocator prevents this; stores still
    /// reject duplicates.
    #[error("duplicate entry id: {0}")]
    Conflict(String),

    /// Network or store unreachable, including decode failures.
    #[error("transport error: {0}")]
    Transport(String),
}

impl CatalogError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        CatalogError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Transport(err.to_string())
    }
}

/// Durable entry store, addressable by id.
///
/// `find_all` preserves store order (insertion order locally, server order
/// remotely); the showcase slider depends on that.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Human-readable backend name (e.g., "local", "remote").
    fn backend_name(&self) -> &str;

    /// All entries in store order.
    async fn find_all(&self) -> Result<Vec<Entry>, CatalogError>;

    /// One entry by id.
    async fn find(&self, id: &str) -> Result<Entry, CatalogError>;

    /// Insert a new entry. Duplicate ids are rejected with `Conflict`.
    async fn insert(&self, entry: Entry) -> Result<Entry, CatalogError>;

    /// Merge a patch over the stored entry and return the result.
    async fn update(&self, id: &str, patch: &EntryPatch) -> Result<Entry, CatalogError>;

    /// Remove an entry. A second delete of the same id reports `NotFound`.
    async fn delete(&self, id: &str) -> Result<(), CatalogError>;
}

pub use sync::CatalogService;
