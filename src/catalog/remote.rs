//! HTTP client for the mobdex REST backend.
//!
//! Every response is wrapped in the backend's envelope
//! `{ success, data?, message?, error? }`; non-2xx statuses carry
//! `success: false`. Entries come back in server order (id ascending on the
//! reference backend) and are kept verbatim.

use anyhow::Result;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use super::{CatalogError, EntryStore};
use crate::config::ApiConfig;
use crate::entry::{Entry, EntryPatch};
use async_trait::async_trait;

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn failure_text(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "unknown server error".to_string())
    }
}

/// Resolve a (possibly server-relative) asset ref to an absolute URL.
pub fn asset_url(base_url: &str, asset_ref: &str) -> String {
    if asset_ref.starts_with("http://") || asset_ref.starts_with("https://") {
        asset_ref.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            asset_ref.trim_start_matches('/')
        )
    }
}

pub struct RemoteStore {
    http_client: HttpClient,
    base_url: String,
}

impl RemoteStore {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn entries_url(&self) -> String {
        format!("{}/api/mobs", self.base_url)
    }

    fn entry_url(&self, id: &str) -> String {
        format!("{}/api/mobs/{}", self.base_url, id)
    }

    /// Map a failed envelope to the catalog error taxonomy.
    fn failure(status: StatusCode, text: String, id: &str) -> CatalogError {
        match status {
            StatusCode::NOT_FOUND => CatalogError::NotFound(id.to_string()),
            StatusCode::CONFLICT => CatalogError::Conflict(id.to_string()),
            StatusCode::BAD_REQUEST => {
                // The reference backend reports duplicate-key failures as 400
                if text.to_lowercase().contains("duplicate") {
                    CatalogError::Conflict(id.to_string())
                } else {
                    CatalogError::Validation { fields: vec![text] }
                }
            }
            _ => CatalogError::Transport(text),
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        id: &str,
    ) -> Result<T, CatalogError> {
        let status = response.status();
        let envelope: ApiEnvelope<T> = response.json().await?;
        if !envelope.success {
            return Err(Self::failure(status, envelope.failure_text(), id));
        }
        envelope
            .data
            .ok_or_else(|| CatalogError::Transport("response envelope missing data".to_string()))
    }

    /// Decode an envelope where only success/failure matters (DELETE).
    async fn decode_ack(response: reqwest::Response, id: &str) -> Result<(), CatalogError> {
        let status = response.status();
        let envelope: ApiEnvelope<serde_json::Value> = response.json().await?;
        if !envelope.success {
            return Err(Self::failure(status, envelope.failure_text(), id));
        }
        Ok(())
    }
}

#[async_trait]
impl EntryStore for RemoteStore {
    fn backend_name(&self) -> &str {
        "remote"
    }

    async fn find_all(&self) -> Result<Vec<Entry>, CatalogError> {
        let response = self.http_client.get(self.entries_url()).send().await?;
        Self::decode::<Vec<Entry>>(response, "").await
    }

    async fn find(&self, id: &str) -> Result<Entry, CatalogError> {
        let response = self.http_client.get(self.entry_url(id)).send().await?;
        Self::decode::<Entry>(response, id).await
    }

    async fn insert(&self, entry: Entry) -> Result<Entry, CatalogError> {
        let response = self
            .http_client
            .post(self.entries_url())
            .json(&entry)
            .send()
            .await?;
        Self::decode::<Entry>(response, &entry.id).await
    }

    async fn update(&self, id: &str, patch: &EntryPatch) -> Result<Entry, CatalogError> {
        let response = self
            .http_client
            .put(self.entry_url(id))
            .json(patch)
            .send()
            .await?;
        Self::decode::<Entry>(response, id).await
    }

    async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let response = self.http_client.delete(self.entry_url(id)).send().await?;
        Self::decode_ack(response, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Category;

    #[test]
    fn test_success_envelope_decodes_entries() {
        let body = r#"{
            "success": true,
            "count": 1,
            "data": [{
                "id": "1", "name": "Pig", "type": "Passive", "health": 10,
                "damage": "0 (None)", "behavior": "Wanders", "habitat": "Everywhere",
                "rarity": "Common", "description": "Oink.",
                "model": "/uploads/models/pig.glb", "image": "/uploads/images/pig.png",
                "banner": "/uploads/banners/pig.png", "sound": "/uploads/sounds/pig.mp3"
            }]
        }"#;

        let envelope: ApiEnvelope<Vec<Entry>> = serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        let entries = envelope.data.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, Category::Passive);
    }

    #[test]
    fn test_failure_envelope_prefers_error_field() {
        let body = r#"{"success": false, "message": "Server Error", "error": "boom"}"#;
        let envelope: ApiEnvelope<Vec<Entry>> = serde_json::from_str(body).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.failure_text(), "boom");
    }

    #[test]
    fn test_failure_envelope_falls_back_to_message() {
        let body = r#"{"success": false, "message": "Mob not found"}"#;
        // Entry has no Default impl; missing keys must still decode as None.
        let envelope: ApiEnvelope<Entry> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.failure_text(), "Mob not found");
    }

    #[test]
    fn test_status_mapping() {
        let err = RemoteStore::failure(StatusCode::NOT_FOUND, "Mob not found".into(), "9");
        assert!(matches!(err, CatalogError::NotFound(ref id) if id == "9"));

        let err = RemoteStore::failure(StatusCode::CONFLICT, "exists".into(), "2");
        assert!(matches!(err, CatalogError::Conflict(_)));

        let err = RemoteStore::failure(
            StatusCode::BAD_REQUEST,
            "E11000 duplicate key error".into(),
            "2",
        );
        assert!(matches!(err, CatalogError::Conflict(_)));

        let err = RemoteStore::failure(StatusCode::BAD_REQUEST, "name is required".into(), "");
        assert!(matches!(err, CatalogError::Validation { .. }));

        let err = RemoteStore::failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server Error".into(),
            "",
        );
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[test]
    fn test_asset_url_resolution() {
        assert_eq!(
            asset_url("http://localhost:5000/", "/uploads/sounds/pig.mp3"),
            "http://localhost:5000/uploads/sounds/pig.mp3"
        );
        assert_eq!(
            asset_url("http://localhost:5000", "uploads/sounds/pig.mp3"),
            "http://localhost:5000/uploads/sounds/pig.mp3"
        );
        assert_eq!(
            asset_url("http://localhost:5000", "https://cdn.example.com/pig.mp3"),
            "https://cdn.example.com/pig.mp3"
        );
    }
}
