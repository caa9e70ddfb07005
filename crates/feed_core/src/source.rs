//! Where notification payloads come from.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{decode_payload, RawRecord};
use url::Url;

use crate::error::LoadError;

#[async_trait]
pub trait NotificationSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Single GET against the configured endpoint. No retry and no timeout
/// beyond what the transport imposes.
pub struct HttpSource {
    http: Client,
    endpoint: Url,
}

impl HttpSource {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl NotificationSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        let response = self.http.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        let body = response.bytes().await?;
        Ok(decode_payload(&body)?)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Reads the payload from a local JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NotificationSource for FileSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(decode_payload(&body)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory payload.
pub struct StaticSource {
    records: Vec<RawRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        Ok(Self::new(decode_payload(body.as_bytes())?))
    }
}

#[async_trait]
impl NotificationSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static({} records)", self.records.len())
    }
}

/// Source that always fails, used where no endpoint is reachable.
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl NotificationSource for UnavailableSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        Err(LoadError::Unavailable(self.reason.clone()))
    }

    fn describe(&self) -> String {
        "unavailable".to_string()
    }
}
