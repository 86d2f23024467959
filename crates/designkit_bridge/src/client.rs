//! HTTP client with a disk fallback
//!
//! The live backend is always tried first. When it cannot answer (down,
//! erroring, or holding no state yet) the last durable snapshot written by
//! the server is read instead. That snapshot is raw state only: resolving
//! it needs the catalog, which lives in the server.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use designkit_export::ExportFormat;
use designkit_tokens::{DesignConfig, DesignKitState};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{BridgeError, Result};

pub const DEFAULT_URL: &str = "http://127.0.0.1:3456";
pub const DEFAULT_STATE_FILE: &str = ".designkit/state.json";

/// What the bridge could obtain, from best to worst fidelity
#[derive(Clone, Debug, PartialEq)]
pub enum BridgeData {
    /// Live backend answered with the resolved config
    Resolved(DesignConfig),
    /// Backend unavailable; last mirrored raw state
    RawSnapshot(DesignKitState),
    /// Neither source has anything
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct BridgeClient {
    client: Client,
    base_url: String,
    mirror: PathBuf,
}

impl BridgeClient {
    pub fn new(base_url: impl Into<String>, mirror: impl Into<PathBuf>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(3)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            mirror: mirror.into(),
        })
    }

    /// `DESIGNKIT_URL` and `DESIGNKIT_STATE_FILE`, or their defaults
    pub fn from_env() -> Result<Self> {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self::new(
            var("DESIGNKIT_URL").unwrap_or_else(|| DEFAULT_URL.to_string()),
            var("DESIGNKIT_STATE_FILE").unwrap_or_else(|| DEFAULT_STATE_FILE.to_string()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn mirror(&self) -> &Path {
        &self.mirror
    }

    /// Resolved config from the backend, else the mirrored raw state
    pub async fn fetch(&self) -> BridgeData {
        match self.get_json::<DesignConfig>("/config").await {
            Ok(Some(config)) => return BridgeData::Resolved(config),
            Ok(None) => debug!("backend has no state yet"),
            Err(err) => self.log_fallback(&err),
        }
        match read_mirror(&self.mirror) {
            Some(state) => BridgeData::RawSnapshot(state),
            None => BridgeData::Unavailable,
        }
    }

    /// Raw state from the backend, else the mirror
    pub async fn state(&self) -> Option<DesignKitState> {
        match self.get_json::<DesignKitState>("/state").await {
            Ok(Some(state)) => return Some(state),
            Ok(None) => debug!("backend has no state yet"),
            Err(err) => self.log_fallback(&err),
        }
        read_mirror(&self.mirror)
    }

    /// Export through the live backend; `Ok(None)` when it holds no state
    pub async fn export(&self, format: ExportFormat) -> Result<Option<String>> {
        let url = format!("{}/export/{}", self.base_url, format.id());
        let resp = self.client.get(&url).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(resp.text().await?)),
            status => Err(BridgeError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(resp.json().await?)),
            status => Err(BridgeError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            }),
        }
    }

    fn log_fallback(&self, err: &BridgeError) {
        warn!(
            url = %self.base_url,
            mirror = %self.mirror.display(),
            error = %err,
            "designkit backend unavailable, reading mirror"
        );
    }
}

/// Last mirrored state; missing is silent, unreadable is logged
fn read_mirror(path: &Path) -> Option<DesignKitState> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "state mirror unreadable");
            return None;
        }
    };
    serde_json::from_str(&content)
        .map_err(|err| warn!(path = %path.display(), error = %err, "state mirror malformed"))
        .ok()
}
