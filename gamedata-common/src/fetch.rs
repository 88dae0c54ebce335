//! JSON source loading
//!
//! Remote sources are fetched with a single GET per document, bounded by a
//! fixed 30 second timeout. A failed fetch is fatal to the run: there is no
//! retry, and no output file is written downstream of a failure.

use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::{Error, Result};

const USER_AGENT: &str = concat!("gamedata/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for remote JSON sources
pub struct SourceClient {
    http: reqwest::Client,
}

impl SourceClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        Ok(Self { http })
    }

    /// Fetch a JSON document and decode it into `T`.
    ///
    /// Transport and HTTP status failures map to `SourceUnavailable`;
    /// decode failures map to `SourceMalformed`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        info!("Fetching data from {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            error!("✗ Error fetching {}: {}", url, e);
            Error::SourceUnavailable(format!("{}: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("✗ Error fetching {}: HTTP {}", url, status);
            return Err(Error::SourceUnavailable(format!("{}: HTTP {}", url, status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::SourceUnavailable(format!("{}: {}", url, e)))?;

        let decoded = serde_json::from_str(&body).map_err(|e| {
            error!("✗ Error parsing JSON from {}: {}", url, e);
            Error::SourceMalformed(format!("{}: {}", url, e))
        })?;

        info!("✓ Successfully fetched data");
        Ok(decoded)
    }
}

/// Read and decode a local JSON file.
///
/// A missing or unreadable file maps to `SourceUnavailable`, so callers that
/// treat a local file as optional can match on that variant and fall back to
/// a remote source.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::SourceUnavailable(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::SourceMalformed(format!("{}: {}", path.display(), e)))
}
