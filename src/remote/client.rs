//! reqwest client for api.alquran.cloud

use super::RemoteSource;
use super::wire::ApiResponse;
use crate::config::RemoteConfig;
use crate::error::{Error, Result};
use crate::types::{RemoteChapter, checked_chapter};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// A successful response kept for reuse
#[derive(Debug, Clone)]
struct CachedChapter {
    fetched_at: Instant,
    chapter: RemoteChapter,
}

/// Upstream client with a time-bounded response cache
///
/// The cache is keyed by request URL and only ever holds successful
/// responses. It is a transport optimisation; disabling it (`cache_ttl: None`)
/// changes no results.
pub struct AlQuranCloudClient {
    http: reqwest::Client,
    base_url: String,
    cache_ttl: Option<Duration>,
    cache: RwLock<HashMap<String, CachedChapter>>,
}

impl AlQuranCloudClient {
    /// Create a client from the remote settings
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache_ttl: config.cache_ttl,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// URL of a multi-edition chapter request
    pub fn chapter_url(&self, chapter: u16, editions: &[String]) -> String {
        format!(
            "{}/surah/{}/editions/{}",
            self.base_url,
            chapter,
            editions.join(",")
        )
    }

    /// Drop every cached response
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    async fn cached(&self, url: &str) -> Option<RemoteChapter> {
        let ttl = self.cache_ttl?;
        let cache = self.cache.read().await;
        cache
            .get(url)
            .filter(|entry| entry.fetched_at.elapsed() < ttl)
            .map(|entry| entry.chapter.clone())
    }

    async fn remember(&self, url: String, chapter: &RemoteChapter) {
        let Some(ttl) = self.cache_ttl else {
            return;
        };

        let mut cache = self.cache.write().await;
        cache.retain(|_, entry| entry.fetched_at.elapsed() < ttl);
        cache.insert(
            url,
            CachedChapter {
                fetched_at: Instant::now(),
                chapter: chapter.clone(),
            },
        );
    }
}

fn unavailable(chapter: u16, reason: String) -> Error {
    Error::RemoteUnavailable { chapter, reason }
}

#[async_trait]
impl RemoteSource for AlQuranCloudClient {
    async fn fetch(&self, chapter: u16, editions: &[String]) -> Result<RemoteChapter> {
        let chapter = checked_chapter(u32::from(chapter))?;
        if editions.is_empty() {
            return Err(Error::config(
                "remote.editions",
                "at least one edition must be requested",
            ));
        }

        let url = self.chapter_url(chapter, editions);
        if let Some(hit) = self.cached(&url).await {
            debug!(chapter, url = %url, "Serving chapter from response cache");
            return Ok(hit);
        }

        debug!(chapter, url = %url, "Fetching chapter from upstream");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(chapter, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(chapter, status = %status, "Upstream returned an error status");
            return Err(unavailable(
                chapter,
                format!("upstream returned status {}", status),
            ));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| unavailable(chapter, format!("invalid response body: {}", e)))?;

        let remote = body
            .into_chapter()
            .map_err(|reason| unavailable(chapter, reason))?;

        if remote.number != chapter {
            warn!(
                chapter,
                returned = remote.number,
                "Upstream answered with a different chapter"
            );
        }

        self.remember(url, &remote).await;
        Ok(remote)
    }

    fn name(&self) -> &'static str {
        "alquran.cloud"
    }
}
