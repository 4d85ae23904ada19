use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::records::{Entity, FinancialRecord};
use crate::error::{TrendError, TrendResult};

use super::SeriesSource;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// Blocking client for a statically hosted dataset directory.
///
/// The host publishes one entities index plus two files per entity:
/// `{base}/entities.json`, `{base}/{id}-eps.json`,
/// `{base}/{id}-dividends.json`. Files are regenerated in place, so every
/// request carries a nonce query parameter to defeat intermediary caching
/// of a stale revision.
pub struct StaticJsonSource {
    base_url: String,
    client: reqwest::blocking::Client,
    cache_busting: bool,
    nonce: AtomicU64,
}

impl StaticJsonSource {
    pub fn new(base_url: impl Into<String>) -> TrendResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> TrendResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrendError::Transport(format!("http client init failed: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client,
            cache_busting: true,
            nonce: AtomicU64::new(0),
        })
    }

    /// Disables the cache-busting query parameter (useful against local
    /// fixtures that dislike query strings).
    #[must_use]
    pub fn without_cache_busting(mut self) -> Self {
        self.cache_busting = false;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, file: &str) -> String {
        if self.cache_busting {
            let nonce = self.nonce.fetch_add(1, Ordering::Relaxed);
            format!("{}/{file}?cb={nonce}", self.base_url)
        } else {
            format!("{}/{file}", self.base_url)
        }
    }

    fn fetch_json<T: DeserializeOwned>(
        &self,
        file: &str,
        entity_id: Option<&str>,
    ) -> TrendResult<T> {
        let url = self.url_for(file);
        debug!(%url, "fetching dataset file");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| TrendError::Transport(format!("request for `{file}` failed: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(match entity_id {
                Some(entity_id) => TrendError::EntityNotFound {
                    entity_id: entity_id.to_owned(),
                },
                None => TrendError::Transport(format!("`{file}` is not published")),
            });
        }

        let response = response
            .error_for_status()
            .map_err(|e| TrendError::Transport(format!("request for `{file}` failed: {e}")))?;

        response
            .json::<T>()
            .map_err(|e| TrendError::InvalidPayload(format!("failed to decode `{file}`: {e}")))
    }
}

impl SeriesSource for StaticJsonSource {
    fn fetch_entities(&self) -> TrendResult<Vec<Entity>> {
        self.fetch_json("entities.json", None)
    }

    fn fetch_eps_series(&self, entity_id: &str) -> TrendResult<Vec<FinancialRecord>> {
        self.fetch_json(&format!("{entity_id}-eps.json"), Some(entity_id))
    }

    fn fetch_dividend_series(&self, entity_id: &str) -> TrendResult<Vec<FinancialRecord>> {
        self.fetch_json(&format!("{entity_id}-dividends.json"), Some(entity_id))
    }
}
