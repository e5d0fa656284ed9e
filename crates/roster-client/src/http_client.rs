use anyhow::{bail, Result};
use async_trait::async_trait;
use roster_types::{Character, CharacterPage};
use std::time::Duration;

use crate::CharacterClient;

/// HTTP client for a remote character catalog.
///
/// One `GET` per call against the catalog's `people/` endpoint; a search is
/// the same endpoint with a `search` query parameter. No retries.
pub struct HttpCharacterClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpCharacterClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn list_url(&self) -> String {
        format!("{}/people/", self.base_url.trim_end_matches('/'))
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}?search={}", self.list_url(), urlencoding::encode(query))
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Character>> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("Character catalog returned {}", response.status());
        }

        let page: CharacterPage = response.json().await?;
        Ok(page.results)
    }
}

#[async_trait]
impl CharacterClient for HttpCharacterClient {
    async fn list_all(&self) -> Result<Vec<Character>> {
        self.fetch(&self.list_url()).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Character>> {
        self.fetch(&self.search_url(query)).await
    }
}
