//! Client capability for the remote character catalog
//!
//! This crate abstracts how the character collection is actually retrieved,
//! providing a unified interface whether the data comes over HTTP or from a
//! canned fixture roster. The coordinator only ever distinguishes "resolved"
//! from "rejected", so implementations own every transport concern
//! (endpoints, status handling, decoding) behind the trait boundary.
//! Swapping the HTTP client for the fixture client is how the test
//! suites and the offline mode run without a network.

use anyhow::Result;
use async_trait::async_trait;
use roster_types::Character;
use std::sync::Arc;
use std::time::Duration;

pub mod fixture_client;
pub mod fixtures;
pub mod http_client;

/// CharacterClient trait for retrieving the character collection.
#[async_trait]
pub trait CharacterClient: Send + Sync {
    /// Fetch the full character listing.
    async fn list_all(&self) -> Result<Vec<Character>>;

    /// Fetch the characters matching `query`. The query arrives exactly as
    /// the caller supplied it; interpreting it is the catalog's business.
    async fn search(&self, query: &str) -> Result<Vec<Character>>;
}

/// Factory for creating CharacterClient instances.
pub struct CharacterClientFactory;

impl CharacterClientFactory {
    /// Create an HTTP client for a remote catalog.
    pub fn create_http_client(base_url: String, timeout: Duration) -> Arc<dyn CharacterClient> {
        Arc::new(http_client::HttpCharacterClient::new(base_url).with_timeout(timeout))
    }

    /// Create a client serving the canned fixture roster.
    pub fn create_fixture_client() -> Arc<dyn CharacterClient> {
        Arc::new(fixture_client::FixtureCharacterClient::new())
    }
}
