use anyhow::{anyhow, Result};
use async_trait::async_trait;
use roster_types::Character;

use crate::{fixtures, CharacterClient};

/// Client serving the canned roster without touching the network.
///
/// Used by the test suites and the CLI's offline mode. A failing variant
/// rejects every call with a configured message, which is how the failure
/// path is exercised end to end.
pub struct FixtureCharacterClient {
    characters: Vec<Character>,
    failure: Option<String>,
}

impl FixtureCharacterClient {
    /// Create a client resolving with the default canned roster.
    pub fn new() -> Self {
        Self::with_characters(fixtures::characters())
    }

    /// Create a client resolving with a specific roster.
    pub fn with_characters(characters: Vec<Character>) -> Self {
        Self {
            characters,
            failure: None,
        }
    }

    /// Create a client rejecting every call with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            characters: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl Default for FixtureCharacterClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterClient for FixtureCharacterClient {
    async fn list_all(&self) -> Result<Vec<Character>> {
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(self.characters.clone()),
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<Character>> {
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(fixtures::matching(&self.characters, query)),
        }
    }
}
