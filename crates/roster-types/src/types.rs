//! Core data types shared across the roster crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single character record from the remote catalog.
///
/// Only `name` is interpreted anywhere in this workspace. Every other field
/// the catalog returns is preserved verbatim in `extra`, so a record
/// serializes back to exactly what came off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// The character's name.
    pub name: String,
    /// All remaining catalog fields, passed through uninterpreted.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Character {
    /// Create a character carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// One page of the catalog's `people/` listing as it appears on the wire.
///
/// The client unwraps `results` before resolving; the pagination cursors are
/// carried for completeness but never followed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// Total number of characters the catalog knows about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// The characters on this page.
    pub results: Vec<Character>,
}

/// An invocation intent handed to the fetch coordinator.
///
/// Owned transiently by the caller and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Fetch the full character listing.
    ListAll,
    /// Fetch the characters matching a query. The query is forwarded to the
    /// catalog unmodified; an empty string passes through unchanged.
    Search {
        /// The uninterpreted search text.
        query: String,
    },
}

impl FetchRequest {
    /// Create a search request.
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
        }
    }
}
