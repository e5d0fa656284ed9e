//! Fetch lifecycle event types.

use crate::types::Character;
use serde::{Deserialize, Serialize};

/// Error marker substituted when a rejection carries no message of its own.
///
/// Consumers are guaranteed a non-empty `error` on every failure event, even
/// when the client rejected with nothing useful to say.
pub const DEFAULT_FETCH_ERROR: &str = "character fetch failed";

/// The discriminant of a fetch lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchEventType {
    /// A fetch has begun.
    GetCharactersStart,
    /// A fetch resolved with a character collection.
    GetCharactersSuccess,
    /// A fetch was rejected.
    GetCharactersFailure,
}

/// Event marking the start of a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCharactersStartEvent {
    /// Always `true`; consumers fold this straight into their fetching flag.
    #[serde(rename = "isFetching")]
    pub is_fetching: bool,
}

/// Event carrying the characters a fetch resolved with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCharactersSuccessEvent {
    /// Always `false`; the fetch is over.
    #[serde(rename = "isFetching")]
    pub is_fetching: bool,
    /// Exactly the collection the client resolved with, order preserved.
    pub characters: Vec<Character>,
}

/// Event carrying the rejection a fetch ended with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCharactersFailureEvent {
    /// Always `false`; the fetch is over.
    #[serde(rename = "isFetching")]
    pub is_fetching: bool,
    /// Why the fetch failed. Never empty.
    pub error: String,
}

/// A fetch lifecycle event.
///
/// Every trigger produces exactly one start event followed by exactly one of
/// the two terminal events. Events are immutable once emitted and have no
/// identity beyond their single delivery to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchEvent {
    /// A fetch has begun.
    GetCharactersStart(GetCharactersStartEvent),
    /// A fetch resolved with a character collection.
    GetCharactersSuccess(GetCharactersSuccessEvent),
    /// A fetch was rejected.
    GetCharactersFailure(GetCharactersFailureEvent),
}

impl FetchEvent {
    /// Get the event type.
    pub fn event_type(&self) -> FetchEventType {
        match self {
            FetchEvent::GetCharactersStart(_) => FetchEventType::GetCharactersStart,
            FetchEvent::GetCharactersSuccess(_) => FetchEventType::GetCharactersSuccess,
            FetchEvent::GetCharactersFailure(_) => FetchEventType::GetCharactersFailure,
        }
    }

    /// Whether a consumer folding this event should consider a fetch in
    /// flight.
    pub fn is_fetching(&self) -> bool {
        match self {
            FetchEvent::GetCharactersStart(e) => e.is_fetching,
            FetchEvent::GetCharactersSuccess(e) => e.is_fetching,
            FetchEvent::GetCharactersFailure(e) => e.is_fetching,
        }
    }

    /// Shorthand for a new start event.
    pub fn started() -> Self {
        FetchEvent::GetCharactersStart(GetCharactersStartEvent::new())
    }

    /// Shorthand for a new success event.
    pub fn succeeded(characters: Vec<Character>) -> Self {
        FetchEvent::GetCharactersSuccess(GetCharactersSuccessEvent::new(characters))
    }

    /// Shorthand for a new failure event.
    pub fn failed(error: impl Into<String>) -> Self {
        FetchEvent::GetCharactersFailure(GetCharactersFailureEvent::new(error))
    }
}

impl GetCharactersStartEvent {
    /// Create a new start event.
    pub fn new() -> Self {
        Self { is_fetching: true }
    }
}

impl Default for GetCharactersStartEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl GetCharactersSuccessEvent {
    /// Create a new success event. The collection is taken as-is, with no
    /// cloning, reordering or transformation.
    pub fn new(characters: Vec<Character>) -> Self {
        Self {
            is_fetching: false,
            characters,
        }
    }
}

impl GetCharactersFailureEvent {
    /// Create a new failure event. A blank error is replaced by
    /// [`DEFAULT_FETCH_ERROR`] so consumers never observe an empty message.
    pub fn new(error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            DEFAULT_FETCH_ERROR.to_string()
        } else {
            error
        };
        Self {
            is_fetching: false,
            error,
        }
    }
}
