//! Consumer-side state folding.
//!
//! The reducer is pure and total over the three event variants; the store is
//! the single-threaded fold the emission-order guarantee delegates to. The
//! coordinator never touches this state; it only emits events.

use roster_types::{Character, FetchEvent};
use serde::{Deserialize, Serialize};

/// Presentable fetch state folded from lifecycle events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    /// The most recently loaded roster.
    pub characters: Vec<Character>,
    /// Whether a fetch is currently in flight.
    #[serde(rename = "isFetching")]
    pub is_fetching: bool,
    /// The error the last fetch ended with, if it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            is_fetching: false,
            error: None,
        }
    }
}

/// Fold one event into the state.
///
/// Start raises the fetching flag and clears any stale error. Success
/// replaces the roster. Failure records the error and keeps whatever roster
/// was already loaded.
pub fn reduce(state: CharacterState, event: &FetchEvent) -> CharacterState {
    match event {
        FetchEvent::GetCharactersStart(_) => CharacterState {
            is_fetching: true,
            error: None,
            ..state
        },
        FetchEvent::GetCharactersSuccess(success) => CharacterState {
            characters: success.characters.clone(),
            is_fetching: false,
            error: None,
        },
        FetchEvent::GetCharactersFailure(failure) => CharacterState {
            is_fetching: false,
            error: Some(failure.error.clone()),
            ..state
        },
    }
}

/// Owns a state value and folds events into it one at a time.
#[derive(Debug, Default)]
pub struct CharacterStore {
    state: CharacterState,
}

impl CharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event, in the order events were emitted.
    pub fn apply(&mut self, event: &FetchEvent) {
        self.state = reduce(std::mem::take(&mut self.state), event);
    }

    /// The current folded state.
    pub fn state(&self) -> &CharacterState {
        &self.state
    }
}
