//! Type definitions for the roster fetch lifecycle
//!
//! This crate provides the shared contract between the fetch coordinator and
//! its consumers: the character records coming off the catalog wire and the
//! three fixed lifecycle events a fetch emits. Centralizing these types keeps
//! the coordinator, the catalog clients and any state store in agreement at
//! compile time, and lets each evolve independently as long as the event
//! vocabulary holds still.
//!
//! ## Example
//!
//! ```rust
//! use roster_types::{Character, FetchEvent};
//!
//! let event = FetchEvent::succeeded(vec![Character::named("Luke Skywalker")]);
//! assert!(!event.is_fetching());
//! ```

pub mod events;
pub mod types;

pub use events::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_tags_use_the_fixed_identifiers() {
        let start = serde_json::to_value(FetchEvent::started()).unwrap();
        assert_eq!(start["type"], "GET_CHARACTERS_START");
        assert_eq!(start["isFetching"], true);

        let success = serde_json::to_value(FetchEvent::succeeded(vec![])).unwrap();
        assert_eq!(success["type"], "GET_CHARACTERS_SUCCESS");
        assert_eq!(success["isFetching"], false);

        let failure = serde_json::to_value(FetchEvent::failed("boom")).unwrap();
        assert_eq!(failure["type"], "GET_CHARACTERS_FAILURE");
        assert_eq!(failure["error"], "boom");
        assert_eq!(failure["isFetching"], false);
    }

    #[test]
    fn constructors_are_referentially_transparent() {
        assert_eq!(FetchEvent::started(), FetchEvent::started());
        assert_eq!(GetCharactersStartEvent::new(), GetCharactersStartEvent::new());
        assert_eq!(
            FetchEvent::succeeded(vec![Character::named("Luke Skywalker")]),
            FetchEvent::succeeded(vec![Character::named("Luke Skywalker")]),
        );
    }

    #[test]
    fn success_keeps_the_collection_untouched() {
        let characters = vec![
            Character::named("Luke Skywalker"),
            Character::named("Leia Organa"),
        ];
        let event = GetCharactersSuccessEvent::new(characters.clone());
        assert_eq!(event.characters, characters);
    }

    #[test]
    fn blank_error_is_replaced_by_the_sentinel() {
        assert_eq!(GetCharactersFailureEvent::new("").error, DEFAULT_FETCH_ERROR);
        assert_eq!(GetCharactersFailureEvent::new("   ").error, DEFAULT_FETCH_ERROR);
        assert_eq!(GetCharactersFailureEvent::new("HTTP 500").error, "HTTP 500");
    }

    #[test]
    fn fetching_marker_matches_the_lifecycle_phase() {
        assert!(FetchEvent::started().is_fetching());
        assert!(!FetchEvent::succeeded(vec![]).is_fetching());
        assert!(!FetchEvent::failed("x").is_fetching());
    }

    #[test]
    fn event_type_discriminants() {
        assert_eq!(
            FetchEvent::started().event_type(),
            FetchEventType::GetCharactersStart
        );
        assert_eq!(
            FetchEvent::succeeded(vec![]).event_type(),
            FetchEventType::GetCharactersSuccess
        );
        assert_eq!(
            FetchEvent::failed("x").event_type(),
            FetchEventType::GetCharactersFailure
        );
    }

    #[test]
    fn unknown_character_fields_round_trip() {
        let raw = serde_json::json!({
            "name": "Luke Skywalker",
            "height": "172",
            "birth_year": "19BBY"
        });
        let character: Character = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(character.name, "Luke Skywalker");
        assert_eq!(serde_json::to_value(&character).unwrap(), raw);
    }

    #[test]
    fn tagged_event_deserializes_back() {
        let json = r#"{"type":"GET_CHARACTERS_FAILURE","isFetching":false,"error":"HTTP 500"}"#;
        let event: FetchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, FetchEvent::failed("HTTP 500"));
    }
}
