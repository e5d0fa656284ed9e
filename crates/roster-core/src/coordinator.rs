//! Fetch lifecycle coordination.
//!
//! This module owns the one real contract in the workspace: a trigger
//! produces a strictly ordered pair of events, start then exactly one
//! terminal, delivered to a consumer channel, with every client rejection
//! absorbed and re-expressed as a failure event. Both public triggers share
//! a single private body, which is where the pair shape is enforced.

use std::sync::Arc;

use roster_client::CharacterClient;
use roster_types::{FetchEvent, FetchRequest, GetCharactersFailureEvent};

/// Delivery channel for fetch lifecycle events.
///
/// The coordinator assumes nothing about the consumer beyond "accepts one
/// event per call, in emission order". Any `Fn(FetchEvent)` closure works.
pub trait Dispatch: Send + Sync {
    /// Deliver one event to the consumer.
    fn dispatch(&self, event: FetchEvent);
}

impl<F> Dispatch for F
where
    F: Fn(FetchEvent) + Send + Sync,
{
    fn dispatch(&self, event: FetchEvent) {
        self(event)
    }
}

/// How a completed fetch ended, reported only after the terminal event has
/// been delivered.
///
/// Not a `Result`: a rejected fetch has already been expressed as a failure
/// event, and nothing propagates past the trigger call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The fetch resolved; carries the number of characters delivered.
    Loaded(usize),
    /// The fetch was rejected; carries the emitted error message.
    Failed(String),
}

impl FetchOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded(_))
    }
}

/// Drives the fetch lifecycle against an injected catalog client.
///
/// Holds nothing but the client handle, so overlapping triggers share no
/// mutable coordinator state; each invocation produces its own ordered
/// start/terminal pair.
pub struct FetchCoordinator<C: ?Sized> {
    client: Arc<C>,
}

impl<C: ?Sized> Clone for FetchCoordinator<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<C: CharacterClient + ?Sized> FetchCoordinator<C> {
    /// Create a coordinator around a catalog client.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch the full character listing.
    pub async fn get_characters<D: Dispatch>(&self, dispatch: &D) -> FetchOutcome {
        self.run(FetchRequest::ListAll, dispatch).await
    }

    /// Fetch the characters matching `query`, forwarded to the client
    /// unmodified, with no trimming and no validation.
    pub async fn search_characters<D: Dispatch>(&self, dispatch: &D, query: &str) -> FetchOutcome {
        self.run(FetchRequest::search(query), dispatch).await
    }

    // One start dispatch before the await, one infallible terminal
    // conversion, one terminal dispatch.
    async fn run<D: Dispatch>(&self, request: FetchRequest, dispatch: &D) -> FetchOutcome {
        log::debug!("fetch triggered: {:?}", request);
        dispatch.dispatch(FetchEvent::started());

        let resolved = match &request {
            FetchRequest::ListAll => self.client.list_all().await,
            FetchRequest::Search { query } => self.client.search(query).await,
        };

        let (terminal, outcome) = match resolved {
            Ok(characters) => {
                let outcome = FetchOutcome::Loaded(characters.len());
                (FetchEvent::succeeded(characters), outcome)
            }
            Err(err) => {
                let event = GetCharactersFailureEvent::new(err.to_string());
                log::error!("fetch failed: {}", event.error);
                let outcome = FetchOutcome::Failed(event.error.clone());
                (FetchEvent::GetCharactersFailure(event), outcome)
            }
        };

        dispatch.dispatch(terminal);
        outcome
    }
}
