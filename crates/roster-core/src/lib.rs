//! Core fetch lifecycle coordination for the roster client.
//!
//! This crate turns a fetch trigger (list the whole catalog, or search it)
//! into a deterministic two-event emission a consumer can fold into
//! presentable state. The coordinator owns the ordering and error-absorption
//! contract; the reducer and store own the fold; configuration and error
//! types cover the plumbing around them. The catalog client is injected, so
//! everything here runs identically against HTTP or canned fixtures.

pub mod config;
pub mod coordinator;
pub mod errors;
pub mod store;

pub use config::{ApiConfig, RosterConfig, DEFAULT_BASE_URL};
pub use coordinator::{Dispatch, FetchCoordinator, FetchOutcome};
pub use errors::RosterError;
pub use store::{reduce, CharacterState, CharacterStore};
