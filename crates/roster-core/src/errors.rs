//! Error types for the workspace's ambient failure modes.
//!
//! Client rejections never surface here; the coordinator absorbs them and
//! re-expresses them as failure events. What remains is the plumbing around
//! the fetch path: configuration loading and I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid configuration file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
