//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid navigation target {target:?}: {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("History has no entry {delta:+} steps away")]
    HistoryOutOfRange { delta: i64 },
}
