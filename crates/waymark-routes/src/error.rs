//! Route table error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutesError {
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Duplicate parameter :{name} in route path {pattern:?}")]
    DuplicateParam { pattern: String, name: String },
}
