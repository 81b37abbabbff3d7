//! Core error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Route table error: {0}")]
    Routes(#[from] waymark_routes::RoutesError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] waymark_navigation::NavigationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}

/// Error handed to error components. Recovered at the nearest route that
/// declares an error component; never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteError {
    #[error("No route matches {pathname}")]
    NotFound { pathname: String },

    #[error("Route {route_id} failed to render: {message}")]
    Render { route_id: String, message: String },
}

impl RouteError {
    /// HTTP-style status, for display
    pub fn status(&self) -> u16 {
        match self {
            RouteError::NotFound { .. } => 404,
            RouteError::Render { .. } => 500,
        }
    }
}

/// Returned by a component that cannot render
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
