//! Route-model error type.

use nav_core::NavError;
use thiserror::Error;

/// Errors produced by `nav-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("routing response contained no routes: {message}")]
    NoRoutes { message: String },

    #[error("invalid route: {0}")]
    Invalid(#[from] NavError),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
