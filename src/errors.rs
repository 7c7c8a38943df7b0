// Error types and user-friendly error messages
//
// `ApiError` is what HTTP handlers return; every variant renders as a JSON
// body with a `message` field. The free functions format startup failures
// for the terminal with a suggestion attached.

use anyhow::{Context, Result};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use thiserror::Error;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is absent or empty
    #[error("{0}")]
    MissingInput(&'static str),

    /// The body is not JSON or a field has the wrong type
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Lookup by id, name or key found nothing
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Request failed");
                "Internal server error".to_string()
            }
            other => {
                tracing::debug!(status = status.as_u16(), error = %other, "Request rejected");
                other.to_string()
            }
        };

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

/// Wrap an error with user-friendly context
pub trait UserFriendlyError {
    /// Add user-friendly context with a suggestion
    fn user_context_with_suggestion(self, problem: &str, suggestion: &str) -> Self;
}

impl<T> UserFriendlyError for Result<T> {
    fn user_context_with_suggestion(self, problem: &str, suggestion: &str) -> Self {
        self.with_context(|| {
            format!(
                "{}\n\n\x1b[1;33mSuggestion:\x1b[0m {}",
                problem, suggestion
            )
        })
    }
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(path: &str, error: impl fmt::Display) -> String {
    format!(
        "Failed to parse config file {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat {}\x1b[0m\n\n\
        2. Known keys:\n\
           • [server] bind_address = \"127.0.0.1:3000\"\n\
           • [triage] tables_path = \"/path/to/crisis_tables.json\"\n\n\
        3. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Unclosed brackets []",
        path, error, path
    )
}

/// Format a crisis tables validation error with helpful suggestions
pub fn tables_invalid_error(path: &str, error: impl fmt::Display) -> String {
    format!(
        "Crisis tables in {} are invalid\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Validate the file:\n\
           \x1b[36mcbt-diary check-tables {}\x1b[0m\n\n\
        2. Every category (selfHarm, harmOthers, elderAbuse, childAbuse)\n\
           must appear exactly once with at least one phrase\n\n\
        3. Remove [triage] tables_path from the config to use the built-in tables",
        path, error, path
    )
}

/// Format a bind failure with helpful suggestions
pub fn bind_failed_error(address: &str) -> String {
    format!(
        "Could not listen on {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Another process is using the port\n\
        • Invalid bind address\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Pick another address:\n\
           \x1b[36mcbt-diary serve --bind 127.0.0.1:3001\x1b[0m\n\n\
        2. Or set it in the environment:\n\
           \x1b[36mCBT_DIARY_BIND=127.0.0.1:3001 cbt-diary serve\x1b[0m",
        address
    )
}
