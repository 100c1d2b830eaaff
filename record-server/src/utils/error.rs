//! Unified error handling
//!
//! [`AppError`] is what handlers return. Every variant renders as a status
//! code plus a short plain-text body; nothing structured is sent back.
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | NotFound | 404 | `Not found` |
//! | Validation | 400 | the validation message |
//! | Database | 500 | the handler's generic message |
//!
//! # Example
//!
//! ```ignore
//! Err(AppError::not_found())
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::db::repository::RepoError;

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No record with the requested id (404)
    #[error("Not found")]
    NotFound,

    /// Malformed id or request body (400)
    #[error("{0}")]
    Validation(String),

    /// Store failure (500)
    ///
    /// `public` is what the client sees, `detail` only reaches the log.
    #[error("{public}: {detail}")]
    Database {
        public: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Map a store error, using `public` as the 500 body
    pub fn from_repo(err: RepoError, public: &'static str) -> Self {
        match err {
            RepoError::InvalidIdentifier(id) => Self::Validation(format!("Invalid record id: {id}")),
            RepoError::Database(detail) => Self::Database { public, detail },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database { public, detail } => {
                error!(target: "database", error = %detail, "{}", public);
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::not_found().into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn repo_errors_map_to_client_or_server_faults() {
        let invalid = AppError::from_repo(RepoError::InvalidIdentifier("xyz".into()), "Error fetching record");
        assert!(matches!(invalid, AppError::Validation(ref msg) if msg.contains("xyz")));

        let db = AppError::from_repo(RepoError::Database("down".into()), "Error adding record");
        assert_eq!(
            db.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
