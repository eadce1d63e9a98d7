//! Web-facing error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use clinic_ehr_core::db::DbError;

/// Errors a handler can surface to the client.
///
/// Validation failures are not errors; they travel as notice redirects
/// (see [`crate::flash`]). `NotFound` covers both a missing record and a
/// child record reached through the wrong patient's URL.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] DbError),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("database lock poisoned")]
    LockPoisoned,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = WebError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_lock_poisoned_maps_to_500() {
        let response = WebError::LockPoisoned.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
