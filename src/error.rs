//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::account::AccountError;

/// Application-wide error type
///
/// A closed set of variants; handlers and collaborators select one by
/// variant, never by matching on message text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Malformed input
    #[error("Invalid Request Body")]
    InvalidRequestBody,

    #[error("Validation failed")]
    ValidationFailed,

    // Conflicts
    #[error("Email already exists")]
    EmailExists,

    #[error("Username already taken")]
    UsernameTaken,

    // Authentication errors
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User does not exist")]
    UserNotFound,

    // Internal errors
    #[error("Failed to generate token")]
    TokenGeneration,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody | Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::EmailExists | Self::UsernameTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::TokenGeneration | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log internal causes but don't expose details to clients
        if let AppError::Internal(err) = &self {
            tracing::error!("Internal error: {:?}", err);
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        // The whole batch collapses to one generic answer; no field-level
        // detail leaves the handler.
        AppError::ValidationFailed
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::EmailExists => AppError::EmailExists,
            AccountError::UsernameExists => AppError::UsernameTaken,
            AccountError::InvalidCredentials => AppError::InvalidCredentials,
            AccountError::NotFound => AppError::UserNotFound,
            AccountError::Internal(err) => AppError::Internal(err),
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
