//! Authentication handler implementations

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{debug, error};
use validator::Validate;

use crate::{
    constants::{SESSION_COOKIE_NAME, SESSION_TTL_SECONDS},
    error::{AppError, AppResult},
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{LoginResponse, RegisterResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(payload) = payload.map_err(|err| {
        debug!(error = %err, "rejected malformed registration body");
        AppError::InvalidRequestBody
    })?;

    // Validate request (single batch, pass/fail)
    payload.validate()?;

    // Register user through the account service
    let user = state
        .accounts()
        .register_user(&payload.username, &payload.email, &payload.password)
        .await?;

    let response = RegisterResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password, issuing the session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let Json(payload) = payload.map_err(|err| {
        debug!(error = %err, "rejected malformed login body");
        AppError::InvalidRequestBody
    })?;

    // Same answer as a parse failure, so the caller cannot tell which
    // check rejected the request.
    payload
        .validate()
        .map_err(|_| AppError::InvalidRequestBody)?;

    // Authenticate through the account service
    let user = state
        .accounts()
        .authenticate_user(&payload.email, &payload.password)
        .await?;

    let token = state
        .tokens()
        .issue_session_token(user.id, &user.username)
        .map_err(|err| {
            error!(error = %err, "session token issuance failed");
            AppError::TokenGeneration
        })?;

    let response = LoginResponse {
        message: "Logged in successfully".to_string(),
    };

    Ok((jar.add(session_cookie(token)), Json(response)))
}

/// Build the session cookie carrying the signed token
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(cookie::time::Duration::seconds(SESSION_TTL_SECONDS))
        .build()
}
