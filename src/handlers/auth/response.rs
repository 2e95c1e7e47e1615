//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Public profile returned after registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Login confirmation (the session itself travels in the cookie)
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
}
