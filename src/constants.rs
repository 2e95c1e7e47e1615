//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Upper bound on a single request's lifetime, in seconds
pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// ACCOUNT VALIDATION
// =============================================================================

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// SESSION COOKIE
// =============================================================================

/// Name of the session cookie issued on login
pub const SESSION_COOKIE_NAME: &str = "auth_token";

/// Session lifetime in seconds (24 hours), for both the cookie and the token
pub const SESSION_TTL_SECONDS: i64 = 86400;
