//! VidStream - User API Service
//!
//! This library provides the user-facing authentication boundary of the
//! VidStream video streaming platform: registration and login handlers
//! that validate incoming JSON, delegate to the account service, and
//! translate outcomes into HTTP responses and a session cookie.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: collaborator capabilities (account service, token issuer)
//! - **Models**: domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
