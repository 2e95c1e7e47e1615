//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::services::{account::AccountService, token::TokenIssuer};

/// Shared application state
///
/// Carries the collaborator capabilities as trait objects so handlers
/// stay decoupled from the concrete account store and token signer, and
/// tests can substitute doubles.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Account service owning user persistence and credential checks
    accounts: Box<dyn AccountService>,

    /// Issuer of signed session tokens
    tokens: Box<dyn TokenIssuer>,
}

impl AppState {
    /// Create a new application state
    pub fn new(accounts: Box<dyn AccountService>, tokens: Box<dyn TokenIssuer>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { accounts, tokens }),
        }
    }

    /// Get a reference to the account service
    pub fn accounts(&self) -> &dyn AccountService {
        self.inner.accounts.as_ref()
    }

    /// Get a reference to the token issuer
    pub fn tokens(&self) -> &dyn TokenIssuer {
        self.inner.tokens.as_ref()
    }
}
