//! Account service capability

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::models::User;

/// Errors returned by the account service
///
/// A closed variant set; callers switch on the variant, never on the
/// rendered message.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("email already exists")]
    EmailExists,

    #[error("username already exists")]
    UsernameExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user does not exist")]
    NotFound,

    #[error("account service failure")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AccountError {
    fn from(err: sqlx::Error) -> Self {
        AccountError::Internal(err.into())
    }
}

/// Collaborator owning user persistence, credential checks, and
/// uniqueness enforcement
///
/// Injected into handlers through [`AppState`](crate::AppState) so tests
/// can substitute a double.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a new user account
    async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError>;

    /// Check credentials and return the matching user
    async fn authenticate_user(&self, email: &str, password: &str) -> Result<User, AccountError>;
}
