//! Postgres-backed account service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::User;

use super::account::{AccountError, AccountService};

/// Account service backed by the platform's Postgres user store
pub struct PostgresAccountService {
    pool: PgPool,
}

impl PostgresAccountService {
    /// Create a new account service over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountError> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> Result<String, AccountError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> Result<bool, AccountError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AccountError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[async_trait]
impl AccountService for PostgresAccountService {
    async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        if self.find_by_username(username).await?.is_some() {
            return Err(AccountError::UsernameExists);
        }

        if self.find_by_email(email).await?.is_some() {
            return Err(AccountError::EmailExists);
        }

        let password_hash = Self::hash_password(password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn authenticate_user(&self, email: &str, password: &str) -> Result<User, AccountError> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or(AccountError::NotFound)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = PostgresAccountService::hash_password("correct horse battery").unwrap();

        assert_ne!(hash, "correct horse battery");
        assert!(PostgresAccountService::verify_password("correct horse battery", &hash).unwrap());
        assert!(!PostgresAccountService::verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hash1 = PostgresAccountService::hash_password("same input").unwrap();
        let hash2 = PostgresAccountService::hash_password("same input").unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(PostgresAccountService::verify_password("whatever", "not-a-phc-string").is_err());
    }
}
