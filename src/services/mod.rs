//! Collaborator services

pub mod account;
pub mod postgres;
pub mod token;

pub use account::{AccountError, AccountService};
pub use postgres::PostgresAccountService;
pub use token::{JwtTokenIssuer, TokenIssuer};
