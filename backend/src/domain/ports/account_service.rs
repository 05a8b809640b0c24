//! Driven port for the backing account service.
//!
//! The account service owns persistence, password hashing and token signing.
//! The façade in [`crate::domain::AccountOperations`] calls it once per
//! request and never retries; adapters surface faults immediately.

use async_trait::async_trait;

use crate::domain::{
    AccessToken, SignInRequest, SignUpRequest, UpdateRequest, User, UserId,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account service adapters.
    pub enum AccountServiceError {
        /// Credentials did not match an account. Unknown email and wrong
        /// password are intentionally indistinguishable.
        InvalidCredentials => "invalid email or password",
        /// The request conflicts with existing state (for example a taken email).
        Conflict { message: String } => "{message}",
        /// The service could not be reached.
        Connection { message: String } => "account service connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "account service query failed: {message}",
        /// Token issuance failed.
        TokenIssuance { message: String } => "failed to issue access token: {message}",
    }
}

/// Account lifecycle operations provided by the backing service.
///
/// Lookups that find nothing return `Ok(None)`; the service never hands back
/// a placeholder record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Return every account.
    async fn list_users(&self) -> Result<Vec<User>, AccountServiceError>;

    /// Fetch an account by id.
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, AccountServiceError>;

    /// Persist a new account from a validated sign-up request.
    async fn create(&self, request: &SignUpRequest) -> Result<User, AccountServiceError>;

    /// Check credentials and return the matching account.
    async fn authenticate(&self, request: &SignInRequest) -> Result<User, AccountServiceError>;

    /// Issue a bearer token whose claim identifies `user`.
    async fn issue_access_token(&self, user: &User) -> Result<AccessToken, AccountServiceError>;

    /// Apply a validated partial update to an account.
    async fn update_by_id(
        &self,
        id: UserId,
        request: &UpdateRequest,
    ) -> Result<User, AccountServiceError>;

    /// Remove an account, returning it when it existed.
    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, AccountServiceError>;
}
