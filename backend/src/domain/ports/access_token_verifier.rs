//! Driven port for bearer token verification.
//!
//! Verification (signature, expiry, revocation) belongs to the token
//! collaborator. Callers receive the identity claim exactly as the token
//! carried it and convert it with [`crate::domain::SessionClaim::user_id`].

use async_trait::async_trait;

use crate::domain::SessionClaim;

use super::define_port_error;

define_port_error! {
    /// Errors raised while verifying a bearer token.
    pub enum AccessTokenError {
        /// The token is unknown, expired, revoked or tampered with.
        Invalid => "access token is invalid",
        /// The verifier could not be reached.
        Unavailable { message: String } => "access token verifier unavailable: {message}",
    }
}

/// Verify bearer tokens and expose their identity claim.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenVerifier: Send + Sync {
    /// Verify `token` and return its identity claim.
    async fn verify(&self, token: &str) -> Result<SessionClaim, AccessTokenError>;
}
