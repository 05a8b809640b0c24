//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod access_token_verifier;
mod account_service;

#[cfg(test)]
pub use access_token_verifier::MockAccessTokenVerifier;
pub use access_token_verifier::{AccessTokenError, AccessTokenVerifier};
#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::{AccountService, AccountServiceError};
