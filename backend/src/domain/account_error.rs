//! Closed set of failure outcomes for account operations.
//!
//! Every façade operation fails with exactly one of these variants. The
//! conversion into [`Error`] is the only place outcomes are mapped to error
//! codes, so adding a variant forces every mapping to be revisited.

use thiserror::Error as ThisError;

use crate::domain::{Error, ValidationErrors};

/// Failure outcome of an account operation.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum AccountError {
    /// A required path parameter was missing, zero, or not a number.
    #[error("invalid required param")]
    InvalidParam,
    /// The request body broke one or more field rules.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// No session claim was attached to the request.
    #[error("invalid user session")]
    Unauthenticated,
    /// A session claim was attached but is not a valid user id.
    #[error("invalid user id session")]
    MalformedSession,
    /// The caller targeted an account other than their own.
    #[error("invalid user request")]
    Forbidden,
    /// The account does not exist.
    #[error("user not found")]
    NotFound,
    /// Sign-in was rejected; carries the account service's message.
    #[error("{0}")]
    AuthenticationFailed(String),
    /// The account service or token issuance failed.
    #[error("{0}")]
    Downstream(String),
}

impl From<ValidationErrors> for AccountError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<AccountError> for Error {
    fn from(value: AccountError) -> Self {
        let message = value.to_string();
        match value {
            AccountError::InvalidParam
            | AccountError::Validation(_)
            | AccountError::MalformedSession => Error::invalid_request(message),
            // Ownership mismatches are deliberately reported like missing auth.
            AccountError::Unauthenticated
            | AccountError::Forbidden
            | AccountError::AuthenticationFailed(_) => Error::unauthorized(message),
            AccountError::NotFound => Error::not_found(message),
            AccountError::Downstream(_) => Error::internal(message),
        }
    }
}
