//! Domain primitives, use-cases and ports for the accounts service.
//!
//! Purpose: keep account rules transport agnostic. Inbound adapters build
//! drafts and caller identities from requests, call [`AccountOperations`],
//! and map the resulting [`AccountError`] through [`Error`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload and stable code.
//! - User / UserId / Username / Email: the account record and its fields.
//! - SignUpDraft / SignInRequest / UpdateDraft: inbound payloads and their
//!   validated forms.
//! - SessionClaim / CallerIdentity / AccessToken: identity plumbing.
//! - AccountError: closed set of operation outcomes.
//! - AccountOperations: the façade every handler calls.

pub mod account_error;
pub mod account_operations;
pub mod account_requests;
pub mod authorization;
pub mod error;
pub mod ports;
pub mod session;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::account_error::AccountError;
pub use self::account_operations::AccountOperations;
pub use self::account_requests::{
    AGE_MIN, PASSWORD_MIN, SignInRequest, SignUpDraft, SignUpRequest, UpdateDraft, UpdateRequest,
};
pub use self::authorization::authorize_self_action;
pub use self::error::{Error, ErrorCode};
pub use self::session::{AccessToken, CallerIdentity, SessionClaim};
pub use self::trace_id::TraceId;
pub use self::user::{Email, USERNAME_MAX, User, UserId, UserValidationError, Username};
pub use self::validation::{FieldViolation, ValidationErrors, ViolationRule};
