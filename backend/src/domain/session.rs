//! Session claims and the caller identity derived from them.
//!
//! The authentication middleware verifies bearer tokens and attaches the raw
//! identity claim exactly as the token layer delivered it. Token claims are
//! loosely typed JSON, so a numeric id may arrive as an integer or as a
//! float. [`SessionClaim::user_id`] is the single checked conversion from that
//! raw value into a [`UserId`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::domain::{AccountError, UserId};

/// Largest integer a JSON float carries without loss of precision (`2^53`).
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_992.0;

/// Raw identity claim attached by the authentication middleware.
///
/// The claim is trusted (its signature and expiry were checked upstream) but
/// its shape is not.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionClaim(Value);

impl SessionClaim {
    /// Wrap a claim value exactly as the token layer produced it.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Raw claim value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Convert the claim into a user id.
    ///
    /// Accepts positive integers, and floats with no fractional part up to
    /// `2^53`. Everything else (strings, negatives, zero, fractions, values
    /// beyond `u64`) fails with [`AccountError::MalformedSession`].
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::{AccountError, SessionClaim};
    ///
    /// assert_eq!(SessionClaim::new(9).user_id().unwrap().get(), 9);
    /// assert_eq!(SessionClaim::new(9.0).user_id().unwrap().get(), 9);
    /// assert_eq!(
    ///     SessionClaim::new("9").user_id(),
    ///     Err(AccountError::MalformedSession)
    /// );
    /// ```
    pub fn user_id(&self) -> Result<UserId, AccountError> {
        match &self.0 {
            Value::Number(number) => number_to_id(number).ok_or(AccountError::MalformedSession),
            _ => Err(AccountError::MalformedSession),
        }
    }
}

fn number_to_id(number: &Number) -> Option<UserId> {
    if let Some(id) = number.as_u64() {
        return UserId::new(id).ok();
    }
    if number.is_i64() {
        return None;
    }
    let float = number.as_f64()?;
    if !float.is_finite() || float.fract() != 0.0 || !(1.0..=MAX_EXACT_FLOAT_ID).contains(&float) {
        return None;
    }
    // In range and integral, so the cast is exact.
    UserId::new(float as u64).ok()
}

/// Explicit caller argument for identity-scoped operations.
///
/// Handlers obtain it from the request once and pass it by reference, so
/// the façade never reads ambient request state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallerIdentity(Option<SessionClaim>);

impl CallerIdentity {
    /// A caller with no session claim.
    pub fn anonymous() -> Self {
        Self(None)
    }

    /// A caller carrying the claim attached by the authentication middleware.
    pub fn from_claim(claim: SessionClaim) -> Self {
        Self(Some(claim))
    }

    /// Resolve the caller's user id.
    ///
    /// Fails with [`AccountError::Unauthenticated`] when no claim is attached
    /// and with [`AccountError::MalformedSession`] when the claim has the
    /// wrong shape.
    pub fn require_user_id(&self) -> Result<UserId, AccountError> {
        self.0
            .as_ref()
            .ok_or(AccountError::Unauthenticated)?
            .user_id()
    }
}

impl From<Option<SessionClaim>> for CallerIdentity {
    fn from(value: Option<SessionClaim>) -> Self {
        Self(value)
    }
}

/// Opaque bearer token issued at sign-in.
///
/// The token format belongs to the issuing collaborator; this crate only
/// hands it to the client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
