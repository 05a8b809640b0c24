//! Account request payloads and their validation contracts.
//!
//! Inbound adapters build the raw `*Draft` values straight from request
//! bodies. Only the validated request types produced by `validate` reach the
//! account service, so an invalid payload can never be persisted.

use zeroize::Zeroizing;

use crate::domain::validation::{ValidationErrors, ViolationRule, Violations};
use crate::domain::{Email, Username};

/// Minimum password length accepted at sign-up.
pub const PASSWORD_MIN: usize = 6;
/// Minimum age accepted for an account.
pub const AGE_MIN: u8 = 8;

fn password(raw: String) -> Result<Zeroizing<String>, ViolationRule> {
    let raw = Zeroizing::new(raw);
    if raw.is_empty() {
        return Err(ViolationRule::Required);
    }
    if raw.chars().count() < PASSWORD_MIN {
        return Err(ViolationRule::TooShort { min: PASSWORD_MIN });
    }
    Ok(raw)
}

fn age(raw: u8) -> Result<u8, ViolationRule> {
    if raw < AGE_MIN {
        return Err(ViolationRule::BelowMinimum {
            min: u64::from(AGE_MIN),
        });
    }
    Ok(raw)
}

/// Unvalidated sign-up payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: Option<u8>,
}

impl SignUpDraft {
    /// Check every field rule and build a [`SignUpRequest`].
    pub fn validate(self) -> Result<SignUpRequest, ValidationErrors> {
        let Self {
            username,
            email,
            password: raw_password,
            age: raw_age,
        } = self;
        let mut violations = Violations::default();
        let username = violations.check("username", Username::new(username));
        let email = violations.check("email", Email::new(email));
        let password = violations.check("password", password(raw_password));
        let age = violations.check("age", raw_age.ok_or(ViolationRule::Required).and_then(age));

        match (username, email, password, age) {
            (Some(username), Some(email), Some(password), Some(age)) => Ok(SignUpRequest {
                username,
                email,
                password,
                age,
            }),
            _ => Err(violations.into_errors()),
        }
    }
}

/// Validated sign-up input handed to the account service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    username: Username,
    email: Email,
    password: Zeroizing<String>,
    age: u8,
}

impl SignUpRequest {
    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Plain-text password; hashing is the account service's concern.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

/// Credentials used solely to authenticate.
///
/// # Examples
/// ```
/// use accounts::domain::SignInRequest;
///
/// let creds = SignInRequest::try_from_parts(" ada@example.com ", "secret").unwrap();
/// assert_eq!(creds.email(), "ada@example.com");
/// assert!(SignInRequest::try_from_parts("", "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRequest {
    email: String,
    password: Zeroizing<String>,
}

impl SignInRequest {
    /// Construct credentials, requiring both parts to be present.
    ///
    /// The email is trimmed but not format-checked: any credential mismatch
    /// is the account service's call and surfaces as an authentication failure.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        let mut violations = Violations::default();
        let email = email.trim();
        let email = violations.check(
            "email",
            if email.is_empty() {
                Err(ViolationRule::Required)
            } else {
                Ok(email.to_owned())
            },
        );
        let password = violations.check(
            "password",
            if password.is_empty() {
                Err(ViolationRule::Required)
            } else {
                Ok(Zeroizing::new(password.to_owned()))
            },
        );

        match (email, password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(violations.into_errors()),
        }
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Unvalidated partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDraft {
    pub username: Option<String>,
    pub email: Option<String>,
    pub age: Option<u8>,
}

impl UpdateDraft {
    /// Check the rules of every present field and build an [`UpdateRequest`].
    pub fn validate(self) -> Result<UpdateRequest, ValidationErrors> {
        let mut violations = Violations::default();
        let username = violations.check_present("username", self.username, Username::new);
        let email = violations.check_present("email", self.email, Email::new);
        let age = violations.check_present("age", self.age, age);

        match (username, email, age) {
            (Some(username), Some(email), Some(age)) => Ok(UpdateRequest {
                username,
                email,
                age,
            }),
            _ => Err(violations.into_errors()),
        }
    }
}

/// Validated partial update for the caller's own account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub age: Option<u8>,
}

impl UpdateRequest {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.age.is_none()
    }
}
