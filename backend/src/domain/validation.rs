//! Structured validation failures for inbound account payloads.
//!
//! Validation collects every violated field rule instead of stopping at the
//! first one, so clients can fix a payload in a single round trip.

use std::fmt;

use crate::domain::UserValidationError;

/// A rule a field value failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationRule {
    /// The value was missing or blank.
    Required,
    /// The value did not have the expected shape (for example an email).
    InvalidFormat,
    /// The value was shorter than allowed.
    TooShort { min: usize },
    /// The value was longer than allowed.
    TooLong { max: usize },
    /// The value was below the allowed minimum.
    BelowMinimum { min: u64 },
}

impl fmt::Display for ViolationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::InvalidFormat => write!(f, "has an invalid format"),
            Self::TooShort { min } => write!(f, "must be at least {min} characters"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
            Self::BelowMinimum { min } => write!(f, "must be at least {min}"),
        }
    }
}

impl From<UserValidationError> for ViolationRule {
    fn from(value: UserValidationError) -> Self {
        match value {
            UserValidationError::ZeroId => Self::BelowMinimum { min: 1 },
            UserValidationError::EmptyUsername | UserValidationError::EmptyEmail => Self::Required,
            UserValidationError::UsernameTooLong { max } => Self::TooLong { max },
            UserValidationError::InvalidEmail => Self::InvalidFormat,
        }
    }
}

/// One violated rule on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: ViolationRule,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rule)
    }
}

/// Non-empty list of field violations, in payload field order.
///
/// # Examples
/// ```
/// use accounts::domain::{SignUpDraft, ViolationRule};
///
/// let errors = SignUpDraft::default().validate().unwrap_err();
/// assert_eq!(errors.violations()[0].field, "username");
/// assert_eq!(errors.violations()[0].rule, ViolationRule::Required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// Violations in the order the fields were checked.
    pub fn violations(&self) -> &[FieldViolation] {
        self.0.as_slice()
    }

    /// Whether a given field has at least one violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulates violations while a payload is checked field by field.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<FieldViolation>);

impl Violations {
    /// Record the outcome of one field check, yielding the value on success.
    pub(crate) fn check<T, E>(&mut self, field: &'static str, outcome: Result<T, E>) -> Option<T>
    where
        E: Into<ViolationRule>,
    {
        match outcome {
            Ok(value) => Some(value),
            Err(rule) => {
                self.0.push(FieldViolation {
                    field,
                    rule: rule.into(),
                });
                None
            }
        }
    }

    /// Check an optional field, recording violations only for present values.
    pub(crate) fn check_present<T, U, E>(
        &mut self,
        field: &'static str,
        value: Option<T>,
        validate: impl FnOnce(T) -> Result<U, E>,
    ) -> Option<Option<U>>
    where
        E: Into<ViolationRule>,
    {
        match value {
            None => Some(None),
            Some(raw) => self.check(field, validate(raw)).map(Some),
        }
    }

    pub(crate) fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_joins_violations_in_order() {
        let mut violations = Violations::default();
        let _ = violations.check::<(), _>("email", Err(ViolationRule::InvalidFormat));
        let _ = violations.check::<(), _>("password", Err(ViolationRule::TooShort { min: 6 }));
        let errors = violations.into_errors();
        assert_eq!(
            errors.to_string(),
            "email has an invalid format; password must be at least 6 characters"
        );
        assert!(errors.has_field("password"));
        assert!(!errors.has_field("username"));
    }

    #[rstest]
    fn check_present_skips_absent_values() {
        let mut violations = Violations::default();
        let outcome =
            violations.check_present("age", None::<u8>, |_| Err::<u8, _>(ViolationRule::Required));
        assert_eq!(outcome, Some(None));
        assert!(violations.into_errors().violations().is_empty());
    }

    #[rstest]
    #[case(UserValidationError::EmptyEmail, ViolationRule::Required)]
    #[case(UserValidationError::InvalidEmail, ViolationRule::InvalidFormat)]
    #[case(
        UserValidationError::UsernameTooLong { max: 64 },
        ViolationRule::TooLong { max: 64 }
    )]
    fn user_validation_errors_map_to_rules(
        #[case] error: UserValidationError,
        #[case] expected: ViolationRule,
    ) {
        assert_eq!(ViolationRule::from(error), expected);
    }
}
